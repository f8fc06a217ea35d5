use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("invalid base64 input. Cause : {0}")]
    Base64(#[from] ::base64::DecodeError),
    #[error("unable to parse date \"{0}\"")]
    Date(String),
    #[error("transform with the same label already exists : \"{0}\"")]
    DuplicateTransform(String),
    #[error("invalid hex input. Cause : {0}")]
    Hex(#[from] ::hex::FromHexError),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(String),
    #[error("malformed JWT : {0}")]
    Jwt(String),
    #[error("unable to parse number \"{0}\"")]
    Number(String),
    #[error("timestamp out of range : {0}")]
    Timestamp(i64),
    #[error("unable to parse URL. Cause : {0}")]
    Url(#[from] ::url::ParseError),
    #[error("malformed percent-encoded input : {0}")]
    UrlDecode(String),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ArgsProcessingError(_) => {
            writeln!(output, "{}: {}", Red.paint("[args error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[textmorph error]"), error).ok();
        }
    };
}
