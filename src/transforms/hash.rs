use crate::error::Result;
use ::md5::Md5;
use ::sha1::Sha1;
use sha2::{Digest, Sha256};

/// Hex-encoded digest of the UTF-8 bytes of the text
fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}

pub fn md5(text: &str) -> Result<String> {
    Ok(hex_digest::<Md5>(text))
}

pub fn sha1(text: &str) -> Result<String> {
    Ok(hex_digest::<Sha1>(text))
}

pub fn sha256(text: &str) -> Result<String> {
    Ok(hex_digest::<Sha256>(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_vectors() {
        assert_eq!(md5("abc").unwrap(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            sha1("abc").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            sha256("abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(md5("").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            sha256("").unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
