use unicode_segmentation::UnicodeSegmentation;

/// Uppercases the first grapheme of the given word, leaving the remainder unchanged.
///
/// # Arguments
///
/// * `word` - The word to capitalize
///
/// # Returns
///
/// The capitalized word
///
/// # Examples
///
/// ```
/// use textmorph::string_utils::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("hELLO"), "HELLO");
/// assert_eq!(capitalize("élan"), "Élan");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

/// Parses a base-10 integer from the leading digits of the trimmed input.
///
/// An optional `+` or `-` sign is accepted, and anything following the
/// leading digits is ignored.
///
/// # Arguments
///
/// * `input` - The text to parse
///
/// # Returns
///
/// The parsed integer, or `None` if the input does not start with digits
/// or the value does not fit in an `i64`
///
/// # Examples
///
/// ```
/// use textmorph::string_utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 1700000000abc"), Some(1700000000));
/// assert_eq!(parse_leading_int("-42"), Some(-42));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'-' | b'+')));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Splits a digit string into consecutive windows of `width` characters
/// separated by single spaces. The last window may be shorter.
///
/// # Examples
///
/// ```
/// use textmorph::string_utils::group_digits;
///
/// assert_eq!(group_digits("10101100", 8), "10101100");
/// assert_eq!(group_digits("1010110011", 8), "10101100 11");
/// ```
pub fn group_digits(digits: &str, width: usize) -> String {
    digits
        .as_bytes()
        .chunks(width.max(1))
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Removes every whitespace character from the input.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bar"), "Bar");
        assert_eq!(capitalize("BAZ"), "BAZ");
        assert_eq!(capitalize("1st"), "1st");
        assert_eq!(capitalize("ßtraße"), "SStraße");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("+15ms"), Some(15));
        assert_eq!(parse_leading_int("  -"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775807s"), Some(i64::MAX));
        assert_eq!(parse_leading_int("9223372036854775808"), None);
        assert_eq!(parse_leading_int("--1"), None);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("", 8), "");
        assert_eq!(group_digits("101", 8), "101");
        assert_eq!(group_digits("1111111100000000", 8), "11111111 00000000");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" 1010 1100\n"), "10101100");
    }
}
