//! Conversions between hexadecimal, decimal and binary integers of any size.
//!
//! Unparseable input has no meaningful conversion, so these transforms
//! return an empty string instead of an error.

use crate::constants::numeric::BINARY_GROUP_WIDTH;
use crate::error::Result;
use crate::string_utils::{group_digits, strip_whitespace};
use num::{BigUint, Num};

fn parse_radix(digits: &str, prefixes: [&str; 2], radix: u32) -> Option<BigUint> {
    let digits = prefixes
        .iter()
        .find_map(|prefix| digits.strip_prefix(*prefix))
        .unwrap_or(digits);
    BigUint::from_str_radix(digits, radix).ok()
}

fn parse_hex(text: &str) -> Option<BigUint> {
    parse_radix(text.trim(), ["0x", "0X"], 16)
}

fn parse_decimal(text: &str) -> Option<BigUint> {
    BigUint::from_str_radix(text.trim(), 10).ok()
}

fn parse_binary(text: &str) -> Option<BigUint> {
    parse_radix(&strip_whitespace(text), ["0b", "0B"], 2)
}

fn to_hex(value: BigUint) -> String {
    value.to_str_radix(16)
}

fn to_decimal(value: BigUint) -> String {
    value.to_str_radix(10)
}

fn to_binary(value: BigUint) -> String {
    group_digits(&value.to_str_radix(2), BINARY_GROUP_WIDTH)
}

pub fn hex_to_decimal(text: &str) -> Result<String> {
    Ok(parse_hex(text).map(to_decimal).unwrap_or_default())
}

pub fn decimal_to_hex(text: &str) -> Result<String> {
    Ok(parse_decimal(text).map(to_hex).unwrap_or_default())
}

pub fn hex_to_binary(text: &str) -> Result<String> {
    Ok(parse_hex(text).map(to_binary).unwrap_or_default())
}

pub fn binary_to_hex(text: &str) -> Result<String> {
    Ok(parse_binary(text).map(to_hex).unwrap_or_default())
}

pub fn decimal_to_binary(text: &str) -> Result<String> {
    Ok(parse_decimal(text).map(to_binary).unwrap_or_default())
}

pub fn binary_to_decimal(text: &str) -> Result<String> {
    Ok(parse_binary(text).map(to_decimal).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_decimal_round_trip() {
        assert_eq!(hex_to_decimal("1a").unwrap(), "26");
        assert_eq!(decimal_to_hex(&hex_to_decimal("1a").unwrap()).unwrap(), "1a");
        assert_eq!(hex_to_decimal(" 0xFF ").unwrap(), "255");
        assert_eq!(decimal_to_hex("255").unwrap(), "ff");
    }

    #[test]
    fn test_binary_round_trip() {
        assert_eq!(binary_to_decimal("1010 1100").unwrap(), "172");
        assert_eq!(
            decimal_to_binary(&binary_to_decimal("1010 1100").unwrap()).unwrap(),
            "10101100"
        );
        assert_eq!(binary_to_hex("0b1111 1111").unwrap(), "ff");
        assert_eq!(hex_to_binary("ff").unwrap(), "11111111");
    }

    #[test]
    fn test_binary_grouping() {
        assert_eq!(decimal_to_binary("5").unwrap(), "101");
        assert_eq!(decimal_to_binary("256").unwrap(), "10000000 0");
        assert_eq!(hex_to_binary("ffff").unwrap(), "11111111 11111111");
        assert_eq!(decimal_to_binary("0").unwrap(), "0");
    }

    #[test]
    fn test_big_numbers() {
        assert_eq!(
            hex_to_decimal("ffffffffffffffffffffffffffffffff").unwrap(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_unparseable_input_is_empty() {
        assert_eq!(hex_to_decimal("xyz").unwrap(), "");
        assert_eq!(decimal_to_hex("12abc").unwrap(), "");
        assert_eq!(decimal_to_binary("-3").unwrap(), "");
        assert_eq!(binary_to_decimal("1021").unwrap(), "");
        assert_eq!(binary_to_hex("").unwrap(), "");
        assert_eq!(hex_to_binary("0x").unwrap(), "");
    }
}
