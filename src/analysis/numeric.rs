use crate::error::{Error, Result};

/// Joins every digit of `text`, left to right, into one integer.
///
/// Everything that is not a digit is dropped, decimal points included, so
/// `"$1,234.50"` reads as `123450`.
pub fn extract_number(text: &str) -> Result<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(Error::Parse(text.to_string()));
    }
    digits.parse::<u64>().map_err(|_| Error::Parse(text.to_string()))
}

pub fn has_digits(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
