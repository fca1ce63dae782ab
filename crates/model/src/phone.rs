//! Phone number normalization and display formatting
//!
//! The stored value is always the bare digit string. The formatted value is
//! derived from it on every edit, never the other way around.

/// Maximum number of digits kept (two-digit area code plus a nine-digit
/// mobile number)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Strip every non-digit character and cap the result at
/// [`MAX_PHONE_DIGITS`]
pub fn digits_only(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Format a phone number for display
///
/// - 10 digits: `(DD) DDDD-DDDD`
/// - 11 digits: `(DD) DDDDD-DDDD`
///
/// Shorter inputs cannot fill either pattern and are returned as the bare
/// digit string, so the user sees what they typed while still typing.
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => digits,
    }
}
