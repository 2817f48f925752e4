//! Decimal digit classification shared by the digit count and digit run rules.

use unicode_general_category::{GeneralCategory, get_general_category};

/// True for any character of Unicode category Nd (decimal number).
pub fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Numeric value of a decimal digit, `None` for anything else.
///
/// Nd characters are encoded in contiguous ascending blocks of ten starting
/// at zero, so the value is the offset from the start of the run of Nd code
/// points, modulo ten.
pub fn decimal_value(c: char) -> Option<u32> {
    if !is_decimal_digit(c) {
        return None;
    }
    let code = c as u32;
    let mut start = code;
    while let Some(previous) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(previous) {
            break;
        }
        start -= 1;
    }
    Some((code - start) % 10)
}
