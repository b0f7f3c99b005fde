//! Validation of numbers typed in by the user

use crate::error::InputError;
use std::num::IntErrorKind;

/// Smallest integer accepted as a primality candidate
pub const MIN_CANDIDATE: u64 = 2;

/// Parse a base-10 integer that is at least `minimum`.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. Negative numbers
/// are reported as [InputError::BelowMinimum] rather than as malformed text.
pub fn parse_number(text: &str, minimum: u64) -> Result<u64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match text.parse::<u64>() {
        Ok(value) if value < minimum => Err(InputError::BelowMinimum {
            value: value.to_string(),
            minimum,
        }),
        Ok(value) => Ok(value),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            Err(InputError::TooLarge(text.to_string()))
        }
        Err(_) if is_negative_integer(text) => Err(InputError::BelowMinimum {
            value: text.to_string(),
            minimum,
        }),
        Err(_) => Err(InputError::NotAnInteger(text.to_string())),
    }
}

fn is_negative_integer(text: &str) -> bool {
    match text.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Return whether the text is a base-10 integer not smaller than 2
#[inline]
pub fn is_valid_input(text: &str) -> bool {
    parse_number(text, MIN_CANDIDATE).is_ok()
}
