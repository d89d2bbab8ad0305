use crate::classify::{is_alpha_lower, is_alpha_upper};

const CASE_BIT: i32 = 0x20;

/// `A-Z` become `a-z`. Every other input, ASCII or not, comes back unchanged.
#[inline]
pub const fn to_lower(ch: i32) -> i32 {
    if is_alpha_upper(ch) {
        ch | CASE_BIT
    } else {
        ch
    }
}

/// `a-z` become `A-Z`. Every other input, ASCII or not, comes back unchanged.
#[inline]
pub const fn to_upper(ch: i32) -> i32 {
    if is_alpha_lower(ch) {
        ch & !CASE_BIT
    } else {
        ch
    }
}
