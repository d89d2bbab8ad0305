//! Single code point predicates.
//!
//! Contiguous classes are answered with one or two range comparisons. Classes
//! that are a union of scattered ranges, or that exclude one letter case, are
//! answered with a single lookup in [`CHAR_FLAGS`](crate::CHAR_FLAGS) and a
//! mask-and-compare. Either way, every input outside `0x00-0x7F` is `false`.

use crate::flags::CharFlags;
use crate::table::char_flags;

#[inline]
const fn has(ch: i32, flag: CharFlags) -> bool {
    char_flags(ch).intersects(flag)
}

/// `flag` set, `other_case` not set.
#[inline]
const fn has_without(ch: i32, flag: CharFlags, other_case: CharFlags) -> bool {
    char_flags(ch).masked_eq(flag.union(other_case), flag)
}

/// `0x00-0x7F`.
#[inline]
pub const fn is_ascii(ch: i32) -> bool {
    matches!(ch, 0x00..=0x7F)
}

/// `a-z` or `A-Z`.
#[inline]
pub const fn is_alpha(ch: i32) -> bool {
    is_alpha_lower(ch) || is_alpha_upper(ch)
}

/// `a-z`.
#[inline]
pub const fn is_alpha_lower(ch: i32) -> bool {
    matches!(ch, 0x61..=0x7A)
}

/// `A-Z`.
#[inline]
pub const fn is_alpha_upper(ch: i32) -> bool {
    matches!(ch, 0x41..=0x5A)
}

/// `0-9`.
#[inline]
pub const fn is_digit(ch: i32) -> bool {
    matches!(ch, 0x30..=0x39)
}

/// `0-9`, `a-f` or `A-F`.
#[inline]
pub const fn is_hex_digit(ch: i32) -> bool {
    has(ch, CharFlags::HEX_DIGIT)
}

/// `0-9` or `a-f`.
#[inline]
pub const fn is_hex_digit_lower(ch: i32) -> bool {
    has_without(ch, CharFlags::HEX_DIGIT, CharFlags::UPPER)
}

/// `0-9` or `A-F`.
#[inline]
pub const fn is_hex_digit_upper(ch: i32) -> bool {
    has_without(ch, CharFlags::HEX_DIGIT, CharFlags::LOWER)
}

/// `_`, `0-9`, `a-z` or `A-Z`.
#[inline]
pub const fn is_word(ch: i32) -> bool {
    has(ch, CharFlags::WORD)
}

/// `_`, `0-9` or `a-z`.
#[inline]
pub const fn is_word_lower(ch: i32) -> bool {
    has_without(ch, CharFlags::WORD, CharFlags::UPPER)
}

/// `_`, `0-9` or `A-Z`.
#[inline]
pub const fn is_word_upper(ch: i32) -> bool {
    has_without(ch, CharFlags::WORD, CharFlags::LOWER)
}

/// `_`, `a-z` or `A-Z`. Digits may continue a word but never start one.
#[inline]
pub const fn is_word_start(ch: i32) -> bool {
    has(ch, CharFlags::WORD_START)
}

/// `_` or `a-z`.
#[inline]
pub const fn is_word_lower_start(ch: i32) -> bool {
    has_without(ch, CharFlags::WORD_START, CharFlags::UPPER)
}

/// `_` or `A-Z`.
#[inline]
pub const fn is_word_upper_start(ch: i32) -> bool {
    has_without(ch, CharFlags::WORD_START, CharFlags::LOWER)
}

/// One of ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
#[inline]
pub const fn is_punctuation(ch: i32) -> bool {
    has(ch, CharFlags::PUNCTUATION)
}

/// ` `, `\t`, `\n`, `\v`, `\f` or `\r`.
#[inline]
pub const fn is_whitespace(ch: i32) -> bool {
    has(ch, CharFlags::WHITESPACE)
}

/// ` ` or `\t` only.
#[inline]
pub const fn is_blank(ch: i32) -> bool {
    ch == 0x20 || ch == 0x09
}

/// `0x00` only.
#[inline]
pub const fn is_null(ch: i32) -> bool {
    ch == 0x00
}

/// `0x00-0x1F` or `0x7F`.
#[inline]
pub const fn is_control(ch: i32) -> bool {
    matches!(ch, 0x00..=0x1F | 0x7F)
}

/// `0x20-0x7E`. Every ASCII code point is either printable or control.
#[inline]
pub const fn is_printable(ch: i32) -> bool {
    matches!(ch, 0x20..=0x7E)
}

/// `0x21-0x7E`, the printable characters other than space.
#[inline]
pub const fn is_graphical(ch: i32) -> bool {
    matches!(ch, 0x21..=0x7E)
}
