use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use itertools::Itertools;

/// A set of character categories, packed into one `u16`.
///
/// Categories overlap: `'a'` is at once `ALPHA`, `LOWER`, `HEX_DIGIT`,
/// `WORD`, `WORD_START`, `PRINTABLE` and `GRAPHICAL`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharFlags(u16);

impl CharFlags {
    /// No category; what every code point outside `0x00-0x7F` has.
    pub const NONE: Self = Self(0x0000);
    /// `a-z` and `A-Z`.
    pub const ALPHA: Self = Self(0x0001);
    /// `a-z`.
    pub const LOWER: Self = Self(0x0002);
    /// `A-Z`.
    pub const UPPER: Self = Self(0x0004);
    /// `0-9`.
    pub const DIGIT: Self = Self(0x0008);
    /// `0-9`, `a-f` and `A-F`.
    pub const HEX_DIGIT: Self = Self(0x0010);
    /// `_`, `0-9`, `a-z` and `A-Z`.
    pub const WORD: Self = Self(0x0020);
    /// `_`, `a-z` and `A-Z`.
    pub const WORD_START: Self = Self(0x0040);
    /// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
    pub const PUNCTUATION: Self = Self(0x0080);
    /// ` `, `\t`, `\n`, `\v`, `\f` and `\r`.
    pub const WHITESPACE: Self = Self(0x0100);
    /// ` ` and `\t`.
    pub const BLANK: Self = Self(0x0200);
    /// `0x00-0x1F` and `0x7F`.
    pub const CONTROL: Self = Self(0x0400);
    /// `0x20-0x7E`, space to tilde.
    pub const PRINTABLE: Self = Self(0x0800);
    /// `0x21-0x7E`, bang to tilde.
    pub const GRAPHICAL: Self = Self(0x1000);

    const NAMED: [(&'static str, Self); 13] = [
        ("ALPHA", Self::ALPHA),
        ("LOWER", Self::LOWER),
        ("UPPER", Self::UPPER),
        ("DIGIT", Self::DIGIT),
        ("HEX_DIGIT", Self::HEX_DIGIT),
        ("WORD", Self::WORD),
        ("WORD_START", Self::WORD_START),
        ("PUNCTUATION", Self::PUNCTUATION),
        ("WHITESPACE", Self::WHITESPACE),
        ("BLANK", Self::BLANK),
        ("CONTROL", Self::CONTROL),
        ("PRINTABLE", Self::PRINTABLE),
        ("GRAPHICAL", Self::GRAPHICAL),
    ];

    const ALL_BITS: u16 = 0x1FFF;

    /// The raw mask; one bit per category, `ALPHA` lowest.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds a set from raw bits, dropping any bit that names no category.
    #[inline]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// True when no category is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one flag of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Flags set in either. The `const` form of `|`.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Flags set in both. The `const` form of `&`.
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Keeps only the flags in `mask` and compares the rest to `expect`.
    ///
    /// `flags.masked_eq(HEX_DIGIT | UPPER, HEX_DIGIT)` reads as "a hex digit,
    /// but not an uppercase one".
    #[inline]
    pub const fn masked_eq(self, mask: Self, expect: Self) -> bool {
        self.0 & mask.0 == expect.0
    }

    /// Names of the set flags, lowest bit first.
    pub fn iter_names(self) -> impl Iterator<Item = (&'static str, CharFlags)> {
        Self::NAMED
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
    }
}

impl BitOr for CharFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CharFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for CharFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CharFlags {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl fmt::Display for CharFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        write!(f, "{}", self.iter_names().map(|(name, _)| name).format(" | "))
    }
}

impl fmt::Debug for CharFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharFlags({self})")
    }
}
