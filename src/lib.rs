//! Classification and case conversion of single ASCII code points.
//!
//! Every function takes an `i32` code point, the width of a C `int`, so that
//! values read from a byte stream, sign-extended `char`s and end-of-input
//! sentinels such as `-1` can be passed in without a cast. Anything outside
//! `0x00-0x7F` is simply not in any class: predicates return `false` and the
//! case transforms hand the input back untouched.
//!
//! ```
//! use asciiflags::{is_word, is_word_start, to_upper, CharFlags};
//!
//! assert!(is_word_start('_' as i32) && !is_word_start('9' as i32));
//! assert!(is_word('9' as i32));
//! assert_eq!(to_upper('q' as i32), 'Q' as i32);
//! assert!(asciiflags::char_flags('f' as i32).contains(CharFlags::HEX_DIGIT));
//! ```
#![cfg_attr(not(test), no_std)]

mod case;
mod classify;
mod flags;
mod table;

pub use case::{to_lower, to_upper};
pub use classify::*;
pub use flags::CharFlags;
pub use table::{char_flags, table_index, CHAR_FLAGS};

/// Version of this crate, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
