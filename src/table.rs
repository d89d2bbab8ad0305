use crate::flags::CharFlags;

const CONTROL_WHITESPACE: CharFlags = CharFlags::CONTROL.union(CharFlags::WHITESPACE);
const GRAPHIC: CharFlags = CharFlags::PRINTABLE.union(CharFlags::GRAPHICAL);
const PUNCTUATION: CharFlags = GRAPHIC.union(CharFlags::PUNCTUATION);
const DIGIT: CharFlags = GRAPHIC
    .union(CharFlags::DIGIT)
    .union(CharFlags::HEX_DIGIT)
    .union(CharFlags::WORD);
const LETTER: CharFlags = GRAPHIC
    .union(CharFlags::ALPHA)
    .union(CharFlags::WORD)
    .union(CharFlags::WORD_START);
const UPPER: CharFlags = LETTER.union(CharFlags::UPPER);
const LOWER: CharFlags = LETTER.union(CharFlags::LOWER);

const fn flags_for(byte: u8) -> CharFlags {
    match byte {
        b'\t' => CONTROL_WHITESPACE.union(CharFlags::BLANK),
        0x0A..=0x0D => CONTROL_WHITESPACE,
        0x00..=0x1F | 0x7F => CharFlags::CONTROL,
        b' ' => CharFlags::PRINTABLE
            .union(CharFlags::WHITESPACE)
            .union(CharFlags::BLANK),
        b'0'..=b'9' => DIGIT,
        b'A'..=b'F' => UPPER.union(CharFlags::HEX_DIGIT),
        b'G'..=b'Z' => UPPER,
        b'a'..=b'f' => LOWER.union(CharFlags::HEX_DIGIT),
        b'g'..=b'z' => LOWER,
        b'_' => PUNCTUATION
            .union(CharFlags::WORD)
            .union(CharFlags::WORD_START),
        b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~' => PUNCTUATION,
        _ => CharFlags::NONE,
    }
}

const fn build() -> [CharFlags; 128] {
    let mut table = [CharFlags::NONE; 128];
    let mut byte = 0;
    while byte < table.len() {
        table[byte] = flags_for(byte as u8);
        byte += 1;
    }
    table
}

/// Category flags of every ASCII code point, indexed by the code point.
pub const CHAR_FLAGS: [CharFlags; 128] = build();

/// Index into [`CHAR_FLAGS`] for `ch`, or `None` outside `0x00-0x7F`.
#[inline]
pub const fn table_index(ch: i32) -> Option<usize> {
    match ch {
        0x00..=0x7F => Some(ch as usize),
        _ => None,
    }
}

/// Raw category flags of `ch`. Anything outside `0x00-0x7F` has none.
#[inline]
pub const fn char_flags(ch: i32) -> CharFlags {
    match table_index(ch) {
        Some(index) => CHAR_FLAGS[index],
        None => CharFlags::NONE,
    }
}
