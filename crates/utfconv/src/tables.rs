//! Lookup tables for the 8-bit form.

/// Number of continuation bytes that follow each leading byte.
///
/// Counts 4 and 5 belong to leading bytes that no valid sequence uses. Bytes
/// `0x80..=0xBF` map to 0 here; they are rejected as leading bytes by the
/// decoder before the table is consulted.
pub(crate) static TRAILING_BYTES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0xC0;
    while i < 256 {
        table[i] = match i {
            0xC0..=0xDF => 1,
            0xE0..=0xEF => 2,
            0xF0..=0xF7 => 3,
            0xF8..=0xFB => 4,
            _ => 5,
        };
        i += 1;
    }
    table
};

/// Bias subtracted after accumulating a sequence with the given number of
/// continuation bytes. It removes the marker bits of every unit at once.
pub(crate) static OFFSETS: [u32; 6] = [
    0x0000_0000,
    0x0000_3080,
    0x000E_2080,
    0x03C8_2080,
    0xFA08_2080,
    0x8208_2080,
];

/// Length marker bits set in the leading byte of a sequence of the given
/// total length.
pub(crate) static FIRST_BYTE_MARK: [u8; 7] = [0x00, 0x00, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC];

/// Smallest codepoint each sequence length may encode; anything below is an
/// overlong form.
pub(crate) static MIN_CODEPOINT: [u32; 4] = [0x0, 0x80, 0x800, 0x1_0000];
