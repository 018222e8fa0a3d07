//! Codepoint encoders, one per destination form.
//!
//! Every encoder writes the units for one codepoint starting at `*pos` and
//! advances `*pos` past them. Capacity for the whole sequence is checked
//! before the first unit is written, so a failed call leaves the destination
//! exactly as it was.
//!
//! Codepoints that the form cannot represent go through
//! [`ErrorMode::replace`] with the destination position as the offset; in
//! lenient mode U+FFFD is written in their place.

use crate::{
    decode::is_surrogate,
    error::TranscodeError,
    options::{ErrorMode, MAX_CODEPOINT},
    tables::FIRST_BYTE_MARK,
    unit::UnitsMut,
};

const CONTINUATION_MARK: u32 = 0x80;
const CONTINUATION_MASK: u32 = 0xBF;

#[inline]
fn reserve(capacity: usize, pos: usize, needed: usize) -> Result<(), TranscodeError> {
    if pos + needed > capacity {
        return Err(TranscodeError::DestinationExhausted {
            written: pos,
            needed,
        });
    }
    Ok(())
}

/// Encodes one codepoint as 1 to 4 bytes.
///
/// Surrogates and values above U+10FFFF are replaced by the 3-byte form of
/// U+FFFD in lenient mode.
///
/// # Errors
///
/// [`TranscodeError::DestinationExhausted`] when fewer than the required
/// bytes remain, and [`TranscodeError::IllegalSequence`] in strict mode for a
/// value that is not a codepoint of valid text.
pub fn encode_utf8(
    c: u32,
    dst: &mut UnitsMut<'_, u8>,
    pos: &mut usize,
    mode: ErrorMode,
) -> Result<(), TranscodeError> {
    let (mut c, len) = match c {
        0..=0x7F => (c, 1),
        0x80..=0x7FF => (c, 2),
        0x800..=0xFFFF if !is_surrogate(c) => (c, 3),
        0x1_0000..=MAX_CODEPOINT => (c, 4),
        _ => (mode.replace(*pos)?, 3),
    };

    reserve(dst.len(), *pos, len)?;

    for i in (1..len).rev() {
        dst.set(*pos + i, (c | CONTINUATION_MARK) & CONTINUATION_MASK);
        c >>= 6;
    }
    dst.set(*pos, c | u32::from(FIRST_BYTE_MARK[len]));

    *pos += len;
    Ok(())
}

/// Encodes one codepoint as a single unit or a surrogate pair.
///
/// # Errors
///
/// [`TranscodeError::DestinationExhausted`] when the unit or pair does not
/// fit, and [`TranscodeError::IllegalSequence`] in strict mode for a
/// surrogate or a value above U+10FFFF.
pub fn encode_utf16(
    c: u32,
    dst: &mut UnitsMut<'_, u16>,
    pos: &mut usize,
    mode: ErrorMode,
) -> Result<(), TranscodeError> {
    let c = if is_surrogate(c) || c > MAX_CODEPOINT {
        mode.replace(*pos)?
    } else {
        c
    };

    if c <= 0xFFFF {
        reserve(dst.len(), *pos, 1)?;
        dst.set(*pos, c);
        *pos += 1;
        return Ok(());
    }

    reserve(dst.len(), *pos, 2)?;
    let c = c - 0x1_0000;
    dst.set(*pos, (c >> 10) + 0xD800);
    dst.set(*pos + 1, (c & 0x3FF) + 0xDC00);
    *pos += 2;
    Ok(())
}

/// Encodes one codepoint as a single 32-bit unit, unchanged.
///
/// # Errors
///
/// [`TranscodeError::DestinationExhausted`] when the destination is full.
pub fn encode_utf32(
    c: u32,
    dst: &mut UnitsMut<'_, u32>,
    pos: &mut usize,
    _mode: ErrorMode,
) -> Result<(), TranscodeError> {
    reserve(dst.len(), *pos, 1)?;
    dst.set(*pos, c);
    *pos += 1;
    Ok(())
}
