//! Codepoint decoders, one per source form.
//!
//! Every decoder reads the codepoint starting at `*pos`, advances `*pos` past
//! the units it consumed and returns the codepoint. The caller guarantees
//! `*pos < src.len()`; decoders never read at or beyond `src.len()`.
//!
//! Invalid input goes through [`ErrorMode::replace`]. In lenient mode the
//! cursor always moves forward by at least one unit, and it never moves past
//! a unit that could start the next sequence.

use crate::{
    error::TranscodeError,
    options::{ErrorMode, MAX_CODEPOINT},
    tables::{MIN_CODEPOINT, OFFSETS, TRAILING_BYTES},
    unit::Units,
};

const HIGH_SURROGATE_START: u32 = 0xD800;
const HIGH_SURROGATE_END: u32 = 0xDBFF;
const LOW_SURROGATE_START: u32 = 0xDC00;
const LOW_SURROGATE_END: u32 = 0xDFFF;
const SURROGATE_SHIFT: u32 = 10;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

#[inline]
pub(crate) fn is_surrogate(c: u32) -> bool {
    (HIGH_SURROGATE_START..=LOW_SURROGATE_END).contains(&c)
}

#[inline]
fn is_continuation(unit: u32) -> bool {
    unit & 0xC0 == 0x80
}

/// Decodes one codepoint from 8-bit units.
///
/// The leading byte's entry in the trailing-bytes table gives the sequence
/// length. Continuation bytes are accumulated six bits at a time and the
/// length's bias is subtracted at the end. A sequence is rejected when its
/// leading byte is a continuation byte or declares 4 or 5 continuation
/// bytes, when a continuation byte is malformed, when the source ends before
/// the sequence does, or when the result is overlong, a surrogate, or above
/// U+10FFFF.
///
/// # Errors
///
/// [`TranscodeError::IllegalSequence`] in strict mode, at the offset of the
/// leading byte.
pub fn decode_utf8(src: &Units<'_, u8>, pos: &mut usize, mode: ErrorMode) -> Result<u32, TranscodeError> {
    let start = *pos;
    let lead = src.get(start);
    *pos += 1;

    if is_continuation(lead) {
        return mode.replace(start);
    }

    let extra = usize::from(TRAILING_BYTES[lead as usize]);
    match extra {
        0 => return Ok(lead),
        1..=3 => {}
        _ => return mode.replace(start),
    }

    let mut c = lead;
    for _ in 0..extra {
        // Truncated: the bytes read so far are all consumed.
        if *pos >= src.len() {
            return mode.replace(start);
        }

        let unit = src.get(*pos);
        if !is_continuation(unit) {
            return mode.replace(start);
        }

        c = (c << 6) + unit;
        *pos += 1;
    }
    c -= OFFSETS[extra];

    if c < MIN_CODEPOINT[extra] || is_surrogate(c) || c > MAX_CODEPOINT {
        return mode.replace(start);
    }

    Ok(c)
}

/// Decodes one codepoint from 16-bit units, joining surrogate pairs.
///
/// A high surrogate that is not followed by a low surrogate consumes only
/// itself, so the unit after it is decoded on the next call.
///
/// # Errors
///
/// [`TranscodeError::IllegalSequence`] in strict mode for an unpaired
/// surrogate.
pub fn decode_utf16(src: &Units<'_, u16>, pos: &mut usize, mode: ErrorMode) -> Result<u32, TranscodeError> {
    let start = *pos;
    let high = src.get(start);
    *pos += 1;

    match high {
        HIGH_SURROGATE_START..=HIGH_SURROGATE_END => {
            if *pos >= src.len() {
                return mode.replace(start);
            }

            let low = src.get(*pos);
            if (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&low) {
                *pos += 1;
                Ok(((high - HIGH_SURROGATE_START) << SURROGATE_SHIFT)
                    + (low - LOW_SURROGATE_START)
                    + SUPPLEMENTARY_BASE)
            } else {
                mode.replace(start)
            }
        }
        LOW_SURROGATE_START..=LOW_SURROGATE_END => mode.replace(start),
        _ => Ok(high),
    }
}

/// Decodes one codepoint from 32-bit units.
///
/// Units in the surrogate range or above U+10FFFF are not codepoints of
/// valid text and go through the error policy.
///
/// # Errors
///
/// [`TranscodeError::IllegalSequence`] in strict mode for an out-of-range
/// unit.
pub fn decode_utf32(src: &Units<'_, u32>, pos: &mut usize, mode: ErrorMode) -> Result<u32, TranscodeError> {
    let start = *pos;
    let c = src.get(start);
    *pos += 1;

    if is_surrogate(c) || c > MAX_CODEPOINT {
        return mode.replace(start);
    }

    Ok(c)
}
