//! Buffer-level conversions between whole byte buffers.

use alloc::{vec, vec::Vec};

use crate::{
    error::TranscodeError,
    form::{Encoding, Utf8, Utf16, Utf32, UtfForm},
    options::TranscodeOptions,
    transcode::{Progress, transcode},
    unit::{CodeUnit, Units, UnitsMut},
};

/// Allocates a worst-case destination, transcodes into it and returns the
/// written prefix.
fn convert_buffer<S: Encoding, D: Encoding>(
    bytes: &[u8],
    options: TranscodeOptions,
) -> Result<Vec<u8>, TranscodeError> {
    let src = Units::<S::Unit>::new(bytes, options.source_order);
    let units = src.len() + usize::from(src.has_partial_tail());
    let size = UtfForm::capacity_for(S::FORM, D::FORM, units)
        .and_then(|capacity| capacity.checked_mul(<D::Unit as CodeUnit>::WIDTH))
        .ok_or(TranscodeError::SourceTooLarge { units })?;

    let mut out = vec![0u8; size];
    let progress = transcode::<S, D>(&src, &mut UnitsMut::new(&mut out, options.target_order), options)?;
    ensure_complete(progress, src.len())?;

    out.truncate(progress.written * <D::Unit as CodeUnit>::WIDTH);
    Ok(out)
}

/// Fails if the transcoder stopped before the end of the source.
fn ensure_complete(progress: Progress, units: usize) -> Result<(), TranscodeError> {
    if progress.read < units {
        return Err(TranscodeError::DestinationExhausted {
            written: progress.written,
            needed: 1,
        });
    }
    Ok(())
}

macro_rules! entry_point {
    ($name:ident, $name_with:ident, $from:ident, $to:ident, $from_doc:literal, $to_doc:literal) => {
        #[doc = concat!("Converts ", $from_doc, " bytes to ", $to_doc, " in strict mode with native byte order.")]
        ///
        /// # Errors
        ///
        /// [`TranscodeError::IllegalSequence`] if the input is not
        /// well-formed, [`TranscodeError::SourceTooLarge`] if the output
        /// could not be allocated.
        pub fn $name(bytes: &[u8]) -> Result<Vec<u8>, TranscodeError> {
            convert_buffer::<$from, $to>(bytes, TranscodeOptions::default())
        }

        #[doc = concat!("Converts ", $from_doc, " bytes to ", $to_doc, " with the given options.")]
        ///
        /// # Errors
        ///
        /// [`TranscodeError::IllegalSequence`] if the input is not
        /// well-formed and `options.mode` is strict, and
        /// [`TranscodeError::SourceTooLarge`] if the output could not be
        /// allocated.
        pub fn $name_with(bytes: &[u8], options: TranscodeOptions) -> Result<Vec<u8>, TranscodeError> {
            convert_buffer::<$from, $to>(bytes, options)
        }
    };
}

entry_point!(to_utf16_from8, to_utf16_from8_with, Utf8, Utf16, "UTF-8", "UTF-16");
entry_point!(to_utf32_from8, to_utf32_from8_with, Utf8, Utf32, "UTF-8", "UTF-32");
entry_point!(to_utf8_from16, to_utf8_from16_with, Utf16, Utf8, "UTF-16", "UTF-8");
entry_point!(to_utf32_from16, to_utf32_from16_with, Utf16, Utf32, "UTF-16", "UTF-32");
entry_point!(to_utf8_from32, to_utf8_from32_with, Utf32, Utf8, "UTF-32", "UTF-8");
entry_point!(to_utf16_from32, to_utf16_from32_with, Utf32, Utf16, "UTF-32", "UTF-16");

/// Converts `bytes` from one form to another chosen at runtime.
///
/// `from == to` is allowed: the input is decoded and re-encoded, which
/// validates it in strict mode, repairs it in lenient mode, and can swap the
/// byte order.
///
/// ```rust
/// use utfconv::{TranscodeOptions, UtfForm, convert};
///
/// let repaired = convert(b"ok\xC0", UtfForm::Utf8, UtfForm::Utf8, TranscodeOptions::lenient()).unwrap();
/// assert_eq!(repaired, "ok\u{FFFD}".as_bytes());
/// ```
///
/// # Errors
///
/// [`TranscodeError::IllegalSequence`] if the input is not well-formed and
/// `options.mode` is strict, and [`TranscodeError::SourceTooLarge`] if the
/// output could not be allocated.
pub fn convert(
    bytes: &[u8],
    from: UtfForm,
    to: UtfForm,
    options: TranscodeOptions,
) -> Result<Vec<u8>, TranscodeError> {
    use UtfForm as F;

    match (from, to) {
        (F::Utf8, F::Utf8) => convert_buffer::<Utf8, Utf8>(bytes, options),
        (F::Utf8, F::Utf16) => convert_buffer::<Utf8, Utf16>(bytes, options),
        (F::Utf8, F::Utf32) => convert_buffer::<Utf8, Utf32>(bytes, options),
        (F::Utf16, F::Utf8) => convert_buffer::<Utf16, Utf8>(bytes, options),
        (F::Utf16, F::Utf16) => convert_buffer::<Utf16, Utf16>(bytes, options),
        (F::Utf16, F::Utf32) => convert_buffer::<Utf16, Utf32>(bytes, options),
        (F::Utf32, F::Utf8) => convert_buffer::<Utf32, Utf8>(bytes, options),
        (F::Utf32, F::Utf16) => convert_buffer::<Utf32, Utf16>(bytes, options),
        (F::Utf32, F::Utf32) => convert_buffer::<Utf32, Utf32>(bytes, options),
    }
}
