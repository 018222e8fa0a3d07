//! The sequence transcoder: decode one codepoint, encode it, repeat.

use crate::{
    error::TranscodeError,
    form::Encoding,
    options::TranscodeOptions,
    unit::{Units, UnitsMut},
};

/// How far a [`transcode`] call got.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Source units consumed.
    pub read: usize,
    /// Destination units written.
    pub written: usize,
}

/// Transcodes `src` from form `S` into `dst` in form `D`.
///
/// Runs until the source is exhausted or the destination is full, whichever
/// comes first; running out of destination room between codepoints is not
/// an error. Compare [`Progress::read`] with `src.len()` to tell the two
/// apart. A partial unit at the end of the source is handled as one invalid
/// sequence at offset `src.len()` once every whole unit has been read.
///
/// # Errors
///
/// - [`TranscodeError::IllegalSequence`] for invalid input in strict mode.
/// - [`TranscodeError::DestinationExhausted`] when the destination has room
///   for some, but not all, units of the next codepoint.
///
/// # Examples
///
/// ```rust
/// use utfconv::{Endianness, TranscodeOptions, Units, UnitsMut, Utf8, Utf16, transcode};
///
/// let src = Units::new("h\u{E9}llo".as_bytes(), Endianness::Native);
/// let mut buf = [0u8; 6];
/// let mut dst = UnitsMut::new(&mut buf, Endianness::Little);
/// let progress = transcode::<Utf8, Utf16>(&src, &mut dst, TranscodeOptions::default()).unwrap();
///
/// // Three UTF-16 units fit; "lo" is left over.
/// assert_eq!(progress.written, 3);
/// assert_eq!(progress.read, 4);
/// assert_eq!(buf, [b'h', 0, 0xE9, 0, b'l', 0]);
/// ```
pub fn transcode<S: Encoding, D: Encoding>(
    src: &Units<'_, S::Unit>,
    dst: &mut UnitsMut<'_, D::Unit>,
    options: TranscodeOptions,
) -> Result<Progress, TranscodeError> {
    let mode = options.mode;
    let mut read = 0;
    let mut written = 0;

    while read < src.len() && written < dst.len() {
        let start = read;
        let c = S::decode(src, &mut read, mode).map_err(|err| fail(options, err))?;
        D::encode(c, dst, &mut written, mode).map_err(|err| fail(options, at_source(err, start)))?;
    }

    if read == src.len() && src.has_partial_tail() && written < dst.len() {
        let c = mode.replace(read).map_err(|err| fail(options, err))?;
        D::encode(c, dst, &mut written, mode).map_err(|err| fail(options, err))?;
    }

    Ok(Progress { read, written })
}

/// Encoders report the destination position; the caller wants the source.
fn at_source(err: TranscodeError, start: usize) -> TranscodeError {
    match err {
        TranscodeError::IllegalSequence { .. } => TranscodeError::IllegalSequence { offset: start },
        TranscodeError::DestinationExhausted { .. } | TranscodeError::SourceTooLarge { .. } => err,
    }
}

#[cold]
#[cfg_attr(not(any(test, feature = "fuzzing")), allow(unused_variables))]
fn fail(options: TranscodeOptions, err: TranscodeError) -> TranscodeError {
    #[cfg(test)]
    std::eprintln!("transcode: {err} (options = {options:?})");

    #[cfg(any(test, feature = "fuzzing"))]
    assert!(!options.panic_on_error, "{err}");

    err
}
