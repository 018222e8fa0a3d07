use crate::error::TranscodeError;

/// The replacement character emitted for invalid input in lenient mode.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// The largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// What to do when input cannot be represented.
///
/// # Default
///
/// [`ErrorMode::Strict`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorMode {
    /// Invalid input fails the call with [`TranscodeError::IllegalSequence`].
    #[default]
    Strict,
    /// Invalid input is replaced with U+FFFD and processing continues.
    Lenient,
}

impl ErrorMode {
    /// Resolves an invalid sequence starting at source unit `offset`: strict
    /// mode fails, lenient mode yields the replacement character.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::IllegalSequence`] at `offset` in strict mode.
    #[inline]
    pub fn replace(self, offset: usize) -> Result<u32, TranscodeError> {
        match self {
            ErrorMode::Strict => Err(TranscodeError::IllegalSequence { offset }),
            ErrorMode::Lenient => Ok(REPLACEMENT_CHARACTER),
        }
    }
}

/// Byte order of 16- and 32-bit code units inside a byte buffer.
///
/// 8-bit units have no byte order; the setting is ignored for them.
///
/// # Default
///
/// [`Endianness::Native`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endianness {
    /// The byte order of the target platform.
    #[default]
    Native,
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Resolves [`Endianness::Native`] to the concrete platform order.
    #[must_use]
    pub fn resolve(self) -> Endianness {
        match self {
            Endianness::Native if cfg!(target_endian = "big") => Endianness::Big,
            Endianness::Native => Endianness::Little,
            other => other,
        }
    }
}

/// Configuration for a transcoding call.
///
/// # Examples
///
/// ```rust
/// use utfconv::{Endianness, ErrorMode, TranscodeOptions};
///
/// let options = TranscodeOptions {
///     mode: ErrorMode::Lenient,
///     source_order: Endianness::Big,
///     ..Default::default()
/// };
/// let utf8 = utfconv::to_utf8_from16_with(&[0xD8, 0x00, 0x00, 0x41], options).unwrap();
/// assert_eq!(utf8, "\u{FFFD}A".as_bytes());
/// ```
///
/// # Default
///
/// Strict mode, native byte order on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranscodeOptions {
    /// How invalid input and uncodable codepoints are handled.
    ///
    /// # Default
    ///
    /// [`ErrorMode::Strict`]
    pub mode: ErrorMode,

    /// Byte order of the source units.
    ///
    /// # Default
    ///
    /// [`Endianness::Native`]
    pub source_order: Endianness,

    /// Byte order of the destination units.
    ///
    /// # Default
    ///
    /// [`Endianness::Native`]
    pub target_order: Endianness,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on transcoding errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces at the
    /// failure site.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub panic_on_error: bool,
}

impl TranscodeOptions {
    /// Strict options with native byte order.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient options with native byte order.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            mode: ErrorMode::Lenient,
            ..Self::default()
        }
    }
}
