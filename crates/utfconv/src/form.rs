use core::fmt;

use crate::{
    decode::{decode_utf8, decode_utf16, decode_utf32},
    encode::{encode_utf8, encode_utf16, encode_utf32},
    error::TranscodeError,
    options::ErrorMode,
    unit::{CodeUnit, Units, UnitsMut},
};

/// An encoding form: a code-unit type together with its decoder and encoder.
///
/// Implemented by the marker types [`Utf8`], [`Utf16`] and [`Utf32`]. The
/// transcoder is generic over a pair of forms, so each conversion is
/// monomorphized with its decoder and encoder inlined.
pub trait Encoding {
    /// The code unit of this form.
    type Unit: CodeUnit;

    /// The runtime tag of this form.
    const FORM: UtfForm;

    /// Decodes the codepoint starting at `*pos`. See [`crate::decode`].
    ///
    /// # Errors
    ///
    /// [`TranscodeError::IllegalSequence`] for invalid input in strict mode.
    fn decode(src: &Units<'_, Self::Unit>, pos: &mut usize, mode: ErrorMode) -> Result<u32, TranscodeError>;

    /// Encodes `c` starting at `*pos`. See [`crate::encode`].
    ///
    /// # Errors
    ///
    /// [`TranscodeError::DestinationExhausted`] when the units do not fit,
    /// [`TranscodeError::IllegalSequence`] for an uncodable value in strict
    /// mode.
    fn encode(
        c: u32,
        dst: &mut UnitsMut<'_, Self::Unit>,
        pos: &mut usize,
        mode: ErrorMode,
    ) -> Result<(), TranscodeError>;
}

/// The 8-bit encoding form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// The 16-bit encoding form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

/// The 32-bit encoding form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

macro_rules! impl_encoding {
    ($form:ident, $unit:ty, $decode:ident, $encode:ident) => {
        impl Encoding for $form {
            type Unit = $unit;

            const FORM: UtfForm = UtfForm::$form;

            #[inline]
            fn decode(src: &Units<'_, $unit>, pos: &mut usize, mode: ErrorMode) -> Result<u32, TranscodeError> {
                $decode(src, pos, mode)
            }

            #[inline]
            fn encode(
                c: u32,
                dst: &mut UnitsMut<'_, $unit>,
                pos: &mut usize,
                mode: ErrorMode,
            ) -> Result<(), TranscodeError> {
                $encode(c, dst, pos, mode)
            }
        }
    };
}

impl_encoding!(Utf8, u8, decode_utf8, encode_utf8);
impl_encoding!(Utf16, u16, decode_utf16, encode_utf16);
impl_encoding!(Utf32, u32, decode_utf32, encode_utf32);

/// Runtime tag for an encoding form, used by [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtfForm {
    /// 8-bit code units.
    #[cfg_attr(feature = "serde", serde(rename = "utf-8"))]
    Utf8,
    /// 16-bit code units.
    #[cfg_attr(feature = "serde", serde(rename = "utf-16"))]
    Utf16,
    /// 32-bit code units.
    #[cfg_attr(feature = "serde", serde(rename = "utf-32"))]
    Utf32,
}

impl UtfForm {
    /// Width of one code unit in bytes.
    #[must_use]
    pub fn unit_width(self) -> usize {
        match self {
            UtfForm::Utf8 => <u8 as CodeUnit>::WIDTH,
            UtfForm::Utf16 => <u16 as CodeUnit>::WIDTH,
            UtfForm::Utf32 => <u32 as CodeUnit>::WIDTH,
        }
    }

    /// Upper bound on destination units needed to convert `units` source
    /// units of `from` into `to`.
    ///
    /// Widening needs no more units than the source has. Narrowing, and
    /// re-encoding 8-bit input where one bad byte becomes a 3-byte
    /// replacement, needs at most four per source unit. Returns `None` when
    /// the bound overflows `usize`.
    #[must_use]
    pub fn capacity_for(from: UtfForm, to: UtfForm, units: usize) -> Option<usize> {
        if to.unit_width() < from.unit_width() || to == UtfForm::Utf8 {
            units.checked_mul(4)
        } else {
            Some(units)
        }
    }
}

impl fmt::Display for UtfForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UtfForm::Utf8 => "UTF-8",
            UtfForm::Utf16 => "UTF-16",
            UtfForm::Utf32 => "UTF-32",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn capacity_heuristic() {
        use UtfForm::{Utf8, Utf16, Utf32};

        assert_eq!(UtfForm::capacity_for(Utf8, Utf16, 10), Some(10));
        assert_eq!(UtfForm::capacity_for(Utf8, Utf32, 10), Some(10));
        assert_eq!(UtfForm::capacity_for(Utf16, Utf32, 10), Some(10));
        assert_eq!(UtfForm::capacity_for(Utf16, Utf8, 10), Some(40));
        assert_eq!(UtfForm::capacity_for(Utf32, Utf8, 10), Some(40));
        assert_eq!(UtfForm::capacity_for(Utf32, Utf16, 10), Some(40));
        assert_eq!(UtfForm::capacity_for(Utf8, Utf8, 10), Some(40));
        assert_eq!(UtfForm::capacity_for(Utf16, Utf16, 10), Some(10));
    }

    #[test]
    fn capacity_overflow_is_none() {
        use UtfForm::{Utf8, Utf16, Utf32};

        assert_eq!(UtfForm::capacity_for(Utf8, Utf8, usize::MAX / 4 + 1), None);
        assert_eq!(UtfForm::capacity_for(Utf32, Utf16, usize::MAX), None);
        assert_eq!(UtfForm::capacity_for(Utf8, Utf8, usize::MAX / 4), Some(usize::MAX / 4 * 4));
        assert_eq!(UtfForm::capacity_for(Utf8, Utf32, usize::MAX), Some(usize::MAX));
    }

    #[test]
    fn forms_display_and_tag() {
        assert_eq!(UtfForm::Utf16.to_string(), "UTF-16");
        assert_eq!(<Utf32 as Encoding>::FORM, UtfForm::Utf32);
        assert_eq!(UtfForm::Utf32.unit_width(), 4);
    }
}
