//! Transcoding between the three Unicode encoding forms.
//!
//! `utfconv` converts a buffer of 8-, 16- or 32-bit code units into the
//! equivalent buffer in another form, one codepoint at a time:
//!
//! ```text
//! source bytes -> decoder -> codepoint -> encoder -> destination bytes
//! ```
//!
//! The six named conversions take and return plain byte buffers in native
//! byte order and fail on malformed input:
//!
//! ```rust
//! let utf16 = utfconv::to_utf16_from8("h\u{E9}llo \u{1F600}".as_bytes()).unwrap();
//! let utf32 = utfconv::to_utf32_from16(&utf16).unwrap();
//! let utf8 = utfconv::to_utf8_from32(&utf32).unwrap();
//! assert_eq!(utf8, "h\u{E9}llo \u{1F600}".as_bytes());
//! ```
//!
//! Each has a `_with` variant taking [`TranscodeOptions`], which selects
//! lenient mode (invalid input becomes U+FFFD) and explicit byte orders.
//! [`transcode`] is the underlying loop over caller-provided buffers.
//!
//! Every call works on one complete buffer; a code-unit sequence split
//! across two calls is not reassembled.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod convert;
pub mod decode;
pub mod encode;
mod error;
mod form;
mod options;
mod tables;
mod transcode;
mod unit;

#[cfg(test)]
mod tests;

pub use convert::{
    convert, to_utf8_from16, to_utf8_from16_with, to_utf8_from32, to_utf8_from32_with,
    to_utf16_from8, to_utf16_from8_with, to_utf16_from32, to_utf16_from32_with, to_utf32_from8,
    to_utf32_from8_with, to_utf32_from16, to_utf32_from16_with,
};
pub use error::TranscodeError;
pub use form::{Encoding, Utf8, Utf16, Utf32, UtfForm};
pub use options::{Endianness, ErrorMode, MAX_CODEPOINT, REPLACEMENT_CHARACTER, TranscodeOptions};
pub use transcode::{Progress, transcode};
pub use unit::{CodeUnit, Units, UnitsMut};
