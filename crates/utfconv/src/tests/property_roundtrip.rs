use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{
    arbitrary::{Text, reference_encode},
    quickcheck_tests,
};
use crate::{
    Endianness, TranscodeOptions, UtfForm, convert, to_utf8_from16, to_utf8_from32, to_utf16_from8,
    to_utf16_from32, to_utf32_from8, to_utf32_from16,
};

/// Property: well-formed UTF-8 survives a trip through UTF-16 and through
/// UTF-32 byte for byte.
#[test]
fn utf8_round_trips_through_wider_forms() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let s = text.0.as_bytes();
        let via16 = to_utf8_from16(&to_utf16_from8(s).unwrap()).unwrap();
        let via32 = to_utf8_from32(&to_utf32_from8(s).unwrap()).unwrap();
        via16 == s && via32 == s
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}

/// Property: well-formed UTF-16 survives a trip through UTF-32.
#[test]
fn utf16_round_trips_through_utf32() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let utf16 = reference_encode(&text.0, UtfForm::Utf16, Endianness::Native);
        to_utf16_from32(&to_utf32_from16(&utf16).unwrap()).unwrap() == utf16
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}

/// Property: any conversion of well-formed text, in any byte orders, matches
/// the standard library's encoding of the same text.
#[test]
fn conversions_match_reference_encoder() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, from: UtfForm, to: UtfForm, source_order: Endianness, target_order: Endianness) -> bool {
        let src = reference_encode(&text.0, from, source_order);
        let options = TranscodeOptions {
            source_order,
            target_order,
            ..Default::default()
        };
        convert(&src, from, to, options).as_deref() == Ok(&reference_encode(&text.0, to, target_order)[..])
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text, UtfForm, UtfForm, Endianness, Endianness) -> bool);
}

/// Property: strict UTF-8 decoding accepts exactly the inputs the standard
/// library accepts, and agrees with `bstr` on what they decode to.
#[test]
fn strict_utf8_validation_matches_std() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let ours = to_utf32_from8(&bytes);
        match core::str::from_utf8(&bytes) {
            Ok(_) => {
                let expected: Vec<u8> = bstr::ByteSlice::chars(&bytes[..])
                    .flat_map(|c| u32::from(c).to_ne_bytes())
                    .collect();
                ours == Ok(expected)
            }
            Err(_) => ours.is_err_and(|err| err.is_illegal_sequence()),
        }
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
