use rstest::rstest;

use crate::{
    CodeUnit, Endianness, ErrorMode, Units, UnitsMut,
    decode::{decode_utf8, decode_utf16, decode_utf32},
    encode::{encode_utf8, encode_utf16, encode_utf32},
};

#[cfg(not(miri))]
const STRIDE: usize = 1;
#[cfg(miri)]
const STRIDE: usize = 4099;

fn scalars(lo: u32, hi: u32) -> impl Iterator<Item = u32> {
    (lo..=hi)
        .step_by(STRIDE)
        .chain(core::iter::once(hi))
        .filter(|&c| char::from_u32(c).is_some())
}

fn assert_round_trip<U: CodeUnit>(
    c: u32,
    expected_len: usize,
    encode: impl Fn(u32, &mut UnitsMut<'_, U>, &mut usize, ErrorMode) -> Result<(), crate::TranscodeError>,
    decode: impl Fn(&Units<'_, U>, &mut usize, ErrorMode) -> Result<u32, crate::TranscodeError>,
) {
    let mut buf = [0u8; 16];
    let mut written = 0;
    encode(c, &mut UnitsMut::new(&mut buf, Endianness::Big), &mut written, ErrorMode::Strict).unwrap();
    assert_eq!(written, expected_len, "encoded length of U+{c:04X}");

    let mut read = 0;
    let src = Units::new(&buf[..written * U::WIDTH], Endianness::Big);
    let decoded = decode(&src, &mut read, ErrorMode::Strict).unwrap();
    assert_eq!(decoded, c);
    assert_eq!(read, written, "decoded length of U+{c:04X}");
}

#[rstest]
#[case(0x0000, 0x007F, 1, 1)]
#[case(0x0080, 0x07FF, 2, 1)]
#[case(0x0800, 0xFFFF, 3, 1)]
#[case(0x1_0000, 0x10_FFFF, 4, 2)]
fn every_scalar_round_trips(#[case] lo: u32, #[case] hi: u32, #[case] utf8_len: usize, #[case] utf16_len: usize) {
    for c in scalars(lo, hi) {
        assert_round_trip::<u8>(c, utf8_len, encode_utf8, decode_utf8);
        assert_round_trip::<u16>(c, utf16_len, encode_utf16, decode_utf16);
        assert_round_trip::<u32>(c, 1, encode_utf32, decode_utf32);
    }
}

#[test]
fn utf8_encoding_matches_std() {
    for c in scalars(0, 0x10_FFFF) {
        let ch = char::from_u32(c).unwrap();
        let mut expected = [0u8; 4];
        let expected = ch.encode_utf8(&mut expected).as_bytes();

        let mut buf = [0u8; 4];
        let mut written = 0;
        encode_utf8(c, &mut UnitsMut::new(&mut buf, Endianness::Native), &mut written, ErrorMode::Strict).unwrap();
        assert_eq!(&buf[..written], expected, "U+{c:04X}");
    }
}
