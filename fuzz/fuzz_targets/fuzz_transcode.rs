#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utfconv::{Endianness, ErrorMode, TranscodeOptions, UtfForm, convert};

const HEADER: usize = 1;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// The conversion one input asks for, packed into its first byte.
#[derive(Debug, Clone, Copy)]
struct Header {
    from: UtfForm,
    to: UtfForm,
    source_order: Endianness,
    target_order: Endianness,
    mode: ErrorMode,
}

fn form(bits: u8) -> UtfForm {
    match bits % 3 {
        0 => UtfForm::Utf8,
        1 => UtfForm::Utf16,
        _ => UtfForm::Utf32,
    }
}

fn order(bit: u8) -> Endianness {
    if bit == 0 { Endianness::Little } else { Endianness::Big }
}

impl Header {
    fn parse(byte: u8) -> Self {
        Self {
            from: form(byte & 0b11),
            to: form((byte >> 2) & 0b11),
            source_order: order((byte >> 4) & 1),
            target_order: order((byte >> 5) & 1),
            mode: if byte & 0x40 == 0 { ErrorMode::Strict } else { ErrorMode::Lenient },
        }
    }

    fn options(self) -> TranscodeOptions {
        TranscodeOptions {
            mode: self.mode,
            source_order: self.source_order,
            target_order: self.target_order,
            panic_on_error: self.mode == ErrorMode::Lenient,
        }
    }

    /// The reverse conversion, strict.
    fn inverse(self) -> TranscodeOptions {
        TranscodeOptions {
            mode: ErrorMode::Strict,
            source_order: self.target_order,
            target_order: self.source_order,
            panic_on_error: true,
        }
    }
}

/// Encodes `text` in `form` with `order`, using the standard library.
fn encode(text: &str, form: UtfForm, order: Endianness) -> Vec<u8> {
    let big = order == Endianness::Big;
    match form {
        UtfForm::Utf8 => text.as_bytes().to_vec(),
        UtfForm::Utf16 => text
            .encode_utf16()
            .flat_map(|u| if big { u.to_be_bytes() } else { u.to_le_bytes() })
            .collect(),
        UtfForm::Utf32 => text
            .chars()
            .flat_map(|c| if big { u32::from(c).to_be_bytes() } else { u32::from(c).to_le_bytes() })
            .collect(),
    }
}

/// Draws a scalar from one of the four UTF-8 length classes.
fn random_char(rng: &mut SmallRng) -> char {
    loop {
        let c = match rng.random_range(0..4) {
            0 => rng.random_range(0..0x80),
            1 => rng.random_range(0x80..0x800),
            2 => rng.random_range(0x800..0x1_0000),
            _ => rng.random_range(0x1_0000..=0x10_FFFF),
        };
        if let Some(c) = char::from_u32(c) {
            return c;
        }
    }
}

/// Replaces the input with well-formed text in the header's source form,
/// occasionally with a single byte flipped.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || (size >= HEADER && seed % 4 != 0) {
        return fuzzer_mutate(data, size, max_size);
    }

    with_rng(|rng| {
        data[0] = rng.random();
        let header = Header::parse(data[0]);

        let len = rng.random_range(0..64);
        let text: String = (0..len).map(|_| random_char(rng)).collect();
        let payload = encode(&text, header.from, header.source_order);

        let n = payload.len().min(max_size - HEADER);
        data[HEADER..HEADER + n].copy_from_slice(&payload[..n]);
        if n > 0 && rng.random_ratio(1, 8) {
            let at = HEADER + rng.random_range(0..n);
            data[at] ^= rng.random_range(1..=u8::MAX);
        }
        HEADER + n
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn transcode(data: &[u8]) {
    let Some((&first, payload)) = data.split_first() else {
        return;
    };
    let header = Header::parse(first);

    let Ok(out) = convert(payload, header.from, header.to, header.options()) else {
        return;
    };

    // Anything a call produces is well-formed in the target form.
    let back = convert(&out, header.to, header.from, header.inverse());

    if header.mode == ErrorMode::Strict {
        // Well-formed input survives the trip unchanged.
        assert_eq!(back.as_deref(), Ok(payload), "{header:?}");

        let lenient = TranscodeOptions {
            mode: ErrorMode::Lenient,
            ..header.options()
        };
        assert_eq!(convert(payload, header.from, header.to, lenient), Ok(out), "{header:?}");
    }
}

fuzz_target!(|data: &[u8]| transcode(data));
