//! Code units addressed by index inside raw byte buffers.
//!
//! The three encoding forms store 8-, 16- and 32-bit units. Buffers arrive as
//! plain bytes with no alignment guarantee, so units are read and written
//! through [`Units`] and [`UnitsMut`], which convert between a unit index and
//! the `WIDTH` bytes backing it in the configured byte order.
//!
//! A byte buffer whose length is not a multiple of `WIDTH` has a partial
//! trailing unit. The views never expose it as a unit; the transcoder decides
//! what it means (see [`Units::has_partial_tail`]).

use core::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::options::Endianness;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width code unit: `u8`, `u16` or `u32`.
pub trait CodeUnit: sealed::Sealed + Copy + 'static {
    /// Width of one unit in bytes.
    const WIDTH: usize;

    /// Reads one unit from exactly `WIDTH` bytes.
    fn read(bytes: &[u8], order: Endianness) -> u32;

    /// Writes the low `WIDTH` bytes of `value` into exactly `WIDTH` bytes.
    fn write(value: u32, bytes: &mut [u8], order: Endianness);
}

impl CodeUnit for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn read(bytes: &[u8], _order: Endianness) -> u32 {
        u32::from(bytes[0])
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn write(value: u32, bytes: &mut [u8], _order: Endianness) {
        bytes[0] = value as u8;
    }
}

impl CodeUnit for u16 {
    const WIDTH: usize = 2;

    #[inline]
    fn read(bytes: &[u8], order: Endianness) -> u32 {
        match order.resolve() {
            Endianness::Big => u32::from(BigEndian::read_u16(bytes)),
            _ => u32::from(LittleEndian::read_u16(bytes)),
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn write(value: u32, bytes: &mut [u8], order: Endianness) {
        match order.resolve() {
            Endianness::Big => BigEndian::write_u16(bytes, value as u16),
            _ => LittleEndian::write_u16(bytes, value as u16),
        }
    }
}

impl CodeUnit for u32 {
    const WIDTH: usize = 4;

    #[inline]
    fn read(bytes: &[u8], order: Endianness) -> u32 {
        match order.resolve() {
            Endianness::Big => BigEndian::read_u32(bytes),
            _ => LittleEndian::read_u32(bytes),
        }
    }

    #[inline]
    fn write(value: u32, bytes: &mut [u8], order: Endianness) {
        match order.resolve() {
            Endianness::Big => BigEndian::write_u32(bytes, value),
            _ => LittleEndian::write_u32(bytes, value),
        }
    }
}

/// Read-only view of a byte buffer as a sequence of `U` units.
#[derive(Debug, Clone, Copy)]
pub struct Units<'a, U> {
    bytes: &'a [u8],
    order: Endianness,
    unit: PhantomData<U>,
}

impl<'a, U: CodeUnit> Units<'a, U> {
    /// Views `bytes` as units stored in `order`.
    #[must_use]
    pub fn new(bytes: &'a [u8], order: Endianness) -> Self {
        Self {
            bytes,
            order,
            unit: PhantomData,
        }
    }

    /// Number of whole units in the buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / U::WIDTH
    }

    /// Whether the buffer holds no whole unit.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the buffer ends with a partial unit.
    #[inline]
    #[must_use]
    pub fn has_partial_tail(&self) -> bool {
        self.bytes.len() % U::WIDTH != 0
    }

    /// Returns the unit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        let start = index * U::WIDTH;
        U::read(&self.bytes[start..start + U::WIDTH], self.order)
    }
}

/// Writable view of a byte buffer as a sequence of `U` units.
#[derive(Debug)]
pub struct UnitsMut<'a, U> {
    bytes: &'a mut [u8],
    order: Endianness,
    unit: PhantomData<U>,
}

impl<'a, U: CodeUnit> UnitsMut<'a, U> {
    /// Views `bytes` as unit storage in `order`.
    #[must_use]
    pub fn new(bytes: &'a mut [u8], order: Endianness) -> Self {
        Self {
            bytes,
            order,
            unit: PhantomData,
        }
    }

    /// Number of whole units that fit in the buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / U::WIDTH
    }

    /// Whether no whole unit fits in the buffer.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the unit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        let start = index * U::WIDTH;
        U::read(&self.bytes[start..start + U::WIDTH], self.order)
    }

    /// Stores `value` as the unit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u32) {
        let start = index * U::WIDTH;
        U::write(value, &mut self.bytes[start..start + U::WIDTH], self.order);
    }
}
