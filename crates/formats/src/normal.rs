//! 11/11/10 packed normals.
//!
//! A single 32-bit word holds three signed fixed-point fields, packed from bit 0 upwards:
//!
//! | Field | Bits      | Range         | Divisor |
//! |-------|-----------|---------------|---------|
//! | X     | `[0, 11)` | `-1024..=1023` | 1023    |
//! | Y     | `[11, 22)`| `-1024..=1023` | 1023    |
//! | Z     | `[22, 32)`| `-512..=511`   | 511     |
//!
//! Fields are normalized by their largest positive code, so the most negative code decodes
//! slightly below -1.0 (`-1024 / 1023` for X and Y). Consumers of the source data rely on this
//! exact mapping.

use std::{fmt, io};

use crate::{
    context::ReadContext,
    primitives::U32,
    reader::{FixedSize, FormatReader, ReadError},
    vector::{write_components, Vector3},
};

const WORD_BITS: u32 = u32::BITS;

/// A signed field `WIDTH` bits wide starting at bit `POSITION` of a packed word.
pub struct SignedField<const POSITION: u32, const WIDTH: u32>;

impl<const POSITION: u32, const WIDTH: u32> SignedField<POSITION, WIDTH> {
    const LEFT_SHIFT: u32 = WORD_BITS - POSITION - WIDTH;
    const RIGHT_SHIFT: u32 = WORD_BITS - WIDTH;

    /// Largest positive code the field can hold, used as the normalization divisor.
    pub const MAX: i32 = (1 << (WIDTH - 1)) - 1;

    /// Most negative code the field can hold.
    pub const MIN: i32 = -(1 << (WIDTH - 1));

    /// Moves the field's top bit into the sign bit, then shifts back arithmetically.
    #[inline]
    pub const fn extract(word: u32) -> i32 {
        ((word << Self::LEFT_SHIFT) as i32) >> Self::RIGHT_SHIFT
    }

    #[inline]
    pub fn normalize(word: u32) -> f32 {
        Self::extract(word) as f32 / Self::MAX as f32
    }
}

pub type FieldX = SignedField<0, 11>;
pub type FieldY = SignedField<11, 11>;
pub type FieldZ = SignedField<22, 10>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedNormal(pub U32);

impl PackedNormal {
    pub const fn new(word: u32) -> Self {
        Self(word)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The sign-extended integer codes of the X, Y and Z fields.
    pub const fn codes(self) -> [i32; 3] {
        [
            FieldX::extract(self.0),
            FieldY::extract(self.0),
            FieldZ::extract(self.0),
        ]
    }

    pub fn decode(self) -> [f32; 3] {
        [
            FieldX::normalize(self.0),
            FieldY::normalize(self.0),
            FieldZ::normalize(self.0),
        ]
    }

    pub fn to_vector3(self) -> Vector3 {
        let [x, y, z] = self.decode();
        Vector3::new(x, y, z)
    }
}

impl From<u32> for PackedNormal {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedNormal> for Vector3 {
    fn from(value: PackedNormal) -> Self {
        value.to_vector3()
    }
}

impl FormatReader for PackedNormal {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self(U32::from_reader(r, c)?))
    }
}

impl FixedSize for PackedNormal {
    const SIZE: usize = U32::SIZE;
}

impl fmt::Display for PackedNormal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.decode())
    }
}
