use std::{fmt, io};

use crate::{
    context::ReadContext,
    primitives::{F16, F32},
    reader::{FixedSize, FormatReader, ReadError},
};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: F32,
    pub y: F32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2Half {
    pub x: F16,
    pub y: F16,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: F32,
    pub y: F32,
    pub z: F32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: F32,
    pub y: F32,
    pub z: F32,
    pub w: F32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vector2Half {
    pub fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x.to_f32(), self.y.to_f32())
    }
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(value: Vector4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl FormatReader for Vector2 {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            x: F32::from_reader(r, c)?,
            y: F32::from_reader(r, c)?,
        })
    }
}

impl FormatReader for Vector2Half {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            x: F16::from_reader(r, c)?,
            y: F16::from_reader(r, c)?,
        })
    }
}

impl FormatReader for Vector3 {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            x: F32::from_reader(r, c)?,
            y: F32::from_reader(r, c)?,
            z: F32::from_reader(r, c)?,
        })
    }
}

impl FormatReader for Vector4 {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            x: F32::from_reader(r, c)?,
            y: F32::from_reader(r, c)?,
            z: F32::from_reader(r, c)?,
            w: F32::from_reader(r, c)?,
        })
    }
}

impl FixedSize for Vector2 {
    const SIZE: usize = 2 * F32::SIZE;
}

impl FixedSize for Vector2Half {
    const SIZE: usize = 2 * F16::SIZE;
}

impl FixedSize for Vector3 {
    const SIZE: usize = 3 * F32::SIZE;
}

impl FixedSize for Vector4 {
    const SIZE: usize = 4 * F32::SIZE;
}

/// Writes `[a, b, ...]` with six decimal places per component.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    f.write_str("[")?;
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }

        write!(f, "{component:.6}")?;
    }

    f.write_str("]")
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &[self.x, self.y])
    }
}

impl fmt::Display for Vector2Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_vector2(), f)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &[self.x, self.y, self.z])
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &[self.x, self.y, self.z, self.w])
    }
}
