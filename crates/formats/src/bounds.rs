//! Bounding volumes. Neither shape is validated on read: an inverted box or a negative radius is
//! returned exactly as stored.

use std::{fmt, io};

use crate::{
    context::ReadContext,
    primitives::F32,
    reader::{FixedSize, FormatReader, ReadError},
    vector::Vector3,
};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: Vector3,
    pub radius: F32,
}

impl BoundingBox {
    /// Whether every component of `min` is less than or equal to the matching component of `max`.
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl FormatReader for BoundingBox {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            min: Vector3::from_reader(r, c)?,
            max: Vector3::from_reader(r, c)?,
        })
    }
}

impl FormatReader for BoundingSphere {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        Ok(Self {
            center: Vector3::from_reader(r, c)?,
            radius: F32::from_reader(r, c)?,
        })
    }
}

impl FixedSize for BoundingBox {
    const SIZE: usize = 2 * Vector3::SIZE;
}

impl FixedSize for BoundingSphere {
    const SIZE: usize = Vector3::SIZE + F32::SIZE;
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

impl fmt::Display for BoundingSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6}", self.center, self.radius)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{BoundingBox, BoundingSphere};
    use crate::{
        context::ReadContext,
        reader::{FixedSize, FormatReader},
        vector::Vector3,
    };

    fn floats(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    pub fn reads_bounding_box() {
        let mut cursor = Cursor::new(floats(&[-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]));
        let bounds = BoundingBox::from_reader(&mut cursor, &ReadContext::default()).expect("box");

        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 2.0, 3.0));
        assert!(bounds.is_ordered());
        assert_eq!(cursor.position(), BoundingBox::SIZE as u64);
        assert_eq!(
            bounds.to_string(),
            "[-1.000000, -2.000000, -3.000000] [1.000000, 2.000000, 3.000000]"
        );
    }

    #[test]
    pub fn inverted_box_is_kept() {
        let mut cursor = Cursor::new(floats(&[5.0, 0.0, 0.0, -5.0, 0.0, 0.0]));
        let bounds = BoundingBox::from_reader(&mut cursor, &ReadContext::default()).expect("box");

        assert!(!bounds.is_ordered());
        assert_eq!(bounds.min.x, 5.0);
    }

    #[test]
    pub fn reads_bounding_sphere() {
        let mut cursor = Cursor::new(floats(&[0.5, 0.0, -0.5, -2.0]));
        let sphere =
            BoundingSphere::from_reader(&mut cursor, &ReadContext::default()).expect("sphere");

        assert_eq!(sphere.center, Vector3::new(0.5, 0.0, -0.5));
        assert_eq!(sphere.radius, -2.0);
        assert_eq!(cursor.position(), BoundingSphere::SIZE as u64);
        assert_eq!(sphere.to_string(), "[0.500000, 0.000000, -0.500000] -2.000000");
    }
}
