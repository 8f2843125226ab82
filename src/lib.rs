pub mod formats {
    pub use fstypes_formats::*;
}

pub mod prelude {
    pub use super::formats::{
        BoundingBox, BoundingSphere, FixedSize, FormatReader, OffsetString, PackedNormal,
        ParseNameError, ReadContext, ReadError, StringEncoding, TypeKind, Value, Vector2,
        Vector2Half, Vector3, Vector4,
    };
}
