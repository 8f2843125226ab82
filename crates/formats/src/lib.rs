pub mod bounds;
pub mod context;
pub mod io_ext;
pub mod normal;
pub mod primitives;
pub mod reader;
pub mod string;
pub mod value;
pub mod vector;

pub use bounds::{BoundingBox, BoundingSphere};
pub use context::{ReadContext, StringEncoding};
pub use normal::PackedNormal;
pub use reader::{read_vec, FixedSize, FormatReader, ParseNameError, ReadError};
pub use string::OffsetString;
pub use value::{TypeKind, Value};
pub use vector::{Vector2, Vector2Half, Vector3, Vector4};
