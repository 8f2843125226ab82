use std::{fmt, io, str::FromStr};

use crate::{
    bounds::{BoundingBox, BoundingSphere},
    context::ReadContext,
    normal::PackedNormal,
    primitives::{Bool, F16, F32, F64, S16, S32, S64, S8, U16, U32, U64, U8},
    reader::{FixedSize, FormatReader, ParseNameError, ReadError},
    string::OffsetString,
    vector::{Vector2, Vector2Half, Vector3, Vector4},
};

macro_rules! kinds {
    ($($kind:ident => $ty:ty, $name:literal;)*) => {
        /// Every type that can be read from a stream by name.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum TypeKind {
            $($kind,)*
        }

        /// A single decoded value of any [`TypeKind`].
        #[derive(Clone, Debug, PartialEq)]
        pub enum Value {
            $($kind($ty),)*
        }

        impl TypeKind {
            pub const ALL: &'static [TypeKind] = &[$(TypeKind::$kind,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(TypeKind::$kind => $name,)*
                }
            }

            /// Number of bytes the value occupies inline. Out-of-line string data is not
            /// included.
            #[allow(clippy::match_same_arms)]
            pub const fn size(self) -> usize {
                match self {
                    $(TypeKind::$kind => <$ty as FixedSize>::SIZE,)*
                }
            }

            pub fn read(
                self,
                r: &mut (impl io::Read + io::Seek),
                c: &ReadContext,
            ) -> Result<Value, ReadError> {
                let position = r.stream_position()?;
                log::debug!("reading {} at {position:#x}", self.name());

                Ok(match self {
                    $(TypeKind::$kind => Value::$kind(<$ty>::from_reader(r, c)?),)*
                })
            }
        }

        impl Value {
            pub const fn kind(&self) -> TypeKind {
                match self {
                    $(Value::$kind(_) => TypeKind::$kind,)*
                }
            }
        }

        impl fmt::Display for Value {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Value::$kind(value) => DisplayValue::fmt_value(value, f),)*
                }
            }
        }

        impl FromStr for TypeKind {
            type Err = ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.to_ascii_lowercase();
                match lower.as_str() {
                    $($name => Ok(TypeKind::$kind),)*
                    _ => Err(ParseNameError::UnknownKind(s.to_string())),
                }
            }
        }
    };
}

kinds! {
    S8 => S8, "s8";
    U8 => U8, "u8";
    S16 => S16, "s16";
    U16 => U16, "u16";
    S32 => S32, "s32";
    U32 => U32, "u32";
    S64 => S64, "s64";
    U64 => U64, "u64";
    F16 => F16, "f16";
    F32 => F32, "f32";
    F64 => F64, "f64";
    Bool => Bool, "bool";
    Vector2 => Vector2, "vector2";
    Vector2Half => Vector2Half, "vector2half";
    Vector3 => Vector3, "vector3";
    Vector4 => Vector4, "vector4";
    BoundingBox => BoundingBox, "boundingbox";
    BoundingSphere => BoundingSphere, "boundingsphere";
    PackedNormal => PackedNormal, "packednormal";
    OffsetString => OffsetString, "offsetstring";
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-type display used by [`Value`]. Floating point primitives get the same six decimal places
/// the composite shapes use, everything else defers to its `Display`.
trait DisplayValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_value {
    ($($ty:ty),*) => {
        $(impl DisplayValue for $ty {
            fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        })*
    };
}

display_value!(
    i8,
    u8,
    i16,
    u16,
    i32,
    u32,
    i64,
    u64,
    bool,
    Vector2,
    Vector2Half,
    Vector3,
    Vector4,
    BoundingBox,
    BoundingSphere,
    PackedNormal,
    OffsetString
);

impl DisplayValue for F16 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f32())
    }
}

impl DisplayValue for f32 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:.6}")
    }
}

impl DisplayValue for f64 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:.6}")
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor, Read, Seek, SeekFrom};

    use super::{TypeKind, Value};
    use crate::{
        context::ReadContext,
        reader::{ParseNameError, ReadError},
        vector::Vector2,
    };

    /// Readable stream that cannot report or change its position.
    struct Unseekable(Cursor<Vec<u8>>);

    impl Read for Unseekable {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.0.read(buf)
        }
    }

    impl Seek for Unseekable {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Err(io::Error::other("not seekable"))
        }
    }

    #[test]
    pub fn position_failure_fails_the_read() {
        let mut stream = Unseekable(Cursor::new(vec![0; 4]));
        let result = TypeKind::U32.read(&mut stream, &ReadContext::default());

        assert!(matches!(result, Err(ReadError::Io(e)) if e.to_string() == "not seekable"));
    }

    #[test]
    pub fn sizes_match_layout() {
        let sizes: Vec<_> = TypeKind::ALL.iter().map(|k| (k.name(), k.size())).collect();

        assert!(sizes.contains(&("vector2", 8)));
        assert!(sizes.contains(&("vector2half", 4)));
        assert!(sizes.contains(&("vector3", 12)));
        assert!(sizes.contains(&("vector4", 16)));
        assert!(sizes.contains(&("boundingbox", 24)));
        assert!(sizes.contains(&("boundingsphere", 16)));
        assert!(sizes.contains(&("packednormal", 4)));
        assert!(sizes.contains(&("offsetstring", 4)));
        assert!(sizes.contains(&("f16", 2)));
        assert!(sizes.contains(&("bool", 1)));
    }

    #[test]
    pub fn names_round_trip_through_from_str() {
        for kind in TypeKind::ALL {
            assert_eq!(kind.name().parse::<TypeKind>().ok(), Some(*kind));
        }

        assert_eq!("Vector3".parse::<TypeKind>().ok(), Some(TypeKind::Vector3));
        assert_eq!(
            "matrix4".parse::<TypeKind>(),
            Err(ParseNameError::UnknownKind("matrix4".to_string()))
        );
    }

    #[test]
    pub fn reads_by_kind() {
        let mut cursor = Cursor::new([0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0x40]);
        let value = TypeKind::Vector2
            .read(&mut cursor, &ReadContext::default())
            .expect("vector2");

        assert_eq!(value, Value::Vector2(Vector2::new(1.0, 2.0)));
        assert_eq!(value.kind(), TypeKind::Vector2);
        assert_eq!(value.to_string(), "[1.000000, 2.000000]");
    }

    #[test]
    pub fn displays_primitives() {
        assert_eq!(Value::U32(0xdead).to_string(), "57005");
        assert_eq!(Value::S8(-3).to_string(), "-3");
        assert_eq!(Value::F32(0.5).to_string(), "0.500000");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
