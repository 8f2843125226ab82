//! Fixed-width names for the primitive types records are built from. Everything is read
//! little-endian.

use std::io;

use byteorder::{ReadBytesExt, LE};

use crate::{
    context::ReadContext,
    io_ext::ReadFormatsExt,
    reader::{FixedSize, FormatReader, ReadError},
};

pub type S8 = i8;
pub type U8 = u8;
pub type S16 = i16;
pub type U16 = u16;
pub type S32 = i32;
pub type U32 = u32;
pub type S64 = i64;
pub type U64 = u64;
pub type F16 = half::f16;
pub type F32 = f32;
pub type F64 = f64;
pub type Bool = bool;

macro_rules! primitive_reader {
    ($ty:ty, $size:expr, |$r:ident| $read:expr) => {
        impl FormatReader for $ty {
            fn from_reader(
                $r: &mut (impl io::Read + io::Seek),
                _c: &ReadContext,
            ) -> Result<Self, ReadError> {
                Ok($read?)
            }
        }

        impl FixedSize for $ty {
            const SIZE: usize = $size;
        }
    };
}

primitive_reader!(S8, 1, |r| r.read_i8());
primitive_reader!(U8, 1, |r| r.read_u8());
primitive_reader!(S16, 2, |r| r.read_i16::<LE>());
primitive_reader!(U16, 2, |r| r.read_u16::<LE>());
primitive_reader!(S32, 4, |r| r.read_i32::<LE>());
primitive_reader!(U32, 4, |r| r.read_u32::<LE>());
primitive_reader!(S64, 8, |r| r.read_i64::<LE>());
primitive_reader!(U64, 8, |r| r.read_u64::<LE>());
primitive_reader!(F16, 2, |r| r.read_f16::<LE>());
primitive_reader!(F32, 4, |r| r.read_f32::<LE>());
primitive_reader!(F64, 8, |r| r.read_f64::<LE>());
primitive_reader!(Bool, 1, |r| r.read_bool());

#[cfg(test)]
mod test {
    use std::io::{Cursor, ErrorKind};

    use super::{F16, S16, U32};
    use crate::{
        context::ReadContext,
        reader::{read_vec, FormatReader, ReadError},
    };

    #[test]
    pub fn reads_little_endian() {
        let mut cursor = Cursor::new([0x78, 0x56, 0x34, 0x12, 0xfe, 0xff]);
        let c = ReadContext::default();

        assert_eq!(U32::from_reader(&mut cursor, &c).expect("u32"), 0x12345678);
        assert_eq!(S16::from_reader(&mut cursor, &c).expect("s16"), -2);
    }

    #[test]
    pub fn reads_half_float() {
        // 1.5 in IEEE binary16
        let mut cursor = Cursor::new([0x00, 0x3e]);
        let value = F16::from_reader(&mut cursor, &ReadContext::default()).expect("f16");

        assert_eq!(value.to_f32(), 1.5);
    }

    #[test]
    pub fn exhausted_stream_propagates_eof() {
        let mut cursor = Cursor::new([0x01, 0x02]);
        let result = read_vec::<U32>(&mut cursor, &ReadContext::default(), 1);

        assert!(matches!(
            result,
            Err(ReadError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof
        ));
    }
}
