use std::io::{self, Read};

use byteorder::{ByteOrder, ReadBytesExt};
use half::f16;

use crate::context::StringEncoding;

pub trait ReadFormatsExt {
    fn read_bool(&mut self) -> io::Result<bool>;

    fn read_f16<O: ByteOrder>(&mut self) -> io::Result<f16>;

    /// Reads single-byte characters up to (and consuming) a NUL byte.
    fn read_cstring(&mut self) -> io::Result<String>;

    /// Reads UTF-16 code units up to (and consuming) a zero unit.
    fn read_utf16<O: ByteOrder>(&mut self) -> io::Result<String>;

    fn read_string<O: ByteOrder>(&mut self, encoding: StringEncoding) -> io::Result<String> {
        match encoding {
            StringEncoding::Utf8 => self.read_cstring(),
            StringEncoding::Utf16 => self.read_utf16::<O>(),
        }
    }
}

impl<R: Read> ReadFormatsExt for R {
    fn read_bool(&mut self) -> io::Result<bool> {
        // Stored as a char, anything but zero is set.
        Ok(self.read_u8()? != 0)
    }

    fn read_f16<O: ByteOrder>(&mut self) -> io::Result<f16> {
        Ok(f16::from_bits(self.read_u16::<O>()?))
    }

    fn read_cstring(&mut self) -> io::Result<String> {
        let mut buffer = Vec::new();

        loop {
            let current = self.read_u8()?;
            if current == 0x0 {
                break;
            }

            buffer.push(current);
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn read_utf16<O: ByteOrder>(&mut self) -> io::Result<String> {
        let mut buffer = Vec::new();

        loop {
            let current = self.read_u16::<O>()?;
            if current == 0x0 {
                break;
            }

            buffer.push(current);
        }

        Ok(String::from_utf16_lossy(&buffer))
    }
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, ErrorKind};

    use byteorder::LE;

    use super::ReadFormatsExt;
    use crate::context::StringEncoding;

    #[test]
    pub fn reads_cstring_and_consumes_terminator() {
        let mut cursor = Cursor::new(b"abc\0def\0".to_vec());

        assert_eq!(cursor.read_cstring().expect("first"), "abc");
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.read_cstring().expect("second"), "def");
    }

    #[test]
    pub fn reads_utf16() {
        let bytes = [b'h', 0, b'i', 0, 0, 0, 0xff, 0xff];
        let mut cursor = Cursor::new(bytes);

        assert_eq!(cursor.read_string::<LE>(StringEncoding::Utf16).expect("utf16"), "hi");
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    pub fn unterminated_string_is_eof() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        let err = cursor.read_cstring().expect_err("no terminator");

        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    pub fn bool_is_any_nonzero_byte() {
        let mut cursor = Cursor::new([0u8, 1, 2]);

        assert!(!cursor.read_bool().expect("0"));
        assert!(cursor.read_bool().expect("1"));
        assert!(cursor.read_bool().expect("2"));
    }
}
