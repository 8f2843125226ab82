use std::{fmt, io};

use byteorder::LE;

use crate::{
    context::ReadContext,
    io_ext::{ReadFormatsExt, SeekExt},
    primitives::U32,
    reader::{FixedSize, FormatReader, ReadError},
};

/// A string stored out-of-line, referenced by a 32-bit offset relative to
/// [`ReadContext::base`]. An offset of zero means there is no string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetString {
    pub offset: U32,
    pub value: Option<String>,
}

impl OffsetString {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.offset != 0
    }
}

impl FormatReader for OffsetString {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError> {
        let offset = U32::from_reader(r, c)?;
        if offset == 0 {
            return Ok(Self {
                offset,
                value: None,
            });
        }

        let position = c
            .base
            .checked_add(u64::from(offset))
            .ok_or(ReadError::OffsetOverflow {
                base: c.base,
                offset,
            })?;

        log::trace!("reading {} string at {position:#x}", c.encoding);

        let value = r.with_position(position, |r| {
            r.read_string::<LE>(c.encoding).map_err(ReadError::from)
        })?;

        Ok(Self {
            offset,
            value: Some(value),
        })
    }
}

impl FixedSize for OffsetString {
    /// Only the inline offset, the string itself lives elsewhere in the stream.
    const SIZE: usize = U32::SIZE;
}

impl fmt::Display for OffsetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}
