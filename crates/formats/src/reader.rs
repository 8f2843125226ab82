use std::io;

use thiserror::Error;

use crate::context::ReadContext;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("string offset {offset:#x} from base {base:#x} is out of range")]
    OffsetOverflow { base: u64, offset: u32 },

}

/// Failure to resolve a type or encoding from its name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNameError {
    #[error("unknown type {0}")]
    UnknownKind(String),

    #[error("unknown string encoding {0}")]
    UnknownEncoding(String),
}

pub trait FormatReader {
    fn from_reader(r: &mut (impl io::Read + io::Seek), c: &ReadContext) -> Result<Self, ReadError>
    where
        Self: Sized;
}

/// Types whose inline footprint in the stream is always the same number of bytes.
pub trait FixedSize {
    const SIZE: usize;
}

pub fn read_vec<T: FormatReader>(
    r: &mut (impl io::Read + io::Seek),
    c: &ReadContext,
    count: usize,
) -> Result<Vec<T>, ReadError> {
    let mut results = Vec::new();
    for _ in 0..count {
        results.push(T::from_reader(r, c)?);
    }

    Ok(results)
}
