use std::{fmt, str::FromStr};

use crate::reader::ParseNameError;

/// How out-of-line strings are terminated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum StringEncoding {
    /// Single-byte characters terminated by a NUL byte.
    #[default]
    Utf8,

    /// Little-endian UTF-16 code units terminated by a zero unit.
    Utf16,
}

impl FromStr for StringEncoding {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "ascii" => Ok(Self::Utf8),
            "utf16" | "utf-16" | "wide" => Ok(Self::Utf16),
            _ => Err(ParseNameError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
        })
    }
}

/// State threaded through every read. `base` anchors offset-relative values, usually the start
/// of the enclosing record or string table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadContext {
    pub base: u64,
    pub encoding: StringEncoding,
}

impl ReadContext {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    pub fn with_encoding(self, encoding: StringEncoding) -> Self {
        Self { encoding, ..self }
    }

    /// Context for a nested record whose offsets are relative to `base`.
    pub fn rebased(self, base: u64) -> Self {
        Self { base, ..self }
    }
}
