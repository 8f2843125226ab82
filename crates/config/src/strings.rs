use fstypes_formats::StringEncoding;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Strings {
    /// Terminator convention used for offset strings when none is given on the command line.
    pub encoding: StringEncoding,
}
