mod describe;

use std::{error::Error, num::ParseIntError, path::PathBuf};

use clap::Parser;
use fstypes_config::Options;
use fstypes_formats::{StringEncoding, TypeKind};

use crate::describe::{describe, DescribeRequest};

#[derive(Debug, Parser)]
#[command(version, about = "Print typed values read from a binary file", long_about = None)]
struct Args {
    /// Type to read, e.g. vector3, boundingbox, packednormal or offsetstring.
    #[arg(value_parser = parse_kind)]
    kind: TypeKind,

    /// File to read from.
    file: PathBuf,

    /// Position of the first value. Accepts decimal or 0x-prefixed hex.
    #[arg(long, default_value = "0", value_parser = parse_offset)]
    offset: u64,

    /// Anchor for offset strings. Accepts decimal or 0x-prefixed hex.
    #[arg(long, default_value = "0", value_parser = parse_offset)]
    base: u64,

    /// Number of consecutive values to read.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// String terminator convention, overrides the configured default.
    #[arg(long, value_parser = parse_encoding)]
    encoding: Option<StringEncoding>,
}

fn parse_kind(value: &str) -> Result<TypeKind, String> {
    value.parse().map_err(|_| {
        let names: Vec<_> = TypeKind::ALL.iter().map(|kind| kind.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_encoding(value: &str) -> Result<StringEncoding, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn parse_offset(value: &str) -> Result<u64, ParseIntError> {
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Args {
        kind,
        file,
        offset,
        base,
        count,
        encoding,
    } = Args::parse();

    let options = Options::load();
    let request = DescribeRequest {
        kind,
        offset,
        base,
        count,
        encoding: encoding.unwrap_or(options.strings.encoding),
    };

    describe(&file, &request)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use fstypes_formats::{StringEncoding, TypeKind};

    use super::{parse_offset, Args};

    #[test]
    pub fn encoding_comes_only_from_flag() {
        // The environment override belongs to the settings loader, not the argument parser.
        std::env::set_var("FSTYPES_STRING_ENCODING", "utf16");
        let args = Args::try_parse_from(["fstypes", "offsetstring", "model.flver"]);
        std::env::remove_var("FSTYPES_STRING_ENCODING");

        let args = args.expect("args");
        assert_eq!(args.kind, TypeKind::OffsetString);
        assert_eq!(args.encoding, None);

        let args = Args::try_parse_from(["fstypes", "u32", "model.flver", "--encoding", "utf16"])
            .expect("args");
        assert_eq!(args.encoding, Some(StringEncoding::Utf16));
    }

    #[test]
    pub fn parses_decimal_and_hex_offsets() {
        assert_eq!(parse_offset("16").ok(), Some(16));
        assert_eq!(parse_offset("0x10").ok(), Some(16));
        assert_eq!(parse_offset("0XfF").ok(), Some(255));
        assert!(parse_offset("0xzz").is_err());
    }
}
