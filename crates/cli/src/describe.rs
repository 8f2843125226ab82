use std::{
    error::Error,
    fs::File,
    io::{self, Cursor, SeekFrom, Write},
    path::Path,
};

use console::style;
use fstypes_formats::{ReadContext, StringEncoding, TypeKind};
use memmap2::Mmap;

#[derive(Debug)]
pub struct DescribeRequest {
    pub kind: TypeKind,
    pub offset: u64,
    pub base: u64,
    pub count: usize,
    pub encoding: StringEncoding,
}

pub fn describe(path: &Path, request: &DescribeRequest) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;

    // SAFETY: the mapping is only read, and the file is not expected to change while we do.
    let data = unsafe { Mmap::map(&file)? };

    log::info!(
        "reading {} x {} from {} ({} bytes)",
        request.count,
        request.kind,
        path.display(),
        data.len()
    );

    let stdout = io::stdout();
    describe_values(&mut Cursor::new(&data[..]), request, &mut stdout.lock())
}

/// Reads `request.count` consecutive values and writes one `offset: value` line per value.
pub fn describe_values(
    r: &mut (impl io::Read + io::Seek),
    request: &DescribeRequest,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let context = ReadContext::new(request.base).with_encoding(request.encoding);
    r.seek(SeekFrom::Start(request.offset))?;

    for _ in 0..request.count {
        let position = r.stream_position()?;
        let value = request.kind.read(r, &context)?;

        writeln!(
            out,
            "{}: {}",
            style(format!("{position:#010x}")).cyan(),
            value
        )?;
    }

    Ok(())
}
