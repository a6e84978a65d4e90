//! File collaborator
//!
//! Single-line inputs in, one offset per line out.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Read the first line of a file, without its line terminator.
///
/// Strips a trailing `\n` or `\r\n`. An empty file yields an empty line.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Write offsets as decimal integers separated by `\n` (no trailing newline).
pub fn write_offsets<W: Write>(mut writer: W, offsets: &[usize]) -> io::Result<()> {
    for (i, offset) in offsets.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        write!(writer, "{}", offset)?;
    }
    writer.flush()
}

/// [`write_offsets`] to a freshly created (or truncated) file.
pub fn write_offsets_file<P: AsRef<Path>>(path: P, offsets: &[usize]) -> io::Result<()> {
    let file = File::create(path)?;
    write_offsets(io::BufWriter::new(file), offsets)
}
