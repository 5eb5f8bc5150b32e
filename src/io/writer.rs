//! Search trace persistence.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::GapError;
use crate::perf::PerfRecord;

/// Writes one line per record to `writer`.
pub fn write_records<W: Write>(writer: &mut W, records: &[PerfRecord]) -> Result<(), GapError> {
    for record in records {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}

/// Writes a trace file at `path`, replacing any existing file.
pub fn write_records_to_path(
    path: impl AsRef<Path>,
    records: &[PerfRecord],
) -> Result<(), GapError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Reads records from `reader`, one per line.
///
/// Blank lines are skipped; fields may be space- or comma-delimited.
///
/// # Errors
///
/// [`GapError::Io`] on read failures, [`GapError::MalformedInput`] on
/// lines that do not parse as records.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<PerfRecord>, GapError> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        records.push(trimmed.parse()?);
    }
    Ok(records)
}

/// Reads a trace file written by [`write_records_to_path`].
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<PerfRecord>, GapError> {
    read_records(BufReader::new(File::open(path)?))
}
