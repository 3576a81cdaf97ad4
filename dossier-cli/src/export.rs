//! CSV export
//!
//! Same header and field values as the terminal table; only the delimiter
//! differs. Serialization is idempotent: re-reading an exported file
//! reproduces the 14 field values exactly.

use std::io::Write;
use std::path::Path;

use dossier_core::{EnrichmentRecord, HEADERS};

/// Write header plus one row per record
pub fn write_csv<W: Write>(writer: W, records: &[EnrichmentRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.write_record(record.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the export to a destination path
pub fn write_csv_file(path: &Path, records: &[EnrichmentRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.write_record(record.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}
