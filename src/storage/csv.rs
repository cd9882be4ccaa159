use crate::error::Result;
use crate::models::JobRecord;
use std::path::Path;
use tracing::debug;

pub struct CsvWriter;

impl CsvWriter {
    /// Writes the records to `path`, replacing any previous file. Header
    /// row comes from the record's column names; `None` fields become
    /// empty cells. Returns the number of data rows written.
    pub fn write<P: AsRef<Path>>(records: &[JobRecord], path: P) -> Result<usize> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!(
            rows = records.len(),
            path = %path.as_ref().display(),
            "Wrote output file"
        );

        Ok(records.len())
    }
}
