//! Hand-off of imported records to a persistence collaborator.

use std::io::Write;

use roster_model::{DomainRecord, EntityKind};
use tracing::debug;

use crate::error::Result;

/// Receives validated records, e.g. a storage layer that assigns IDs.
pub trait RecordSink {
    /// Accept a batch of records of one kind; returns how many were taken.
    fn accept(&mut self, kind: EntityKind, records: &[DomainRecord]) -> Result<usize>;
}

/// Collects records in memory.
impl RecordSink for Vec<DomainRecord> {
    fn accept(&mut self, _kind: EntityKind, records: &[DomainRecord]) -> Result<usize> {
        self.extend_from_slice(records);
        Ok(records.len())
    }
}

/// Writes each accepted batch as a pretty-printed JSON array.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn accept(&mut self, kind: EntityKind, records: &[DomainRecord]) -> Result<usize> {
        serde_json::to_writer_pretty(&mut self.writer, records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        debug!(entity = %kind, records = records.len(), "wrote records as JSON");
        Ok(records.len())
    }
}

/// Read records previously written by [`JsonSink`].
pub fn records_from_json(json: &str) -> Result<Vec<DomainRecord>> {
    Ok(serde_json::from_str(json)?)
}
