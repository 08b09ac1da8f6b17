//! Line format handling for the record files
//!
//! This module centralizes all line format concerns, providing:
//! - The [`Record`] trait tying a type to its collection and field layout
//! - Parsing of raw collection bytes into records
//! - Formatting of records into delimited lines
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Line Format
//!
//! One record per line, fields separated by `,`, no header, no quoting and no
//! escaping. Parsing is lenient per line:
//! - blank lines are ignored
//! - lines with fewer fields than the record needs are skipped silently
//! - lines whose fields fail to decode (e.g. a non-numeric weight) are skipped
//!   with a warning
//!
//! One bad line never aborts the read.

use crate::io::storage::Collection;
use crate::types::{Batch, LogEntry, PlantError, ProcessingRecord};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Field delimiter shared by every record file
pub const DELIMITER: u8 = b',';

/// A record type persisted as one delimited line
pub trait Record: Serialize + DeserializeOwned {
    /// Collection the record lives in
    const COLLECTION: Collection;

    /// Minimum number of fields a line needs
    const FIELD_COUNT: usize;

    /// Whitespace trimming applied to fields before decoding
    const TRIM: Trim = Trim::All;

    /// Decode one line's fields
    ///
    /// The default maps the first `FIELD_COUNT` fields positionally onto the
    /// type's serde fields; anything past them is ignored.
    fn from_fields(fields: &StringRecord) -> Result<Self, csv::Error> {
        let head: StringRecord = fields.iter().take(Self::FIELD_COUNT).collect();
        head.deserialize(None)
    }
}

impl Record for Batch {
    const COLLECTION: Collection = Collection::Batches;
    const FIELD_COUNT: usize = 6;
}

impl Record for ProcessingRecord {
    const COLLECTION: Collection = Collection::Processing;
    const FIELD_COUNT: usize = 5;
}

impl Record for LogEntry {
    const COLLECTION: Collection = Collection::Operations;
    const FIELD_COUNT: usize = 3;
    const TRIM: Trim = Trim::None;

    /// Everything after the second delimiter belongs to `details`
    fn from_fields(fields: &StringRecord) -> Result<Self, csv::Error> {
        let details: Vec<&str> = fields.iter().skip(2).collect();
        Ok(LogEntry {
            timestamp: fields.get(0).unwrap_or_default().trim().to_string(),
            operation: fields.get(1).unwrap_or_default().to_string(),
            details: details.join(",").trim_end().to_string(),
        })
    }
}

/// Parse every well-formed record from raw collection bytes
///
/// # Arguments
///
/// * `bytes` - Full contents of a collection
///
/// # Returns
///
/// The decoded records in line order. Malformed lines are skipped.
pub fn parse_records<R: Record>(bytes: &[u8]) -> Vec<R> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .trim(R::TRIM)
        .from_reader(bytes);

    let mut records = Vec::new();
    for result in reader.records() {
        let fields = match result {
            Ok(fields) => fields,
            Err(e) => {
                warn!(collection = ?R::COLLECTION, error = %e, "skipping unreadable line");
                continue;
            }
        };
        let line = fields.position().map(|pos| pos.line());

        if fields.len() < R::FIELD_COUNT {
            debug!(
                collection = ?R::COLLECTION,
                line,
                fields = fields.len(),
                "skipping short line"
            );
            continue;
        }

        match R::from_fields(&fields) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(collection = ?R::COLLECTION, line, error = %e, "skipping malformed line");
            }
        }
    }
    records
}

/// Format records as delimited lines, each terminated by `\n`
///
/// # Errors
///
/// Returns a `ParseError` if a record cannot be serialized.
pub fn format_records<R: Record>(records: &[R]) -> Result<Vec<u8>, PlantError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| PlantError::from(e.into_error()))
}
