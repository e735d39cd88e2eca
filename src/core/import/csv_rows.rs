//! Header-driven CSV reader

use csv::{ReaderBuilder, StringRecord, Trim};
use std::borrow::Cow;
use tracing::debug;

use super::error::ImportError;
use super::fields::{FieldAliases, FieldSource, LogicalField};
use super::record::{ImportRecord, ParsedBatch, Position};

struct CsvRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl FieldSource for CsvRow<'_> {
    /// Blank cells count as absent
    fn raw(&self, key: &str) -> Option<Cow<'_, str>> {
        let index = self.headers.iter().position(|header| header == key)?;
        let value = self.record.get(index)?;
        if value.trim().is_empty() {
            None
        } else {
            Some(Cow::Borrowed(value))
        }
    }
}

/// Parse a CSV file with a header row.
///
/// Missing coordinates default to zero and a row at exactly (0, 0) is treated
/// as having no position. Such rows are counted as skipped, as are rows with
/// non-finite or out-of-range coordinates, unparseable numbers or undecodable
/// records.
pub(super) fn parse<R: ImportRecord>(bytes: &[u8]) -> Result<ParsedBatch<R>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| ImportError::MalformedDocument(format!("Invalid CSV header: {}", e)))?
        .clone();

    let mut batch = ParsedBatch::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping unreadable CSV record: {}", e);
                batch.skipped += 1;
                continue;
            }
        };

        let row = CsvRow {
            headers: &headers,
            record: &record,
        };
        let fields = FieldAliases::new(&row);

        let coordinates = fields
            .number::<f64>(LogicalField::Latitude)
            .and_then(|lat| {
                let lng = fields.number::<f64>(LogicalField::Longitude)?;
                Ok((lat.unwrap_or(0.0), lng.unwrap_or(0.0)))
            });

        let position = match coordinates {
            Ok((latitude, longitude)) if latitude == 0.0 && longitude == 0.0 => None,
            Ok((latitude, longitude)) => Position::new(latitude, longitude),
            Err(invalid) => {
                debug!("Skipping CSV row: {}", invalid);
                None
            }
        };
        let Some(position) = position else {
            batch.skipped += 1;
            continue;
        };

        match R::from_fields(&fields, position, batch.rows.len()) {
            Ok(row) => batch.rows.push(row),
            Err(invalid) => {
                debug!("Skipping CSV row: {}", invalid);
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}
