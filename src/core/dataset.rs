//! Reading election datasets: one `name,code,electoral_votes,popular_votes` record per line.

use crate::domain::model::Unit;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};

pub const FIELDS_PER_RECORD: usize = 4;

/// Dataset path for `year`, relative to the data directory.
pub fn input_filename(year: u32) -> String {
    format!("data/{}.csv", year)
}

/// Parses every well-formed record, in input order. Malformed records are skipped.
pub fn parse_units(data: &[u8]) -> Result<Vec<Unit>> {
    let mut reader = reader_for(data);
    let mut units = Vec::new();
    let mut skipped = 0usize;

    for (index, record) in reader.byte_records().enumerate() {
        let mut record = match StringRecord::from_byte_record(record?) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping record {}: {}", index + 1, e.utf8_error());
                skipped += 1;
                continue;
            }
        };
        record.trim();
        match parse_record(&record) {
            Some(unit) => units.push(unit),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed records", skipped);
    }
    Ok(units)
}

/// Parses a single line; `None` when it is not a valid record.
pub fn parse_line(line: &str) -> Option<Unit> {
    let mut reader = reader_for(line.as_bytes());
    let record = reader.records().next()?.ok()?;
    parse_record(&record)
}

pub fn parse_record(record: &StringRecord) -> Option<Unit> {
    if record.len() != FIELDS_PER_RECORD {
        tracing::debug!(
            "Skipping record with {} fields: {:?}",
            record.len(),
            record.iter().collect::<Vec<_>>()
        );
        return None;
    }

    let electoral_votes = record[2].parse::<u32>();
    let popular_votes = record[3].parse::<u64>();
    match (electoral_votes, popular_votes) {
        (Ok(electoral_votes), Ok(popular_votes)) => Some(Unit::new(
            &record[0],
            &record[1],
            electoral_votes,
            popular_votes,
        )),
        _ => {
            tracing::warn!(
                "Skipping '{}': vote counts '{}' and '{}' must be non-negative integers",
                &record[0],
                &record[2],
                &record[3]
            );
            None
        }
    }
}

fn reader_for(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(data)
}
