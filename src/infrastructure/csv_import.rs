// CSV ingestion - fuzzy column detection and timestamp parsing
use crate::domain::reading::Reading;
use crate::domain::window::to_millis;
use crate::infrastructure::config::{ChannelsConfig, ColumnPatterns};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no {0} column recognized in header")]
    MissingColumn(&'static str),
    #[error("no valid data rows found")]
    NoValidRows,
}

#[derive(Debug)]
pub struct ParsedImport {
    pub readings: Vec<Reading>,
    pub rows_dropped: usize,
}

#[derive(Debug, Default)]
struct ColumnMap {
    timestamp: Option<usize>,
    steam: Option<usize>,
    power: Option<usize>,
    temp_comb: Option<usize>,
    temp_flue: Option<usize>,
    idf: Option<usize>,
    rgf: Option<usize>,
    soot: Option<usize>,
}

// Timestamp grammars, most specific first. Trailing text after the matched
// prefix is ignored, like the source system's "3/12/2025 9:00 (shift 2)"
// annotations.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an uploaded CSV into readings. Rows without a parseable timestamp
/// or a numeric power value are dropped and counted; every other channel
/// degrades to NaN when absent.
pub fn parse_readings(data: &[u8], cfg: &ChannelsConfig) -> Result<ParsedImport, ImportError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let map = map_columns(&headers, &cfg.columns);
    let timestamp_idx = map.timestamp.ok_or(ImportError::MissingColumn("timestamp"))?;
    let power_idx = map.power.ok_or(ImportError::MissingColumn("power"))?;

    let mut readings = Vec::new();
    let mut rows_dropped = 0usize;

    for record in reader.records() {
        let record = record?;

        let Some(timestamp_ms) = record.get(timestamp_idx).and_then(parse_timestamp) else {
            rows_dropped += 1;
            continue;
        };
        let power = field_value(&record, Some(power_idx));
        if power.is_nan() {
            rows_dropped += 1;
            continue;
        }

        readings.push(Reading::new(
            timestamp_ms,
            field_value(&record, map.steam),
            power,
            field_value(&record, map.temp_comb),
            field_value(&record, map.temp_flue),
            field_value(&record, map.idf),
            field_value(&record, map.rgf),
            field_value(&record, map.soot) == 1.0,
        ));
    }

    if readings.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    tracing::debug!(
        rows = readings.len(),
        dropped = rows_dropped,
        "parsed CSV upload"
    );
    Ok(ParsedImport {
        readings,
        rows_dropped,
    })
}

/// Assign each header to the first channel whose patterns match it; a later
/// header matching the same channel overwrites the earlier assignment.
fn map_columns(headers: &csv::StringRecord, patterns: &ColumnPatterns) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (idx, raw) in headers.iter().enumerate() {
        let norm = normalize_header(raw);
        if matches_any(&patterns.timestamp, &norm) {
            map.timestamp = Some(idx);
        } else if matches_any(&patterns.steam, &norm) {
            map.steam = Some(idx);
        } else if matches_any(&patterns.power, &norm) {
            map.power = Some(idx);
        } else if matches_any(&patterns.temp_comb, &norm) {
            map.temp_comb = Some(idx);
        } else if matches_any(&patterns.temp_flue, &norm) {
            map.temp_flue = Some(idx);
        } else if matches_any(&patterns.idf, &norm) {
            map.idf = Some(idx);
        } else if matches_any(&patterns.rgf, &norm) {
            map.rgf = Some(idx);
        } else if matches_any(&patterns.soot, &norm) {
            map.soot = Some(idx);
        }
    }
    map
}

/// Collapse line breaks and whitespace runs, lowercase, trim.
fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn matches_any(patterns: &[String], normalized: &str) -> bool {
    patterns.iter().any(|p| normalized.contains(p.as_str()))
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok((dt, _rest)) = NaiveDateTime::parse_and_remainder(trimmed, format) {
            return Some(to_millis(dt));
        }
    }
    // Best-effort fallback for zoned exports
    chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| to_millis(dt.naive_local()))
}

fn field_value(record: &csv::StringRecord, idx: Option<usize>) -> f64 {
    idx.and_then(|i| record.get(i))
        .map(|raw| raw.trim().parse::<f64>().unwrap_or(f64::NAN))
        .unwrap_or(f64::NAN)
}
