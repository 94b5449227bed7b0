// File: crates/marketshare-core/src/record.rs
// Summary: Share records and CSV ingestion with flexible header resolution.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// One row of the source table: an app's market share in a region on a date.
/// `share` is a fraction (nominally 0..=1).
#[derive(Clone, Debug, PartialEq)]
pub struct ShareRecord {
    pub date: NaiveDate,
    pub region: String,
    pub app: String,
    pub share: f64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {line}: unparseable date '{value}'")]
    BadDate { line: u64, value: String },
    #[error("row {line}: unparseable share '{value}'")]
    BadShare { line: u64, value: String },
    #[error("no data rows")]
    Empty,
}

// Header spellings seen across market CSV exports.
const DATE_ALIASES: &[&str] = &["date", "day", "datetime"];
const REGION_ALIASES: &[&str] = &["region", "market", "country"];
const APP_ALIASES: &[&str] = &["app", "service", "company"];
const SHARE_ALIASES: &[&str] = &["share", "market_share", "value"];

/// Load share records from a CSV file with a header row.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ShareRecord>, DataError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    records_from(rdr)
}

/// Load share records from any reader producing CSV with a header row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ShareRecord>, DataError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    records_from(rdr)
}

fn records_from<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<ShareRecord>, DataError> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str], tag: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .ok_or(DataError::MissingColumn(tag))
    };
    let i_date = idx(DATE_ALIASES, "date")?;
    let i_region = idx(REGION_ALIASES, "region")?;
    let i_app = idx(APP_ALIASES, "app")?;
    let i_share = idx(SHARE_ALIASES, "share")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| rec.get(i).unwrap_or("").trim();

        let date = parse_date(field(i_date)).ok_or_else(|| DataError::BadDate {
            line,
            value: field(i_date).to_string(),
        })?;
        let share = field(i_share).parse::<f64>().map_err(|_| DataError::BadShare {
            line,
            value: field(i_share).to_string(),
        })?;

        out.push(ShareRecord {
            date,
            region: field(i_region).to_string(),
            app: field(i_app).to_string(),
            share,
        });
    }

    if out.is_empty() {
        return Err(DataError::Empty);
    }
    // Stable: rows within one date keep their input order.
    out.sort_by_key(|r| r.date);
    Ok(out)
}

/// Parse the date spellings seen in market CSV exports.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}
