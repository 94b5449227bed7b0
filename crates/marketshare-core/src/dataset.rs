// File: crates/marketshare-core/src/dataset.rs
// Summary: Reshapes share records into per-region, per-app columns.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::record::{load_records, DataError, ShareRecord};
use crate::series::ShareColumn;

/// The reshaped table: a global date axis plus, for each region, one
/// date-aligned column per app. Regions and apps keep the order of their
/// first appearance in the input.
#[derive(Clone, Debug)]
pub struct ShareDataset {
    dates: Vec<NaiveDate>,
    regions: Vec<String>,
    columns: HashMap<String, Vec<ShareColumn>>,
}

impl ShareDataset {
    pub fn from_records(records: &[ShareRecord]) -> Self {
        let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        dates.sort();
        dates.dedup();
        let date_index: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

        let mut regions: Vec<String> = Vec::new();
        for r in records {
            if !regions.iter().any(|x| x == &r.region) {
                regions.push(r.region.clone());
            }
        }

        let mut columns: HashMap<String, Vec<ShareColumn>> = HashMap::new();
        for region in &regions {
            let mut cols: Vec<ShareColumn> = Vec::new();
            for rec in records.iter().filter(|r| &r.region == region) {
                let pos = match cols.iter().position(|c| c.app == rec.app) {
                    Some(p) => p,
                    None => {
                        cols.push(ShareColumn::new(rec.app.clone(), dates.len()));
                        cols.len() - 1
                    }
                };
                if let Some(&di) = date_index.get(&rec.date) {
                    // Duplicate (date, region, app) rows: last one wins.
                    cols[pos].values[di] = Some(rec.share);
                }
            }
            columns.insert(region.clone(), cols);
        }

        Self { dates, regions, columns }
    }

    /// Load and reshape in one step.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Ok(Self::from_records(&load_records(path)?))
    }

    /// Sorted, deduplicated date axis shared by every region.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Regions in first-appearance order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Column-oriented series for one region; `None` for an unknown region.
    pub fn columns_for(&self, region: &str) -> Option<&[ShareColumn]> {
        self.columns.get(region).map(|c| c.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
