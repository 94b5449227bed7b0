// File: crates/marketshare-core/src/series.rs
// Summary: Per-app series columns aligned to the dataset date axis.

/// One app's share values for one region, index-aligned with the dataset's
/// date list. `None` marks a date the app has no row for; lines break there.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareColumn {
    pub app: String,
    pub values: Vec<Option<f64>>,
}

impl ShareColumn {
    /// A column of `len` gaps for `app`, to be filled in by the reshaper.
    pub fn new(app: impl Into<String>, len: usize) -> Self {
        Self { app: app.into(), values: vec![None; len] }
    }

    pub fn with_values(app: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { app: app.into(), values }
    }

    /// Min/max over present values; `None` when the column is all gaps.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for v in self.values.iter().flatten() {
            min = min.min(*v);
            max = max.max(*v);
            any = true;
        }
        if any { Some((min, max)) } else { None }
    }

    /// True when every slot is a gap.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }
}
