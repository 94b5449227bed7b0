// File: crates/marketshare-core/src/axis.rs
// Summary: Axis model with tick count and label formatting.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Fractions rendered as percentages with one decimal: 0.123 -> "12.3%".
    Percent,
    Plain,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_count: usize,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_count: 6, format: TickFormat::Plain }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Date", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Share", 0.0, 1.0).with_format(TickFormat::Percent)
    }

    /// Format one tick value according to the axis format.
    pub fn format_tick(&self, v: f64) -> String {
        match self.format {
            TickFormat::Percent => format!("{:.1}%", v * 100.0),
            TickFormat::Plain => {
                let s = format!("{v:.3}");
                let s = s.trim_end_matches('0').trim_end_matches('.');
                s.to_string()
            }
        }
    }
}
