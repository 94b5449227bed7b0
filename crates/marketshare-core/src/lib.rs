// File: crates/marketshare-core/src/lib.rs
// Summary: Core library entry point; exports the share-chart API.

pub mod chart;
pub mod record;
pub mod dataset;
pub mod series;
pub mod axis;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use record::{load_records, read_records, DataError, ShareRecord};
pub use dataset::ShareDataset;
pub use series::ShareColumn;
pub use axis::{Axis, TickFormat};
pub use view::{ChartView, SeriesDiff, ViewError};
pub use theme::Theme;
pub use text::TextShaper;
pub use types::Insets;
