// File: crates/marketshare-core/src/view.rs
// Summary: Widget-level view state: active region, series diffing, resize.

use anyhow::Result;
use thiserror::Error;

use crate::chart::{Chart, RenderOptions};
use crate::dataset::ShareDataset;
use crate::series::ShareColumn;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

/// Region selected on construction when the data has it.
pub const DEFAULT_REGION: &str = "USA";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    #[error("dataset has no regions")]
    NoRegions,
}

/// Which app series a region switch loaded and unloaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesDiff {
    pub loaded: Vec<String>,
    pub unloaded: Vec<String>,
}

impl SeriesDiff {
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty() && self.unloaded.is_empty()
    }
}

/// The chart widget's mutable state: a dataset, the active region, the
/// viewport size, and a theme. Rendering always reflects the current state.
pub struct ChartView {
    dataset: ShareDataset,
    region: String,
    width: i32,
    height: i32,
    theme: Theme,
}

impl ChartView {
    pub fn new(dataset: ShareDataset) -> Result<Self, ViewError> {
        let region = if dataset.regions().iter().any(|r| r == DEFAULT_REGION) {
            DEFAULT_REGION.to_string()
        } else {
            dataset
                .regions()
                .first()
                .cloned()
                .ok_or(ViewError::NoRegions)?
        };
        Ok(Self {
            dataset,
            region,
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn dataset(&self) -> &ShareDataset {
        &self.dataset
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch the active region. The returned diff lists app series newly
    /// loaded and series unloaded (present before, absent now).
    pub fn set_region(&mut self, region: &str) -> Result<SeriesDiff, ViewError> {
        let new_apps: Vec<String> = self
            .dataset
            .columns_for(region)
            .ok_or_else(|| ViewError::UnknownRegion(region.to_string()))?
            .iter()
            .map(|c| c.app.clone())
            .collect();
        let old_apps: Vec<String> = self.columns().iter().map(|c| c.app.clone()).collect();

        let loaded = new_apps
            .iter()
            .filter(|a| !old_apps.contains(a))
            .cloned()
            .collect();
        let unloaded = old_apps
            .iter()
            .filter(|a| !new_apps.contains(a))
            .cloned()
            .collect();

        self.region = region.to_string();
        Ok(SeriesDiff { loaded, unloaded })
    }

    /// Update the viewport; the next render uses the new pixel size.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// The active region's columns.
    pub fn columns(&self) -> &[ShareColumn] {
        self.dataset.columns_for(&self.region).unwrap_or(&[])
    }

    pub fn render_svg(&self) -> Result<String> {
        self.chart().render_to_svg_string(&self.options())
    }

    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        self.chart().render_to_png_bytes(&self.options())
    }

    fn chart(&self) -> Chart {
        Chart::from_columns(self.dataset.dates().to_vec(), self.columns().to_vec())
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: self.theme,
            ..Default::default()
        }
    }
}
