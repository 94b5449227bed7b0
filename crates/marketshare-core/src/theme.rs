// File: crates/marketshare-core/src/theme.rs
// Summary: Light/Dark theming and the categorical series palette.

use skia_safe as skia;

pub const PALETTE_SIZE: usize = 10;

// The stock category-10 palette the source widget assigned per app series.
const PALETTE: [skia::Color; PALETTE_SIZE] = [
    skia::Color::new(0xff_1f77b4),
    skia::Color::new(0xff_ff7f0e),
    skia::Color::new(0xff_2ca02c),
    skia::Color::new(0xff_d62728),
    skia::Color::new(0xff_9467bd),
    skia::Color::new(0xff_8c564b),
    skia::Color::new(0xff_e377c2),
    skia::Color::new(0xff_7f7f7f),
    skia::Color::new(0xff_bcbd22),
    skia::Color::new(0xff_17becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub legend_text: skia::Color,
    pub palette: [skia::Color; PALETTE_SIZE],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick_label: skia::Color::from_argb(255, 100, 100, 110),
            legend_text: skia::Color::from_argb(255, 40, 40, 50),
            palette: PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
            palette: PALETTE,
        }
    }

    /// Stroke color for the `i`-th series, cycling the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % PALETTE_SIZE]
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
