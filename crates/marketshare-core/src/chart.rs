// File: crates/marketshare-core/src/chart.rs
// Summary: Chart model and headless SVG/PNG rendering via Skia surfaces.

use anyhow::Result;
use chrono::NaiveDate;
use skia_safe as skia;

use crate::axis::Axis;
use crate::scale::{CategoryScale, LinearScale};
use crate::series::ShareColumn;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Category tick labels are culled so at most this many dates are drawn.
const MAX_X_TICKS: usize = 10;

const TICK_FONT_PX: f32 = 12.0;
const LABEL_FONT_PX: f32 = 14.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// A fully specified plot: the date axis, one column per app, and the two
/// axis models. Rendering is headless; SVG and PNG share one drawing path.
pub struct Chart {
    pub columns: Vec<ShareColumn>,
    pub dates: Vec<NaiveDate>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            dates: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Build the chart a region's columns describe: category X over the
    /// dates, percent-formatted Y fitted to the data.
    pub fn from_columns(dates: Vec<NaiveDate>, columns: Vec<ShareColumn>) -> Self {
        let mut chart = Self {
            columns,
            dates,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        };
        chart.autoscale_y(0.02);
        chart
    }

    pub fn add_column(&mut self, column: ShareColumn) {
        self.columns.push(column);
    }

    /// Fit the Y axis to the data plus a fractional margin. All-gap charts
    /// fall back to 0..1.
    pub fn autoscale_y(&mut self, margin_frac: f64) {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for col in &self.columns {
            if let Some((lo, hi)) = col.value_range() {
                vmin = vmin.min(lo);
                vmax = vmax.max(hi);
            }
        }
        if !vmin.is_finite() || !vmax.is_finite() {
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        if (vmax - vmin).abs() < 1e-9 {
            vmax = vmin + 1.0;
        }
        let margin = (vmax - vmin) * margin_frac;
        self.y_axis.min = vmin - margin;
        self.y_axis.max = vmax + margin;
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an SVG document at `path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let svg = self.render_to_svg_string(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        Ok(())
    }

    /// Render the chart to an SVG document string.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        let data = canvas.end();
        let svg = String::from_utf8(data.as_bytes().to_vec())?;
        Ok(svg)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        if opts.width <= opts.insets.hsum() as i32 || opts.height <= opts.insets.vsum() as i32 {
            return;
        }
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let xscale = CategoryScale::new(plot_left as f32, plot_right as f32, self.dates.len());
        let yscale = LinearScale::new(
            plot_top as f32,
            plot_bottom as f32,
            self.y_axis.min,
            self.y_axis.max,
        );

        let shaper = TextShaper::new();

        draw_grid(canvas, &xscale, &yscale, self.y_axis.tick_count, theme);
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);
        if opts.draw_labels {
            draw_y_ticks(canvas, &shaper, &yscale, &self.y_axis, plot_left, theme);
            draw_x_ticks(canvas, &shaper, &xscale, &self.dates, plot_bottom, theme);
            draw_axis_titles(canvas, &shaper, self, plot_top, plot_right, plot_bottom, theme);
        }

        for (i, col) in self.columns.iter().enumerate() {
            draw_line_column(canvas, &xscale, &yscale, col, theme.series_color(i));
        }

        if opts.draw_labels {
            draw_legend(canvas, &shaper, &self.columns, opts, theme);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    xscale: &CategoryScale,
    yscale: &LinearScale,
    tick_count: usize,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // one horizontal line per Y tick
    for v in yscale.ticks(tick_count) {
        let y = yscale.to_px(v);
        canvas.draw_line((xscale.left_px, y), (xscale.right_px, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_y_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    yscale: &LinearScale,
    axis: &Axis,
    plot_left: i32,
    theme: &Theme,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let x0 = plot_left as f32;
    for v in yscale.ticks(axis.tick_count) {
        let y = yscale.to_px(v);
        canvas.draw_line((x0 - 4.0, y), (x0, y), &tick_paint);
        let label = axis.format_tick(v);
        shaper.draw_right(canvas, &label, x0 - 7.0, y + TICK_FONT_PX * 0.35, TICK_FONT_PX, theme.tick_label, true);
    }
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    xscale: &CategoryScale,
    dates: &[NaiveDate],
    plot_bottom: i32,
    theme: &Theme,
) {
    let n = dates.len();
    if n == 0 {
        return;
    }

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let y0 = plot_bottom as f32;
    let step = ((n + MAX_X_TICKS - 1) / MAX_X_TICKS).max(1);
    for i in (0..n).step_by(step) {
        let x = xscale.to_px(i);
        canvas.draw_line((x, y0), (x, y0 + 4.0), &tick_paint);
        let label = dates[i].format("%Y-%m-%d").to_string();
        shaper.draw_center(canvas, &label, x, y0 + 16.0, TICK_FONT_PX, theme.tick_label, true);
    }
}

fn draw_axis_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    chart: &Chart,
    t: i32,
    r: i32,
    b: i32,
    theme: &Theme,
) {
    shaper.draw_left(canvas, &chart.y_axis.label, 4.0, t as f32 - 6.0, LABEL_FONT_PX, theme.axis_label, false);
    shaper.draw_right(canvas, &chart.x_axis.label, r as f32, b as f32 + 32.0, LABEL_FONT_PX, theme.axis_label, false);
}

fn draw_line_column(
    canvas: &skia::Canvas,
    xscale: &CategoryScale,
    yscale: &LinearScale,
    column: &ShareColumn,
    color: skia::Color,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (i, v) in column.values.iter().enumerate() {
        match v {
            Some(share) => {
                let p = (xscale.to_px(i), yscale.to_px(*share));
                if pen_down {
                    path.line_to(p);
                } else {
                    path.move_to(p);
                    pen_down = true;
                }
            }
            // line breaks at a gap
            None => pen_down = false,
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);

    // data-point dots; these also keep isolated points visible
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for (i, v) in column.values.iter().enumerate() {
        if let Some(share) = v {
            canvas.draw_circle((xscale.to_px(i), yscale.to_px(*share)), 2.5, &fill);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    columns: &[ShareColumn],
    opts: &RenderOptions,
    theme: &Theme,
) {
    if columns.is_empty() {
        return;
    }

    const SWATCH: f32 = 10.0;
    const GAP: f32 = 5.0;
    const PAD: f32 = 18.0;

    let widths: Vec<f32> = columns
        .iter()
        .map(|c| SWATCH + GAP + shaper.measure_width(&c.app, TICK_FONT_PX, false))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + PAD * (columns.len() - 1) as f32;

    let mut x = (opts.width as f32 - total) * 0.5;
    let y = opts.height as f32 - 12.0;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, col) in columns.iter().enumerate() {
        fill.set_color(theme.series_color(i));
        let rect = skia::Rect::from_xywh(x, y - SWATCH + 1.0, SWATCH, SWATCH);
        canvas.draw_rect(rect, &fill);
        shaper.draw_left(canvas, &col.app, x + SWATCH + GAP, y, TICK_FONT_PX, theme.legend_text, false);
        x += widths[i] + PAD;
    }
}
