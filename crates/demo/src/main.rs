// File: crates/demo/src/main.rs
// Summary: Demo loads a share CSV and renders every region to SVG and PNG.

use anyhow::{Context, Result};
use marketshare_core::{load_records, theme, ChartView, ShareDataset};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the sample dataset (supports
    // .csv/.cvs swap). Optional second arg picks one region, third a theme.
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/rideshare_share.csv".to_string());
    let region_arg = std::env::args().nth(2);
    let theme_name = std::env::args().nth(3).unwrap_or_else(|| "light".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let records = load_records(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", records.len());

    let dataset = ShareDataset::from_records(&records);
    let dates = dataset.dates();
    println!(
        "Dates: {} ({} .. {})",
        dates.len(),
        dates.first().map(|d| d.to_string()).unwrap_or_default(),
        dates.last().map(|d| d.to_string()).unwrap_or_default(),
    );
    println!("Regions: {:?}", dataset.regions());

    let regions: Vec<String> = match region_arg {
        Some(r) => vec![r],
        None => dataset.regions().to_vec(),
    };

    let mut view = ChartView::new(dataset)?;
    view.set_theme(theme::find(&theme_name));

    for region in &regions {
        let diff = view
            .set_region(region)
            .with_context(|| format!("selecting region '{region}'"))?;
        if !diff.is_empty() {
            println!(
                "{}: +{} series, -{} series",
                region,
                diff.loaded.len(),
                diff.unloaded.len()
            );
        }

        let out_svg = out_name(region, "svg");
        let svg = view.render_svg()?;
        std::fs::write(&out_svg, &svg)
            .with_context(|| format!("writing {}", out_svg.display()))?;
        println!("Wrote {}", out_svg.display());

        let out_png = out_name(region, "png");
        let png = view.render_png_bytes()?;
        std::fs::write(&out_png, &png)
            .with_context(|| format!("writing {}", out_png.display()))?;
        println!("Wrote {}", out_png.display());
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    match p.extension()?.to_string_lossy().to_lowercase().as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/share_<region>.<ext>
fn out_name(region: &str, ext: &str) -> PathBuf {
    let slug: String = region
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("share_{slug}.{ext}"))
}
