// File: crates/marketshare-examples/src/bin/regions.rs
// Summary: Minimal example that renders a two-app share chart to SVG.

use chrono::NaiveDate;
use marketshare_core::{Chart, RenderOptions, ShareColumn};

fn main() {
    let dates: Vec<NaiveDate> = (1..=6)
        .map(|m| NaiveDate::from_ymd_opt(2015, m, 1).expect("valid date"))
        .collect();

    let columns = vec![
        ShareColumn::with_values(
            "uber",
            vec![Some(0.58), Some(0.60), Some(0.63), Some(0.62), Some(0.65), Some(0.67)],
        ),
        ShareColumn::with_values(
            "lyft",
            vec![Some(0.30), Some(0.29), Some(0.27), Some(0.28), Some(0.26), Some(0.25)],
        ),
    ];

    let chart = Chart::from_columns(dates, columns);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_regions.svg");
    chart.render_to_svg(&opts, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}
