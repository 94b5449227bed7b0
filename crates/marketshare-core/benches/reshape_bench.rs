use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marketshare_core::{ShareDataset, ShareRecord};

fn synthetic(days: usize, regions: usize, apps: usize) -> Vec<ShareRecord> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date");
    let mut out = Vec::with_capacity(days * regions * apps);
    for d in 0..days {
        let date = start + chrono::Days::new(d as u64);
        for r in 0..regions {
            for a in 0..apps {
                // drifting split between apps
                let share = ((d + a * 7) % 100) as f64 / 100.0;
                out.push(ShareRecord {
                    date,
                    region: format!("region-{r}"),
                    app: format!("app-{a}"),
                    share,
                });
            }
        }
    }
    out
}

fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape");
    for &days in &[365usize, 1_460usize] {
        let records = synthetic(days, 4, 6);
        group.bench_function(format!("days_{days}"), |b| {
            b.iter(|| {
                let ds = ShareDataset::from_records(black_box(&records));
                black_box(ds);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reshape);
criterion_main!(benches);
