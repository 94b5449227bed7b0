// File: crates/marketshare-core/tests/ticks.rs
// Purpose: Scale transforms and tick formatting.

use marketshare_core::axis::Axis;
use marketshare_core::scale::{linspace, CategoryScale, LinearScale};

#[test]
fn linear_ticks_span_the_domain() {
    let scale = LinearScale::new(0.0, 100.0, 0.0, 0.5);
    let ticks = scale.ticks(6);
    assert_eq!(ticks.len(), 6);
    assert!((ticks[0] - 0.0).abs() < 1e-12);
    assert!((ticks[5] - 0.5).abs() < 1e-12);
    assert!((ticks[1] - 0.1).abs() < 1e-12);
}

#[test]
fn percent_ticks_format_like_the_widget() {
    let axis = Axis::default_y();
    assert_eq!(axis.format_tick(0.123), "12.3%");
    assert_eq!(axis.format_tick(0.0), "0.0%");
    assert_eq!(axis.format_tick(1.0), "100.0%");
    assert_eq!(axis.format_tick(0.4567), "45.7%");
}

#[test]
fn plain_ticks_trim_trailing_zeros() {
    let axis = Axis::new("Y", 0.0, 1.0);
    assert_eq!(axis.format_tick(0.25), "0.25");
    assert_eq!(axis.format_tick(2.0), "2");
}

#[test]
fn category_scale_centers_bands() {
    let scale = CategoryScale::new(0.0, 100.0, 4);
    assert!((scale.to_px(0) - 12.5).abs() < 1e-6);
    assert!((scale.to_px(3) - 87.5).abs() < 1e-6);

    // nearest band, clamped
    assert_eq!(scale.from_px(13.0), 0);
    assert_eq!(scale.from_px(60.0), 2);
    assert_eq!(scale.from_px(-50.0), 0);
    assert_eq!(scale.from_px(500.0), 3);
}

#[test]
fn linear_scale_is_invertible() {
    let scale = LinearScale::new(20.0, 600.0, 0.1, 0.7);
    let px = scale.to_px(0.4);
    assert!((scale.from_px(px) - 0.4).abs() < 1e-6);
    // higher values sit higher on screen
    assert!(scale.to_px(0.7) < scale.to_px(0.1));
}

#[test]
fn zero_span_domain_is_widened() {
    let scale = LinearScale::new(0.0, 100.0, 0.4, 0.4);
    assert!(scale.vmax > scale.vmin);
    assert!(scale.to_px(0.4).is_finite());
}

#[test]
fn linspace_endpoints() {
    assert_eq!(linspace(1.0, 3.0, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0, 1.0]);
}
