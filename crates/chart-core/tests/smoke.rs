// File: crates/chart-core/tests/smoke.rs
// Purpose: Render every gallery chart end to end and write PNGs.

use chart_core::{build_option, Chart, ChartKind, DisplayOptions, RenderOptions, Theme};

#[test]
fn render_every_kind_png() {
    let theme = Theme::default();
    let out_dir = std::path::PathBuf::from("target/test_out");
    for kind in ChartKind::ALL {
        let option = build_option(kind, &DisplayOptions::default(), &theme).expect("option");
        let chart = Chart::new(option, theme.clone());

        let out = out_dir.join(format!("smoke-{}.png", kind.slug()));
        chart.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");

        let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    }
}

#[test]
fn render_toggled_datasets() {
    let theme = Theme::default();
    let display = DisplayOptions { multi_bar: true, donut: true, show_data_labels: true, ..Default::default() };
    for kind in [ChartKind::Bar, ChartKind::Pie] {
        let option = build_option(kind, &display, &theme).expect("option");
        let bytes = Chart::new(option, theme.clone())
            .render_to_png_bytes(&RenderOptions::download())
            .expect("render bytes");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(img.dimensions(), (2048, 1280));
    }
}
