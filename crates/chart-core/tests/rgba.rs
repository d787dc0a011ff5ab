// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{build_option, Chart, ChartKind, DisplayOptions, RenderOptions, Theme};

fn chart(kind: ChartKind) -> Chart {
    let theme = Theme::default();
    let option = build_option(kind, &DisplayOptions::default(), &theme).expect("option");
    Chart::new(option, theme)
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() }; // avoid font variance
    let (px, w, h, stride) = chart(ChartKind::Line).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn download_background_is_white() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::download() };
    let (px, w, h, _) = chart(ChartKind::Scatter).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (2048, 1280));
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn pie_centre_is_painted() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart(ChartKind::Pie).render_to_rgba8(&opts).expect("rgba render");
    let at = |x: u32, y: u32| {
        let i = y as usize * stride + x as usize * 4;
        [px[i], px[i + 1], px[i + 2], px[i + 3]]
    };
    // plot centre is (532, 330); 45 degrees clockwise from 12 o'clock lies in the first slice
    let bg = at(1, 1);
    assert_eq!((w, h), (1024, 640));
    assert_ne!(at(592, 270), bg);
}
