use anyhow::Result;
use chart_core::{build_option, Chart, ChartKind, DisplayOptions, RenderOptions, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(kind: ChartKind) -> Result<Chart> {
    let theme = Theme::default();
    let option = build_option(kind, &DisplayOptions::default(), &theme)?;
    Ok(Chart::new(option, theme))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for kind in [ChartKind::Line, ChartKind::Histogram, ChartKind::Pie, ChartKind::Radar] {
        group.bench_function(kind.slug(), |b| {
            let ch = build_chart(kind).expect("option");
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
