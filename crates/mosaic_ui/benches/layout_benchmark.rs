//! Benchmarks the per-frame region layout + draw pass.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use mosaic_ui::{
    FrameRenderer, InputState, MonospaceMetrics, Rect, RegionConfig, RegionManager, RegionStyle,
};

fn region_layout_draw(c: &mut Criterion) {
    let mut manager = RegionManager::new(RegionConfig::default());
    let input = InputState::new();
    let style = RegionStyle::LIGHT;
    let metrics = MonospaceMetrics::new();
    let mut renderer = FrameRenderer::new();

    c.bench_function("region_layout_draw", |b| {
        b.iter(|| {
            renderer.begin_frame();
            manager.draw(
                black_box(Rect::new(0.0, 0.0, 1920.0, 1080.0)),
                &input,
                &style,
                &metrics,
                &mut renderer,
            );
            renderer.command_count()
        });
    });
}

criterion_group!(benches, region_layout_draw);
criterion_main!(benches);
