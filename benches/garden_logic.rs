use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zen_garden::core::{Garden, GardenConfig, GridGeometry, TileGrid};
use zen_garden::term::{FrameBuffer, GardenView, Viewport};
use zen_garden::types::Direction;

fn bench_classify(c: &mut Criterion) {
    let geometry = GridGeometry::square(20, 64, 64).unwrap();
    let mut grid = TileGrid::new(&geometry);

    c.bench_function("classify_64x64", |b| {
        b.iter(|| {
            grid.clear();
            grid.classify(black_box(&geometry));
        })
    });
}

fn bench_tap_cycle(c: &mut Criterion) {
    let geometry = GridGeometry::square(20, 14, 14).unwrap();
    let mut garden = Garden::new(geometry, GardenConfig::default());
    garden.press(Direction::Up, 0);

    c.bench_function("tap_cycle", |b| {
        let mut i = 0i32;
        b.iter(|| {
            i = (i + 7) % 196;
            let px = (i % 14) * 20 + 5;
            let py = (i / 14) * 20 + 5;
            garden.tap(black_box(px), black_box(py), 0);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let vp = Viewport::new(80, 24);
    let geometry = GridGeometry::fit(vp.width, vp.height, 2, 1, 14).unwrap();
    let mut garden = Garden::new(geometry, GardenConfig::default());
    garden.press(Direction::Up, 0);
    for i in 0..40 {
        garden.tap(8 + i * 2, 5 + i % 10, 0);
    }
    let snap = garden.snapshot();
    let view = GardenView::new();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(benches, bench_classify, bench_tap_cycle, bench_render);
criterion_main!(benches);
