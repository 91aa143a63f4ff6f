use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_orrery::core::{animate, catalog, Demo};
use tui_orrery::engine::Rasterizer;
use tui_orrery::term::{DemoView, FrameBuffer, Hud, Viewport};

const FRAME_DT: f32 = 1.0 / 30.0;

fn bench_animate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    for def in catalog() {
        let mut handle = def.build(&mut rng);
        let mut time = 0.0;
        c.bench_function(&format!("animate_{:?}", def.kind), |b| {
            b.iter(|| {
                time += FRAME_DT;
                animate(&mut handle, black_box(time), black_box(FRAME_DT));
            })
        });
    }
}

fn bench_render(c: &mut Criterion) {
    let viewport = Viewport::new(120, 40);
    let (w, h) = viewport.image_size();

    for (name, supersampling) in [("render_120x80", false), ("render_120x80_ss", true)] {
        let mut demo = Demo::new(StdRng::seed_from_u64(12345));
        demo.set_viewport(w, h);
        demo.frame(1.0);
        let mut rasterizer = Rasterizer::new(w, h);
        rasterizer.set_supersampling(supersampling);

        c.bench_function(name, |b| {
            b.iter(|| {
                black_box(rasterizer.render(demo.scene(), demo.camera()));
            })
        });
    }
}

fn bench_full_frame(c: &mut Criterion) {
    let viewport = Viewport::new(120, 40);
    let (w, h) = viewport.image_size();
    let mut demo = Demo::new(StdRng::seed_from_u64(12345));
    demo.set_viewport(w, h);
    let mut rasterizer = Rasterizer::new(w, h);
    let view = DemoView::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("full_frame_120x40", |b| {
        b.iter(|| {
            demo.frame(FRAME_DT);
            let image = rasterizer.render(demo.scene(), demo.camera());
            let hud = Hud {
                title: demo.title(),
                scene_index: demo.active_index(),
                scene_count: demo.scene_count(),
                fps: Some(30.0),
                supersampling: false,
            };
            view.render_into(image, &hud, viewport, &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(benches, bench_animate, bench_render, bench_full_frame);
criterion_main!(benches);
