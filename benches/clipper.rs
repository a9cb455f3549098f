use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planeview::clipper::SegmentClipper;
use planeview::colors;
use planeview::math::vec3::Vec3;
use planeview::navigation::ViewState;
use planeview::render::Renderer;
use planeview::scene::Wireframe;
use planeview::viewport::Viewport;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn segments_in_front() -> (Vec3, Vec3) {
    (Vec3::new(-2.0, -3.0, 0.0), Vec3::new(4.0, 1.0, 2.0))
}

fn segments_crossing() -> (Vec3, Vec3) {
    (Vec3::new(30.0, 30.0, 5.0), Vec3::new(0.0, 0.0, 0.0))
}

fn segments_behind() -> (Vec3, Vec3) {
    (Vec3::new(30.0, 30.0, 5.0), Vec3::new(40.0, 25.0, 8.0))
}

fn benchmark_clip_and_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_and_project");

    let camera = ViewState::default().camera().expect("default view is valid");
    let clipper = SegmentClipper::default();

    for (name, (start, end)) in [
        ("in_front", segments_in_front()),
        ("crossing", segments_crossing()),
        ("behind", segments_behind()),
    ] {
        group.bench_with_input(BenchmarkId::new("segment", name), &(start, end), |b, &(s, e)| {
            b.iter(|| clipper.clip_and_project(black_box(&camera), black_box(s), black_box(e)));
        });
    }

    group.finish();
}

fn benchmark_draw_wireframe(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_wireframe");

    let camera = ViewState::default().camera().expect("default view is valid");
    let clipper = SegmentClipper::default();
    let viewport =
        Viewport::centered(10.0, BUFFER_WIDTH, BUFFER_HEIGHT).expect("viewport is valid");

    for extent in [10.0, 50.0] {
        let mut scene = Wireframe::grid(extent, 1.0, colors::GRID);
        scene.extend(Wireframe::axes(extent));

        group.bench_with_input(BenchmarkId::new("grid", extent as u32), &scene, |b, scene| {
            let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| renderer.draw_wireframe(black_box(scene), &camera, &clipper, &viewport));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_clip_and_project, benchmark_draw_wireframe);
criterion_main!(benches);
