use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use skywrap_projector::*;

fn gradient_faces(size: u32) -> FaceSet {
    FaceSet::from_fn(|face| {
        RgbImage::from_fn(size, size, |x, y| Rgb([face.index() as u8 * 40, x as u8, y as u8]))
    })
    .unwrap()
}

fn bench_direction_to_face_uv(c: &mut Criterion) {
    let dir = black_box(pixel_direction(37, 11, 128, 64));
    c.bench_function("direction_to_face_uv", |bencher| {
        bencher.iter(|| black_box(direction_to_face_uv(dir)))
    });
}

fn bench_sample_pixel(c: &mut Criterion) {
    let faces = gradient_faces(256);
    c.bench_function("sample_pixel", |bencher| {
        bencher.iter(|| black_box(sample_pixel(&faces, black_box(513), black_box(200), 1024, 512)))
    });
}

fn bench_project_512x256(c: &mut Criterion) {
    let faces = gradient_faces(128);
    c.bench_function("project_512x256", |bencher| {
        bencher.iter(|| black_box(project(&faces, 512, 256)))
    });
}

criterion_group!(
    benches,
    bench_direction_to_face_uv,
    bench_sample_pixel,
    bench_project_512x256
);
criterion_main!(benches);
