use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use tiled_transforms::{
    TransformAos, TransformSoa, TransformSystem, TransformTiles, TransformVec2Soa, Vec2,
};

const ENTITY_COUNT: usize = 1024 * 1024;
const DELTA: Vec2 = Vec2::new(22.0, -4.0);
const FACTOR: f32 = 3.0;
const ANGLE: f32 = 45.0;

fn bench_layout<T: TransformSystem>(c: &mut Criterion, name: &str, mut system: T) {
    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(ENTITY_COUNT as u64));
    group.bench_function(name, |b| {
        b.iter(|| {
            system.translate(black_box(DELTA));
            system.scale(black_box(FACTOR));
            system.rotate(black_box(ANGLE));
        })
    });
    group.finish();
    black_box(system.get(0));
}

#[cfg(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
    all(target_arch = "aarch64", target_feature = "neon"),
))]
fn bench_aosoa_4_vectorized(c: &mut Criterion) {
    let mut tiles = TransformTiles::<4>::new_random(ENTITY_COUNT).unwrap();
    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(ENTITY_COUNT as u64));
    group.bench_function("aosoa_4_vectorized", |b| {
        b.iter(|| {
            tiles.translate_vectorized(black_box(DELTA));
            tiles.scale_vectorized(black_box(FACTOR));
            tiles.rotate_vectorized(black_box(ANGLE));
        })
    });
    group.finish();
    black_box(tiles.get(0));
}

#[cfg(not(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
fn bench_aosoa_4_vectorized(_: &mut Criterion) {}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx"))]
fn bench_aosoa_8_vectorized(c: &mut Criterion) {
    let mut tiles = TransformTiles::<8>::new_random(ENTITY_COUNT).unwrap();
    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(ENTITY_COUNT as u64));
    group.bench_function("aosoa_8_vectorized", |b| {
        b.iter(|| {
            tiles.translate_vectorized(black_box(DELTA));
            tiles.scale_vectorized(black_box(FACTOR));
            tiles.rotate_vectorized(black_box(ANGLE));
        })
    });
    group.finish();
    black_box(tiles.get(0));
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx")))]
fn bench_aosoa_8_vectorized(_: &mut Criterion) {}

fn criterion_benchmark(c: &mut Criterion) {
    let aos = TransformAos::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "aos", aos);
    let soa = TransformSoa::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "soa", soa);
    let soa_vec2 = TransformVec2Soa::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "soa_vec2", soa_vec2);
    let aosoa_4 = TransformTiles::<4>::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "aosoa_4", aosoa_4);
    let aosoa_8 = TransformTiles::<8>::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "aosoa_8", aosoa_8);
    let aosoa_16 = TransformTiles::<16>::new_random(ENTITY_COUNT).unwrap();
    bench_layout(c, "aosoa_16", aosoa_16);
    bench_aosoa_4_vectorized(c);
    bench_aosoa_8_vectorized(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
