use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mc_core::biome::WorldType;
use mc_worldgen::build_pipeline;

fn block_biome_chunk_benchmark(c: &mut Criterion) {
    let (mut block_biome, _) = build_pipeline(WorldType::Default);
    block_biome.init_world_seed(1234);

    c.bench_function("block_biome::get_area(16x16)", |b| {
        b.iter(|| block_biome.get_area(black_box(0), black_box(0), 16, 16));
    });
}

fn index_biome_chunk_benchmark(c: &mut Criterion) {
    let (_, mut index_biome) = build_pipeline(WorldType::Default);
    index_biome.init_world_seed(1234);

    c.bench_function("index_biome::get_area(16x16)", |b| {
        b.iter(|| index_biome.get_area(black_box(0), black_box(0), 16, 16));
    });
}

fn region_render_benchmark(c: &mut Criterion) {
    use mc_worldgen::region::{render_region, RegionRequest};

    let request = RegionRequest::new(1234, WorldType::Default, 0, 0, 256, 256);
    c.bench_function("render_region(256x256)", |b| {
        b.iter(|| render_region(&request).unwrap());
    });
}

criterion_group!(benches, block_biome_chunk_benchmark, index_biome_chunk_benchmark, region_render_benchmark);
criterion_main!(benches);
