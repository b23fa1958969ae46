//! The region driver: tiles a requested rectangle of block columns into
//! 16x16 chunks, runs each chunk through the biome pipeline, and renders the
//! result as a row-major RGB byte buffer.

use std::collections::HashMap;
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use mc_core::biome::{BiomeCode, WorldType};
use mc_core::error::{CoreError, CoreResult};
use mc_core::seed::parse_seed;

use crate::layer::Layer;
use crate::pipeline::build_pipeline;

/// Biome id to RGB, built once and shared by every render call; cheaper
/// than re-walking `BiomeCode::from_id`'s match arm per pixel.
static COLOR_CACHE: Lazy<HashMap<i32, (u8, u8, u8)>> = Lazy::new(|| {
    BiomeCode::iter().map(|code| (code.id(), code.color())).collect()
});

/// Chunk size in block columns, on both axes. Every rendered region is
/// rounded outward to a multiple of this.
pub const CHUNK_SIZE: i32 = 16;

/// A single call into the region driver.
#[derive(Debug, Clone)]
pub struct RegionRequest {
    pub seed: i64,
    pub world_type: WorldType,
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub depth: i32,
    /// Selects which of [`build_pipeline`]'s two outputs to render: the
    /// block-resolution `block_biome` grid (`false`) or `VoronoiZoom`'s
    /// 1:1-resolution `index_biome` grid (`true`).
    pub use_index_layer: bool,
}

impl RegionRequest {
    pub fn new(seed: i64, world_type: WorldType, x: i32, z: i32, width: i32, depth: i32) -> Self {
        Self { seed, world_type, x, z, width, depth, use_index_layer: true }
    }

    /// Parses `seed_str` the way the region generator's console entry point
    /// does: a literal `i64` if it parses as one, otherwise its string hash.
    pub fn from_seed_str(seed_str: &str, world_type: WorldType, x: i32, z: i32, width: i32, depth: i32) -> Self {
        Self::new(parse_seed(seed_str), world_type, x, z, width, depth)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.width <= 0 {
            return Err(CoreError::InvalidArgument("width must be positive"));
        }
        if self.depth <= 0 {
            return Err(CoreError::InvalidArgument("depth must be positive"));
        }
        Ok(())
    }

    /// The chunk-aligned bounding box actually rendered: `x`/`z` rounded
    /// down to a multiple of [`CHUNK_SIZE`], `width`/`depth` rounded up so
    /// the box still fully covers the requested rectangle.
    fn aligned_bounds(&self) -> (i32, i32, i32, i32) {
        let x0 = self.x.div_euclid(CHUNK_SIZE) * CHUNK_SIZE;
        let z0 = self.z.div_euclid(CHUNK_SIZE) * CHUNK_SIZE;
        let x1 = (self.x + self.width + CHUNK_SIZE - 1).div_euclid(CHUNK_SIZE) * CHUNK_SIZE;
        let z1 = (self.z + self.depth + CHUNK_SIZE - 1).div_euclid(CHUNK_SIZE) * CHUNK_SIZE;
        (x0, z0, x1 - x0, z1 - z0)
    }

    fn select(&self, block_biome: Layer, index_biome: Layer) -> Layer {
        if self.use_index_layer { index_biome } else { block_biome }
    }
}

/// A rendered biome map: `pixels` is `width * depth * 3` RGB bytes, laid out
/// row-major with `z` as the outer axis (matching [`mc_core::util::Rect`]'s
/// own `x + z * x_size` addressing, one RGB triple per cell).
#[derive(Debug, Clone)]
pub struct RenderedRegion {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub depth: i32,
    pub pixels: Vec<u8>,
}

impl RenderedRegion {
    fn blank(x: i32, z: i32, width: i32, depth: i32) -> Self {
        Self { x, z, width, depth, pixels: vec![0u8; (width * depth * 3) as usize] }
    }

    fn paint_chunk(&mut self, chunk_x: i32, chunk_z: i32, chunk: &crate::layer::LayerData) {
        for dz in 0..chunk.z_size {
            for dx in 0..chunk.x_size {
                let rx = chunk_x - self.x + dx as i32;
                let rz = chunk_z - self.z + dz as i32;
                if rx < 0 || rz < 0 || rx >= self.width || rz >= self.depth {
                    continue;
                }
                let biome = chunk.get(dx, dz).expect_biome();
                let color = COLOR_CACHE.get(&biome).copied().unwrap_or((0, 0, 0));
                let idx = ((rz * self.width + rx) * 3) as usize;
                self.pixels[idx] = color.0;
                self.pixels[idx + 1] = color.1;
                self.pixels[idx + 2] = color.2;
            }
        }
    }
}

/// Renders `request` on the calling thread: builds one pipeline, seeds it,
/// and walks its chunk-aligned bounding box in row-major (`z` outer, `x`
/// inner) order, exactly the order a single-threaded reference
/// implementation would use.
pub fn render_region(request: &RegionRequest) -> CoreResult<RenderedRegion> {
    request.validate()?;

    let (block_biome, index_biome) = build_pipeline(request.world_type);
    let mut layer = request.select(block_biome, index_biome);
    layer.init_world_seed(request.seed);

    let (x0, z0, aligned_width, aligned_depth) = request.aligned_bounds();
    let mut region = RenderedRegion::blank(request.x, request.z, request.width, request.depth);

    let mut cz = z0;
    while cz < z0 + aligned_depth {
        let mut cx = x0;
        while cx < x0 + aligned_width {
            let chunk = layer.get_area(cx, cz, CHUNK_SIZE as usize, CHUNK_SIZE as usize);
            region.paint_chunk(cx, cz, &chunk);
            cx += CHUNK_SIZE;
        }
        cz += CHUNK_SIZE;
    }

    Ok(region)
}

/// Renders `request` across `worker_count` threads, one fully independent
/// pipeline instance per worker. A chunk's [`Layer::get_area`] mutates its
/// `LayerRand`'s `chunk_seed`, so no `Layer` may ever be shared across
/// threads; each worker here owns its own tree, built from the same seed
/// layout and therefore pure in `(world_seed, x, z)` regardless of which
/// worker happens to render it.
pub fn render_region_parallel(request: &RegionRequest, worker_count: usize) -> CoreResult<RenderedRegion> {
    request.validate()?;
    let worker_count = worker_count.max(1);

    let (x0, z0, aligned_width, aligned_depth) = request.aligned_bounds();

    let mut chunk_coords = Vec::new();
    let mut cz = z0;
    while cz < z0 + aligned_depth {
        let mut cx = x0;
        while cx < x0 + aligned_width {
            chunk_coords.push((cx, cz));
            cx += CHUNK_SIZE;
        }
        cz += CHUNK_SIZE;
    }

    let (task_sender, task_receiver) = unbounded::<(i32, i32)>();
    let (result_sender, result_receiver) = bounded::<(i32, i32, crate::layer::LayerData)>(256);

    for coord in &chunk_coords {
        task_sender.send(*coord).expect("task channel outlives its producer");
    }
    drop(task_sender);

    let mut handles = Vec::with_capacity(worker_count);
    for i in 0..worker_count {
        let task_receiver = task_receiver.clone();
        let result_sender = result_sender.clone();
        let world_type = request.world_type;
        let seed = request.seed;
        let use_index_layer = request.use_index_layer;

        let handle = thread::Builder::new()
            .name(format!("region render worker #{}", i))
            .spawn(move || {
                let (block_biome, index_biome) = build_pipeline(world_type);
                let mut layer = if use_index_layer { index_biome } else { block_biome };
                layer.init_world_seed(seed);

                while let Ok((cx, cz)) = task_receiver.recv() {
                    let chunk = layer.get_area(cx, cz, CHUNK_SIZE as usize, CHUNK_SIZE as usize);
                    if result_sender.send((cx, cz, chunk)).is_err() {
                        break;
                    }
                }
            })
            .expect("failed to spawn region render worker");

        handles.push(handle);
    }

    drop(result_sender);

    let mut region = RenderedRegion::blank(request.x, request.z, request.width, request.depth);
    let mut remaining = chunk_coords.len();
    while remaining > 0 {
        let (cx, cz, chunk) = result_receiver.recv().expect("a worker dropped its sender before finishing");
        region.paint_chunk(cx, cz, &chunk);
        remaining -= 1;
    }

    for handle in handles {
        let _ = handle.join();
    }

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        let request = RegionRequest::new(1, WorldType::Default, 0, 0, 0, 16);
        assert!(matches!(render_region(&request), Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn aligned_bounds_round_origin_down_and_size_up() {
        let request = RegionRequest::new(1, WorldType::Default, 5, -5, 20, 3);
        let (x0, z0, width, depth) = request.aligned_bounds();
        assert_eq!(x0, 0);
        assert_eq!(z0, -16);
        assert_eq!(width, 32);
        assert_eq!(depth, 16);
    }

    #[test]
    fn rendered_buffer_matches_requested_dimensions() {
        let request = RegionRequest::new(42, WorldType::Default, 0, 0, 16, 16);
        let region = render_region(&request).unwrap();
        assert_eq!(region.pixels.len(), (16 * 16 * 3) as usize);
    }

    #[test]
    fn single_and_parallel_drivers_agree() {
        let request = RegionRequest::new(7, WorldType::Default, -8, 24, 40, 40);
        let single = render_region(&request).unwrap();
        let parallel = render_region_parallel(&request, 4).unwrap();
        assert_eq!(single.pixels, parallel.pixels);
    }

    #[test]
    fn from_seed_str_matches_numeric_seed() {
        let by_number = RegionRequest::new(1234, WorldType::Default, 0, 0, 16, 16);
        let by_string = RegionRequest::from_seed_str("1234", WorldType::Default, 0, 0, 16, 16);
        assert_eq!(render_region(&by_number).unwrap().pixels, render_region(&by_string).unwrap().pixels);
    }
}
