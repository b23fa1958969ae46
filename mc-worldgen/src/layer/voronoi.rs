//! `VoronoiZoom`: the final 1:4 zoom pass. Unlike `Zoom`, it does not
//! interpolate a 2x2 stencil; it jitters the four corners of each child
//! cell into fractional offsets and assigns every one of the 4x4 output
//! sub-cells to whichever jittered corner is nearest, in squared Euclidean
//! distance.

use super::{impl_layer, LayerData, LayerInternal, State};

/// `next_double_unit(1024) * 3.6`, the jitter scale shared by all four
/// corners.
#[inline]
fn jitter(internal: &mut LayerInternal) -> f64 {
    internal.rand.next_double_unit(1024) * 3.6
}

fn voronoi_zoom(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let x = x - 2;
    let z = z - 2;

    let px = x >> 2;
    let pz = z >> 2;
    let px_size = (output.x_size >> 2) + 3;
    let pz_size = (output.z_size >> 2) + 3;

    let input = internal.expect_parent().generate(px, pz, px_size, pz_size);

    let temp_x_size = (px_size - 1) * 4;
    let temp_z_size = (pz_size - 1) * 4;
    let mut temp = LayerData::new(temp_x_size, temp_z_size, State::Uninit);

    for pdz in 0..(pz_size - 1) {
        for pdx in 0..(px_size - 1) {
            let top_accl = input.get(pdx, pdz).expect_biome();
            let top_next = input.get(pdx + 1, pdz).expect_biome();
            let bot_accl = input.get(pdx, pdz + 1).expect_biome();
            let bot_next = input.get(pdx + 1, pdz + 1).expect_biome();

            let cell_x = (px + pdx as i32) << 2;
            let cell_z = (pz + pdz as i32) << 2;

            internal.rand.init_chunk_seed(cell_x, cell_z);
            let corner_tl_x = jitter(internal);
            let corner_tl_z = jitter(internal);

            internal.rand.init_chunk_seed(cell_x + 4, cell_z);
            let corner_tr_x = jitter(internal) + 4.0;
            let corner_tr_z = jitter(internal);

            internal.rand.init_chunk_seed(cell_x, cell_z + 4);
            let corner_bl_x = jitter(internal);
            let corner_bl_z = jitter(internal) + 4.0;

            internal.rand.init_chunk_seed(cell_x + 4, cell_z + 4);
            let corner_br_x = jitter(internal) + 4.0;
            let corner_br_z = jitter(internal) + 4.0;

            let tx = pdx * 4;
            let tz = pdz * 4;

            for sub_z in 0..4i32 {
                for sub_x in 0..4i32 {
                    let fx = sub_x as f64;
                    let fz = sub_z as f64;

                    let dist_tl = (fz - corner_tl_z) * (fz - corner_tl_z) + (fx - corner_tl_x) * (fx - corner_tl_x);
                    let dist_tr = (fz - corner_tr_z) * (fz - corner_tr_z) + (fx - corner_tr_x) * (fx - corner_tr_x);
                    let dist_bl = (fz - corner_bl_z) * (fz - corner_bl_z) + (fx - corner_bl_x) * (fx - corner_bl_x);
                    let dist_br = (fz - corner_br_z) * (fz - corner_br_z) + (fx - corner_br_x) * (fx - corner_br_x);

                    let value = if dist_tl < dist_tr && dist_tl < dist_bl && dist_tl < dist_br {
                        top_accl
                    } else if dist_tr < dist_tl && dist_tr < dist_bl && dist_tr < dist_br {
                        top_next
                    } else if dist_bl < dist_tl && dist_bl < dist_tr && dist_bl < dist_br {
                        bot_accl
                    } else {
                        bot_next
                    };

                    temp.set(tx + sub_x as usize, tz + sub_z as usize, State::Biome(value));
                }
            }
        }
    }

    let x_offset = (x & 3) as usize;
    let z_offset = (z & 3) as usize;
    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let value = temp.get(x_offset + dx, z_offset + dz).expect_biome();
            output.set(dx, dz, State::Biome(value));
        }
    }
}

impl_layer!(voronoi_zoom, new_voronoi_zoom, "VoronoiZoom");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use mc_core::biome::BiomeCode;

    #[test]
    fn output_is_always_a_known_biome() {
        let base = Layer::new_island(1);
        let mut voronoi = Layer::new_voronoi_zoom(10, base);
        voronoi.init_world_seed(5);
        let area = voronoi.get_area(0, 0, 16, 16);
        for state in area.data.iter() {
            assert!(BiomeCode::from_id(state.expect_biome()).is_some());
        }
    }

    #[test]
    fn same_input_is_deterministic() {
        let mut a = Layer::new_voronoi_zoom(10, Layer::new_island(1));
        let mut b = Layer::new_voronoi_zoom(10, Layer::new_island(1));
        a.init_world_seed(42);
        b.init_world_seed(42);
        assert_eq!(a.get_area(3, -7, 16, 16).data, b.get_area(3, -7, 16, 16).data);
    }
}
