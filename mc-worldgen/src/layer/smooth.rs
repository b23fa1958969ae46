//! `Smooth`: erodes single-cell diagonal checkerboard artifacts left behind
//! by the zoom cascade.
//!
//! The pipeline runs this same rule over two different cell domains: real
//! biome codes on the land branch, and the river branch's binary
//! `NoRiver`/`River` markers (post-`River`, pre-`RiverMixer`). Neither the
//! reference nor this layer cares which domain it is smoothing — it only
//! ever compares cells for equality and copies one of them through — so it
//! operates on whole [`State`] values rather than unwrapping to a biome id.

use super::{impl_layer, LayerData, LayerInternal, State};

fn smooth(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = *input.get(dx + 1, dz + 1);
            let north = *input.get(dx + 1, dz);
            let south = *input.get(dx + 1, dz + 2);
            let west = *input.get(dx, dz + 1);
            let east = *input.get(dx + 2, dz + 1);

            let mut result = center;

            if north == south && west == east {
                internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);
                result = if internal.rand.next_int(2) == 0 { west } else { north };
            } else {
                if north == south {
                    result = north;
                }
                if west == east {
                    result = west;
                }
            }

            output.set(dx, dz, result);
        }
    }
}

impl_layer!(smooth, new_smooth, "Smooth");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use mc_core::biome::BiomeCode;

    #[test]
    fn smoothing_the_river_branch_never_unwraps_a_biome() {
        // River produces NoRiver/River markers, never a State::Biome; Smooth
        // must not assume the Biome variant when it sits downstream of River.
        let island = Layer::new_island(1);
        let river_init = Layer::new_river_init(100, island);
        let river = Layer::new_river(1, river_init);
        let mut smoothed = Layer::new_smooth(1000, river);
        smoothed.init_world_seed(5);
        let area = smoothed.get_area(0, 0, 16, 16);
        for state in area.data.iter() {
            assert!(matches!(state, State::River | State::NoRiver));
        }
    }

    #[test]
    fn smoothing_the_land_branch_still_yields_known_biomes() {
        let base = Layer::new_island(1);
        let mut smoothed = Layer::new_smooth(1000, base);
        smoothed.init_world_seed(5);
        let area = smoothed.get_area(0, 0, 8, 8);
        for state in area.data.iter() {
            assert!(BiomeCode::from_id(state.expect_biome()).is_some());
        }
    }
}
