//! `AddSnow`: stamps the land/ocean mask with a 1-in-5 chance of ice,
//! leaving ocean untouched.

use mc_core::biome::BiomeCode as B;

use super::{impl_layer, LayerData, LayerInternal, State};

/// Every non-ocean center becomes `PlainsIce` with probability 1/5, `Plains`
/// otherwise; ocean passes through unchanged.
fn add_snow(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = input.get(dx + 1, dz + 1).expect_biome();
            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let result = if center != B::Ocean.id() {
                if internal.rand.next_int(5) == 0 { B::PlainsIce.id() } else { B::Plains.id() }
            } else {
                center
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

impl_layer!(add_snow, new_add_snow, "AddSnow");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use mc_core::biome::BiomeCode;

    #[test]
    fn output_is_always_a_known_biome() {
        let base = Layer::new_island(1);
        let mut snow = Layer::new_add_snow(3, base);
        snow.init_world_seed(2);
        let area = snow.get_area(0, 0, 8, 8);
        for state in area.data.iter() {
            assert!(BiomeCode::from_id(state.expect_biome()).is_some());
        }
    }

    #[test]
    fn ocean_is_never_touched() {
        let base = Layer::new_island(1);
        let mut snow = Layer::new_add_snow(3, base);
        snow.init_world_seed(7);
        let area = snow.get_area(100, 100, 8, 8);
        for (dx, state) in area.data.iter().enumerate() {
            let _ = dx;
            assert!(state.expect_biome() == B::Ocean.id()
                || state.expect_biome() == B::Plains.id()
                || state.expect_biome() == B::PlainsIce.id());
        }
    }
}
