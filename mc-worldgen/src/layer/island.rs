use mc_core::biome::BiomeCode as B;

use super::{impl_layer, LayerData, LayerInternal, State};

#[inline]
fn is_ocean(biome: i32) -> bool {
    biome == B::Ocean.id()
}

/// No child: seeds the land/ocean mask the rest of the island branch builds
/// on, and forces a spawn island at world origin.
fn island(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);
            output.set(dx, dz, match internal.rand.next_int(10) {
                0 => State::Biome(B::Plains.id()),
                _ => State::Biome(B::Ocean.id()),
            });
        }
    }

    if x <= 0 && z <= 0 && x > -(output.x_size as i32) && z > -(output.z_size as i32) {
        output.set((-x) as usize, (-z) as usize, State::Biome(B::Plains.id()));
    }
}

/// Reservoir-samples a non-ocean diagonal corner to grow or shrink land.
fn add_island(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let sw = input.get(dx, dz).expect_biome();
            let nw = input.get(dx + 2, dz).expect_biome();
            let se = input.get(dx, dz + 2).expect_biome();
            let ne = input.get(dx + 2, dz + 2).expect_biome();
            let mut center = input.get(dx + 1, dz + 1).expect_biome();

            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            if is_ocean(center) && (!is_ocean(sw) || !is_ocean(nw) || !is_ocean(se) || !is_ocean(ne)) {

                let mut corner_probability = 1u32;
                let mut picked = B::Plains.id();

                for &corner in &[sw, nw, se, ne] {
                    if !is_ocean(corner) {
                        if internal.rand.next_int(corner_probability) == 0 {
                            picked = corner;
                        }
                        corner_probability += 1;
                    }
                }

                center = if internal.rand.next_int(3) == 0 {
                    picked
                } else if picked == B::PlainsIce.id() {
                    B::OceanFrozen.id()
                } else {
                    B::Ocean.id()
                };

            } else if !is_ocean(center) && (is_ocean(sw) || is_ocean(nw) || is_ocean(se) || is_ocean(ne)) {
                if internal.rand.next_int(5) == 0 {
                    center = if center == B::PlainsIce.id() { B::OceanFrozen.id() } else { B::Ocean.id() };
                }
            }

            output.set(dx, dz, State::Biome(center));
        }
    }
}

/// All-ocean diagonal neighborhood has a 1% chance of sprouting a mushroom
/// island.
fn add_mushroom_island(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let sw = input.get(dx, dz).expect_biome();
            let nw = input.get(dx + 2, dz).expect_biome();
            let se = input.get(dx, dz + 2).expect_biome();
            let ne = input.get(dx + 2, dz + 2).expect_biome();
            let center = input.get(dx + 1, dz + 1).expect_biome();

            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let result = if is_ocean(center) && is_ocean(sw) && is_ocean(nw) && is_ocean(se) && is_ocean(ne)
                && internal.rand.next_int(100) == 0
            {
                B::MushroomIsland.id()
            } else {
                center
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

impl_layer!(orphan island, new_island, "Island");
impl_layer!(add_island, new_add_island, "AddIsland");
impl_layer!(add_mushroom_island, new_add_mushroom_island, "AddMushroomIsland");
