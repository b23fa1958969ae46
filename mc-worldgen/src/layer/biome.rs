//! The land/hills branch's biome-assignment layers: `BiomeInit` (stamps real
//! biome codes onto the plains/ocean mask), `Hills` (carves hill variants),
//! `Shore` (beaches and edges), and the two layers that fold the river
//! branch back in, `SwampRiver` and `RiverMixer`.

use mc_core::biome::BiomeCode as B;

use super::{impl_layer, Layer, LayerData, LayerInternal, State};

const ALLOWED_WITH_JUNGLE: [i32; 7] = [
    B::Desert as i32, B::Forest as i32, B::HillsExtreme as i32,
    B::Swamp as i32, B::Plains as i32, B::Taiga as i32, B::Jungle as i32,
];

const ALLOWED_NO_JUNGLE: [i32; 6] = [
    B::Desert as i32, B::Forest as i32, B::HillsExtreme as i32,
    B::Swamp as i32, B::Plains as i32, B::Taiga as i32,
];

/// `Ocean`/`MushroomIsland` pass through untouched; `Plains` is replaced by
/// a uniform draw from `allowed`; anything else takes a single probing
/// draw from `allowed` and becomes `Taiga` if that draw landed on `Taiga`,
/// `PlainsIce` otherwise. The probing draw still runs (and still advances
/// the RNG stream) even though the land/ocean mask feeding this layer never
/// actually produces that third case — later layers depend on the stream
/// position this leaves behind.
fn biome_init_with(allowed: &[i32], x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x, z, output.x_size, output.z_size);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let biome = input.get(dx, dz).expect_biome();
            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let result = if biome == B::Ocean.id() || biome == B::MushroomIsland.id() {
                biome
            } else if biome == B::Plains.id() {
                internal.rand.choose(allowed)
            } else {
                let probe = internal.rand.choose(allowed);
                if probe == B::Taiga.id() { B::Taiga.id() } else { B::PlainsIce.id() }
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

fn biome_init_default(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    biome_init_with(&ALLOWED_WITH_JUNGLE, x, z, output, internal);
}

fn biome_init_no_jungle(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    biome_init_with(&ALLOWED_NO_JUNGLE, x, z, output, internal);
}

#[inline]
fn hill_variant(biome: i32) -> i32 {
    if biome == B::Desert.id() {
        B::HillsDesert.id()
    } else if biome == B::Forest.id() {
        B::HillsForest.id()
    } else if biome == B::Taiga.id() {
        B::HillsTaiga.id()
    } else if biome == B::PlainsIce.id() {
        B::HillsExtremeIce.id()
    } else if biome == B::Jungle.id() {
        B::HillsJungle.id()
    } else if biome == B::Plains.id() {
        B::Forest.id()
    } else {
        biome
    }
}

/// A 1-in-3 chance per cell of promoting the center biome to its hill
/// variant, gated on all four orthogonal neighbors still matching the
/// center — which keeps variants from bleeding across an already-settled
/// boundary.
fn hills(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = input.get(dx + 1, dz + 1).expect_biome();

            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let mut result = center;

            if internal.rand.next_int(3) == 0 {
                let hilled = hill_variant(center);
                if hilled != center {
                    let north = input.get(dx + 1, dz).expect_biome();
                    let south = input.get(dx + 1, dz + 2).expect_biome();
                    let west = input.get(dx, dz + 1).expect_biome();
                    let east = input.get(dx + 2, dz + 1).expect_biome();
                    if north == center && south == center && west == center && east == center {
                        result = hilled;
                    }
                }
            }

            output.set(dx, dz, State::Biome(result));
        }
    }
}

/// A purely deterministic pass: no RNG draw, only the four-neighbor mask
/// matters. `MushroomIsland` touching `Ocean` becomes `MushroomBeach`;
/// anything but `Ocean`/`River`/`Swamp`/`HillsExtreme` touching `Ocean`
/// becomes `Beach`; `HillsExtreme` not fully surrounded by more of itself
/// becomes `HillsExtremeEdge`; everything else passes through unchanged.
fn shore(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = input.get(dx + 1, dz + 1).expect_biome();
            let north = input.get(dx + 1, dz).expect_biome();
            let south = input.get(dx + 1, dz + 2).expect_biome();
            let west = input.get(dx, dz + 1).expect_biome();
            let east = input.get(dx + 2, dz + 1).expect_biome();
            let neighbors = [north, south, west, east];

            let result = if center == B::MushroomIsland.id() {
                if neighbors.iter().any(|&b| b == B::Ocean.id()) {
                    B::MushroomBeach.id()
                } else {
                    center
                }
            } else if center != B::Ocean.id() && center != B::River.id() && center != B::Swamp.id()
                && center != B::HillsExtreme.id()
            {
                if neighbors.iter().any(|&b| b == B::Ocean.id()) {
                    B::Beach.id()
                } else {
                    center
                }
            } else if center == B::HillsExtreme.id() {
                if neighbors.iter().all(|&b| b == B::HillsExtreme.id()) {
                    center
                } else {
                    B::HillsExtremeEdge.id()
                }
            } else {
                center
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

/// A single-cell read (no orthogonal stencil, padding 1 only for offset
/// alignment): `Swamp` has a 1-in-6 chance of becoming `River`,
/// `Jungle`/`HillsJungle` a 1-in-8 chance; every other biome passes through.
/// The two checks draw independently — only the matching branch's draw
/// happens, by short-circuit evaluation.
fn swamp_river(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = input.get(dx + 1, dz + 1).expect_biome();
            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let result = if center == B::Swamp.id() && internal.rand.next_int(6) == 0 {
                B::River.id()
            } else if (center == B::Jungle.id() || center == B::HillsJungle.id()) && internal.rand.next_int(8) == 0 {
                B::River.id()
            } else {
                center
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

/// Joins the land/hills branch (`parent`) with the river branch
/// (`parent_aux`): ocean cells are immune to rivers; a `River` marker
/// becomes `RiverFrozen` under `PlainsIce`, `River` otherwise; a
/// mushroom-island cell adjacent to a river becomes `MushroomBeach` instead;
/// everything else keeps its land biome. No RNG draw.
fn river_mixer(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let land = internal.expect_parent().generate(x, z, output.x_size, output.z_size);
    let river = internal.expect_parent_aux().generate(x, z, output.x_size, output.z_size);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let biome = land.get(dx, dz).expect_biome();

            let result = if biome == B::Ocean.id() {
                biome
            } else if river.get(dx, dz) == State::River {
                if biome == B::PlainsIce.id() {
                    B::RiverFrozen.id()
                } else if biome == B::MushroomIsland.id() || biome == B::MushroomBeach.id() {
                    B::MushroomBeach.id()
                } else {
                    B::River.id()
                }
            } else {
                biome
            };

            output.set(dx, dz, State::Biome(result));
        }
    }
}

impl_layer!(biome_init_default, new_biome_init_default, "Biome");
impl_layer!(biome_init_no_jungle, new_biome_init_no_jungle, "Biome");
impl_layer!(hills, new_hills, "Hills");
impl_layer!(shore, new_shore, "Beach");
impl_layer!(swamp_river, new_swamp_river, "SwampRiver");
impl_layer!(join river_mixer, new_river_mixer, "RiverMixer");

impl Layer {
    /// Picks the allowed-biome table for `BiomeInit` by whether the world
    /// type excludes `Jungle`.
    pub fn new_biome_init(base_seed: i64, parent: Layer, allows_jungle: bool) -> Layer {
        if allows_jungle {
            Layer::new_biome_init_default(base_seed, parent)
        } else {
            Layer::new_biome_init_no_jungle(base_seed, parent)
        }
    }
}
