//! `RiverInit`/`River`: a parallel branch that never sees real biome codes,
//! only the ocean/land mask relabeled into river-sentinel [`State`] values.

use mc_core::biome::BiomeCode as B;

use super::{impl_layer, LayerData, LayerInternal, State};

/// Relabels the incoming biome mask: `Ocean` becomes `NoRiver`, everything
/// else becomes a `PotentialRiver` tagged with one of two distinguishable
/// values in `[2, 4)`.
fn river_init(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x, z, output.x_size, output.z_size);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let biome = input.get(dx, dz).expect_biome();
            internal.rand.init_chunk_seed(x + dx as i32, z + dz as i32);

            let state = if biome == B::Ocean.id() {
                State::NoRiver
            } else {
                State::PotentialRiver((internal.rand.next_int(2) + 2) as u8)
            };
            output.set(dx, dz, state);
        }
    }
}

/// Reads a plus-shaped stencil: the interior (`NoRiver`) case requires all
/// five cells to agree on the *same* potential-river value; any ocean cell
/// in the stencil, or any disagreement among the markers, is a river.
fn river(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    let input = internal.expect_parent().generate(x - 1, z - 1, output.x_size + 2, output.z_size + 2);

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let center = input.get(dx + 1, dz + 1);
            let north = input.get(dx + 1, dz);
            let south = input.get(dx + 1, dz + 2);
            let west = input.get(dx, dz + 1);
            let east = input.get(dx + 2, dz + 1);

            let is_river = match (center, north, south, west, east) {
                (State::PotentialRiver(c), State::PotentialRiver(n), State::PotentialRiver(s),
                 State::PotentialRiver(w), State::PotentialRiver(e)) => {
                    c != n || c != s || c != w || c != e
                }
                // Any ocean (or otherwise non-marker) cell in the stencil
                // disqualifies the interior case.
                _ => true,
            };

            output.set(dx, dz, if is_river { State::River } else { State::NoRiver });
        }
    }
}

impl_layer!(river_init, new_river_init, "RiverInit");
impl_layer!(river, new_river, "River");
