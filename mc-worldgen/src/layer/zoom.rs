//! `FuzzyZoom`/`Zoom`: doubles resolution by interpolating between four
//! parent cells, picking diagonal values outright and resolving the center
//! through a 16-branch cascade (or a uniform pick, for the fuzzy variant)
//! over the four parent corners.
//!
//! The pipeline stacks these zooms over both the land branch (real biome
//! codes) and the river branch (`RiverInit`'s `PotentialRiver` markers), so
//! the cascade below compares whole [`State`] values rather than unwrapping
//! to a biome id — it never needs to know which domain it is zooming.

use super::{impl_layer, Layer, LayerData, LayerInternal, State};

/// `tl`/`tr`/`bl`/`br` are the four parent corners. Mirrors the reference's
/// 16-branch cascade verbatim, including its quirk: three of the late
/// branches resolve a `br` match by returning `bl` instead of `br`.
#[inline]
fn choose_weird<T: Copy + PartialEq>(rand_pick: i32, tl: T, tr: T, bl: T, br: T) -> T {
    if tr == bl && bl == br {
        tr
    } else if tl == tr && tl == bl {
        tl
    } else if tl == tr && tl == br {
        tl
    } else if tl == bl && tl == br {
        tl
    } else if tl == tr && bl != br {
        tl
    } else if tl == bl && tr != br {
        tl
    } else if tl == br && tr != bl {
        tl
    } else if tr == tl && bl != br {
        tr
    } else if tr == bl && tl != br {
        tr
    } else if tr == br && tl != bl {
        tr
    } else if bl == tl && tr != br {
        bl
    } else if bl == tr && tl != br {
        bl
    } else if bl == br && tl != tr {
        bl
    } else if br == tl && tr != bl {
        bl
    } else if br == tr && tl != bl {
        bl
    } else if br == bl && tl != tr {
        bl
    } else {
        match rand_pick {
            0 => tl,
            1 => tr,
            2 => bl,
            _ => br,
        }
    }
}

/// Shared expansion core. Each parent cell `(px+pdx, pz+pdz)` owns a 2x2
/// block of a temporary buffer twice its size; `output` is then cropped out
/// of that buffer at an offset selected by the parity of the requested
/// origin. `fuzzy` selects the center-cell strategy (uniform pick vs
/// `choose_weird`).
fn common_zoom(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal, fuzzy: bool) {
    let px = x >> 1;
    let pz = z >> 1;
    let px_size = (output.x_size >> 1) + 2;
    let pz_size = (output.z_size >> 1) + 2;

    let input = internal.expect_parent().generate(px, pz, px_size, pz_size);

    let temp_x_size = (px_size - 1) * 2;
    let temp_z_size = (pz_size - 1) * 2;
    let mut temp = LayerData::new(temp_x_size, temp_z_size, State::Uninit);

    for pdz in 0..(pz_size - 1) {
        for pdx in 0..(px_size - 1) {
            let nw = *input.get(pdx, pdz);
            let ne = *input.get(pdx + 1, pdz);
            let sw = *input.get(pdx, pdz + 1);
            let se = *input.get(pdx + 1, pdz + 1);

            internal.rand.init_chunk_seed((px + pdx as i32) * 2, (pz + pdz as i32) * 2);

            // Draw order is load-bearing: south (nw/sw) is drawn before east
            // (nw/ne), matching the reference's accumulate-left-to-right scan.
            let south = internal.rand.choose(&[nw, sw]);
            let east = internal.rand.choose(&[nw, ne]);
            let center = if fuzzy {
                internal.rand.choose(&[nw, ne, sw, se])
            } else {
                choose_weird(internal.rand.next_int(4), nw, ne, sw, se)
            };

            let tx = pdx * 2;
            let tz = pdz * 2;
            temp.set(tx, tz, nw);
            temp.set(tx + 1, tz, east);
            temp.set(tx, tz + 1, south);
            temp.set(tx + 1, tz + 1, center);
        }
    }

    for dz in 0..output.z_size {
        for dx in 0..output.x_size {
            let value = *temp.get((x & 1) as usize + dx, (z & 1) as usize + dz);
            output.set(dx, dz, value);
        }
    }
}

fn fuzzy_zoom(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    common_zoom(x, z, output, internal, true);
}

fn zoom(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal) {
    common_zoom(x, z, output, internal, false);
}

impl_layer!(fuzzy_zoom, new_fuzzy_zoom, "FuzzyZoom");
impl_layer!(zoom, new_zoom, "Zoom");

impl Layer {
    /// Stacks `count` plain `Zoom` layers, each with its own seed derived
    /// from `base_seed`, matching the repeated `GenLayerZoom` wrapping at
    /// every widening step of the pipeline.
    pub fn new_zoom_multiple(base_seed: i64, mut parent: Layer, count: u32) -> Layer {
        for i in 0..count {
            parent = Layer::new_zoom(base_seed + i as i64, parent);
        }
        parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;

    #[test]
    fn zooming_river_markers_never_unwraps_a_biome() {
        // RiverInit emits PotentialRiver/NoRiver, never a State::Biome; Zoom
        // sits directly on top of it in the river branch.
        let island = Layer::new_island(1);
        let river_init = Layer::new_river_init(100, island);
        let mut zoomed = Layer::new_zoom_multiple(1000, river_init, 3);
        zoomed.init_world_seed(5);
        let area = zoomed.get_area(0, 0, 16, 16);
        for state in area.data.iter() {
            assert!(matches!(state, State::PotentialRiver(_) | State::NoRiver));
        }
    }

    #[test]
    fn zooming_land_still_yields_known_biomes() {
        use mc_core::biome::BiomeCode;

        let base = Layer::new_island(1);
        let mut zoomed = Layer::new_zoom(2000, base);
        zoomed.init_world_seed(7);
        let area = zoomed.get_area(0, 0, 8, 8);
        for state in area.data.iter() {
            assert!(BiomeCode::from_id(state.expect_biome()).is_some());
        }
    }
}
