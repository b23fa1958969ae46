//! The fixed biome palette and the world-type selector.
//!
//! `BiomeCode` is a small, closed enumeration — unlike the block/entity
//! registries elsewhere in this family of crates, it is never extended at
//! runtime, so it is represented as a plain Rust enum rather than a
//! registered static table.

use strum::{Display, EnumIter};

/// Immutable metadata carried by a biome code. Only `id` and `color` matter
/// to the pipeline itself; the rest describes the biome for a renderer or
/// terrain pass outside this core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeMeta {
    pub name: &'static str,
    pub id: i32,
    pub min_height: f32,
    pub max_height: f32,
    pub temperature: f32,
    pub rainfall: f32,
    pub color: (u8, u8, u8),
    pub top_block: &'static str,
    pub fill_block: &'static str,
}

macro_rules! biomes {
    ($(
        $variant:ident = $id:literal, $name:literal,
        ($min_h:literal, $max_h:literal, $temp:literal, $rain:literal),
        ($r:literal, $g:literal, $b:literal)
        $(, $top:literal, $fill:literal)?
    );* $(;)?) => {
        /// A discrete ecoregion code stamped onto a world block.
        ///
        /// `NONE = -1` (see [`State`](crate::biome) usage in the layer
        /// pipeline) is intentionally not a variant here: it is an internal
        /// river-layer sentinel that must never reach a final output grid,
        /// so it cannot be represented as a `BiomeMeta`-bearing code.
        #[derive(Debug, Display, Clone, Copy, Eq, PartialEq, EnumIter)]
        #[repr(i8)]
        pub enum BiomeCode {
            $($variant = $id),*
        }

        impl BiomeCode {
            pub fn id(self) -> i32 {
                self as i8 as i32
            }

            pub fn from_id(id: i32) -> Option<Self> {
                match id {
                    $($id => Some(BiomeCode::$variant),)*
                    _ => None,
                }
            }

            pub fn meta(self) -> BiomeMeta {
                match self {
                    $(BiomeCode::$variant => BiomeMeta {
                        name: $name,
                        id: $id,
                        min_height: $min_h,
                        max_height: $max_h,
                        temperature: $temp,
                        rainfall: $rain,
                        color: ($r, $g, $b),
                        top_block: biomes!(@top $($top)? ),
                        fill_block: biomes!(@fill $($fill)? ),
                    },)*
                }
            }

            #[inline]
            pub fn color(self) -> (u8, u8, u8) {
                self.meta().color
            }
        }
    };

    (@top $top:literal) => { $top };
    (@top) => { "grass" };
    (@fill $fill:literal) => { $fill };
    (@fill) => { "dirt" };
}

biomes! {
    Ocean              = 0,  "ocean",               (-1.0, 0.4, 0.5,  0.5), (0,   0, 112);
    Plains             = 1,  "plains",               (0.1, 0.3, 0.8,  0.4), (141, 179, 96);
    Desert             = 2,  "desert",               (0.1, 0.2, 2.0,  0.0), (250, 148, 24), "sand", "sand";
    HillsExtreme       = 3,  "extreme_hills",        (0.3, 1.5, 0.2,  0.3), (96,  96,  96);
    Forest             = 4,  "forest",               (0.1, 0.3, 0.7,  0.8), (5,   102, 33);
    Taiga              = 5,  "taiga",                (0.1, 0.4, 0.05, 0.8), (11,  102, 89);
    Swamp              = 6,  "swampland",            (-0.2, 0.1, 0.8, 0.9), (7,   249, 178);
    River              = 7,  "river",                (-0.5, 0.0, 0.5, 0.5), (0,   0,   255);
    Hell               = 8,  "hell",                 (0.1, 0.3, 2.0,  0.0), (255, 0,   0);
    Sky                = 9,  "sky",                  (0.1, 0.3, 0.5,  0.5), (128, 128, 255);
    OceanFrozen        = 10, "frozen_ocean",         (-1.0, 0.5, 0.0, 0.5), (144, 144, 160);
    RiverFrozen        = 11, "frozen_river",         (-0.5, 0.0, 0.0, 0.5), (160, 160, 255);
    PlainsIce          = 12, "ice_plains",           (0.1, 0.3, 0.0,  0.5), (255, 255, 255);
    HillsExtremeIce    = 13, "ice_mountains",        (0.3, 1.3, 0.0,  0.5), (160, 160, 160);
    MushroomIsland     = 14, "mushroom_island",      (0.2, 1.0, 0.9,  1.0), (255, 0,   255), "mycelium", "mycelium";
    MushroomBeach      = 15, "mushroom_island_shore",(-1.0, 0.1, 0.9, 1.0), (160, 0,   255), "mycelium", "mycelium";
    Beach              = 16, "beach",                (0.0, 0.1, 0.8,  0.4), (250, 222, 85),  "sand", "sand";
    HillsDesert        = 17, "desert_hills",         (0.3, 0.8, 2.0,  0.0), (210, 95,  18),  "sand", "sand";
    HillsForest        = 18, "forest_hills",         (0.3, 0.7, 0.7,  0.8), (34,  85,  28);
    HillsTaiga         = 19, "taiga_hills",          (0.3, 0.8, 0.05, 0.8), (22,  57,  51);
    HillsExtremeEdge   = 20, "extreme_hills_edge",   (0.2, 0.8, 0.2,  0.3), (114, 120, 154);
    Jungle             = 21, "jungle",               (0.2, 0.4, 1.2,  0.9), (83,  123, 9);
    HillsJungle        = 22, "jungle_hills",         (1.8, 0.5, 1.2,  0.9), (44,  66,  5);
}

/// Initial zoom count and allowed-biome selection both depend on the
/// requested world type. `Flat` is accepted at this boundary but has no
/// effect on biome output (terrain flattening is out of scope for this
/// core).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WorldType {
    Default,
    Flat,
    LargeBiome,
    Default1_1,
}

impl WorldType {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(WorldType::Default),
            1 => Some(WorldType::Flat),
            2 => Some(WorldType::LargeBiome),
            8 => Some(WorldType::Default1_1),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            WorldType::Default => 0,
            WorldType::Flat => 1,
            WorldType::LargeBiome => 2,
            WorldType::Default1_1 => 8,
        }
    }

    /// Number of `Zoom` layers stacked below the hills/river branches.
    #[inline]
    pub fn base_zoom(self) -> u32 {
        match self {
            WorldType::LargeBiome => 6,
            _ => 4,
        }
    }

    /// Whether `BiomeInit`'s allowed-biome table includes `Jungle`.
    #[inline]
    pub fn allows_jungle(self) -> bool {
        !matches!(self, WorldType::Default1_1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_code_has_a_palette_entry_and_round_trips_its_id() {
        for code in BiomeCode::iter() {
            let meta = code.meta();
            assert_eq!(meta.id, code.id());
            assert_eq!(BiomeCode::from_id(code.id()), Some(code));
        }
    }

    #[test]
    fn from_id_rejects_the_none_sentinel() {
        assert_eq!(BiomeCode::from_id(-1), None);
    }

    #[test]
    fn large_biome_doubles_the_post_hills_zoom_budget() {
        assert_eq!(WorldType::Default.base_zoom(), 4);
        assert_eq!(WorldType::LargeBiome.base_zoom(), 6);
    }

    #[test]
    fn default_1_1_excludes_jungle() {
        assert!(!WorldType::Default1_1.allows_jungle());
        assert!(WorldType::Default.allows_jungle());
    }
}
