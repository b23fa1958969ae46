//! Random-number primitives shared by the biome pipeline: the reference
//! platform's `JavaRandom` LCG, and the pure integer mixing step the layer
//! framework's per-layer hash (`LayerRand`, in `mc-worldgen`) is built on.

pub mod jrand;

pub use jrand::JavaRandom;

/// One step of the layer-seed mixer:
/// `mix(state, addend) = state * (state * 6364136223846793005 + 1442695040888963407) + addend`
///
/// All arithmetic is 64-bit signed two's-complement with wrap-around. This is
/// the only primitive `LayerRand` is built from; it is distinct from
/// `JavaRandom` and never touches its 48-bit state.
#[inline]
pub fn mix(state: i64, addend: i64) -> i64 {
    state
        .wrapping_mul(state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
        .wrapping_add(addend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_is_a_pure_function_of_its_inputs() {
        assert_eq!(mix(0, 0), 0);
        assert_eq!(mix(1, 1), mix(1, 1));
        assert_ne!(mix(1, 1), mix(1, 2));
    }
}
