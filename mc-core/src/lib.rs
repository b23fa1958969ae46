//! Core crate of MinecraftRS.
//!
//! This crate defines the primitives shared by the biome generation pipeline:
//! the deterministic PRNG, the generic grid type layers are built on, the
//! fixed biome palette, and the error type returned at the core's boundaries.

pub mod biome;
pub mod error;
pub mod rand;
pub mod seed;
pub mod util;

pub use error::{CoreError, CoreResult};
