pub mod layer;
pub mod pipeline;
pub mod region;

pub use layer::{Layer, LayerData, State};
pub use pipeline::build_pipeline;
pub use region::{render_region, render_region_parallel, RegionRequest};
