//! The layer framework: a closed, function-pointer-dispatched transformer
//! tree. Each [`Layer`] owns its own [`LayerRand`], zero to two child
//! layers, and a handler function that reads a padded rectangle of its
//! children's output to compute its own.
//!
//! A good reference for understanding biome generation was made for the C
//! lib [`cubiomes`]: [`LayerSummary.pdf`].
//!
//! [`cubiomes`]: https://github.com/Cubitect/cubiomes
//! [`LayerSummary.pdf`]: https://github.com/Cubitect/cubiomes/blob/master/LayerSummary.pdf

use mc_core::rand::mix;
use mc_core::util::Rect;

pub mod biome;
pub mod island;
pub mod river;
pub mod smooth;
pub mod snow;
pub mod voronoi;
pub mod zoom;

/// A cell's transient state while it moves through the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// Only ever present in a freshly allocated [`LayerData`]; no layer may
    /// leave this value in its output.
    Uninit,
    /// River-branch marker: no river here.
    NoRiver,
    /// River-branch marker: one of two distinguishable values in `[2, 4)`
    /// produced by `RiverInit`, used only to trace river boundaries.
    PotentialRiver(u8),
    /// River-branch marker: this cell is on a river, pending the mixer.
    River,
    /// A final biome code, as it would appear in the output grid.
    Biome(i32),
}

impl State {
    pub fn expect_biome(self) -> i32 {
        match self {
            State::Biome(biome) => biome,
            _ => panic!("state {:?} must be a biome", self),
        }
    }

    /// Numeric encoding for a [`DebugTrace`]'s flattened `values`, matching
    /// the reference platform's own river-branch encoding: `NoRiver` is the
    /// `NONE = -1` sentinel once past `River`, `River` is the real `RIVER`
    /// biome id, and a `PotentialRiver` marker is its raw `DESERT`/
    /// `HILLS_EXTREME` id (the two are indistinguishable by id alone, same
    /// as in the reference).
    fn trace_value(self) -> i32 {
        match self {
            State::Uninit => i32::MIN,
            State::NoRiver => -1,
            State::PotentialRiver(v) => v as i32,
            State::River => 7,
            State::Biome(b) => b,
        }
    }

    #[inline]
    fn debug_char(self) -> char {
        match self {
            State::Uninit => ' ',
            State::NoRiver => 'N',
            State::PotentialRiver(_) => 'P',
            State::River => 'R',
            State::Biome(b) => std::char::from_digit((b.rem_euclid(10)) as u32, 10).unwrap_or('?'),
        }
    }
}

pub type LayerData = Rect<State>;

impl LayerData {
    /// Prints an ASCII grid of the cell states. This is the debug hook
    /// required for diffing output against a reference trace; a real sink
    /// would instead capture `(name, x, z, width, depth, world_seed,
    /// layer_seed, chunk_seed, values)` per call, see [`DebugSink`].
    pub fn debug(&self, title: &'static str) {
        println!(" -----------------------");
        println!("{} ({}x{})", title, self.x_size, self.z_size);
        for z in 0..self.z_size {
            for x in 0..self.x_size {
                print!("{} ", self.get(x, z).debug_char());
            }
            println!();
        }
        println!(" -----------------------");
    }
}

/// A single recorded `get_area` call, as emitted to a [`DebugSink`].
#[derive(Debug, Clone)]
pub struct DebugTrace {
    pub name: &'static str,
    pub x: i32,
    pub z: i32,
    pub width: usize,
    pub depth: usize,
    pub world_seed: i64,
    pub layer_seed: i64,
    pub chunk_seed: i64,
    pub values: Vec<i32>,
}

/// An explicit testability surface: attach a sink to a pipeline root (it
/// is not propagated automatically) to capture a trace per `get_area` call,
/// to diff against reference fixtures.
pub trait DebugSink {
    fn record(&mut self, trace: DebugTrace);
}

/// Layer LCG pseudo-random generator. Distinct from `JavaRandom`: every
/// consumer advances `chunk_seed` exactly once per `next_int`, using the
/// pre-read value.
#[derive(Debug, Clone)]
pub struct LayerRand {
    base_seed: i64,
    world_seed: i64,
    chunk_seed: i64,
}

impl LayerRand {
    pub fn new(base_seed: i64) -> LayerRand {
        let mut seed = base_seed;
        seed = mix(seed, base_seed);
        seed = mix(seed, base_seed);
        seed = mix(seed, base_seed);
        LayerRand { base_seed: seed, world_seed: 0, chunk_seed: 0 }
    }

    pub fn init_world_seed(&mut self, world_seed: i64) {
        let mut ws = world_seed;
        ws = mix(ws, self.base_seed);
        ws = mix(ws, self.base_seed);
        ws = mix(ws, self.base_seed);
        self.world_seed = ws;
    }

    pub fn init_chunk_seed(&mut self, x: i32, z: i32) {
        let mut cs = self.world_seed;
        cs = mix(cs, x as i64);
        cs = mix(cs, z as i64);
        cs = mix(cs, x as i64);
        cs = mix(cs, z as i64);
        self.chunk_seed = cs;
    }

    /// Reads `(chunk_seed >> 24) % bound`, corrected into `[0, bound)`
    /// exactly as the reference's `GenLayer.nextInt` does, then advances
    /// `chunk_seed` using the pre-read value.
    pub fn next_int(&mut self, bound: u32) -> i32 {
        let bound = bound as i64;
        let mut v = (self.chunk_seed >> 24) % bound;
        if v < 0 {
            v += bound;
        }
        self.chunk_seed = mix(self.chunk_seed, self.world_seed);
        v as i32
    }

    /// Consumes a chunk-seed draw without reading it back, used by layers
    /// whose branch only needs to advance the stream (e.g. `Smooth`'s
    /// asymmetric tie-break).
    pub fn skip(&mut self) {
        self.chunk_seed = mix(self.chunk_seed, self.world_seed);
    }

    /// Used only by `VoronoiZoom`: `next_int(precision) / precision - 0.5`.
    pub fn next_double_unit(&mut self, precision: u32) -> f64 {
        self.next_int(precision) as f64 / precision as f64 - 0.5
    }

    pub fn choose<T: Copy>(&mut self, elements: &[T]) -> T {
        elements[self.next_int(elements.len() as u32) as usize]
    }

    /// The layer's permanent identity, stirred three times at construction
    /// (spec.md §4.2's `compute_layer_seed`). Exposed read-only for the
    /// debug-trace hook.
    #[inline]
    pub fn layer_seed(&self) -> i64 {
        self.base_seed
    }

    /// This layer's world seed, derived by [`LayerRand::init_world_seed`].
    /// Exposed read-only for the debug-trace hook.
    #[inline]
    pub fn world_seed(&self) -> i64 {
        self.world_seed
    }

    /// The transient chunk-seed register, as it stands right now. Exposed
    /// read-only for the debug-trace hook; callers must never otherwise
    /// observe it between `get_area` calls (spec.md §3's `chunk_seed`
    /// invariant).
    #[inline]
    pub fn chunk_seed(&self) -> i64 {
        self.chunk_seed
    }
}

/// Internal mutable data for a layer, passed to its handler.
pub struct LayerInternal {
    pub rand: LayerRand,
    pub parent: Option<Box<Layer>>,
    /// Used only by the river mixer; kept separate from a `Vec` of parents
    /// since almost every layer has at most one.
    pub parent_aux: Option<Box<Layer>>,
}

impl LayerInternal {
    pub fn expect_parent(&mut self) -> &mut Layer {
        self.parent.as_mut().expect("this layer has no parent")
    }

    pub fn expect_parent_aux(&mut self) -> &mut Layer {
        self.parent_aux.as_mut().expect("this layer has no auxiliary parent")
    }
}

/// A layer handler: computes `output` for the requested `(x, z)` origin,
/// possibly recursing into `internal.parent`/`parent_aux`.
pub type LayerHandlerFn = fn(x: i32, z: i32, output: &mut LayerData, internal: &mut LayerInternal);

/// One node of the biome pipeline.
pub struct Layer {
    internal: LayerInternal,
    handler: LayerHandlerFn,
    /// The reference platform's own per-layer-class name (e.g. `"Island"`,
    /// `"RiverMixer"`), used only to label this layer's [`DebugTrace`]s.
    name: &'static str,
    /// Not propagated to children: attach a sink to whichever instance's
    /// `get_area` calls you want to trace (spec.md §8's debug hook).
    sink: Option<Box<dyn DebugSink>>,
}

impl Layer {
    #[inline]
    pub fn new_child(name: &'static str, base_seed: i64, handler: LayerHandlerFn, parent: Layer) -> Layer {
        Self::new(name, base_seed, handler, Some(Box::new(parent)), None)
    }

    #[inline]
    pub fn new_join(name: &'static str, base_seed: i64, handler: LayerHandlerFn, parent: Layer, parent_aux: Layer) -> Layer {
        Self::new(name, base_seed, handler, Some(Box::new(parent)), Some(Box::new(parent_aux)))
    }

    #[inline]
    pub fn new_orphan(name: &'static str, base_seed: i64, handler: LayerHandlerFn) -> Layer {
        Self::new(name, base_seed, handler, None, None)
    }

    #[inline]
    fn new(
        name: &'static str,
        base_seed: i64,
        handler: LayerHandlerFn,
        parent: Option<Box<Layer>>,
        parent_aux: Option<Box<Layer>>,
    ) -> Layer {
        Layer {
            internal: LayerInternal { rand: LayerRand::new(base_seed), parent, parent_aux },
            handler,
            name,
            sink: None,
        }
    }

    /// Attaches a debug sink to this instance only (not propagated to
    /// children): every subsequent `get_area` call on this layer emits one
    /// [`DebugTrace`] to it.
    pub fn set_debug_sink(&mut self, sink: Box<dyn DebugSink>) {
        self.sink = Some(sink);
    }

    /// Detaches whatever sink is currently attached, if any.
    pub fn clear_debug_sink(&mut self) {
        self.sink = None;
    }

    /// Recursively initializes children first, then self. The order only
    /// matters for debug introspection: every subtree's `world_seed` is a
    /// pure function of `(world_seed, layer_seed)`, independent of sibling
    /// initialization order.
    pub fn init_world_seed(&mut self, world_seed: i64) {
        if let Some(parent) = &mut self.internal.parent {
            parent.init_world_seed(world_seed);
        }
        if let Some(parent_aux) = &mut self.internal.parent_aux {
            parent_aux.init_world_seed(world_seed);
        }
        self.internal.rand.init_world_seed(world_seed);
    }

    #[inline]
    pub fn inner_generate(&mut self, x: i32, z: i32, output: &mut LayerData) {
        (self.handler)(x, z, output, &mut self.internal);
    }

    pub fn generate(&mut self, x: i32, z: i32, x_size: usize, z_size: usize) -> LayerData {
        let mut data = LayerData::new(x_size, z_size, State::Uninit);
        self.inner_generate(x, z, &mut data);

        if let Some(sink) = self.sink.as_mut() {
            sink.record(DebugTrace {
                name: self.name,
                x,
                z,
                width: x_size,
                depth: z_size,
                world_seed: self.internal.rand.world_seed(),
                layer_seed: self.internal.rand.layer_seed(),
                chunk_seed: self.internal.rand.chunk_seed(),
                values: data.data.iter().map(|s| s.trace_value()).collect(),
            });
        }

        data
    }

    /// Public contract used by the region driver: a pure function of
    /// `(world_seed, layer_seed, x, z, width, depth)` plus any children.
    #[inline]
    pub fn get_area(&mut self, x: i32, z: i32, width: usize, depth: usize) -> LayerData {
        self.generate(x, z, width, depth)
    }

    pub fn expect_parent(&mut self) -> &mut Layer {
        self.internal.expect_parent()
    }
}

/// Generates a constructor `$new_func(base_seed, parent) -> Layer` (or, for
/// `orphan`, `$new_func(base_seed) -> Layer`) for a given handler function,
/// labeled with `$name` for its [`DebugTrace`]s (matching the reference
/// platform's own per-layer-class name passed to `_output_debug_data`).
macro_rules! impl_layer {
    ($func:path, $new_func:ident, $name:literal) => {
        impl crate::layer::Layer {
            #[inline]
            pub fn $new_func(base_seed: i64, parent: Self) -> Self {
                Self::new_child($name, base_seed, $func, parent)
            }
        }
    };
    (orphan $func:path, $new_func:ident, $name:literal) => {
        impl crate::layer::Layer {
            #[inline]
            pub fn $new_func(base_seed: i64) -> Self {
                Self::new_orphan($name, base_seed, $func)
            }
        }
    };
    (join $func:path, $new_func:ident, $name:literal) => {
        impl crate::layer::Layer {
            #[inline]
            pub fn $new_func(base_seed: i64, parent: Self, parent_aux: Self) -> Self {
                Self::new_join($name, base_seed, $func, parent, parent_aux)
            }
        }
    };
}

pub(crate) use impl_layer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_rand_next_int_advances_exactly_once_per_call() {
        let mut rand = LayerRand::new(1);
        rand.init_world_seed(2);
        rand.init_chunk_seed(3, 4);
        let a = rand.chunk_seed;
        rand.next_int(10);
        let b = rand.chunk_seed;
        assert_ne!(a, b);
    }

    #[test]
    fn layer_rand_is_a_pure_function_of_its_seeds() {
        let mut r1 = LayerRand::new(42);
        r1.init_world_seed(7);
        r1.init_chunk_seed(1, 2);

        let mut r2 = LayerRand::new(42);
        r2.init_world_seed(7);
        r2.init_chunk_seed(1, 2);

        assert_eq!(r1.next_int(100), r2.next_int(100));
        assert_eq!(r1.next_int(100), r2.next_int(100));
    }

    #[test]
    fn init_world_seed_is_idempotent() {
        let mut rand = LayerRand::new(5);
        rand.init_world_seed(9);
        let first = rand.world_seed;
        rand.init_world_seed(9);
        assert_eq!(rand.world_seed, first);
    }

    struct CollectingSink {
        traces: std::rc::Rc<std::cell::RefCell<Vec<DebugTrace>>>,
    }

    impl DebugSink for CollectingSink {
        fn record(&mut self, trace: DebugTrace) {
            self.traces.borrow_mut().push(trace);
        }
    }

    #[test]
    fn attached_sink_records_one_trace_per_get_area_call() {
        let traces = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut island = Layer::new_island(1);
        island.init_world_seed(5);
        island.set_debug_sink(Box::new(CollectingSink { traces: traces.clone() }));

        island.get_area(0, 0, 4, 4);
        island.get_area(10, 10, 2, 3);

        let recorded = traces.borrow();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].name, "Island");
        assert_eq!(recorded[0].width, 4);
        assert_eq!(recorded[0].depth, 4);
        assert_eq!(recorded[0].values.len(), 16);
        assert_eq!(recorded[1].x, 10);
        assert_eq!(recorded[1].z, 10);
        assert_eq!(recorded[1].values.len(), 6);
    }

    #[test]
    fn detached_sink_stops_recording() {
        let traces = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut island = Layer::new_island(1);
        island.init_world_seed(5);
        island.set_debug_sink(Box::new(CollectingSink { traces: traces.clone() }));
        island.clear_debug_sink();
        island.get_area(0, 0, 4, 4);
        assert!(traces.borrow().is_empty());
    }
}
