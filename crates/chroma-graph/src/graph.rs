//! The conversion registry: a directed graph over color space identities.
//!
//! Nodes are [`SpaceId`]s; edges are pure converter closures registered by
//! the owning color-space module. Path resolution is breadth-first search,
//! so the returned chain always has the minimum number of hops - which
//! also minimizes accumulated floating-point error, since every extra
//! composed transform adds rounding steps.
//!
//! # Determinism
//!
//! Adjacency lists are ordered `Vec`s, traversed in registration order.
//! Among multiple shortest paths, BFS therefore always finds the same
//! one: the one whose first diverging edge was registered earliest.

use crate::converter::ComposedConverter;
use crate::providers::Provider;
use crate::{GraphError, GraphResult};
use chroma_math::Vec3;
use chroma_spaces::{ColorSpace, SpaceId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::{Arc, RwLock};

/// A registered converter closure.
///
/// Total and pure over well-formed inputs: no side effects, no partial
/// failure. NaN/infinity inputs produce NaN/infinity outputs.
pub type ConvertFn = Arc<dyn Fn(Vec3) -> Vec3 + Send + Sync>;

/// A directed conversion edge.
///
/// Owned exclusively by the registry once registered; immutable after
/// insertion.
#[derive(Clone)]
pub struct Edge {
    /// Source color space.
    pub from: SpaceId,
    /// Target color space.
    pub to: SpaceId,
    convert: ConvertFn,
}

impl Edge {
    /// Applies this edge's converter to interchange components.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        (self.convert)(v)
    }

    pub(crate) fn convert_fn(&self) -> ConvertFn {
        Arc::clone(&self.convert)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.from, self.to)
    }
}

/// Directed graph of color space conversions.
///
/// An explicit context object rather than process-global state: tests
/// build a fresh small graph per case, applications build one at startup
/// and share it.
///
/// # Two phases
///
/// 1. **Registration** - providers add edges via `&mut self`. The borrow
///    checker enforces exclusive access, so this phase is race-free by
///    construction.
/// 2. **Steady state** - the graph is no longer mutated; [`convert`] and
///    friends take `&self` and may be called from many threads. The
///    composed-converter cache synchronizes internally; concurrent misses
///    for the same pair race harmlessly to equivalent entries.
///
/// Mutating the graph after conversions have begun is not a supported
/// steady-state operation, but `add_edge` clears the composed cache so a
/// sequential mutate-then-convert sequence never observes stale paths.
///
/// [`convert`]: ConversionGraph::convert
///
/// # Example
///
/// ```rust
/// use chroma_graph::ConversionGraph;
/// use chroma_spaces::{Srgb, Xyz};
///
/// let graph = ConversionGraph::with_builtin_spaces();
/// let xyz: Xyz = graph.convert(Srgb::new(0.5, 0.3, 0.2)).unwrap();
/// ```
#[derive(Default)]
pub struct ConversionGraph {
    /// Outgoing edges per node, in registration order.
    edges: HashMap<SpaceId, Vec<Edge>>,
    /// Composed converters, memoized per (source, target) pair.
    cache: RwLock<HashMap<(SpaceId, SpaceId), Arc<ComposedConverter>>>,
}

impl ConversionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with all built-in color spaces registered.
    ///
    /// Providers run in the fixed order returned by
    /// [`builtin_providers`](crate::builtin_providers), so edge order (and
    /// BFS tie-breaking) is deterministic and auditable.
    pub fn with_builtin_spaces() -> Self {
        let mut graph = Self::new();
        graph.register_all(&crate::builtin_providers());
        graph
    }

    /// Inserts a directed edge.
    ///
    /// Both endpoints become graph nodes. Callable independently from
    /// unrelated registration units; units never need to import each
    /// other.
    ///
    /// # Duplicate policy
    ///
    /// Re-registering an existing `(from, to)` pair replaces the previous
    /// converter **in place**: last registration wins, and the edge keeps
    /// its original position in the adjacency list so traversal order
    /// stays stable.
    pub fn add_edge(
        &mut self,
        from: SpaceId,
        to: SpaceId,
        convert: impl Fn(Vec3) -> Vec3 + Send + Sync + 'static,
    ) {
        let edge = Edge {
            from,
            to,
            convert: Arc::new(convert),
        };

        let outgoing = self.edges.entry(from).or_default();
        match outgoing.iter_mut().find(|e| e.to == to) {
            Some(existing) => *existing = edge,
            None => outgoing.push(edge),
        }
        self.edges.entry(to).or_default();

        // Stale composed paths must not survive a mutation
        self.cache.get_mut().unwrap().clear();
    }

    /// Invokes a provider's self-registration hook.
    pub fn register(&mut self, provider: &dyn Provider) {
        provider.register(self);
    }

    /// Invokes each provider's hook once, in order.
    ///
    /// The registry does not deduplicate repeated calls; callers ensure
    /// single invocation (providers themselves are idempotent-safe, since
    /// re-registration replaces edges in place).
    pub fn register_all(&mut self, providers: &[Box<dyn Provider>]) {
        for provider in providers {
            provider.register(self);
        }
    }

    /// Whether a color space is a node in this graph.
    pub fn contains(&self, space: SpaceId) -> bool {
        self.edges.contains_key(&space)
    }

    /// Iterates over registered color spaces.
    pub fn spaces(&self) -> impl Iterator<Item = SpaceId> + '_ {
        self.edges.keys().copied()
    }

    /// Total number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Outgoing edges of a node, in registration order.
    pub fn edges_from(&self, space: SpaceId) -> &[Edge] {
        self.edges.get(&space).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds the shortest edge chain from `from` to `to`.
    ///
    /// Breadth-first search over the directed graph, unweighted (every
    /// conversion is pure math, equally cheap). Returns the empty path
    /// when `from == to`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownColorSpace`] if either endpoint is not a node
    /// - [`GraphError::NoConversionPath`] if no directed chain connects them
    pub fn resolve_path(&self, from: SpaceId, to: SpaceId) -> GraphResult<Vec<Edge>> {
        if !self.contains(from) {
            return Err(GraphError::UnknownColorSpace(from));
        }
        if !self.contains(to) {
            return Err(GraphError::UnknownColorSpace(to));
        }
        if from == to {
            return Ok(Vec::new());
        }

        // BFS with a predecessor map; adjacency order fixes tie-breaks
        let mut visited: HashSet<SpaceId> = HashSet::from([from]);
        let mut queue: VecDeque<SpaceId> = VecDeque::from([from]);
        let mut incoming: HashMap<SpaceId, Edge> = HashMap::new();

        'search: while let Some(node) = queue.pop_front() {
            for edge in self.edges_from(node) {
                if visited.insert(edge.to) {
                    incoming.insert(edge.to, edge.clone());
                    if edge.to == to {
                        break 'search;
                    }
                    queue.push_back(edge.to);
                }
            }
        }

        if !incoming.contains_key(&to) {
            return Err(GraphError::NoConversionPath { from, to });
        }

        // Walk predecessors back from the target
        let mut path = Vec::new();
        let mut node = to;
        while node != from {
            let edge = incoming[&node].clone();
            node = edge.from;
            path.push(edge);
        }
        path.reverse();
        Ok(path)
    }

    /// Returns the composed converter for a (source, target) pair.
    ///
    /// The first call for a pair resolves the path and flattens it; the
    /// result is memoized so repeated conversions pay the search cost
    /// once. Concurrent first calls may both build the converter; the
    /// first insert wins and the functions are equivalent, so the race is
    /// harmless.
    pub fn converter(&self, from: SpaceId, to: SpaceId) -> GraphResult<Arc<ComposedConverter>> {
        if let Some(hit) = self.cache.read().unwrap().get(&(from, to)) {
            return Ok(Arc::clone(hit));
        }

        let path = self.resolve_path(from, to)?;
        let composed = Arc::new(ComposedConverter::from_path(from, to, &path));

        let mut cache = self.cache.write().unwrap();
        let entry = cache.entry((from, to)).or_insert(composed);
        Ok(Arc::clone(entry))
    }

    /// Converts interchange components between two registered spaces.
    ///
    /// Pure in (value, target, graph state); the only hidden effect is
    /// cache population.
    pub fn convert_vec3(&self, from: SpaceId, to: SpaceId, v: Vec3) -> GraphResult<Vec3> {
        Ok(self.converter(from, to)?.apply(v))
    }

    /// Converts a typed color value to another representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_graph::ConversionGraph;
    /// use chroma_spaces::{Oklab, Srgb};
    ///
    /// let graph = ConversionGraph::with_builtin_spaces();
    /// let ok: Oklab = graph.convert(Srgb::new(1.0, 1.0, 1.0)).unwrap();
    /// assert!((ok.l - 1.0).abs() < 1e-3);
    /// ```
    pub fn convert<S: ColorSpace, T: ColorSpace>(&self, value: S) -> GraphResult<T> {
        let v = self.convert_vec3(S::ID, T::ID, value.to_vec3())?;
        Ok(T::from_vec3(v))
    }
}

impl fmt::Debug for ConversionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionGraph")
            .field("nodes", &self.edges.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}
