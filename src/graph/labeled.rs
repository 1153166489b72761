use crate::algorithm::floyd_warshall::{AllPairsShortestPaths, FloydWarshall};
use crate::algorithm::traits::walk_predecessors;
use crate::algorithm::{
    traversal, BellmanFord, Dijkstra, ShortestPathAlgorithm, ShortestPathResult, Unweighted,
};
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Vertex, VertexId, VertexState};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed weighted graph whose vertices are addressed by user labels.
///
/// Vertices live in an arena and keep their insertion index for the lifetime
/// of the graph; edges, predecessors, the priority queue and the all-pairs
/// matrices all refer to vertices by that index.
#[derive(Debug, Clone)]
pub struct LabeledGraph<L, W>
where
    W: Float + Debug,
{
    /// Vertex arena in insertion order
    vertices: Vec<Vertex<L, W>>,

    /// Label -> arena index
    index: HashMap<L, VertexId>,

    /// Source of the last successful single-source run
    source: Option<VertexId>,

    /// Result of the last all-pairs run
    all_pairs: Option<AllPairsShortestPaths<W>>,
}

impl<L, W> Default for LabeledGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> LabeledGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            source: None,
            all_pairs: None,
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        LabeledGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            source: None,
            all_pairs: None,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, adding endpoints as needed
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        let mut graph = LabeledGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            graph.add_edge(&from, &to, weight);
        }
        graph
    }

    /// Finds the index of the vertex carrying `label`
    pub fn find_vertex(&self, label: &L) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<L, W>> {
        self.vertices.get(id)
    }

    pub fn label(&self, id: VertexId) -> Option<&L> {
        self.vertices.get(id).map(|v| v.info())
    }

    /// All vertices in stable index order
    pub fn vertex_set(&self) -> &[Vertex<L, W>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a vertex, returns false if the label is already present
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }

        let id = self.vertices.len();
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(label));
        self.invalidate();
        true
    }

    /// Adds a directed edge, returns false if either endpoint is absent.
    /// Parallel edges are kept and relaxed independently.
    pub fn add_edge(&mut self, from: &L, to: &L, weight: W) -> bool {
        let (Some(from), Some(to)) = (self.find_vertex(from), self.find_vertex(to)) else {
            return false;
        };

        self.vertices[from].add_edge(to, weight);
        self.invalidate();
        true
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.first_negative_weight().is_none()
    }

    /// Weight of the first negative edge in vertex order
    pub fn first_negative_weight(&self) -> Option<W> {
        self.vertices
            .iter()
            .flat_map(|v| v.adj())
            .map(|edge| edge.weight)
            .find(|&weight| weight < W::zero())
    }

    fn resolve(&self, label: &L) -> Result<VertexId> {
        self.find_vertex(label).ok_or(Error::VertexNotFound)
    }

    fn labels(&self, ids: Vec<VertexId>) -> Vec<L> {
        ids.into_iter()
            .map(|id| self.vertices[id].info().clone())
            .collect()
    }

    /// Drops every computed result after a structural change
    fn invalidate(&mut self) {
        self.source = None;
        self.all_pairs = None;
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex<L, W>] {
        &mut self.vertices
    }

    /// Resets the scratch state of every vertex and seeds `source` at distance zero
    pub(crate) fn begin_single_source(&mut self, source: VertexId) -> Result<()> {
        if source >= self.vertices.len() {
            return Err(Error::InvalidVertex(source));
        }

        for vertex in &mut self.vertices {
            vertex.state = VertexState::default();
        }
        self.vertices[source].state.distance = W::zero();
        self.source = Some(source);
        Ok(())
    }

    /// Marks the scratch state as not holding a usable result
    pub(crate) fn abort_single_source(&mut self) {
        self.source = None;
    }

    /// Clears the traversal flags without touching distances
    pub(crate) fn reset_marks(&mut self) {
        for vertex in &mut self.vertices {
            vertex.state.visited = false;
            vertex.state.mark = Default::default();
        }
    }

    /// Source of the current single-source result, if any
    pub fn last_source(&self) -> Option<&L> {
        self.source.and_then(|id| self.label(id))
    }

    /// Runs any single-source algorithm from the vertex labeled `source`
    pub fn run<A>(&mut self, algorithm: &A, source: &L) -> Result<()>
    where
        A: ShortestPathAlgorithm<L, W>,
    {
        let source = self.resolve(source)?;
        algorithm.compute_shortest_paths(self, source)
    }

    /// Dijkstra from `source`. Edge weights must be non-negative.
    pub fn dijkstra_shortest_path(&mut self, source: &L) -> Result<()> {
        self.run(&Dijkstra::new(), source)
    }

    /// Breadth-first shortest path from `source`, every edge counting as one
    pub fn unweighted_shortest_path(&mut self, source: &L) -> Result<()> {
        self.run(&Unweighted::new(), source)
    }

    /// Bellman-Ford from `source`, fails with `NegativeCycle` when one is reachable
    pub fn bellman_ford_shortest_path(&mut self, source: &L) -> Result<()> {
        self.run(&BellmanFord::new(), source)
    }

    /// Distance from the last source, `None` when the vertex was not reached
    pub fn distance_to(&self, dest: &L) -> Result<Option<W>> {
        let dest = self.resolve(dest)?;
        if self.source.is_none() {
            return Err(Error::NotComputed);
        }

        let vertex = &self.vertices[dest];
        Ok(vertex.is_reached().then_some(vertex.distance()))
    }

    /// Path from the last source to `dest`, both ends included
    pub fn get_path(&self, dest: &L) -> Result<Vec<L>> {
        let dest = self.resolve(dest)?;
        let source = self.source.ok_or(Error::NotComputed)?;

        // An unreached vertex has no predecessor either, check before walking
        if !self.vertices[dest].is_reached() {
            return Err(Error::Unreachable);
        }

        let path = walk_predecessors(dest, source, self.vertices.len(), |v| {
            self.vertices[v].predecessor()
        })?;
        Ok(self.labels(path))
    }

    /// Copies the current single-source result out of the vertex state
    pub fn shortest_path_result(&self) -> Result<ShortestPathResult<W>> {
        let source = self.source.ok_or(Error::NotComputed)?;

        Ok(ShortestPathResult {
            distances: self
                .vertices
                .iter()
                .map(|v| v.is_reached().then_some(v.distance()))
                .collect(),
            predecessors: self.vertices.iter().map(|v| v.predecessor()).collect(),
            source,
        })
    }

    /// Floyd-Warshall over the whole graph; the result is kept for path queries
    pub fn floyd_warshall_shortest_path(&mut self) -> &AllPairsShortestPaths<W>
    where
        W: Send + Sync,
    {
        self.floyd_warshall_with(&FloydWarshall::new())
    }

    pub fn floyd_warshall_with(&mut self, algorithm: &FloydWarshall) -> &AllPairsShortestPaths<W>
    where
        W: Send + Sync,
    {
        let result = algorithm.compute(&*self);
        self.all_pairs.insert(result)
    }

    /// Result of the last Floyd-Warshall run, if the graph has not changed since
    pub fn all_pairs(&self) -> Option<&AllPairsShortestPaths<W>> {
        self.all_pairs.as_ref()
    }

    /// Distance from the last Floyd-Warshall run, `NegativeCycle` when the
    /// pair is routed through one
    pub fn floyd_warshall_distance(&self, origin: &L, dest: &L) -> Result<Option<W>> {
        let (origin, dest) = (self.resolve(origin)?, self.resolve(dest)?);
        let all_pairs = self.all_pairs.as_ref().ok_or(Error::NotComputed)?;
        all_pairs.distance(origin, dest)
    }

    /// Path between two labels reconstructed from the last Floyd-Warshall run
    pub fn get_floyd_warshall_path(&self, origin: &L, dest: &L) -> Result<Vec<L>> {
        let (origin, dest) = (self.resolve(origin)?, self.resolve(dest)?);
        let all_pairs = self.all_pairs.as_ref().ok_or(Error::NotComputed)?;
        let path = all_pairs.path(origin, dest)?;
        Ok(self.labels(path))
    }

    /// Every vertex in depth-first preorder
    pub fn dfs(&mut self) -> Vec<L> {
        let order = traversal::dfs(self);
        self.labels(order)
    }

    /// Vertices reachable from `source` in breadth-first order, empty if absent
    pub fn bfs(&mut self, source: &L) -> Vec<L> {
        match self.find_vertex(source) {
            Some(source) => {
                let order = traversal::bfs(self, source);
                self.labels(order)
            }
            None => Vec::new(),
        }
    }

    /// Vertex that discovers the most unvisited neighbours in a BFS from
    /// `source`, with that number. `None` if `source` is absent.
    pub fn max_new_children(&mut self, source: &L) -> Option<(L, usize)> {
        let source = self.find_vertex(source)?;
        let (vertex, count) = traversal::max_new_children(self, source)?;
        Some((self.vertices[vertex].info().clone(), count))
    }

    /// Topological order of all vertices, empty if the graph has a cycle
    pub fn topsort(&self) -> Vec<L> {
        self.labels(traversal::topsort(self))
    }

    pub fn is_dag(&mut self) -> bool {
        traversal::is_dag(self)
    }
}

impl<L, W> Graph<W> for LabeledGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adj().len()).sum()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(v) = self.vertices.get(vertex) {
            Box::new(v.adj().iter().map(|edge| (edge.dest, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertices.len()
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .reduce(|a, b| if b < a { b } else { a })
    }
}

impl<L, W> MutableGraph<L, W> for LabeledGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, label: L) -> bool {
        LabeledGraph::add_vertex(self, label)
    }

    fn add_edge(&mut self, from: &L, to: &L, weight: W) -> bool {
        LabeledGraph::add_edge(self, from, to, weight)
    }
}
