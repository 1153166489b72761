use num_traits::Float;
use rayon::prelude::*;
use std::fmt::Debug;

use crate::data_structures::Matrix;
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Dense all-pairs result of a Floyd-Warshall run, indexed by stable vertex index
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsShortestPaths<W>
where
    W: Float + Debug,
{
    /// `dist[i][j]`, `W::infinity()` when `j` is unreachable from `i`
    dist: Matrix<W>,

    /// Best intermediate vertex between `i` and `j`, `None` for a direct edge
    next_hop: Matrix<Option<VertexId>>,
}

impl<W> AllPairsShortestPaths<W>
where
    W: Float + Debug,
{
    /// Number of vertices covered
    pub fn size(&self) -> usize {
        self.dist.size()
    }

    pub fn distances(&self) -> &Matrix<W> {
        &self.dist
    }

    pub fn next_hops(&self) -> &Matrix<Option<VertexId>> {
        &self.next_hop
    }

    /// Shortest distance from `from` to `to`, `None` when unreachable.
    ///
    /// Fails with `NegativeCycle` when the route can loop through one.
    pub fn distance(&self, from: VertexId, to: VertexId) -> Result<Option<W>> {
        self.check_range(from, to)?;
        if self.through_negative_cycle(from, to) {
            return Err(Error::NegativeCycle);
        }
        let d = *self.dist.get(from, to);
        Ok((d < W::infinity()).then_some(d))
    }

    /// True if some vertex can reach itself with negative total weight
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.size()).any(|i| *self.dist.get(i, i) < W::zero())
    }

    /// True if a vertex on a negative cycle is reachable from `from` and reaches `to`
    pub fn through_negative_cycle(&self, from: VertexId, to: VertexId) -> bool {
        let n = self.size();
        from < n
            && to < n
            && (0..n).any(|k| {
                *self.dist.get(k, k) < W::zero()
                    && *self.dist.get(from, k) < W::infinity()
                    && *self.dist.get(k, to) < W::infinity()
            })
    }

    fn check_range(&self, from: VertexId, to: VertexId) -> Result<()> {
        match [from, to].into_iter().find(|&v| v >= self.size()) {
            Some(v) => Err(Error::InvalidVertex(v)),
            None => Ok(()),
        }
    }

    /// Expands the intermediate matrix into the vertex sequence `from ..= to`
    pub fn path(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>> {
        self.check_range(from, to)?;
        if *self.dist.get(from, to) == W::infinity() {
            return Err(Error::Unreachable);
        }
        if self.through_negative_cycle(from, to) {
            log::warn!("Path {} -> {} runs through a negative cycle", from, to);
            return Err(Error::NegativeCycle);
        }

        let n = self.size();
        let mut path = vec![from];
        let mut segments = vec![(from, to)];
        let mut steps = 0;

        while let Some((i, j)) = segments.pop() {
            // A simple path expands into at most 2n segments
            steps += 1;
            if steps > 2 * n {
                log::warn!("Path {} -> {} did not close after {} expansions", from, to, steps);
                return Err(Error::NegativeCycle);
            }

            match *self.next_hop.get(i, j) {
                Some(k) => {
                    // Left half is expanded first
                    segments.push((k, j));
                    segments.push((i, k));
                }
                None if i != j => path.push(j),
                None => {}
            }
        }

        Ok(path)
    }
}

/// Floyd-Warshall all-pairs shortest paths, O(V³).
///
/// Negative edge weights are accepted. Negative cycles are not rejected; they
/// leave a negative diagonal, see [`AllPairsShortestPaths::has_negative_cycle`].
/// Distance and path queries for pairs routed through one fail instead.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    /// Relax the rows for each intermediate vertex on the rayon pool
    parallel: bool,
}

impl FloydWarshall {
    /// Creates a new sequential Floyd-Warshall instance
    pub fn new() -> Self {
        FloydWarshall { parallel: false }
    }

    /// Enable or disable row-parallel relaxation
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Computes the distance and intermediate matrices for every vertex pair
    pub fn compute<W, G>(&self, graph: &G) -> AllPairsShortestPaths<W>
    where
        W: Float + Debug + Send + Sync,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        log::debug!(
            "Floyd-Warshall over {} vertices and {} edges (parallel: {})",
            n,
            graph.edge_count(),
            self.parallel
        );

        let mut dist = Matrix::new(n, W::infinity());
        let mut next_hop = Matrix::new(n, None);

        for i in 0..n {
            dist.set(i, i, W::zero());
        }
        for i in 0..n {
            for (j, weight) in graph.outgoing_edges(i) {
                // Parallel edges: keep the lightest
                if weight < *dist.get(i, j) {
                    dist.set(i, j, weight);
                }
            }
        }

        for k in 0..n {
            // Row k does not change during step k unless dist[k][k] < 0
            let row_k = dist.row(k).to_vec();

            if self.parallel {
                dist.par_rows_mut()
                    .zip(next_hop.par_rows_mut())
                    .for_each(|(row, hops)| relax_row(row, hops, &row_k, k));
            } else {
                dist.rows_mut()
                    .zip(next_hop.rows_mut())
                    .for_each(|(row, hops)| relax_row(row, hops, &row_k, k));
            }
        }

        let result = AllPairsShortestPaths { dist, next_hop };
        if result.has_negative_cycle() {
            log::warn!("Floyd-Warshall found a negative cycle");
        }
        result
    }
}

/// `dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])` for one row `i`
fn relax_row<W>(row: &mut [W], hops: &mut [Option<VertexId>], row_k: &[W], k: VertexId)
where
    W: Float,
{
    let d_ik = row[k];
    if d_ik == W::infinity() {
        return;
    }

    for (j, &d_kj) in row_k.iter().enumerate() {
        let candidate = d_ik + d_kj;
        if candidate < row[j] {
            row[j] = candidate;
            hops[j] = Some(k);
        }
    }
}
