//! Seeded random graphs (uniform G(n, m) and stacked triangulations).
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   a failing sample can be regenerated from the two numbers alone.
//! - `stacked_triangulation` inserts each new vertex into a uniformly chosen
//!   triangular face; the result is maximal planar (`3n − 6` edges for `n ≥ 3`).

use super::{Graph, VertexId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform simple graph with `n` vertices and `min(m, n(n−1)/2)` edges.
pub fn gnm(n: usize, m: usize, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in (u + 1)..n {
            pairs.push((u, v));
        }
    }
    let m = m.min(pairs.len());
    let (picked, _) = pairs.partial_shuffle(&mut rng, m);
    Graph::from_edges(n, picked.iter().copied())
}

/// Random maximal planar graph on `n` vertices.
///
/// For `n < 3` the result is K_n.
pub fn stacked_triangulation(n: usize, tok: ReplayToken) -> Graph {
    if n < 3 {
        return super::families::complete(n);
    }
    let mut rng = tok.to_std_rng();
    let mut g = Graph::from_edges(n, [(0, 1), (1, 2), (2, 0)]);
    // Both sides of the seed triangle are faces.
    let mut faces: Vec<[usize; 3]> = vec![[0, 1, 2], [0, 2, 1]];
    for v in 3..n {
        let k = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(k);
        for u in [a, b, c] {
            g.add_edge(VertexId(u), VertexId(v));
        }
        faces.push([a, b, v]);
        faces.push([b, c, v]);
        faces.push([c, a, v]);
    }
    g
}
