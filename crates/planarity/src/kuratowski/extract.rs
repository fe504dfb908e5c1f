//! Witness-guided pruning of a non-planar component.
//!
//! Purpose
//! - Shrink a component that failed the LR test to an edge-minimal non-planar
//!   subgraph, which is always a K5 or K3,3 subdivision.
//!
//! Why this design
//! - The conflict witness names the return arcs that could not be placed.
//!   Those arcs, the tree paths up to their lowpoints, and the arcs that return
//!   to those lowpoints close into cycles around the conflict. They form the
//!   seed and are only offered for deletion after everything else.
//! - Deletions are tried in chunks: a whole chunk goes when the rest stays
//!   non-planar, otherwise it is halved. The first chunk is every edge outside
//!   the seed, so a seed that already contains a subdivision costs one test.
//!   A certificate with `k` edges needs `O(k log E)` decision tests.
//! - Each test runs on the surviving edges only, relabelled compactly, and
//!   pendant edges are peeled as soon as they appear, so tests shrink with the
//!   survivor set.

use std::collections::HashSet;

use super::Certificate;
use crate::graph::{Graph, VertexId};
use crate::lr::{self, ConflictWitness, PalmTree};

/// Shrink the non-planar graph `g` to a Kuratowski subdivision.
///
/// `guide` is the palm tree of `g` with the conflict it produced. Without it
/// (edge-bound rejections) every edge is an equal candidate.
///
/// Panics if `g` is planar or the survivors fail to classify; either is a
/// defect in the LR test, not a property of the input.
pub fn extract(g: &Graph, guide: Option<(&PalmTree, &ConflictWitness)>) -> Certificate {
    let seed = guide
        .map(|(palm, w)| seed_arcs(palm, w))
        .unwrap_or_default();
    let (survivors, tests) = minimal_subgraph(g, &seed);
    let cert = Certificate::from_edges(&survivors).unwrap_or_else(|| {
        panic!(
            "edge-minimal non-planar subgraph with {} edges is not a Kuratowski subdivision",
            survivors.len()
        )
    });
    tracing::debug!(
        kind = %cert.kind,
        edges = cert.edges.len(),
        seed = seed.len(),
        tests,
        "certificate"
    );
    cert
}

/// Edge-minimal non-planar subgraph of `g`, offering `seed` for deletion last.
///
/// Returns the surviving edges in input order and the number of decision tests.
pub(super) fn minimal_subgraph(
    g: &Graph,
    seed: &HashSet<usize>,
) -> (Vec<(VertexId, VertexId)>, usize) {
    let (outside, inside): (Vec<usize>, Vec<usize>) =
        (0..g.edge_count()).partition(|e| !seed.contains(e));
    let mut pruner = Pruner::new(g);
    assert!(
        !pruner.survivors_planar(),
        "extracting a certificate from a planar graph"
    );
    // Popped from the back: everything outside the seed goes first.
    let mut pending = vec![inside, outside];
    while let Some(mut chunk) = pending.pop() {
        chunk.retain(|&e| pruner.alive[e]);
        if chunk.is_empty() || pruner.try_remove(&chunk) {
            continue;
        }
        if chunk.len() > 1 {
            let back = chunk.split_off(chunk.len() / 2);
            pending.push(back);
            pending.push(chunk);
        }
    }
    let survivors = pruner.live.iter().map(|&e| g.edges()[e]).collect();
    (survivors, pruner.tests)
}

/// Witness arcs, the tree paths from their sources up to their lowpoints, and
/// the return arcs (with their tree paths) that reach those lowpoints.
pub(super) fn seed_arcs(palm: &PalmTree, w: &ConflictWitness) -> HashSet<usize> {
    let mut out = HashSet::new();
    let named = std::iter::once(w.arc)
        .chain(w.parent_arc)
        .chain(w.pair.arcs());
    for a in named {
        let (src, ret) = (palm.source(a), palm.lowpt_arc[a]);
        out.insert(a);
        out.insert(ret);
        out.extend(palm.tree_path_up(src, palm.lowpt[a]));
        out.extend(palm.tree_path_up(palm.source(ret), palm.height[src]));
    }
    out
}

/// Surviving edge set of one extraction.
///
/// Edges leave `live` only; an edge kept once stays necessary because later
/// deletions only shrink the survivor set.
struct Pruner<'g> {
    g: &'g Graph,
    alive: Vec<bool>,
    /// Surviving edge ids, ascending.
    live: Vec<usize>,
    degree: Vec<usize>,
    incident: Vec<Vec<usize>>,
    /// Compact label per vertex while building a test graph (`usize::MAX` otherwise).
    slot: Vec<usize>,
    tests: usize,
}

impl<'g> Pruner<'g> {
    fn new(g: &'g Graph) -> Self {
        let (n, m) = (g.vertex_count(), g.edge_count());
        let mut incident = vec![Vec::new(); n];
        for (e, &(u, v)) in g.edges().iter().enumerate() {
            incident[u.0].push(e);
            incident[v.0].push(e);
        }
        let mut pruner = Self {
            g,
            alive: vec![true; m],
            live: (0..m).collect(),
            degree: incident.iter().map(Vec::len).collect(),
            incident,
            slot: vec![usize::MAX; n],
            tests: 0,
        };
        let pendant: Vec<usize> = (0..n).filter(|&v| pruner.degree[v] == 1).collect();
        pruner.peel(pendant);
        pruner
    }

    /// Delete `chunk` if the survivors stay non-planar without it.
    fn try_remove(&mut self, chunk: &[usize]) -> bool {
        for &e in chunk {
            self.alive[e] = false;
        }
        if self.survivors_planar() {
            for &e in chunk {
                self.alive[e] = true;
            }
            return false;
        }
        let mut pendant = Vec::new();
        for &e in chunk {
            let (u, v) = self.g.edges()[e];
            for x in [u.0, v.0] {
                self.degree[x] -= 1;
                if self.degree[x] == 1 {
                    pendant.push(x);
                }
            }
        }
        self.peel(pendant);
        tracing::trace!(removed = chunk.len(), left = self.live.len(), "pruned");
        true
    }

    /// Remove pendant edges until none is left; they never lie on a subdivision.
    fn peel(&mut self, mut pendant: Vec<usize>) {
        while let Some(v) = pendant.pop() {
            if self.degree[v] != 1 {
                continue;
            }
            let Some(&e) = self.incident[v].iter().find(|&&e| self.alive[e]) else {
                continue;
            };
            self.alive[e] = false;
            let (a, b) = self.g.edges()[e];
            let w = if a.0 == v { b.0 } else { a.0 };
            self.degree[v] = 0;
            self.degree[w] -= 1;
            if self.degree[w] == 1 {
                pendant.push(w);
            }
        }
        let alive = &self.alive;
        self.live.retain(|&e| alive[e]);
    }

    /// Decision test on the alive edges among `live`.
    fn survivors_planar(&mut self) -> bool {
        self.tests += 1;
        let Self {
            g,
            alive,
            live,
            slot,
            ..
        } = self;
        let mut rest = Graph::new(0);
        let mut touched = Vec::new();
        for &e in live.iter().filter(|&&e| alive[e]) {
            let (u, v) = g.edges()[e];
            let mut local = |x: usize| {
                if slot[x] == usize::MAX {
                    slot[x] = touched.len();
                    touched.push(x);
                }
                VertexId(slot[x])
            };
            let (lu, lv) = (local(u.0), local(v.0));
            rest.add_edge(lu, lv);
        }
        for x in touched {
            slot[x] = usize::MAX;
        }
        lr::is_planar_graph(&rest)
    }
}
