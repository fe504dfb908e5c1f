//! Kuratowski certificates: K5 / K3,3 subdivisions witnessing non-planarity.
//!
//! Purpose
//! - `extract` shrinks a non-planar component to an edge-minimal non-planar
//!   subgraph, which is always a subdivision of K5 or K3,3.
//! - `KuratowskiSubdivision::classify` recognises such a subdivision from a bare
//!   edge list, so certificates can be checked without trusting their source.
//!
//! Why this design
//! - Pruning is driven by the decision test alone: an edge is dropped whenever
//!   the rest stays non-planar. The conflict witness only orders the attempts,
//!   keeping the tree paths that caused the conflict until last.
//! - Classification splices out degree-2 vertices and then checks the branch
//!   skeleton against K5 / K3,3 exactly; it never assumes the input is minimal.
//!
//! Layout
//! - `mod.rs`: `KuratowskiKind`, `KuratowskiSubdivision`, `Certificate`.
//! - `extract.rs`: witness-guided pruning over one component.

mod extract;

pub use extract::extract;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::graph::{Graph, VertexId};

/// Which forbidden minor a certificate subdivides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KuratowskiKind {
    K5,
    K33,
}

impl fmt::Display for KuratowskiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuratowskiKind::K5 => write!(f, "K5"),
            KuratowskiKind::K33 => write!(f, "K3,3"),
        }
    }
}

/// Branch skeleton of a subdivision.
///
/// `paths` run between two branch vertices (`path[0] < path[last]`) through
/// degree-2 vertices only, sorted by their endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KuratowskiSubdivision {
    pub kind: KuratowskiKind,
    pub branch_vertices: Vec<VertexId>,
    pub paths: Vec<Vec<VertexId>>,
}

impl KuratowskiSubdivision {
    /// Recognise a K5 or K3,3 subdivision from its edge list.
    ///
    /// Returns `None` for anything else, including self-loops, repeated edges,
    /// stray vertices of degree 1, and detached cycles.
    pub fn classify(edges: &[(VertexId, VertexId)]) -> Option<Self> {
        let mut seen = BTreeSet::new();
        let mut adj: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
        for &(u, v) in edges {
            if u == v || !seen.insert((u.min(v), u.max(v))) {
                return None;
            }
            adj.entry(u).or_default().push(v);
            adj.entry(v).or_default().push(u);
        }
        if adj.values().any(|nbrs| nbrs.len() < 2) {
            return None;
        }
        let branch: Vec<VertexId> = adj
            .iter()
            .filter(|(_, nbrs)| nbrs.len() > 2)
            .map(|(&v, _)| v)
            .collect();
        let kind = match branch.len() {
            5 if branch.iter().all(|b| adj[b].len() == 4) => KuratowskiKind::K5,
            6 if branch.iter().all(|b| adj[b].len() == 3) => KuratowskiKind::K33,
            _ => return None,
        };

        let mut paths = Vec::new();
        let mut covered = 0usize;
        for &b in &branch {
            for &first in &adj[&b] {
                let path = walk_branch_path(&adj, b, first, edges.len())?;
                let end = *path.last()?;
                if end == b {
                    return None;
                }
                if b < end {
                    covered += path.len() - 1;
                    paths.push(path);
                }
            }
        }
        // Degree-2 cycles hanging off nothing are not reached from a branch.
        if covered != edges.len() {
            return None;
        }
        paths.sort_by_key(|p| (p[0], p[p.len() - 1]));
        let pairs: BTreeSet<(VertexId, VertexId)> =
            paths.iter().map(|p| (p[0], p[p.len() - 1])).collect();

        match kind {
            KuratowskiKind::K5 if pairs.len() == 10 && paths.len() == 10 => {}
            KuratowskiKind::K33 if pairs.len() == 9 && paths.len() == 9 => {
                if !is_balanced_bipartite(&branch, &pairs) {
                    return None;
                }
            }
            _ => return None,
        }
        Some(Self {
            kind,
            branch_vertices: branch,
            paths,
        })
    }
}

/// Edge set of a Kuratowski subdivision inside the tested graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub kind: KuratowskiKind,
    /// Canonical `(min, max)` edges, sorted.
    pub edges: Vec<(VertexId, VertexId)>,
    pub branch_vertices: Vec<VertexId>,
    pub paths: Vec<Vec<VertexId>>,
}

impl Certificate {
    /// Certificate for `edges` if they form a K5 or K3,3 subdivision.
    pub fn from_edges(edges: &[(VertexId, VertexId)]) -> Option<Self> {
        let sub = KuratowskiSubdivision::classify(edges)?;
        let mut canon: Vec<(VertexId, VertexId)> =
            edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        canon.sort_unstable();
        Some(Self {
            kind: sub.kind,
            edges: canon,
            branch_vertices: sub.branch_vertices,
            paths: sub.paths,
        })
    }

    /// Rename vertex `i` to `map[i]`, re-canonicalising the edge list.
    ///
    /// Pre: every vertex of the certificate indexes into `map`, and `map` is
    /// order-preserving (component vertex lists are ascending).
    pub fn relabel(&self, map: &[VertexId]) -> Self {
        let mut edges: Vec<(VertexId, VertexId)> = self
            .edges
            .iter()
            .map(|&(u, v)| {
                let (a, b) = (map[u.0], map[v.0]);
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        Self {
            kind: self.kind,
            edges,
            branch_vertices: self.branch_vertices.iter().map(|v| map[v.0]).collect(),
            paths: self
                .paths
                .iter()
                .map(|p| p.iter().map(|v| map[v.0]).collect())
                .collect(),
        }
    }

    /// Vertices touched by the certificate, ascending.
    pub fn vertices(&self) -> Vec<VertexId> {
        let set: BTreeSet<VertexId> = self.edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        set.into_iter().collect()
    }

    /// True if every certificate edge is an edge of `g`.
    pub fn is_subgraph_of(&self, g: &Graph) -> bool {
        self.edges.iter().all(|&(u, v)| g.has_edge(u, v))
    }
}

/// Follow degree-2 vertices from branch `start` via `first` to the next branch.
fn walk_branch_path(
    adj: &BTreeMap<VertexId, Vec<VertexId>>,
    start: VertexId,
    first: VertexId,
    max_steps: usize,
) -> Option<Vec<VertexId>> {
    let mut path = vec![start, first];
    let (mut prev, mut cur) = (start, first);
    while adj.get(&cur)?.len() == 2 {
        if path.len() > max_steps + 1 {
            return None;
        }
        let next = *adj[&cur].iter().find(|&&x| x != prev)?;
        path.push(next);
        prev = cur;
        cur = next;
    }
    Some(path)
}

/// Two-colour the branch skeleton; both sides must have three vertices.
fn is_balanced_bipartite(branch: &[VertexId], pairs: &BTreeSet<(VertexId, VertexId)>) -> bool {
    let Some(&root) = branch.first() else {
        return false;
    };
    let side: BTreeSet<VertexId> = pairs
        .iter()
        .filter_map(|&(a, b)| match (a == root, b == root) {
            (true, _) => Some(b),
            (_, true) => Some(a),
            _ => None,
        })
        .collect();
    // The root's three partners form one side; the rest (root included) the other.
    let other: BTreeSet<VertexId> = branch.iter().copied().filter(|v| !side.contains(v)).collect();
    side.len() == 3
        && other.len() == 3
        && pairs
            .iter()
            .all(|(a, b)| side.contains(a) != side.contains(b))
}
