//! Vertex identifiers and the simple-graph container.

use std::collections::HashSet;
use std::fmt;

/// Dense vertex identifier (`0..n`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(v: usize) -> Self {
        VertexId(v)
    }
}

/// Simple undirected graph: no self-loops, no parallel edges.
///
/// Edges are stored once as canonical `(min, max)` pairs in insertion order;
/// adjacency lists follow the same order, which fixes DFS order downstream.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<VertexId>>,
    edges: Vec<(VertexId, VertexId)>,
    edge_set: HashSet<(usize, usize)>,
}

impl Graph {
    /// Graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Build from index pairs; the vertex set grows to cover every endpoint.
    pub fn from_edges<I>(n: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new(n);
        for (u, v) in pairs {
            g.add_edge(VertexId(u), VertexId(v));
        }
        g
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.adj.push(Vec::new());
        VertexId(self.adj.len() - 1)
    }

    /// Insert `{u, v}`. Returns `false` when normalized away (self-loop or repeat).
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if u == v {
            return false;
        }
        let need = u.0.max(v.0) + 1;
        if self.adj.len() < need {
            self.adj.resize_with(need, Vec::new);
        }
        let key = canonical(u, v);
        if !self.edge_set.insert(key) {
            return false;
        }
        self.edges.push((VertexId(key.0), VertexId(key.1)));
        self.adj[u.0].push(v);
        self.adj[v.0].push(u);
        true
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adj.len()).map(VertexId)
    }

    /// Canonical `(min, max)` pairs in insertion order.
    #[inline]
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Neighbours in edge-insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adj.get(v.0).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        u != v && self.edge_set.contains(&canonical(u, v))
    }

    /// Connected components, ordered by smallest vertex; members ascending.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let n = self.adj.len();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        let mut stack = Vec::new();
        for s in 0..n {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            stack.push(s);
            let mut comp = Vec::new();
            while let Some(v) = stack.pop() {
                comp.push(VertexId(v));
                for w in &self.adj[v] {
                    if !seen[w.0] {
                        seen[w.0] = true;
                        stack.push(w.0);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }

    /// Induced subgraph on `vertices`, relabelled to `0..k` in the given order.
    ///
    /// Returns the subgraph and the local→global vertex map. Edges keep the
    /// parent's insertion order.
    pub fn subgraph(&self, vertices: &[VertexId]) -> (Graph, Vec<VertexId>) {
        let mut local = vec![usize::MAX; self.adj.len()];
        for (i, v) in vertices.iter().enumerate() {
            if let Some(slot) = local.get_mut(v.0) {
                *slot = i;
            }
        }
        let mut sub = Graph::new(vertices.len());
        for &(u, v) in &self.edges {
            let (lu, lv) = (local[u.0], local[v.0]);
            if lu != usize::MAX && lv != usize::MAX {
                sub.add_edge(VertexId(lu), VertexId(lv));
            }
        }
        (sub, vertices.to_vec())
    }

    /// Same vertex set, keeping only the edges whose index passes `keep`.
    pub fn filter_edges<F>(&self, mut keep: F) -> Graph
    where
        F: FnMut(usize, (VertexId, VertexId)) -> bool,
    {
        let mut g = Graph::new(self.adj.len());
        for (i, &e) in self.edges.iter().enumerate() {
            if keep(i, e) {
                g.add_edge(e.0, e.1);
            }
        }
        g
    }
}

#[inline]
fn canonical(u: VertexId, v: VertexId) -> (usize, usize) {
    if u.0 < v.0 {
        (u.0, v.0)
    } else {
        (v.0, u.0)
    }
}
