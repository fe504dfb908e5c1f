//! `PlanarEmbedding` storage, insertion, splicing, and rotation navigation.

use std::collections::HashMap;

use super::types::{HalfEdge, HalfEdgeId, Rotation, StructureError};
use crate::graph::VertexId;

/// Rotation system over vertices `0..n`, stored as an arena of half-edges.
///
/// Each vertex with at least one half-edge has a `first` half-edge; following
/// `cw` from it visits every neighbour once and returns to the start.
#[derive(Clone, Debug, Default)]
pub struct PlanarEmbedding {
    half_edges: Vec<HalfEdge>,
    first: Vec<Option<HalfEdgeId>>,
    degree: Vec<usize>,
    index: HashMap<(VertexId, VertexId), HalfEdgeId>,
}

impl PlanarEmbedding {
    /// Embedding with `n` vertices and empty rotations.
    pub fn new(n: usize) -> Self {
        Self {
            half_edges: Vec::new(),
            first: vec![None; n],
            degree: vec![0; n],
            index: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.first.push(None);
        self.degree.push(0);
        VertexId(self.first.len() - 1)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.first.len()
    }

    #[inline]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Undirected edge count; exact once every half-edge has its twin.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// Number of half-edges leaving `v` (0 for unknown vertices).
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.degree.get(v.0).copied().unwrap_or(0)
    }

    #[inline]
    pub fn half_edge(&self, u: VertexId, v: VertexId) -> Option<HalfEdgeId> {
        self.index.get(&(u, v)).copied()
    }

    #[inline]
    pub fn record(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        self.half_edges.get(id.0)
    }

    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .map(|(i, h)| (HalfEdgeId(i), h))
    }

    /// Twin `v→u` of the half-edge `u→v`.
    #[inline]
    pub fn twin(&self, id: HalfEdgeId) -> Option<HalfEdgeId> {
        let h = self.half_edges.get(id.0)?;
        self.half_edge(h.target, h.source)
    }

    /// Neighbour that starts the rotation at `v`.
    pub fn first_neighbor(&self, v: VertexId) -> Option<VertexId> {
        let f = (*self.first.get(v.0)?)?;
        Some(self.half_edges[f.0].target)
    }

    /// Neighbour immediately clockwise of `w` around `u`.
    pub fn cw(&self, u: VertexId, w: VertexId) -> Option<VertexId> {
        let h = self.half_edge(u, w)?;
        Some(self.half_edges[self.half_edges[h.0].cw.0].target)
    }

    /// Neighbour immediately counter-clockwise of `w` around `u`.
    pub fn ccw(&self, u: VertexId, w: VertexId) -> Option<VertexId> {
        let h = self.half_edge(u, w)?;
        Some(self.half_edges[self.half_edges[h.0].ccw.0].target)
    }

    /// Neighbours of `v` in clockwise order, starting at the first neighbour.
    pub fn neighbors_cw(&self, v: VertexId) -> NeighborsCw<'_> {
        let start = self.first.get(v.0).copied().flatten();
        NeighborsCw {
            emb: self,
            start,
            cur: start,
            remaining: self.degree(v),
        }
    }

    /// Clockwise rotation of every vertex.
    pub fn rotation_system(&self) -> Vec<Vec<VertexId>> {
        (0..self.vertex_count())
            .map(|v| self.neighbors_cw(VertexId(v)).collect())
            .collect()
    }

    /// Undirected edges as `(min, max)` pairs, each reported once.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut out: Vec<(VertexId, VertexId)> = self
            .half_edges
            .iter()
            .filter(|h| h.source < h.target)
            .map(|h| (h.source, h.target))
            .collect();
        out.sort_unstable();
        out
    }

    /// Insert `v` into the rotation at `u`.
    ///
    /// With a `reference` neighbour, the new half-edge lands immediately
    /// clockwise (`Rotation::Cw`) or counter-clockwise (`Rotation::Ccw`) of it;
    /// a counter-clockwise insertion next to the first neighbour becomes the new
    /// first neighbour. Without a reference, `u` must have no neighbours yet.
    pub fn add_half_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        reference: Option<VertexId>,
        side: Rotation,
    ) -> Result<HalfEdgeId, StructureError> {
        self.check_new_half_edge(u, v)?;
        let Some(r) = reference else {
            if self.first[u.0].is_some() {
                return Err(StructureError::MissingReference { vertex: u });
            }
            return Ok(self.push_half_edge(u, v));
        };
        let href = self
            .half_edge(u, r)
            .ok_or(StructureError::InvalidReference {
                vertex: u,
                reference: r,
            })?;
        let id = self.push_half_edge(u, v);
        match side {
            Rotation::Cw => self.link_after(href, id),
            Rotation::Ccw => {
                let before = self.half_edges[href.0].ccw;
                self.link_after(before, id);
                if self.first[u.0] == Some(href) {
                    self.first[u.0] = Some(id);
                }
            }
        }
        Ok(id)
    }

    /// Insert `v` counter-clockwise of the first neighbour of `u` and make it first.
    pub fn add_half_edge_first(
        &mut self,
        u: VertexId,
        v: VertexId,
    ) -> Result<HalfEdgeId, StructureError> {
        self.check_vertex(u)?;
        let reference = self.first_neighbor(u);
        self.add_half_edge(u, v, reference, Rotation::Ccw)
    }

    /// Link two components by the half-edge pair `u→v` / `v→u`.
    ///
    /// Each new half-edge goes counter-clockwise of its source's first neighbour
    /// (the end of the rotation); existing cyclic orders are only extended.
    /// Any `u`, `v` already in one component (`u == v` included) is rejected
    /// with `AlreadyConnected`.
    pub fn connect_components(&mut self, u: VertexId, v: VertexId) -> Result<(), StructureError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v || self.reachable(u, v) {
            return Err(StructureError::AlreadyConnected { u, v });
        }
        for (a, b) in [(u, v), (v, u)] {
            let prev_first = self.first[a.0];
            let id = self.push_half_edge(a, b);
            if let Some(f) = prev_first {
                let last = self.half_edges[f.0].ccw;
                self.link_after(last, id);
            }
        }
        Ok(())
    }

    /// Splice `other` into `self`, sending its vertex `i` to `vertex_map[i]`.
    ///
    /// Target vertices must not carry a rotation yet; `other`'s rotations are
    /// copied verbatim, so no existing cyclic order changes and no edge is added.
    pub fn absorb(
        &mut self,
        other: &PlanarEmbedding,
        vertex_map: &[VertexId],
    ) -> Result<(), StructureError> {
        if vertex_map.len() != other.vertex_count() {
            return Err(StructureError::VertexMapMismatch {
                expected: other.vertex_count(),
                got: vertex_map.len(),
            });
        }
        let mut claimed = vec![false; self.vertex_count()];
        for &g in vertex_map {
            self.check_vertex(g)?;
            if claimed[g.0] || self.degree[g.0] > 0 {
                return Err(StructureError::VertexOccupied { vertex: g });
            }
            claimed[g.0] = true;
        }
        let offset = self.half_edges.len();
        let shift = |h: HalfEdgeId| HalfEdgeId(h.0 + offset);
        for h in &other.half_edges {
            let rec = HalfEdge {
                source: vertex_map[h.source.0],
                target: vertex_map[h.target.0],
                cw: shift(h.cw),
                ccw: shift(h.ccw),
            };
            self.index
                .insert((rec.source, rec.target), HalfEdgeId(self.half_edges.len()));
            self.degree[rec.source.0] += 1;
            self.half_edges.push(rec);
        }
        for (i, f) in other.first.iter().enumerate() {
            if let Some(f) = f {
                self.first[vertex_map[i].0] = Some(shift(*f));
            }
        }
        Ok(())
    }

    /// Connected components over half-edges, ordered by smallest vertex.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let n = self.vertex_count();
        let adj = self.out_lists();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        for s in 0..n {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            let mut stack = vec![s];
            let mut comp = Vec::new();
            while let Some(x) = stack.pop() {
                comp.push(VertexId(x));
                for &y in &adj[x] {
                    if !seen[y] {
                        seen[y] = true;
                        stack.push(y);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }

    pub(super) fn out_lists(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertex_count()];
        for h in &self.half_edges {
            adj[h.source.0].push(h.target.0);
            // Twins may be missing mid-assembly; treat links as undirected.
            adj[h.target.0].push(h.source.0);
        }
        adj
    }

    /// Arena access for ids minted by this embedding.
    pub(super) fn get(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub(super) fn first_half_edge(&self, v: VertexId) -> Option<HalfEdgeId> {
        self.first.get(v.0).copied().flatten()
    }

    fn reachable(&self, from: VertexId, to: VertexId) -> bool {
        let adj = self.out_lists();
        let mut seen = vec![false; self.vertex_count()];
        let mut stack = vec![from.0];
        seen[from.0] = true;
        while let Some(x) = stack.pop() {
            if x == to.0 {
                return true;
            }
            for &y in &adj[x] {
                if !seen[y] {
                    seen[y] = true;
                    stack.push(y);
                }
            }
        }
        false
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), StructureError> {
        if v.0 < self.vertex_count() {
            Ok(())
        } else {
            Err(StructureError::UnknownVertex { vertex: v })
        }
    }

    fn check_new_half_edge(&self, u: VertexId, v: VertexId) -> Result<(), StructureError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(StructureError::SelfLoop { vertex: u });
        }
        if self.index.contains_key(&(u, v)) {
            return Err(StructureError::DuplicateHalfEdge { from: u, to: v });
        }
        Ok(())
    }

    /// Append a self-linked half-edge; becomes `first` if `u` had none.
    fn push_half_edge(&mut self, u: VertexId, v: VertexId) -> HalfEdgeId {
        let id = HalfEdgeId(self.half_edges.len());
        self.half_edges.push(HalfEdge {
            source: u,
            target: v,
            cw: id,
            ccw: id,
        });
        self.index.insert((u, v), id);
        self.degree[u.0] += 1;
        if self.first[u.0].is_none() {
            self.first[u.0] = Some(id);
        }
        id
    }

    /// Place `new` immediately clockwise of `reference` (same source vertex).
    fn link_after(&mut self, reference: HalfEdgeId, new: HalfEdgeId) {
        let next = self.half_edges[reference.0].cw;
        self.half_edges[reference.0].cw = new;
        self.half_edges[new.0].ccw = reference;
        self.half_edges[new.0].cw = next;
        self.half_edges[next.0].ccw = new;
    }
}

/// Clockwise walk over the rotation at one vertex.
///
/// Bounded by the vertex degree, so a corrupted rotation cannot loop forever.
pub struct NeighborsCw<'a> {
    emb: &'a PlanarEmbedding,
    start: Option<HalfEdgeId>,
    cur: Option<HalfEdgeId>,
    remaining: usize,
}

impl Iterator for NeighborsCw<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.emb.half_edges.get(self.cur?.0)?;
        self.remaining -= 1;
        let next = h.cw;
        self.cur = if Some(next) == self.start {
            None
        } else {
            Some(next)
        };
        Some(h.target)
    }
}
