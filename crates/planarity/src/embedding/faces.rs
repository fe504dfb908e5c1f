//! Face tracing and structural checks.
//!
//! A face is the orbit of `h ↦ ccw(twin(h))`: arrive at a vertex along a
//! half-edge, turn to the next neighbour counter-clockwise, continue.

use super::rotation::PlanarEmbedding;
use super::types::{HalfEdgeId, StructureError};
use crate::graph::VertexId;

impl PlanarEmbedding {
    /// Successor of `id` along the face to its right.
    pub fn next_face_half_edge(&self, id: HalfEdgeId) -> Option<HalfEdgeId> {
        let twin = self.twin(id)?;
        Some(self.record(twin)?.ccw)
    }

    /// Vertices of the face containing the half-edge `u→v`, starting at `u`.
    pub fn traverse_face(&self, u: VertexId, v: VertexId) -> Result<Vec<VertexId>, StructureError> {
        let start = self
            .half_edge(u, v)
            .ok_or(StructureError::InvalidReference {
                vertex: u,
                reference: v,
            })?;
        let mut visited = vec![false; self.half_edge_count()];
        let walk = self.trace_face(start, &mut visited)?;
        Ok(self.face_vertices(&walk))
    }

    /// All faces; every half-edge lies on exactly one.
    pub fn faces(&self) -> Result<Vec<Vec<VertexId>>, StructureError> {
        let mut visited = vec![false; self.half_edge_count()];
        let mut out = Vec::new();
        for i in 0..self.half_edge_count() {
            if visited[i] {
                continue;
            }
            let walk = self.trace_face(HalfEdgeId(i), &mut visited)?;
            out.push(self.face_vertices(&walk));
        }
        Ok(out)
    }

    /// Faces of the plane drawing: components share one outer face.
    ///
    /// Each component contributes its traced faces (an isolated vertex counts
    /// one), and `C − 1` duplicate outer faces are removed, so that
    /// `V − E + F = 1 + C` holds for any planar embedding.
    pub fn face_count(&self) -> Result<usize, StructureError> {
        let traced = self.faces()?.len();
        let comps = self.components();
        let isolated = comps
            .iter()
            .filter(|c| c.len() == 1 && self.degree(c[0]) == 0)
            .count();
        Ok(traced + isolated + 1 - comps.len())
    }

    /// Verify twins, mutual `cw`/`ccw` links, and one rotation cycle per vertex.
    ///
    /// Diagnostic only: inconsistent embeddings yield `Err`, never a panic.
    pub fn check_structure(&self) -> Result<(), StructureError> {
        for (id, h) in self.half_edges() {
            if self.half_edge(h.target, h.source).is_none() {
                return Err(StructureError::MissingTwin {
                    from: h.source,
                    to: h.target,
                });
            }
            let broken = StructureError::BrokenRotation {
                vertex: h.source,
                neighbor: h.target,
            };
            let (Some(cw), Some(ccw)) = (self.record(h.cw), self.record(h.ccw)) else {
                return Err(broken);
            };
            if cw.ccw != id || ccw.cw != id || cw.source != h.source || ccw.source != h.source {
                return Err(broken);
            }
        }
        for v in 0..self.vertex_count() {
            let v = VertexId(v);
            let degree = self.degree(v);
            let Some(start) = self.first_half_edge(v) else {
                if degree > 0 {
                    return Err(StructureError::FragmentedRotation {
                        vertex: v,
                        reached: 0,
                        degree,
                    });
                }
                continue;
            };
            let mut reached = 0;
            let mut cur = start;
            loop {
                reached += 1;
                cur = self.record(cur).map(|h| h.cw).unwrap_or(start);
                if cur == start || reached > degree {
                    break;
                }
            }
            let rooted = self.record(start).is_some_and(|h| h.source == v);
            if reached != degree || !rooted {
                return Err(StructureError::FragmentedRotation {
                    vertex: v,
                    reached,
                    degree,
                });
            }
        }
        Ok(())
    }

    /// `check_structure` plus Euler's formula `V − E + F = 2` per component.
    pub fn check_planar(&self) -> Result<(), StructureError> {
        self.check_structure()?;
        let comps = self.components();
        let mut comp_of = vec![0usize; self.vertex_count()];
        for (ci, comp) in comps.iter().enumerate() {
            for v in comp {
                comp_of[v.0] = ci;
            }
        }
        let mut faces = vec![0usize; comps.len()];
        for face in self.faces()? {
            if let Some(v) = face.first() {
                faces[comp_of[v.0]] += 1;
            }
        }
        for (ci, comp) in comps.iter().enumerate() {
            let half: usize = comp.iter().map(|&v| self.degree(v)).sum();
            if half == 0 {
                continue;
            }
            let (vertices, edges) = (comp.len(), half / 2);
            if vertices + faces[ci] != edges + 2 {
                return Err(StructureError::EulerViolation {
                    root: comp[0],
                    vertices,
                    edges,
                    faces: faces[ci],
                });
            }
        }
        Ok(())
    }

    fn trace_face(
        &self,
        start: HalfEdgeId,
        visited: &mut [bool],
    ) -> Result<Vec<HalfEdgeId>, StructureError> {
        let mut walk = Vec::new();
        let mut cur = start;
        loop {
            visited[cur.0] = true;
            walk.push(cur);
            let h = self.get(cur);
            match self.next_face_half_edge(cur) {
                None => {
                    return Err(StructureError::MissingTwin {
                        from: h.source,
                        to: h.target,
                    })
                }
                Some(n) if n == start => return Ok(walk),
                Some(n) if walk.len() <= self.half_edge_count() => cur = n,
                Some(_) => {
                    return Err(StructureError::BrokenRotation {
                        vertex: h.source,
                        neighbor: h.target,
                    })
                }
            }
        }
    }

    fn face_vertices(&self, walk: &[HalfEdgeId]) -> Vec<VertexId> {
        walk.iter()
            .map(|&h| self.get(h).source)
            .collect()
    }
}
