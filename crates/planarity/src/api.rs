//! Curated API for callers (UNSTABLE).
//!
//! Important
//! - Prefer these re-exports over deep module paths; internals are free to move.
//! - Everything here is read-only over its inputs: graphs go in, an embedding or
//!   a certificate comes out.

// Graph model and generators
pub use crate::graph::families::{
    complete, complete_bipartite, cycle, grid, path, petersen, wheel,
};
pub use crate::graph::rand::{gnm, stacked_triangulation, ReplayToken as GraphReplay};
pub use crate::graph::{Graph, VertexId};
// Embedding surface
pub use crate::embedding::{HalfEdgeId, PlanarEmbedding, Rotation, StructureError};
// Certificates
pub use crate::kuratowski::{Certificate, KuratowskiKind, KuratowskiSubdivision};
// Orchestrator
pub use crate::planarity::{
    is_planar, test_planarity, test_planarity_with, PlanarityCfg, PlanarityResult,
};

/// Upper bound on the edge count of a simple planar graph with `n` vertices.
///
/// Pre: none. Post: `None` for `n < 3` (no bound beyond simplicity), else `3n − 6`.
pub fn planar_edge_bound(n: usize) -> Option<usize> {
    if n < 3 {
        None
    } else {
        Some(3 * n - 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_bound_small_and_large() {
        assert_eq!(planar_edge_bound(0), None);
        assert_eq!(planar_edge_bound(2), None);
        assert_eq!(planar_edge_bound(3), Some(3));
        assert_eq!(planar_edge_bound(5), Some(9));
    }

    #[test]
    fn bound_matches_complete_graphs() {
        // K4 is the largest planar complete graph and is tight.
        assert_eq!(Some(complete(4).edge_count()), planar_edge_bound(4));
        assert!(complete(5).edge_count() > planar_edge_bound(5).unwrap());
    }
}
