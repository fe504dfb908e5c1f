//! Linear-time planarity testing with embeddings and Kuratowski certificates.
//!
//! The pipeline follows the left-right (LR) criterion:
//! - `lr` builds the palm tree (DFS orientation, lowpoints, nesting order), runs
//!   the conflict-pair test over return edges, and turns a successful test into
//!   a half-edge rotation system.
//! - `kuratowski` prunes a non-planar component down to a K5 / K3,3 subdivision.
//! - `planarity` ties the phases together per connected component.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.
//! - Vertices are dense `VertexId`s. Graph loading, drawing, and file formats
//!   live with the callers.

pub mod api;
pub mod embedding;
pub mod graph;
pub mod kuratowski;
pub mod lr;
pub mod planarity;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use embedding::{PlanarEmbedding, Rotation, StructureError};
pub use graph::{Graph, VertexId};
pub use kuratowski::{Certificate, KuratowskiKind, KuratowskiSubdivision};
pub use planarity::{is_planar, test_planarity, test_planarity_with, PlanarityCfg, PlanarityResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::embedding::{HalfEdgeId, PlanarEmbedding, Rotation, StructureError};
    pub use crate::graph::families;
    pub use crate::graph::rand::{gnm, stacked_triangulation, ReplayToken};
    pub use crate::graph::{Graph, VertexId};
    pub use crate::kuratowski::{Certificate, KuratowskiKind, KuratowskiSubdivision};
    pub use crate::planarity::{
        is_planar, test_planarity, test_planarity_with, PlanarityCfg, PlanarityResult,
    };
}
