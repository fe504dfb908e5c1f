//! Half-edge rotation systems (combinatorial planar embeddings).
//!
//! Purpose
//! - Store, for every vertex, the cyclic clockwise order of its incident edges.
//! - Every undirected edge `{u, v}` appears as two half-edges `u→v` and `v→u`;
//!   each half-edge links to its `cw` / `ccw` neighbour in the rotation at its
//!   source.
//!
//! Why arena indices
//! - Half-edges live in one `Vec` and refer to each other by `HalfEdgeId`, so
//!   the single-cycle-per-vertex invariant is an array walk that
//!   `check_structure` can verify on embeddings from any source.
//!
//! Layout
//! - `types.rs`: ids, records, `Rotation`, `StructureError`.
//! - `rotation.rs`: `PlanarEmbedding` storage, insertion, splicing, navigation.
//! - `faces.rs`: face tracing, component-aware face counts, structural checks.

mod faces;
mod rotation;
mod types;

pub use rotation::{NeighborsCw, PlanarEmbedding};
pub use types::{HalfEdge, HalfEdgeId, Rotation, StructureError};
