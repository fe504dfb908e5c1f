//! Simple undirected graph model consumed by the planarity pipeline.
//!
//! Purpose
//! - Hold a vertex set `0..n` and a set of unordered edges with O(1) membership.
//! - Normalize input silently: self-loops and repeated edges are dropped, since
//!   neither affects planarity.
//!
//! Layout
//! - `types.rs`: `VertexId`, `Graph`, component split.
//! - `families.rs`: named graphs (K_n, K_{a,b}, grids, wheels, Petersen).
//! - `rand.rs`: seeded random graphs with replay tokens.

pub mod families;
pub mod rand;
mod types;

pub use types::{Graph, VertexId};

#[cfg(test)]
mod tests;
