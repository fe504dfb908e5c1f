//! Left-right planarity test: palm tree, constraint stack, embedding assembly.
//!
//! Purpose
//! - `orient`: iterative DFS that orients every edge (tree arcs point away
//!   from the root, back arcs towards an ancestor) and computes heights,
//!   lowpoints, and the nesting order.
//! - `constraints`: processes arcs in nesting order on a stack of conflict
//!   pairs; either every return arc gets a consistent side or a witness pair
//!   is reported.
//! - `assemble`: resolves the lazily accumulated sides and inserts half-edges
//!   so that the rotation at every vertex is a single planar cycle.
//!
//! Why this design
//! - Each phase owns an explicit context object (`PalmTree`, `ConstraintStack`,
//!   the embedding under construction), so components can run on separate
//!   threads with nothing shared.
//! - Arcs are the edge indices of the input `Graph`; all per-arc tables are
//!   plain vectors indexed by them.

mod assemble;
mod constraints;
mod orient;
mod types;

pub use assemble::assemble;
pub use constraints::{ConstraintStack, Outcome, Sides};
pub use orient::PalmTree;
pub use types::{ConflictPair, ConflictWitness, Interval};

use crate::graph::Graph;

/// Decision-only LR test over every component of `g` (no embedding).
pub fn is_planar_graph(g: &Graph) -> bool {
    if exceeds_edge_bound(g.vertex_count(), g.edge_count()) {
        return false;
    }
    let palm = PalmTree::build(g);
    matches!(ConstraintStack::new(&palm).run(), Outcome::Consistent(_))
}

/// `E > 3V − 6` with `V ≥ 3`: too dense for any simple planar graph.
#[inline]
pub fn exceeds_edge_bound(vertices: usize, edges: usize) -> bool {
    crate::api::planar_edge_bound(vertices).is_some_and(|bound| edges > bound)
}

#[cfg(test)]
mod tests;
