//! Turn resolved sides into a rotation system.
//!
//! Every vertex first lists its outgoing arcs clockwise by signed nesting
//! depth. A third DFS then threads each incoming arc into the rotation at its
//! target: tree arcs become the first neighbour of the child, right return
//! arcs go clockwise of the current `right_ref`, left ones counter-clockwise
//! of the current `left_ref` (which then moves onto them).

use super::constraints::Sides;
use super::orient::PalmTree;
use crate::embedding::{PlanarEmbedding, Rotation, StructureError};
use crate::graph::VertexId;

/// Build the embedding of a palm tree whose constraints resolved to `sides`.
///
/// Vertex `i` of the result is vertex `i` of the graph the palm tree was
/// built from. Errors only surface if the sides are inconsistent with the
/// palm tree, which a `Consistent` outcome rules out.
pub fn assemble(palm: &PalmTree, sides: &Sides) -> Result<PlanarEmbedding, StructureError> {
    let n = palm.vertex_count();
    let signed: Vec<i64> = (0..palm.arc_count())
        .map(|e| i64::from(sides.side(e)) * palm.nesting_depth[e])
        .collect();
    let ordered: Vec<Vec<usize>> = palm
        .discovered
        .iter()
        .map(|arcs| {
            let mut sorted = arcs.clone();
            sorted.sort_by_key(|&e| signed[e]);
            sorted
        })
        .collect();

    let mut emb = PlanarEmbedding::new(n);
    for (v, arcs) in ordered.iter().enumerate() {
        let mut prev = None;
        for &e in arcs {
            let w = VertexId(palm.target(e));
            emb.add_half_edge(VertexId(v), w, prev, Rotation::Cw)?;
            prev = Some(w);
        }
    }

    let mut left_ref: Vec<Option<VertexId>> = vec![None; n];
    let mut right_ref: Vec<Option<VertexId>> = vec![None; n];
    let mut cursor = vec![0usize; n];
    for &root in &palm.roots {
        let mut dfs = vec![root];
        while let Some(&v) = dfs.last() {
            let Some(&e) = ordered[v].get(cursor[v]) else {
                dfs.pop();
                continue;
            };
            cursor[v] += 1;
            let w = palm.target(e);
            let (vv, wv) = (VertexId(v), VertexId(w));
            if palm.is_tree_arc(e) {
                emb.add_half_edge_first(wv, vv)?;
                left_ref[v] = Some(wv);
                right_ref[v] = Some(wv);
                dfs.push(w);
            } else if sides.side(e) > 0 {
                emb.add_half_edge(wv, vv, right_ref[w], Rotation::Cw)?;
            } else {
                emb.add_half_edge(wv, vv, left_ref[w], Rotation::Ccw)?;
                left_ref[w] = Some(vv);
            }
        }
    }
    Ok(emb)
}
