use super::families::*;
use super::rand::{gnm, stacked_triangulation, ReplayToken};
use super::*;

#[test]
fn normalization_drops_loops_and_repeats() {
    let mut g = Graph::new(3);
    assert!(g.add_edge(VertexId(0), VertexId(1)));
    assert!(!g.add_edge(VertexId(1), VertexId(0)));
    assert!(!g.add_edge(VertexId(2), VertexId(2)));
    assert!(g.add_edge(VertexId(1), VertexId(2)));
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edges(), &[(VertexId(0), VertexId(1)), (VertexId(1), VertexId(2))]);
    assert!(g.has_edge(VertexId(2), VertexId(1)));
    assert!(!g.has_edge(VertexId(0), VertexId(2)));
}

#[test]
fn endpoints_grow_vertex_set() {
    let g = Graph::from_edges(0, [(0, 4)]);
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.degree(VertexId(4)), 1);
    assert_eq!(g.degree(VertexId(2)), 0);
    assert!(g.neighbors(VertexId(99)).is_empty());
}

#[test]
fn components_ordered_by_smallest_vertex() {
    let g = Graph::from_edges(7, [(5, 6), (0, 3), (3, 1)]);
    let comps = g.components();
    let as_idx: Vec<Vec<usize>> = comps
        .iter()
        .map(|c| c.iter().map(|v| v.0).collect())
        .collect();
    assert_eq!(as_idx, vec![vec![0, 1, 3], vec![2], vec![4], vec![5, 6]]);
}

#[test]
fn subgraph_relabels_and_keeps_order() {
    let g = Graph::from_edges(6, [(4, 5), (1, 4), (1, 5), (0, 1)]);
    let (sub, map) = g.subgraph(&[VertexId(1), VertexId(4), VertexId(5)]);
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(map, vec![VertexId(1), VertexId(4), VertexId(5)]);
    // (4,5) first, then (1,4), then (1,5), in local labels.
    assert_eq!(
        sub.edges(),
        &[
            (VertexId(1), VertexId(2)),
            (VertexId(0), VertexId(1)),
            (VertexId(0), VertexId(2))
        ]
    );
}

#[test]
fn family_sizes() {
    assert_eq!(complete(5).edge_count(), 10);
    assert_eq!(complete_bipartite(3, 3).edge_count(), 9);
    assert_eq!(cycle(6).edge_count(), 6);
    assert_eq!(path(1).edge_count(), 0);
    assert_eq!(grid(3, 4).edge_count(), 3 * 3 + 2 * 4);
    assert_eq!(wheel(5).edge_count(), 10);
    let p = petersen();
    assert_eq!(p.edge_count(), 15);
    assert!(p.vertices().all(|v| p.degree(v) == 3));
}

#[test]
fn gnm_reproducible_and_sized() {
    let tok = ReplayToken::new(42, 7);
    let a = gnm(8, 12, tok);
    let b = gnm(8, 12, tok);
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.edge_count(), 12);
    // Requests beyond K_n are clamped.
    assert_eq!(gnm(4, 100, tok.next()).edge_count(), 6);
}

#[test]
fn stacked_triangulation_is_maximal() {
    for n in 3..12 {
        let g = stacked_triangulation(n, ReplayToken::new(1, n as u64));
        assert_eq!(g.edge_count(), 3 * n - 6);
        assert_eq!(g.components().len(), 1);
    }
    assert_eq!(stacked_triangulation(2, ReplayToken::new(0, 0)).edge_count(), 1);
}
