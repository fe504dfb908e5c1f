use super::*;
use crate::graph::families::*;
use crate::graph::rand::{stacked_triangulation, ReplayToken};
use crate::graph::{Graph, VertexId};

fn embed(g: &Graph) -> crate::embedding::PlanarEmbedding {
    let palm = PalmTree::build(g);
    match ConstraintStack::new(&palm).run() {
        Outcome::Consistent(sides) => assemble(&palm, &sides).unwrap(),
        Outcome::Conflict(w) => panic!("unexpected conflict: {w:?}"),
    }
}

fn sorted_edges(g: &Graph) -> Vec<(VertexId, VertexId)> {
    let mut e = g.edges().to_vec();
    e.sort_unstable();
    e
}

#[test]
fn triangle_palm_tree() {
    let g = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    let palm = PalmTree::build(&g);
    assert_eq!(palm.arcs, vec![(0, 1), (1, 2), (2, 0)]);
    assert_eq!(palm.height, vec![0, 1, 2]);
    assert_eq!(palm.parent_arc, vec![None, Some(0), Some(1)]);
    assert_eq!(palm.lowpt, vec![0, 0, 0]);
    assert_eq!(palm.lowpt2, vec![0, 1, 2]);
    assert_eq!(palm.lowpt_arc, vec![0, 2, 2]);
    assert_eq!(palm.roots, vec![0]);
    assert!(palm.is_tree_arc(1));
    assert!(!palm.is_tree_arc(2));
    assert!(palm.has_return(1));
    assert!(!palm.has_return(0));
}

#[test]
fn lowpoint_arcs_return_to_lowpoints() {
    for g in [petersen(), grid(5, 6), stacked_triangulation(60, ReplayToken::new(3, 0))] {
        let palm = PalmTree::build(&g);
        for e in 0..palm.arc_count() {
            let r = palm.lowpt_arc[e];
            if !palm.has_return(e) {
                assert_eq!(r, e);
                continue;
            }
            assert!(!palm.is_tree_arc(r), "arc {e} returns through tree arc {r}");
            assert_eq!(palm.height[palm.target(r)], palm.lowpt[e]);
            // `r` leaves the subtree entered by `e`.
            let path = palm.tree_path_up(palm.source(r), palm.height[palm.source(e)]);
            assert!(r == e || path.contains(&e));
        }
    }
}

#[test]
fn every_root_has_height_zero() {
    let g = Graph::from_edges(7, [(0, 1), (1, 2), (4, 5), (5, 6), (6, 4)]);
    let palm = PalmTree::build(&g);
    assert_eq!(palm.roots, vec![0, 3, 4]);
    for &r in &palm.roots {
        assert_eq!(palm.height[r], 0);
        assert_eq!(palm.parent_arc[r], None);
    }
}

#[test]
fn tree_path_up_stops_at_height() {
    let g = path(6);
    let palm = PalmTree::build(&g);
    // Arc i is the tree arc i→i+1.
    assert_eq!(palm.tree_path_up(5, 2), vec![4, 3, 2]);
    assert!(palm.tree_path_up(3, 3).is_empty());
}

#[test]
fn nesting_order_is_stable() {
    let g = wheel(6);
    let palm = PalmTree::build(&g);
    for (v, arcs) in palm.ordered.iter().enumerate() {
        let mut expected = palm.discovered[v].clone();
        expected.sort_by_key(|&e| palm.nesting_depth[e]);
        assert_eq!(arcs, &expected);
    }
}

#[test]
fn kuratowski_graphs_conflict() {
    for g in [complete(5), complete_bipartite(3, 3), petersen()] {
        let palm = PalmTree::build(&g);
        match ConstraintStack::new(&palm).run() {
            Outcome::Conflict(w) => {
                assert!(w.arc < palm.arc_count());
                let parent = w.parent_arc.unwrap();
                assert!(palm.is_tree_arc(parent));
                assert!(w.pair.arcs().count() > 0);
                // Interval ends are always return arcs.
                assert!(w.pair.arcs().all(|a| !palm.is_tree_arc(a)));
            }
            Outcome::Consistent(_) => panic!("non-planar graph passed"),
        }
    }
}

#[test]
fn decision_on_named_graphs() {
    assert!(is_planar_graph(&complete(4)));
    assert!(!is_planar_graph(&complete(5)));
    assert!(!is_planar_graph(&complete_bipartite(3, 3)));
    assert!(is_planar_graph(&complete_bipartite(2, 7)));
    assert!(!is_planar_graph(&petersen()));
    assert!(is_planar_graph(&grid(5, 6)));
    assert!(is_planar_graph(&Graph::new(0)));
    assert!(is_planar_graph(&Graph::new(3)));
}

#[test]
fn edge_bound_precheck() {
    assert!(!exceeds_edge_bound(2, 1));
    assert!(!exceeds_edge_bound(4, 6));
    assert!(exceeds_edge_bound(5, 10));
    assert!(exceeds_edge_bound(6, 13));
}

#[test]
fn disjoint_non_planar_part_is_caught() {
    let mut g = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    let k33 = complete_bipartite(3, 3);
    for &(u, v) in k33.edges() {
        g.add_edge(VertexId(u.0 + 3), VertexId(v.0 + 3));
    }
    assert!(!is_planar_graph(&g));
}

#[test]
fn sides_are_signs() {
    let g = stacked_triangulation(25, ReplayToken::new(3, 0));
    let palm = PalmTree::build(&g);
    let Outcome::Consistent(sides) = ConstraintStack::new(&palm).run() else {
        panic!("triangulation rejected");
    };
    for e in 0..palm.arc_count() {
        assert!(sides.side(e) == 1 || sides.side(e) == -1);
        assert_eq!(sides.is_left(e), sides.side(e) == -1);
    }
}

#[test]
fn assembled_embeddings_are_planar() {
    let mut graphs = vec![
        cycle(5),
        path(4),
        wheel(8),
        grid(4, 5),
        complete(4),
        complete_bipartite(2, 5),
    ];
    for seed in 0..5 {
        graphs.push(stacked_triangulation(40, ReplayToken::new(seed, 0)));
    }
    for g in &graphs {
        let emb = embed(g);
        emb.check_planar().unwrap();
        assert_eq!(emb.edges(), sorted_edges(g));
        assert_eq!(emb.vertex_count(), g.vertex_count());
    }
}

#[test]
fn triangle_has_two_faces() {
    let emb = embed(&cycle(3));
    let faces = emb.faces().unwrap();
    assert_eq!(faces.len(), 2);
    assert!(faces.iter().all(|f| f.len() == 3));
}

#[test]
fn maximal_planar_faces_are_triangles() {
    let g = stacked_triangulation(30, ReplayToken::new(11, 4));
    let emb = embed(&g);
    let faces = emb.faces().unwrap();
    assert_eq!(faces.len(), 2 * 30 - 4);
    assert!(faces.iter().all(|f| f.len() == 3));
}

#[test]
fn deep_path_does_not_overflow() {
    let g = path(100_000);
    let palm = PalmTree::build(&g);
    assert_eq!(palm.height[99_999], 99_999);
    let emb = embed(&g);
    assert_eq!(emb.edge_count(), 99_999);
}

#[test]
fn long_cycle_embeds() {
    let g = cycle(50_000);
    let emb = embed(&g);
    emb.check_planar().unwrap();
    assert_eq!(emb.faces().unwrap().len(), 2);
}
