//! Property-based tests for the planarity pipeline.
//!
//! Every verdict is certified independently of the LR test:
//! - planar: the embedding passes `check_planar` and embeds exactly the input edges
//! - non-planar: the certificate classifies as a K5 / K3,3 subdivision of the input
//!
//! Together these make the test sound and complete on every sampled graph.

use planarity::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Small graphs given as raw pairs; loops and repeats are normalized away.
fn small_graph() -> impl Strategy<Value = Graph> {
    (1usize..=9).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..=(n * 3))
            .prop_map(move |pairs| Graph::from_edges(n, pairs))
    })
}

/// Seeded G(n, m) graphs around the planarity threshold.
fn random_graph() -> impl Strategy<Value = Graph> {
    (5usize..40, any::<u64>()).prop_flat_map(|(n, seed)| {
        (n..=(3 * n)).prop_map(move |m| gnm(n, m, ReplayToken::new(seed, m as u64)))
    })
}

fn sorted_edges(g: &Graph) -> Vec<(VertexId, VertexId)> {
    let mut e = g.edges().to_vec();
    e.sort_unstable();
    e
}

/// Check one result against `g`; returns a reason on failure.
fn certify(g: &Graph, res: &PlanarityResult) -> Result<(), String> {
    match res {
        PlanarityResult::Planar { embedding } => {
            embedding.check_planar().map_err(|e| e.to_string())?;
            if embedding.edges() != sorted_edges(g) {
                return Err("embedding edge set differs from input".into());
            }
            if embedding.vertex_count() != g.vertex_count() {
                return Err("embedding vertex count differs from input".into());
            }
            Ok(())
        }
        PlanarityResult::NonPlanar { certificate: None } => Err("certificate missing".into()),
        PlanarityResult::NonPlanar {
            certificate: Some(cert),
        } => {
            if !cert.is_subgraph_of(g) {
                return Err("certificate edge not in input".into());
            }
            match KuratowskiSubdivision::classify(&cert.edges) {
                Some(sub) if sub.kind == cert.kind => Ok(()),
                _ => Err(format!("certificate does not classify as {}", cert.kind)),
            }
        }
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every verdict on small graphs comes with a valid witness.
    #[test]
    fn prop_small_graphs_are_certified(g in small_graph()) {
        let res = test_planarity(&g, true);
        prop_assert!(certify(&g, &res).is_ok(), "{:?}", certify(&g, &res).err());
        prop_assert_eq!(res.is_planar(), is_planar(&g));
    }

    /// Property: verdicts near the 3n − 6 threshold are certified.
    #[test]
    fn prop_random_graphs_are_certified(g in random_graph()) {
        let res = test_planarity(&g, true);
        prop_assert!(certify(&g, &res).is_ok(), "{:?}", certify(&g, &res).err());
    }

    /// Property: maximal planar graphs are accepted and fully triangulated.
    #[test]
    fn prop_stacked_triangulations_are_planar(n in 3usize..80, seed in any::<u64>()) {
        let g = stacked_triangulation(n, ReplayToken::new(seed, 0));
        let res = test_planarity(&g, false);
        let emb = res.embedding();
        prop_assert!(emb.is_some());
        let faces = emb.map(|e| e.faces().map(|f| f.len()).unwrap_or(0)).unwrap_or(0);
        prop_assert_eq!(faces, 2 * n - 4);
    }

    /// Property: one extra edge on a triangulation breaks planarity.
    #[test]
    fn prop_edge_bound_is_respected(n in 5usize..40, seed in any::<u64>()) {
        let mut g = stacked_triangulation(n, ReplayToken::new(seed, 0));
        let missing = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (VertexId(u), VertexId(v))))
            .find(|&(u, v)| !g.has_edge(u, v));
        if let Some((u, v)) = missing {
            g.add_edge(u, v);
            let res = test_planarity(&g, true);
            prop_assert!(!res.is_planar());
            prop_assert!(certify(&g, &res).is_ok());
        }
    }

    /// Property: V − E + F = 1 + C for every planar result.
    #[test]
    fn prop_euler_over_components(g in small_graph()) {
        if let Some(emb) = test_planarity(&g, false).embedding() {
            let c = g.components().len() as i64;
            let f = emb.face_count().map(|f| f as i64).unwrap_or(-1);
            let (v, e) = (g.vertex_count() as i64, g.edge_count() as i64);
            prop_assert_eq!(v - e + f, 1 + c);
        }
    }

    /// Property: repeated runs agree bit for bit, sequential or parallel.
    #[test]
    fn prop_deterministic(g in random_graph()) {
        let cfg = PlanarityCfg { want_certificate: true, parallel: false };
        let a = test_planarity_with(&g, cfg);
        let b = test_planarity_with(&g, cfg);
        let c = test_planarity_with(&g, PlanarityCfg { parallel: true, ..cfg });
        for other in [&b, &c] {
            prop_assert_eq!(a.certificate(), other.certificate());
            prop_assert_eq!(
                a.embedding().map(PlanarEmbedding::rotation_system),
                other.embedding().map(PlanarEmbedding::rotation_system)
            );
        }
    }
}

#[test]
fn named_families() {
    for (g, planar) in [
        (families::complete(4), true),
        (families::complete(5), false),
        (families::complete_bipartite(3, 3), false),
        (families::complete_bipartite(2, 9), true),
        (families::petersen(), false),
        (families::grid(7, 9), true),
        (families::wheel(12), true),
        (families::cycle(1), true),
        (families::path(0), true),
    ] {
        let res = test_planarity(&g, true);
        assert_eq!(res.is_planar(), planar);
        certify(&g, &res).unwrap();
    }
}
