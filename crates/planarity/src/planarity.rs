//! Orchestrator: split into components, test each, splice or certify.
//!
//! Purpose
//! - One entry point (`test_planarity`) that returns either a full embedding of
//!   the input or, on request, a Kuratowski certificate from the first
//!   non-planar component.
//!
//! Why this design
//! - Components share nothing, so each one runs the whole LR pipeline on its
//!   own relabelled subgraph; with `parallel` they run on the rayon pool.
//! - Results are consumed in component order (smallest vertex first), so the
//!   reported component and certificate do not depend on scheduling.
//! - Component embeddings are spliced with `absorb`, which copies rotations and
//!   adds no edges: the result embeds exactly the input's edge set.

use rayon::prelude::*;

use crate::embedding::PlanarEmbedding;
use crate::graph::{Graph, VertexId};
use crate::kuratowski::{self, Certificate};
use crate::lr::{self, ConflictWitness, ConstraintStack, Outcome, PalmTree};

/// Knobs for `test_planarity_with`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanarityCfg {
    /// Extract a Kuratowski certificate when the graph is non-planar.
    pub want_certificate: bool,
    /// Test components on the rayon pool.
    pub parallel: bool,
}

/// Outcome of a planarity test. Non-planarity is a normal result, not an error.
#[derive(Clone, Debug)]
pub enum PlanarityResult {
    Planar { embedding: PlanarEmbedding },
    /// `certificate` is `Some` exactly when one was requested.
    NonPlanar { certificate: Option<Certificate> },
}

impl PlanarityResult {
    #[inline]
    pub fn is_planar(&self) -> bool {
        matches!(self, PlanarityResult::Planar { .. })
    }

    pub fn embedding(&self) -> Option<&PlanarEmbedding> {
        match self {
            PlanarityResult::Planar { embedding } => Some(embedding),
            PlanarityResult::NonPlanar { .. } => None,
        }
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            PlanarityResult::Planar { .. } => None,
            PlanarityResult::NonPlanar { certificate } => certificate.as_ref(),
        }
    }
}

/// Test `g`; with `want_certificate`, non-planar results carry a K5 / K3,3 subdivision.
pub fn test_planarity(g: &Graph, want_certificate: bool) -> PlanarityResult {
    test_planarity_with(
        g,
        PlanarityCfg {
            want_certificate,
            ..PlanarityCfg::default()
        },
    )
}

/// Decision only: no embedding is assembled and no certificate extracted.
pub fn is_planar(g: &Graph) -> bool {
    lr::is_planar_graph(g)
}

/// Test `g` per connected component.
///
/// # Panics
/// If a component that passed the LR test cannot be assembled or spliced, or a
/// failing one yields no certificate. These are defects in the algorithm, never
/// properties of the input.
pub fn test_planarity_with(g: &Graph, cfg: PlanarityCfg) -> PlanarityResult {
    let (n, m) = (g.vertex_count(), g.edge_count());
    let comps: Vec<Vec<VertexId>> = g
        .components()
        .into_iter()
        .filter(|c| c.len() > 1)
        .collect();
    tracing::debug!(
        vertices = n,
        edges = m,
        components = comps.len(),
        parallel = cfg.parallel,
        "planarity test"
    );
    if !cfg.want_certificate && lr::exceeds_edge_bound(n, m) {
        tracing::debug!(bound = 3 * n - 6, "edge bound exceeded");
        return PlanarityResult::NonPlanar { certificate: None };
    }

    let test_one = |c: &Vec<VertexId>| {
        let (sub, map) = g.subgraph(c);
        let verdict = test_component(&sub);
        Tested { sub, map, verdict }
    };
    if cfg.parallel {
        let tested: Vec<Tested> = comps.par_iter().map(test_one).collect();
        merge(n, tested.into_iter(), cfg.want_certificate)
    } else {
        // Lazy: stops testing at the first conflict.
        merge(n, comps.iter().map(test_one), cfg.want_certificate)
    }
}

enum Verdict {
    Embedded(PlanarEmbedding),
    /// `None` when the edge bound rejected the component before any DFS.
    Conflict(Option<(PalmTree, ConflictWitness)>),
}

struct Tested {
    sub: Graph,
    map: Vec<VertexId>,
    verdict: Verdict,
}

fn test_component(sub: &Graph) -> Verdict {
    if lr::exceeds_edge_bound(sub.vertex_count(), sub.edge_count()) {
        return Verdict::Conflict(None);
    }
    let palm = PalmTree::build(sub);
    match ConstraintStack::new(&palm).run() {
        Outcome::Consistent(sides) => {
            let emb = lr::assemble(&palm, &sides)
                .unwrap_or_else(|err| panic!("assembling a consistent component failed: {err}"));
            Verdict::Embedded(emb)
        }
        Outcome::Conflict(w) => Verdict::Conflict(Some((palm, w))),
    }
}

fn merge(
    n: usize,
    tested: impl Iterator<Item = Tested>,
    want_certificate: bool,
) -> PlanarityResult {
    let mut embedding = PlanarEmbedding::new(n);
    for t in tested {
        match t.verdict {
            Verdict::Embedded(part) => embedding
                .absorb(&part, &t.map)
                .unwrap_or_else(|err| panic!("splicing component embedding failed: {err}")),
            Verdict::Conflict(guide) => {
                tracing::debug!(
                    root = %t.map[0],
                    vertices = t.sub.vertex_count(),
                    edges = t.sub.edge_count(),
                    witnessed = guide.is_some(),
                    "conflict"
                );
                let guide = guide.as_ref().map(|(palm, w)| (palm, w));
                let certificate = want_certificate
                    .then(|| kuratowski::extract(&t.sub, guide).relabel(&t.map));
                return PlanarityResult::NonPlanar { certificate };
            }
        }
    }
    PlanarityResult::Planar { embedding }
}
