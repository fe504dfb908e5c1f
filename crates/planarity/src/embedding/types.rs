//! Records and errors for the half-edge embedding.

use thiserror::Error;

use crate::graph::VertexId;

/// Arena index of a half-edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Angular direction around a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Cw,
    Ccw,
}

/// Directed half-edge `source → target` with its rotation links at `source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub source: VertexId,
    pub target: VertexId,
    pub cw: HalfEdgeId,
    pub ccw: HalfEdgeId,
}

/// Misuse of the embedding API, or an inconsistent embedding.
///
/// Always a caller contract violation; non-planarity is never reported here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("vertex {vertex} is not part of the embedding")]
    UnknownVertex { vertex: VertexId },

    #[error("self-loop at {vertex} cannot be embedded")]
    SelfLoop { vertex: VertexId },

    #[error("half-edge {from}→{to} already exists")]
    DuplicateHalfEdge { from: VertexId, to: VertexId },

    #[error("{reference} is not a neighbour of {vertex}")]
    InvalidReference {
        vertex: VertexId,
        reference: VertexId,
    },

    #[error("{vertex} already has neighbours; a reference neighbour is required")]
    MissingReference { vertex: VertexId },

    #[error("{u} and {v} are already in the same component")]
    AlreadyConnected { u: VertexId, v: VertexId },

    #[error("{vertex} already carries a rotation and cannot receive a spliced one")]
    VertexOccupied { vertex: VertexId },

    #[error("vertex map covers {got} vertices, embedding has {expected}")]
    VertexMapMismatch { expected: usize, got: usize },

    #[error("half-edge {from}→{to} has no twin")]
    MissingTwin { from: VertexId, to: VertexId },

    #[error("cw/ccw links of {vertex}→{neighbor} are not mutually inverse")]
    BrokenRotation { vertex: VertexId, neighbor: VertexId },

    #[error("rotation at {vertex} reaches {reached} of {degree} half-edges")]
    FragmentedRotation {
        vertex: VertexId,
        reached: usize,
        degree: usize,
    },

    #[error(
        "component of {root} violates Euler's formula: V={vertices} E={edges} F={faces}"
    )]
    EulerViolation {
        root: VertexId,
        vertices: usize,
        edges: usize,
        faces: usize,
    },
}
