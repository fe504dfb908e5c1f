//! Named graph families used as fixtures, benches, and CLI inputs.

use super::{Graph, VertexId};

/// Complete graph K_n.
pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(VertexId(u), VertexId(v));
        }
    }
    g
}

/// Complete bipartite graph K_{a,b}; parts are `0..a` and `a..a+b`.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new(a + b);
    for u in 0..a {
        for v in a..(a + b) {
            g.add_edge(VertexId(u), VertexId(v));
        }
    }
    g
}

/// Path P_n on `n` vertices.
pub fn path(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|v| (v - 1, v)))
}

/// Cycle C_n. For `n < 3` this degenerates to a path.
pub fn cycle(n: usize) -> Graph {
    let mut g = path(n);
    if n >= 3 {
        g.add_edge(VertexId(n - 1), VertexId(0));
    }
    g
}

/// `rows × cols` grid, vertex `(r, c)` at index `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut g = Graph::new(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                g.add_edge(VertexId(v), VertexId(v + 1));
            }
            if r + 1 < rows {
                g.add_edge(VertexId(v), VertexId(v + cols));
            }
        }
    }
    g
}

/// Wheel with hub `0` and a rim cycle on `1..=n`.
pub fn wheel(n: usize) -> Graph {
    let mut g = Graph::new(n + 1);
    for i in 1..=n {
        g.add_edge(VertexId(0), VertexId(i));
        let next = if i == n { 1 } else { i + 1 };
        g.add_edge(VertexId(i), VertexId(next));
    }
    g
}

/// Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `i–i+5`.
pub fn petersen() -> Graph {
    let mut g = Graph::new(10);
    for i in 0..5 {
        g.add_edge(VertexId(i), VertexId((i + 1) % 5));
        g.add_edge(VertexId(5 + i), VertexId(5 + (i + 2) % 5));
        g.add_edge(VertexId(i), VertexId(i + 5));
    }
    g
}
