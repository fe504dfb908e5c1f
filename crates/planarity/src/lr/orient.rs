//! DFS orientation (palm tree) with lowpoints and nesting depths.

use crate::graph::Graph;

const UNSEEN: usize = usize::MAX;

/// DFS record table for one graph.
///
/// Arc `e` is edge `e` of the input graph, oriented away from the vertex that
/// first scanned it. Lowpoints live on arcs: for an arc `u→v` they are the two
/// smallest heights among `u` itself and the targets of return arcs leaving
/// the subtree entered by the arc.
#[derive(Clone, Debug)]
pub struct PalmTree {
    /// Oriented `(source, target)` per arc.
    pub arcs: Vec<(usize, usize)>,
    /// DFS depth per vertex; every root has height 0.
    pub height: Vec<usize>,
    /// Tree arc entering each vertex (`None` for roots).
    pub parent_arc: Vec<Option<usize>>,
    pub lowpt: Vec<usize>,
    pub lowpt2: Vec<usize>,
    /// Back arc that reaches `lowpt`; the arc itself when nothing returns
    /// below its source.
    pub lowpt_arc: Vec<usize>,
    /// `2·lowpt + [lowpt2 < height(source)]`; chordal arcs nest outside.
    pub nesting_depth: Vec<i64>,
    /// DFS roots, one per component, in discovery order.
    pub roots: Vec<usize>,
    /// Outgoing arcs per vertex in the order they were oriented.
    pub discovered: Vec<Vec<usize>>,
    /// Outgoing arcs per vertex sorted stably by nesting depth.
    pub ordered: Vec<Vec<usize>>,
}

impl PalmTree {
    /// Orient `g` by iterative DFS from each unvisited vertex in index order.
    pub fn build(g: &Graph) -> Self {
        let n = g.vertex_count();
        let m = g.edge_count();
        let ends: Vec<(usize, usize)> = g.edges().iter().map(|&(u, v)| (u.0, v.0)).collect();
        let mut incident = vec![Vec::new(); n];
        for (e, &(u, v)) in ends.iter().enumerate() {
            incident[u].push(e);
            incident[v].push(e);
        }

        let mut palm = PalmTree {
            arcs: vec![(UNSEEN, UNSEEN); m],
            height: vec![UNSEEN; n],
            parent_arc: vec![None; n],
            lowpt: vec![0; m],
            lowpt2: vec![0; m],
            lowpt_arc: (0..m).collect(),
            nesting_depth: vec![0; m],
            roots: Vec::new(),
            discovered: vec![Vec::new(); n],
            ordered: Vec::new(),
        };
        let mut oriented = vec![false; m];
        let mut cursor = vec![0usize; n];
        let mut stack: Vec<usize> = Vec::new();

        for root in 0..n {
            if palm.height[root] != UNSEEN {
                continue;
            }
            palm.height[root] = 0;
            palm.roots.push(root);
            stack.push(root);
            while let Some(&v) = stack.last() {
                let Some(&e) = incident[v].get(cursor[v]) else {
                    stack.pop();
                    if let Some(pe) = palm.parent_arc[v] {
                        palm.finish_arc(pe);
                    }
                    continue;
                };
                cursor[v] += 1;
                if oriented[e] {
                    continue;
                }
                oriented[e] = true;
                let (a, b) = ends[e];
                let w = if a == v { b } else { a };
                palm.arcs[e] = (v, w);
                palm.discovered[v].push(e);
                palm.lowpt[e] = palm.height[v];
                palm.lowpt2[e] = palm.height[v];
                if palm.height[w] == UNSEEN {
                    palm.parent_arc[w] = Some(e);
                    palm.height[w] = palm.height[v] + 1;
                    stack.push(w);
                } else {
                    palm.lowpt[e] = palm.height[w];
                    palm.finish_arc(e);
                }
            }
        }
        palm.ordered = palm.sorted_by_nesting();
        palm
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.height.len()
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn source(&self, e: usize) -> usize {
        self.arcs[e].0
    }

    #[inline]
    pub fn target(&self, e: usize) -> usize {
        self.arcs[e].1
    }

    /// True if `e` is the tree arc entering its target.
    #[inline]
    pub fn is_tree_arc(&self, e: usize) -> bool {
        self.parent_arc[self.target(e)] == Some(e)
    }

    /// True if the subtree (or back arc) behind `e` returns below its source.
    #[inline]
    pub fn has_return(&self, e: usize) -> bool {
        self.lowpt[e] < self.height[self.source(e)]
    }

    /// Re-sort `discovered` by the current nesting depths.
    pub fn sorted_by_nesting(&self) -> Vec<Vec<usize>> {
        self.discovered
            .iter()
            .map(|arcs| {
                let mut sorted = arcs.clone();
                sorted.sort_by_key(|&e| self.nesting_depth[e]);
                sorted
            })
            .collect()
    }

    /// Tree arcs from `v` up to (excluding) the vertex at height `stop`.
    pub fn tree_path_up(&self, mut v: usize, stop: usize) -> Vec<usize> {
        let mut path = Vec::new();
        while self.height[v] > stop {
            let Some(pe) = self.parent_arc[v] else {
                break;
            };
            path.push(pe);
            v = self.source(pe);
        }
        path
    }

    /// Fix the nesting depth of `e` and fold its lowpoints into the parent arc.
    fn finish_arc(&mut self, e: usize) {
        let v = self.source(e);
        let chordal = self.lowpt2[e] < self.height[v];
        self.nesting_depth[e] = 2 * self.lowpt[e] as i64 + i64::from(chordal);
        let Some(pe) = self.parent_arc[v] else {
            return;
        };
        if self.lowpt[e] < self.lowpt[pe] {
            self.lowpt2[pe] = self.lowpt[pe].min(self.lowpt2[e]);
            self.lowpt[pe] = self.lowpt[e];
            self.lowpt_arc[pe] = self.lowpt_arc[e];
        } else if self.lowpt[e] > self.lowpt[pe] {
            self.lowpt2[pe] = self.lowpt2[pe].min(self.lowpt[e]);
        } else {
            self.lowpt2[pe] = self.lowpt2[pe].min(self.lowpt2[e]);
        }
    }
}
