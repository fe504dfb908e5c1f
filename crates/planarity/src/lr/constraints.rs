//! Conflict-pair stack over return arcs (the LR partition test).
//!
//! Arcs are visited in nesting order by a second iterative DFS over the palm
//! tree. Every back arc opens a conflict pair; when a later sibling's returns
//! overlap earlier ones, their intervals are merged onto one side, and the
//! test fails as soon as both sides of a pair would have to go to the same
//! side. Sides are not flipped eagerly: each merge records a `reference` link
//! plus a relative sign, and `resolve_sides` multiplies along the chains once,
//! compressing them as it goes.

use super::orient::PalmTree;
use super::types::{ConflictPair, ConflictWitness, Interval};

/// Result of the constraint phase for one palm tree.
#[derive(Clone, Debug)]
pub enum Outcome {
    Consistent(Sides),
    Conflict(ConflictWitness),
}

/// Resolved side per arc: `+1` right of its parent arc, `−1` left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sides {
    side: Vec<i8>,
}

impl Sides {
    #[inline]
    pub fn side(&self, e: usize) -> i8 {
        self.side[e]
    }

    #[inline]
    pub fn is_left(&self, e: usize) -> bool {
        self.side[e] < 0
    }
}

/// Mutable state of the LR test over one palm tree.
pub struct ConstraintStack<'a> {
    palm: &'a PalmTree,
    stack: Vec<ConflictPair>,
    stack_bottom: Vec<usize>,
    lowpt_arc: Vec<Option<usize>>,
    reference: Vec<Option<usize>>,
    side: Vec<i8>,
    cursor: Vec<usize>,
}

impl<'a> ConstraintStack<'a> {
    pub fn new(palm: &'a PalmTree) -> Self {
        let m = palm.arc_count();
        Self {
            palm,
            stack: Vec::new(),
            stack_bottom: vec![0; m],
            lowpt_arc: vec![None; m],
            reference: vec![None; m],
            side: vec![1; m],
            cursor: vec![0; palm.vertex_count()],
        }
    }

    /// Test every DFS tree; stops at the first conflict.
    pub fn run(mut self) -> Outcome {
        let palm = self.palm;
        for &root in &palm.roots {
            if let Err(witness) = self.test_from(root) {
                return Outcome::Conflict(witness);
            }
        }
        Outcome::Consistent(self.resolve_sides())
    }

    fn test_from(&mut self, root: usize) -> Result<(), ConflictWitness> {
        let palm = self.palm;
        let mut dfs = vec![root];
        while let Some(&v) = dfs.last() {
            let Some(&ei) = palm.ordered[v].get(self.cursor[v]) else {
                dfs.pop();
                if let Some(e) = palm.parent_arc[v] {
                    self.remove_back_edges(e);
                    self.integrate(e)?;
                }
                continue;
            };
            self.cursor[v] += 1;
            self.stack_bottom[ei] = self.stack.len();
            if palm.is_tree_arc(ei) {
                dfs.push(palm.target(ei));
                continue;
            }
            self.lowpt_arc[ei] = Some(ei);
            self.stack.push(ConflictPair {
                left: Interval::default(),
                right: Interval::new(ei, ei),
            });
            self.integrate(ei)?;
        }
        Ok(())
    }

    /// Fold the return arcs behind `ei` into the constraints of its source.
    fn integrate(&mut self, ei: usize) -> Result<(), ConflictWitness> {
        let palm = self.palm;
        if !palm.has_return(ei) {
            return Ok(());
        }
        let v = palm.source(ei);
        let Some(e) = palm.parent_arc[v] else {
            return Ok(());
        };
        if palm.ordered[v].first() == Some(&ei) {
            self.lowpt_arc[e] = self.lowpt_arc[ei];
            Ok(())
        } else {
            self.add_constraints(ei, e)
        }
    }

    fn add_constraints(&mut self, ei: usize, e: usize) -> Result<(), ConflictWitness> {
        let palm = self.palm;
        let lowpt = &palm.lowpt;
        let conflict = |pair: ConflictPair| ConflictWitness {
            arc: ei,
            parent_arc: Some(e),
            pair,
        };
        let mut p = ConflictPair::default();

        // Returns of ei all go to one side (P.right).
        loop {
            let Some(mut q) = self.stack.pop() else {
                break;
            };
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return Err(conflict(q));
            }
            match q.right.low {
                Some(low) if lowpt[low] > lowpt[e] => {
                    if p.right.is_empty() {
                        p.right = q.right;
                    } else {
                        self.link(p.right.low, q.right.high);
                    }
                    p.right.low = q.right.low;
                }
                // Aligned with the lowest return of the parent arc.
                _ => self.link(q.right.low, self.lowpt_arc[e]),
            }
            if self.stack.len() <= self.stack_bottom[ei] {
                break;
            }
        }

        // Earlier siblings' returns above lowpt(ei) go to the other side (P.left).
        while let Some(top) = self.stack.last() {
            if !(top.left.conflicting(ei, lowpt) || top.right.conflicting(ei, lowpt)) {
                break;
            }
            let Some(mut q) = self.stack.pop() else {
                break;
            };
            if q.right.conflicting(ei, lowpt) {
                q.swap();
            }
            if q.right.conflicting(ei, lowpt) {
                return Err(conflict(q));
            }
            self.link(p.right.low, q.right.high);
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left = q.left;
            } else {
                self.link(p.left.low, q.left.high);
            }
            p.left.low = q.left.low;
        }

        if !(p.left.is_empty() && p.right.is_empty()) {
            self.stack.push(p);
        }
        Ok(())
    }

    /// Trim return arcs that end at the source of tree arc `e`.
    fn remove_back_edges(&mut self, e: usize) {
        let palm = self.palm;
        let lowpt = &palm.lowpt;
        let u = palm.source(e);
        let hu = palm.height[u];

        // Whole pairs returning exactly to u.
        while self
            .stack
            .last()
            .is_some_and(|top| top.lowest(lowpt) == Some(hu))
        {
            if let Some(p) = self.stack.pop() {
                if let Some(l) = p.left.low {
                    self.side[l] = -1;
                }
            }
        }

        // Then the ends of one more pair, highest first.
        if let Some(mut p) = self.stack.pop() {
            while let Some(h) = p.left.high.filter(|&h| palm.target(h) == u) {
                p.left.high = self.reference[h];
            }
            if p.left.high.is_none() {
                if let Some(l) = p.left.low.take() {
                    self.reference[l] = p.right.low;
                    self.side[l] = -1;
                }
            }
            while let Some(h) = p.right.high.filter(|&h| palm.target(h) == u) {
                p.right.high = self.reference[h];
            }
            if p.right.high.is_none() {
                if let Some(r) = p.right.low.take() {
                    self.reference[r] = p.left.low;
                    self.side[r] = -1;
                }
            }
            self.stack.push(p);
        }

        // e takes the side of its highest return arc.
        if palm.has_return(e) {
            if let Some(top) = self.stack.last() {
                self.reference[e] = match (top.left.high, top.right.high) {
                    (Some(l), Some(r)) if lowpt[l] > lowpt[r] => Some(l),
                    (Some(l), None) => Some(l),
                    (_, r) => r,
                };
            }
        }
    }

    #[inline]
    fn link(&mut self, from: Option<usize>, to: Option<usize>) {
        if let Some(f) = from {
            self.reference[f] = to;
        }
    }

    /// Multiply signs along `reference` chains, compressing each chain once.
    fn resolve_sides(mut self) -> Sides {
        let mut chain = Vec::new();
        for e in 0..self.side.len() {
            let mut cur = e;
            while let Some(r) = self.reference[cur] {
                chain.push(cur);
                cur = r;
            }
            let mut next = cur;
            while let Some(x) = chain.pop() {
                self.side[x] *= self.side[next];
                self.reference[x] = None;
                next = x;
            }
        }
        Sides { side: self.side }
    }
}
