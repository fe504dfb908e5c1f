//! Intervals and conflict pairs over return arcs.

/// Contiguous run of return arcs that must share a side.
///
/// `high` is the arc returning highest (nearest the current vertex), `low` the
/// one returning lowest; arcs in between are chained through `ref` links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    pub low: Option<usize>,
    pub high: Option<usize>,
}

impl Interval {
    #[inline]
    pub fn new(low: usize, high: usize) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// True if this interval returns strictly above the lowpoint of arc `b`.
    #[inline]
    pub fn conflicting(&self, b: usize, lowpt: &[usize]) -> bool {
        self.high.is_some_and(|h| lowpt[h] > lowpt[b])
    }
}

/// Two intervals that must end up on opposite sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConflictPair {
    pub left: Interval,
    pub right: Interval,
}

impl ConflictPair {
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Lowest lowpoint over both intervals (`None` for an empty pair).
    pub fn lowest(&self, lowpt: &[usize]) -> Option<usize> {
        let l = self.left.low.map(|e| lowpt[e]);
        let r = self.right.low.map(|e| lowpt[e]);
        match (l, r) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Every arc id named by the pair's interval ends.
    pub fn arcs(&self) -> impl Iterator<Item = usize> {
        [self.left.low, self.left.high, self.right.low, self.right.high]
            .into_iter()
            .flatten()
    }
}

/// Why a component failed the LR test.
///
/// `arc` was being merged into the constraints of `parent_arc`'s subtree when
/// `pair` could not be placed on either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictWitness {
    pub arc: usize,
    pub parent_arc: Option<usize>,
    pub pair: ConflictPair,
}
