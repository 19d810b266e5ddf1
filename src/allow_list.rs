//! Allow-list registry
//!
//! The fixed, ordered set of catalog ids this proxy is permitted to serve.
//! Built once at startup and shared read-only.

use std::collections::HashSet;

/// Ids served by the standard deployment, in display order.
pub const STANDARD_IDS: [u32; 10] = [1, 4, 7, 25, 39, 52, 54, 94, 95, 143];

#[derive(Debug, Clone)]
pub struct AllowList {
    ordered: Vec<u32>,
    members: HashSet<u32>,
}

impl AllowList {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        let ordered: Vec<u32> = ids.into_iter().collect();
        let members = ordered.iter().copied().collect();
        Self { ordered, members }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_IDS)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.members.contains(&id)
    }

    /// The first `n` ids, or all of them when `n` exceeds the list.
    pub fn first(&self, n: usize) -> &[u32] {
        &self.ordered[..n.min(self.ordered.len())]
    }

    /// Clamp `n` into `[0, len]` and take that many ids. Out-of-range
    /// amounts are never an error.
    pub fn select_amount(&self, n: i64) -> &[u32] {
        let clamped = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
        self.first(clamped)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::standard()
    }
}
