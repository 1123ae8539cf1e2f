//! Per-site recipe ledger
//!
//! Accepted records for one site, in insertion order. A record enters the
//! ledger only if no existing entry is judged similar; entries are never
//! removed or mutated afterwards.

use crate::extract::RecipeRecord;

/// The accepted, deduplicated recipes for one site
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<RecipeRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds an existing entry similar to the candidate
    ///
    /// Two records are similar if their source URLs are equal, or if name,
    /// instruction list, and ingredient list are all pairwise equal. This
    /// is an exact-match heuristic: near-duplicate recipes reachable under
    /// different URLs with trivial text differences are not caught.
    pub fn find_similar(&self, candidate: &RecipeRecord) -> Option<usize> {
        self.records.iter().position(|existing| {
            existing.url == candidate.url
                || (existing.name == candidate.name
                    && existing.instructions == candidate.instructions
                    && existing.ingredients == candidate.ingredients)
        })
    }

    /// Appends a record; the caller has already run the similarity check
    pub fn push(&mut self, record: RecipeRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
