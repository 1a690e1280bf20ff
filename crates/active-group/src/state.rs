#![forbid(unsafe_code)]

//! Persisted per-group selection state.
//!
//! # Invariants
//!
//! 1. The roster is populated at most once per state instance, from the first
//!    non-empty children sequence the reconciler observes.
//! 2. `active_id` is `None` or an index chosen at population time, by a click,
//!    or by an external override. It is not re-validated afterwards.
//! 3. `last_observed_external` tracks the external signal, not `active_id`, so
//!    a click may diverge from the external value until that value changes.

use crate::roster::ChildDescriptor;

/// Selection state owned by one mounted group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupState {
    pub(crate) roster: Vec<ChildDescriptor>,
    pub(crate) active_id: Option<usize>,
    pub(crate) last_observed_external: Option<usize>,
}

impl GroupState {
    /// Fresh, unpopulated state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptors captured at population time.
    #[inline]
    pub fn roster(&self) -> &[ChildDescriptor] {
        &self.roster
    }

    #[inline]
    pub fn active_id(&self) -> Option<usize> {
        self.active_id
    }

    /// The external active value seen by the most recent sync or population.
    #[inline]
    pub fn last_observed_external(&self) -> Option<usize> {
        self.last_observed_external
    }

    #[inline]
    pub fn is_populated(&self) -> bool {
        !self.roster.is_empty()
    }

    /// Whether the entry with `id` renders active.
    #[inline]
    pub fn is_active(&self, id: usize) -> bool {
        self.active_id == Some(id)
    }
}
