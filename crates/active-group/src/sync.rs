#![forbid(unsafe_code)]

//! Post-render sync of the external active signal.
//!
//! The external value overrides the selection only when it *changes*. The
//! comparison baseline is the previously observed external value, never the
//! current `active_id`, so a click-driven selection survives re-renders that
//! carry the same external value.

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::state::GroupState;

/// Result of a sync pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    /// The external value changed and replaced the selection.
    Overridden {
        previous: Option<usize>,
        active_id: Option<usize>,
    },
}

impl SyncOutcome {
    #[inline]
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Overridden { .. })
    }
}

/// Run one sync pass against the current external value.
pub fn sync_external_active(
    state: &mut GroupState,
    external: Option<usize>,
    sink: &mut dyn DiagnosticSink,
) -> SyncOutcome {
    if external == state.last_observed_external {
        return SyncOutcome::Unchanged;
    }

    if let Some(index) = external {
        if state.is_populated() && index >= state.roster.len() {
            sink.emit(Diagnostic::ActiveOutOfRange {
                index,
                len: state.roster.len(),
            });
        }
    }

    let previous = state.active_id;
    state.last_observed_external = external;
    state.active_id = external;
    tracing::debug!(
        target: "active_group",
        ?previous,
        active_id = ?external,
        "external active changed"
    );

    SyncOutcome::Overridden {
        previous,
        active_id: external,
    }
}
