#![forbid(unsafe_code)]

//! Pre-render reconciliation of props against persisted state.
//!
//! | Children input | Roster | Outcome |
//! |----------------|--------|---------|
//! | `Empty` | any | `MissingChildren` diagnostic, no change |
//! | `Single` | any | `SingularChild` diagnostic, no change |
//! | empty `Sequence` | any | no change (data still loading) |
//! | non-empty `Sequence` | populated | no change |
//! | non-empty `Sequence` | empty | populate |
//!
//! Populating never happens twice for the same state. Growing or shrinking the
//! children list afterwards leaves the roster as first captured.

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::element::ChildrenInput;
use crate::props::GroupProps;
use crate::roster::build_component_map;
use crate::state::GroupState;

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// No children input; diagnostic emitted.
    MissingChildren,
    /// Single element input; diagnostic emitted.
    SingularChild,
    /// Empty sequence; waiting for children.
    AwaitingChildren,
    /// Roster already captured; state untouched.
    AlreadyPopulated,
    /// Roster captured from this pass's children.
    Populated { len: usize, active_id: usize },
}

impl Reconciliation {
    #[inline]
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Populated { .. })
    }
}

/// Run one reconciliation pass.
pub fn reconcile(
    state: &mut GroupState,
    props: &GroupProps,
    sink: &mut dyn DiagnosticSink,
) -> Reconciliation {
    let children = match &props.children {
        ChildrenInput::Empty => {
            sink.emit(Diagnostic::MissingChildren);
            return Reconciliation::MissingChildren;
        }
        ChildrenInput::Single(_) => {
            sink.emit(Diagnostic::SingularChild);
            return Reconciliation::SingularChild;
        }
        ChildrenInput::Sequence(children) => children,
    };

    if children.is_empty() {
        return Reconciliation::AwaitingChildren;
    }
    if state.is_populated() {
        return Reconciliation::AlreadyPopulated;
    }

    let roster = build_component_map(children, props.nesting(), sink);
    let active_id = props.default_active.unwrap_or(0);
    if active_id >= roster.len() {
        sink.emit(Diagnostic::ActiveOutOfRange {
            index: active_id,
            len: roster.len(),
        });
    }

    tracing::debug!(
        target: "active_group",
        len = roster.len(),
        active_id,
        external = ?props.default_active,
        "roster populated"
    );

    let len = roster.len();
    state.roster = roster;
    state.active_id = Some(active_id);
    // Raw external value, not the defaulted index.
    state.last_observed_external = props.default_active;

    Reconciliation::Populated { len, active_id }
}
