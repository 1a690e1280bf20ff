#![forbid(unsafe_code)]

//! Click handling.
//!
//! A click on an inactive entry runs the entry's callback with its primary
//! component, then makes the entry active. A click on the active entry does
//! nothing at all.

use crate::roster::ChildDescriptor;
use crate::state::GroupState;

/// Result of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The entry was already active.
    AlreadyActive,
    /// The entry became active.
    Activated {
        previous: Option<usize>,
        callback_invoked: bool,
    },
}

/// Handle a click on `descriptor`.
pub fn on_child_click(state: &mut GroupState, descriptor: &ChildDescriptor) -> ClickOutcome {
    if state.active_id == Some(descriptor.id) {
        return ClickOutcome::AlreadyActive;
    }

    let callback_invoked = match &descriptor.on_click {
        Some(callback) => {
            callback(&descriptor.component);
            true
        }
        None => false,
    };

    let previous = state.active_id.replace(descriptor.id);
    tracing::debug!(
        target: "active_group",
        id = descriptor.id,
        ?previous,
        callback_invoked,
        "child activated"
    );

    ClickOutcome::Activated {
        previous,
        callback_invoked,
    }
}

/// Clear the selection. Returns the previously active id.
pub fn deactivate_group(state: &mut GroupState) -> Option<usize> {
    let previous = state.active_id.take();
    tracing::debug!(target: "active_group", ?previous, "group deactivated");
    previous
}
