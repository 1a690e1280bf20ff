#![forbid(unsafe_code)]

//! [`ActiveGroup`]: one mounted group and its update cycle.
//!
//! The host drives three phases per update, in order:
//!
//! 1. [`ActiveGroup::set_props`]: store props and reconcile (may populate).
//! 2. [`ActiveGroup::render`]: project a freshly built roster.
//! 3. [`ActiveGroup::did_update`]: sync the external active signal.
//!
//! [`ActiveGroup::update`] runs all three, re-rendering when the sync pass
//! changed the selection. Clicks arrive between updates through
//! [`ActiveGroup::click`].
//!
//! # Example
//!
//! ```
//! use active_group::{ActiveGroup, Element, GroupProps, NullSink};
//!
//! let tabs: Vec<Element> = ["home", "about", "blog"]
//!     .iter()
//!     .map(|label| Element::new("Tab").prop("label", *label))
//!     .collect();
//!
//! let mut group = ActiveGroup::mount_with_sink(
//!     GroupProps::new(tabs).no_nesting(true).default_active(1),
//!     NullSink,
//! );
//! assert_eq!(group.render().active_flags(), vec![false, true, false]);
//!
//! group.click(0);
//! assert_eq!(group.render().active_flags(), vec![true, false, false]);
//! ```

use crate::click::{ClickOutcome, deactivate_group, on_child_click};
use crate::diagnostic::{DiagnosticSink, NullSink, TracingSink};
use crate::props::GroupProps;
use crate::reconcile::{Reconciliation, reconcile};
use crate::render::{GroupNode, Passthrough, render_roster};
use crate::roster::{ChildDescriptor, build_component_map};
use crate::state::GroupState;
use crate::sync::{SyncOutcome, sync_external_active};

/// A mounted group: props, persisted selection state and a diagnostic sink.
#[derive(Debug)]
pub struct ActiveGroup<S: DiagnosticSink = TracingSink> {
    props: GroupProps,
    state: GroupState,
    sink: S,
}

impl ActiveGroup<TracingSink> {
    /// Mount with diagnostics logged through `tracing`.
    #[must_use]
    pub fn mount(props: GroupProps) -> Self {
        Self::mount_with_sink(props, TracingSink)
    }
}

impl<S: DiagnosticSink> ActiveGroup<S> {
    /// Mount with a caller-supplied sink. Runs the first reconciliation.
    #[must_use]
    pub fn mount_with_sink(props: GroupProps, sink: S) -> Self {
        let mut group = Self {
            props,
            state: GroupState::new(),
            sink,
        };
        reconcile(&mut group.state, &group.props, &mut group.sink);
        group
    }

    #[inline]
    pub fn props(&self) -> &GroupProps {
        &self.props
    }

    #[inline]
    pub fn state(&self) -> &GroupState {
        &self.state
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unmount, handing back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    pub fn active_id(&self) -> Option<usize> {
        self.state.active_id()
    }

    /// Store new props and reconcile them against the persisted state.
    pub fn set_props(&mut self, props: GroupProps) -> Reconciliation {
        self.props = props;
        reconcile(&mut self.state, &self.props, &mut self.sink)
    }

    /// Roster rebuilt from the current props.
    ///
    /// Diagnostics of the rebuild are dropped; population already reported them.
    #[must_use]
    pub fn fresh_roster(&self) -> Vec<ChildDescriptor> {
        match self.props.children.as_sequence() {
            Some(children) => build_component_map(children, self.props.nesting(), &mut NullSink),
            None => Vec::new(),
        }
    }

    /// Project the current state onto a fresh roster.
    #[must_use]
    pub fn render(&self) -> GroupNode {
        let roster = self.fresh_roster();
        let extra = Passthrough {
            component_styles: self.props.custom_component_styles.as_deref(),
        };
        GroupNode {
            custom_styles: self.props.custom_styles.clone(),
            items: render_roster(&roster, self.state.active_id(), extra),
        }
    }

    /// Post-render hook: follow a change in the external active signal.
    pub fn did_update(&mut self) -> SyncOutcome {
        sync_external_active(&mut self.state, self.props.default_active, &mut self.sink)
    }

    /// Full update cycle for new props. Returns the settled output.
    pub fn update(&mut self, props: GroupProps) -> GroupNode {
        self.set_props(props);
        let rendered = self.render();
        if self.did_update().changed_state() {
            return self.render();
        }
        rendered
    }

    /// Forward a click on the item with `id`. `None` if no such item renders.
    pub fn click(&mut self, id: usize) -> Option<ClickOutcome> {
        let descriptor = self.fresh_roster().into_iter().nth(id)?;
        Some(self.on_child_click(&descriptor))
    }

    /// Forward a click on a specific descriptor.
    pub fn on_child_click(&mut self, descriptor: &ChildDescriptor) -> ClickOutcome {
        on_child_click(&mut self.state, descriptor)
    }

    /// Clear the selection, e.g. on a click outside the group.
    pub fn deactivate(&mut self) -> Option<usize> {
        deactivate_group(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;
    use crate::element::Element;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tabs(n: usize) -> Vec<Element> {
        (0..n)
            .map(|i| Element::new("Tab").prop("label", format!("t{i}")))
            .collect()
    }

    fn mount(props: GroupProps) -> ActiveGroup<Vec<Diagnostic>> {
        ActiveGroup::mount_with_sink(props, Vec::new())
    }

    #[test]
    fn mount_populates_and_renders() {
        let group = mount(GroupProps::new(tabs(3)).no_nesting(true).default_active(2));
        assert_eq!(group.active_id(), Some(2));
        assert_eq!(group.render().active_flags(), vec![false, false, true]);
        assert!(group.sink().is_empty());
    }

    #[test]
    fn missing_children_renders_nothing() {
        let group = mount(GroupProps::default());
        assert!(group.render().is_empty());
        assert_eq!(group.sink(), &vec![Diagnostic::MissingChildren]);
    }

    #[test]
    fn single_child_renders_nothing() {
        let group = mount(GroupProps::new(Element::new("Tab")));
        assert!(group.render().is_empty());
        assert_eq!(group.into_sink(), vec![Diagnostic::SingularChild]);
    }

    #[test]
    fn click_unknown_id_is_none() {
        let mut group = mount(GroupProps::new(tabs(2)).no_nesting(true));
        assert_eq!(group.click(9), None);
        assert_eq!(group.active_id(), Some(0));
    }

    #[test]
    fn click_uses_fresh_element_references() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let first = GroupProps::new(tabs(2)).no_nesting(true);
        let mut group = mount(first);

        // Same shape, new handler on entry 1.
        let h = Rc::clone(&hits);
        let mut children = tabs(2);
        children[1] = children[1]
            .clone()
            .on_click(move |el: &Element| h.borrow_mut().push(el.kind().to_string()));
        group.update(GroupProps::new(children).no_nesting(true));

        group.click(1);
        assert_eq!(*hits.borrow(), vec!["Tab".to_string()]);
    }

    #[test]
    fn update_rerenders_after_external_change() {
        let mut group = mount(GroupProps::new(tabs(3)).no_nesting(true).default_active(0));
        let out = group.update(GroupProps::new(tabs(3)).no_nesting(true).default_active(2));
        assert_eq!(out.active_flags(), vec![false, false, true]);
    }

    #[test]
    fn deactivate_clears_render() {
        let mut group = mount(GroupProps::new(tabs(3)).no_nesting(true));
        assert_eq!(group.deactivate(), Some(0));
        assert_eq!(group.render().active_item(), None);
        assert_eq!(group.deactivate(), None);
    }

    #[test]
    fn passthrough_styles_reach_output() {
        let group = mount(
            GroupProps::new(tabs(2))
                .no_nesting(true)
                .custom_styles("row")
                .custom_component_styles("cell"),
        );
        let out = group.render();
        assert_eq!(out.custom_styles.as_deref(), Some("row"));
        assert!(
            out.items
                .iter()
                .all(|i| i.component_styles.as_deref() == Some("cell"))
        );
    }

    #[test]
    fn render_does_not_repeat_nesting_warnings() {
        let group = mount(GroupProps::new(tabs(2)));
        let warned = group.sink().len();
        let _ = group.render();
        let _ = group.render();
        assert_eq!(group.sink().len(), warned);
        assert_eq!(warned, 2);
    }

    #[test]
    fn sink_mut_allows_draining() {
        let mut group = mount(GroupProps::default());
        let drained: Vec<Diagnostic> = group.sink_mut().drain(..).collect();
        assert_eq!(drained.len(), 1);
        assert!(group.sink().is_empty());
    }

    #[test]
    fn absent_external_index_keeps_defaulted_selection_after_sync() {
        let mut group = mount(GroupProps::new(tabs(2)).no_nesting(true));
        assert_eq!(group.active_id(), Some(0));
        assert_eq!(group.state().last_observed_external(), None);

        assert_eq!(group.did_update(), SyncOutcome::Unchanged);
        assert_eq!(group.active_id(), Some(0));
        assert_eq!(group.render().active_item(), Some(0));
    }
}
