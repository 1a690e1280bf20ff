#![forbid(unsafe_code)]

//! Roster construction: children in, ordered child descriptors out.
//!
//! [`build_component_map`] is pure with respect to its inputs. It is called
//! once to populate [`GroupState`](crate::state::GroupState) and again on every
//! render to pick up fresh element references; ids are positional, so both
//! builds agree on identity.
//!
//! # Invariants
//!
//! - `roster[i].id == i` for every descriptor.
//! - `parent.is_some()` only when nesting is on and the child wraps exactly one
//!   element; in that case `parent` is the child and `component` its nested
//!   element.
//! - The click callback always comes from the outer child.

use std::fmt;
use std::rc::Rc;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::element::{ClickHandler, Element};

/// Whether each child wraps the primary component it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nesting {
    /// Each child wraps exactly one primary component (e.g. a link around a tab).
    #[default]
    Nested,
    /// Children are the primary components themselves.
    Flat,
}

impl Nesting {
    /// Map the `no_nesting` prop onto a mode.
    #[must_use]
    pub const fn from_no_nesting(no_nesting: bool) -> Self {
        if no_nesting { Self::Flat } else { Self::Nested }
    }
}

/// One managed child.
#[derive(Clone)]
pub struct ChildDescriptor {
    /// Position of the child in the input sequence.
    pub id: usize,
    /// Element that receives the active flag.
    pub component: Element,
    /// Wrapper that also receives the active flag, rendered around `component`.
    pub parent: Option<Element>,
    /// Invoked with `component` when this entry becomes active.
    pub on_click: Option<ClickHandler>,
}

impl ChildDescriptor {
    /// Descriptor for a child managed directly, without a wrapper.
    #[must_use]
    pub fn flat(id: usize, child: &Element) -> Self {
        Self {
            id,
            component: child.clone(),
            parent: None,
            on_click: child.click_handler().cloned(),
        }
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        self.parent.is_some()
    }
}

impl PartialEq for ChildDescriptor {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (&self.on_click, &other.on_click) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_handler
            && self.id == other.id
            && self.component == other.component
            && self.parent == other.parent
    }
}

impl fmt::Debug for ChildDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildDescriptor")
            .field("id", &self.id)
            .field("component", &self.component)
            .field("parent", &self.parent)
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// Build the ordered roster for `children`.
///
/// With [`Nesting::Nested`], a child that does not wrap exactly one element
/// produces [`Diagnostic::AmbiguousNesting`] and is managed as if it were
/// flat. The rest of the roster is unaffected.
pub fn build_component_map(
    children: &[Element],
    nesting: Nesting,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ChildDescriptor> {
    children
        .iter()
        .enumerate()
        .map(|(id, child)| match nesting {
            Nesting::Flat => ChildDescriptor::flat(id, child),
            Nesting::Nested => match child.single_nested() {
                Some(inner) => ChildDescriptor {
                    id,
                    component: inner.clone(),
                    parent: Some(child.clone()),
                    on_click: child.click_handler().cloned(),
                },
                None => {
                    sink.emit(Diagnostic::AmbiguousNesting {
                        index: id,
                        nested: child.nested().len(),
                    });
                    ChildDescriptor::flat(id, child)
                }
            },
        })
        .collect()
}
