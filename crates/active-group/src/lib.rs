#![forbid(unsafe_code)]

//! Mutually-exclusive "active" selection across a list of sibling elements.
//!
//! An [`ActiveGroup`] hands an `is_active` flag to each of its children (and
//! to the wrapper around each child when children are nested, e.g. a link
//! around a tab). The flag moves when a child is clicked, or when the
//! externally supplied active index changes (a route-derived "current page").
//!
//! # Pieces
//!
//! - [`roster::build_component_map`]: children in, ordered descriptors out.
//! - [`reconcile::reconcile`]: pre-render; populates the roster exactly once.
//! - [`click::on_child_click`] / [`click::deactivate_group`]: user interaction.
//! - [`sync::sync_external_active`]: post-render; follows external *changes*.
//! - [`render`]: projects state onto fresh output nodes.
//!
//! # Invariants
//!
//! 1. At most one item renders active.
//! 2. The roster is captured from the first non-empty children sequence and
//!    never rebuilt for the lifetime of the group. Adding or removing children
//!    later is not supported.
//! 3. Clicking the active item does nothing, callback included.
//! 4. An unchanged external index never reverts a click-driven selection.
//!
//! # Failure Modes
//!
//! None are fatal. Misuse produces a [`Diagnostic`] on the group's
//! [`DiagnosticSink`] and, at worst, an empty rendering.

pub mod click;
#[cfg(feature = "config")]
pub mod config;
pub mod diagnostic;
pub mod element;
pub mod group;
pub mod props;
pub mod reconcile;
pub mod render;
pub mod roster;
pub mod state;
pub mod sync;

pub use click::ClickOutcome;
#[cfg(feature = "config")]
pub use config::{ConfigError, GroupOptions};
pub use diagnostic::{Diagnostic, DiagnosticSink, FnSink, NullSink, Severity, TracingSink};
pub use element::{ChildrenInput, ClickHandler, Element, PropValue, Props};
pub use group::ActiveGroup;
pub use props::GroupProps;
pub use reconcile::Reconciliation;
pub use render::{GroupNode, ItemNode, OutputNode, Passthrough};
pub use roster::{ChildDescriptor, Nesting};
pub use state::GroupState;
pub use sync::SyncOutcome;
