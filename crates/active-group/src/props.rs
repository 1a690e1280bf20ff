#![forbid(unsafe_code)]

//! Inputs of a group.

use crate::element::ChildrenInput;
use crate::roster::Nesting;

/// Props handed to a group on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupProps {
    /// The managed children.
    pub children: ChildrenInput,
    /// Children are the primary components themselves.
    pub no_nesting: bool,
    /// Externally controlled active index (e.g. derived from the current route).
    pub default_active: Option<usize>,
    /// Opaque styles for the group container.
    pub custom_styles: Option<String>,
    /// Opaque styles passed to every managed component and its item wrapper.
    pub custom_component_styles: Option<String>,
}

impl GroupProps {
    #[must_use]
    pub fn new(children: impl Into<ChildrenInput>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn no_nesting(mut self, no_nesting: bool) -> Self {
        self.no_nesting = no_nesting;
        self
    }

    #[must_use]
    pub fn default_active(mut self, index: usize) -> Self {
        self.default_active = Some(index);
        self
    }

    /// Set or clear the external active index.
    #[must_use]
    pub fn external_active(mut self, index: Option<usize>) -> Self {
        self.default_active = index;
        self
    }

    #[must_use]
    pub fn custom_styles(mut self, styles: impl Into<String>) -> Self {
        self.custom_styles = Some(styles.into());
        self
    }

    #[must_use]
    pub fn custom_component_styles(mut self, styles: impl Into<String>) -> Self {
        self.custom_component_styles = Some(styles.into());
        self
    }

    /// Replace the children, keeping every other prop.
    #[must_use]
    pub fn with_children(mut self, children: impl Into<ChildrenInput>) -> Self {
        self.children = children.into();
        self
    }

    #[inline]
    pub fn nesting(&self) -> Nesting {
        Nesting::from_no_nesting(self.no_nesting)
    }
}
