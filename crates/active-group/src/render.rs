#![forbid(unsafe_code)]

//! Render projection: descriptors plus the active id in, fresh output nodes out.
//!
//! Nothing here mutates a descriptor or a previously produced node. Each call
//! builds a new tree.
//!
//! ```text
//! GroupNode (custom_styles)
//! └── ItemNode #id (clickable, is_active, component_styles)
//!     └── parent clone (is_active)          -- nested entries only
//!         └── component clone (is_active, component_styles)
//! ```

use std::fmt;

use crate::element::{Element, Props};
use crate::roster::ChildDescriptor;

/// Passthrough values injected into every rendered entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough<'a> {
    pub component_styles: Option<&'a str>,
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNode {
    pub kind: String,
    pub props: Props,
    /// `Some` on managed nodes (component and wrapper), `None` on plain descendants.
    pub is_active: Option<bool>,
    /// Set on the managed component only.
    pub component_styles: Option<String>,
    pub children: Vec<OutputNode>,
}

impl OutputNode {
    /// Plain copy of an element subtree, without any injected values.
    #[must_use]
    pub fn plain(element: &Element) -> Self {
        Self {
            kind: element.kind().to_owned(),
            props: element.props().clone(),
            is_active: None,
            component_styles: None,
            children: element.nested().iter().map(Self::plain).collect(),
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if !self.props.is_empty() {
            let props: Vec<String> = self.props.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "({})", props.join(", "))?;
        }
        match self.is_active {
            Some(true) => f.write_str(" [active]")?,
            Some(false) => f.write_str(" [inactive]")?,
            None => {}
        }
        if let Some(styles) = &self.component_styles {
            write!(f, " styles={styles:?}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Clickable container around one entry. Clicks on it are forwarded to the
/// group with `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    pub id: usize,
    pub is_active: bool,
    pub component_styles: Option<String>,
    pub content: OutputNode,
}

/// The whole rendered group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNode {
    pub custom_styles: Option<String>,
    pub items: Vec<ItemNode>,
}

impl GroupNode {
    /// `is_active` of every item, in order.
    #[must_use]
    pub fn active_flags(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.is_active).collect()
    }

    /// Id of the first active item.
    #[must_use]
    pub fn active_item(&self) -> Option<usize> {
        self.items.iter().find(|item| item.is_active).map(|item| item.id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for GroupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("group")?;
        if let Some(styles) = &self.custom_styles {
            write!(f, " styles={styles:?}")?;
        }
        writeln!(f)?;
        for item in &self.items {
            writeln!(
                f,
                "  #{}{}",
                item.id,
                if item.is_active { " *" } else { "" }
            )?;
            item.content.write_tree(f, 2)?;
        }
        Ok(())
    }
}

/// Render one descriptor.
#[must_use]
pub fn render_descriptor(
    descriptor: &ChildDescriptor,
    is_active: bool,
    extra: Passthrough<'_>,
) -> ItemNode {
    let component_styles = extra.component_styles.map(str::to_owned);

    let component = OutputNode {
        is_active: Some(is_active),
        component_styles: component_styles.clone(),
        ..OutputNode::plain(&descriptor.component)
    };

    let content = match &descriptor.parent {
        Some(parent) => OutputNode {
            kind: parent.kind().to_owned(),
            props: parent.props().clone(),
            is_active: Some(is_active),
            component_styles: None,
            children: vec![component],
        },
        None => component,
    };

    ItemNode {
        id: descriptor.id,
        is_active,
        component_styles,
        content,
    }
}

/// Render every descriptor against `active_id`.
#[must_use]
pub fn render_roster(
    roster: &[ChildDescriptor],
    active_id: Option<usize>,
    extra: Passthrough<'_>,
) -> Vec<ItemNode> {
    roster
        .iter()
        .map(|d| render_descriptor(d, active_id == Some(d.id), extra))
        .collect()
}
