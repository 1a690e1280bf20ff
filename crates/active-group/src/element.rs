#![forbid(unsafe_code)]

//! Host element model consumed by the group.
//!
//! An [`Element`] is an immutable description of a visual node: a component
//! name, an ordered prop map, ordered children and an optional click handler.
//! The group never mutates elements it is handed; rendering always produces
//! new output nodes (see [`crate::render`]).
//!
//! [`ChildrenInput`] is the tagged form of the `children` prop. Adapters at
//! the host boundary decide which variant applies; the core only branches on
//! the tag.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the primary component when its entry becomes active.
pub type ClickHandler = Rc<dyn Fn(&Element)>;

/// A single prop value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Ordered prop map. Ordering keeps debug output deterministic.
pub type Props = BTreeMap<String, PropValue>;

/// Immutable description of a host element.
#[derive(Clone)]
pub struct Element {
    kind: String,
    props: Props,
    children: Vec<Element>,
    on_click: Option<ClickHandler>,
}

impl Element {
    /// Create an element of the given component kind with no props.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Props::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Set a prop, replacing any previous value under the same key.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Append a nested element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several nested elements.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl Fn(&Element) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Attach an already shared click handler.
    #[must_use]
    pub fn on_click_shared(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Look up a single prop.
    pub fn get_prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    #[inline]
    pub fn nested(&self) -> &[Element] {
        &self.children
    }

    /// The single nested element, if there is exactly one.
    pub fn single_nested(&self) -> Option<&Element> {
        match self.children.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn click_handler(&self) -> Option<&ClickHandler> {
        self.on_click.as_ref()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (&self.on_click, &other.on_click) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_handler
            && self.kind == other.kind
            && self.props == other.props
            && self.children == other.children
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// Shape of the `children` input, resolved before it reaches the core.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChildrenInput {
    /// No children supplied at all.
    #[default]
    Empty,
    /// A lone element instead of a sequence.
    Single(Element),
    /// An ordered sequence, possibly still empty while data loads.
    Sequence(Vec<Element>),
}

impl ChildrenInput {
    /// The sequence, if the input is one.
    pub fn as_sequence(&self) -> Option<&[Element]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Element> for ChildrenInput {
    fn from(element: Element) -> Self {
        Self::Single(element)
    }
}

impl From<Vec<Element>> for ChildrenInput {
    fn from(elements: Vec<Element>) -> Self {
        Self::Sequence(elements)
    }
}

impl From<Option<Vec<Element>>> for ChildrenInput {
    fn from(elements: Option<Vec<Element>>) -> Self {
        elements.map_or(Self::Empty, Self::Sequence)
    }
}

impl FromIterator<Element> for ChildrenInput {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
