//! Read-only document capabilities required by the extraction engine.
//!
//! The engine never talks to a parsing backend directly. It only needs to
//! look elements up by id or class fragment, walk to descendants and
//! ancestors, and read attributes and text. [`Document`] and [`DomNode`]
//! capture exactly that, and each backend provides its own implementation:
//!
//! - [`HtmlDocument`](crate::HtmlDocument) on top of `scraper`
//! - [`KuchikiDocument`](crate::KuchikiDocument) on top of `kuchikikiki`
//!
//! ## Example
//!
//! ```rust
//! use productrs::{Document, DomNode, HtmlDocument};
//!
//! let document = HtmlDocument::parse(r#"<div id="title"><span>Lamp</span></div>"#);
//! let title = document.element_by_id("title").unwrap();
//!
//! assert_eq!(title.text().trim(), "Lamp");
//! assert_eq!(title.descendants_by_tag("span").len(), 1);
//! ```

/// A parsed page that can be queried for elements.
pub trait Document {
    /// Handle to a node of this document.
    type Node<'a>: DomNode
    where
        Self: 'a;

    /// First element whose `id` attribute equals `id`, in document order.
    fn element_by_id(&self, id: &str) -> Option<Self::Node<'_>>;

    /// All elements whose `class` attribute contains `fragment` as a substring,
    /// in document order.
    fn elements_with_class(&self, fragment: &str) -> Vec<Self::Node<'_>>;
}

/// A node handle inside a [`Document`].
pub trait DomNode: Clone {
    /// Descendant elements (excluding the node itself) with the given tag name.
    fn descendants_by_tag(&self, tag: &str) -> Vec<Self>;

    /// Value of an attribute, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of the node and all of its descendants.
    fn text(&self) -> String;

    /// Text of the node's first child (element or text node).
    fn first_child_text(&self) -> Option<String>;

    /// Parent node, `None` at the top of the tree.
    fn parent_node(&self) -> Option<Self>;

    /// Ancestor `levels` steps up; `ancestor(1)` is the parent.
    fn ancestor(&self, levels: usize) -> Option<Self> {
        let mut node = self.clone();
        for _ in 0..levels {
            node = node.parent_node()?;
        }
        Some(node)
    }
}
