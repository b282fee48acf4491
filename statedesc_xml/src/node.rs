use std::collections::HashMap;

/// Attributes of a tag, by name.
pub type AttributeMap = HashMap<String, String>;

/// A generic child of a tag, before it is given any meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericNode {
    /// A tag with no child tags: it has text content and attributes.
    Leaf {
        /// Tag name.
        name: String,
        /// Trimmed text content.
        value: String,
        /// Attributes of the tag.
        attributes: AttributeMap,
    },
    /// A tag with child tags.
    List {
        /// Tag name.
        name: String,
        /// Child tags, in document order.
        children: Vec<GenericNode>,
    },
}

impl GenericNode {
    /// Creates a [`GenericNode::Leaf`].
    pub fn leaf(name: impl Into<String>, attributes: AttributeMap, value: impl Into<String>) -> Self {
        GenericNode::Leaf {
            name: name.into(),
            value: value.into(),
            attributes,
        }
    }

    /// Creates a [`GenericNode::List`].
    pub fn list(name: impl Into<String>, children: Vec<GenericNode>) -> Self {
        GenericNode::List {
            name: name.into(),
            children,
        }
    }

    /// The tag name of the node.
    pub fn name(&self) -> &str {
        match self {
            GenericNode::Leaf { name, .. } | GenericNode::List { name, .. } => name,
        }
    }
}
