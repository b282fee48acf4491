//! Assembly of a [`StateDescriptor`] from the attributes and children of a `state` tag.

use crate::{AttributeMap, FormatError, GenericNode, coerce, options, vocabulary::*};
use log::{error, trace};
use statedesc_core::{StateDescriptor, StateDescriptorBuilder};
use thiserror::Error;

/// The children of a `state` tag do not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The child of a `state` tag is not an `options` list.
    #[error("unknown type `{0}`")]
    UnknownType(String),
    /// An item of the `options` list is not an `option` leaf.
    #[error("unknown type `{0}` in the list of `options`")]
    UnknownOptionType(String),
    /// An `option` leaf lacks a mandatory attribute.
    #[error("the node `option` requires the attribute `{0}`")]
    MissingAttr(String),
    /// A `state` tag has more than one child.
    #[error("unexpected trailing node `{0}`")]
    TrailingNode(String),
}

/// The reason a `state` tag could not be turned into a [`StateDescriptor`].
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// An attribute could not be read as its type.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The children do not have the expected shape.
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl DescriptorError {
    /// Whether an attribute could not be read as its type.
    pub fn is_format(&self) -> bool {
        matches!(self, DescriptorError::Format(_))
    }

    /// Whether the children do not have the expected shape.
    pub fn is_structure(&self) -> bool {
        matches!(self, DescriptorError::Structure(_))
    }
}

/// Builds the [`StateDescriptor`] of a `state` tag,
/// given its (already validated) attributes and its child nodes.
///
/// The only child allowed is a single `options` list, which has to come first.
/// Either the whole tag is valid and a complete descriptor is returned, or nothing is.
pub fn parse(
    attributes: &AttributeMap,
    children: &[GenericNode],
) -> Result<StateDescriptor, DescriptorError> {
    let read_only = coerce::boolean(attributes, ATTR_READ_ONLY, false);
    let mut builder = StateDescriptorBuilder::new().with_read_only(read_only);

    if let Some(minimum) = coerce::decimal(attributes, ATTR_MIN, None)? {
        builder = builder.with_minimum(minimum);
    }
    if let Some(maximum) = coerce::decimal(attributes, ATTR_MAX, None)? {
        builder = builder.with_maximum(maximum);
    }
    if let Some(step) = coerce::decimal(attributes, ATTR_STEP, None)? {
        builder = builder.with_step(step);
    }
    if let Some(pattern) = attributes.get(ATTR_PATTERN) {
        builder = builder.with_pattern(pattern.as_str());
    }

    let mut nodes = children.iter();
    if let Some(option_nodes) = nodes.next() {
        trace!(target: "parser", "'{}' child node", option_nodes.name());
        builder = builder.with_options(options::parse_options(option_nodes)?);
    }
    if let Some(node) = nodes.next() {
        error!(target: "parser", "unexpected trailing node '{}'", node.name());
        return Err(StructureError::TrailingNode(node.name().to_string()).into());
    }

    Ok(builder.build())
}
