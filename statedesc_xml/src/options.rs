//! Conversion of an `options` list into [`StateOption`]s.

use crate::{GenericNode, StructureError, vocabulary::*};
use log::{error, trace};
use statedesc_core::StateOption;

/// Converts an `options` list into its [`StateOption`]s, in the same order.
pub fn parse_options(node: &GenericNode) -> Result<Vec<StateOption>, StructureError> {
    match node {
        GenericNode::List { name, children } if name == TAG_OPTIONS => {
            trace!(target: "parser", "list of {} options", children.len());
            children.iter().map(parse_option).collect()
        }
        // `<options/>` carries no child tags, so it reaches here as an empty leaf.
        GenericNode::Leaf {
            name,
            value,
            attributes,
        } if name == TAG_OPTIONS && value.is_empty() && attributes.is_empty() => {
            trace!(target: "parser", "empty list of options");
            Ok(Vec::new())
        }
        _ => {
            error!(target: "parser", "unknown type '{}'", node.name());
            Err(StructureError::UnknownType(node.name().to_string()))
        }
    }
}

/// Converts an `option` leaf into a [`StateOption`].
pub fn parse_option(node: &GenericNode) -> Result<StateOption, StructureError> {
    match node {
        GenericNode::Leaf {
            name,
            value,
            attributes,
        } if name == TAG_OPTION => {
            let option_value = attributes.get(ATTR_VALUE).ok_or_else(|| {
                error!(target: "parser", "missing required attribute '{ATTR_VALUE}'");
                StructureError::MissingAttr(ATTR_VALUE.to_string())
            })?;
            Ok(StateOption::new(option_value.as_str(), value.as_str()))
        }
        _ => {
            error!(target: "parser", "unknown type '{}' in the list of options", node.name());
            Err(StructureError::UnknownOptionType(node.name().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeMap;

    fn option(value: Option<&str>, label: &str) -> GenericNode {
        let mut attributes = AttributeMap::new();
        if let Some(value) = value {
            attributes.insert(ATTR_VALUE.to_string(), value.to_string());
        }
        GenericNode::leaf(TAG_OPTION, attributes, label)
    }

    #[test]
    fn keeps_order() {
        let list = GenericNode::list(
            TAG_OPTIONS,
            vec![
                option(Some("b"), "Second"),
                option(Some("a"), "First"),
                option(Some("c"), "Third"),
            ],
        );
        let options = parse_options(&list).expect("valid options");
        assert_eq!(
            options,
            vec![
                StateOption::new("b", "Second"),
                StateOption::new("a", "First"),
                StateOption::new("c", "Third"),
            ]
        );
    }

    #[test]
    fn empty_label() {
        let option = parse_option(&option(Some("x"), "")).expect("valid option");
        assert_eq!(option.value(), "x");
        assert_eq!(option.label(), "");
    }

    #[test]
    fn empty_options() {
        let empty_list = GenericNode::list(TAG_OPTIONS, Vec::new());
        assert!(parse_options(&empty_list).expect("empty list").is_empty());
        let empty_leaf = GenericNode::leaf(TAG_OPTIONS, AttributeMap::new(), "");
        assert!(parse_options(&empty_leaf).expect("empty leaf").is_empty());
    }

    #[test]
    fn wrong_list_name() {
        let list = GenericNode::list("choices", vec![option(Some("1"), "On")]);
        assert!(matches!(
            parse_options(&list),
            Err(StructureError::UnknownType(name)) if name == "choices"
        ));
    }

    #[test]
    fn options_with_text() {
        let leaf = GenericNode::leaf(TAG_OPTIONS, AttributeMap::new(), "On");
        assert!(matches!(
            parse_options(&leaf),
            Err(StructureError::UnknownType(name)) if name == TAG_OPTIONS
        ));
    }

    #[test]
    fn wrong_item() {
        let list = GenericNode::list(
            TAG_OPTIONS,
            vec![option(Some("1"), "On"), GenericNode::list(TAG_OPTION, Vec::new())],
        );
        assert!(matches!(
            parse_options(&list),
            Err(StructureError::UnknownOptionType(name)) if name == TAG_OPTION
        ));
    }

    #[test]
    fn missing_value() {
        let list = GenericNode::list(TAG_OPTIONS, vec![option(None, "On")]);
        assert!(matches!(
            parse_options(&list),
            Err(StructureError::MissingAttr(attr)) if attr == ATTR_VALUE
        ));
    }
}
