//! Reading `state` tags out of XML documents.

use crate::{AttributeMap, DescriptorError, GenericNode, descriptor, vocabulary::*};
use anyhow::{Context, anyhow, bail};
use log::{error, info, trace};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use statedesc_core::StateDescriptor;
use std::io::BufRead;
use thiserror::Error;

/// Maximum nesting of tags inside a `state` tag.
const MAX_DEPTH: usize = 16;

/// The document could not be read.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// A tag carries an attribute it does not accept.
    #[error("unknown or unexpected attribute key `{0}`")]
    UnknownAttrKey(String),
    /// A tag lacks an attribute it requires.
    #[error("missing required attribute `{0}`")]
    MissingAttr(String),
    /// An end tag does not close the innermost open tag.
    #[error("unknown or unexpected end tag `{0}`")]
    UnexpectedEndTag(String),
    /// The document ended with tags still open.
    #[error("open tags have not been closed")]
    UnclosedTags,
    /// A tag contains text where none is allowed.
    #[error("unexpected text content in tag `{0}`")]
    UnexpectedText(String),
    /// A tag with child tags also carries attributes.
    #[error("tag `{0}` has child tags and cannot carry attributes")]
    ListAttributes(String),
    /// Tags are nested too deeply inside a `state` tag.
    #[error("tag `{0}` is nested too deeply")]
    TooDeep(String),
    /// The document uses an XML feature that is not supported.
    #[error("{0} not supported")]
    Unsupported(&'static str),
}

/// The outcome of reading one `state` tag.
#[derive(Debug)]
pub struct ParsedState {
    /// Byte offset of the end of the `state` start tag in the document.
    pub offset: usize,
    /// The descriptor, or the reason the tag does not describe one.
    pub descriptor: Result<StateDescriptor, DescriptorError>,
}

fn tag_name<R>(reader: &Reader<R>, tag: &BytesStart<'_>) -> anyhow::Result<String> {
    Ok(reader.decoder().decode(tag.name().into_inner())?.into_owned())
}

fn all_attrs(tag: &BytesStart<'_>) -> anyhow::Result<AttributeMap> {
    let mut attrs = AttributeMap::new();
    for attr in tag.attributes() {
        let attr = attr?;
        let key = String::from_utf8(attr.key.into_inner().to_vec())?;
        let val = attr.unescape_value()?.into_owned();
        attrs.insert(key, val);
    }
    Ok(attrs)
}

/// Reads the attributes of `tag`, which must include all of `keys`
/// and may include any of `opt_keys`, but nothing else.
pub fn attrs(tag: &BytesStart<'_>, keys: &[&str], opt_keys: &[&str]) -> anyhow::Result<AttributeMap> {
    let attrs = all_attrs(tag)?;
    for key in attrs.keys() {
        if !keys.contains(&key.as_str()) && !opt_keys.contains(&key.as_str()) {
            error!(target: "parser", "found unknown attribute '{key}'");
            bail!(ReaderError::UnknownAttrKey(key.to_string()));
        }
    }
    for key in keys {
        if !attrs.contains_key(*key) {
            error!(target: "parser", "missing required attribute '{key}'");
            bail!(ReaderError::MissingAttr(key.to_string()));
        }
    }
    Ok(attrs)
}

/// Reads everything up to the end tag closing `parent`,
/// returning the child tags as generic nodes and the text content.
///
/// `depth` is the number of tags enclosing `parent` inside the `state` tag.
fn read_content<R: BufRead>(
    reader: &mut Reader<R>,
    parent: &str,
    depth: usize,
) -> anyhow::Result<(Vec<GenericNode>, String)> {
    let mut buf = Vec::new();
    let mut children = Vec::new();
    let mut text = String::new();
    loop {
        match reader
            .read_event_into(&mut buf)
            .context("failed reading event")?
        {
            Event::Start(tag) => {
                let name = tag_name(reader, &tag)?;
                trace!(target: "parser", "start tag '{name}'");
                if depth >= MAX_DEPTH {
                    error!(target: "parser", "tag '{name}' is nested too deeply");
                    bail!(ReaderError::TooDeep(name));
                }
                let attributes = all_attrs(&tag)?;
                let (nodes, content) = read_content(reader, &name, depth + 1)?;
                children.push(generic_node(name, attributes, nodes, content)?);
            }
            Event::Empty(tag) => {
                let name = tag_name(reader, &tag)?;
                trace!(target: "parser", "empty tag '{name}'");
                let attributes = all_attrs(&tag)?;
                children.push(GenericNode::leaf(name, attributes, ""));
            }
            Event::End(tag) => {
                let name = reader.decoder().decode(tag.name().into_inner())?;
                if name == parent {
                    trace!(target: "parser", "end tag '{name}'");
                    break;
                } else {
                    error!(target: "parser", "unknown or unexpected end tag '{name}'");
                    bail!(ReaderError::UnexpectedEndTag(name.into_owned()));
                }
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&reader.decoder().decode(&c)?),
            // Ignore comments
            Event::Comment(_) => continue,
            Event::Decl(_) => {
                error!(target: "parser", "XML declaration inside tag '{parent}'");
                bail!(ReaderError::Unsupported("nested XML declaration"));
            }
            Event::PI(_) => {
                error!(target: "parser", "Processing Instructions not supported");
                bail!(ReaderError::Unsupported("Processing Instructions"));
            }
            Event::DocType(_) => {
                error!(target: "parser", "DocType not supported");
                bail!(ReaderError::Unsupported("DocType"));
            }
            Event::Eof => {
                error!(target: "parser", "tag '{parent}' has not been closed");
                bail!(ReaderError::UnclosedTags);
            }
        }
        // if we don't keep a borrow elsewhere, we can clear the buffer to keep memory usage low
        buf.clear();
    }
    Ok((children, text))
}

fn generic_node(
    name: String,
    attributes: AttributeMap,
    children: Vec<GenericNode>,
    text: String,
) -> anyhow::Result<GenericNode> {
    if children.is_empty() {
        Ok(GenericNode::leaf(name, attributes, text.trim()))
    } else if !text.trim().is_empty() {
        error!(target: "parser", "tag '{name}' mixes text and child tags");
        Err(anyhow!(ReaderError::UnexpectedText(name)))
    } else if !attributes.is_empty() {
        error!(target: "parser", "tag '{name}' has child tags and attributes");
        Err(anyhow!(ReaderError::ListAttributes(name)))
    } else {
        Ok(GenericNode::list(name, children))
    }
}

fn parse_state<R: BufRead>(
    reader: &mut Reader<R>,
    tag: &BytesStart<'_>,
    has_content: bool,
) -> anyhow::Result<Result<StateDescriptor, DescriptorError>> {
    let attributes =
        attrs(tag, &[], &STATE_ATTRS).context("failed to parse 'state' tag attributes")?;
    let children = if has_content {
        let (children, text) = read_content(reader, TAG_STATE, 0)?;
        if !text.trim().is_empty() {
            error!(target: "parser", "text content not supported in '{TAG_STATE}'");
            bail!(ReaderError::UnexpectedText(TAG_STATE.to_string()));
        }
        children
    } else {
        Vec::new()
    };
    Ok(descriptor::parse(&attributes, &children))
}

/// Reads every `state` tag in the document, at any depth.
///
/// Tags other than `state` are only checked for being well-formed.
/// Fails if the document itself is malformed or a `state` tag carries unknown attributes,
/// while a `state` tag whose content is invalid only yields an error in its own [`ParsedState`].
pub fn parse<R: BufRead>(reader: &mut Reader<R>) -> anyhow::Result<Vec<ParsedState>> {
    info!(target: "parser", "begin parsing");
    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut states = Vec::new();
    loop {
        match reader
            .read_event_into(&mut buf)
            .context("failed reading event")?
        {
            Event::Start(tag) => {
                let name = tag_name(reader, &tag)?;
                trace!(target: "parser", "start tag '{name}'");
                if name == TAG_STATE {
                    let offset = reader.buffer_position() as usize;
                    let descriptor = parse_state(reader, &tag, true)?;
                    states.push(ParsedState { offset, descriptor });
                } else {
                    stack.push(name);
                }
            }
            Event::Empty(tag) => {
                let name = tag_name(reader, &tag)?;
                trace!(target: "parser", "empty tag '{name}'");
                if name == TAG_STATE {
                    let offset = reader.buffer_position() as usize;
                    let descriptor = parse_state(reader, &tag, false)?;
                    states.push(ParsedState { offset, descriptor });
                }
            }
            Event::End(tag) => {
                let name = reader.decoder().decode(tag.name().into_inner())?;
                if stack.pop().is_some_and(|open| open == name) {
                    trace!(target: "parser", "end tag '{name}'");
                } else {
                    error!(target: "parser", "unknown or unexpected end tag '{name}'");
                    bail!(ReaderError::UnexpectedEndTag(name.into_owned()));
                }
            }
            // Text outside of `state` tags belongs to other tags
            Event::Text(_) | Event::CData(_) => continue,
            // Ignore comments
            Event::Comment(_)
            // Ignore XML declaration
            | Event::Decl(_) => continue,
            Event::PI(_) => {
                error!(target: "parser", "Processing Instructions not supported");
                bail!(ReaderError::Unsupported("Processing Instructions"));
            }
            Event::DocType(_) => {
                error!(target: "parser", "DocType not supported");
                bail!(ReaderError::Unsupported("DocType"));
            }
            // exits the loop when reaching end of file
            Event::Eof => {
                info!(target: "parser", "parsing completed");
                break;
            }
        }
        buf.clear();
    }
    if stack.is_empty() {
        Ok(states)
    } else {
        error!(target: "parser", "unclosed tags {stack:?}");
        Err(anyhow!(ReaderError::UnclosedTags))
    }
}
