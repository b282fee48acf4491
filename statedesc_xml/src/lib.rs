//! Parser for state descriptions in XML documents.
//!
//! A state description is given by a `state` tag:
//!
//! ```xml
//! <state min="0" max="100" step="0.5" pattern="%.1f %%" readOnly="false">
//!     <options>
//!         <option value="0">Off</option>
//!         <option value="100">Full</option>
//!     </options>
//! </state>
//! ```
//!
//! All attributes are optional, and so is the `options` list, which is the only child allowed.

mod coerce;
mod descriptor;
mod document;
mod node;
mod options;
mod vocabulary;

pub use coerce::{FormatError, boolean, decimal};
pub use descriptor::{DescriptorError, StructureError, parse as parse_state};
pub use document::{ParsedState, ReaderError, attrs, parse};
pub use node::{AttributeMap, GenericNode};
pub use options::{parse_option, parse_options};
pub use statedesc_core;
pub use vocabulary::*;

use anyhow::Context;
use log::{info, warn};
use quick_xml::Reader;
use statedesc_core::StateDescriptor;
use std::path::Path;

fn line(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

fn read(text: &str, origin: &str) -> anyhow::Result<Vec<(usize, ParsedState)>> {
    let mut reader = Reader::from_str(text);
    let result = parse(&mut reader);
    let states = result.with_context(|| {
        format!(
            "failed to parse state descriptions at line {} in '{origin}'",
            line(text, reader.buffer_position() as usize),
        )
    })?;
    Ok(states
        .into_iter()
        .map(|state| (line(text, state.offset), state))
        .collect())
}

/// Reads all state descriptions in `text`,
/// failing at the first one that is invalid.
pub fn from_str(text: &str) -> anyhow::Result<Vec<StateDescriptor>> {
    read(text, "<memory>")?
        .into_iter()
        .map(|(line, state)| {
            state
                .descriptor
                .with_context(|| format!("invalid state description at line {line}"))
        })
        .collect()
}

/// Reads all state descriptions in the file at `path`,
/// failing at the first one that is invalid.
pub fn load(path: &Path) -> anyhow::Result<Vec<StateDescriptor>> {
    info!(target: "parser", "parsing state descriptions in '{}'", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;
    read(&text, &path.display().to_string())?
        .into_iter()
        .map(|(line, state)| {
            state.descriptor.with_context(|| {
                format!(
                    "invalid state description at line {line} in '{}'",
                    path.display()
                )
            })
        })
        .collect()
}

/// Reads all valid state descriptions in the file at `path`,
/// skipping those that are invalid.
///
/// Still fails if the document itself is malformed.
pub fn load_lenient(path: &Path) -> anyhow::Result<Vec<StateDescriptor>> {
    info!(target: "parser", "parsing state descriptions in '{}'", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;
    Ok(read(&text, &path.display().to_string())?
        .into_iter()
        .filter_map(|(line, state)| match state.descriptor {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                warn!(target: "parser",
                    "skipping invalid state description at line {line} in '{}': {err}",
                    path.display()
                );
                None
            }
        })
        .collect())
}
