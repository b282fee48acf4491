//! Implementation of state descriptions.
//!
//! A _state description_ is given by:
//!
//! - an optional _minimum_ and an optional _maximum_ bounding the numeric value of the state;
//! - an optional _step_ by which the value can be changed;
//! - an optional _pattern_ used to render the value;
//! - a _read-only_ flag, telling whether the state can be commanded or only observed;
//! - an ordered list of _options_, i.e., the discrete values the state can take, each with a label.
//!
//! Numeric fields are exact decimals, so that `0.1` stays `0.1`.
//! A field that was never set is distinct from a field set to zero.
//!
//! A description is represented by a [`StateDescriptor`] and defined through a [`StateDescriptorBuilder`],
//! by setting, one at a time, the fields that are known.
//! Then, the [`StateDescriptor`] is built from the [`StateDescriptorBuilder`]
//! and can no longer be altered.
//!
//! ```
//! # use statedesc_core::{BigDecimal, StateDescriptorBuilder, StateOption};
//! # use std::str::FromStr;
//! // Create a new draft
//! let builder = StateDescriptorBuilder::new();
//!
//! // Set only the fields that are known
//! let descriptor = builder
//!     .with_minimum(BigDecimal::from(0))
//!     .with_step(BigDecimal::from_str("0.5").expect("decimal literal"))
//!     .with_option(StateOption::new("1", "On"))
//!     .with_option(StateOption::new("0", "Off"))
//!     .build();
//!
//! // Fields that were set are there, exactly as given
//! assert_eq!(descriptor.minimum(), Some(&BigDecimal::from(0)));
//! assert_eq!(descriptor.step().map(ToString::to_string).as_deref(), Some("0.5"));
//!
//! // Fields that were not set stay unset
//! assert!(descriptor.maximum().is_none());
//! assert!(descriptor.pattern().is_none());
//! assert!(!descriptor.is_read_only());
//!
//! // Options keep the order in which they were given
//! let labels: Vec<_> = descriptor.options().iter().map(StateOption::label).collect();
//! assert_eq!(labels, ["On", "Off"]);
//! ```

mod builder;

use bigdecimal::BigDecimal;
pub use builder::*;
use serde::Serialize;

/// One discrete value a state can take, together with the label to display for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StateOption {
    value: String,
    label: String,
}

impl StateOption {
    /// Creates a new [`StateOption`] from its value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The value the state takes when this option is selected.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label to display for this option.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An immutable description of the value range and presentation of a state.
///
/// These cannot be directly created or manipulated,
/// but have to be built by a [`StateDescriptorBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    read_only: bool,
    options: Vec<StateOption>,
}

impl StateDescriptor {
    /// Creates a new, empty [`StateDescriptorBuilder`].
    ///
    /// Shortcut for [`StateDescriptorBuilder::new`].
    pub fn builder() -> StateDescriptorBuilder {
        StateDescriptorBuilder::new()
    }

    /// The lower bound of the state's value, if any.
    pub fn minimum(&self) -> Option<&BigDecimal> {
        self.minimum.as_ref()
    }

    /// The upper bound of the state's value, if any.
    pub fn maximum(&self) -> Option<&BigDecimal> {
        self.maximum.as_ref()
    }

    /// The increment by which the state's value changes, if any.
    pub fn step(&self) -> Option<&BigDecimal> {
        self.step.as_ref()
    }

    /// The pattern used to render the state's value, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Whether the state can only be observed and not commanded.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The discrete options for the state's value, in display order.
    pub fn options(&self) -> &[StateOption] {
        &self.options
    }
}
