//! Domain model of *state descriptions*:
//! the legal value range and presentation of a piece of state
//! (numeric bounds, step size, display pattern, read-only flag and a list of discrete options).
//!
//! Descriptions are immutable values and are only ever produced through a [`StateDescriptorBuilder`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod state_description;

pub use bigdecimal::BigDecimal;
pub use state_description::*;
