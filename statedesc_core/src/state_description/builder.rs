use super::{StateDescriptor, StateOption};
use bigdecimal::BigDecimal;
use log::trace;

/// Defines and builds a [`StateDescriptor`].
///
/// Every field starts unset (the read-only flag starts `false` and there are no options),
/// and each setter only writes the field it names.
/// Building consumes the builder, so a draft cannot be reused once its descriptor exists.
#[derive(Debug, Clone, Default)]
pub struct StateDescriptorBuilder {
    minimum: Option<BigDecimal>,
    maximum: Option<BigDecimal>,
    step: Option<BigDecimal>,
    pattern: Option<String>,
    read_only: bool,
    options: Vec<StateOption>,
}

impl StateDescriptorBuilder {
    /// Creates a new [`StateDescriptorBuilder`] with no field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound of the state's value.
    pub fn with_minimum(mut self, minimum: BigDecimal) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the upper bound of the state's value.
    pub fn with_maximum(mut self, maximum: BigDecimal) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets the increment by which the state's value changes.
    pub fn with_step(mut self, step: BigDecimal) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets the pattern used to render the state's value.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets whether the state can only be observed.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Replaces the options with the given ones, keeping their order.
    pub fn with_options(mut self, options: Vec<StateOption>) -> Self {
        self.options = options;
        self
    }

    /// Appends a single option after the ones already present.
    pub fn with_option(mut self, option: StateOption) -> Self {
        self.options.push(option);
        self
    }

    /// Builds the [`StateDescriptor`] from the fields set so far.
    pub fn build(mut self) -> StateDescriptor {
        trace!(
            "building state description with {} options",
            self.options.len()
        );
        self.options.shrink_to_fit();
        StateDescriptor {
            minimum: self.minimum,
            maximum: self.maximum,
            step: self.step,
            pattern: self.pattern,
            read_only: self.read_only,
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_fields() {
        let descriptor = StateDescriptorBuilder::new()
            .with_maximum(BigDecimal::from(10))
            .build();
        assert!(descriptor.minimum().is_none());
        assert_eq!(descriptor.maximum(), Some(&BigDecimal::from(10)));
        assert!(descriptor.step().is_none());
        assert!(descriptor.pattern().is_none());
    }

    #[test]
    fn options_replace_then_append() {
        let descriptor = StateDescriptorBuilder::new()
            .with_option(StateOption::new("a", "A"))
            .with_options(vec![StateOption::new("b", "B"), StateOption::new("c", "C")])
            .with_option(StateOption::new("d", "D"))
            .build();
        let values: Vec<_> = descriptor.options().iter().map(StateOption::value).collect();
        assert_eq!(values, ["b", "c", "d"]);
    }

    #[test]
    fn read_only_last_write_wins() {
        let descriptor = StateDescriptorBuilder::new()
            .with_read_only(true)
            .with_read_only(false)
            .build();
        assert!(!descriptor.is_read_only());
    }
}
