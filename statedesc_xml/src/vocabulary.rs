pub const TAG_STATE: &str = "state";
pub const TAG_OPTIONS: &str = "options";
pub const TAG_OPTION: &str = "option";

pub const ATTR_MIN: &str = "min";
pub const ATTR_MAX: &str = "max";
pub const ATTR_STEP: &str = "step";
pub const ATTR_PATTERN: &str = "pattern";
pub const ATTR_READ_ONLY: &str = "readOnly";
pub const ATTR_VALUE: &str = "value";

/// Attributes a `state` tag may carry; none of them is required.
pub const STATE_ATTRS: [&str; 5] = [ATTR_MIN, ATTR_MAX, ATTR_STEP, ATTR_PATTERN, ATTR_READ_ONLY];
