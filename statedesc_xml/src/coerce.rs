//! Typed reading of attribute values.

use crate::AttributeMap;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use log::error;
use std::str::FromStr;
use thiserror::Error;

/// An attribute value is not a valid literal of the expected type.
#[derive(Error, Debug)]
#[error("the attribute `{attr}` has not a valid decimal number format: `{text}`")]
pub struct FormatError {
    /// Name of the offending attribute.
    pub attr: String,
    /// Text of the offending attribute.
    pub text: String,
    #[source]
    source: Option<ParseBigDecimalError>,
}

/// Whether `text` is an optional sign, digits with an optional fraction,
/// and an optional exponent, with at least one digit before the exponent.
fn is_decimal_literal(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = digits(int) && digits(frac) && !(int.is_empty() && frac.is_empty());
    let exponent_ok = exponent.is_none_or(|exp| {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !exp.is_empty() && digits(exp)
    });
    mantissa_ok && exponent_ok
}

/// Reads the attribute `name` as an exact decimal number,
/// or returns `default` if the attribute is not there.
pub fn decimal(
    attributes: &AttributeMap,
    name: &str,
    default: Option<BigDecimal>,
) -> Result<Option<BigDecimal>, FormatError> {
    let Some(text) = attributes.get(name) else {
        return Ok(default);
    };
    let format_error = |source| {
        error!(target: "parser", "attribute '{name}' is not a decimal number: '{text}'");
        FormatError {
            attr: name.to_string(),
            text: text.clone(),
            source,
        }
    };
    if !is_decimal_literal(text) {
        return Err(format_error(None));
    }
    BigDecimal::from_str(text)
        .map(Some)
        .map_err(|err| format_error(Some(err)))
}

/// Reads the attribute `name` as a boolean,
/// or returns `default` if the attribute is not there.
///
/// Only `true`, in any case, is true: any other text is false.
pub fn boolean(attributes: &AttributeMap, name: &str, default: bool) -> bool {
    attributes
        .get(name)
        .map_or(default, |text| text.eq_ignore_ascii_case("true"))
}
