//! Typed attribute accessors
//!
//! Setters only fail for values with no text form. Getters come in a required form, which reports a
//! missing attribute, and an `opt_` form; both report malformed values with
//! the element and attribute name.

use crate::error::{FormatError, LabelError};
use crate::model::{Color, LiteralOrField};
use crate::units::{Length, Units};

use super::Element;

impl Element {
    pub fn set_string(&mut self, name: &str, value: &str) {
        self.set_attr(name, value);
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set_attr(name, if value { "true" } else { "false" });
    }

    pub fn set_uint(&mut self, name: &str, value: u32) {
        self.set_attr(name, value.to_string());
    }

    /// Shortest representation that parses back to the same value
    pub fn set_double(&mut self, name: &str, value: f64) {
        self.set_attr(name, value.to_string());
    }

    /// Fails for infinite or NaN lengths, which have no attribute form
    pub fn set_length(&mut self, name: &str, value: Length, units: Units) -> Result<(), LabelError> {
        if !value.points().is_finite() {
            return Err(LabelError::Encode(format!(
                "<{}> attribute '{}' has non-finite length {}",
                self.name,
                name,
                value.points()
            )));
        }
        self.set_attr(name, value.to_attr(units));
        Ok(())
    }

    /// Write exactly one of `{base}_field="key"` or `{base}="literal"`
    pub fn set_literal_or_field<T>(
        &mut self,
        base: &str,
        value: &LiteralOrField<T>,
        encode: impl FnOnce(&T) -> String,
    ) {
        match value {
            LiteralOrField::Field(key) => self.set_attr(&format!("{}_field", base), key.as_str()),
            LiteralOrField::Literal(literal) => self.set_attr(base, encode(literal)),
        }
    }

    pub fn set_color_or_field(&mut self, base: &str, value: &LiteralOrField<Color>) {
        self.set_literal_or_field(base, value, |color| color.rgba().to_string());
    }

    pub fn missing(&self, name: &str) -> FormatError {
        FormatError::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
            span: self.span.clone(),
        }
    }

    pub fn invalid(&self, name: &str, value: &str, expected: &'static str) -> FormatError {
        FormatError::InvalidAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
            value: value.to_string(),
            expected,
            span: self.span.clone(),
        }
    }

    pub fn violation(&self, message: impl Into<String>) -> FormatError {
        FormatError::InvariantViolation {
            element: self.name.clone(),
            message: message.into(),
            span: self.span.clone(),
        }
    }

    pub fn string(&self, name: &str) -> Result<&str, FormatError> {
        self.attr(name).ok_or_else(|| self.missing(name))
    }

    fn parsed<T>(
        &self,
        name: &str,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, FormatError> {
        match self.attr(name) {
            None => Ok(None),
            Some(text) => parse(text)
                .map(Some)
                .ok_or_else(|| self.invalid(name, text, expected)),
        }
    }

    pub fn opt_bool(&self, name: &str) -> Result<Option<bool>, FormatError> {
        self.parsed(name, "'true' or 'false'", parse_bool)
    }

    pub fn bool(&self, name: &str) -> Result<bool, FormatError> {
        self.opt_bool(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn opt_uint(&self, name: &str) -> Result<Option<u32>, FormatError> {
        self.parsed(name, "an unsigned 32-bit integer", parse_uint)
    }

    pub fn uint(&self, name: &str) -> Result<u32, FormatError> {
        self.opt_uint(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn opt_double(&self, name: &str) -> Result<Option<f64>, FormatError> {
        self.parsed(name, "a number", |s| s.trim().parse::<f64>().ok())
    }

    pub fn double(&self, name: &str) -> Result<f64, FormatError> {
        self.opt_double(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn opt_length(&self, name: &str) -> Result<Option<Length>, FormatError> {
        self.parsed(name, "a length such as '10mm' or '28.35pt'", Length::parse)
    }

    pub fn length(&self, name: &str) -> Result<Length, FormatError> {
        self.opt_length(name)?.ok_or_else(|| self.missing(name))
    }

    /// Read an enum attribute through its string table
    pub fn keyword<T>(
        &self,
        name: &str,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, FormatError> {
        self.parsed(name, expected, parse)?
            .ok_or_else(|| self.missing(name))
    }

    /// Read a literal/field pair; `Ok(None)` when neither attribute is present
    pub fn opt_literal_or_field<T>(
        &self,
        base: &str,
        expected: &'static str,
        decode: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<LiteralOrField<T>>, FormatError> {
        let field_name = format!("{}_field", base);
        match (self.attr(base), self.attr(&field_name)) {
            (Some(_), Some(_)) => Err(self.violation(format!(
                "both '{}' and '{}' are set",
                base, field_name
            ))),
            (None, Some(key)) => Ok(Some(LiteralOrField::Field(key.to_string()))),
            (Some(text), None) => decode(text)
                .map(|v| Some(LiteralOrField::Literal(v)))
                .ok_or_else(|| self.invalid(base, text, expected)),
            (None, None) => Ok(None),
        }
    }

    pub fn literal_or_field<T>(
        &self,
        base: &str,
        expected: &'static str,
        decode: impl FnOnce(&str) -> Option<T>,
    ) -> Result<LiteralOrField<T>, FormatError> {
        self.opt_literal_or_field(base, expected, decode)?
            .ok_or_else(|| self.missing(base))
    }

    pub fn opt_color_or_field(
        &self,
        base: &str,
    ) -> Result<Option<LiteralOrField<Color>>, FormatError> {
        self.opt_literal_or_field(base, "a packed RGBA color", |s| parse_uint(s).map(Color))
    }

    pub fn color_or_field(&self, base: &str) -> Result<LiteralOrField<Color>, FormatError> {
        self.opt_color_or_field(base)?
            .ok_or_else(|| self.missing(base))
    }
}

/// Only the exact lowercase tokens are accepted
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Decimal, or hexadecimal with a `0x` prefix as older files use for colors
pub fn parse_uint(s: &str) -> Option<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse::<u32>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> Element {
        Element::new("Object-box")
    }

    #[test]
    fn test_bool_tokens_are_case_sensitive() {
        let mut node = element();
        node.set_bool("rotate", true);
        assert_eq!(node.attr("rotate"), Some("true"));
        assert_eq!(node.bool("rotate"), Ok(true));

        node.set_attr("rotate", "True");
        assert!(matches!(
            node.bool("rotate"),
            Err(FormatError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_missing_attribute() {
        let node = element();
        assert!(matches!(
            node.length("x"),
            Err(FormatError::MissingAttribute { ref attribute, .. }) if attribute == "x"
        ));
        assert_eq!(node.opt_length("x"), Ok(None));
    }

    #[test]
    fn test_uint_accepts_decimal_and_hex() {
        assert_eq!(parse_uint("255"), Some(255));
        assert_eq!(parse_uint("0x000000ff"), Some(255));
        assert_eq!(parse_uint("4294967295"), Some(u32::MAX));
        assert_eq!(parse_uint("4294967296"), None);
        assert_eq!(parse_uint("-1"), None);
        assert_eq!(parse_uint("ff"), None);
    }

    #[test]
    fn test_double_round_trips_exactly() {
        let mut node = element();
        for value in [0.1, 1.0 / 3.0, 1e-300, 123456789.123456789, -0.5] {
            node.set_double("a0", value);
            assert_eq!(node.double("a0"), Ok(value));
        }
    }

    #[test]
    fn test_double_rejects_text() {
        let mut node = element();
        node.set_attr("a0", "one");
        assert!(matches!(
            node.double("a0"),
            Err(FormatError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_length_uses_requested_units() {
        let mut node = element();
        node.set_length("x", Length::inches(1.0), Units::In).unwrap();
        assert_eq!(node.attr("x"), Some("1in"));
        assert_eq!(node.length("x"), Ok(Length::pt(72.0)));
    }

    #[test]
    fn test_non_finite_length_is_refused() {
        let mut node = element();
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = node.set_length("x", Length::pt(value), Units::Pt).unwrap_err();
            assert!(matches!(err, LabelError::Encode(ref msg) if msg.contains("'x'")));
        }
        assert!(!node.has_attr("x"));
    }

    #[test]
    fn test_color_literal_and_field_are_exclusive() {
        let mut node = element();
        node.set_color_or_field("line_color", &LiteralOrField::Literal(Color::BLACK));
        assert_eq!(node.attr("line_color"), Some("255"));
        assert!(!node.has_attr("line_color_field"));

        let mut node = element();
        node.set_color_or_field("fill_color", &LiteralOrField::field("Color"));
        assert_eq!(node.attr("fill_color_field"), Some("Color"));
        assert!(!node.has_attr("fill_color"));
        assert_eq!(
            node.color_or_field("fill_color"),
            Ok(LiteralOrField::field("Color"))
        );
    }

    #[test]
    fn test_color_both_set_is_violation() {
        let mut node = element();
        node.set_attr("line_color", "255");
        node.set_attr("line_color_field", "Ink");
        assert!(matches!(
            node.color_or_field("line_color"),
            Err(FormatError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_color_neither_set() {
        let node = element();
        assert!(matches!(
            node.color_or_field("line_color"),
            Err(FormatError::MissingAttribute { .. })
        ));
        assert_eq!(node.opt_color_or_field("shadow_color"), Ok(None));
    }

    #[test]
    fn test_color_accepts_hex_literal() {
        let mut node = element();
        node.set_attr("color", "0x336699ff");
        assert_eq!(
            node.color_or_field("color"),
            Ok(LiteralOrField::Literal(Color(0x3366_99FF)))
        );
    }
}
