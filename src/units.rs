//! Physical lengths and the units they are written in
//!
//! Lengths are held in points internally. On disk a length is a number
//! followed by a unit suffix (`28.35pt`, `10mm`, `1in`); a bare number is
//! read as points.

use logos::Logos;
use serde::Deserialize;

/// Units understood by the length codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Pt,
    In,
    Mm,
    Cm,
    Pc,
}

impl Units {
    /// Number of points in one of this unit
    pub fn points_per_unit(self) -> f64 {
        match self {
            Units::Pt => 1.0,
            Units::In => 72.0,
            Units::Mm => 72.0 / 25.4,
            Units::Cm => 72.0 / 2.54,
            Units::Pc => 12.0,
        }
    }

    /// Suffix used in attribute values
    pub fn id(self) -> &'static str {
        match self {
            Units::Pt => "pt",
            Units::In => "in",
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::Pc => "pc",
        }
    }
}

/// A physical length, stored in points
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f64);

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn pt(value: f64) -> Self {
        Self(value)
    }

    pub fn inches(value: f64) -> Self {
        Self::from_units(value, Units::In)
    }

    pub fn mm(value: f64) -> Self {
        Self::from_units(value, Units::Mm)
    }

    pub fn cm(value: f64) -> Self {
        Self::from_units(value, Units::Cm)
    }

    pub fn pc(value: f64) -> Self {
        Self::from_units(value, Units::Pc)
    }

    pub fn from_units(value: f64, units: Units) -> Self {
        Self(value * units.points_per_unit())
    }

    /// Value in points
    pub fn points(self) -> f64 {
        self.0
    }

    /// Value expressed in the given unit
    pub fn in_units(self, units: Units) -> f64 {
        self.0 / units.points_per_unit()
    }

    /// Attribute text for this length in the given unit
    pub fn to_attr(self, units: Units) -> String {
        format!("{}{}", self.in_units(units), units.id())
    }

    /// Parse an attribute value such as `10mm` or `28.5`
    ///
    /// Returns None if the text is not a single number with an optional
    /// known unit suffix.
    pub fn parse(text: &str) -> Option<Self> {
        let tokens: Vec<LengthToken> = LengthToken::lexer(text).collect::<Result<_, _>>().ok()?;
        match tokens.as_slice() {
            [LengthToken::Number(value)] => Some(Self::pt(*value)),
            [LengthToken::Number(value), LengthToken::Unit(units)] => {
                Some(Self::from_units(*value, *units))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_attr(Units::Pt))
    }
}

/// Tokens of a length attribute value
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum LengthToken {
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("pt", |_| Units::Pt)]
    #[token("in", |_| Units::In)]
    #[token("mm", |_| Units::Mm)]
    #[token("cm", |_| Units::Cm)]
    #[token("pc", |_| Units::Pc)]
    Unit(Units),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_units() {
        assert_eq!(Length::parse("10pt"), Some(Length::pt(10.0)));
        assert_eq!(Length::parse("1in"), Some(Length::pt(72.0)));
        assert_eq!(Length::parse("2pc"), Some(Length::pt(24.0)));
        let mm = Length::parse("25.4mm").unwrap();
        assert!((mm.points() - 72.0).abs() < 1e-9);
        let cm = Length::parse("2.54cm").unwrap();
        assert!((cm.points() - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_bare_number_is_points() {
        assert_eq!(Length::parse("12.5"), Some(Length::pt(12.5)));
        assert_eq!(Length::parse("-3"), Some(Length::pt(-3.0)));
        assert_eq!(Length::parse(".5pt"), Some(Length::pt(0.5)));
        assert_eq!(Length::parse("1e2pt"), Some(Length::pt(100.0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Length::parse(""), None);
        assert_eq!(Length::parse("pt"), None);
        assert_eq!(Length::parse("10 20"), None);
        assert_eq!(Length::parse("10px"), None);
        assert_eq!(Length::parse("10ptpt"), None);
        assert_eq!(Length::parse("abc"), None);
    }

    #[test]
    fn test_attr_round_trip_in_points_is_exact() {
        let length = Length::mm(10.0);
        let text = length.to_attr(Units::Pt);
        assert!(text.ends_with("pt"));
        assert_eq!(Length::parse(&text), Some(length));
    }

    #[test]
    fn test_attr_round_trip_in_other_units() {
        let length = Length::pt(123.456);
        for units in [Units::In, Units::Mm, Units::Cm, Units::Pc] {
            let text = length.to_attr(units);
            assert!(text.ends_with(units.id()));
            let back = Length::parse(&text).unwrap();
            assert!((back.points() - length.points()).abs() < 1e-9, "{}", text);
        }
    }

    #[test]
    fn test_display_uses_points() {
        assert_eq!(Length::inches(1.0).to_string(), "72pt");
    }
}
