// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flat `{name}` placeholder substitution.
//!
//! Only tokens of the form `{word}` (ASCII letters, digits, underscore) are
//! recognised. ICU MessageFormat constructs such as
//! `{count, plural, one {...} other {...}}` are not interpreted and pass
//! through untouched.

use anyhow::{anyhow, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// A value substituted for a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplacementValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for ReplacementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplacementValue::Int(n) => write!(f, "{}", n),
            ReplacementValue::Float(x) if x.is_nan() => f.write_str("NaN"),
            ReplacementValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            ReplacementValue::Float(x) if *x == 0.0 => f.write_str("0"),
            ReplacementValue::Float(x) if x.abs() >= 1e21 || x.abs() < 1e-6 => {
                write_exponent(f, *x)
            }
            // Shortest round-trip digits, no trailing ".0", like the host UI.
            ReplacementValue::Float(x) => write!(f, "{}", x),
            ReplacementValue::Text(s) => f.write_str(s),
        }
    }
}

/// `1e+21`, `1.5e-7`: shortest mantissa, explicit exponent sign.
fn write_exponent(f: &mut std::fmt::Formatter<'_>, x: f64) -> std::fmt::Result {
    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

impl From<&str> for ReplacementValue {
    fn from(value: &str) -> Self {
        ReplacementValue::Text(value.to_string())
    }
}

impl From<String> for ReplacementValue {
    fn from(value: String) -> Self {
        ReplacementValue::Text(value)
    }
}

impl From<f64> for ReplacementValue {
    fn from(value: f64) -> Self {
        ReplacementValue::Float(value)
    }
}

macro_rules! int_replacement {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    ReplacementValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_replacement!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for ReplacementValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => ReplacementValue::Int(n),
            Err(_) => ReplacementValue::Text(value.to_string()),
        }
    }
}

/// Placeholder name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Replacements(BTreeMap<String, ReplacementValue>);

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Replacements::insert`].
    ///
    /// ```
    /// use vencord_i18n::i18n::Replacements;
    /// let r = Replacements::new().with("status", 500).with("tab", "Themes");
    /// assert_eq!(r.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ReplacementValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ReplacementValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ReplacementValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReplacementValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a `name=value` command-line assignment.
    ///
    /// The value becomes an integer if it parses as one, then a float, and
    /// otherwise stays text. The name must be a valid placeholder name.
    pub fn parse_assignment(raw: &str) -> Result<(String, ReplacementValue)> {
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("expected name=value, got '{}'", raw))?;
        let name = name.trim();
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(anyhow!("invalid placeholder name '{}'", name));
        }
        let value = if let Ok(n) = value.parse::<i64>() {
            ReplacementValue::Int(n)
        } else if let Ok(x) = value.parse::<f64>() {
            ReplacementValue::Float(x)
        } else {
            ReplacementValue::Text(value.to_string())
        };
        Ok((name.to_string(), value))
    }
}

impl<K: Into<String>, V: Into<ReplacementValue>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        for (name, value) in iter {
            replacements.insert(name, value);
        }
        replacements
    }
}

/// Replace every `{name}` in `template` whose `name` is in `replacements`.
///
/// Unknown tokens keep their braces. Substituted text is not scanned again,
/// so a value that itself looks like `{token}` is inserted literally.
pub fn interpolate<'a>(template: &'a str, replacements: &Replacements) -> Cow<'a, str> {
    if replacements.is_empty() {
        return Cow::Borrowed(template);
    }
    placeholder_pattern().replace_all(template, |caps: &Captures<'_>| {
        match replacements.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Names of the `{name}` tokens in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_pattern()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_tokens() {
        let r = Replacements::new().with("status", 500);
        assert_eq!(
            interpolate("API returned {status}", &r),
            "API returned 500"
        );
    }

    #[test]
    fn unknown_tokens_are_kept() {
        let r = Replacements::new().with("tab", "Themes");
        assert_eq!(
            interpolate("{tab} failed: {reason}", &r),
            "Themes failed: {reason}"
        );
    }

    #[test]
    fn repeated_tokens_all_replaced() {
        let r = Replacements::new().with("n", 2);
        assert_eq!(interpolate("{n} of {n}", &r), "2 of 2");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let r = Replacements::new().with("a", "{b}").with("b", "x");
        assert_eq!(interpolate("{a}", &r), "{b}");
    }

    #[test]
    fn icu_plural_passes_through() {
        let template = "{count, plural, one {Plugin # toggled} other {Plugins # toggled}}";
        let r = Replacements::new().with("count", 3);
        assert_eq!(interpolate(template, &r), template);
    }

    #[test]
    fn non_ascii_names_are_not_tokens() {
        let r = Replacements::new().with("名", "x");
        assert_eq!(interpolate("{名}", &r), "{名}");
        assert!(placeholders("{名}").is_empty());
    }

    #[test]
    fn empty_replacements_borrow() {
        let out = interpolate("{x}", &Replacements::new());
        assert!(matches!(out, Cow::Borrowed("{x}")));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(ReplacementValue::from(3).to_string(), "3");
        assert_eq!(ReplacementValue::from(-7i64).to_string(), "-7");
        assert_eq!(ReplacementValue::from(500.0).to_string(), "500");
        assert_eq!(ReplacementValue::from(1.5).to_string(), "1.5");
        assert_eq!(ReplacementValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(ReplacementValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(ReplacementValue::from(12usize).to_string(), "12");
    }

    #[test]
    fn large_and_tiny_numbers_use_exponent_form() {
        assert_eq!(ReplacementValue::from(1e21).to_string(), "1e+21");
        assert_eq!(ReplacementValue::from(-2.5e25).to_string(), "-2.5e+25");
        assert_eq!(ReplacementValue::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(ReplacementValue::from(1e-6).to_string(), "0.000001");
        assert_eq!(ReplacementValue::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(
            ReplacementValue::from(123456789012345680000.0).to_string(),
            "123456789012345680000"
        );
    }

    #[test]
    fn placeholder_names_in_order() {
        assert_eq!(
            placeholders("{tab} then {status} then {tab}"),
            vec!["tab", "status", "tab"]
        );
    }

    #[test]
    fn parse_assignments() {
        assert_eq!(
            Replacements::parse_assignment("status=500").unwrap(),
            ("status".to_string(), ReplacementValue::Int(500))
        );
        assert_eq!(
            Replacements::parse_assignment("ratio=0.25").unwrap(),
            ("ratio".to_string(), ReplacementValue::Float(0.25))
        );
        assert_eq!(
            Replacements::parse_assignment("tab=Cloud=Sync").unwrap(),
            ("tab".to_string(), ReplacementValue::Text("Cloud=Sync".to_string()))
        );
        assert!(Replacements::parse_assignment("novalue").is_err());
        assert!(Replacements::parse_assignment("bad name=1").is_err());
    }
}
