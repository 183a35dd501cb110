// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported UI locales.
//!
//! The set is fixed at build time. `en-US` is the base locale: every other
//! locale falls back to it key by key.
//!
//! ## Adding a new locale
//!
//! 1. Add a variant to [`Locale`] with its `#[serde(rename)]` tag
//! 2. Add arms to `code()`, `from_code()`, `native_name()`, `english_name()`
//! 3. Append it to `Locale::all()`
//! 4. Drop `locales/<code>.json` next to the others and register it in
//!    `catalog::embedded_source()`

use serde::{Deserialize, Serialize};

/// A supported UI language/region tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// The authoritative fallback locale.
    pub const BASE: Locale = Locale::EnUs;

    /// Language-region tag for this locale, e.g. `"zh-TW"`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhTw => "zh-TW",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Parse a language-region tag into a supported locale.
    ///
    /// Matching is exact and case-sensitive (`"zh-tw"` is not `zh-TW`);
    /// surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim() {
            "en-US" => Some(Locale::EnUs),
            "zh-TW" => Some(Locale::ZhTw),
            "zh-CN" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// All supported locales, in language-select order.
    pub fn all() -> &'static [Locale] {
        &[Locale::EnUs, Locale::ZhTw, Locale::ZhCn]
    }

    pub fn is_base(&self) -> bool {
        *self == Locale::BASE
    }

    /// The locale's name written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::ZhTw => "繁體中文",
            Locale::ZhCn => "简体中文",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English (United States)",
            Locale::ZhTw => "Chinese (Traditional, Taiwan)",
            Locale::ZhCn => "Chinese (Simplified, China)",
        }
    }

    /// ISO 639-1 primary language subtag.
    pub fn language_subtag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en",
            Locale::ZhTw | Locale::ZhCn => "zh",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Whether `tag` has the shape of a language tag this crate could ever
/// support: a 2-3 letter lowercase language subtag, optionally followed by
/// `-` and a 2 letter uppercase region or a 3 digit UN M.49 area code.
///
/// A well-formed but unsupported tag (`"fr-FR"`) is an ordinary user choice
/// that we cannot honour yet; a malformed one (`"english"`) is a broken
/// settings file.
///
/// # Examples
/// ```
/// use vencord_i18n::i18n::is_well_formed_tag;
/// assert!(is_well_formed_tag("en-US"));
/// assert!(is_well_formed_tag("es-419"));
/// assert!(!is_well_formed_tag("English"));
/// ```
pub fn is_well_formed_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let language = parts.next().unwrap_or_default();
    if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }
    match (parts.next(), parts.next()) {
        (None, _) => true,
        (Some(region), None) => {
            (region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()))
                || (region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit()))
        }
        _ => false,
    }
}
