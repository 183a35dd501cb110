// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the Vencord settings UI.
//!
//! ## Supported locales
//!
//! | Code  | Language              | Native name |
//! |-------|-----------------------|-------------|
//! | en-US | English (base)        | English     |
//! | zh-TW | Traditional Chinese   | 繁體中文     |
//! | zh-CN | Simplified Chinese    | 简体中文     |
//!
//! ## Design
//!
//! Keys are dotted paths into a nested table: `"SETTINGS.PLUGINS.TITLE"`,
//! `"PLUGINS.AlwaysAnimate.name"`. A lookup that misses in the active
//! locale is retried in `en-US`; if that misses too, the key itself is
//! returned. Lookups never panic and never return an error.
//!
//! Leaf strings may contain `{name}` placeholders, filled from a
//! [`Replacements`] map. Substitution is flat: ICU plural syntax present in
//! a few strings (`SETTINGS.PLUGINS.PLUGIN_TOGGLED`) is returned as-is.
//!
//! Prefer a [`Translator`] bound to an explicit locale. [`i18n`] reads the
//! process-wide settings on every call and is meant for the outermost
//! layer only.

mod catalog;
mod coverage;
mod interpolate;
mod locale;
mod translator;
mod tree;

pub use catalog::{is_missing, Catalog};
pub(crate) use catalog::decode_text;
pub use coverage::{coverage, CoverageReport, LocaleCoverage, PlaceholderMismatch};
pub use interpolate::{interpolate, placeholders, ReplacementValue, Replacements};
pub use locale::{is_well_formed_tag, Locale};
pub use translator::{LanguageOption, Translator};
pub use tree::{TranslationNode, TranslationTree};

use crate::settings;

/// Resolve `key` in the language selected by the process-wide settings.
///
/// ```
/// use vencord_i18n::i18n::{i18n, Replacements};
/// assert_eq!(i18n("SETTINGS.NOT.A.REAL.KEY", None), "SETTINGS.NOT.A.REAL.KEY");
/// ```
pub fn i18n(key: &str, replacements: Option<&Replacements>) -> String {
    Catalog::embedded().resolve(settings::current_locale(), key, replacements)
}

/// The locale [`i18n`] would use right now.
pub fn current_language() -> Locale {
    settings::current_locale()
}
