// SPDX-License-Identifier: PMPL-1.0-or-later

//! A catalog bound to one locale.
//!
//! Settings screens resolve dozens of keys per render. Building a
//! `Translator` once and passing it down means the locale is read once and
//! every lookup below it agrees on the language.

use super::catalog::{is_missing, Catalog};
use super::interpolate::Replacements;
use super::locale::Locale;
use crate::settings;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Translator<'c> {
    catalog: &'c Catalog,
    locale: Locale,
}

/// One entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub locale: Locale,
    pub label: String,
    pub selected: bool,
}

impl<'c> Translator<'c> {
    pub fn new(catalog: &'c Catalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Same catalog, different language.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            catalog: self.catalog,
            locale,
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.resolve(self.locale, key, None)
    }

    pub fn t_with(&self, key: &str, replacements: &Replacements) -> String {
        self.catalog.resolve(self.locale, key, Some(replacements))
    }

    /// Translation of `key`, or `default` when no locale has it.
    pub fn t_or(&self, key: &str, default: &str) -> String {
        let resolved = self.catalog.resolve_str(self.locale, key);
        if is_missing(key, resolved) {
            default.to_string()
        } else {
            resolved.to_string()
        }
    }

    /// Display name for a plugin: `PLUGINS.<plugin>.name`, else the
    /// plugin's own identifier.
    pub fn plugin_name(&self, plugin: &str) -> String {
        self.t_or(&format!("PLUGINS.{}.name", plugin), plugin)
    }

    /// `PLUGINS.<plugin>.description`, else the description the plugin
    /// ships with.
    pub fn plugin_description(&self, plugin: &str, default: &str) -> String {
        self.t_or(&format!("PLUGINS.{}.description", plugin), default)
    }

    /// Whether a plugin card survives the plugin-list search box.
    ///
    /// Matches `query` case-insensitively against the plugin identifier, the
    /// description shown on the card (translated when a table has one) and
    /// the plugin's tags. An empty query matches everything.
    pub fn plugin_matches_search(
        &self,
        plugin: &str,
        description: &str,
        tags: &[&str],
        query: &str,
    ) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        plugin.to_lowercase().contains(&query)
            || self
                .plugin_description(plugin, description)
                .to_lowercase()
                .contains(&query)
            || tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }

    /// Options for the language select. Labels are each language's native
    /// name whatever the active locale.
    pub fn language_options(&self) -> Vec<LanguageOption> {
        Locale::all()
            .iter()
            .map(|&locale| LanguageOption {
                locale,
                label: locale.native_name().to_string(),
                selected: locale == self.locale,
            })
            .collect()
    }
}

impl Translator<'static> {
    pub fn embedded(locale: Locale) -> Self {
        Self::new(Catalog::embedded(), locale)
    }

    /// Embedded catalog in the locale the process-wide settings select.
    pub fn current() -> Self {
        Self::embedded(settings::current_locale())
    }
}
