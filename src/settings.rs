// SPDX-License-Identifier: PMPL-1.0-or-later

//! User settings consumed by the translation layer.
//!
//! Only the `language` field matters here; everything else in a settings
//! document is ignored. Layering, lowest first: built-in default (`en-US`),
//! settings file, `VENCORD_LANGUAGE`, then whatever the caller sets
//! explicitly.
//!
//! The process-wide store at the bottom of this module is the single global
//! the crate keeps. Code that can get hold of a [`Locale`] cheaply should
//! pass it around (see [`crate::i18n::Translator`]) instead of reading the
//! store on every lookup.

use crate::i18n::{decode_text, is_well_formed_tag, Locale};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

pub const LANGUAGE_ENV: &str = "VENCORD_LANGUAGE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Selected UI language tag, e.g. `"zh-TW"`. Unset means `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Settings {
    pub const fn new() -> Self {
        Self { language: None }
    }

    pub fn with_language(locale: Locale) -> Self {
        Self {
            language: Some(locale.code().to_string()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading settings {}", path.display()))?;
        let content = decode_text(&raw)
            .with_context(|| format!("decoding settings {}", path.display()))?;
        let settings: Settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json settings {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml settings {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported settings extension for {}",
                    path.display()
                ))
            }
        };
        tracing::debug!(
            path = %path.display(),
            language = ?settings.language,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Let `VENCORD_LANGUAGE` override the stored language.
    pub fn apply_env(self) -> Self {
        self.apply_env_value(env::var(LANGUAGE_ENV).ok())
    }

    fn apply_env_value(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() {
                tracing::debug!(language = value, "language taken from {}", LANGUAGE_ENV);
                self.language = Some(value.to_string());
            }
        }
        self
    }

    /// The selected locale, or `en-US` when unset or not supported.
    pub fn locale(&self) -> Locale {
        let Some(code) = self.language.as_deref() else {
            return Locale::BASE;
        };
        if let Some(locale) = Locale::from_code(code) {
            return locale;
        }
        if is_well_formed_tag(code.trim()) {
            tracing::debug!(language = code, "unsupported language, using {}", Locale::BASE);
        } else {
            tracing::warn!(language = code, "malformed language tag, using {}", Locale::BASE);
        }
        Locale::BASE
    }
}

static CURRENT: RwLock<Settings> = RwLock::new(Settings::new());

/// Replace the process-wide settings.
pub fn install(settings: Settings) {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = settings;
}

pub fn set_language(locale: Locale) {
    CURRENT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .language = Some(locale.code().to_string());
}

pub fn snapshot() -> Settings {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The active locale according to the process-wide settings.
pub fn current_locale() -> Locale {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .locale()
}
