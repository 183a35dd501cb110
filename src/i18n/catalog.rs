// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog: one [`TranslationTree`] per [`Locale`], and the
//! resolver that walks them.
//!
//! The shipped tables live in `locales/<code>.json` and are embedded at
//! compile time; they are parsed once, on first use. A directory of
//! `<code>.json` / `<code>.yaml` files can be layered on top for local
//! overrides.
//!
//! Resolution never fails. A key missing from the active locale is retried
//! against `en-US`; a key missing there too comes back unchanged, so an
//! untranslated string shows up in the UI as its own dotted key.

use super::interpolate::{interpolate, Replacements};
use super::locale::Locale;
use super::tree::TranslationTree;
use anyhow::{anyhow, Context, Result};
use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const EN_US: &str = include_str!("../../locales/en-US.json");
const ZH_TW: &str = include_str!("../../locales/zh-TW.json");
const ZH_CN: &str = include_str!("../../locales/zh-CN.json");

fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUs => EN_US,
        Locale::ZhTw => ZH_TW,
        Locale::ZhCn => ZH_CN,
    }
}

const OVERRIDE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    trees: BTreeMap<Locale, TranslationTree>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped translation tables, parsed once per process.
    ///
    /// Embedded data is checked by the test suite; should it ever fail to
    /// parse, the error is logged and an empty catalog is used so lookups
    /// still degrade to the raw key.
    pub fn embedded() -> &'static Catalog {
        static EMBEDDED: OnceLock<Catalog> = OnceLock::new();
        EMBEDDED.get_or_init(|| match Catalog::from_embedded() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!("embedded translations unusable: {:#}", err);
                Catalog::new()
            }
        })
    }

    /// Parse the embedded tables into a fresh catalog.
    pub fn from_embedded() -> Result<Self> {
        let mut catalog = Catalog::new();
        for &locale in Locale::all() {
            let tree: TranslationTree = serde_json::from_str(embedded_source(locale))
                .with_context(|| format!("parsing embedded {} translations", locale))?;
            tracing::debug!(%locale, leaves = tree.leaf_count(), "loaded embedded translations");
            catalog.insert(locale, tree);
        }
        Ok(catalog)
    }

    /// Load `<code>.json`, `<code>.yaml` or `<code>.yml` for every supported
    /// locale found in `dir`. Locales without a file are simply absent.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(anyhow!("locale directory not found: {}", dir.display()));
        }

        let mut catalog = Catalog::new();
        for &locale in Locale::all() {
            let found = OVERRIDE_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", locale.code(), ext)))
                .find(|path| path.is_file());
            match found {
                Some(path) => {
                    let tree = read_tree(&path)?;
                    tracing::debug!(
                        %locale,
                        leaves = tree.leaf_count(),
                        path = %path.display(),
                        "loaded translation file"
                    );
                    catalog.insert(locale, tree);
                }
                None => tracing::debug!(%locale, dir = %dir.display(), "no translation file"),
            }
        }
        Ok(catalog)
    }

    /// The embedded tables with the files in `dir` merged over them.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        let mut catalog = Self::embedded().clone();
        catalog.merge(Self::load_dir(dir)?);
        Ok(catalog)
    }

    pub fn insert(&mut self, locale: Locale, tree: TranslationTree) {
        self.trees.insert(locale, tree);
    }

    /// Deep-merge every tree of `other` into this catalog.
    pub fn merge(&mut self, other: Catalog) {
        for (locale, tree) in other.trees {
            match self.trees.entry(locale) {
                Entry::Occupied(mut existing) => existing.get_mut().merge(tree),
                Entry::Vacant(slot) => {
                    slot.insert(tree);
                }
            }
        }
    }

    pub fn tree(&self, locale: Locale) -> Option<&TranslationTree> {
        self.trees.get(&locale)
    }

    /// Locales that have a tree registered.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.trees.keys().copied()
    }

    /// Leaf text for `key` under `locale`, falling back to the base locale.
    ///
    /// A locale with no tree at all reads from the base tree. A key that
    /// lands on a branch rather than a leaf counts as missing.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let base = self.trees.get(&Locale::BASE);
        let active = self.trees.get(&locale).or(base);
        if let Some(text) = active.and_then(|tree| tree.lookup(key)) {
            return Some(text);
        }
        if locale.is_base() {
            return None;
        }
        base?.lookup(key)
    }

    /// Like [`Catalog::lookup`], but a miss yields `key` itself.
    pub fn resolve_str<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key).unwrap_or(key)
    }

    /// Resolve `key` under `locale` and substitute `replacements` into it.
    ///
    /// Always returns displayable text: the translation, the base-locale
    /// translation, or the key unchanged. Replacements are only applied to a
    /// found translation, never to the echoed key.
    pub fn resolve(
        &self,
        locale: Locale,
        key: &str,
        replacements: Option<&Replacements>,
    ) -> String {
        match (self.lookup(locale, key), replacements) {
            (Some(template), Some(replacements)) => {
                interpolate(template, replacements).into_owned()
            }
            (Some(text), None) => text.to_string(),
            (None, _) => key.to_string(),
        }
    }
}

/// Whether `resolved` is the echo of an unresolved `key`.
///
/// This is how callers detect a missing translation; the resolver has no
/// other channel for it.
pub fn is_missing(key: &str, resolved: &str) -> bool {
    key == resolved
}

fn read_tree(path: &Path) -> Result<TranslationTree> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = decode_text(&raw)
        .with_context(|| format!("decoding {}", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("parsing json translations {}", path.display())),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("parsing yaml translations {}", path.display())),
        _ => Err(anyhow!(
            "unsupported translation file extension for {}",
            path.display()
        )),
    }
}

// Files saved by Windows editors often carry a UTF-8 or UTF-16 BOM; the BOM
// picks the decoder, plain UTF-8 otherwise.
pub(crate) fn decode_text(raw: &[u8]) -> Result<Cow<'_, str>> {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(raw);
    if had_errors {
        return Err(anyhow!("not valid {} text", encoding.name()));
    }
    Ok(text)
}
