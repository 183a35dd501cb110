// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation completeness against the base locale.
//!
//! Every non-base locale is compared leaf by leaf with `en-US`. Gaps are
//! harmless at runtime (the resolver falls back) but show up in the UI as
//! English text, so they are worth listing.

use super::catalog::Catalog;
use super::interpolate::placeholders;
use super::locale::Locale;
use super::tree::TranslationTree;
use colored::*;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub base: Locale,
    /// Leaves in the base locale.
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    /// Base keys this locale translates itself.
    pub translated: usize,
    /// Base keys served by fallback.
    pub missing: Vec<String>,
    /// Leaves the base locale does not have; never reached by fallback.
    pub extra: Vec<String>,
    /// Keys that are text in one locale and a branch in the other.
    pub shape_conflicts: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    pub coverage_percent: f32,
}

/// A translation whose `{name}` tokens differ from the base text's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub expected: Vec<String>,
    pub found: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.extra.is_empty()
            && self.shape_conflicts.is_empty()
            && self.placeholder_mismatches.is_empty()
    }
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }

    pub fn print(&self) {
        println!("{}", "TRANSLATION COVERAGE".bold().yellow());
        println!("  Base locale: {} ({} keys)", self.base, self.total_keys);
        println!();

        for entry in &self.locales {
            let percent = format!("{:>6.2}%", entry.coverage_percent);
            let percent = if entry.missing.is_empty() {
                percent.green()
            } else {
                percent.yellow()
            };
            println!(
                "  {} {} {}/{}",
                format!("{:<6}", entry.locale.code()).bold(),
                percent,
                entry.translated,
                self.total_keys
            );
            print_list("missing", &entry.missing);
            print_list("extra", &entry.extra);
            print_list("shape conflict", &entry.shape_conflicts);
            for mismatch in &entry.placeholder_mismatches {
                println!(
                    "      {} {} expected {{{}}} found {{{}}}",
                    "placeholders".red(),
                    mismatch.key,
                    mismatch.expected.join("}, {"),
                    mismatch.found.join("}, {")
                );
            }
        }
    }
}

fn print_list(label: &str, keys: &[String]) {
    for key in keys {
        println!("      {} {}", label.red(), key);
    }
}

/// Compare every registered non-base locale with the base locale.
pub fn coverage(catalog: &Catalog) -> CoverageReport {
    let empty = TranslationTree::new();
    let base = catalog.tree(Locale::BASE).unwrap_or(&empty);
    let base_leaves = base.leaves();
    let total_keys = base_leaves.len();

    let locales = catalog
        .locales()
        .filter(|locale| !locale.is_base())
        .filter_map(|locale| catalog.tree(locale).map(|tree| (locale, tree)))
        .map(|(locale, tree)| compare(locale, tree, base, &base_leaves))
        .collect();

    CoverageReport {
        base: Locale::BASE,
        total_keys,
        locales,
    }
}

fn compare(
    locale: Locale,
    tree: &TranslationTree,
    base: &TranslationTree,
    base_leaves: &[(String, &str)],
) -> LocaleCoverage {
    let mut translated = 0;
    let mut missing = Vec::new();
    let mut shape_conflicts = BTreeSet::new();
    let mut placeholder_mismatches = Vec::new();

    for (key, base_text) in base_leaves {
        match tree.get(key) {
            Some(node) => match node.as_leaf() {
                Some(text) => {
                    translated += 1;
                    if let Some(mismatch) = check_placeholders(key, base_text, text) {
                        placeholder_mismatches.push(mismatch);
                    }
                }
                None => {
                    shape_conflicts.insert(key.clone());
                    missing.push(key.clone());
                }
            },
            None => missing.push(key.clone()),
        }
    }

    let mut extra = Vec::new();
    for (key, _) in tree.leaves() {
        match base.get(&key) {
            Some(node) if node.is_branch() => {
                shape_conflicts.insert(key);
            }
            Some(_) => {}
            None => extra.push(key),
        }
    }

    let coverage_percent = if base_leaves.is_empty() {
        100.0
    } else {
        translated as f32 / base_leaves.len() as f32 * 100.0
    };

    LocaleCoverage {
        locale,
        translated,
        missing,
        extra,
        shape_conflicts: shape_conflicts.into_iter().collect(),
        placeholder_mismatches,
        coverage_percent,
    }
}

fn check_placeholders(key: &str, base_text: &str, text: &str) -> Option<PlaceholderMismatch> {
    let expected: BTreeSet<&str> = placeholders(base_text).into_iter().collect();
    let found: BTreeSet<&str> = placeholders(text).into_iter().collect();
    if expected == found {
        return None;
    }
    Some(PlaceholderMismatch {
        key: key.to_string(),
        expected: expected.into_iter().map(String::from).collect(),
        found: found.into_iter().map(String::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            Locale::EnUs,
            [
                ("A.TITLE", "Title"),
                ("A.ERROR", "Failed with {status}"),
                ("B", "Plain"),
                ("C", "Leaf here"),
            ]
            .into_iter()
            .collect(),
        );
        catalog.insert(
            Locale::ZhTw,
            [
                ("A.TITLE", "標題"),
                ("A.ERROR", "失敗 {code}"),
                ("C.SUB", "分支"),
                ("D", "多餘"),
            ]
            .into_iter()
            .collect(),
        );
        catalog
    }

    #[test]
    fn reports_gaps() {
        let report = coverage(&catalog());
        assert_eq!(report.total_keys, 4);
        assert_eq!(report.locales.len(), 1);

        let tw = &report.locales[0];
        assert_eq!(tw.locale, Locale::ZhTw);
        assert_eq!(tw.translated, 2);
        assert_eq!(tw.missing, vec!["B", "C"]);
        assert_eq!(tw.extra, vec!["C.SUB", "D"]);
        assert_eq!(tw.shape_conflicts, vec!["C"]);
        assert_eq!(
            tw.placeholder_mismatches,
            vec![PlaceholderMismatch {
                key: "A.ERROR".to_string(),
                expected: vec!["status".to_string()],
                found: vec!["code".to_string()],
            }]
        );
        assert!((tw.coverage_percent - 50.0).abs() < f32::EPSILON);
        assert!(!report.is_complete());
    }

    #[test]
    fn embedded_catalog_is_complete() {
        let report = coverage(Catalog::embedded());
        assert_eq!(report.locales.len(), 2);
        for entry in &report.locales {
            assert!(entry.is_complete(), "{} has gaps: {:?}", entry.locale, entry);
            assert!((entry.coverage_percent - 100.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn empty_base_is_fully_covered() {
        let mut catalog = Catalog::new();
        catalog.insert(Locale::ZhCn, TranslationTree::new());
        let report = coverage(&catalog);
        assert_eq!(report.total_keys, 0);
        assert_eq!(report.locales[0].coverage_percent, 100.0);
    }

    #[test]
    fn report_serializes() {
        let json = serde_json::to_value(coverage(&catalog())).unwrap();
        assert_eq!(json["base"], "en-US");
        assert_eq!(json["locales"][0]["locale"], "zh-TW");
    }
}
