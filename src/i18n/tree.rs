// SPDX-License-Identifier: PMPL-1.0-or-later

//! Nested translation tables.
//!
//! A tree node is either a leaf string or a branch of named children, so
//! "did traversal land on text?" is a match on the variant rather than a
//! runtime type check. On disk the tree is plain nested JSON/YAML objects
//! whose leaves are strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Branch(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(text) => Some(text),
            TranslationNode::Branch(_) => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, TranslationNode::Branch(_))
    }
}

/// One locale's translation table, addressed by dotted keys such as
/// `"SETTINGS.PLUGINS.TITLE"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk the tree one `.`-separated segment at a time.
    ///
    /// Returns `None` when a segment is absent or when a leaf is reached
    /// before the key is exhausted. Empty segments never match.
    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = match node {
                TranslationNode::Branch(children) => children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Leaf text at `key`; a branch at `key` counts as absent.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_leaf()
    }

    /// Set the leaf at `key`, creating intermediate branches.
    ///
    /// A leaf standing where a branch is needed is replaced, as is whatever
    /// previously occupied `key`.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut self.root, &segments, value.into());
    }

    /// Every leaf as `(dotted key, text)`, sorted by key.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_leaves(&self.root, "", &mut out);
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.root)
    }

    /// Deep-merge `other` into `self`. Branches merge recursively; anything
    /// else in `other` replaces what `self` had at that position.
    pub fn merge(&mut self, other: TranslationTree) {
        merge_maps(&mut self.root, other.root);
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TranslationTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = TranslationTree::new();
        for (key, value) in iter {
            tree.insert(key.as_ref(), value);
        }
        tree
    }
}

fn insert_path(map: &mut BTreeMap<String, TranslationNode>, segments: &[&str], value: String) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), TranslationNode::Leaf(value));
        }
        [head, rest @ ..] => {
            let node = map
                .entry((*head).to_string())
                .or_insert_with(|| TranslationNode::Branch(BTreeMap::new()));
            match node {
                TranslationNode::Branch(children) => insert_path(children, rest, value),
                TranslationNode::Leaf(_) => {
                    let mut children = BTreeMap::new();
                    insert_path(&mut children, rest, value);
                    *node = TranslationNode::Branch(children);
                }
            }
        }
    }
}

fn collect_leaves<'a>(
    map: &'a BTreeMap<String, TranslationNode>,
    prefix: &str,
    out: &mut Vec<(String, &'a str)>,
) {
    for (segment, node) in map {
        let key = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match node {
            TranslationNode::Leaf(text) => out.push((key, text.as_str())),
            TranslationNode::Branch(children) => collect_leaves(children, &key, out),
        }
    }
}

fn count_leaves(map: &BTreeMap<String, TranslationNode>) -> usize {
    map.values()
        .map(|node| match node {
            TranslationNode::Leaf(_) => 1,
            TranslationNode::Branch(children) => count_leaves(children),
        })
        .sum()
}

fn merge_maps(
    dst: &mut BTreeMap<String, TranslationNode>,
    src: BTreeMap<String, TranslationNode>,
) {
    for (segment, node) in src {
        match node {
            TranslationNode::Branch(children) => {
                if let Some(TranslationNode::Branch(existing)) = dst.get_mut(&segment) {
                    merge_maps(existing, children);
                    continue;
                }
                dst.insert(segment, TranslationNode::Branch(children));
            }
            leaf => {
                dst.insert(segment, leaf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTree {
        serde_json::from_str(
            r#"{
                "SETTINGS": {
                    "LANGUAGE": "Language",
                    "LANGUAGES": { "en-US": "English", "zh-TW": "繁體中文" },
                    "PLUGINS": { "TITLE": "Plugins" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_descends_to_leaf() {
        let tree = sample();
        assert_eq!(tree.lookup("SETTINGS.LANGUAGE"), Some("Language"));
        assert_eq!(tree.lookup("SETTINGS.LANGUAGES.zh-TW"), Some("繁體中文"));
    }

    #[test]
    fn branch_is_not_a_lookup_result() {
        let tree = sample();
        assert!(tree.get("SETTINGS.PLUGINS").unwrap().is_branch());
        assert_eq!(tree.lookup("SETTINGS.PLUGINS"), None);
    }

    #[test]
    fn traversal_stops_at_leaf() {
        let tree = sample();
        assert_eq!(tree.get("SETTINGS.LANGUAGE.EXTRA"), None);
    }

    #[test]
    fn empty_segments_never_match() {
        let tree = sample();
        assert_eq!(tree.get(""), None);
        assert_eq!(tree.get("SETTINGS..LANGUAGE"), None);
        assert_eq!(tree.get("SETTINGS.LANGUAGE."), None);
    }

    #[test]
    fn insert_builds_and_replaces() {
        let mut tree = TranslationTree::new();
        tree.insert("A.B", "leaf");
        assert_eq!(tree.lookup("A.B"), Some("leaf"));

        tree.insert("A.B.C", "deeper");
        assert_eq!(tree.lookup("A.B"), None);
        assert_eq!(tree.lookup("A.B.C"), Some("deeper"));

        // A leaf several levels up gives way to the whole new path.
        tree.insert("A.B.C.D.E", "deepest");
        assert_eq!(tree.lookup("A.B.C"), None);
        assert_eq!(tree.lookup("A.B.C.D.E"), Some("deepest"));
        assert_eq!(tree.leaf_count(), 1);

        tree.insert("A", "flat");
        assert_eq!(tree.lookup("A"), Some("flat"));
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn leaves_are_flattened_and_sorted() {
        let tree = sample();
        let keys: Vec<String> = tree.leaves().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "SETTINGS.LANGUAGE",
                "SETTINGS.LANGUAGES.en-US",
                "SETTINGS.LANGUAGES.zh-TW",
                "SETTINGS.PLUGINS.TITLE",
            ]
        );
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn merge_overrides_leaves_and_keeps_siblings() {
        let mut tree = sample();
        let overrides: TranslationTree = [
            ("SETTINGS.PLUGINS.TITLE", "Add-ons"),
            ("SETTINGS.THEMES.TITLE", "Themes"),
        ]
        .into_iter()
        .collect();
        tree.merge(overrides);

        assert_eq!(tree.lookup("SETTINGS.PLUGINS.TITLE"), Some("Add-ons"));
        assert_eq!(tree.lookup("SETTINGS.THEMES.TITLE"), Some("Themes"));
        assert_eq!(tree.lookup("SETTINGS.LANGUAGE"), Some("Language"));
    }

    #[test]
    fn non_string_leaves_are_rejected() {
        let parsed: Result<TranslationTree, _> = serde_json::from_str(r#"{"A": 1}"#);
        assert!(parsed.is_err());
    }
}
