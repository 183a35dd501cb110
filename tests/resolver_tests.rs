// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolution scenarios against the shipped translation tables

use std::fs;
use tempfile::TempDir;
use vencord_i18n::i18n::{is_missing, Catalog, Locale, Replacements, TranslationTree, Translator};

#[test]
fn test_language_label_per_locale() {
    let en = Translator::embedded(Locale::EnUs);
    assert_eq!(en.t("SETTINGS.LANGUAGE"), "Language");
    assert_eq!(en.with_locale(Locale::ZhTw).t("SETTINGS.LANGUAGE"), "語言");
    assert_eq!(en.with_locale(Locale::ZhCn).t("SETTINGS.LANGUAGE"), "语言");
}

#[test]
fn test_erase_failed_interpolates_status() {
    let tr = Translator::embedded(Locale::EnUs);
    let r = Replacements::new().with("status", 500);
    assert_eq!(
        tr.t_with("SETTINGS.CLOUD.ERASE_FAILED", &r),
        "Failed to clear all data (API returned 500), please contact support."
    );

    let tw = tr.with_locale(Locale::ZhTw);
    assert_eq!(
        tw.t_with("SETTINGS.CLOUD.ERASE_FAILED", &r),
        "無法清除所有數據（API 返回 500），請聯繫支持。"
    );
}

#[test]
fn test_unknown_key_is_echoed_in_every_locale() {
    for locale in Locale::all() {
        let tr = Translator::embedded(*locale);
        assert_eq!(tr.t("SETTINGS.NOT.A.REAL.KEY"), "SETTINGS.NOT.A.REAL.KEY");
    }
}

#[test]
fn test_subtree_key_is_echoed() {
    let tr = Translator::embedded(Locale::ZhCn);
    assert_eq!(tr.t("SETTINGS.LANGUAGES"), "SETTINGS.LANGUAGES");
    assert_eq!(tr.t("SETTINGS"), "SETTINGS");
}

#[test]
fn test_plural_template_is_not_interpreted() {
    let tr = Translator::embedded(Locale::EnUs);
    let r = Replacements::new().with("count", 3);
    assert_eq!(
        tr.t_with("SETTINGS.PLUGINS.PLUGIN_TOGGLED", &r),
        "{count, plural, one {Plugin # toggled} other {Plugins # toggled}}"
    );
}

#[test]
fn test_tab_error_keeps_unknown_placeholder() {
    let tr = Translator::embedded(Locale::EnUs);
    let r = Replacements::new().with("other", "x");
    assert_eq!(
        tr.t_with("SETTINGS.TAB_ERROR", &r),
        "Failed to render the {tab} tab. If this issue persists, try using the installer to reinstall!"
    );
}

#[test]
fn test_translate_plugin_keys_degrade_to_key() {
    // The translate plugin asks for keys no table defines yet.
    let tr = Translator::embedded(Locale::ZhTw);
    let key = "PLUGINS.Translate.showChatBarButton";
    assert!(is_missing(key, &tr.t(key)));
}

#[test]
fn test_partial_locale_falls_back_per_key() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en-US.json"),
        r#"{"SETTINGS": {"TITLE": "Settings", "HINT": "A hint"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("zh-TW.yaml"),
        "SETTINGS:\n  TITLE: 設定\n",
    )
    .unwrap();

    let catalog = Catalog::load_dir(dir.path()).unwrap();
    let tw = Translator::new(&catalog, Locale::ZhTw);
    assert_eq!(tw.t("SETTINGS.TITLE"), "設定");
    assert_eq!(tw.t("SETTINGS.HINT"), "A hint");

    // No zh-CN file: the whole locale reads from en-US.
    let cn = tw.with_locale(Locale::ZhCn);
    assert_eq!(cn.t("SETTINGS.TITLE"), "Settings");
}

#[test]
fn test_overrides_only_touch_given_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en-US.json"),
        r#"{"SETTINGS": {"PLUGINS": {"TITLE": "Extensions"}}}"#,
    )
    .unwrap();

    let catalog = Catalog::with_overrides(dir.path()).unwrap();
    let en = Translator::new(&catalog, Locale::EnUs);
    assert_eq!(en.t("SETTINGS.PLUGINS.TITLE"), "Extensions");
    assert_eq!(en.t("SETTINGS.PLUGINS.SEARCH"), "Search for plugins...");
    assert_eq!(
        en.with_locale(Locale::ZhTw).t("SETTINGS.PLUGINS.TITLE"),
        "插件"
    );
}

#[test]
fn test_every_base_leaf_resolves_in_every_locale() {
    let catalog = Catalog::embedded();
    let base: &TranslationTree = catalog.tree(Locale::BASE).unwrap();
    for (key, _) in base.leaves() {
        for locale in Locale::all() {
            let resolved = catalog.resolve(*locale, &key, None);
            assert!(
                !is_missing(&key, &resolved),
                "{} should resolve under {}",
                key,
                locale
            );
        }
    }
}
