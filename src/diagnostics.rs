// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: self-checks over the loaded catalog and the settings that
//! pick the active language.

use crate::i18n::{coverage, Catalog, Locale};
use crate::settings::{Settings, LANGUAGE_ENV};
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(catalog: &Catalog, settings_path: Option<&Path>) -> Result<()> {
    println!("{}", "vencord-i18n self-diagnostics".bold().yellow());

    let checks = collect_checks(catalog, settings_path, env::var(LANGUAGE_ENV).ok());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect_checks(
    catalog: &Catalog,
    settings_path: Option<&Path>,
    env_language: Option<String>,
) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("vencord-i18n {}", env!("CARGO_PKG_VERSION")),
    ));

    for &locale in Locale::all() {
        checks.push(check_locale_tree(catalog, locale));
    }

    for entry in coverage(catalog).locales {
        let label = format!("coverage {}", entry.locale);
        let mut problems = Vec::new();
        if !entry.missing.is_empty() {
            problems.push(format!("{} keys fall back to {}", entry.missing.len(), Locale::BASE));
        }
        if !entry.extra.is_empty() {
            problems.push(format!("{} keys unknown to {}", entry.extra.len(), Locale::BASE));
        }
        if !entry.shape_conflicts.is_empty() {
            problems.push(format!("{} shape conflicts", entry.shape_conflicts.len()));
        }
        if !entry.placeholder_mismatches.is_empty() {
            problems.push(format!(
                "{} placeholder mismatches",
                entry.placeholder_mismatches.len()
            ));
        }
        if problems.is_empty() {
            checks.push(Diagnostic::ok(label, format!("{:.2}%", entry.coverage_percent)));
        } else {
            checks.push(Diagnostic::warning(
                label,
                format!("{:.2}% ({})", entry.coverage_percent, problems.join(", ")),
            ));
        }
    }

    checks.push(check_settings(settings_path));
    checks.push(check_env_language(env_language));
    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_locale_tree(catalog: &Catalog, locale: Locale) -> Diagnostic {
    let label = format!("catalog {}", locale);
    match catalog.tree(locale) {
        Some(tree) if !tree.is_empty() => {
            Diagnostic::ok(label, format!("{} keys", tree.leaf_count()))
        }
        _ if locale.is_base() => Diagnostic::error(
            label,
            "base locale has no translations; every lookup returns its key".to_string(),
        ),
        _ => Diagnostic::warning(
            label,
            format!("no translations (falls back to {})", Locale::BASE),
        ),
    }
}

fn check_settings(path: Option<&Path>) -> Diagnostic {
    let Some(path) = path else {
        return Diagnostic::ok(
            "settings file",
            format!("not given (language defaults to {})", Locale::BASE),
        );
    };
    if !path.is_file() {
        return Diagnostic::error("settings file", format!("{} missing", path.display()));
    }
    match Settings::load(path) {
        Ok(settings) => match settings.language.as_deref() {
            None => Diagnostic::ok(
                "settings file",
                format!("no language set (defaults to {})", Locale::BASE),
            ),
            Some(code) => match Locale::from_code(code) {
                Some(locale) => Diagnostic::ok("settings file", format!("language {}", locale)),
                None => Diagnostic::warning(
                    "settings file",
                    format!("unsupported language {:?} (using {})", code, Locale::BASE),
                ),
            },
        },
        Err(err) => Diagnostic::error("settings file", format!("{:#}", err)),
    }
}

fn check_env_language(value: Option<String>) -> Diagnostic {
    match value {
        Some(value) if !value.trim().is_empty() => match Locale::from_code(&value) {
            Some(locale) => Diagnostic::ok(LANGUAGE_ENV, format!("overrides language to {}", locale)),
            None => Diagnostic::warning(
                LANGUAGE_ENV,
                format!("unsupported language {:?} (ignored in favour of {})", value.trim(), Locale::BASE),
            ),
        },
        _ => Diagnostic::ok(LANGUAGE_ENV, "not set".to_string()),
    }
}
