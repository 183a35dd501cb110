// SPDX-License-Identifier: PMPL-1.0-or-later

//! vencord-i18n: inspect and resolve Vencord settings-UI translations
//!
//! Resolves dotted keys the way the settings screens do, lists the tables,
//! and reports how complete each locale is against `en-US`.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vencord_i18n::diagnostics;
use vencord_i18n::i18n::{
    coverage, is_missing, Catalog, Locale, ReplacementValue, Replacements, Translator,
};
use vencord_i18n::settings::{self, Settings};

#[derive(Parser)]
#[command(name = "vencord-i18n")]
#[command(version)]
#[command(about = "Inspect and resolve Vencord settings-UI translations")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (JSON or YAML) holding the selected language
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Directory of <locale>.json / .yaml files merged over the built-in tables
    #[arg(long, global = true, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dotted key to display text
    Resolve {
        /// Key such as SETTINGS.PLUGINS.TITLE
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (default: from settings)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Placeholder value, repeatable
        #[arg(short = 'r', long = "replace", value_name = "NAME=VALUE", value_parser = parse_replacement)]
        replacements: Vec<(String, ReplacementValue)>,

        /// Fail when no locale has the key
        #[arg(long)]
        strict: bool,
    },

    /// List every key of a locale with its text
    Keys {
        /// Language to list (default: from settings)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Only keys starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// List supported languages as the language picker shows them
    Languages {
        /// Language to mark as selected (default: from settings)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Report per-locale completeness against en-US
    Coverage {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check translation tables and settings
    Doctor,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    #[value(name = "en-US")]
    EnUs,
    #[value(name = "zh-TW")]
    ZhTw,
    #[value(name = "zh-CN")]
    ZhCn,
}

impl From<LangArg> for Locale {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::EnUs => Locale::EnUs,
            LangArg::ZhTw => Locale::ZhTw,
            LangArg::ZhCn => Locale::ZhCn,
        }
    }
}

fn parse_replacement(raw: &str) -> Result<(String, ReplacementValue), String> {
    Replacements::parse_assignment(raw).map_err(|err| err.to_string())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let Cli {
        settings: settings_path,
        locales,
        verbose,
        command,
    } = Cli::parse();

    init_tracing(verbose);

    // `doctor` reports an unreadable settings file itself.
    let loaded = match &settings_path {
        Some(path) => match Settings::load(path) {
            Ok(loaded) => loaded,
            Err(err) if matches!(command, Commands::Doctor) => {
                tracing::debug!("settings not loaded: {:#}", err);
                Settings::default()
            }
            Err(err) => return Err(err),
        },
        None => Settings::default(),
    };
    settings::install(loaded.apply_env());

    let overridden;
    let catalog: &Catalog = match &locales {
        Some(dir) => {
            overridden = Catalog::with_overrides(dir)?;
            &overridden
        }
        None => Catalog::embedded(),
    };

    let pick = |lang: Option<LangArg>| lang.map(Locale::from).unwrap_or_else(settings::current_locale);

    match command {
        Commands::Resolve {
            key,
            lang,
            replacements,
            strict,
        } => {
            let locale = pick(lang);
            let translator = Translator::new(catalog, locale);
            let replacements: Replacements = replacements.into_iter().collect();

            let resolved = if replacements.is_empty() {
                translator.t(&key)
            } else {
                translator.t_with(&key, &replacements)
            };

            if is_missing(&key, &resolved) {
                tracing::debug!(%locale, key = %key, "no translation");
                if strict {
                    return Err(anyhow!(
                        "no translation for {} in {} or {}",
                        key,
                        locale,
                        Locale::BASE
                    ));
                }
            }
            println!("{}", resolved);
        }

        Commands::Keys { lang, prefix } => {
            let locale = pick(lang);
            let tree = catalog
                .tree(locale)
                .or_else(|| catalog.tree(Locale::BASE))
                .ok_or_else(|| anyhow!("no translations loaded"))?;

            let prefix = prefix.unwrap_or_default();
            for (key, text) in tree.leaves() {
                if key.starts_with(&prefix) {
                    println!("{} = {}", key.bold(), text);
                }
            }
        }

        Commands::Languages { lang } => {
            let translator = Translator::new(catalog, pick(lang));
            println!("{}", translator.t("SETTINGS.LANGUAGE").bold().yellow());
            for option in translator.language_options() {
                let marker = if option.selected { "*".green() } else { " ".normal() };
                println!(
                    "  {} {:<6} {} ({})",
                    marker,
                    option.locale.code(),
                    option.label,
                    option.locale.english_name()
                );
            }
        }

        Commands::Coverage { json } => {
            let report = coverage(catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(catalog, settings_path.as_deref())?;
        }
    }

    Ok(())
}
