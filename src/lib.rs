// SPDX-License-Identifier: PMPL-1.0-or-later

//! vencord-i18n: translation tables and key resolution for the Vencord
//! settings UI.
//!
//! MODULES:
//! 1. **i18n**: per-locale translation trees, the fallback resolver,
//!    placeholder substitution, and coverage checks.
//! 2. **settings**: the user's language choice, loaded from a settings
//!    file or the environment, and the process-wide store behind
//!    [`i18n::i18n`].
//! 3. **diagnostics**: `doctor` self-checks over both.

pub mod diagnostics;
pub mod i18n;
pub mod settings;
