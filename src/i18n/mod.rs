// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations are embedded from `assets/i18n/*.ftl`. A directory passed
//! with `--i18n-dir` can add locales or replace embedded ones.

pub mod fluent;
