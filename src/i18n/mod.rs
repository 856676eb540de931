// SPDX-License-Identifier: MPL-2.0
//! User-facing strings.
//!
//! All text shown by the application lives in an embedded Fluent catalogue
//! (`assets/i18n/en-US.ftl`). Views and notifications refer to messages by
//! key and resolve them at render time.

pub mod fluent;

pub use fluent::I18n;
