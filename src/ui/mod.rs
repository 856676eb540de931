// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks: design tokens, widget styles, theming and
//! the notification banner.

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
