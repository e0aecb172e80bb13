// SPDX-License-Identifier: MPL-2.0
//! Iced views for the salon page.

pub mod design_tokens;
pub mod lightbox_view;
pub mod navbar;
pub mod page;
pub mod styles;
