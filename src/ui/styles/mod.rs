// SPDX-License-Identifier: MPL-2.0
//! Styles shared by the page views.

pub mod button;
pub mod container;
