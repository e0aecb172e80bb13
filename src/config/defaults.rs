// SPDX-License-Identifier: MPL-2.0
//! Default values for every configurable setting.
//!
//! # Categories
//!
//! - **Header**: Sticky header height used for anchor scrolling
//! - **Booking button**: Scroll distance before the floating button hides
//! - **Timers**: Wait-time rotation and contact form reset

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Height of the sticky header, subtracted from anchor scroll targets.
pub const DEFAULT_HEADER_OFFSET_PX: f32 = 100.0;

/// Smallest header offset accepted from the settings file.
pub const MIN_HEADER_OFFSET_PX: f32 = 0.0;

/// Largest header offset accepted from the settings file.
pub const MAX_HEADER_OFFSET_PX: f32 = 400.0;

// ==========================================================================
// Booking Button Defaults
// ==========================================================================

/// Scroll position past which scrolling down hides the booking button.
pub const DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX: f32 = 200.0;

pub const MIN_BOOK_BUTTON_HIDE_THRESHOLD_PX: f32 = 0.0;

pub const MAX_BOOK_BUTTON_HIDE_THRESHOLD_PX: f32 = 2000.0;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Interval between wait-time estimate changes (in seconds).
pub const DEFAULT_WAIT_TIME_INTERVAL_SECS: u64 = 300;

pub const MIN_WAIT_TIME_INTERVAL_SECS: u64 = 10;

pub const MAX_WAIT_TIME_INTERVAL_SECS: u64 = 3600;

/// Time the contact form shows "Sending..." before resetting (in seconds).
pub const DEFAULT_FORM_RESET_SECS: u64 = 3;

pub const MIN_FORM_RESET_SECS: u64 = 1;

pub const MAX_FORM_RESET_SECS: u64 = 30;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Salon phone number as displayed on the page.
pub const DEFAULT_PHONE: &str = "+1 (760) 881-3001";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_HEADER_OFFSET_PX >= MIN_HEADER_OFFSET_PX);
    assert!(DEFAULT_HEADER_OFFSET_PX >= MIN_HEADER_OFFSET_PX);
    assert!(DEFAULT_HEADER_OFFSET_PX <= MAX_HEADER_OFFSET_PX);

    assert!(MAX_BOOK_BUTTON_HIDE_THRESHOLD_PX >= MIN_BOOK_BUTTON_HIDE_THRESHOLD_PX);
    assert!(DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX >= MIN_BOOK_BUTTON_HIDE_THRESHOLD_PX);
    assert!(DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX <= MAX_BOOK_BUTTON_HIDE_THRESHOLD_PX);

    assert!(MIN_WAIT_TIME_INTERVAL_SECS > 0);
    assert!(MAX_WAIT_TIME_INTERVAL_SECS >= MIN_WAIT_TIME_INTERVAL_SECS);
    assert!(DEFAULT_WAIT_TIME_INTERVAL_SECS >= MIN_WAIT_TIME_INTERVAL_SECS);
    assert!(DEFAULT_WAIT_TIME_INTERVAL_SECS <= MAX_WAIT_TIME_INTERVAL_SECS);

    assert!(MIN_FORM_RESET_SECS > 0);
    assert!(MAX_FORM_RESET_SECS >= MIN_FORM_RESET_SECS);
    assert!(DEFAULT_FORM_RESET_SECS >= MIN_FORM_RESET_SECS);
    assert!(DEFAULT_FORM_RESET_SECS <= MAX_FORM_RESET_SECS);

    assert!(!DEFAULT_PHONE.is_empty());
};
