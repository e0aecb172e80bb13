// SPDX-License-Identifier: MPL-2.0
//! Loyalty points display.
//!
//! Points are read from persisted state at startup and only ever shown.
//! Earning and redeeming points needs a booking backend that does not exist
//! yet, so nothing here increments the counter.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loyalty {
    points: u32,
}

impl Loyalty {
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Line written to the log at startup.
    pub fn log_line(&self) -> String {
        format!("Loyalty Points: {}", self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero_points() {
        assert_eq!(Loyalty::default().points(), 0);
    }

    #[test]
    fn log_line_shows_points() {
        assert_eq!(Loyalty::new(12).log_line(), "Loyalty Points: 12");
    }
}
