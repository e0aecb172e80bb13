// SPDX-License-Identifier: MPL-2.0
//! "Current wait" label in the hero section.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const WAIT_TIMES: [&str; 5] = ["10-15 min", "15-20 min", "20-25 min", "25-30 min", "5-10 min"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    current: &'static str,
}

impl WaitTime {
    /// Picks the initial label.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut wait = Self {
            current: WAIT_TIMES[0],
        };
        wait.rotate(rng);
        wait
    }

    /// Replaces the label with a uniformly random entry.
    pub fn rotate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(next) = WAIT_TIMES.choose(rng) {
            self.current = *next;
        }
    }

    pub fn current(&self) -> &'static str {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rotation_always_yields_known_label() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wait = WaitTime::new(&mut rng);
        for _ in 0..50 {
            wait.rotate(&mut rng);
            assert!(WAIT_TIMES.contains(&wait.current()));
        }
    }

    #[test]
    fn rotation_eventually_changes_label() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut wait = WaitTime::new(&mut rng);
        let first = wait.current();
        let changed = (0..100).any(|_| {
            wait.rotate(&mut rng);
            wait.current() != first
        });
        assert!(changed);
    }
}
