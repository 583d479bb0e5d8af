//! Click throttling for the copy-link action.
//!
//! Two states, `Idle` and `Cooling`. The first two clicks in a session
//! pass through; the third starts a 10-second lockout, and every click
//! during the lockout is rejected with the remaining wait. Expiry is
//! evaluated lazily on the next click (no timers), at which point the
//! count restarts from zero.
//!
//! Timestamps are injected so the machine is pure; the browser side
//! feeds it `Date.now()`.

/// Clicks allowed before the lockout engages.
pub const FREE_CLICKS: u32 = 2;

/// Lockout window in milliseconds.
pub const COOLDOWN_MS: f64 = 10_000.0;

/// What the click handler should do with this click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Perform the copy.
    Proceed,
    /// Suppress the copy and tell the user how long to wait.
    Cooling { retry_in_s: u32 },
}

/// Per-page-load throttle state. Never persisted.
#[derive(Debug, Default)]
pub struct CooldownGate {
    clicks: u32,
    cooldown_until_ms: f64,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click at `now_ms` and decide its outcome.
    pub fn register(&mut self, now_ms: f64) -> ClickOutcome {
        if self.cooldown_until_ms > now_ms {
            let remaining = ((self.cooldown_until_ms - now_ms) / 1000.0).ceil() as u32;
            return ClickOutcome::Cooling {
                retry_in_s: remaining.max(1),
            };
        }
        if self.cooldown_until_ms > 0.0 {
            // Lockout expired; start a fresh session.
            self.clicks = 0;
            self.cooldown_until_ms = 0.0;
        }

        self.clicks += 1;
        if self.clicks <= FREE_CLICKS {
            ClickOutcome::Proceed
        } else {
            self.cooldown_until_ms = now_ms + COOLDOWN_MS;
            ClickOutcome::Cooling {
                retry_in_s: (COOLDOWN_MS / 1000.0) as u32,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_clicks_proceed() {
        let mut gate = CooldownGate::new();
        assert_eq!(gate.register(0.0), ClickOutcome::Proceed);
        assert_eq!(gate.register(100.0), ClickOutcome::Proceed);
    }

    #[test]
    fn third_click_starts_lockout_without_copying() {
        let mut gate = CooldownGate::new();
        gate.register(0.0);
        gate.register(100.0);
        assert_eq!(
            gate.register(200.0),
            ClickOutcome::Cooling { retry_in_s: 10 }
        );
    }

    #[test]
    fn clicks_during_lockout_report_remaining_wait() {
        let mut gate = CooldownGate::new();
        gate.register(0.0);
        gate.register(0.0);
        gate.register(0.0); // lockout until 10_000
        assert_eq!(
            gate.register(7_500.0),
            ClickOutcome::Cooling { retry_in_s: 3 }
        );
        // ceil: 1ms left still reads as one second
        assert_eq!(
            gate.register(9_999.0),
            ClickOutcome::Cooling { retry_in_s: 1 }
        );
    }

    #[test]
    fn click_after_expiry_proceeds_and_resets_count() {
        let mut gate = CooldownGate::new();
        gate.register(0.0);
        gate.register(0.0);
        gate.register(0.0); // lockout until 10_000
        assert_eq!(gate.register(11_000.0), ClickOutcome::Proceed);
        // The reset means a full fresh allowance, not a leftover.
        assert_eq!(gate.register(11_100.0), ClickOutcome::Proceed);
        assert!(matches!(
            gate.register(11_200.0),
            ClickOutcome::Cooling { .. }
        ));
    }

    #[test]
    fn lockout_boundary_is_exclusive() {
        let mut gate = CooldownGate::new();
        gate.register(0.0);
        gate.register(0.0);
        gate.register(0.0); // lockout until 10_000
        assert_eq!(gate.register(10_000.0), ClickOutcome::Proceed);
    }
}
