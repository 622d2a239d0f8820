/*!
 * Cadence Configuration
 * Timing for the poll and hobble loops
 */

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing configuration for the two hobbler loops.
///
/// The stopped/running ratio sets the duty cycle: with the production
/// values a target runs for roughly 10ms out of every 260ms, i.e. it is
/// paused ~96% of the time. The ratio is a tunable, not an invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cadence {
    /// Delay between membership polls
    pub poll_interval: Duration,

    /// How long targets stay stopped in each cycle
    pub stopped_hold: Duration,

    /// How long targets run before the next cycle begins
    pub running_hold: Duration,
}

impl Cadence {
    /// Production timing: slow polls, long holds
    pub fn production() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            stopped_hold: Duration::from_millis(250),
            running_hold: Duration::from_millis(10),
        }
    }

    /// Testing timing: everything shortened so tests can observe several
    /// polls and cycles per second. Similar duty ratio, timing only.
    pub fn testing() -> Self {
        Self {
            poll_interval: Duration::from_millis(300),
            stopped_hold: Duration::from_millis(120),
            running_hold: Duration::from_millis(5),
        }
    }

    /// Select the cadence for the CLI's fast/testing flag
    pub fn for_mode(testing: bool) -> Self {
        if testing {
            Self::testing()
        } else {
            Self::production()
        }
    }

    /// Wall-clock length of one full hobble cycle
    pub fn cycle(&self) -> Duration {
        self.stopped_hold + self.running_hold
    }
}
