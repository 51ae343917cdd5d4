//! Study-time reward clock.
//!
//! Runs beside the drill and never touches vocabulary or session state.

use std::time::Duration;

/// Receives elapsed wall-clock time from the host loop.
pub trait ElapsedTick {
    fn tick(&mut self, elapsed: Duration);
}

/// Grants one reward per full interval of accumulated study time.
#[derive(Debug, Clone)]
pub struct RewardClock {
    interval: Duration,
    accumulated: Duration,
    rewards: u32,
}

impl RewardClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            rewards: 0,
        }
    }

    pub fn rewards(&self) -> u32 {
        self.rewards
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

impl Default for RewardClock {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl ElapsedTick for RewardClock {
    fn tick(&mut self, elapsed: Duration) {
        self.accumulated += elapsed;
        if self.interval.is_zero() {
            return;
        }
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            self.rewards += 1;
            tracing::debug!(rewards = self.rewards, "reward earned");
        }
    }
}
