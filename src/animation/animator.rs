use std::time::Duration;

use crate::animation::clock::{TimerHandle, TimerHost};

/// Periodic ticking source.
///
/// Holds the interval handle only while running, so `is_animated()` and "a live interval exists"
/// are the same fact. Starting twice or stopping twice is a no-op.
#[derive(Debug)]
pub struct Animator {
    period: Duration,
    handle: Option<TimerHandle>,
}

impl Animator {
    /// Stopped animator that will tick every `period` once started.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether an interval is currently registered.
    pub fn is_animated(&self) -> bool {
        self.handle.is_some()
    }

    /// Live interval handle, if running.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Whether a delivered tick belongs to the live interval.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Register the interval. Returns `false` if already running.
    pub fn start(&mut self, host: &mut dyn TimerHost) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(host.set_interval(self.period));
        true
    }

    /// Cancel the interval. Returns `false` if not running.
    pub fn stop(&mut self, host: &mut dyn TimerHost) -> bool {
        match self.handle.take() {
            Some(handle) => {
                host.clear_interval(handle);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
