use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque id of a repeating interval registered on a [`TimerHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// Scheduling primitive of the host environment.
///
/// A host delivers ticks for each live interval at its period, one at a time and in due order,
/// and never delivers a tick for an interval after `clear_interval` returned.
pub trait TimerHost {
    /// Register a repeating interval; the first tick is due one `period` from now.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;
    /// Cancel an interval. Unknown or already cleared handles are ignored.
    fn clear_interval(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// Deterministic virtual-time [`TimerHost`].
///
/// Time only moves when the caller pulls ticks with [`ManualClock::pop_due`] or jumps with
/// [`ManualClock::advance_to`], which makes whole interactions reproducible frame for frame.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<u64, Interval>,
}

impl ManualClock {
    /// Clock at time zero with no intervals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of registered intervals.
    pub fn live_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Whether `handle` is still registered.
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.intervals.contains_key(&handle.0)
    }

    /// Time of the earliest pending tick, if any interval is live.
    pub fn next_due(&self) -> Option<Duration> {
        self.intervals.values().map(|i| i.next_due).min()
    }

    /// Deliver the earliest tick due at or before `until`.
    ///
    /// Moves `now` to the tick's due time and schedules the interval's next tick. Ties go to the
    /// interval registered first.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (&id, _) = self
            .intervals
            .iter()
            .filter(|(_, i)| i.next_due <= until)
            .min_by_key(|(id, i)| (i.next_due, **id))?;
        let interval = self.intervals.get_mut(&id)?;
        self.now = self.now.max(interval.next_due);
        interval.next_due = interval.next_due.saturating_add(interval.period);
        Some(TimerHandle(id))
    }

    /// Jump to `t` without delivering ticks.
    ///
    /// Ticks that would have fired before `t` are skipped; each interval resumes on its next period
    /// boundary at or after `t`. Drain with [`ManualClock::pop_due`] first to deliver them instead.
    pub fn advance_to(&mut self, t: Duration) {
        if t <= self.now {
            return;
        }
        self.now = t;
        for interval in self.intervals.values_mut() {
            if interval.next_due >= t {
                continue;
            }
            let period = interval.period.as_nanos();
            let missed = (t - interval.next_due).as_nanos().div_ceil(period);
            // Past the representable range the interval simply resumes at `t`.
            interval.next_due = period
                .checked_mul(missed)
                .and_then(nanos_to_duration)
                .and_then(|skip| interval.next_due.checked_add(skip))
                .unwrap_or(t);
        }
    }
}

fn nanos_to_duration(nanos: u128) -> Option<Duration> {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}

impl TimerHost for ManualClock {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(Duration::from_nanos(1));
        let id = self.next_id;
        self.next_id += 1;
        self.intervals.insert(
            id,
            Interval {
                period,
                next_due: self.now.saturating_add(period),
            },
        );
        tracing::trace!(id, ?period, "interval registered");
        TimerHandle(id)
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if self.intervals.remove(&handle.0).is_some() {
            tracing::trace!(id = handle.0, "interval cleared");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
