use crate::foundation::math::clamp01;

/// Progress added per tick for a single arm; a node advances `STEP_SPEED / factor` per tick.
pub const STEP_SPEED: f64 = 0.1;

/// A step finishes once progress has moved strictly more than this far from its start.
pub const COMPLETION_THRESHOLD: f64 = 1.0;

/// Which way progress (or the chain sweep) is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `+1`: towards resting state 1 / towards the chain tail.
    Forward,
    /// `-1`: towards resting state 0 / towards the chain head.
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// [`Direction::sign`] as `f64`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.sign())
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    fn from_sign(s: f64) -> Self {
        if s > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Result of one [`State::update`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepUpdate {
    /// No step in progress; nothing changed.
    Idle,
    /// Progress moved but the step is not finished.
    Advanced,
    /// The step finished on this tick and the state is idle again.
    Completed,
}

/// Progress tracker of a single node.
///
/// At rest `scale == prev_scale` and both are exactly `0.0` or `1.0`. Starting a step picks the
/// direction from the resting value (`1 - 2 * prev_scale`), so the same tracker toggles between
/// "activate" and "deactivate".
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    scale: f64,
    prev_scale: f64,
    dir: Option<Direction>,
    factor: usize,
}

impl State {
    /// Idle tracker at rest in state 0 for a node with `factor` arms.
    pub fn new(factor: usize) -> Self {
        Self {
            scale: 0.0,
            prev_scale: 0.0,
            dir: None,
            factor: factor.max(1),
        }
    }

    /// Advance progress by one tick.
    pub fn update(&mut self) -> StepUpdate {
        let Some(dir) = self.dir else {
            return StepUpdate::Idle;
        };

        self.scale += dir.as_f64() * (STEP_SPEED / self.factor as f64);
        if (self.scale - self.prev_scale).abs() > COMPLETION_THRESHOLD {
            self.scale = self.prev_scale + dir.as_f64();
            self.dir = None;
            self.prev_scale = self.scale;
            return StepUpdate::Completed;
        }
        StepUpdate::Advanced
    }

    /// Begin a step if idle. Returns `false` (and changes nothing) when a step is already running.
    pub fn start_updating(&mut self) -> bool {
        if self.dir.is_some() {
            return false;
        }
        self.dir = Some(Direction::from_sign(1.0 - 2.0 * self.prev_scale));
        true
    }

    /// Current progress.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Progress at the start of the current step (the resting value when idle).
    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    /// Active direction, `None` when idle.
    pub fn direction(&self) -> Option<Direction> {
        self.dir
    }

    /// Active direction as `-1 | 0 | 1`.
    pub fn dir(&self) -> i8 {
        self.dir.map_or(0, Direction::sign)
    }

    /// Whether a step is in progress.
    pub fn is_stepping(&self) -> bool {
        self.dir.is_some()
    }

    /// Number of arms.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Progress of arm `arm`, clamped to `0..=1`. Arms sweep one after another.
    pub fn arm_progress(&self, arm: usize) -> f64 {
        clamp01(self.scale * self.factor as f64 - arm as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
