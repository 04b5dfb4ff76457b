use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::animation::state::{COMPLETION_THRESHOLD, STEP_SPEED};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CrossRotError, CrossRotResult};

/// Nodes in the chain.
pub const DEFAULT_NODES: usize = 5;
/// Arms per node.
pub const DEFAULT_FACTOR: usize = 4;
/// Animator period in milliseconds.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 50;
/// Surface size used when the host does not supply one.
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 800,
    height: 400,
};
/// Surface clear color; not configurable.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0xBD, 0xBD, 0xBD);
/// Stroke color of circles and arms; not configurable.
pub const DEFAULT_STROKE: Color = Color::rgb(0x3F, 0x51, 0xB5);

/// Everything the composition layer needs at construction.
///
/// Every field is optional in JSON and falls back to the defaults above. Colors are fixed to
/// [`DEFAULT_BACKGROUND`] and [`DEFAULT_STROKE`]; unknown fields (including `background` and
/// `stroke`) are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    /// Drawing surface size.
    pub canvas: Canvas,
    /// Number of nodes in the chain.
    pub nodes: usize,
    /// Arms per node.
    pub factor: usize,
    /// Animator period in milliseconds.
    pub tick_period_ms: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            canvas: DEFAULT_CANVAS,
            nodes: DEFAULT_NODES,
            factor: DEFAULT_FACTOR,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }
}

impl StageConfig {
    /// Reject shapes the chain or the raster backend cannot handle.
    pub fn validate(&self) -> CrossRotResult<()> {
        self.canvas.validate()?;
        if self.nodes == 0 {
            return Err(CrossRotError::validation("nodes must be >= 1"));
        }
        if self.factor == 0 {
            return Err(CrossRotError::validation("factor must be >= 1"));
        }
        if self.tick_period_ms == 0 {
            return Err(CrossRotError::validation("tick_period_ms must be >= 1"));
        }
        Ok(())
    }

    /// Animator period.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Playback rate giving one frame per tick.
    pub fn fps(&self) -> CrossRotResult<Fps> {
        Fps::from_tick_period(self.tick_period())
    }

    /// Nominal ticks for one node to finish a step (`factor / STEP_SPEED`).
    ///
    /// Float accumulation can add one tick for some factors.
    pub fn nominal_ticks_per_step(&self) -> u64 {
        (COMPLETION_THRESHOLD * self.factor as f64 / STEP_SPEED).round() as u64
    }

    /// Nominal wall time of one step.
    pub fn nominal_step_duration(&self) -> Duration {
        self.tick_period() * u32::try_from(self.nominal_ticks_per_step()).unwrap_or(u32::MAX)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> CrossRotResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| CrossRotError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate JSON from a reader.
    pub fn from_json_reader(reader: impl Read) -> CrossRotResult<Self> {
        let cfg: Self =
            serde_json::from_reader(reader).map_err(|e| CrossRotError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> CrossRotResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/config.rs"]
mod tests;
