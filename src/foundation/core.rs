use std::time::Duration;

use crate::foundation::error::{CrossRotError, CrossRotResult};

pub use kurbo::{Affine, Point, Vec2};

/// Index of a frame pushed to a sink, in presentation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frames-per-second used when a frame stream is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, always > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated rate.
    pub fn new(num: u32, den: u32) -> CrossRotResult<Self> {
        if den == 0 {
            return Err(CrossRotError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CrossRotError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// One frame per tick: a 50 ms period plays back at 1000/50 = 20 fps.
    pub fn from_tick_period(period: Duration) -> CrossRotResult<Self> {
        let millis = u32::try_from(period.as_millis())
            .map_err(|_| CrossRotError::validation("tick period is too long"))?;
        Self::new(1000, millis)
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The raster backend addresses pixels with `u16`.
    pub const MAX_SIDE: u32 = u16::MAX as u32;

    /// Reject empty canvases and sides the raster backend cannot address.
    pub fn validate(self) -> CrossRotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CrossRotError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if self.width > Self::MAX_SIDE || self.height > Self::MAX_SIDE {
            return Err(CrossRotError::validation(format!(
                "canvas {}x{} exceeds {} px per side",
                self.width,
                self.height,
                Self::MAX_SIDE
            )));
        }
        Ok(())
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
