use crate::foundation::color::Color;
use crate::render::context::{DrawContext, LineCap};

/// One call made on a [`DrawContext`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum DrawCall {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetFillStyle { color: Color },
    SetStrokeStyle { color: Color },
    SetLineWidth { width: f64 },
    SetLineCap { cap: LineCap },
}

/// [`DrawContext`] that records every call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were made.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.calls.push(DrawCall::Rotate { angle });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(DrawCall::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFillStyle { color });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.calls.push(DrawCall::SetStrokeStyle { color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth { width });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.calls.push(DrawCall::SetLineCap { cap });
    }
}
