use vello_cpu::kurbo as ck;

use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CrossRotError, CrossRotResult};
use crate::render::context::{DrawContext, LineCap};
use crate::render::frame::FrameRGBA;

/// Flattening tolerance for arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug)]
struct CanvasState {
    transform: ck::Affine,
    fill: Color,
    stroke: Color,
    line_width: f64,
    cap: LineCap,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: ck::Affine::IDENTITY,
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            line_width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

/// [`DrawContext`] that rasterizes one frame on the CPU with `vello_cpu`.
///
/// Paths are stored in device space as they are built, so a stroke uses the transform that was
/// current while its points were added.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    state: CanvasState,
    stack: Vec<CanvasState>,
    path: ck::BezPath,
    has_current_point: bool,
}

impl CpuCanvas {
    /// Fresh, fully transparent canvas.
    pub fn new(canvas: Canvas) -> CrossRotResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CrossRotError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CrossRotError::render("canvas height exceeds u16"))?;

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            state: CanvasState::default(),
            stack: Vec::new(),
            path: ck::BezPath::new(),
            has_current_point: false,
        })
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn device(&self, x: f64, y: f64) -> ck::Point {
        self.state.transform * ck::Point::new(x, y)
    }

    /// Scale applied to user-space lengths by the current transform.
    fn length_scale(&self) -> f64 {
        self.state.transform.determinant().abs().sqrt()
    }
}

impl DrawContext for CpuCanvas {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.transform =
            self.state.transform * ck::Affine::translate(ck::Vec2::new(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform * ck::Affine::rotate(angle);
    }

    fn begin_path(&mut self) {
        self.path = ck::BezPath::new();
        self.has_current_point = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        self.path.move_to(p);
        self.has_current_point = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        if self.has_current_point {
            self.path.line_to(p);
        } else {
            self.path.move_to(p);
            self.has_current_point = true;
        }
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let arc = ck::Arc {
            center: ck::Point::new(x, y),
            radii: ck::Vec2::new(radius, radius),
            start_angle,
            sweep_angle: end_angle - start_angle,
            x_rotation: 0.0,
        };
        let start = ck::Point::new(
            x + radius * start_angle.cos(),
            y + radius * start_angle.sin(),
        );
        if self.has_current_point {
            self.line_to(start.x, start.y);
        } else {
            self.move_to(start.x, start.y);
        }
        let transform = self.state.transform;
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.path.push(transform * el);
        }
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        let cap = match self.state.cap {
            LineCap::Butt => ck::Cap::Butt,
            LineCap::Round => ck::Cap::Round,
            LineCap::Square => ck::Cap::Square,
        };
        let stroke = ck::Stroke::new(self.state.line_width * self.length_scale()).with_caps(cap);
        let [r, g, b, a] = self.state.stroke.to_array();

        self.ctx.set_transform(ck::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.set_stroke(stroke);
        self.ctx.stroke_path(&self.path);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let [r, g, b, a] = self.state.fill.to_array();
        self.ctx.set_transform(self.state.transform);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_rect(&ck::Rect::new(x, y, x + width, y + height));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.cap = cap;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
