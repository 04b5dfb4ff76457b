use crate::foundation::color::Color;

/// End cap of stroked lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    #[default]
    Butt,
    /// Half-disc past the endpoint.
    Round,
    /// Half-square past the endpoint.
    Square,
}

/// Immediate-mode 2D drawing surface, shaped after the HTML canvas API.
///
/// `save`/`restore` push and pop the transform together with the fill/stroke styles, line width
/// and line cap. Path construction is in user space of the current transform.
pub trait DrawContext {
    /// Push the current transform and styles.
    fn save(&mut self);
    /// Pop the most recently saved transform and styles. Unbalanced calls are ignored.
    fn restore(&mut self);
    /// Pre-multiply the transform by a translation.
    fn translate(&mut self, x: f64, y: f64);
    /// Pre-multiply the transform by a rotation, in radians, clockwise in screen space.
    fn rotate(&mut self, angle: f64);
    /// Discard the current path.
    fn begin_path(&mut self);
    /// Start a new subpath.
    fn move_to(&mut self, x: f64, y: f64);
    /// Add a straight segment.
    fn line_to(&mut self, x: f64, y: f64);
    /// Add a circular arc from `start_angle` to `end_angle` around `(x, y)`.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    /// Stroke the current path with the current stroke style.
    fn stroke(&mut self);
    /// Fill an axis-aligned rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Set the fill color.
    fn set_fill_style(&mut self, color: Color);
    /// Set the stroke color.
    fn set_stroke_style(&mut self, color: Color);
    /// Set the stroke width in user units.
    fn set_line_width(&mut self, width: f64);
    /// Set the stroke end cap.
    fn set_line_cap(&mut self, cap: LineCap);
}
