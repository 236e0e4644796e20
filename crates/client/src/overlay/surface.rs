use common::prelude::{FaceBox, Frame, Point};

/// Drawing surface the overlay loop composites onto.
///
/// Owned exclusively by one loop; nothing else draws to it. Coordinates
/// passed to `draw_box`/`draw_landmarks` are frame-native pixels, so
/// `begin_frame` must size the surface to the frame's native resolution
/// before anything is drawn.
pub trait OverlaySurface: Send {
    /// Resize to the frame's native resolution, clear prior drawing, and
    /// paint the frame itself as the base layer.
    fn begin_frame(&mut self, frame: &Frame);

    /// Composite a face bounding box over the base.
    fn draw_box(&mut self, face: &FaceBox);

    /// Composite small filled markers at each landmark point.
    fn draw_landmarks(&mut self, points: &[Point]);

    /// Flush the finished cycle to the display.
    fn present(&mut self);
}
