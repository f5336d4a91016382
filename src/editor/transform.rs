//! Canvas scale mathematics.
//!
//! The editor renders the image at `natural_size * scale` and maps pointer
//! positions back into image pixels with the inverse factor. Extracted for
//! testability.

use crate::model::Point;

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f32 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f32 = 3.0;
/// Multiplicative step for zoom in/out actions.
pub const SCALE_STEP: f32 = 1.2;

/// The single zoom factor between image pixels and canvas pixels.
///
/// Invariant: `screen = image * scale`, with the factor always clamped to
/// `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale(f32);

impl ViewScale {
    /// Create a scale, clamping into the allowed range.
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_SCALE, MAX_SCALE))
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    /// Multiply by [`SCALE_STEP`], saturating at [`MAX_SCALE`].
    pub fn zoom_in(&self) -> Self {
        Self::new(self.0 * SCALE_STEP)
    }

    /// Divide by [`SCALE_STEP`], saturating at [`MIN_SCALE`].
    pub fn zoom_out(&self) -> Self {
        Self::new(self.0 / SCALE_STEP)
    }

    /// Map an image point onto the canvas.
    pub fn to_screen(&self, point: Point) -> (f32, f32) {
        (point.x * self.0, point.y * self.0)
    }

    /// Map a canvas-relative position back into image pixels.
    pub fn to_image(&self, canvas_x: f32, canvas_y: f32) -> Point {
        Point::new(canvas_x / self.0, canvas_y / self.0)
    }

    /// Canvas size for an image of the given natural dimensions.
    pub fn scaled_size(&self, width: u32, height: u32) -> (f32, f32) {
        (width as f32 * self.0, height as f32 * self.0)
    }
}

impl Default for ViewScale {
    fn default() -> Self {
        Self(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_clamps_to_range() {
        assert_eq!(ViewScale::new(0.01).factor(), MIN_SCALE);
        assert_eq!(ViewScale::new(50.0).factor(), MAX_SCALE);
        assert_eq!(ViewScale::new(1.5).factor(), 1.5);
    }

    #[test]
    fn test_zoom_in_saturates_at_max() {
        let mut scale = ViewScale::new(2.8);
        scale = scale.zoom_in();
        assert_eq!(scale.factor(), MAX_SCALE);
    }

    #[test]
    fn test_zoom_out_saturates_at_min() {
        let mut scale = ViewScale::new(0.11);
        scale = scale.zoom_out();
        assert_eq!(scale.factor(), MIN_SCALE);
    }

    #[test]
    fn test_pointer_maps_by_inverse_scale() {
        // A canvas click at (cx, cy) must land on image point (cx/s, cy/s)
        // across the whole allowed range.
        for factor in [0.1, 0.5, 1.0, 1.7, 3.0] {
            let scale = ViewScale::new(factor);
            let point = scale.to_image(120.0, 90.0);
            assert!(approx_eq(point.x, 120.0 / factor));
            assert!(approx_eq(point.y, 90.0 / factor));
        }
    }

    #[test]
    fn test_screen_image_round_trip() {
        let scale = ViewScale::new(1.7);
        let original = Point::new(33.0, 47.5);
        let (sx, sy) = scale.to_screen(original);
        let back = scale.to_image(sx, sy);
        assert!(approx_eq(back.x, original.x));
        assert!(approx_eq(back.y, original.y));
    }

    #[test]
    fn test_scaled_size() {
        let scale = ViewScale::new(2.0);
        assert_eq!(scale.scaled_size(640, 480), (1280.0, 960.0));
    }
}
