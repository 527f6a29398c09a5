//! Window-to-viewport mapping.
//!
//! Linearly maps points from a source rectangle (a world window, or the NDC
//! square after projection) onto a destination rectangle. The destination
//! bounds may be given in either order per axis, which is how the NDC-to-
//! pixel mapping flips y for a framebuffer whose rows grow downward.

use crate::clip::ClipRect;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    src: ClipRect,
    dst_x_min: f32,
    dst_y_min: f32,
    dst_x_max: f32,
    dst_y_max: f32,
}

impl Viewport {
    /// Creates a mapping from `src` onto the destination bounds.
    ///
    /// `dst_y_min` is where `src.y_min` lands, so an inverted destination
    /// pair flips the axis.
    ///
    /// # Panics
    ///
    /// Panics if the source rectangle has zero extent on either axis (the
    /// extents are denominators of the map).
    pub fn new(src: ClipRect, dst_x_min: f32, dst_y_min: f32, dst_x_max: f32, dst_y_max: f32) -> Self {
        assert!(src.x_max != src.x_min, "viewport source window has zero width");
        assert!(src.y_max != src.y_min, "viewport source window has zero height");
        Self {
            src,
            dst_x_min,
            dst_y_min,
            dst_x_max,
            dst_y_max,
        }
    }

    /// Maps the NDC square [-1, 1]^2 onto a pixel sub-rectangle, flipping y
    /// so NDC +1 lands on the top row.
    pub fn ndc_to_pixels(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            ClipRect::new(-1.0, -1.0, 1.0, 1.0),
            x,
            y + height,
            x + width,
            y,
        )
    }

    /// Maps a point from the source window into the destination rectangle.
    pub fn map(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.dst_x_min
                + (p.x - self.src.x_min) * (self.dst_x_max - self.dst_x_min)
                    / (self.src.x_max - self.src.x_min),
            self.dst_y_min
                + (p.y - self.src.y_min) * (self.dst_y_max - self.dst_y_min)
                    / (self.src.y_max - self.src.y_min),
        )
    }
}
