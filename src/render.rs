//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and
//! implements basic drawing operations. Line drawing walks the
//! [`LinePixels`] iterator; callers are expected to clip segments to their
//! viewport first, `set_pixel` only guards the buffer bounds.

use std::path::Path;

use crate::clip::Segment2;
use crate::colors;
use crate::raster::LinePixels;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line by walking the Bresenham pixel iterator.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        for (x, y) in LinePixels::new(x0, y0, x1, y1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Draws a real-valued segment, rounding endpoints to pixel centers.
    pub fn draw_segment(&mut self, segment: Segment2, color: u32) {
        self.draw_line(
            segment.start.x.round() as i32,
            segment.start.y.round() as i32,
            segment.end.x.round() as i32,
            segment.end.y.round() as i32,
            color,
        );
    }

    /// Returns the frame as bytes (ARGB8888 format) for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Frame contents re-ordered to RGBA8 for image encoding.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.color_buffer.len() * 4);
        for &pixel in &self.color_buffer {
            bytes.push((pixel >> 16) as u8);
            bytes.push((pixel >> 8) as u8);
            bytes.push(pixel as u8);
            bytes.push((pixel >> 24) as u8);
        }
        bytes
    }

    /// Saves the current frame as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.rgba_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut r = Renderer::new(4, 4);
        r.set_pixel(-1, 0, colors::WHITE);
        r.set_pixel(4, 0, colors::WHITE);
        r.set_pixel(0, 4, colors::WHITE);
        assert!(r
            .get_pixel(0, 0)
            .is_some_and(|c| c == colors::BACKGROUND));
    }

    #[test]
    fn draw_line_covers_both_endpoints() {
        let mut r = Renderer::new(16, 16);
        r.draw_line(1, 1, 10, 4, colors::GREEN);
        assert_eq!(r.get_pixel(1, 1), Some(colors::GREEN));
        assert_eq!(r.get_pixel(10, 4), Some(colors::GREEN));
    }

    #[test]
    fn draw_grid_marks_every_spacing_line() {
        let mut r = Renderer::new(8, 8);
        r.draw_grid(4, colors::GRID);
        assert_eq!(r.get_pixel(4, 1), Some(colors::GRID));
        assert_eq!(r.get_pixel(1, 4), Some(colors::GRID));
        assert_eq!(r.get_pixel(1, 1), Some(colors::BACKGROUND));
    }

    #[test]
    fn rgba_bytes_preserve_channel_order() {
        let mut r = Renderer::new(1, 1);
        r.clear(0xFFFF0000); // opaque red
        assert_eq!(r.rgba_bytes(), vec![0xFF, 0x00, 0x00, 0xFF]);
    }
}
