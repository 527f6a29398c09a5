//! Demo scenes.
//!
//! The [`Engine`] owns the renderer and the per-frame state of two demos:
//! a four-viewport orbiting-cube wireframe and a Pong match. Each frame the
//! caller feeds input and a time delta into [`Engine::update`] and then
//! blits [`Engine::frame_buffer`].
//!
//! The cube pipeline runs every edge through
//! model -> view -> orthographic projection -> NDC -> viewport mapping,
//! clips the resulting screen segment to its viewport rectangle, and hands
//! the survivors to the Bresenham line drawer. Matrices compose uniformly as
//! `projection * view * model`.

use rand::Rng;

use crate::camera::{Camera, OrbitCamera};
use crate::clip::{ClipRect, Segment2};
use crate::colors;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::{CUBE_EDGES, CUBE_VERTICES};
use crate::pong::{PaddleInput, PongState};
use crate::projection::Orthographic;
use crate::render::Renderer;
use crate::transform::Transform;
use crate::viewport::Viewport;

const ORBIT_RADIUS: f32 = 3.0;
const ORBIT_HEIGHT: f32 = 1.5;
const ORBIT_SPEED: f32 = 1.0; // radians per second
const CUBE_SPIN_SPEED: f32 = 0.4;

/// Fixed eye positions for the three non-orbiting viewports.
const FIXED_EYES: [Vec3; 3] = [
    Vec3::new(2.0, 2.0, 2.0),
    Vec3::new(3.0, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 3.0),
];

const VIEWPORT_COLORS: [u32; 4] = [colors::GREEN, colors::YELLOW, colors::CYAN, colors::MAGENTA];

/// Which demo the engine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    /// Orbiting wireframe cube in four viewports (key: 1)
    #[default]
    OrbitCube,
    /// Two-player Pong (key: 2)
    Pong,
}

pub struct Engine {
    renderer: Renderer,
    demo: Demo,
    orbit: OrbitCamera,
    projection: Orthographic,
    cube: Transform,
    pong: PongState,
}

impl Engine {
    pub fn new(width: u32, height: u32, rng: &mut impl Rng) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            demo: Demo::default(),
            orbit: OrbitCamera::new(Vec3::ZERO, ORBIT_RADIUS, ORBIT_HEIGHT),
            projection: Orthographic::symmetric(2.0, 0.0, -10.0),
            cube: Transform::new(),
            pong: PongState::new(width as f32, height as f32, rng),
        }
    }

    pub fn set_demo(&mut self, demo: Demo) {
        self.demo = demo;
    }

    pub fn demo(&self) -> Demo {
        self.demo
    }

    pub fn resize(&mut self, width: u32, height: u32, rng: &mut impl Rng) {
        self.renderer.resize(width, height);
        self.pong = PongState::new(width as f32, height as f32, rng);
    }

    /// Advances the active demo by `dt` seconds.
    pub fn update(&mut self, input: &PaddleInput, dt: f32, rng: &mut impl Rng) {
        match self.demo {
            Demo::OrbitCube => {
                self.orbit.advance(ORBIT_SPEED * dt);
                self.cube.rotate_y(CUBE_SPIN_SPEED * dt);
            }
            Demo::Pong => self.pong.update(input, dt, rng),
        }
    }

    /// Renders the active demo into the color buffer.
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);
        match self.demo {
            Demo::OrbitCube => self.render_cube_viewports(),
            Demo::Pong => self.pong.draw(&mut self.renderer),
        }
    }

    /// Returns the rendered frame as bytes (ARGB8888 format).
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Saves the current frame as a PNG.
    pub fn save_screenshot(&self, path: &str) -> Result<(), image::ImageError> {
        self.renderer.save_png(path)
    }

    fn render_cube_viewports(&mut self) {
        let half_w = self.renderer.width() as f32 / 2.0;
        let half_h = self.renderer.height() as f32 / 2.0;

        let cameras = [
            self.orbit.camera(),
            Camera::new(FIXED_EYES[0], Vec3::ZERO),
            Camera::new(FIXED_EYES[1], Vec3::ZERO),
            Camera::new(FIXED_EYES[2], Vec3::ZERO),
        ];
        let origins = [
            (0.0, 0.0),
            (half_w, 0.0),
            (0.0, half_h),
            (half_w, half_h),
        ];

        let proj = self.projection.matrix();
        let model = self.cube.to_matrix();

        for i in 0..4 {
            let (x, y) = origins[i];
            let view_proj = proj * cameras[i].view_matrix();
            self.render_wireframe(
                view_proj * model,
                Viewport::ndc_to_pixels(x, y, half_w, half_h),
                ClipRect::new(x, y, x + half_w - 1.0, y + half_h - 1.0),
                VIEWPORT_COLORS[i],
            );
        }
    }

    fn render_wireframe(&mut self, mvp: Mat4, viewport: Viewport, bounds: ClipRect, color: u32) {
        for &(a, b) in &CUBE_EDGES {
            let pa = (mvp * Vec4::from_point(CUBE_VERTICES[a])).to_cartesian();
            let pb = (mvp * Vec4::from_point(CUBE_VERTICES[b])).to_cartesian();

            let sa = viewport.map(Vec2::new(pa.x, pa.y));
            let sb = viewport.map(Vec2::new(pb.x, pb.y));

            if let Some(segment) = bounds.clip_segment(Segment2::new(sa, sb)) {
                self.renderer.draw_segment(segment, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> Engine {
        Engine::new(200, 150, &mut StdRng::seed_from_u64(1))
    }

    fn lit_pixels_in(e: &Engine, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
        let bytes = e.frame_buffer();
        let width = 200;
        let mut count = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = ((y * width + x) * 4) as usize;
                let pixel = u32::from_le_bytes(bytes[idx..idx + 4].try_into().unwrap());
                if pixel != crate::colors::BACKGROUND {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn cube_demo_draws_into_all_four_viewports() {
        let mut e = engine();
        e.render();

        assert!(lit_pixels_in(&e, 0, 0, 100, 75) > 0);
        assert!(lit_pixels_in(&e, 100, 0, 200, 75) > 0);
        assert!(lit_pixels_in(&e, 0, 75, 100, 150) > 0);
        assert!(lit_pixels_in(&e, 100, 75, 200, 150) > 0);
    }

    #[test]
    fn cube_edges_never_escape_their_viewport() {
        let mut e = engine();
        // A full orbit, checking containment at every step: the orbiting
        // viewport draws in green, and clipping must confine every green
        // pixel to the top-left quadrant.
        let mut r = StdRng::seed_from_u64(2);
        for _ in 0..130 {
            e.update(&PaddleInput::default(), 0.05, &mut r);
            e.render();

            let bytes = e.frame_buffer();
            for y in 0..150 {
                for x in 0..200 {
                    let idx = ((y * 200 + x) * 4) as usize;
                    let pixel = u32::from_le_bytes(bytes[idx..idx + 4].try_into().unwrap());
                    if pixel == crate::colors::GREEN {
                        assert!(x < 100 && y < 75, "green pixel escaped at ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn pong_demo_draws_paddles_at_the_edges() {
        let mut e = engine();
        e.set_demo(Demo::Pong);
        e.render();

        // Left paddle column.
        assert!(lit_pixels_in(&e, 0, 0, 20, 150) > 0);
        // Right paddle column.
        assert!(lit_pixels_in(&e, 180, 0, 200, 150) > 0);
    }
}
