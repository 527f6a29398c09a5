//! A small CPU-rendered computer-graphics toolkit.
//!
//! This crate collects the classic algorithms of a 2D/3D rendering
//! pipeline — Cohen-Sutherland line clipping, Bresenham line
//! rasterization, 4x4 transforms, the synthetic look-at camera and the
//! orthographic projection — as pure functions, plus a software renderer
//! and SDL2 window (used only for display) with demo scenes that drive
//! every algorithm each frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use wyre::prelude::*;
//!
//! let mut window = Window::new("My App", 800, 600)?;
//! let mut engine = Engine::new(800, 600, &mut rand::thread_rng());
//! ```

pub mod camera;
pub mod clip;
pub mod colors;
pub mod math;
pub mod mesh;
pub mod pong;
pub mod projection;
pub mod raster;
pub mod render;
pub mod scene;
pub mod transform;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use clip::{ClipRect, OutCode, Segment2};
pub use raster::LinePixels;
pub use scene::{Demo, Engine};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wyre::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, OrbitCamera};

    // Clipping & rasterization
    pub use crate::clip::{ClipRect, OutCode, Segment2};
    pub use crate::raster::LinePixels;

    // Scenes
    pub use crate::pong::{PaddleInput, PongState};
    pub use crate::scene::{Demo, Engine};

    // Projection & viewport
    pub use crate::projection::Orthographic;
    pub use crate::viewport::Viewport;

    // Transform
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::Renderer;

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}
