//! A two-pendulum collision simulator rendered entirely on the CPU.
//!
//! Every pixel is produced by hand-rolled rasterization (Bresenham lines,
//! midpoint circles, scanline fills with per-pixel shading) into an owned
//! framebuffer; SDL2 is used only to blit that buffer and poll input.
//!
//! # Quick Start
//!
//! ```ignore
//! use swingline::prelude::*;
//!
//! let mut window = Window::new("Pendulums", WINDOW_WIDTH, WINDOW_HEIGHT)?;
//! let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
//! sim.frame(1.0 / 60.0);
//! window.present(sim.frame_buffer())?;
//! ```

pub mod colors;
pub mod framebuffer;
pub mod math;
pub mod physics;
pub mod raster;
pub mod scale;
pub mod shading;
pub mod sim;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use framebuffer::Framebuffer;
pub use physics::PendulumBody;
pub use sim::{HudStats, PointerAction, Simulation};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use swingline::prelude::*;
/// ```
pub mod prelude {
    // Simulation
    pub use crate::sim::{HudStats, PointerAction, Simulation, WINDOW_HEIGHT, WINDOW_WIDTH};

    // Physics
    pub use crate::physics::PendulumBody;

    // Rendering
    pub use crate::framebuffer::Framebuffer;
    pub use crate::math::Vec2;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
