//! Frame orchestration: physics sub-stepping, scale animation, and the
//! draw sequence into the owned framebuffer.
//!
//! One frame is: clamp the delta time, run [`physics::SUB_STEPS`] equal
//! integrate+resolve slices, ease the radius multipliers (scaling variant),
//! then redraw the whole buffer back to front. The completed buffer is handed
//! to the display layer as raw bytes; the simulation never touches the window
//! itself.

use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::colors;
use crate::framebuffer::Framebuffer;
use crate::math::Vec2;
use crate::physics::{self, PendulumBody};
use crate::raster;
use crate::scale;

pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 700;

/// Upper bound on a frame's delta time; a stalled frame (debugger pause,
/// window drag) must not inject one huge destabilizing physics step.
const MAX_FRAME_DT: f32 = 0.05;

const PIVOT_Y: f32 = 80.0;
const PIVOT_SPREAD: f32 = 60.0;
const BALL_RADIUS: i32 = 28;
const GRID_SPACING: i32 = 60;
const GRID_ALPHA: u8 = 35;

/// What a primary pointer press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerAction {
    /// Reinitialize both bodies to their scripted starting state.
    #[default]
    Reset,
    /// Give both bodies a new random scale target (scaling variant).
    RandomizeScale,
}

/// Read-only per-body snapshot for an external text overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub angle_deg: f32,
    pub angular_vel: f32,
    pub scale_factor: f32,
    pub scale_target: f32,
}

pub struct Simulation {
    framebuffer: Framebuffer,
    bodies: [PendulumBody; 2],
    rng: Pcg32,
    pointer_action: PointerAction,
}

impl Simulation {
    pub fn new(width: u32, height: u32, pointer_action: PointerAction) -> Self {
        let mut sim = Self {
            framebuffer: Framebuffer::new(width, height),
            bodies: [Self::initial_body(width, 0), Self::initial_body(width, 1)],
            rng: Pcg32::seed_from_u64(0x5713_ab61),
            pointer_action,
        };
        info!(
            "simulation {}x{}, pointer action {:?}",
            width, height, pointer_action
        );
        sim.render();
        sim
    }

    fn initial_body(width: u32, index: usize) -> PendulumBody {
        let cx = width as f32 * 0.5;
        match index {
            // Left, ember, shorter arm, pulled left.
            0 => PendulumBody::new(
                Vec2::new(cx - PIVOT_SPREAD, PIVOT_Y),
                220.0,
                -0.65,
                BALL_RADIUS,
                colors::EMBER_BASE,
                colors::EMBER_GLOW,
            ),
            // Right, ice, longer arm, pulled right.
            _ => PendulumBody::new(
                Vec2::new(cx + PIVOT_SPREAD, PIVOT_Y),
                240.0,
                0.60,
                BALL_RADIUS,
                colors::ICE_BASE,
                colors::ICE_GLOW,
            ),
        }
    }

    /// Overwrite both bodies with their scripted starting state.
    ///
    /// Pure reinitialization: calling this twice in a row yields identical
    /// state both times.
    pub fn reset(&mut self) {
        let width = self.framebuffer.width();
        self.bodies[0] = Self::initial_body(width, 0);
        self.bodies[1] = Self::initial_body(width, 1);
        debug!("simulation reset");
    }

    /// Handle a primary pointer press per the configured action.
    pub fn pointer_pressed(&mut self) {
        match self.pointer_action {
            PointerAction::Reset => self.reset(),
            PointerAction::RandomizeScale => {
                let [a, b] = &mut self.bodies;
                scale::randomize_target(a, &mut self.rng);
                scale::randomize_target(b, &mut self.rng);
                debug!(
                    "scale targets randomized: {:.2}, {:.2}",
                    a.scale_target, b.scale_target
                );
            }
        }
    }

    /// Advance the physics by one frame of `dt` seconds (clamped).
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        let sub_dt = dt / physics::SUB_STEPS as f32;

        for _ in 0..physics::SUB_STEPS {
            let [a, b] = &mut self.bodies;
            physics::integrate(a, sub_dt);
            physics::integrate(b, sub_dt);
            physics::resolve_collision(a, b);
        }

        if self.pointer_action == PointerAction::RandomizeScale {
            // Once per frame, not per sub-step.
            for body in &mut self.bodies {
                scale::animate(body, dt);
            }
        }
    }

    /// Redraw the complete frame into the framebuffer.
    pub fn render(&mut self) {
        self.framebuffer.clear(colors::BACKGROUND);
        self.draw_grid();
        self.draw_pivots();
        self.draw_strings();

        // Back-to-front by tip x as a simple depth cue.
        let order = if self.bodies[0].tip.x < self.bodies[1].tip.x {
            [0, 1]
        } else {
            [1, 0]
        };
        for i in order {
            let body = self.bodies[i];
            self.draw_ball(&body);
        }
    }

    /// One full frame: physics then redraw.
    pub fn frame(&mut self, dt: f32) {
        self.advance(dt);
        self.render();
    }

    fn draw_grid(&mut self) {
        let w = self.framebuffer.width() as i32;
        let h = self.framebuffer.height() as i32;
        let mut x = 0;
        while x < w {
            raster::line(&mut self.framebuffer, x, 0, x, h - 1, colors::GRID, GRID_ALPHA);
            x += GRID_SPACING;
        }
        let mut y = 0;
        while y < h {
            raster::line(&mut self.framebuffer, 0, y, w - 1, y, colors::GRID, GRID_ALPHA);
            y += GRID_SPACING;
        }
    }

    fn draw_pivots(&mut self) {
        for body in self.bodies {
            let px = body.pivot.x as i32;
            let py = body.pivot.y as i32;
            raster::glow_ring(&mut self.framebuffer, px, py, 3, colors::PIVOT_GLOW);
            raster::circle_outline(&mut self.framebuffer, px, py, 4, colors::PIVOT_OUTLINE, 255);
        }

        // Crossbar the pivots hang from.
        let bar_left = self.bodies[0].pivot.x as i32 - 20;
        let bar_right = self.bodies[1].pivot.x as i32 + 20;
        let bar_y = PIVOT_Y as i32;
        raster::thick_line(
            &mut self.framebuffer,
            bar_left,
            bar_y,
            bar_right,
            bar_y,
            3,
            colors::CROSSBAR,
            255,
        );
    }

    fn draw_strings(&mut self) {
        for body in self.bodies {
            raster::thick_line(
                &mut self.framebuffer,
                body.pivot.x as i32,
                body.pivot.y as i32,
                body.tip.x as i32,
                body.tip.y as i32,
                2,
                colors::STRING,
                200,
            );
        }
    }

    fn draw_ball(&mut self, body: &PendulumBody) {
        let cx = body.tip.x as i32;
        let cy = body.tip.y as i32;
        let radius = body.effective_radius();

        raster::glow_ring(&mut self.framebuffer, cx, cy, radius + 6, body.glow_color);
        raster::fill_circle_shaded(
            &mut self.framebuffer,
            cx,
            cy,
            radius,
            body.base_color,
            body.glow_color,
        );
        raster::circle_outline(&mut self.framebuffer, cx, cy, radius, body.glow_color, 180);

        // Highlight ring offset toward the light source.
        raster::circle_outline(
            &mut self.framebuffer,
            cx - 2,
            cy - 2,
            (radius as f32 * 0.55) as i32,
            colors::WHITE,
            50,
        );
    }

    /// Completed frame as raw bytes for the display blit.
    pub fn frame_buffer(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    pub fn bodies(&self) -> &[PendulumBody; 2] {
        &self.bodies
    }

    /// Snapshot values for the external HUD overlay.
    pub fn hud(&self) -> [HudStats; 2] {
        self.bodies.map(|b| HudStats {
            angle_deg: b.angle_degrees(),
            angular_vel: b.angular_vel,
            scale_factor: b.scale_factor,
            scale_target: b.scale_target,
        })
    }

    /// Whether the tips are within collision-flash distance (HUD indicator).
    pub fn near_collision(&self) -> bool {
        let [a, b] = &self.bodies;
        let dist = (b.tip - a.tip).length();
        dist < (a.effective_radius() + b.effective_radius() + 5) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        for _ in 0..30 {
            sim.frame(1.0 / 60.0);
        }
        sim.reset();
        let first = *sim.bodies();
        sim.reset();
        assert_eq!(*sim.bodies(), first);
    }

    #[test]
    fn test_pointer_press_resets_classic_variant() {
        let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        let initial = *sim.bodies();
        for _ in 0..30 {
            sim.frame(1.0 / 60.0);
        }
        assert_ne!(*sim.bodies(), initial);
        sim.pointer_pressed();
        assert_eq!(*sim.bodies(), initial);
    }

    #[test]
    fn test_pointer_press_randomizes_scaling_variant() {
        let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::RandomizeScale);
        sim.pointer_pressed();
        let [a, b] = sim.hud();
        for stats in [a, b] {
            assert!((scale::SCALE_MIN..=scale::SCALE_MAX).contains(&stats.scale_target));
        }
        // The press changes targets only; the factor eases in over frames.
        assert_relative_eq!(a.scale_factor, 1.0);
        assert_relative_eq!(b.scale_factor, 1.0);
    }

    #[test]
    fn test_frame_dt_is_clamped() {
        let mut long = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        let mut capped = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        long.advance(10.0);
        capped.advance(0.05);
        assert_eq!(*long.bodies(), *capped.bodies());
    }

    #[test]
    fn test_initial_geometry_matches_script() {
        let sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        let [a, b] = sim.bodies();
        assert_relative_eq!(b.pivot.x - a.pivot.x, 120.0);
        assert_relative_eq!(a.length, 220.0);
        assert_relative_eq!(b.length, 240.0);
        assert_relative_eq!(a.angle, -0.65);
        assert_relative_eq!(b.angle, 0.60);
        assert_eq!(a.angular_vel, 0.0);
        assert_eq!(b.angular_vel, 0.0);
    }

    #[test]
    fn test_end_to_end_collision_and_bounded_velocity() {
        // Released from rest the pendulums must swing in, collide at least
        // once, separate, and never let damping-bounded |ω| diverge.
        let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        let mut collided = false;
        let mut was_separated_after = false;

        for _ in 0..300 {
            sim.advance(1.0 / 60.0);
            if sim.near_collision() {
                collided = true;
            } else if collided {
                was_separated_after = true;
            }
            for body in sim.bodies() {
                assert!(
                    body.angular_vel.abs() < 10.0,
                    "angular velocity diverged: {}",
                    body.angular_vel
                );
            }
        }

        assert!(collided, "tips never approached within collision distance");
        assert!(was_separated_after, "bodies never separated after contact");
    }

    #[test]
    fn test_render_writes_ball_pixels() {
        let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, PointerAction::Reset);
        sim.render();
        let fb = &sim.framebuffer;
        let tip = sim.bodies[0].tip;
        let center = fb.get_pixel(tip.x as i32, tip.y as i32).unwrap();
        assert_ne!(center, colors::opaque(colors::BACKGROUND));
    }
}
