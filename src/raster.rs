//! Stateless 2D drawing algorithms over a [`Framebuffer`].
//!
//! Everything here is classic integer rasterization:
//!
//! - [`line`]: Bresenham's algorithm in the error-accumulator formulation
//! - [`thick_line`]: parallel Bresenham passes offset along the perpendicular
//! - [`circle_outline`]: midpoint circle, plotting all 8 octants per step
//! - [`fill_circle_shaded`]: scanline fill invoking the shading model per pixel
//! - [`glow_ring`]: scanline coverage with a radial alpha falloff
//!
//! The Bresenham tie-break (`e2 >= dy` / `e2 <= dx` against the doubled error)
//! is load-bearing: thick lines are built from parallel offset passes, and a
//! different tie-break would leave visible seams between them.

use crate::framebuffer::Framebuffer;
use crate::shading;

/// Draw a line with Bresenham's algorithm.
///
/// Visits every pixel on the 8-connected path between the endpoints exactly
/// once, including both endpoints. Coincident endpoints degenerate to a
/// single pixel.
pub fn line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32, alpha: u8) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        fb.blend_pixel(x, y, color, alpha);
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a thick line as `thickness` parallel Bresenham passes.
///
/// The passes are offset along the unit perpendicular at unit steps centered
/// on zero (thickness 3 gives offsets -1, 0, +1; even thicknesses use
/// half-integer offsets). A near-zero-length segment degenerates to a single
/// pixel write.
pub fn thick_line(
    fb: &mut Framebuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    color: u32,
    alpha: u8,
) {
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 {
        fb.blend_pixel(x0, y0, color, alpha);
        return;
    }

    // Perpendicular unit vector
    let px = -dy / len;
    let py = dx / len;

    let half = (thickness - 1) as f32 * 0.5;
    let mut i = -half;
    while i <= half {
        line(
            fb,
            (x0 as f32 + px * i) as i32,
            (y0 as f32 + py * i) as i32,
            (x1 as f32 + px * i) as i32,
            (y1 as f32 + py * i) as i32,
            color,
            alpha,
        );
        i += 1.0;
    }
}

/// Trace a circle outline with the midpoint algorithm.
///
/// Each decision step plots the 8 octant-symmetric points of the generated
/// `(x, y)` offset.
pub fn circle_outline(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: u32, alpha: u8) {
    let mut x = radius;
    let mut y = 0;
    let mut p = 1 - radius;

    while x >= y {
        fb.blend_pixel(cx + x, cy + y, color, alpha);
        fb.blend_pixel(cx - x, cy + y, color, alpha);
        fb.blend_pixel(cx + x, cy - y, color, alpha);
        fb.blend_pixel(cx - x, cy - y, color, alpha);
        fb.blend_pixel(cx + y, cy + x, color, alpha);
        fb.blend_pixel(cx - y, cy + x, color, alpha);
        fb.blend_pixel(cx + y, cy - x, color, alpha);
        fb.blend_pixel(cx - y, cy - x, color, alpha);

        y += 1;
        if p < 0 {
            p += 2 * y + 1;
        } else {
            x -= 1;
            p += 2 * (y - x) + 1;
        }
    }
}

/// Fill a circle scanline by scanline, shading every covered pixel.
///
/// For each row the covered x-span is the half-chord `sqrt(r² - dy²)` either
/// side of the center; each pixel inside it is run through
/// [`shading::shade`] and written at full opacity. No-op if `radius < 1`.
pub fn fill_circle_shaded(
    fb: &mut Framebuffer,
    cx: i32,
    cy: i32,
    radius: i32,
    base: u32,
    glow: u32,
) {
    if radius < 1 {
        return;
    }
    let inv_r = 1.0 / radius as f32;

    for y in (cy - radius)..=(cy + radius) {
        let dy = (y - cy) as f32;
        let disc = (radius * radius) as f32 - dy * dy;
        if disc < 0.0 {
            continue;
        }

        let half_chord = disc.sqrt();
        let x_left = (cx as f32 - half_chord) as i32;
        let x_right = (cx as f32 + half_chord) as i32;

        for x in x_left..=x_right {
            let dx = (x - cx) as f32;
            fb.set_pixel(x, y, shading::shade(dx, dy, inv_r, base, glow));
        }
    }
}

/// Fill a soft glow disc whose alpha fades to zero at the rim.
///
/// Same scanline coverage as [`fill_circle_shaded`], but each pixel is
/// blended with alpha `(1 - dist) * 70`; writes that would round below 1 are
/// skipped. No-op if `radius < 1`.
pub fn glow_ring(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius < 1 {
        return;
    }
    let inv_r = 1.0 / radius as f32;

    for y in (cy - radius)..=(cy + radius) {
        let dy = (y - cy) as f32;
        let disc = (radius * radius) as f32 - dy * dy;
        if disc < 0.0 {
            continue;
        }

        let half_chord = disc.sqrt();
        let x_left = (cx as f32 - half_chord) as i32;
        let x_right = (cx as f32 + half_chord) as i32;

        for x in x_left..=x_right {
            let dx = (x - cx) as f32;
            let dist = (dx * dx + dy * dy).sqrt() * inv_r;

            let alpha = (1.0 - dist) * 70.0;
            if alpha < 1.0 {
                continue;
            }

            fb.blend_pixel(x, y, color, alpha as u8);
        }
    }
}
