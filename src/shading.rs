//! Per-pixel shading for the scanline circle fill.
//!
//! Each ball is shaded as if it were a unit hemisphere seen face-on: the
//! z-component of the surface normal is reconstructed from the pixel's 2D
//! offset from the circle center. On top of that sit three terms:
//!
//! - **Lambert diffuse** against a fixed upper-left light direction
//! - **Phong-like specular**, raised to the 8th power by three squarings
//! - **Fresnel rim glow**, strongest at the silhouette edge
//!
//! The combined shade factor is deliberately allowed to reach 1.4 before the
//! final per-channel clamp, which produces overbright highlights.
//!
//! [`shade`] is a pure function of its inputs and is reproducible bit-for-bit,
//! which is what the numeric tests below rely on.

use crate::colors;

// Light direction (top-left), pre-normalized: (-0.5, -0.7) / sqrt(0.25 + 0.49).
const LIGHT_X: f32 = -0.5 / 0.8602;
const LIGHT_Y: f32 = -0.7 / 0.8602;

/// Shade one pixel of a filled circle.
///
/// `dx`, `dy` are the pixel's offset from the circle center and `inv_radius`
/// is `1 / radius`; `(dx, dy) · inv_radius` lands on the unit disc.
#[inline]
pub fn shade(dx: f32, dy: f32, inv_radius: f32, base: u32, glow: u32) -> u32 {
    // Distance from center, normalized [0, 1].
    let dist = (dx * dx + dy * dy).sqrt() * inv_radius;

    // Implied unit-sphere normal. The guard on nz2 cannot trigger for in-disc
    // pixels but protects callers passing points outside the silhouette.
    let nx = dx * inv_radius;
    let ny = dy * inv_radius;
    let nz2 = 1.0 - nx * nx - ny * ny;
    let nz = if nz2 > 0.0 { nz2.sqrt() } else { 0.0 };

    // Lambert diffuse; the light's z contribution is folded into the 0.7.
    let diff = (nx * LIGHT_X + ny * LIGHT_Y + nz * 0.7).max(0.0);

    // Phong specular (view along +Z), ^8 via successive squarings.
    let mut spec = (nz * 0.9 + diff * 0.3).max(0.0);
    spec *= spec;
    spec *= spec;
    spec *= spec;

    let shade = (0.12 + diff * 0.70 + spec * 0.50).clamp(0.0, 1.4);

    let (br, bg, bb, _) = colors::unpack(base);
    let (gr, gg, gb, _) = colors::unpack(glow);

    // Fresnel rim: the glow color bleeds in toward the edge.
    let rim = dist * dist;
    let r = (br as f32 * shade + gr as f32 * rim * 0.30).min(255.0);
    let g = (bg as f32 * shade + gg as f32 * rim * 0.30).min(255.0);
    let b = (bb as f32 * shade + gb as f32 * rim * 0.30).min(255.0);

    colors::rgb(r as u8, g as u8, b as u8)
}
