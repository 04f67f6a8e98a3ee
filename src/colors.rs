//! Color packing helpers and the simulator palette.
//!
//! All colors are packed ARGB8888 (`0xAARRGGBB`), the same layout the SDL
//! streaming texture consumes, so the framebuffer can be uploaded without
//! conversion.

/// Background fill (near-black with a blue cast).
pub const BACKGROUND: u32 = rgb(10, 10, 15);
/// Faint grid lines (blended at low alpha).
pub const GRID: u32 = rgb(20, 20, 30);

/// Left ball ("ember") body and glow.
pub const EMBER_BASE: u32 = rgb(220, 80, 50);
pub const EMBER_GLOW: u32 = rgb(255, 120, 60);

/// Right ball ("ice") body and glow.
pub const ICE_BASE: u32 = rgb(50, 130, 220);
pub const ICE_GLOW: u32 = rgb(80, 180, 255);

/// Pivot anchors and the crossbar they hang from.
pub const PIVOT_GLOW: u32 = rgb(100, 100, 120);
pub const PIVOT_OUTLINE: u32 = rgb(80, 80, 100);
pub const CROSSBAR: u32 = rgb(60, 60, 75);
pub const STRING: u32 = rgb(100, 100, 110);

pub const WHITE: u32 = rgb(255, 255, 255);

const ALPHA_MASK: u32 = 0xFF00_0000;

/// Pack RGBA components into ARGB8888.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Pack an opaque RGB color.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    pack(r, g, b, 255)
}

/// Unpack into (r, g, b, a) components.
#[inline]
pub const fn unpack(color: u32) -> (u8, u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
        ((color >> 24) & 0xFF) as u8,
    )
}

/// Force the alpha channel to fully opaque.
#[inline]
pub const fn opaque(color: u32) -> u32 {
    color | ALPHA_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_roundtrip() {
        let c = pack(12, 34, 56, 78);
        assert_eq!(unpack(c), (12, 34, 56, 78));
    }

    #[test]
    fn test_rgb_is_opaque() {
        let (_, _, _, a) = unpack(rgb(1, 2, 3));
        assert_eq!(a, 255);
    }

    #[test]
    fn test_opaque_preserves_rgb() {
        let c = pack(9, 8, 7, 0);
        assert_eq!(unpack(opaque(c)), (9, 8, 7, 255));
    }
}
