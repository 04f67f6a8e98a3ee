//! Owning frame buffer with bounds-checked, alpha-blended pixel access.
//!
//! The buffer is a flat `Vec<u32>` of ARGB8888 samples, sized once at
//! construction and reused every frame. All drawing routines write through
//! [`Framebuffer::set_pixel`] / [`Framebuffer::blend_pixel`]; out-of-bounds
//! writes are silently discarded rather than treated as errors.

use crate::colors;

pub struct Framebuffer {
    buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole buffer with `color`, alpha forced to fully opaque.
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(colors::opaque(color));
    }

    /// Opaque pixel overwrite. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.buffer[idx] = colors::opaque(color);
        }
    }

    /// Composite a pixel over the existing sample using straight alpha.
    ///
    /// `alpha == 255` overwrites directly. Otherwise each channel becomes
    /// `src·a + dst·dst_a·(1−a)` and the stored alpha `a + dst_a·(1−a)`,
    /// truncated to 8 bits. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: u8) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;

        if alpha == 255 {
            self.buffer[idx] = colors::opaque(color);
            return;
        }

        let (sr, sg, sb, _) = colors::unpack(color);
        let (dr, dg, db, da) = colors::unpack(self.buffer[idx]);

        let fa = alpha as f32 / 255.0;
        let fb = (da as f32 / 255.0) * (1.0 - fa);

        let out_r = (sr as f32 * fa + dr as f32 * fb).min(255.0) as u8;
        let out_g = (sg as f32 * fa + dg as f32 * fb).min(255.0) as u8;
        let out_b = (sb as f32 * fa + db as f32 * fb).min(255.0) as u8;
        let out_a = ((fa + fb) * 255.0).min(255.0) as u8;

        self.buffer[idx] = colors::pack(out_r, out_g, out_b, out_a);
    }

    /// Get the sample at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Zero-copy byte view for uploading to a streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.buffer.as_ptr() as *const u8, self.buffer.len() * 4)
        }
    }
}
