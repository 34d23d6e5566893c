//! Palette texture - RGBA8 pixel source for face colors
//!
//! Pixels are stored row-major with row 0 at v = 0 (the bottom of the
//! texture in UV space). Decoding images and GPU readback happen outside
//! this crate; only raw samples come in.

use glam::Vec2;

use crate::error::PaintError;
use crate::types::Rgba8;

/// A decoded palette texture
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    width: u32,
    height: u32,
    /// Pixel data in row-major order, bottom row first
    pixels: Vec<Rgba8>,
}

impl Palette {
    /// Wrap raw pixel data, checking it matches the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, PaintError> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(PaintError::PaletteSize {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a palette filled with one color
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Build from an `image` buffer (top row first), flipping rows so v = 0 is the bottom
    #[cfg(feature = "image")]
    pub fn from_rgba_image(image: &image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in (0..height).rev() {
            for x in 0..width {
                pixels.push(image.get_pixel(x, y).0);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Texture width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if the palette has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Pixel coordinates under a UV: truncating, nearest-pixel, clamped to the texture
    #[inline]
    pub fn texel_at(&self, uv: Vec2) -> Option<(u32, u32)> {
        if self.is_empty() {
            return None;
        }
        let x = ((uv.x * self.width as f32) as i64).clamp(0, self.width as i64 - 1);
        let y = ((uv.y * self.height as f32) as i64).clamp(0, self.height as i64 - 1);
        Some((x as u32, y as u32))
    }

    /// Sample the color under a UV (no filtering)
    pub fn sample(&self, uv: Vec2) -> Option<Rgba8> {
        let (x, y) = self.texel_at(uv)?;
        self.get_pixel(x, y)
    }

    /// UV of a texel's center
    #[inline]
    pub fn texel_center(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32,
            (y as f32 + 0.5) / self.height as f32,
        )
    }

    /// Direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_size() {
        assert!(Palette::new(2, 2, vec![[0; 4]; 3]).is_err());
        let palette = Palette::new(2, 2, vec![[0; 4]; 4]).unwrap();
        assert_eq!(palette.as_bytes().len(), 16);
    }

    #[test]
    fn test_sample_truncates() {
        let mut palette = Palette::solid(4, 1, [0, 0, 0, 255]);
        palette.set_pixel(1, 0, [255, 0, 0, 255]);

        assert_eq!(palette.sample(Vec2::new(0.25, 0.5)), Some([255, 0, 0, 255]));
        assert_eq!(palette.sample(Vec2::new(0.49, 0.5)), Some([255, 0, 0, 255]));
        assert_eq!(palette.sample(Vec2::new(0.24, 0.5)), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_sample_clamps_edges() {
        let mut palette = Palette::solid(2, 2, [0, 0, 0, 255]);
        palette.set_pixel(1, 1, [9, 9, 9, 255]);

        assert_eq!(palette.texel_at(Vec2::new(1.0, 1.0)), Some((1, 1)));
        assert_eq!(palette.texel_at(Vec2::new(-0.5, 3.0)), Some((0, 1)));
        assert_eq!(palette.sample(Vec2::ONE), Some([9, 9, 9, 255]));
    }

    #[test]
    fn test_texel_center_samples_back() {
        let palette = Palette::solid(7, 3, [1, 2, 3, 4]);
        for y in 0..3 {
            for x in 0..7 {
                assert_eq!(palette.texel_at(palette.texel_center(x, y)), Some((x, y)));
            }
        }
    }

    #[test]
    fn test_dimensions_match_pixels() {
        let palette = Palette::new(3, 2, vec![[7; 4]; 6]).unwrap();
        assert_eq!((palette.width(), palette.height()), (3, 2));
        assert_eq!(palette.pixels().len(), 6);
        assert_eq!(palette.get_pixel(2, 1), Some([7; 4]));
        assert_eq!(palette.get_pixel(3, 0), None);
        assert_eq!(palette.sample(Vec2::new(5.0, 5.0)), Some([7; 4]));
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::solid(0, 4, [0; 4]);
        assert!(palette.is_empty());
        assert_eq!(palette.sample(Vec2::ZERO), None);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_from_rgba_image_flips_rows() {
        let mut image = image::RgbaImage::new(1, 2);
        image.put_pixel(0, 0, image::Rgba([1, 1, 1, 255]));
        image.put_pixel(0, 1, image::Rgba([2, 2, 2, 255]));

        let palette = Palette::from_rgba_image(&image);
        assert_eq!(palette.get_pixel(0, 0), Some([2, 2, 2, 255]));
        assert_eq!(palette.get_pixel(0, 1), Some([1, 1, 1, 255]));
    }
}
