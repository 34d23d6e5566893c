//! Palette remap: move every face to the nearest color of a new palette

use std::collections::HashMap;
use std::time::Instant;

use glam::{Vec2, Vec4};
use tracing::info;

use super::PaintEngine;
use crate::constants::MIN_TEXEL_SEEK;
use crate::error::PaintError;
use crate::palette::Palette;
use crate::types::{FaceId, Rgba8};

impl PaintEngine {
    /// Point every face at the texel of `palette` closest to its current color
    ///
    /// Colors are compared as normalized RGBA; the first closest texel in
    /// row-major order wins, then gets nudged diagonally into the interior
    /// of its color region. Results are cached per source color. With
    /// `switch_palette` the new palette becomes the active one.
    ///
    /// Ignores restrict-to-selection. Returns the number of faces remapped.
    pub fn remap_to(&mut self, palette: Palette, switch_palette: bool) -> Result<usize, PaintError> {
        if palette.is_empty() {
            return Err(PaintError::EmptyPalette {
                width: palette.width(),
                height: palette.height(),
            });
        }

        let start = Instant::now();
        let mut cache: HashMap<Rgba8, Vec2> = HashMap::new();
        let mut scans = 0;

        for index in 0..self.face_count() {
            let face = FaceId::from(index);
            let Some(old_color) = self.face_color(face) else {
                continue;
            };
            let uv = *cache.entry(old_color).or_insert_with(|| {
                scans += 1;
                let (x, y) = nearest_texel(&palette, old_color);
                let (x, y) = improve_texel(&palette, x, y, self.config.remap_seek_limit);
                palette.texel_center(x, y)
            });
            self.write_uv(face, uv);
        }

        info!(
            "Remapped {} faces onto {}x{} palette ({} distinct colors) in {:?}",
            self.face_count(),
            palette.width(),
            palette.height(),
            scans,
            start.elapsed()
        );

        if switch_palette {
            self.palette = Some(palette);
        }
        Ok(self.face_count())
    }
}

fn to_unit(color: Rgba8) -> Vec4 {
    Vec4::new(
        color[0] as f32,
        color[1] as f32,
        color[2] as f32,
        color[3] as f32,
    ) / 255.0
}

/// Brute-force scan for the closest color
fn nearest_texel(palette: &Palette, color: Rgba8) -> (u32, u32) {
    let target = to_unit(color);
    let mut best = (0, 0);
    let mut best_distance = f32::MAX;

    for (i, &pixel) in palette.pixels().iter().enumerate() {
        let distance = (to_unit(pixel) - target).length_squared();
        if distance < best_distance {
            best_distance = distance;
            best = (i as u32 % palette.width(), i as u32 / palette.width());
        }
    }
    best
}

/// Step up-right along the diagonal while RGB stays the same, then settle
/// halfway, so the chosen texel is less likely to sit on a region border.
fn improve_texel(palette: &Palette, x: u32, y: u32, seek_limit: u32) -> (u32, u32) {
    let Some(color) = palette.get_pixel(x, y) else {
        return (x, y);
    };
    let max_count = (palette.width() - x - 1)
        .min(palette.height() - y - 1)
        .min(seek_limit);
    if max_count <= MIN_TEXEL_SEEK {
        return (x, y);
    }

    let mut count = 0;
    loop {
        count += 1;
        let same = palette
            .get_pixel(x + count, y + count)
            .is_some_and(|other| other[..3] == color[..3]);
        if !same || count >= max_count {
            break;
        }
    }

    if count > MIN_TEXEL_SEEK {
        (x + count / 2, y + count / 2)
    } else {
        (x, y)
    }
}
