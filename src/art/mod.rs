//! Colorized character-art rendering of bitmap images.
//!
//! Each output cell keeps the color of the pixel it samples and picks a glyph
//! from a ten-step ramp by luminance: dark pixels get dense glyphs, bright
//! pixels get sparse ones.

mod resize;

use crate::assets::{self, AssetError, AssetLocation};
use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

/// Glyphs from densest to sparsest
pub const RAMP: [char; 10] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Stand-in for the ramp's space so blank cells keep their width
pub const BLANK: char = '\u{00A0}';

/// Character cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 0.5;

const MIN_HEIGHT: u32 = 2;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("decode: {0}")]
    Decode(#[from] image::ImageError),
    #[error("resize: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),
    #[error("resize: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),
    #[error("resized buffer does not match {width}x{height}")]
    ResizeOutput { width: u32, height: u32 },
    #[error("image has no pixels")]
    Empty,
    #[error("conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance scaled by 10_000, so 0..=2_550_000.
    fn luminance_scaled(&self) -> u32 {
        2126 * self.r as u32 + 7152 * self.g as u32 + 722 * self.b as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtCell {
    pub glyph: char,
    pub color: Rgb,
}

/// Rows of colored glyphs, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArtGrid {
    rows: Vec<Vec<ArtCell>>,
}

impl AsciiArtGrid {
    pub fn rows(&self) -> &[Vec<ArtCell>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyphs only, one line per row
    pub fn to_plain_string(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Glyph for a pixel color.
pub fn glyph_for(color: Rgb) -> char {
    // floor((L / 255) * 9) without floating point drift at full white
    let idx = (color.luminance_scaled() * 9 / 2_550_000).min(9) as usize;
    // Ramp runs densest first, so dark pixels land on dense glyphs
    let glyph = RAMP[idx];
    if glyph == ' ' {
        BLANK
    } else {
        glyph
    }
}

/// Grid size for a `src_w` x `src_h` image rendered at most `max_width` cells wide.
pub fn target_size(src_w: u32, src_h: u32, max_width: u32) -> (u32, u32) {
    let width = max_width.min(src_w).max(1);
    let aspect = src_h as f64 / src_w.max(1) as f64;
    let height = (width as f64 * aspect * CELL_ASPECT).round() as u32;
    (width, height.max(MIN_HEIGHT))
}

/// Render an already decoded image.
pub fn render(image: &DynamicImage, max_width: u32) -> Result<AsciiArtGrid, ArtError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ArtError::Empty);
    }

    let (width, height) = target_size(image.width(), image.height(), max_width);
    let pixels = resize::resize_box(image.to_rgb8(), width, height)?;

    let rows = pixels
        .rows()
        .map(|row| {
            row.map(|p| {
                let color = Rgb::new(p[0], p[1], p[2]);
                ArtCell {
                    glyph: glyph_for(color),
                    color,
                }
            })
            .collect()
        })
        .collect();

    Ok(AsciiArtGrid { rows })
}

/// Decode encoded image bytes and render them.
pub fn render_bytes(bytes: &[u8], max_width: u32) -> Result<AsciiArtGrid, ArtError> {
    let image = image::load_from_memory(bytes)?;
    debug!(width = image.width(), height = image.height(), "decoded image");
    render(&image, max_width)
}

/// Load the image at `location` and render it.
///
/// Decoding and resampling run on the blocking pool.
pub async fn convert(location: &AssetLocation, max_width: u32) -> Result<AsciiArtGrid, ArtError> {
    let bytes = assets::fetch(location).await?;
    let grid = tokio::task::spawn_blocking(move || render_bytes(&bytes, max_width)).await??;
    debug!(%location, width = grid.width(), height = grid.height(), "rendered art");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, image::Rgb(rgb)))
    }

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_glyph_extremes() {
        assert_eq!(glyph_for(Rgb::new(0, 0, 0)), '@');
        assert_eq!(glyph_for(Rgb::new(255, 255, 255)), BLANK);
    }

    #[test]
    fn test_glyph_is_monotonic_in_brightness() {
        let mut last = 0;
        for v in 0..=255u8 {
            let glyph = glyph_for(Rgb::new(v, v, v));
            let glyph = if glyph == BLANK { ' ' } else { glyph };
            let pos = RAMP.iter().position(|c| *c == glyph).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }

    #[test]
    fn test_green_weighs_most() {
        assert!(Rgb::new(0, 255, 0).luminance_scaled() > Rgb::new(255, 0, 0).luminance_scaled());
        assert!(Rgb::new(255, 0, 0).luminance_scaled() > Rgb::new(0, 0, 255).luminance_scaled());
    }

    #[test]
    fn test_target_size() {
        assert_eq!(target_size(100, 50, 80), (80, 20));
        // Narrow sources are never upscaled
        assert_eq!(target_size(40, 40, 80), (40, 20));
        // Height never drops below two rows
        assert_eq!(target_size(1, 1, 80), (1, 2));
        assert_eq!(target_size(200, 10, 80), (80, 2));
    }

    #[test]
    fn test_black_pixel() {
        let grid = render(&solid(1, 1, [0, 0, 0]), 80).unwrap();
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 2);
        for cell in grid.rows().iter().flatten() {
            assert_eq!(cell.glyph, '@');
            assert_eq!(cell.color, Rgb::new(0, 0, 0));
        }
    }

    #[test]
    fn test_white_pixel() {
        let grid = render(&solid(1, 1, [255, 255, 255]), 80).unwrap();
        for cell in grid.rows().iter().flatten() {
            assert_eq!(cell.glyph, BLANK);
            assert_eq!(cell.color, Rgb::new(255, 255, 255));
        }
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = render(&solid(100, 50, [128, 128, 128]), 80).unwrap();
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 20);
        assert!(grid.rows().iter().all(|row| row.len() == 80));
    }

    #[test]
    fn test_rows_keep_pixel_order() {
        // Left half black, right half white, no resampling at this width
        let mut img = RgbImage::from_pixel(4, 8, image::Rgb([255, 255, 255]));
        for y in 0..8 {
            for x in 0..2 {
                img.put_pixel(x, y, image::Rgb([0, 0, 0]));
            }
        }
        let grid = render(&DynamicImage::ImageRgb8(img), 4).unwrap();
        assert_eq!(grid.height(), 4);
        let line = grid.to_plain_string().lines().next().unwrap().to_string();
        assert!(line.starts_with('@'));
        assert!(line.ends_with(BLANK));
    }

    #[test]
    fn test_render_is_deterministic() {
        let bytes = png_bytes(&solid(30, 17, [12, 200, 90]));
        assert_eq!(render_bytes(&bytes, 10).unwrap(), render_bytes(&bytes, 10).unwrap());
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = render_bytes(b"not an image", 80).unwrap_err();
        assert!(matches!(err, ArtError::Decode(_)));
    }

    #[tokio::test]
    async fn test_convert_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("black.png");
        std::fs::write(&path, png_bytes(&solid(100, 50, [0, 0, 0]))).unwrap();

        let grid = convert(&AssetLocation::File(path), 80).await.unwrap();
        assert_eq!((grid.width(), grid.height()), (80, 20));
        assert!(grid.rows().iter().flatten().all(|c| c.glyph == '@'));
    }

    #[tokio::test]
    async fn test_convert_missing_file() {
        let err = convert(&AssetLocation::File("/no/such/profile.jpg".into()), 80)
            .await
            .unwrap_err();
        assert!(matches!(err, ArtError::Asset(_)));
    }
}
