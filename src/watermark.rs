//! Watermark compositing: overlays branding text onto rendered meme bytes.
//!
//! The overlay is anchored to the bottom-right corner: a semi-transparent
//! dark backing rectangle with light text on top, alpha-composited onto the
//! image, which is then flattened to opaque RGB and re-encoded as PNG.

use std::fs;
use std::io::Cursor;

use ab_glyph::{FontArc, FontVec, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use once_cell::sync::Lazy;

use crate::error::{MemeError, Result};

pub const DEFAULT_WATERMARK_TEXT: &str = "memeforge.app";

const MARGIN: i32 = 10;
const PADDING: i32 = 6;
const MIN_FONT_SIZE: u32 = 16;
const BACKING_COLOR: Rgba<u8> = Rgba([0, 0, 0, 120]);
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);

// Vendored so watermarking works on hosts with no font packages installed.
const EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

const PREFERRED_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

static WATERMARK_FONT: Lazy<FontArc> = Lazy::new(load_font);

fn load_font() -> FontArc {
    for path in PREFERRED_FONT_PATHS {
        if let Ok(bytes) = fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                log::debug!("Watermark font loaded from {}", path);
                return FontArc::new(font);
            }
        }
    }
    log::debug!("No usable system font found, using the embedded fallback");
    FontArc::try_from_slice(EMBEDDED_FONT).expect("embedded fallback font is valid")
}

/// Overlays `text` onto `image_bytes` and re-encodes the result as PNG.
///
/// Output dimensions always equal input dimensions. Fails only when the
/// input bytes do not decode as an image or the PNG encode fails; text wider
/// than the image clips at the edges instead of erroring.
pub fn apply(image_bytes: &[u8], text: &str) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| MemeError::ImageError(format!("failed to decode image: {}", e)))?;
    let mut base = decoded.to_rgba8();
    let (width, height) = base.dimensions();

    let font = &*WATERMARK_FONT;
    let font_size = (width / 25).max(MIN_FONT_SIZE);
    let scale = PxScale::from(font_size as f32);
    let (text_w, text_h) = text_size(scale, font, text);
    let (text_w, text_h) = (text_w as i32, text_h as i32);

    let x = width as i32 - text_w - MARGIN;
    let y = height as i32 - text_h - MARGIN;

    let mut layer = RgbaImage::new(width, height);
    draw_filled_rect_mut(
        &mut layer,
        Rect::at(x - PADDING, y - PADDING).of_size(
            (text_w + 2 * PADDING) as u32,
            (text_h + 2 * PADDING) as u32,
        ),
        BACKING_COLOR,
    );
    draw_text_mut(&mut layer, TEXT_COLOR, x, y, scale, font, text);

    image::imageops::overlay(&mut base, &layer, 0, 0);

    let flattened = DynamicImage::ImageRgba8(base).to_rgb8();
    let mut out = Cursor::new(Vec::new());
    flattened
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| MemeError::ImageError(format!("failed to encode PNG: {}", e)))?;

    Ok(out.into_inner())
}
