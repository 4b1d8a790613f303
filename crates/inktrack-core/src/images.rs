use crate::error::{InktrackError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ExtendedColorType;

/// Longest side of a stored reference image.
pub const MAX_DIMENSION: u32 = 800;
/// Lossy re-encode quality; references are visual aids, not deliverables.
pub const JPEG_QUALITY: u8 = 70;

/// Re-encode a raw image into the inline reference representation: decode,
/// downscale so the longest side is at most [`MAX_DIMENSION`] (aspect
/// preserved), encode as JPEG, and wrap as a base64 data URL.
pub fn encode_reference(bytes: &[u8]) -> Result<String> {
    let img = image::load_from_memory(bytes).map_err(InktrackError::ImageDecode)?;
    let img = if img.width().max(img.height()) > MAX_DIMENSION {
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = img.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(InktrackError::ImageDecode)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
