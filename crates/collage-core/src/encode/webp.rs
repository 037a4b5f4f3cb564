//! Lossy WebP encoding via the `webp` crate.
//!
//! The `image` crate only writes lossless WebP, so the quality knob goes
//! through libwebp bindings instead. Alpha is preserved.

use crate::decode::Surface;

/// Encode a surface to lossy WebP bytes.
///
/// `quality` is 0.0 to 1.0 and maps to libwebp's 0-100 scale.
pub fn encode_webp(surface: &Surface, quality: f32) -> Vec<u8> {
    let encoder = webp::Encoder::from_rgba(&surface.pixels, surface.width, surface.height);
    encoder.encode(quality * 100.0).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_webp_container() {
        let surface = Surface::filled(12, 12, [64, 128, 192, 255]);
        let bytes = encode_webp(&surface, 0.8);

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_webp_quality_affects_size() {
        let mut surface = Surface::transparent(64, 64);
        for y in 0..64 {
            for x in 0..64 {
                surface.put_pixel(x, y, [(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8, 255]);
            }
        }

        let low = encode_webp(&surface, 0.1);
        let high = encode_webp(&surface, 0.95);
        assert!(high.len() >= low.len());
    }
}
