//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, Surface};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is sniffed from the bytes; any format supported by the
/// enabled `image` features (JPEG, PNG, WebP) decodes. The returned surface
/// is already oriented the way a viewer would present the image, so all
/// downstream geometry works in the visible frame.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image, `DecodeError::CorruptedData` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<Surface, DecodeError> {
    // Extract EXIF orientation before decoding; absent or broken EXIF
    // falls back to Normal.
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);

    Ok(Surface::from_rgba_image(oriented.into_rgba8()))
}

/// Probe the natural dimensions of encoded image bytes without a full decode.
///
/// Dimensions are reported after orientation correction, matching what
/// [`decode_image`] will produce.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let (w, h) = reader
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    if extract_orientation(bytes).swaps_dimensions() {
        Ok((h, w))
    } else {
        Ok((w, h))
    }
}

/// Extract EXIF orientation from encoded image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate270().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate90().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a small gradient as PNG for decode tests.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
        });
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = png_bytes(8, 6);
        let surface = decode_image(&bytes).unwrap();

        assert_eq!(surface.width, 8);
        assert_eq!(surface.height, 6);
        assert_eq!(surface.get_pixel(0, 0), [0, 0, 128, 255]);
        assert_eq!(surface.get_pixel(2, 3), [32, 48, 128, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_image(&[0u8; 32]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_fails() {
        let mut bytes = png_bytes(16, 16);
        bytes.truncate(bytes.len() / 2);
        assert!(decode_image(&bytes).is_err());
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_probe_dimensions() {
        let bytes = png_bytes(12, 7);
        assert_eq!(probe_dimensions(&bytes).unwrap(), (12, 7));
    }

    #[test]
    fn test_probe_garbage_fails() {
        assert!(probe_dimensions(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_fn(4, 2, |x, _| {
            image::Rgba([x as u8, 0, 0, 255])
        }));
        let rotated = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn test_decode_jpeg() {
        let img = image::RgbImage::from_pixel(10, 10, image::Rgb([200, 100, 50]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Jpeg).unwrap();

        let surface = decode_image(&buffer.into_inner()).unwrap();
        assert_eq!(surface.width, 10);
        assert_eq!(surface.height, 10);
        // JPEG is lossy; just verify the pixel is in the neighborhood
        let px = surface.get_pixel(5, 5);
        assert!((px[0] as i32 - 200).abs() < 20);
        assert_eq!(px[3], 255);
    }
}
