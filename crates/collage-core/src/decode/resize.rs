//! Image resizing functions shared by the thumbnail and collage paths.
//!
//! All functions return new [`Surface`] instances without modifying the input.

use super::{DecodeError, FilterType, Surface};

/// Resize a surface to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero,
/// `DecodeError::CorruptedData` if the surface cannot be converted.
pub fn resize(
    surface: &Surface,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Surface, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if surface.width == width && surface.height == height {
        return Ok(surface.clone());
    }

    let rgba_image = surface
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedData("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(Surface::from_rgba_image(resized))
}

/// Compute downscaled dimensions fitting within `max_size` on the longest
/// edge, preserving aspect ratio.
///
/// `scale = min(1, max_size / max(width, height))`; each dimension is
/// rounded and floored to at least 1. Images already within `max_size` keep
/// their dimensions (scale never exceeds 1).
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let longest = width.max(height) as f64;
    let scale = (max_size as f64 / longest).min(1.0);

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    (new_width, new_height)
}

/// Downscale a surface to fit within `max_size` on its longest edge.
///
/// Surfaces already within the limit are returned unchanged.
pub fn scale_to_fit(
    surface: &Surface,
    max_size: u32,
    filter: FilterType,
) -> Result<Surface, DecodeError> {
    if max_size == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (width, height) = fit_dimensions(surface.width, surface.height, max_size);
    resize(surface, width, height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_surface(width: u32, height: u32) -> Surface {
        // Simple gradient for resize tests
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        Surface::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let surface = create_test_surface(100, 50);
        let resized = resize(&surface, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let surface = create_test_surface(100, 50);
        let resized = resize(&surface, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
        assert_eq!(resized.pixels, surface.pixels);
    }

    #[test]
    fn test_resize_anisotropic() {
        let surface = create_test_surface(100, 100);
        let resized = resize(&surface, 200, 30, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 200);
        assert_eq!(resized.height, 30);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let surface = create_test_surface(100, 50);

        assert!(resize(&surface, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&surface, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_fit_dimensions_landscape() {
        // 2000x1000 at max 512 scales by 0.256
        let (w, h) = fit_dimensions(2000, 1000, 512);
        assert_eq!(w, 512);
        assert_eq!(h, 256);
    }

    #[test]
    fn test_fit_dimensions_portrait() {
        let (w, h) = fit_dimensions(1000, 2000, 512);
        assert_eq!(w, 256);
        assert_eq!(h, 512);
    }

    #[test]
    fn test_fit_dimensions_no_upscale() {
        let (w, h) = fit_dimensions(100, 50, 512);
        assert_eq!(w, 100);
        assert_eq!(h, 50);
    }

    #[test]
    fn test_fit_dimensions_minimum_one() {
        // Extreme aspect ratio: short edge rounds to 0 and is floored to 1
        let (w, h) = fit_dimensions(10000, 4, 100);
        assert_eq!(w, 100);
        assert_eq!(h, 1);
    }

    #[test]
    fn test_fit_dimensions_zero_input() {
        assert_eq!(fit_dimensions(0, 0, 256), (0, 0));
    }

    #[test]
    fn test_scale_to_fit() {
        let surface = create_test_surface(200, 100);
        let scaled = scale_to_fit(&surface, 50, FilterType::Bilinear).unwrap();

        assert_eq!(scaled.width, 50);
        assert_eq!(scaled.height, 25);
    }

    #[test]
    fn test_scale_to_fit_already_smaller() {
        let surface = create_test_surface(40, 20);
        let scaled = scale_to_fit(&surface, 512, FilterType::Bilinear).unwrap();

        assert_eq!(scaled.width, 40);
        assert_eq!(scaled.height, 20);
    }

    #[test]
    fn test_scale_to_fit_zero_max_size_error() {
        let surface = create_test_surface(100, 50);
        assert!(scale_to_fit(&surface, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let surface = create_test_surface(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&surface, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
