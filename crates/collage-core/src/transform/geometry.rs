//! Geometry for the transform pipeline: crop validation and the rotated
//! working-surface bounds.

use thiserror::Error;

use crate::CropRect;

/// Errors for invalid transform geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Crop rectangle has a zero dimension.
    #[error("Crop rectangle has zero area ({width}x{height})")]
    EmptyCrop { width: u32, height: u32 },

    /// Crop rectangle extends past the source bounds.
    #[error(
        "Crop rectangle at ({x}, {y}) sized {width}x{height} exceeds source bounds {source_width}x{source_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },

    /// Requested output dimensions include a zero.
    #[error("Output dimensions must be non-zero, got {width}x{height}")]
    EmptyOutput { width: u32, height: u32 },
}

/// Validate a crop rectangle against the decoded source dimensions.
///
/// The rectangle comes from an external cropping surface and is trusted for
/// placement, but never allowed to select pixels outside the source.
pub fn validate_crop(
    crop: &CropRect,
    source_width: u32,
    source_height: u32,
) -> Result<(), GeometryError> {
    if crop.width == 0 || crop.height == 0 {
        return Err(GeometryError::EmptyCrop {
            width: crop.width,
            height: crop.height,
        });
    }

    if crop.right() > source_width as u64 || crop.bottom() > source_height as u64 {
        return Err(GeometryError::OutOfBounds {
            x: crop.x,
            y: crop.y,
            width: crop.width,
            height: crop.height,
            source_width,
            source_height,
        });
    }

    Ok(())
}

/// Compute the bounding box of a `width x height` rectangle rotated by
/// `radians`.
///
/// The dimensions are *floored*, reproducing the upstream behavior this
/// pipeline is pixel-compatible with. At certain angles this undersizes the
/// box by up to a pixel; `ceil` would be the correctness-first alternative,
/// but would shift every downstream offset.
pub fn rotated_bounds(width: u32, height: u32, radians: f64) -> (u32, u32) {
    let cos = radians.cos().abs();
    let sin = radians.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let bounds_w = (w * cos + h * sin).floor() as u32;
    let bounds_h = (w * sin + h * cos).floor() as u32;

    (bounds_w.max(1), bounds_h.max(1))
}

/// Side length of the square working surface that safely contains the
/// rotated source: the larger of the two rotated-bounds dimensions.
pub fn safe_area(width: u32, height: u32, radians: f64) -> u32 {
    let (bounds_w, bounds_h) = rotated_bounds(width, height, radians);
    bounds_w.max(bounds_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_full_crop() {
        let crop = CropRect::full(800, 600);
        assert!(validate_crop(&crop, 800, 600).is_ok());
    }

    #[test]
    fn test_validate_interior_crop() {
        let crop = CropRect::new(100, 50, 400, 300);
        assert!(validate_crop(&crop, 800, 600).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let crop = CropRect::new(0, 0, 0, 10);
        assert!(matches!(
            validate_crop(&crop, 100, 100),
            Err(GeometryError::EmptyCrop { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let crop = CropRect::new(0, 0, 10, 0);
        assert!(matches!(
            validate_crop(&crop, 100, 100),
            Err(GeometryError::EmptyCrop { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_near_edge_overflow() {
        // x = W-1 with width 10 overflows the right edge
        let crop = CropRect::new(99, 0, 10, 10);
        assert!(matches!(
            validate_crop(&crop, 100, 100),
            Err(GeometryError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_exact_fit() {
        let crop = CropRect::new(90, 90, 10, 10);
        assert!(validate_crop(&crop, 100, 100).is_ok());
    }

    #[test]
    fn test_validate_rejects_large_offsets_without_overflow() {
        // x + width would overflow u32 if added naively
        let crop = CropRect::new(u32::MAX, 0, u32::MAX, 10);
        assert!(validate_crop(&crop, 100, 100).is_err());
    }

    #[test]
    fn test_rotated_bounds_no_rotation() {
        assert_eq!(rotated_bounds(100, 50, 0.0), (100, 50));
    }

    #[test]
    fn test_rotated_bounds_90_degrees() {
        let (w, h) = rotated_bounds(100, 50, 90f64.to_radians());
        assert_eq!((w, h), (50, 100));
    }

    #[test]
    fn test_rotated_bounds_45_degrees_floors() {
        // 100 * cos45 + 100 * sin45 = 141.42..., floored
        let (w, h) = rotated_bounds(100, 100, 45f64.to_radians());
        assert_eq!(w, 141);
        assert_eq!(h, 141);
    }

    #[test]
    fn test_rotated_bounds_symmetric_in_sign() {
        let pos = rotated_bounds(100, 80, 30f64.to_radians());
        let neg = rotated_bounds(100, 80, (-30f64).to_radians());
        assert_eq!(pos, neg);
    }

    #[test]
    fn test_rotated_bounds_never_zero() {
        for angle in [1.0, 15.0, 45.0, 89.0, 90.0, 135.0, 179.0, 180.0, 270.0, 359.0] {
            let (w, h) = rotated_bounds(1, 1, (angle as f64).to_radians());
            assert!(w >= 1 && h >= 1, "zero bounds at angle {}", angle);
        }
    }

    #[test]
    fn test_safe_area_square_source() {
        assert_eq!(safe_area(64, 64, 0.0), 64);
    }

    #[test]
    fn test_safe_area_rectangular_source() {
        // Unrotated 800x600: bounds are 800x600, safe side is the max
        assert_eq!(safe_area(800, 600, 0.0), 800);
    }

    #[test]
    fn test_safe_area_covers_diagonal() {
        let safe = safe_area(100, 100, 45f64.to_radians());
        assert_eq!(safe, 141);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
