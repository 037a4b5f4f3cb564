//! Circular output mask.
//!
//! Destination-in semantics: keep pixels inside the inscribed circle of the
//! destination surface, clear everything else to transparent. The edge is a
//! hard threshold at the pixel center - pixels strictly inside the circle
//! are untouched, pixels strictly outside end up with alpha 0.

use crate::decode::Surface;

/// Clear all pixels outside the inscribed circle of the surface.
///
/// The circle is centered on the surface with radius
/// `min(width, height) / 2`. Cleared pixels are zeroed in all channels,
/// matching destination-in compositing over an empty mask.
pub fn apply_round_mask(surface: &mut Surface) {
    let center_x = surface.width as f64 / 2.0;
    let center_y = surface.height as f64 / 2.0;
    let radius = surface.width.min(surface.height) as f64 / 2.0;
    let radius_sq = radius * radius;

    for y in 0..surface.height {
        let dy = y as f64 + 0.5 - center_y;
        for x in 0..surface.width {
            let dx = x as f64 + 0.5 - center_x;
            if dx * dx + dy * dy > radius_sq {
                surface.put_pixel(x, y, [0, 0, 0, 0]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_mask_clears_corners() {
        let mut surface = Surface::filled(20, 20, [255, 255, 255, 255]);
        apply_round_mask(&mut surface);

        assert_eq!(surface.get_pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(19, 0), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(0, 19), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(19, 19), [0, 0, 0, 0]);
    }

    #[test]
    fn test_round_mask_keeps_center() {
        let mut surface = Surface::filled(20, 20, [12, 34, 56, 255]);
        apply_round_mask(&mut surface);

        assert_eq!(surface.get_pixel(10, 10), [12, 34, 56, 255]);
        assert_eq!(surface.get_pixel(9, 9), [12, 34, 56, 255]);
    }

    #[test]
    fn test_round_mask_keeps_circle_boundary_midpoints() {
        let mut surface = Surface::filled(21, 21, [9, 9, 9, 255]);
        apply_round_mask(&mut surface);

        // Pixel centers on the axes at the circle edge are inside
        assert_eq!(surface.get_pixel(10, 0), [9, 9, 9, 255]);
        assert_eq!(surface.get_pixel(0, 10), [9, 9, 9, 255]);
        assert_eq!(surface.get_pixel(20, 10), [9, 9, 9, 255]);
        assert_eq!(surface.get_pixel(10, 20), [9, 9, 9, 255]);
    }

    #[test]
    fn test_round_mask_rectangular_uses_min_dimension() {
        let mut surface = Surface::filled(40, 20, [1, 2, 3, 255]);
        apply_round_mask(&mut surface);

        // Circle radius 10 centered at (20, 10): far left/right cleared
        assert_eq!(surface.get_pixel(0, 10), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(39, 10), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(20, 10), [1, 2, 3, 255]);
        assert_eq!(surface.get_pixel(20, 0), [1, 2, 3, 255]);
    }

    #[test]
    fn test_round_mask_exact_inside_outside_partition() {
        let size = 16u32;
        let mut surface = Surface::filled(size, size, [200, 200, 200, 200]);
        apply_round_mask(&mut surface);

        let center = size as f64 / 2.0;
        let radius = center;
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 + 0.5 - center;
                let dy = y as f64 + 0.5 - center;
                let outside = dx * dx + dy * dy > radius * radius;
                let px = surface.get_pixel(x, y);
                if outside {
                    assert_eq!(px, [0, 0, 0, 0], "pixel ({x}, {y}) should be cleared");
                } else {
                    assert_eq!(px, [200, 200, 200, 200], "pixel ({x}, {y}) should be kept");
                }
            }
        }
    }
}
