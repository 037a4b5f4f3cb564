//! Working-surface rendering and the crop+resample blit.
//!
//! The transform pipeline draws in two passes, mirroring its two scratch
//! buffers:
//!
//! 1. [`render_working_surface`] paints the rotated/flipped source centered
//!    in a transparent square sized by [`super::geometry::safe_area`].
//! 2. [`blit_region`] pulls the crop window out of the working surface and
//!    resamples it into the destination in a single pass.
//!
//! Both passes use inverse mapping: each output pixel center is mapped back
//! through the transform and the source is sampled there. Mapping pixel
//! centers (the `+0.5` terms) keeps pure flips and axis-aligned rotations
//! exact involutions instead of shifting by a row or column.

use crate::decode::Surface;
use crate::Flip;

use super::sample::{sample, sample_bilinear, InterpolationFilter};

/// Render the source rotated by `radians` (clockwise) and flipped per
/// `flip`, centered in a transparent `safe x safe` working surface.
///
/// The forward transform is rotate-then-flip about the center; each output
/// pixel applies the inverse (flip, then rotate back) before sampling.
/// Samples falling outside the source read as transparent margin.
pub fn render_working_surface(source: &Surface, radians: f64, flip: Flip, safe: u32) -> Surface {
    let cos = radians.cos();
    let sin = radians.sin();

    let half_safe = safe as f64 / 2.0;
    let half_w = source.width as f64 / 2.0;
    let half_h = source.height as f64 / 2.0;

    let mut working = Surface::transparent(safe, safe);

    for y in 0..safe {
        for x in 0..safe {
            let dx = x as f64 + 0.5 - half_safe;
            let dy = y as f64 + 0.5 - half_safe;

            // Inverse rotation (forward is clockwise in y-down coordinates)
            let mut u = dx * cos + dy * sin;
            let mut v = -dx * sin + dy * cos;

            // Flips are their own inverse
            if flip.horizontal {
                u = -u;
            }
            if flip.vertical {
                v = -v;
            }

            let sx = u + half_w - 0.5;
            let sy = v + half_h - 0.5;

            let px = sample_bilinear(source, sx, sy);
            if px[3] > 0 {
                working.put_pixel(x, y, px);
            }
        }
    }

    working
}

/// Crop and resample in one pass: draw the `region_w x region_h` window at
/// `(region_x, region_y)` in `src` into a fresh `out_w x out_h` surface.
///
/// The region may sit at fractional coordinates and extend past the source;
/// out-of-bounds samples contribute transparency. At identity scale and
/// integral offsets the blit is an exact copy.
pub fn blit_region(
    src: &Surface,
    region_x: f64,
    region_y: f64,
    region_w: f64,
    region_h: f64,
    out_w: u32,
    out_h: u32,
    filter: InterpolationFilter,
) -> Surface {
    let scale_x = region_w / out_w as f64;
    let scale_y = region_h / out_h as f64;

    let mut dest = Surface::transparent(out_w, out_h);

    for y in 0..out_h {
        let sy = region_y + (y as f64 + 0.5) * scale_y - 0.5;
        for x in 0..out_w {
            let sx = region_x + (x as f64 + 0.5) * scale_x - 0.5;
            let px = sample(src, sx, sy, filter);
            if px[3] > 0 {
                dest.put_pixel(x, y, px);
            }
        }
    }

    dest
}
