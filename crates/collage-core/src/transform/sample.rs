//! Subpixel sampling with bilinear and Lanczos3 interpolation.
//!
//! Coordinates are in pixel-index space: an integer coordinate lands exactly
//! on a pixel, so sampling at integers reproduces the source values. Taps
//! outside the surface read as fully transparent, which is what lets the
//! rotated working surface blend out to its empty margin.
//!
//! Interpolation happens on premultiplied alpha. Interpolating straight RGBA
//! would let the color channels of transparent taps (always black) bleed
//! into visible pixels and darken every edge.

use crate::decode::Surface;

/// Interpolation filter for transform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation - good for preview rendering.
    #[default]
    Bilinear,
    /// High-quality Lanczos3 interpolation - good for export.
    Lanczos3,
}

/// Sample a surface at fractional coordinates with the given filter.
#[inline]
pub fn sample(surface: &Surface, x: f64, y: f64, filter: InterpolationFilter) -> [u8; 4] {
    match filter {
        InterpolationFilter::Bilinear => sample_bilinear(surface, x, y),
        InterpolationFilter::Lanczos3 => sample_lanczos3(surface, x, y),
    }
}

/// Read a tap as premultiplied RGBA in 0.0-255.0 / 0.0-1.0 range.
/// Out-of-bounds taps are fully transparent.
#[inline]
fn tap_premultiplied(surface: &Surface, x: i64, y: i64) -> [f64; 4] {
    if x < 0 || y < 0 || x >= surface.width as i64 || y >= surface.height as i64 {
        return [0.0; 4];
    }
    let px = surface.get_pixel(x as u32, y as u32);
    let alpha = px[3] as f64 / 255.0;
    [
        px[0] as f64 * alpha,
        px[1] as f64 * alpha,
        px[2] as f64 * alpha,
        alpha,
    ]
}

/// Convert an interpolated premultiplied value back to straight RGBA bytes.
#[inline]
fn unpremultiply(pm: [f64; 4]) -> [u8; 4] {
    let alpha = pm[3];
    if alpha <= 1e-6 {
        return [0, 0, 0, 0];
    }
    [
        (pm[0] / alpha).clamp(0.0, 255.0).round() as u8,
        (pm[1] / alpha).clamp(0.0, 255.0).round() as u8,
        (pm[2] / alpha).clamp(0.0, 255.0).round() as u8,
        (alpha * 255.0).clamp(0.0, 255.0).round() as u8,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// Weights the 4 nearest taps by distance. Exact at integer coordinates.
pub fn sample_bilinear(surface: &Surface, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let p00 = tap_premultiplied(surface, x0, y0);
    let p10 = tap_premultiplied(surface, x0 + 1, y0);
    let p01 = tap_premultiplied(surface, x0, y0 + 1);
    let p11 = tap_premultiplied(surface, x0 + 1, y0 + 1);

    let mut result = [0.0f64; 4];
    for i in 0..4 {
        result[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }

    unpremultiply(result)
}

/// Sample a pixel using Lanczos3 interpolation.
///
/// Considers a 6x6 neighborhood for higher quality on sharp edges. Falls
/// back to bilinear near the surface edges where the kernel would not fit.
pub fn sample_lanczos3(surface: &Surface, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (surface.width as i64, surface.height as i64);

    if x < 2.0 || x >= (w - 3) as f64 || y < 2.0 || y >= (h - 3) as f64 {
        return sample_bilinear(surface, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;

            let dx = x - px as f64;
            let dy = y - py as f64;
            let weight = lanczos_weight(dx, 3.0) * lanczos_weight(dy, 3.0);

            let tap = tap_premultiplied(surface, px, py);
            for i in 0..4 {
                sum[i] += tap[i] * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum <= 0.0 {
        return [0, 0, 0, 0];
    }

    for channel in &mut sum {
        *channel /= weight_sum;
    }
    // Negative lobes can push alpha slightly out of range
    sum[3] = sum[3].clamp(0.0, 1.0);

    unpremultiply(sum)
}

/// Lanczos kernel weight function.
///
/// ```text
/// L(x) = sinc(x) * sinc(x/a)  for |x| < a
/// L(x) = 0                    for |x| >= a
/// ```
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
