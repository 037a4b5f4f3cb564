//! Grid collage composition.
//!
//! Lays a sequence of image resources into a fixed 2-column grid of
//! 300x300 cells and encodes the composite as PNG for download. Each image
//! is stretch-fit to its cell (no aspect preservation) and drawn
//! source-over onto a white background, in input order: image `i` lands in
//! cell `(i % 2, i / 2)`.

use tracing::debug;

use crate::decode::{self, FilterType, Surface};
use crate::encode;
use crate::resource::EncodedImage;
use crate::transform::TransformError;
use crate::{OutputFormat, OutputSpec};

/// Number of grid columns.
pub const GRID_COLUMNS: u32 = 2;

/// Cell width and height in pixels.
pub const CELL_SIZE: u32 = 300;

/// Compose encoded image resources into a PNG collage.
///
/// An empty input composes nothing and returns `Ok(None)`. Otherwise every
/// resource must decode; a single unreadable image fails the whole export.
pub fn compose<B: AsRef<[u8]>>(sources: &[B]) -> Result<Option<EncodedImage>, TransformError> {
    if sources.is_empty() {
        return Ok(None);
    }

    let rows = (sources.len() as u32).div_ceil(GRID_COLUMNS);
    let mut canvas = Surface::filled(
        GRID_COLUMNS * CELL_SIZE,
        rows * CELL_SIZE,
        [255, 255, 255, 255],
    );

    for (index, bytes) in sources.iter().enumerate() {
        let decoded = decode::decode_image(bytes.as_ref())?;
        let cell = decode::resize(&decoded, CELL_SIZE, CELL_SIZE, FilterType::Lanczos3)?;

        let cell_x = (index as u32 % GRID_COLUMNS) * CELL_SIZE;
        let cell_y = (index as u32 / GRID_COLUMNS) * CELL_SIZE;
        draw_over(&mut canvas, &cell, cell_x, cell_y);
    }

    let encoded = encode::encode(&canvas, &OutputSpec::new(OutputFormat::Png, 1.0))?;
    debug!(
        images = sources.len(),
        width = encoded.width(),
        height = encoded.height(),
        "collage composed"
    );

    Ok(Some(encoded))
}

/// Source-over composite of `src` onto `dest` at `(dest_x, dest_y)`.
fn draw_over(dest: &mut Surface, src: &Surface, dest_x: u32, dest_y: u32) {
    for y in 0..src.height {
        for x in 0..src.width {
            let top = src.get_pixel(x, y);
            if top[3] == 255 {
                dest.put_pixel(dest_x + x, dest_y + y, top);
                continue;
            }
            if top[3] == 0 {
                continue;
            }

            let bottom = dest.get_pixel(dest_x + x, dest_y + y);
            let alpha = top[3] as f32 / 255.0;
            let inv = 1.0 - alpha;
            let out_alpha = alpha + bottom[3] as f32 / 255.0 * inv;
            let blend = |t: u8, b: u8| -> u8 {
                (t as f32 * alpha + b as f32 * inv).round().clamp(0.0, 255.0) as u8
            };
            dest.put_pixel(
                dest_x + x,
                dest_y + y,
                [
                    blend(top[0], bottom[0]),
                    blend(top[1], bottom[1]),
                    blend(top[2], bottom[2]),
                    (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
                ],
            );
        }
    }
}
