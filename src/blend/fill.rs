use crate::bitmap::buffer::Bitmap;
use crate::blend::pairs::{ALPHA_FULLY_OPAQUE, ALPHA_IMPERCEPTIBLE};
use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{PixoverError, PixoverResult};
use crate::foundation::math::{blend_channel, mul_div255_u16};
use crate::pixel::ops::codec_ops;

/// Fill `rect` of `dst` with one color, under the same alpha bands as
/// blending applied to `color.a`: solid above [`ALPHA_FULLY_OPAQUE`],
/// per-pixel source-over in the middle band, no-op at or below
/// [`ALPHA_IMPERCEPTIBLE`].
///
/// The codec is picked from the destination's runtime format tag; fills are
/// not pair-specialized.
pub fn fill_rect(dst: &mut Bitmap, rect: &Rect, color: Rgba8) -> PixoverResult<()> {
    if !dst.contains(rect) {
        return Err(PixoverError::invalid_argument(format!(
            "fill rect {rect:?} exceeds {}x{} bitmap",
            dst.width(),
            dst.height()
        )));
    }

    let ops = codec_ops(dst.format());
    let bpp = ops.bytes_per_pixel;
    let x0 = rect.x as usize * bpp;
    let x1 = x0 + rect.width as usize * bpp;

    if color.a > ALPHA_FULLY_OPAQUE {
        let mut packed = [0u8; 4];
        (ops.pack_rgb)(&mut packed[..bpp], color.r, color.g, color.b);
        for row in 0..rect.height as usize {
            let d_row = &mut dst.row_mut(rect.y as usize + row)[x0..x1];
            for d in d_row.chunks_exact_mut(bpp) {
                d.copy_from_slice(&packed[..bpp]);
            }
        }
    } else if color.a > ALPHA_IMPERCEPTIBLE {
        let cov = color.a;
        for row in 0..rect.height as usize {
            let d_row = &mut dst.row_mut(rect.y as usize + row)[x0..x1];
            for d in d_row.chunks_exact_mut(bpp) {
                let d_px = (ops.unpack)(d);
                let r = blend_channel(d_px.r, color.r, cov);
                let g = blend_channel(d_px.g, color.g, cov);
                let b = blend_channel(d_px.b, color.b, cov);
                if ops.has_alpha {
                    let a = u16::from(cov)
                        + mul_div255_u16(u16::from(d_px.a), 255 - u16::from(cov));
                    (ops.pack_rgba)(d, Rgba8::new(r, g, b, a as u8));
                } else {
                    (ops.pack_rgb)(d, r, g, b);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/blend/fill.rs"]
mod tests;
