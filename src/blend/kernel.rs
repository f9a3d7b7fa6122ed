//! The two compositing algorithms, written once against the codec
//! abstraction and monomorphized per format pair by `pairs`.
//!
//! Both kernels map destination pixels to source pixels one-to-one, clamped
//! to the smaller of the two rects; nothing is stretched. Preconditions
//! (rects in bounds, formats matching `S`/`D`) are validated by the callers
//! before any pixel is touched.

use crate::bitmap::buffer::Bitmap;
use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::math::{blend_channel, mul_div255_u8, mul_div255_u16};
use crate::pixel::codec::PixelCodec;

/// Opaque copy-with-conversion: decode each covered source pixel and
/// re-encode it into the destination format, alpha forced opaque. No alpha
/// arithmetic.
pub(crate) fn blend_without_alpha<S: PixelCodec, D: PixelCodec>(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
) {
    let copy_w = dst_r.width.min(src_r.width) as usize;
    let copy_h = dst_r.height.min(src_r.height) as usize;
    let s_off = src_r.x as usize * S::BYTES_PER_PIXEL;
    let d_off = dst_r.x as usize * D::BYTES_PER_PIXEL;

    for row in 0..copy_h {
        let s_row = src.row(src_r.y as usize + row);
        let s_row = &s_row[s_off..s_off + copy_w * S::BYTES_PER_PIXEL];
        let d_row = dst.row_mut(dst_r.y as usize + row);
        let d_row = &mut d_row[d_off..d_off + copy_w * D::BYTES_PER_PIXEL];

        for (d, s) in d_row
            .chunks_exact_mut(D::BYTES_PER_PIXEL)
            .zip(s_row.chunks_exact(S::BYTES_PER_PIXEL))
        {
            let px = S::unpack(s);
            D::pack_rgb(d, px.r, px.g, px.b);
        }
    }
}

/// Source-over blend-with-conversion.
///
/// Effective coverage per pixel is `src.a * global_alpha / 255`; each color
/// channel is mixed toward the source by that coverage. When the destination
/// format carries alpha, the output alpha is the standard source-over
/// composite; otherwise only RGB is tracked.
pub(crate) fn blend_with_alpha<S: PixelCodec, D: PixelCodec>(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) {
    let copy_w = dst_r.width.min(src_r.width) as usize;
    let copy_h = dst_r.height.min(src_r.height) as usize;
    let s_off = src_r.x as usize * S::BYTES_PER_PIXEL;
    let d_off = dst_r.x as usize * D::BYTES_PER_PIXEL;

    for row in 0..copy_h {
        let s_row = src.row(src_r.y as usize + row);
        let s_row = &s_row[s_off..s_off + copy_w * S::BYTES_PER_PIXEL];
        let d_row = dst.row_mut(dst_r.y as usize + row);
        let d_row = &mut d_row[d_off..d_off + copy_w * D::BYTES_PER_PIXEL];

        for (d, s) in d_row
            .chunks_exact_mut(D::BYTES_PER_PIXEL)
            .zip(s_row.chunks_exact(S::BYTES_PER_PIXEL))
        {
            let s_px = S::unpack(s);
            let cov = mul_div255_u8(u16::from(s_px.a), u16::from(global_alpha));
            let d_px = D::unpack(d);

            let r = blend_channel(d_px.r, s_px.r, cov);
            let g = blend_channel(d_px.g, s_px.g, cov);
            let b = blend_channel(d_px.b, s_px.b, cov);

            if D::HAS_ALPHA {
                let a = u16::from(cov)
                    + mul_div255_u16(u16::from(d_px.a), 255 - u16::from(cov));
                D::pack_rgba(d, Rgba8::new(r, g, b, a as u8));
            } else {
                D::pack_rgb(d, r, g, b);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/kernel.rs"]
mod tests;
