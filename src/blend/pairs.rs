//! One directly callable routine per supported (source, destination) format
//! pair. Each routine validates its inputs, applies the alpha-band policy,
//! and runs the kernel monomorphized for exactly that pair. Adding a pair is
//! one wrapper here plus one registry row in `dispatch`; the kernels are
//! never touched.

use crate::bitmap::buffer::Bitmap;
use crate::blend::kernel;
use crate::foundation::core::Rect;
use crate::foundation::error::{PixoverError, PixoverResult};
use crate::pixel::codec::{Bgr888, Bgra8888, PixelCodec, Rgb565, Rgb888, Rgba8888};

/// Global alpha above which the blend is treated as fully opaque and the
/// cheaper copy-with-conversion path runs; blending error above this value
/// is visually negligible.
pub const ALPHA_FULLY_OPAQUE: u8 = 0xf8;

/// Global alpha at or below which the call is a deliberate no-op: the
/// contribution is imperceptible, so the destination is left untouched and
/// the call succeeds trivially.
pub const ALPHA_IMPERCEPTIBLE: u8 = 8;

fn blend_image_pair<S: PixelCodec, D: PixelCodec>(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    if src.format() != S::FORMAT || dst.format() != D::FORMAT {
        return Err(PixoverError::invalid_argument(format!(
            "routine expects {:?} onto {:?}, got {:?} onto {:?}",
            S::FORMAT,
            D::FORMAT,
            src.format(),
            dst.format()
        )));
    }
    if !dst.contains(dst_r) {
        return Err(PixoverError::invalid_argument(format!(
            "destination rect {dst_r:?} exceeds {}x{} bitmap",
            dst.width(),
            dst.height()
        )));
    }
    if !src.contains(src_r) {
        return Err(PixoverError::invalid_argument(format!(
            "source rect {src_r:?} exceeds {}x{} bitmap",
            src.width(),
            src.height()
        )));
    }

    if global_alpha > ALPHA_FULLY_OPAQUE {
        kernel::blend_without_alpha::<S, D>(dst, src, dst_r, src_r);
    } else if global_alpha > ALPHA_IMPERCEPTIBLE {
        kernel::blend_with_alpha::<S, D>(dst, src, dst_r, src_r, global_alpha);
    }
    Ok(())
}

/// Blend an `Rgb565` source onto an `Rgb888` destination.
pub fn blend_image_rgb888_rgb565(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgb565, Rgb888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgb565` source onto a `Bgr888` destination.
pub fn blend_image_bgr888_rgb565(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgb565, Bgr888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgb565` source onto an `Rgba8888` destination.
pub fn blend_image_rgba8888_rgb565(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgb565, Rgba8888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgb565` source onto a `Bgra8888` destination.
pub fn blend_image_bgra8888_rgb565(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgb565, Bgra8888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgb565` source onto an `Rgb565` destination.
pub fn blend_image_rgb565_rgb565(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgb565, Rgb565>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgba8888` source onto an `Rgb565` destination.
pub fn blend_image_rgb565_rgba8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgba8888, Rgb565>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgba8888` source onto an `Rgb888` destination.
pub fn blend_image_rgb888_rgba8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgba8888, Rgb888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgba8888` source onto an `Rgba8888` destination.
pub fn blend_image_rgba8888_rgba8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgba8888, Rgba8888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend an `Rgba8888` source onto a `Bgra8888` destination.
pub fn blend_image_bgra8888_rgba8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Rgba8888, Bgra8888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend a `Bgra8888` source onto a `Bgr888` destination.
pub fn blend_image_bgr888_bgra8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Bgra8888, Bgr888>(dst, src, dst_r, src_r, global_alpha)
}

/// Blend a `Bgra8888` source onto a `Bgra8888` destination.
pub fn blend_image_bgra8888_bgra8888(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    blend_image_pair::<Bgra8888, Bgra8888>(dst, src, dst_r, src_r, global_alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/pairs.rs"]
mod tests;
