use anyhow::Context;

use crate::bitmap::buffer::Bitmap;
use crate::foundation::core::Rgba8;
use crate::foundation::error::PixoverResult;
use crate::pixel::format::PixelFormat;
use crate::pixel::ops::codec_ops;

/// Decode encoded image bytes (PNG, JPEG, ...) and re-encode the pixels into
/// a bitmap of `format`.
#[tracing::instrument(skip(bytes))]
pub fn decode_bitmap(bytes: &[u8], format: PixelFormat) -> PixoverResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    bitmap_from_rgba8(&dyn_img.to_rgba8(), format)
}

/// Encode a straight-alpha RGBA image into a bitmap of `format`, one
/// canonical-color conversion per pixel.
pub fn bitmap_from_rgba8(img: &image::RgbaImage, format: PixelFormat) -> PixoverResult<Bitmap> {
    let (width, height) = img.dimensions();
    let mut bm = Bitmap::new(width, height, format)?;
    let ops = codec_ops(format);
    let src = img.as_raw();
    let src_stride = width as usize * 4;

    for y in 0..height as usize {
        let s_row = &src[y * src_stride..(y + 1) * src_stride];
        let d_row = bm.row_mut(y);
        for (d, s) in d_row
            .chunks_exact_mut(ops.bytes_per_pixel)
            .zip(s_row.chunks_exact(4))
        {
            (ops.pack_rgba)(d, Rgba8::new(s[0], s[1], s[2], s[3]));
        }
    }
    Ok(bm)
}

/// Decode a bitmap into a straight-alpha RGBA image through the canonical
/// color; alpha-less formats come out fully opaque.
pub fn bitmap_to_rgba8(bm: &Bitmap) -> image::RgbaImage {
    let ops = codec_ops(bm.format());
    let mut out = image::RgbaImage::new(bm.width(), bm.height());
    let out_stride = bm.width() as usize * 4;
    let out_buf: &mut [u8] = &mut out;

    for y in 0..bm.height() as usize {
        let s_row = bm.row(y);
        let d_row = &mut out_buf[y * out_stride..(y + 1) * out_stride];
        for (d, s) in d_row
            .chunks_exact_mut(4)
            .zip(s_row.chunks_exact(ops.bytes_per_pixel))
        {
            let px = (ops.unpack)(s);
            d.copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/convert/decode.rs"]
mod tests;
