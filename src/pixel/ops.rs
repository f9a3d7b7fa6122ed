//! Function-pointer view of the codecs, for operations that pick the codec
//! from a runtime format tag (fill, whole-buffer conversion). The blending
//! hot loops never go through this table; they are monomorphized per pair.

use crate::foundation::core::Rgba8;
use crate::pixel::codec::{
    Bgr565, Bgr888, Bgra8888, PixelCodec, Rgb565, Rgb888, Rgba8888,
};
use crate::pixel::format::PixelFormat;

pub(crate) struct CodecOps {
    pub bytes_per_pixel: usize,
    pub has_alpha: bool,
    pub unpack: fn(&[u8]) -> Rgba8,
    pub pack_rgb: fn(&mut [u8], u8, u8, u8),
    pub pack_rgba: fn(&mut [u8], Rgba8),
}

const fn ops_of<C: PixelCodec>() -> CodecOps {
    CodecOps {
        bytes_per_pixel: C::BYTES_PER_PIXEL,
        has_alpha: C::HAS_ALPHA,
        unpack: C::unpack,
        pack_rgb: C::pack_rgb,
        pack_rgba: C::pack_rgba,
    }
}

static RGB565_OPS: CodecOps = ops_of::<Rgb565>();
static BGR565_OPS: CodecOps = ops_of::<Bgr565>();
static RGB888_OPS: CodecOps = ops_of::<Rgb888>();
static BGR888_OPS: CodecOps = ops_of::<Bgr888>();
static RGBA8888_OPS: CodecOps = ops_of::<Rgba8888>();
static BGRA8888_OPS: CodecOps = ops_of::<Bgra8888>();

pub(crate) fn codec_ops(format: PixelFormat) -> &'static CodecOps {
    match format {
        PixelFormat::Rgb565 => &RGB565_OPS,
        PixelFormat::Bgr565 => &BGR565_OPS,
        PixelFormat::Rgb888 => &RGB888_OPS,
        PixelFormat::Bgr888 => &BGR888_OPS,
        PixelFormat::Rgba8888 => &RGBA8888_OPS,
        PixelFormat::Bgra8888 => &BGRA8888_OPS,
    }
}
