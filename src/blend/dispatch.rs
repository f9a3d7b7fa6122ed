//! Runtime facade mapping the format tags of the two bitmaps to the matching
//! specialized routine. The registry is immutable static data, so concurrent
//! lookups are safe; coverage gaps surface as
//! [`PixoverError::UnsupportedFormatPair`] rather than silent fallbacks.

use crate::bitmap::buffer::Bitmap;
use crate::blend::pairs;
use crate::foundation::core::Rect;
use crate::foundation::error::{PixoverError, PixoverResult};
use crate::pixel::format::PixelFormat;

type BlendFn = fn(&mut Bitmap, &Bitmap, &Rect, &Rect, u8) -> PixoverResult<()>;

struct PairEntry {
    src: PixelFormat,
    dst: PixelFormat,
    run: BlendFn,
}

static REGISTRY: &[PairEntry] = &[
    PairEntry {
        src: PixelFormat::Rgb565,
        dst: PixelFormat::Rgb888,
        run: pairs::blend_image_rgb888_rgb565,
    },
    PairEntry {
        src: PixelFormat::Rgb565,
        dst: PixelFormat::Bgr888,
        run: pairs::blend_image_bgr888_rgb565,
    },
    PairEntry {
        src: PixelFormat::Rgb565,
        dst: PixelFormat::Rgba8888,
        run: pairs::blend_image_rgba8888_rgb565,
    },
    PairEntry {
        src: PixelFormat::Rgb565,
        dst: PixelFormat::Bgra8888,
        run: pairs::blend_image_bgra8888_rgb565,
    },
    PairEntry {
        src: PixelFormat::Rgb565,
        dst: PixelFormat::Rgb565,
        run: pairs::blend_image_rgb565_rgb565,
    },
    PairEntry {
        src: PixelFormat::Rgba8888,
        dst: PixelFormat::Rgb565,
        run: pairs::blend_image_rgb565_rgba8888,
    },
    PairEntry {
        src: PixelFormat::Rgba8888,
        dst: PixelFormat::Rgb888,
        run: pairs::blend_image_rgb888_rgba8888,
    },
    PairEntry {
        src: PixelFormat::Rgba8888,
        dst: PixelFormat::Rgba8888,
        run: pairs::blend_image_rgba8888_rgba8888,
    },
    PairEntry {
        src: PixelFormat::Rgba8888,
        dst: PixelFormat::Bgra8888,
        run: pairs::blend_image_bgra8888_rgba8888,
    },
    PairEntry {
        src: PixelFormat::Bgra8888,
        dst: PixelFormat::Bgr888,
        run: pairs::blend_image_bgr888_bgra8888,
    },
    PairEntry {
        src: PixelFormat::Bgra8888,
        dst: PixelFormat::Bgra8888,
        run: pairs::blend_image_bgra8888_bgra8888,
    },
];

/// Blend `src_r` of `src` onto `dst_r` of `dst`, modulated by `global_alpha`.
///
/// Resolves the `(src.format(), dst.format())` pair against the registry and
/// delegates to the specialized routine, which validates rects, applies the
/// alpha-band policy ([`pairs::ALPHA_FULLY_OPAQUE`],
/// [`pairs::ALPHA_IMPERCEPTIBLE`]) and runs the matching kernel. Fails with
/// [`PixoverError::UnsupportedFormatPair`] when no routine is registered for
/// the observed pair.
#[tracing::instrument(skip(dst, src))]
pub fn blend_image(
    dst: &mut Bitmap,
    src: &Bitmap,
    dst_r: &Rect,
    src_r: &Rect,
    global_alpha: u8,
) -> PixoverResult<()> {
    let (src_fmt, dst_fmt) = (src.format(), dst.format());
    let entry = REGISTRY
        .iter()
        .find(|e| e.src == src_fmt && e.dst == dst_fmt)
        .ok_or_else(|| PixoverError::unsupported_pair(src_fmt, dst_fmt))?;
    (entry.run)(dst, src, dst_r, src_r, global_alpha)
}

/// Whether [`blend_image`] has a specialized routine for blending a `src`
/// formatted source onto a `dst` formatted destination.
pub fn is_pair_supported(src: PixelFormat, dst: PixelFormat) -> bool {
    REGISTRY.iter().any(|e| e.src == src && e.dst == dst)
}

/// All (source, destination) format pairs the facade can dispatch.
pub fn supported_pairs() -> impl Iterator<Item = (PixelFormat, PixelFormat)> {
    REGISTRY.iter().map(|e| (e.src, e.dst))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/dispatch.rs"]
mod tests;
