//! Pixover composites pixel buffers that disagree about their byte layout.
//!
//! The engine blends a source [`Bitmap`] onto a destination [`Bitmap`] when the
//! two use different pixel encodings (packed 16-bit 5-6-5 RGB, 3-byte RGB,
//! 4-byte RGBA), optionally modulated by a single global alpha value.
//!
//! # Pipeline overview
//!
//! 1. **Codec**: each [`PixelFormat`] has a [`PixelCodec`] that packs/unpacks
//!    its native byte layout to/from the canonical [`Rgba8`] color.
//! 2. **Kernels**: two format-agnostic algorithms (opaque copy-with-conversion
//!    and source-over blend) written once against the codec abstraction.
//! 3. **Pairs**: the kernels are monomorphized per (source, destination)
//!    format pair into named routines such as [`blend_image_bgr888_rgb565`].
//! 4. **Dispatch**: [`blend_image`] maps the runtime format tags of the two
//!    bitmaps to the matching specialized routine via an immutable registry.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: all blend math is fixed-width integer arithmetic with
//!   a single documented rounding rule; a call either fails before touching
//!   the destination or writes every covered pixel.
//! - **No hidden state**: the engine borrows the two bitmaps for the duration
//!   of one call; the pair registry is immutable static data.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bitmap;
mod blend;
mod convert;
mod foundation;
mod pixel;

pub use bitmap::buffer::Bitmap;
pub use blend::dispatch::{blend_image, is_pair_supported, supported_pairs};
pub use blend::fill::fill_rect;
pub use blend::pairs::{
    ALPHA_FULLY_OPAQUE, ALPHA_IMPERCEPTIBLE, blend_image_bgr888_bgra8888,
    blend_image_bgr888_rgb565, blend_image_bgra8888_bgra8888, blend_image_bgra8888_rgb565,
    blend_image_bgra8888_rgba8888, blend_image_rgb565_rgb565, blend_image_rgb565_rgba8888,
    blend_image_rgb888_rgb565, blend_image_rgb888_rgba8888, blend_image_rgba8888_rgb565,
    blend_image_rgba8888_rgba8888,
};
pub use convert::decode::{bitmap_from_rgba8, bitmap_to_rgba8, decode_bitmap};
pub use foundation::core::{Rect, Rgba8};
pub use foundation::error::{PixoverError, PixoverResult};
pub use pixel::codec::{Bgr565, Bgr888, Bgra8888, PixelCodec, Rgb565, Rgb888, Rgba8888};
pub use pixel::format::PixelFormat;
