use crate::foundation::core::Rect;
use crate::foundation::error::{PixoverError, PixoverResult};
use crate::pixel::format::PixelFormat;

/// Pixel storage with a fixed layout: contiguous rows of `stride` bytes,
/// interpreted per the carried [`PixelFormat`].
///
/// A bitmap is constructed and owned by the caller; the engine borrows it
/// for the duration of one compositing call (read-only as a source, mutable
/// as a destination) and never resizes or reformats it.
#[derive(Clone, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap with a tight stride
    /// (`width * bytes_per_pixel`).
    pub fn new(width: u32, height: u32, format: PixelFormat) -> PixoverResult<Self> {
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| PixoverError::invalid_argument("bitmap row size overflow"))?;
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| PixoverError::invalid_argument("bitmap size overflow"))?;
        Ok(Self {
            width,
            height,
            stride,
            format,
            data: vec![0; len],
        })
    }

    /// Adopt caller-provided pixel bytes.
    ///
    /// `data` must hold exactly `stride * height` bytes and `stride` must be
    /// at least `width * bytes_per_pixel` of `format`.
    pub fn from_vec(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> PixoverResult<Self> {
        let row_bytes = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| PixoverError::invalid_argument("bitmap row size overflow"))?;
        if stride < row_bytes {
            return Err(PixoverError::invalid_argument(format!(
                "stride {stride} is smaller than row size {row_bytes}"
            )));
        }
        let expected = stride
            .checked_mul(height as usize)
            .ok_or_else(|| PixoverError::invalid_argument("bitmap size overflow"))?;
        if data.len() != expected {
            return Err(PixoverError::invalid_argument(format!(
                "bitmap data holds {} bytes, stride * height requires {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row pitch in bytes; at least `width * bytes_per_pixel`.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The byte layout this bitmap's pixels use.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel bytes, row-major with `stride` pitch.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the bitmap, returning its storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Whether `r` lies entirely within this bitmap's bounds.
    pub fn contains(&self, r: &Rect) -> bool {
        u64::from(r.x) + u64::from(r.width) <= u64::from(self.width)
            && u64::from(r.y) + u64::from(r.height) <= u64::from(self.height)
    }

    /// The rect covering the whole bitmap.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        let row_bytes = self.width as usize * self.format.bytes_per_pixel();
        &self.data[start..start + row_bytes]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let row_bytes = self.width as usize * self.format.bytes_per_pixel();
        &mut self.data[start..start + row_bytes]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/buffer.rs"]
mod tests;
