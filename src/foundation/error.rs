use crate::pixel::format::PixelFormat;

/// Convenience result type used across Pixover.
pub type PixoverResult<T> = Result<T, PixoverError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixoverError {
    /// Bad call-site data: a bitmap whose declared format does not match the
    /// routine it was passed to, or a rectangle outside its bitmap's bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dispatch facade has no specialized routine registered for the
    /// observed (source, destination) format combination.
    #[error("unsupported format pair: {src:?} onto {dst:?}")]
    UnsupportedFormatPair {
        /// Format of the source bitmap.
        src: PixelFormat,
        /// Format of the destination bitmap.
        dst: PixelFormat,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixoverError {
    /// Build a [`PixoverError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`PixoverError::UnsupportedFormatPair`] value.
    pub fn unsupported_pair(src: PixelFormat, dst: PixelFormat) -> Self {
        Self::UnsupportedFormatPair { src, dst }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
