//! Error types for the high level API.

use texture_swizzle::SwizzleError;
use thiserror::Error;

/// Errors returned by [`SwizzleBuilder`](crate::SwizzleBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// No platform was set on the builder.
    #[error("No platform set. Call `platform` before converting.")]
    MissingPlatform,

    /// No image size was set on the builder.
    #[error("No image size set. Call `image_size` before converting.")]
    MissingImageSize,

    /// The conversion itself failed.
    #[error(transparent)]
    Swizzle(#[from] SwizzleError),
}
