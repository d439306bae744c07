//! Error types for overlay image resolution.
//!
//! All fallible functions in this crate return [`Result<T>`], which uses
//! [`ResolveError`] as the error type. The distinct variants exist for logging
//! and tests; at the overlay-construction boundary every one of them collapses
//! to "no image produced" (see [`ImageResolver::resolve`](crate::ImageResolver::resolve)).

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving an overlay image.
///
/// Every variant is terminal for the resolution attempt that produced it;
/// there are no retries and no partial images.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The image path does not denote an existing file.
    #[error("image file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// The image file exists but is zero bytes long.
    #[error("image file is empty: {0}")]
    EmptyFile(Utf8PathBuf),

    /// The file bytes are not a decodable image, or re-encoding the
    /// normalized bitmap failed.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// A logical asset key has no location in the resource bundle.
    #[error("asset not found in bundle: '{0}'")]
    AssetNotFound(String),

    /// Reading file bytes or attributes failed for a reason other than
    /// absence (permissions, transient filesystem errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
