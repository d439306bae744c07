//! Overlay image resolution and ground overlay construction.
//!
//! This crate is the bridge between the host framework's abstract overlay
//! descriptions and the native map renderer's overlay objects:
//!
//! - **Image resolution**: an [`OverlayImageSpec`] (file path, transient
//!   file, widget-rendered bitmap, or bundled asset) is turned into a
//!   decoded, density-normalized [`OverlayImage`] handle
//! - **Overlay construction**: a [`GroundOverlaySpec`] combines a resolved
//!   image with coordinate bounds and opacity into a [`GroundOverlay`]
//! - **Messaging**: both specs implement
//!   [`Messageable`](mapbridge_msg::Messageable) for cross-boundary transport
//!
//! Every resolution failure collapses to "no image" at the construction
//! boundary; nothing panics past this crate and nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use mapbridge_overlay::{FsBundle, ImageResolver, OverlayImageMode, OverlayImageSpec};
//!
//! let bundle = FsBundle::new("/app/resources");
//! let resolver = ImageResolver::new(3.0, bundle.clone(), bundle);
//!
//! let spec = OverlayImageSpec::new("icons/pin.png", OverlayImageMode::Asset);
//! if let Some(image) = resolver.resolve(&spec) {
//!     println!(
//!         "{}x{} logical points, reuse key {:?}",
//!         image.bitmap().logical_width(),
//!         image.bitmap().logical_height(),
//!         image.reuse_key(),
//!     );
//! }
//! ```

pub mod assets;
pub mod bitmap;
pub mod error;
pub mod ground_overlay;
pub mod image_spec;
pub mod resolver;

// Re-export main types
pub use assets::{AssetKeyResolver, BundleLocator, FsBundle};
pub use bitmap::Bitmap;
pub use error::{ResolveError, Result};
pub use ground_overlay::{GroundOverlay, GroundOverlaySpec};
pub use image_spec::{OverlayImageMode, OverlayImageSpec};
pub use resolver::{ImageResolver, OverlayImage};
