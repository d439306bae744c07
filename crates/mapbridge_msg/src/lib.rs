//! Message codec layer for the mapbridge overlay bridge.
//!
//! Overlay descriptors cross the platform-channel boundary as generic
//! key-value messages. This crate defines the Rust side of that contract:
//!
//! - [`Messageable`]: bidirectional conversion between a typed value and a
//!   [`serde_json::Value`] message
//! - [`value`]: typed field-extraction helpers used by `from_message` impls
//! - [`LatLng`] / [`LatLngBounds`]: coordinate value types
//! - [`OverlayInfo`]: overlay identity carried through the bridge
//!
//! Decoding is strict: a missing required field, a wrong-typed field, or an
//! unrecognized enum tag fails the whole message with a [`MsgError`]. A
//! malformed request cannot be serviced, so there is no partial decode.

use serde_json::Value;

pub mod error;
pub mod geometry;
pub mod info;
pub mod value;

pub use error::{MsgError, Result};
pub use geometry::{LatLng, LatLngBounds};
pub use info::OverlayInfo;

/// Bidirectional flat mapping between a typed value and its message form.
///
/// Encoding is infallible (a valid value always has a message form). Decoding
/// validates every required field and fails with [`MsgError`] on the first
/// problem. Implementations must uphold the round-trip law
/// `from_message(&x.to_message()) == Ok(x)`.
pub trait Messageable: Sized {
    /// Render this value as a generic message.
    fn to_message(&self) -> Value;

    /// Parse a value of this type out of a generic message.
    fn from_message(message: &Value) -> Result<Self>;
}
