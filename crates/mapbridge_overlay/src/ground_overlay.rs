//! Ground overlay construction.
//!
//! A ground overlay is a georeferenced image drawn over the map within given
//! coordinate bounds. The spec arrives as a message, the image is resolved
//! through [`ImageResolver`], and the native overlay object is built from
//! bounds plus image with the remaining visual parameters applied afterwards.

use crate::assets::{AssetKeyResolver, BundleLocator};
use crate::image_spec::OverlayImageSpec;
use crate::resolver::{ImageResolver, OverlayImage};
use mapbridge_msg::error::Result as MsgResult;
use mapbridge_msg::{value, LatLngBounds, Messageable, OverlayInfo};
use serde_json::{json, Value};

/// Decoded ground overlay request.
///
/// Built fresh from each incoming message and used once. `alpha` is carried
/// through exactly as received; values outside `[0, 1]` are not clamped and
/// reach the renderer unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundOverlaySpec {
    pub info: OverlayInfo,
    pub bounds: LatLngBounds,
    pub image: OverlayImageSpec,
    pub alpha: f64,
}

impl GroundOverlaySpec {
    /// Build the native overlay object for this spec.
    ///
    /// Returns `None` when the image fails to resolve; a ground overlay
    /// cannot exist without its image, and no visual parameters are applied
    /// in that case. Does not register the overlay with a map instance.
    pub fn build<A, B>(&self, resolver: &ImageResolver<A, B>) -> Option<GroundOverlay>
    where
        A: AssetKeyResolver,
        B: BundleLocator,
    {
        let Some(image) = resolver.resolve(&self.image) else {
            tracing::warn!(
                "Ground overlay '{}' not created: image did not resolve",
                self.info.id
            );
            return None;
        };
        let mut overlay = GroundOverlay::new(self.bounds, image);
        self.apply(&mut overlay);
        Some(overlay)
    }

    /// Apply the mutable visual parameters to an already-built overlay.
    fn apply(&self, overlay: &mut GroundOverlay) {
        overlay.set_alpha(self.alpha);
    }
}

impl Messageable for GroundOverlaySpec {
    fn to_message(&self) -> Value {
        json!({
            "info": self.info.to_message(),
            "bounds": self.bounds.to_message(),
            "image": self.image.to_message(),
            "alpha": self.alpha,
        })
    }

    fn from_message(message: &Value) -> MsgResult<Self> {
        let map = value::as_map(message, "groundOverlay")?;
        Ok(Self {
            info: OverlayInfo::from_message(value::field(map, "info")?)?,
            bounds: LatLngBounds::from_message(value::field(map, "bounds")?)?,
            image: OverlayImageSpec::from_message(value::field(map, "image")?)?,
            alpha: value::f64_field(map, "alpha")?,
        })
    }
}

/// The native ground overlay object handed to the rendering layer.
///
/// Constructed from bounds and a resolved image; `alpha` is a mutable
/// property defaulting to fully opaque.
#[derive(Debug, Clone)]
pub struct GroundOverlay {
    bounds: LatLngBounds,
    image: OverlayImage,
    alpha: f64,
}

impl GroundOverlay {
    pub fn new(bounds: LatLngBounds, image: OverlayImage) -> Self {
        Self {
            bounds,
            image,
            alpha: 1.0,
        }
    }

    pub fn bounds(&self) -> LatLngBounds {
        self.bounds
    }

    pub fn image(&self) -> &OverlayImage {
        &self.image
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}
