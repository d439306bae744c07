//! Coordinate value types shared by every overlay descriptor.

use crate::error::Result;
use crate::value;
use crate::Messageable;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A WGS84 coordinate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Messageable for LatLng {
    fn to_message(&self) -> Value {
        json!({
            "lat": self.lat,
            "lng": self.lng,
        })
    }

    fn from_message(message: &Value) -> Result<Self> {
        let map = value::as_map(message, "latLng")?;
        Ok(Self {
            lat: value::f64_field(map, "lat")?,
            lng: value::f64_field(map, "lng")?,
        })
    }
}

/// A rectangular coordinate region, south-west and north-east corners.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    #[serde(rename = "southWest")]
    pub south_west: LatLng,
    #[serde(rename = "northEast")]
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
}

impl Messageable for LatLngBounds {
    fn to_message(&self) -> Value {
        json!({
            "southWest": self.south_west.to_message(),
            "northEast": self.north_east.to_message(),
        })
    }

    fn from_message(message: &Value) -> Result<Self> {
        let map = value::as_map(message, "bounds")?;
        Ok(Self {
            south_west: LatLng::from_message(value::field(map, "southWest")?)?,
            north_east: LatLng::from_message(value::field(map, "northEast")?)?,
        })
    }
}
