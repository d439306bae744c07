//! Overlay identity carried through the bridge.

use crate::error::Result;
use crate::value;
use crate::Messageable;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Identifies an overlay instance across the platform channel.
///
/// `kind` is the overlay category tag (wire key `type`) and `id` is the
/// host-assigned instance identifier. The bridge never interprets either
/// value; it only carries them so the host can address the overlay later.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl OverlayInfo {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl Messageable for OverlayInfo {
    fn to_message(&self) -> Value {
        json!({
            "type": self.kind,
            "id": self.id,
        })
    }

    fn from_message(message: &Value) -> Result<Self> {
        let map = value::as_map(message, "info")?;
        Ok(Self {
            kind: value::str_field(map, "type")?.to_string(),
            id: value::str_field(map, "id")?.to_string(),
        })
    }
}
