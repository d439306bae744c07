//! The per-request overlay image descriptor.

use camino::{Utf8Path, Utf8PathBuf};
use mapbridge_msg::error::{MsgError, Result as MsgResult};
use mapbridge_msg::{value, Messageable};
use serde_json::{json, Value};
use std::fmt;

/// How an [`OverlayImageSpec`] path should be interpreted.
///
/// `File`, `Temp` and `Widget` all denote an absolute filesystem path and are
/// resolved identically; they differ only in who produced the file (a user
/// file, a transient download, a widget rendered to disk). `Asset` denotes a
/// logical path into the host's bundled resources and goes through the asset
/// lookup indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayImageMode {
    File,
    Temp,
    Widget,
    Asset,
}

impl OverlayImageMode {
    /// The wire tag for this mode. Tags are matched case-sensitively.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayImageMode::File => "file",
            OverlayImageMode::Temp => "temp",
            OverlayImageMode::Widget => "widget",
            OverlayImageMode::Asset => "asset",
        }
    }

    /// Parse a wire tag. Returns `None` for anything but the four exact tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "file" => Some(OverlayImageMode::File),
            "temp" => Some(OverlayImageMode::Temp),
            "widget" => Some(OverlayImageMode::Widget),
            "asset" => Some(OverlayImageMode::Asset),
            _ => None,
        }
    }

    /// Whether this mode resolves directly from the filesystem (as opposed to
    /// the bundled-asset indirection).
    pub fn is_filesystem(&self) -> bool {
        !matches!(self, OverlayImageMode::Asset)
    }
}

impl fmt::Display for OverlayImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes where an overlay image comes from.
///
/// Built fresh from each incoming message, used for one resolution attempt,
/// then discarded. An empty path is the designated "no image" sentinel; it is
/// not rejected at construction and simply fails resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayImageSpec {
    pub path: Utf8PathBuf,
    pub mode: OverlayImageMode,
}

impl OverlayImageSpec {
    pub fn new(path: impl Into<Utf8PathBuf>, mode: OverlayImageMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// The "no image" sentinel: empty path, `Temp` mode.
    pub fn none() -> Self {
        Self::new("", OverlayImageMode::Temp)
    }

    /// True for the "no image" sentinel.
    pub fn is_none(&self) -> bool {
        self.path.as_str().is_empty()
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Messageable for OverlayImageSpec {
    fn to_message(&self) -> Value {
        json!({
            "path": self.path.as_str(),
            "mode": self.mode.as_str(),
        })
    }

    fn from_message(message: &Value) -> MsgResult<Self> {
        let map = value::as_map(message, "image")?;
        let path = value::str_field(map, "path")?;
        let tag = value::str_field(map, "mode")?;
        let mode = OverlayImageMode::from_tag(tag).ok_or_else(|| MsgError::UnknownTag {
            field: "mode",
            tag: tag.to_string(),
        })?;
        Ok(Self::new(path, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_all_modes() {
        for mode in [
            OverlayImageMode::File,
            OverlayImageMode::Temp,
            OverlayImageMode::Widget,
            OverlayImageMode::Asset,
        ] {
            let spec = OverlayImageSpec::new("/tmp/marker.png", mode);
            assert_eq!(
                OverlayImageSpec::from_message(&spec.to_message()).unwrap(),
                spec
            );
        }
    }

    #[test]
    fn test_unknown_mode_tag() {
        let v = json!({"path": "/tmp/a.png", "mode": "Asset"});
        assert_eq!(
            OverlayImageSpec::from_message(&v).unwrap_err(),
            MsgError::UnknownTag {
                field: "mode",
                tag: "Asset".to_string()
            }
        );
    }

    #[test]
    fn test_missing_path_field() {
        let v = json!({"mode": "file"});
        assert_eq!(
            OverlayImageSpec::from_message(&v).unwrap_err(),
            MsgError::MissingField("path")
        );
    }

    #[test]
    fn test_none_sentinel() {
        let spec = OverlayImageSpec::none();
        assert!(spec.is_none());
        assert_eq!(spec.mode, OverlayImageMode::Temp);
        // The sentinel still encodes and round-trips like any other spec.
        assert_eq!(
            OverlayImageSpec::from_message(&spec.to_message()).unwrap(),
            spec
        );
    }

    #[test]
    fn test_filesystem_mode_split() {
        assert!(OverlayImageMode::File.is_filesystem());
        assert!(OverlayImageMode::Temp.is_filesystem());
        assert!(OverlayImageMode::Widget.is_filesystem());
        assert!(!OverlayImageMode::Asset.is_filesystem());
    }
}
