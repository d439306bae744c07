//! Overlay image resolution.
//!
//! One parameterized routine covers every image mode: confirm the bytes
//! exist, decode them, normalize density through a PNG round-trip, and wrap
//! the result in an [`OverlayImage`] handle. Asset-mode resolution runs the
//! same pipeline after translating the logical path through the bundle
//! collaborators, and tags the handle with a reuse key.

use crate::assets::{AssetKeyResolver, BundleLocator};
use crate::bitmap::Bitmap;
use crate::error::{ResolveError, Result};
use crate::image_spec::{OverlayImageMode, OverlayImageSpec};
use camino::Utf8Path;
use std::fs;
use std::io;

/// Handle for a resolved, density-normalized overlay image.
///
/// The reuse key, when present, lets the rendering layer deduplicate repeated
/// uploads of the same bitmap. Filesystem-resolved images never carry one;
/// each resolution produces a distinct handle. Asset-resolved images use the
/// located bundle path as the key.
#[derive(Debug, Clone)]
pub struct OverlayImage {
    bitmap: Bitmap,
    reuse_key: Option<String>,
}

impl OverlayImage {
    pub fn new(bitmap: Bitmap) -> Self {
        Self {
            bitmap,
            reuse_key: None,
        }
    }

    pub fn with_reuse_key(bitmap: Bitmap, reuse_key: impl Into<String>) -> Self {
        Self {
            bitmap,
            reuse_key: Some(reuse_key.into()),
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn reuse_key(&self) -> Option<&str> {
        self.reuse_key.as_deref()
    }
}

/// Resolves [`OverlayImageSpec`]s into [`OverlayImage`] handles.
///
/// Holds the device display scale factor and the two asset-bundle
/// collaborators. Resolution is synchronous and blocking, keeps no cache, and
/// never retries; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct ImageResolver<A, B> {
    display_scale: f32,
    assets: A,
    bundle: B,
}

impl<A: AssetKeyResolver, B: BundleLocator> ImageResolver<A, B> {
    pub fn new(display_scale: f32, assets: A, bundle: B) -> Self {
        Self {
            display_scale,
            assets,
            bundle,
        }
    }

    pub fn display_scale(&self) -> f32 {
        self.display_scale
    }

    /// Resolve a spec, collapsing every failure to `None`.
    ///
    /// This is the external contract: callers building overlays only need to
    /// know whether an image was produced. Failures are logged at warn level
    /// with their distinct [`ResolveError`] kind before being swallowed.
    pub fn resolve(&self, spec: &OverlayImageSpec) -> Option<OverlayImage> {
        match self.try_resolve(spec) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!(
                    "Overlay image resolution failed: path='{}' mode={} error={}",
                    spec.path,
                    spec.mode,
                    e
                );
                None
            }
        }
    }

    /// Resolve a spec, reporting the exact failure kind.
    pub fn try_resolve(&self, spec: &OverlayImageSpec) -> Result<OverlayImage> {
        tracing::debug!(
            "Resolving overlay image: path='{}' mode={}",
            spec.path,
            spec.mode
        );
        match spec.mode {
            OverlayImageMode::File | OverlayImageMode::Temp | OverlayImageMode::Widget => {
                let bitmap = self.load_normalized(spec.path())?;
                Ok(OverlayImage::new(bitmap))
            }
            OverlayImageMode::Asset => self.resolve_asset(spec.path()),
        }
    }

    fn resolve_asset(&self, path: &Utf8Path) -> Result<OverlayImage> {
        let key = self.assets.asset_key(path);
        tracing::debug!("Asset key for '{}': '{}'", path, key);

        let located = self
            .bundle
            .locate(&key)
            .filter(|p| !p.as_str().is_empty())
            .ok_or_else(|| ResolveError::AssetNotFound(key.clone()))?;
        tracing::debug!("Asset '{}' located at '{}'", key, located);

        let bitmap = self.load_normalized(&located)?;
        Ok(OverlayImage::with_reuse_key(bitmap, located))
    }

    /// The shared existence / decode / re-encode / rescale pipeline.
    ///
    /// The PNG round-trip after the first decode is load-bearing: it strips
    /// source-format metadata and orientation tags, and the second decode
    /// attaches the device scale so the renderer treats the pixels as
    /// native-density. Skipping it yields blurred or oversized overlays on
    /// high-density displays.
    fn load_normalized(&self, path: &Utf8Path) -> Result<Bitmap> {
        let meta = match fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => return Err(ResolveError::NotFound(path.to_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ResolveError::NotFound(path.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        if meta.len() == 0 {
            return Err(ResolveError::EmptyFile(path.to_owned()));
        }

        let bytes = fs::read(path)?;
        tracing::debug!("Read {} bytes from '{}'", bytes.len(), path);

        let decoded = Bitmap::decode(&bytes)?;
        let png = decoded.encode_png()?;
        let normalized = Bitmap::decode_at_scale(&png, self.display_scale)?;
        tracing::debug!(
            "Normalized '{}': {}x{} px at scale {}",
            path,
            normalized.pixel_width(),
            normalized.pixel_height(),
            normalized.scale()
        );
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FsBundle;
    use camino::Utf8PathBuf;
    use image::{Rgba, RgbaImage};
    use std::cell::Cell;
    use std::fs;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn write_png(path: &Utf8Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        img.save(path.as_std_path()).unwrap();
    }

    fn bundle_resolver(root: &Utf8Path, scale: f32) -> ImageResolver<FsBundle, FsBundle> {
        let bundle = FsBundle::new(root.to_owned());
        ImageResolver::new(scale, bundle.clone(), bundle)
    }

    #[test]
    fn test_nonexistent_path_fails_for_every_mode() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let resolver = bundle_resolver(&utf8(&dir), 2.0);

        for mode in [
            OverlayImageMode::File,
            OverlayImageMode::Temp,
            OverlayImageMode::Widget,
            OverlayImageMode::Asset,
        ] {
            let spec = OverlayImageSpec::new(utf8(&dir).join("missing.png"), mode);
            assert!(resolver.resolve(&spec).is_none(), "mode {}", mode);
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = bundle_resolver(&utf8(&dir), 2.0);
        let spec = OverlayImageSpec::new(utf8(&dir).join("gone.png"), OverlayImageMode::File);

        assert!(matches!(
            resolver.try_resolve(&spec),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_zero_byte_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(&dir).join("zero.png");
        fs::write(&path, b"").unwrap();
        let resolver = bundle_resolver(&utf8(&dir), 2.0);
        let spec = OverlayImageSpec::new(path, OverlayImageMode::File);

        assert!(matches!(
            resolver.try_resolve(&spec),
            Err(ResolveError::EmptyFile(_))
        ));
        assert!(resolver.resolve(&spec).is_none());
    }

    #[test]
    fn test_garbage_bytes_are_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(&dir).join("garbage.png");
        fs::write(&path, b"not an image at all").unwrap();
        let resolver = bundle_resolver(&utf8(&dir), 2.0);
        let spec = OverlayImageSpec::new(path, OverlayImageMode::Temp);

        assert!(matches!(
            resolver.try_resolve(&spec),
            Err(ResolveError::Decode(_))
        ));
    }

    #[test]
    fn test_filesystem_modes_resolve_without_reuse_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(&dir).join("marker.png");
        write_png(&path, 16, 16);
        let resolver = bundle_resolver(&utf8(&dir), 3.0);

        for mode in [
            OverlayImageMode::File,
            OverlayImageMode::Temp,
            OverlayImageMode::Widget,
        ] {
            let image = resolver
                .resolve(&OverlayImageSpec::new(path.clone(), mode))
                .unwrap();
            assert_eq!(image.reuse_key(), None, "mode {}", mode);
            assert_eq!(image.bitmap().scale(), 3.0);
            assert_eq!(image.bitmap().pixel_width(), 16);
        }
    }

    #[test]
    fn test_normalized_bitmap_carries_display_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(&dir).join("dense.png");
        write_png(&path, 64, 32);
        let resolver = bundle_resolver(&utf8(&dir), 2.0);

        let image = resolver
            .resolve(&OverlayImageSpec::new(path, OverlayImageMode::File))
            .unwrap();
        assert_eq!(image.bitmap().pixel_width(), 64);
        assert_eq!(image.bitmap().logical_width(), 32.0);
    }

    #[test]
    fn test_asset_resolves_with_reuse_key() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        fs::create_dir_all(root.join("icons")).unwrap();
        write_png(&root.join("icons").join("pin.png"), 8, 8);
        let resolver = bundle_resolver(&root, 2.0);

        let image = resolver
            .resolve(&OverlayImageSpec::new(
                "icons/pin.png",
                OverlayImageMode::Asset,
            ))
            .unwrap();
        assert_eq!(
            image.reuse_key(),
            Some(root.join("icons").join("pin.png").as_str())
        );
    }

    struct CountingAssets {
        calls: Cell<usize>,
        key: &'static str,
    }

    impl AssetKeyResolver for CountingAssets {
        fn asset_key(&self, _path: &Utf8Path) -> String {
            self.calls.set(self.calls.get() + 1);
            self.key.to_string()
        }
    }

    struct CountingLocator {
        calls: Cell<usize>,
    }

    impl BundleLocator for CountingLocator {
        fn locate(&self, _key: &str) -> Option<Utf8PathBuf> {
            self.calls.set(self.calls.get() + 1);
            None
        }
    }

    #[test]
    fn test_unlocatable_asset_invokes_each_collaborator_once() {
        let assets = CountingAssets {
            calls: Cell::new(0),
            key: "icons/pin.png",
        };
        let locator = CountingLocator {
            calls: Cell::new(0),
        };
        let resolver = ImageResolver::new(2.0, &assets, &locator);

        let result = resolver.try_resolve(&OverlayImageSpec::new(
            "icons/pin.png",
            OverlayImageMode::Asset,
        ));
        assert!(matches!(
            result,
            Err(ResolveError::AssetNotFound(key)) if key == "icons/pin.png"
        ));
        assert_eq!(assets.calls.get(), 1);
        assert_eq!(locator.calls.get(), 1);
    }

    struct EmptyPathLocator;

    impl BundleLocator for EmptyPathLocator {
        fn locate(&self, _key: &str) -> Option<Utf8PathBuf> {
            Some(Utf8PathBuf::new())
        }
    }

    #[test]
    fn test_empty_located_path_is_asset_not_found() {
        let assets = CountingAssets {
            calls: Cell::new(0),
            key: "k",
        };
        let resolver = ImageResolver::new(2.0, &assets, EmptyPathLocator);

        assert!(matches!(
            resolver.try_resolve(&OverlayImageSpec::new("k", OverlayImageMode::Asset)),
            Err(ResolveError::AssetNotFound(_))
        ));
    }

    #[test]
    fn test_none_sentinel_resolves_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = bundle_resolver(&utf8(&dir), 2.0);
        assert!(resolver.resolve(&OverlayImageSpec::none()).is_none());
    }
}
