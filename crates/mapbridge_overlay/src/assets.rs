//! Asset resolution seams.
//!
//! Bundled-asset images are addressed by a logical path chosen by the host
//! framework, not by a filesystem location. Two collaborators turn that
//! logical path into readable bytes:
//!
//! - [`AssetKeyResolver`] maps the logical path to a bundle lookup key
//! - [`BundleLocator`] maps the key to a concrete on-disk location
//!
//! The crate ships [`FsBundle`] for hosts whose assets live unpacked under a
//! single directory. Hosts with an indirection table (manifest, compiled
//! resource catalog) implement the traits themselves.

use camino::{Utf8Path, Utf8PathBuf};

/// Maps a logical asset path to a bundle lookup key.
///
/// This is a pure lookup with no failure signal; a key that does not exist in
/// the bundle is caught downstream by [`BundleLocator::locate`] returning
/// `None`.
pub trait AssetKeyResolver {
    fn asset_key(&self, path: &Utf8Path) -> String;
}

/// Maps a bundle lookup key to a concrete on-disk location, if one exists.
pub trait BundleLocator {
    fn locate(&self, key: &str) -> Option<Utf8PathBuf>;
}

impl<T: AssetKeyResolver + ?Sized> AssetKeyResolver for &T {
    fn asset_key(&self, path: &Utf8Path) -> String {
        (**self).asset_key(path)
    }
}

impl<T: BundleLocator + ?Sized> BundleLocator for &T {
    fn locate(&self, key: &str) -> Option<Utf8PathBuf> {
        (**self).locate(key)
    }
}

/// Directory-backed asset bundle.
///
/// Logical asset paths are used directly as bundle keys, and a key locates to
/// `root/key` when that file exists. This matches hosts that ship assets
/// unpacked next to the binary.
#[derive(Debug, Clone)]
pub struct FsBundle {
    root: Utf8PathBuf,
}

impl FsBundle {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl AssetKeyResolver for FsBundle {
    fn asset_key(&self, path: &Utf8Path) -> String {
        path.as_str().to_string()
    }
}

impl BundleLocator for FsBundle {
    fn locate(&self, key: &str) -> Option<Utf8PathBuf> {
        let candidate = self.root.join(key);
        if candidate.is_file() {
            Some(candidate)
        } else {
            None
        }
    }
}
