//! Asset manifest and path resolution
//!
//! The game never decodes images or sounds itself; the front end does. What it
//! does own is the list of files a front end needs and where to find them,
//! including inside a bundled executable's unpack directory.

use std::path::{Path, PathBuf};

use crate::audio::SoundEffect;
use crate::error::AssetError;
use crate::renderer::Visual;

/// Set by bundlers to the directory the packaged files were unpacked into
pub const BUNDLE_DIR_ENV: &str = "EPIC_SHOOTER_BUNDLE_DIR";

/// Sounds a front end loads up front that no gameplay cue triggers
const EXTRA_SOUNDS: [&str; 1] = [
    // Engine hum while the ship moves
    "tone.wav",
];

/// Resolve a relative asset path against the bundle directory if running
/// packaged, otherwise against the current directory.
pub fn resource_path(relative: impl AsRef<Path>) -> PathBuf {
    let base = std::env::var_os(BUNDLE_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default();
    base.join(relative)
}

/// Every file the game needs, relative to an asset root
#[derive(Debug, Clone)]
pub struct AssetManifest {
    root: PathBuf,
}

impl AssetManifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Manifest rooted at `resource_path(".")`
    pub fn bundled() -> Self {
        Self::new(resource_path("."))
    }

    pub fn image_path(&self, visual: Visual) -> PathBuf {
        self.root.join("images").join(visual.file_name())
    }

    pub fn sound_path(&self, effect: SoundEffect) -> PathBuf {
        self.root.join("sounds").join(effect.file_name())
    }

    /// All required files, images first
    pub fn files(&self) -> Vec<PathBuf> {
        let sounds = self.root.join("sounds");
        Visual::ALL
            .iter()
            .map(|&v| self.image_path(v))
            .chain(SoundEffect::ALL.iter().map(|&e| self.sound_path(e)))
            .chain(EXTRA_SOUNDS.iter().map(|name| sounds.join(name)))
            .collect()
    }

    /// Fail on the first missing file
    pub fn verify(&self) -> Result<(), AssetError> {
        for path in self.files() {
            if !path.is_file() {
                return Err(AssetError::Missing { path });
            }
        }
        log::info!("All assets present under {}", self.root.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lists_every_asset() {
        let manifest = AssetManifest::new("/game");
        let files = manifest.files();
        assert_eq!(files.len(), 9);
        assert!(files.contains(&PathBuf::from("/game/images/meteor.png")));
        assert!(files.contains(&PathBuf::from("/game/sounds/explosion (9).wav")));
        assert!(files.contains(&PathBuf::from("/game/sounds/tone.wav")));
    }

    #[test]
    fn test_resource_path_prefers_bundle_dir() {
        let bundle = std::env::temp_dir().join("epic_shooter_bundle");

        // Only this test touches the variable
        unsafe { std::env::set_var(BUNDLE_DIR_ENV, &bundle) };
        assert_eq!(resource_path("images/x.png"), bundle.join("images/x.png"));
        let player = AssetManifest::bundled().image_path(Visual::Player);
        assert_eq!(player, bundle.join(".").join("images/player.png"));

        unsafe { std::env::remove_var(BUNDLE_DIR_ENV) };
        let cwd = std::env::current_dir().expect("current dir");
        assert_eq!(resource_path("images/x.png"), cwd.join("images/x.png"));
    }

    #[test]
    fn test_resource_path_keeps_absolute_paths() {
        let absolute = std::env::temp_dir().join("assets");
        assert_eq!(resource_path(&absolute), absolute);
    }

    #[test]
    fn test_verify_reports_missing_file() {
        let manifest = AssetManifest::new("/definitely/not/a/real/asset/root");
        match manifest.verify() {
            Err(AssetError::Missing { path }) => {
                assert!(path.ends_with("images/player.png"));
            }
            other => panic!("expected missing asset, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_complete_directory() {
        let root = std::env::temp_dir().join(format!("epic_shooter_assets_{}", std::process::id()));
        let manifest = AssetManifest::new(root.clone());
        for path in manifest.files() {
            std::fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
            std::fs::write(&path, b"").expect("write");
        }
        assert!(manifest.verify().is_ok());
        let _ = std::fs::remove_dir_all(&root);
    }
}
