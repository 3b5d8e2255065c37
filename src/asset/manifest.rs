//! Asset manifest
//!
//! The fixed list of files the game loads at startup. The manifest is RON,
//! compiled into the binary, so a build can never ship without it; the
//! files it names live under `ASSET_ROOT`.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::audio::SoundCue;
use crate::scene::SpriteId;

/// Directory the manifest paths are relative to
pub const ASSET_ROOT: &str = "assets";

const EMBEDDED_MANIFEST: &str = include_str!("../../assets/manifest.ron");

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// Manifest could not be parsed or is incomplete
    Manifest(String),
    /// Files named by the manifest are not on disk
    Missing(Vec<String>),
    /// A file exists but the loader rejected it
    Load { path: String, reason: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Manifest(msg) => write!(f, "Manifest error: {}", msg),
            AssetError::Missing(paths) => write!(f, "Missing asset files: {}", paths.join(", ")),
            AssetError::Load { path, reason } => write!(f, "Failed to load {}: {}", path, reason),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<ron::error::SpannedError> for AssetError {
    fn from(e: ron::error::SpannedError) -> Self {
        AssetError::Manifest(e.to_string())
    }
}

/// Paths for every texture, the font and every sound cue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub textures: HashMap<SpriteId, String>,
    pub font: String,
    pub sounds: HashMap<SoundCue, String>,
}

impl AssetManifest {
    /// The manifest built into the binary
    pub fn embedded() -> Result<Self, AssetError> {
        Self::parse(EMBEDDED_MANIFEST)
    }

    /// Parse and validate manifest text
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let manifest: AssetManifest = ron::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Every sprite and every cue needs a file
    pub fn validate(&self) -> Result<(), AssetError> {
        let missing_sprites: Vec<String> = SpriteId::ALL
            .iter()
            .filter(|id| !self.textures.contains_key(*id))
            .map(|id| format!("{:?}", id))
            .collect();
        let missing_cues: Vec<String> = SoundCue::ALL
            .iter()
            .filter(|cue| !self.sounds.contains_key(*cue))
            .map(|cue| format!("{:?}", cue))
            .collect();

        if !missing_sprites.is_empty() || !missing_cues.is_empty() {
            let mut names = missing_sprites;
            names.extend(missing_cues);
            return Err(AssetError::Manifest(format!("no entry for {}", names.join(", "))));
        }
        if self.font.is_empty() {
            return Err(AssetError::Manifest("no font".to_string()));
        }
        Ok(())
    }

    /// Every relative path in the manifest, in a stable order
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = SpriteId::ALL
            .iter()
            .filter_map(|id| self.textures.get(id).map(String::as_str))
            .collect();
        paths.push(self.font.as_str());
        paths.extend(
            SoundCue::ALL
                .iter()
                .filter_map(|cue| self.sounds.get(cue).map(String::as_str)),
        );
        paths
    }

    /// Manifest path joined onto the asset root, as the loaders want it
    pub fn resolve(relative: &str) -> String {
        format!("{}/{}", ASSET_ROOT, relative)
    }

    /// Check every file exists under `root` before anything is loaded,
    /// so a broken install reports all missing files at once.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn check_files(&self, root: &Path) -> Result<(), AssetError> {
        let missing: Vec<String> = self
            .paths()
            .into_iter()
            .map(|p| root.join(p))
            .filter(|p| !p.is_file())
            .map(|p: PathBuf| p.display().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AssetError::Missing(missing))
        }
    }
}
