//! Loaded assets
//!
//! GPU textures, the font and decoded sounds, loaded once from the manifest
//! before the first frame. Nothing is loaded lazily.

use std::collections::HashMap;
use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;
use crate::audio::SoundCue;
use crate::scene::SpriteId;
use super::manifest::{AssetError, AssetManifest};

pub struct Assets {
    textures: HashMap<SpriteId, Texture2D>,
    font: Font,
    sounds: HashMap<SoundCue, Sound>,
}

impl Assets {
    /// Load everything the manifest names. The first failure aborts.
    pub async fn load(manifest: &AssetManifest) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();
        for id in SpriteId::ALL {
            let rel = manifest
                .textures
                .get(&id)
                .ok_or_else(|| AssetError::Manifest(format!("no entry for {:?}", id)))?;
            let path = AssetManifest::resolve(rel);
            let texture = load_texture(&path).await.map_err(|e| load_error(&path, e))?;
            textures.insert(id, texture);
        }
        println!("Loaded {} textures", textures.len());

        let font_path = AssetManifest::resolve(&manifest.font);
        let font = load_ttf_font(&font_path).await.map_err(|e| load_error(&font_path, e))?;
        println!("Loaded font {}", font_path);

        let mut sounds = HashMap::new();
        for cue in SoundCue::ALL {
            let rel = manifest
                .sounds
                .get(&cue)
                .ok_or_else(|| AssetError::Manifest(format!("no entry for {:?}", cue)))?;
            let path = AssetManifest::resolve(rel);
            let sound = load_sound(&path).await.map_err(|e| load_error(&path, e))?;
            sounds.insert(cue, sound);
        }
        println!("Loaded {} sounds", sounds.len());

        Ok(Self { textures, font, sounds })
    }

    pub fn texture(&self, id: SpriteId) -> Option<&Texture2D> {
        self.textures.get(&id)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn sound(&self, cue: SoundCue) -> Option<&Sound> {
        self.sounds.get(&cue)
    }
}

fn load_error(path: &str, e: macroquad::Error) -> AssetError {
    AssetError::Load {
        path: path.to_string(),
        reason: e.to_string(),
    }
}
