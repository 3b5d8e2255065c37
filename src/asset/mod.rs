//! Asset Module
//!
//! Startup loading of every image, the font and every sound:
//! - Manifest: embedded RON listing each file, validated before use
//! - Library: the loaded GPU/audio handles the renderer and audio use
//!
//! Any failure here is fatal; the game never runs with missing assets.

mod library;
mod manifest;

pub use library::Assets;
pub use manifest::{AssetError, AssetManifest, ASSET_ROOT};
