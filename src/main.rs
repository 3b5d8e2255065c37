//! TIMBER!!!
//!
//! Chop the tree from the left or the right, keep out from under the
//! falling branches, and keep chopping before the clock runs dry.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod audio;
mod game;
mod input;
mod renderer;
mod scene;

use macroquad::prelude::*;
use app::AppState;
use asset::{AssetManifest, Assets};
use game::GameEvent;
use input::InputState;

fn window_conf() -> Conf {
    Conf {
        window_title: "Timber!!!".to_string(),
        window_width: 1920,
        window_height: 1080,
        high_dpi: true,
        // WASM: browser handles sizing
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: true,
        ..Default::default()
    }
}

/// Seed for the process-wide RNG, taken once from the wall clock
fn startup_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Started => println!("Round started"),
        GameEvent::Squished { score } => println!("Squished! Final score: {}", score),
        GameEvent::OutOfTime { score } => println!("Out of time! Final score: {}", score),
        GameEvent::Chopped { .. } => {}
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let manifest = match AssetManifest::embedded() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Fatal: {}", e);
            return;
        }
    };
    println!("Asset manifest: {} files", manifest.paths().len());

    // Native: report every missing file up front
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = manifest.check_files(std::path::Path::new(asset::ASSET_ROOT)) {
            eprintln!("Fatal: {}", e);
            return;
        }
    }

    let assets = match Assets::load(&manifest).await {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Fatal: {}", e);
            return;
        }
    };

    let seed = startup_seed();
    println!("RNG seed: {}", seed);

    let mut app = AppState::new(seed);
    let mut input = InputState::new();
    if input.has_gamepad() {
        println!("Gamepad connected");
    }

    println!("=== TIMBER v{} ===", VERSION);

    loop {
        let frame_input = input.poll();
        if frame_input.quit {
            break;
        }

        app.step(&frame_input, get_frame_time());

        for event in app.game.events.drain() {
            log_event(&event);
            audio::play_event(&event, &assets);
        }

        let commands = scene::build_scene(&app.game);
        renderer::draw_scene(&commands, &assets);

        next_frame().await;
    }
}
