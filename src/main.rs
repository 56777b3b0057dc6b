//! Tilt Balls entry point
//!
//! Runs a toy headless against an in-memory framebuffer and a synthetic
//! wobbling accelerometer. Pass a settings JSON path as the first argument.

use tiltballs::platform::WobbleAccelerometer;
use tiltballs::renderer::FrameBuffer;
use tiltballs::{BallApp, Button, Host, Settings, Variant};

/// Badge display size
const DISPLAY_WIDTH: i32 = 135;
const DISPLAY_HEIGHT: i32 = 240;

/// Virtual run length
const RUN_MS: u64 = 10_000;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let variant = settings.variant;
    log::info!("Tilt Balls starting ({})", variant.as_str());

    let mut host = Host::new(
        BallApp::new(settings),
        FrameBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
        WobbleAccelerometer::new(0.05),
    );
    host.activate();

    if variant == Variant::Sandbox {
        // Build a small wall a few steps up from the corner
        for button in [Button::Up, Button::Up, Button::Up] {
            host.press(button);
        }
        for _ in 0..4 {
            host.press(Button::Confirm);
            host.press(Button::Right);
        }
    }

    let ticks = host.run_for(RUN_MS);
    let app = host.app();
    let collided = app.discs().iter().filter(|d| d.has_collision).count();
    log::info!(
        "Ran {} ticks in {} ms: {} discs ({} static, {} blocked), frame rate {:?}",
        ticks,
        RUN_MS,
        app.discs().len(),
        app.discs().static_count(),
        collided,
        app.frame_rate()
    );

    host.deactivate();
}
