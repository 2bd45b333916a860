use std::time::Duration;

use bevy::prelude::*;
use bevy::time::Stopwatch;

/// Monotonic animation clock. Created stopped; the app starts it once the
/// scene is running.
#[derive(Resource, Debug, Default)]
pub struct RenderLoop {
    clock: Stopwatch,
    running: bool,
}

impl RenderLoop {
    pub fn start(&mut self) {
        self.running = true;
        self.clock.unpause();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.clock.pause();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    /// Advance by one frame. Stopped loops keep their time.
    pub fn tick(&mut self, delta: Duration) {
        if self.running {
            self.clock.tick(delta);
        }
    }
}

pub fn start_render_loop(mut render_loop: ResMut<RenderLoop>) {
    render_loop.start();
    info!("Render loop started");
}

pub fn tick_render_loop(mut render_loop: ResMut<RenderLoop>, time: Res<Time>) {
    render_loop.tick(time.delta());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_render_loop(
    mut render_loop: ResMut<RenderLoop>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    if render_loop.is_running() {
        render_loop.stop();
        info!("Render loop paused at {:.2}s", render_loop.elapsed_secs());
    } else {
        render_loop.start();
        info!("Render loop resumed");
    }
}
