/*
 * Input Module
 *
 * This module samples the pointer once per frame and throttles box spawning
 * while the primary button is held. It also hosts the window event handlers.
 *
 * Throttle rhythm with a threshold of 3: frames 1, 2, 3 count up, frame 4
 * spawns and resets the counter, so a held button spawns every 4th frame.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;

// Pointer state sampled once per frame, in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub primary_down: bool,
    pub position: Vec2,
}

impl PointerState {
    pub fn held_at(position: Vec2) -> Self {
        Self {
            primary_down: true,
            position,
        }
    }

    pub fn released() -> Self {
        Self {
            primary_down: false,
            position: Vec2::ZERO,
        }
    }

    pub fn sample(app: &App, camera: &Camera) -> Self {
        Self {
            primary_down: app.mouse.buttons.left().is_down(),
            position: camera.window_to_pixel(vec2(app.mouse.x, app.mouse.y)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpawnThrottle {
    threshold: u32,
    counter: u32,
    reset_on_release: bool,
}

impl SpawnThrottle {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            counter: 0,
            reset_on_release: false,
        }
    }

    pub fn reset_on_release(mut self, enabled: bool) -> Self {
        self.reset_on_release = enabled;
        self
    }

    /// Advance one frame. Returns `true` on frames where a box should spawn.
    pub fn tick(&mut self, held: bool) -> bool {
        if !held {
            if self.reset_on_release {
                self.counter = 0;
            }
            return false;
        }

        if self.counter >= self.threshold {
            self.counter = 0;
            true
        } else {
            self.counter += 1;
            false
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::D {
        model.show_debug = !model.show_debug;
        log::debug!("debug overlay {}", if model.show_debug { "on" } else { "off" });
    }
}
