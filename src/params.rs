/*
 * Sandbox Parameters Module
 *
 * This module defines the SandboxParams struct holding every tunable of the
 * sandbox. There is no runtime configuration: the Default implementation is
 * the configuration. Tests build variants of it to exercise edge cases.
 */

use nannou::prelude::*;

use crate::error::SandboxError;
use crate::physics::Material;
use crate::units::PixelRect;

pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
pub const PIXELS_PER_METER: f32 = 100.0;
pub const TIME_STEP: f32 = 1.0 / 60.0;
pub const SUB_STEPS: usize = 4;
pub const TARGET_FPS: f64 = 60.0;
pub const SPAWN_THRESHOLD: u32 = 3;
pub const BOX_SIZE_MIN: i32 = 4;
pub const BOX_SIZE_MAX: i32 = 20;

pub struct SandboxParams {
    pub window_width: u32,
    pub window_height: u32,
    pub title: &'static str,
    pub pixels_per_meter: f32,
    // Physics space is y-down like pixel space, so positive y pulls toward the bottom
    pub gravity: Vec2,
    pub time_step: f32,
    pub sub_steps: usize,
    pub target_fps: f64,
    // Spawn throttle
    pub spawn_threshold: u32,
    pub reset_throttle_on_release: bool,
    // Boxes
    pub box_size_min: i32,
    pub box_size_max: i32,
    pub box_material: Material,
    pub max_boxes: Option<usize>,
    // Layout
    pub platforms: Vec<PixelRect>,
    // Rendering
    pub background_color: Srgb<u8>,
    pub box_color: Srgb<u8>,
    pub platform_color: Srgb<u8>,
    pub show_debug: bool,
}

impl Default for SandboxParams {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: "Box Sandbox",
            pixels_per_meter: PIXELS_PER_METER,
            gravity: vec2(0.0, 10.0),
            time_step: TIME_STEP,
            sub_steps: SUB_STEPS,
            target_fps: TARGET_FPS,
            spawn_threshold: SPAWN_THRESHOLD,
            reset_throttle_on_release: false,
            box_size_min: BOX_SIZE_MIN,
            box_size_max: BOX_SIZE_MAX,
            box_material: Material {
                friction: 0.10,
                restitution: 0.40,
            },
            max_boxes: None,
            platforms: vec![
                PixelRect::new(30.0, 420.0, 250.0, 30.0),
                PixelRect::new(280.0, 310.0, 320.0, 30.0),
            ],
            background_color: BLACK,
            box_color: RED,
            platform_color: WHITE,
            show_debug: false,
        }
    }
}

impl SandboxParams {
    // Check the invariants the loop relies on
    pub fn validate(&self) -> Result<(), SandboxError> {
        if !(self.pixels_per_meter > 0.0) {
            return Err(SandboxError::InvalidParams(format!(
                "pixels_per_meter must be positive, got {}",
                self.pixels_per_meter
            )));
        }
        if !(self.time_step > 0.0) {
            return Err(SandboxError::InvalidParams(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.sub_steps == 0 {
            return Err(SandboxError::InvalidParams(
                "sub_steps must be at least 1".to_string(),
            ));
        }
        if !(self.target_fps > 0.0) {
            return Err(SandboxError::InvalidParams(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if self.box_size_min > self.box_size_max {
            return Err(SandboxError::InvalidRange {
                min: self.box_size_min,
                max: self.box_size_max,
            });
        }
        if self.box_size_min <= 0 {
            return Err(SandboxError::InvalidParams(format!(
                "box sizes must be positive, got minimum {}",
                self.box_size_min
            )));
        }
        if let Some(rect) = self
            .platforms
            .iter()
            .find(|rect| rect.size.x < 0.0 || rect.size.y < 0.0)
        {
            return Err(SandboxError::InvalidParams(format!(
                "platform {:?} has a negative size",
                rect
            )));
        }
        Ok(())
    }
}
