/*
 * Application Module
 *
 * This module defines the nannou model for the sandbox and wires the
 * headless Sandbox into the event loop:
 * - `model` opens the fixed-size window and builds the sandbox
 * - `update` samples the pointer and runs one fixed simulation step
 * - `exit` logs a summary when the window closes
 *
 * nannou calls `update` once per display refresh; a FrameLimiter skips the
 * calls that arrive before the next tick is due. Each tick advances the
 * world by exactly one fixed step, so slow frames look like slow motion.
 */

use std::time::Instant;

use nannou::prelude::*;

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::error::SandboxError;
use crate::input::{self, PointerState};
use crate::params::SandboxParams;
use crate::renderer;
use crate::sandbox::Sandbox;
use crate::timing::FrameLimiter;

// Main model for the application
pub struct Model {
    pub sandbox: Sandbox,
    pub camera: Camera,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
    pub limiter: FrameLimiter,
}

pub fn run() {
    nannou::app(model).update(update).exit(exit).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    match build(app, SandboxParams::default()) {
        Ok(model) => model,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}

fn build(app: &App, params: SandboxParams) -> Result<Model, SandboxError> {
    params.validate()?;

    app.new_window()
        .title(params.title)
        .size(params.window_width, params.window_height)
        .resizable(false)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .build()
        .map_err(|err| SandboxError::Window(format!("{:?}", err)))?;

    let camera = Camera::new(params.window_width as f32, params.window_height as f32);
    let show_debug = params.show_debug;
    let limiter = FrameLimiter::new(params.target_fps);

    log::info!(
        "opening {}x{} window at {} px/m, {} platforms",
        params.window_width,
        params.window_height,
        params.pixels_per_meter,
        params.platforms.len()
    );

    let sandbox = Sandbox::new(params)?;
    let debug_info = DebugInfo {
        platform_count: sandbox.platforms().len(),
        ..DebugInfo::default()
    };

    Ok(Model {
        sandbox,
        camera,
        debug_info,
        show_debug,
        limiter,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    if !model.limiter.ready(Instant::now()) {
        return;
    }

    let pointer = PointerState::sample(app, &model.camera);
    model.sandbox.tick(pointer);

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.box_count = model.sandbox.boxes().len();
    model.debug_info.steps = model.sandbox.steps();
    model.debug_info.spawn_counter = model.sandbox.throttle().counter();
}

// Called once the window has closed
pub fn exit(_app: &App, model: Model) {
    log::info!(
        "closing after {} steps with {} boxes",
        model.sandbox.steps(),
        model.sandbox.boxes().len()
    );
}
