/*
 * Renderer Module
 *
 * This module handles the rendering of the sandbox. Entities draw through
 * the Canvas trait in pixel space; DrawCanvas forwards to nannou's Draw and
 * CommandList records the calls so drawing can run without a window.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;
use crate::debug;
use crate::units::PixelRect;

pub trait Canvas {
    fn clear(&mut self, color: Srgb<u8>);

    fn fill_rect(&mut self, rect: PixelRect, color: Srgb<u8>);

    /// Filled rectangle rotated clockwise by `degrees` around `pivot`.
    ///
    /// `pivot` is measured from the rectangle's own top-left corner, and
    /// `rect.origin` is where the pivot lands on screen.
    fn fill_rect_rotated(&mut self, rect: PixelRect, pivot: Vec2, degrees: f32, color: Srgb<u8>);
}

// Screen-space center of a rectangle drawn with `fill_rect_rotated`
pub fn rotated_rect_center(rect: PixelRect, pivot: Vec2, degrees: f32) -> Vec2 {
    let offset = rect.half_size() - pivot;
    let (sin, cos) = degrees.to_radians().sin_cos();
    rect.origin + vec2(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

pub struct DrawCanvas<'a> {
    draw: &'a Draw,
    camera: &'a Camera,
}

impl<'a> DrawCanvas<'a> {
    pub fn new(draw: &'a Draw, camera: &'a Camera) -> Self {
        Self { draw, camera }
    }
}

impl Canvas for DrawCanvas<'_> {
    fn clear(&mut self, color: Srgb<u8>) {
        self.draw.background().color(color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Srgb<u8>) {
        self.draw
            .rect()
            .xy(self.camera.pixel_to_window(rect.center()))
            .wh(rect.size)
            .color(color);
    }

    fn fill_rect_rotated(&mut self, rect: PixelRect, pivot: Vec2, degrees: f32, color: Srgb<u8>) {
        let center = rotated_rect_center(rect, pivot, degrees);
        self.draw
            .rect()
            .xy(self.camera.pixel_to_window(center))
            .wh(rect.size)
            .rotate(self.camera.degrees_to_window_radians(degrees))
            .color(color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Srgb<u8>),
    Rect {
        rect: PixelRect,
        color: Srgb<u8>,
    },
    RotatedRect {
        rect: PixelRect,
        pivot: Vec2,
        degrees: f32,
        color: Srgb<u8>,
    },
}

// Canvas that records draw calls in order
#[derive(Debug, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl Canvas for CommandList {
    fn clear(&mut self, color: Srgb<u8>) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Srgb<u8>) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_rect_rotated(&mut self, rect: PixelRect, pivot: Vec2, degrees: f32, color: Srgb<u8>) {
        self.commands.push(DrawCommand::RotatedRect {
            rect,
            pivot,
            degrees,
            color,
        });
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let mut canvas = DrawCanvas::new(&draw, &model.camera);
    model.sandbox.draw(&mut canvas);

    if model.show_debug {
        debug::draw_debug_info(&draw, &model.debug_info, model.camera.window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to submit frame: {:?}", err);
    }
}
