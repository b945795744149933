/*
 * Camera Module
 *
 * This module defines the Camera struct that maps between the sandbox's pixel
 * space (origin at the window's top-left corner, y pointing down) and nannou's
 * window space (origin at the window center, y pointing up).
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub window_rect: Rect,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            window_rect: Rect::from_w_h(width, height),
        }
    }

    // Convert a point from pixel space to window space
    pub fn pixel_to_window(&self, point: Vec2) -> Vec2 {
        vec2(
            self.window_rect.left() + point.x,
            self.window_rect.top() - point.y,
        )
    }

    // Convert a point from window space to pixel space
    pub fn window_to_pixel(&self, point: Vec2) -> Vec2 {
        vec2(
            point.x - self.window_rect.left(),
            self.window_rect.top() - point.y,
        )
    }

    // Pixel-space rotations are clockwise-positive, window space is counter-clockwise
    pub fn degrees_to_window_radians(&self, degrees: f32) -> f32 {
        -degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_window_edges() {
        let camera = Camera::new(640.0, 480.0);
        assert_eq!(camera.pixel_to_window(vec2(0.0, 0.0)), vec2(-320.0, 240.0));
        assert_eq!(camera.pixel_to_window(vec2(640.0, 480.0)), vec2(320.0, -240.0));
        assert_eq!(camera.pixel_to_window(vec2(320.0, 240.0)), Vec2::ZERO);
    }

    #[test]
    fn window_to_pixel_inverts_pixel_to_window() {
        let camera = Camera::new(640.0, 480.0);
        let p = vec2(100.0, 420.0);
        assert_eq!(camera.window_to_pixel(camera.pixel_to_window(p)), p);
    }

    #[test]
    fn rotation_direction_flips() {
        let camera = Camera::new(640.0, 480.0);
        assert!(camera.degrees_to_window_radians(90.0) < 0.0);
        assert_eq!(camera.degrees_to_window_radians(0.0), 0.0);
    }
}
