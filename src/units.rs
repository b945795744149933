/*
 * Units Module
 *
 * Conversions between pixel space and physics space. Both spaces share the
 * same orientation (origin top-left, y pointing down); they only differ by a
 * uniform scale factor expressed in pixels per meter.
 */

use nannou::prelude::*;
use rapier2d::math::{Real, Vector};

// Scale between the two spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    pub pixels_per_meter: f32,
}

impl Units {
    pub fn new(pixels_per_meter: f32) -> Self {
        Self { pixels_per_meter }
    }

    // Pixel point/vector to physics space
    pub fn px_to_m_vec(&self, v: Vec2) -> Vector<Real> {
        Vector::new(v.x / self.pixels_per_meter, v.y / self.pixels_per_meter)
    }

    // Physics point/vector to pixel space
    pub fn m_to_px_vec(&self, v: &Vector<Real>) -> Vec2 {
        vec2(v.x * self.pixels_per_meter, v.y * self.pixels_per_meter)
    }

    pub fn px_to_m(&self, n: f32) -> Real {
        n / self.pixels_per_meter
    }

    pub fn m_to_px(&self, n: Real) -> f32 {
        n * self.pixels_per_meter
    }
}

/// Axis-aligned rectangle in pixel space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: vec2(x, y),
            size: vec2(width, height),
        }
    }

    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.half_size()
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, 0.0, 0.0)]
    #[case(100.0, 640.0, 480.0)]
    #[case(100.0, -12.5, 3.25)]
    #[case(32.0, 17.0, 123_456.0)]
    #[case(0.5, 1.0e-3, -7.75)]
    fn vector_round_trip(#[case] scale: f32, #[case] x: f32, #[case] y: f32) {
        let units = Units::new(scale);
        let back = units.m_to_px_vec(&units.px_to_m_vec(vec2(x, y)));
        assert_relative_eq!(back.x, x, max_relative = 1e-5);
        assert_relative_eq!(back.y, y, max_relative = 1e-5);
    }

    #[rstest]
    #[case(100.0, 250.0)]
    #[case(64.0, -3.0)]
    #[case(1.0, 0.125)]
    fn scalar_round_trip(#[case] scale: f32, #[case] n: f32) {
        let units = Units::new(scale);
        assert_relative_eq!(units.m_to_px(units.px_to_m(n)), n, max_relative = 1e-5);
    }

    #[test]
    fn pixels_divide_by_scale() {
        let units = Units::new(100.0);
        let m = units.px_to_m_vec(vec2(155.0, 435.0));
        assert_relative_eq!(m.x, 1.55);
        assert_relative_eq!(m.y, 4.35);
        assert_relative_eq!(units.px_to_m(15.0), 0.15);
    }

    #[test]
    fn rect_geometry() {
        let rect = PixelRect::new(30.0, 420.0, 250.0, 30.0);
        assert_eq!(rect.center(), vec2(155.0, 435.0));
        assert_eq!(rect.half_size(), vec2(125.0, 15.0));
        assert_eq!(rect.right(), 280.0);
        assert_eq!(rect.bottom(), 450.0);
    }
}
