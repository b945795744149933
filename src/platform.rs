/*
 * Platform Module
 *
 * Static obstacles. A platform is laid out in pixel space once at startup,
 * mirrored as a fixed body in the physics world and drawn every frame at its
 * layout rectangle. Platforms are never moved or removed.
 */

use nannou::prelude::*;
use rapier2d::math::{Real, Vector};
use rapier2d::prelude::RigidBodyHandle;

use crate::physics::{BodyKind, Material, PhysicsWorld};
use crate::renderer::Canvas;
use crate::units::{PixelRect, Units};

#[derive(Debug, Clone)]
pub struct Platform {
    rect: PixelRect,
    position: Vector<Real>,
    half_extents: Vector<Real>,
    body: RigidBodyHandle,
}

impl Platform {
    pub fn new(rect: PixelRect, units: Units, world: &mut PhysicsWorld) -> Self {
        let position = units.px_to_m_vec(rect.center());
        let body = world.create_body(BodyKind::Static, position);

        let half_extents = units.px_to_m_vec(rect.half_size());
        world.attach_box(body, half_extents, Material::default());

        Self {
            rect,
            position,
            half_extents,
            body,
        }
    }

    pub fn pixel_rect(&self) -> PixelRect {
        self.rect
    }

    pub fn position(&self) -> Vector<Real> {
        self.position
    }

    pub fn half_extents(&self) -> Vector<Real> {
        self.half_extents
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }
}

#[derive(Default)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Create a platform from a pixel rectangle and register it, returning its index
    pub fn create(&mut self, rect: PixelRect, units: Units, world: &mut PhysicsWorld) -> usize {
        self.platforms.push(Platform::new(rect, units, world));
        self.platforms.len() - 1
    }

    pub fn draw_all(&self, canvas: &mut impl Canvas, color: Srgb<u8>) {
        for platform in &self.platforms {
            canvas.fill_rect(platform.rect, color);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
