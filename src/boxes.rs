/*
 * Boxes Module
 *
 * Dynamic boxes dropped by the player. Each box owns one dynamic body in the
 * physics world, a random pixel size fixed at spawn, and a cached pose that
 * is refreshed from the engine after every step and used for drawing.
 */

use nannou::prelude::*;
use rapier2d::math::{Real, Rotation, Vector};
use rapier2d::prelude::RigidBodyHandle;

use crate::error::SandboxError;
use crate::physics::{BodyKind, Material, PhysicsWorld};
use crate::random::RandomGenerator;
use crate::renderer::Canvas;
use crate::units::{PixelRect, Units};

#[derive(Debug, Clone)]
pub struct BoxEntity {
    spawn: Vec2,
    width: i32,
    height: i32,
    body: RigidBodyHandle,
    position: Vector<Real>,
    rotation: Rotation<Real>,
}

impl BoxEntity {
    // Spawn point is the top-left corner of the new box in pixels
    pub fn new(
        spawn: Vec2,
        width: i32,
        height: i32,
        material: Material,
        units: Units,
        world: &mut PhysicsWorld,
    ) -> Self {
        let rect = PixelRect::new(spawn.x, spawn.y, width as f32, height as f32);
        let position = units.px_to_m_vec(rect.center());
        let body = world.create_body(BodyKind::Dynamic, position);
        world.attach_box(body, units.px_to_m_vec(rect.half_size()), material);

        Self {
            spawn,
            width,
            height,
            body,
            position,
            rotation: Rotation::identity(),
        }
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn position(&self) -> Vector<Real> {
        self.position
    }

    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.angle().to_degrees()
    }

    // Cached center in pixels
    pub fn pixel_center(&self, units: Units) -> Vec2 {
        units.m_to_px_vec(&self.position)
    }

    // Unrotated bounds in pixels, anchored at the top-left corner
    pub fn pixel_bounds(&self, units: Units) -> PixelRect {
        let top_left = self.pixel_center(units) - self.size() / 2.0;
        PixelRect::new(top_left.x, top_left.y, self.width as f32, self.height as f32)
    }

    // Rectangle whose reference point is the cached center; pair with `pivot`
    pub fn draw_rect(&self, units: Units) -> PixelRect {
        let center = self.pixel_center(units);
        PixelRect::new(center.x, center.y, self.width as f32, self.height as f32)
    }

    pub fn pivot(&self) -> Vec2 {
        self.size() / 2.0
    }

    fn refresh(&mut self, world: &PhysicsWorld) -> bool {
        match world.pose(self.body) {
            Some(pose) => {
                self.position = pose.position;
                self.rotation = pose.rotation;
                true
            }
            None => false,
        }
    }
}

pub struct BoxRegistry {
    boxes: Vec<BoxEntity>,
    units: Units,
    size_min: i32,
    size_max: i32,
    material: Material,
    limit: Option<usize>,
}

impl BoxRegistry {
    pub fn new(units: Units, size_min: i32, size_max: i32, material: Material) -> Self {
        Self {
            boxes: Vec::new(),
            units,
            size_min,
            size_max,
            material,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Drop a new randomly sized box with its top-left corner at `at`.
    /// Returns the index of the new box.
    pub fn spawn(
        &mut self,
        at: Vec2,
        sizes: &mut RandomGenerator,
        world: &mut PhysicsWorld,
    ) -> Result<usize, SandboxError> {
        if let Some(limit) = self.limit {
            if self.boxes.len() >= limit {
                return Err(SandboxError::CapacityReached { limit });
            }
        }

        let width = sizes.random_int(self.size_min, self.size_max)?;
        let height = sizes.random_int(self.size_min, self.size_max)?;
        self.boxes.push(BoxEntity::new(
            at,
            width,
            height,
            self.material,
            self.units,
            world,
        ));

        let index = self.boxes.len() - 1;
        log::debug!(
            "spawned box {} ({}x{} px) at ({:.0}, {:.0})",
            index,
            width,
            height,
            at.x,
            at.y
        );
        Ok(index)
    }

    // Copy the latest engine pose into every box
    pub fn refresh_all(&mut self, world: &PhysicsWorld) {
        for (index, entity) in self.boxes.iter_mut().enumerate() {
            if !entity.refresh(world) {
                log::warn!("box {} has no body in the physics world", index);
            }
        }
    }

    pub fn draw_all(&self, canvas: &mut impl Canvas, color: Srgb<u8>) {
        for entity in &self.boxes {
            canvas.fill_rect_rotated(
                entity.draw_rect(self.units),
                entity.pivot(),
                entity.rotation_degrees(),
                color,
            );
        }
    }

    pub fn get(&self, index: usize) -> Option<&BoxEntity> {
        self.boxes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxEntity> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
