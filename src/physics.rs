/*
 * Physics Module
 *
 * This module wraps the rapier2d pipeline behind the handful of operations the
 * sandbox needs: creating fixed and dynamic bodies, attaching box shapes,
 * advancing the world by a fixed step and reading body poses back.
 *
 * Physics space uses meters with y pointing down, mirroring pixel space.
 */

use rapier2d::math::{Real, Rotation, Vector};
use rapier2d::prelude::*;

// Solver passes per sub-step, for both the velocity solve and the
// stabilization pass that follows it. A box landing flat touches at two
// points solved one after the other; a single stabilization pass leaves the
// first point with the larger impulse, which shows up as spin on the bounce.
pub const SOLVER_ITERATIONS: usize = 8;

// Surface properties of a collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub friction: Real,
    pub restitution: Real,
}

impl Default for Material {
    // rapier's own collider defaults
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    Dynamic,
}

// Position and rotation of a body after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector<Real>,
    pub rotation: Rotation<Real>,
}

pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity: Vector<Real>) -> Self {
        let integration_parameters = IntegrationParameters {
            max_velocity_iterations: SOLVER_ITERATIONS,
            max_stabilization_iterations: SOLVER_ITERATIONS,
            ..IntegrationParameters::default()
        };

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    // Create a body centered at `position`
    pub fn create_body(&mut self, kind: BodyKind, position: Vector<Real>) -> RigidBodyHandle {
        let builder = match kind {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            // Boxes are a few centimeters across and land at several m/s.
            // Motion clamping keeps them from sinking into a platform in one
            // sub-step, which the stabilization pass would turn into spin.
            BodyKind::Dynamic => RigidBodyBuilder::dynamic().ccd_enabled(true),
        };
        self.rigid_body_set.insert(builder.translation(position).build())
    }

    // Attach a box shape with the given half-extents to an existing body
    pub fn attach_box(
        &mut self,
        body: RigidBodyHandle,
        half_extents: Vector<Real>,
        material: Material,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .friction(material.friction)
            .restitution(material.restitution)
            // Bounciness of a contact is the larger of the two surfaces
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .build();
        self.collider_set
            .insert_with_parent(collider, body, &mut self.rigid_body_set)
    }

    /// Advance the world by exactly `dt` seconds, split into `sub_steps`
    /// equal pipeline steps. Wall-clock time plays no part.
    pub fn step(&mut self, dt: Real, sub_steps: usize) {
        let sub_steps = sub_steps.max(1);
        self.integration_parameters.dt = dt / sub_steps as Real;

        for _ in 0..sub_steps {
            self.physics_pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.island_manager,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.rigid_body_set,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                &mut self.ccd_solver,
                None,
                &(),
                &(),
            );
        }
    }

    pub fn position(&self, body: RigidBodyHandle) -> Option<Vector<Real>> {
        self.rigid_body_set.get(body).map(|b| *b.translation())
    }

    pub fn rotation(&self, body: RigidBodyHandle) -> Option<Rotation<Real>> {
        self.rigid_body_set.get(body).map(|b| *b.rotation())
    }

    pub fn pose(&self, body: RigidBodyHandle) -> Option<Pose> {
        self.rigid_body_set.get(body).map(|b| Pose {
            position: *b.translation(),
            rotation: *b.rotation(),
        })
    }

    pub fn kind(&self, body: RigidBodyHandle) -> Option<BodyKind> {
        self.rigid_body_set.get(body).map(|b| {
            if b.is_dynamic() {
                BodyKind::Dynamic
            } else {
                BodyKind::Static
            }
        })
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }
}
