/*
 * Sandbox Module
 *
 * The simulation loop without a window. Sandbox owns the physics world, both
 * registries, the spawn throttle and the random generator. One call to
 * `tick` is one frame: throttle the pointer, maybe spawn, advance the world
 * by a single fixed step and refresh the cached box poses. `draw` renders
 * the result.
 */

use rapier2d::math::Vector;

use crate::boxes::BoxRegistry;
use crate::error::SandboxError;
use crate::input::{PointerState, SpawnThrottle};
use crate::params::SandboxParams;
use crate::physics::PhysicsWorld;
use crate::platform::PlatformRegistry;
use crate::random::RandomGenerator;
use crate::renderer::Canvas;
use crate::units::Units;

// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub spawned: Option<usize>,
    pub refused: bool,
}

pub struct Sandbox {
    params: SandboxParams,
    units: Units,
    world: PhysicsWorld,
    platforms: PlatformRegistry,
    boxes: BoxRegistry,
    throttle: SpawnThrottle,
    sizes: RandomGenerator,
    steps: u64,
    warned_at_capacity: bool,
}

impl Sandbox {
    pub fn new(params: SandboxParams) -> Result<Self, SandboxError> {
        Self::with_generator(params, RandomGenerator::from_entropy())
    }

    // Build with an explicit random generator, e.g. a seeded one in tests
    pub fn with_generator(
        params: SandboxParams,
        sizes: RandomGenerator,
    ) -> Result<Self, SandboxError> {
        params.validate()?;

        let units = Units::new(params.pixels_per_meter);
        let mut world = PhysicsWorld::new(Vector::new(params.gravity.x, params.gravity.y));

        let mut platforms = PlatformRegistry::new();
        for rect in &params.platforms {
            platforms.create(*rect, units, &mut world);
        }

        let boxes = BoxRegistry::new(
            units,
            params.box_size_min,
            params.box_size_max,
            params.box_material,
        )
        .with_limit(params.max_boxes);

        let throttle = SpawnThrottle::new(params.spawn_threshold)
            .reset_on_release(params.reset_throttle_on_release);

        Ok(Self {
            params,
            units,
            world,
            platforms,
            boxes,
            throttle,
            sizes,
            steps: 0,
            warned_at_capacity: false,
        })
    }

    /// Run one frame of the simulation.
    pub fn tick(&mut self, pointer: PointerState) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if !pointer.primary_down {
            self.warned_at_capacity = false;
        }

        if self.throttle.tick(pointer.primary_down) {
            match self.spawn_box(pointer) {
                Ok(index) => outcome.spawned = Some(index),
                Err(SandboxError::CapacityReached { limit }) => {
                    outcome.refused = true;
                    if !self.warned_at_capacity {
                        log::warn!("box limit of {} reached, not spawning", limit);
                        self.warned_at_capacity = true;
                    }
                }
                Err(err) => {
                    outcome.refused = true;
                    log::error!("failed to spawn box: {}", err);
                }
            }
        }

        self.step();
        outcome
    }

    // Advance the world by exactly one fixed step and refresh box poses
    pub fn step(&mut self) {
        self.world.step(self.params.time_step, self.params.sub_steps);
        self.boxes.refresh_all(&self.world);
        self.steps += 1;
    }

    // Spawn a box immediately, bypassing the throttle
    pub fn spawn_box(&mut self, pointer: PointerState) -> Result<usize, SandboxError> {
        self.boxes
            .spawn(pointer.position, &mut self.sizes, &mut self.world)
    }

    // Boxes first, then platforms on top
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear(self.params.background_color);
        self.boxes.draw_all(canvas, self.params.box_color);
        self.platforms.draw_all(canvas, self.params.platform_color);
    }

    pub fn params(&self) -> &SandboxParams {
        &self.params
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn platforms(&self) -> &PlatformRegistry {
        &self.platforms
    }

    pub fn boxes(&self) -> &BoxRegistry {
        &self.boxes
    }

    pub fn throttle(&self) -> &SpawnThrottle {
        &self.throttle
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand};
    use nannou::prelude::*;

    fn sandbox() -> Sandbox {
        Sandbox::with_generator(SandboxParams::default(), RandomGenerator::from_seed(17)).unwrap()
    }

    #[test]
    fn new_builds_default_layout() {
        let sandbox = sandbox();
        assert_eq!(sandbox.platforms().len(), 2);
        assert!(sandbox.boxes().is_empty());
        assert_eq!(sandbox.world().body_count(), 2);
        assert_eq!(sandbox.steps(), 0);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = SandboxParams {
            box_size_min: 30,
            ..SandboxParams::default()
        };
        assert!(matches!(
            Sandbox::with_generator(params, RandomGenerator::from_seed(1)),
            Err(SandboxError::InvalidRange { min: 30, max: 20 })
        ));
    }

    #[test]
    fn every_tick_steps_once() {
        let mut sandbox = sandbox();
        for _ in 0..10 {
            sandbox.tick(PointerState::released());
        }
        assert_eq!(sandbox.steps(), 10);
        assert!(sandbox.boxes().is_empty());
    }

    #[test]
    fn held_pointer_spawns_on_fourth_tick() {
        let mut sandbox = sandbox();
        let pointer = PointerState::held_at(vec2(150.0, 50.0));
        let outcomes: Vec<TickOutcome> = (0..4).map(|_| sandbox.tick(pointer)).collect();

        assert_eq!(outcomes[..3].iter().filter(|o| o.spawned.is_some()).count(), 0);
        assert_eq!(outcomes[3].spawned, Some(0));
        assert_eq!(sandbox.boxes().get(0).unwrap().spawn_point(), vec2(150.0, 50.0));
    }

    #[test]
    fn capacity_refuses_without_stopping_the_world() {
        let params = SandboxParams {
            max_boxes: Some(1),
            ..SandboxParams::default()
        };
        let mut sandbox = Sandbox::with_generator(params, RandomGenerator::from_seed(2)).unwrap();
        let pointer = PointerState::held_at(vec2(400.0, 100.0));

        let refused = (0..12).filter(|_| sandbox.tick(pointer).refused).count();
        assert_eq!(sandbox.boxes().len(), 1);
        assert_eq!(refused, 2);
        assert_eq!(sandbox.steps(), 12);
    }

    #[test]
    fn draw_clears_then_boxes_then_platforms() {
        let mut sandbox = sandbox();
        sandbox.spawn_box(PointerState::held_at(vec2(100.0, 100.0))).unwrap();
        sandbox.step();

        let mut canvas = CommandList::default();
        sandbox.draw(&mut canvas);

        assert_eq!(canvas.commands.len(), 4);
        assert_eq!(canvas.commands[0], DrawCommand::Clear(BLACK));
        assert!(matches!(
            canvas.commands[1],
            DrawCommand::RotatedRect { color, .. } if color == RED
        ));
        assert!(matches!(
            canvas.commands[2],
            DrawCommand::Rect { color, .. } if color == WHITE
        ));
        assert!(matches!(canvas.commands[3], DrawCommand::Rect { .. }));
    }
}
