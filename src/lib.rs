/*
 * Box Sandbox - Module Definitions
 *
 * Hold the left mouse button to drop randomly sized boxes onto two static
 * platforms. rapier2d does the physics, nannou does the window and drawing;
 * this crate converts units, keeps the entities and runs the frame loop.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boxes::{BoxEntity, BoxRegistry};
pub use error::SandboxError;
pub use input::{PointerState, SpawnThrottle};
pub use params::SandboxParams;
pub use physics::{BodyKind, Material, PhysicsWorld, Pose};
pub use platform::{Platform, PlatformRegistry};
pub use random::RandomGenerator;
pub use renderer::{Canvas, CommandList, DrawCommand};
pub use sandbox::{Sandbox, TickOutcome};
pub use timing::FrameLimiter;
pub use units::{PixelRect, Units};

// Define modules
pub mod app;
pub mod boxes;
pub mod camera;
pub mod debug;
pub mod error;
pub mod input;
pub mod logging;
pub mod params;
pub mod physics;
pub mod platform;
pub mod random;
pub mod renderer;
pub mod sandbox;
pub mod timing;
pub mod units;
