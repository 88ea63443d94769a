//! Deterministic physics for a single rigid sphere bouncing inside an
//! axis-aligned cubic room.
//!
//! The simulation is a fixed-interval stepper: semi-implicit Euler
//! integration with gravity, restitution-based reflection off the six
//! boundary planes, a rolling-friction heuristic that couples linear and
//! angular velocity on contact, and angular-velocity clamping. It is a
//! total, non-blocking numeric transform — no I/O, no allocation, no
//! randomness — so the same stepper can drive an embedded display, a
//! desktop demo, or a test harness feeding synthetic time deltas.
//!
//! Rendering and input stay host-side: the host reads `position`,
//! `rotation_angle`, and `radius` to draw the ball, and may poke the
//! velocity (see [`World::boost`]) or call [`World::reset`].
//!
//! # Example
//! ```
//! use roombounce::{Room, Sphere, Stepper, World};
//!
//! let stepper = Stepper::new(Room::new(20.0));
//! let mut world = World::new(stepper, Sphere::demo_ball());
//!
//! // 10 ms tick, the cadence the bundled demos use
//! for _ in 0..100 {
//!     world.step_millis(10);
//! }
//!
//! let sphere = world.sphere();
//! assert!(sphere.position.y >= sphere.radius);
//! ```

#![no_std]

pub mod room;
pub mod sphere;
pub mod stepper;
pub mod world;

pub use room::{Boundary, Room};
pub use sphere::Sphere;
pub use stepper::Stepper;
pub use world::World;
