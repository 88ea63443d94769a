//! The fixed-interval physics stepper.
//!
//! Advances a [`Sphere`] by one time delta: gravity, semi-implicit Euler
//! integration, boundary collision response with restitution, a
//! rolling-friction heuristic, and angular-velocity clamping.
//!
//! # Example
//! ```
//! use roombounce::{Room, Sphere, Stepper};
//!
//! let stepper = Stepper::new(Room::new(20.0));
//! let mut sphere = Sphere::demo_ball();
//!
//! let contacts = stepper.step_millis(&mut sphere, 10);
//! assert!(contacts.is_empty()); // still in free flight
//! ```

use crate::room::{Boundary, Room};
use crate::sphere::Sphere;

/// Degrees per radian, for converting angular velocity into render angles.
const DEG_PER_RAD: f32 = 180.0 / core::f32::consts::PI;

/// Advances a [`Sphere`] through a [`Room`] one time delta at a time.
///
/// Deterministic given the sphere state and the delta: no randomness, no
/// I/O, never blocks. The host calls [`step_millis`](Stepper::step_millis)
/// once per timer tick and then reads the sphere to draw it.
///
/// The tunables default to the bundled demos' constants. Changing them is
/// allowed at any time; they are plain fields, with builders that clamp the
/// unit-interval coefficients into range.
///
/// The rolling coupling is a heuristic, not contact mechanics: on floor
/// contact the angular velocity is blended toward the value that would make
/// the sphere roll without slipping given its tangential velocity, by a
/// fixed smoothing gain. It makes the ball visually roll after a bounce and
/// is reproduced as such, not derived from angular-momentum conservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stepper {
    /// Constant Y acceleration in units per second². Negative is down.
    /// Applied directly; mass never enters the integration.
    pub gravity: f32,
    /// Multiplicative damping, `0..=1`. Applied to all angular-velocity
    /// components every step, and to horizontal linear velocity on floor
    /// contact.
    pub friction: f32,
    /// Fraction of the normal-axis speed kept (sign-flipped) on a bounce,
    /// `0..=1`.
    pub restitution: f32,
    /// Smoothing gain pulling angular velocity toward the ideal rolling
    /// value on contact, `0..=1`. 0 disables the coupling, 1 snaps to it.
    pub roll_match_factor: f32,
    /// Per-component clamp on angular velocity, radians per second.
    pub max_angular_speed: f32,
    room: Room,
}

impl Stepper {
    /// Create a stepper for the given room with the demo constants:
    /// gravity `-9.8`, friction `0.98`, restitution `0.8`, roll match factor
    /// `0.5`, max angular speed `50.0`.
    pub fn new(room: Room) -> Self {
        Self {
            gravity: -9.8,
            friction: 0.98,
            restitution: 0.8,
            roll_match_factor: 0.5,
            max_angular_speed: 50.0,
            room,
        }
    }

    /// Builder: set gravity (units per second², negative is down).
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder: set the friction damping factor (0.0..=1.0).
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 1.0);
        self
    }

    /// Builder: set restitution (bounciness, 0.0..=1.0).
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Builder: set the rolling-coupling smoothing gain (0.0..=1.0).
    pub fn with_roll_match_factor(mut self, factor: f32) -> Self {
        self.roll_match_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Builder: set the angular-velocity clamp (radians per second).
    pub fn with_max_angular_speed(mut self, max: f32) -> Self {
        self.max_angular_speed = max;
        self
    }

    /// The room this stepper confines the sphere to.
    #[inline]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Advance the sphere by `millis` milliseconds.
    ///
    /// Timer-driven hosts usually land here: the bundled demos fire every
    /// 10 ms and pass the interval straight through.
    pub fn step_millis(&self, sphere: &mut Sphere, millis: u32) -> heapless::Vec<Boundary, 6> {
        self.step(sphere, millis as f32 / 1000.0)
    }

    /// Advance the sphere by `dt` seconds.
    ///
    /// Order per step, fixed:
    /// 1. gravity into velocity (semi-implicit Euler: velocity first);
    /// 2. velocity into position, all three axes;
    /// 3. angular velocity into rotation angles, converted to degrees;
    /// 4. friction damping of angular velocity, contact or not;
    /// 5. boundary resolution: floor, x walls, z walls, ceiling;
    /// 6. angular-velocity clamp.
    ///
    /// Returns the boundary planes the sphere hit this step, in resolution
    /// order. A corner hit reports both planes; each is resolved
    /// sequentially, there is no simultaneous-contact solve.
    pub fn step(&self, sphere: &mut Sphere, dt: f32) -> heapless::Vec<Boundary, 6> {
        sphere.velocity.y += self.gravity * dt;
        sphere.position += sphere.velocity * dt;
        sphere.rotation_angle += sphere.angular_velocity * (dt * DEG_PER_RAD);
        sphere.angular_velocity *= self.friction;

        let contacts = self.resolve_boundaries(sphere);

        let max = self.max_angular_speed;
        for i in 0..3 {
            sphere.angular_velocity[i] = sphere.angular_velocity[i].clamp(-max, max);
        }

        contacts
    }

    /// Test the sphere surface against each boundary plane and resolve
    /// penetration: clamp the position back to the plane, reflect and scale
    /// the normal-axis velocity by restitution, and apply the per-plane
    /// rolling coupling.
    fn resolve_boundaries(&self, sphere: &mut Sphere) -> heapless::Vec<Boundary, 6> {
        let mut contacts = heapless::Vec::new();
        let r = sphere.radius;
        let size = self.room.size();
        let gain = self.roll_match_factor;

        // Floor: the only plane with horizontal friction and a full rolling
        // couple on the two horizontal spin axes.
        if sphere.position.y - r <= 0.0 {
            sphere.position.y = r;
            sphere.velocity.y = -sphere.velocity.y * self.restitution;

            sphere.velocity.x *= self.friction;
            sphere.velocity.z *= self.friction;

            let ideal_x = sphere.velocity.z / r;
            let ideal_z = -sphere.velocity.x / r;
            sphere.angular_velocity.x += (ideal_x - sphere.angular_velocity.x) * gain;
            sphere.angular_velocity.z += (ideal_z - sphere.angular_velocity.z) * gain;

            let _ = contacts.push(Boundary::Floor);
        }

        // X walls: couple spin about Y from the tangential Z velocity.
        if sphere.position.x - r <= 0.0 {
            sphere.position.x = r;
            sphere.velocity.x = -sphere.velocity.x * self.restitution;

            let ideal_y = -sphere.velocity.z / r;
            sphere.angular_velocity.y += (ideal_y - sphere.angular_velocity.y) * gain;

            let _ = contacts.push(Boundary::WallXMin);
        }
        if sphere.position.x + r >= size {
            sphere.position.x = size - r;
            sphere.velocity.x = -sphere.velocity.x * self.restitution;

            let ideal_y = -sphere.velocity.z / r;
            sphere.angular_velocity.y += (ideal_y - sphere.angular_velocity.y) * gain;

            let _ = contacts.push(Boundary::WallXMax);
        }

        // Z walls: couple spin about Y from the tangential X velocity.
        if sphere.position.z - r <= 0.0 {
            sphere.position.z = r;
            sphere.velocity.z = -sphere.velocity.z * self.restitution;

            let ideal_y = sphere.velocity.x / r;
            sphere.angular_velocity.y += (ideal_y - sphere.angular_velocity.y) * gain;

            let _ = contacts.push(Boundary::WallZMin);
        }
        if sphere.position.z + r >= size {
            sphere.position.z = size - r;
            sphere.velocity.z = -sphere.velocity.z * self.restitution;

            let ideal_y = sphere.velocity.x / r;
            sphere.angular_velocity.y += (ideal_y - sphere.angular_velocity.y) * gain;

            let _ = contacts.push(Boundary::WallZMax);
        }

        // Ceiling: reflection only, no rolling couple.
        if sphere.position.y + r >= size {
            sphere.position.y = size - r;
            sphere.velocity.y = -sphere.velocity.y * self.restitution;

            let _ = contacts.push(Boundary::Ceiling);
        }

        contacts
    }
}
