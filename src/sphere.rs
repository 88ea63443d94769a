//! Kinematic and rotational state for the simulated ball.

use nalgebra::Vector3;

/// A rigid sphere confined to a [`Room`](crate::Room).
///
/// One instance is created at startup, mutated in place every physics tick,
/// and read by the host's renderer. Nothing here allocates.
///
/// `rotation_angle` holds accumulated Euler angles in *degrees* and exists
/// purely to drive the rendered spin. It grows without bound; wrapping to
/// `[0, 360)` is the renderer's business, if it cares at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Sphere radius in world units. Always positive.
    pub radius: f32,
    /// Mass in kg. Stored for hosts that want it; the stepper applies gravity
    /// as a constant acceleration and never scales by mass, so two spheres of
    /// different mass follow identical trajectories.
    pub mass: f32,
    /// World-space center.
    pub position: Vector3<f32>,
    /// Linear velocity in units per second.
    pub velocity: Vector3<f32>,
    /// Angular velocity in radians per second. Drives `rotation_angle` only;
    /// there is no inertia-tensor term behind it.
    pub angular_velocity: Vector3<f32>,
    /// Accumulated per-axis rotation in degrees, for rendering.
    pub rotation_angle: Vector3<f32>,
    /// RGB display color. Never touched by physics.
    pub color: [f32; 3],
}

impl Sphere {
    /// Create a sphere with the given radius and mass, at rest at the origin.
    ///
    /// # Panics
    /// Panics if `radius` or `mass` is not positive and finite.
    pub fn new(radius: f32, mass: f32) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "radius must be positive and finite"
        );
        assert!(
            mass > 0.0 && mass.is_finite(),
            "mass must be positive and finite"
        );
        Self {
            radius,
            mass,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            rotation_angle: Vector3::zeros(),
            color: [1.0, 1.0, 1.0],
        }
    }

    /// The ball the bundled demos start (and reset) with: radius 0.5,
    /// mass 1.0, dropped from `(5, 5, 5)` with velocity `(1, 2, 2)` and no
    /// initial spin.
    pub fn demo_ball() -> Self {
        Self::new(0.5, 1.0)
            .with_position(Vector3::new(5.0, 5.0, 5.0))
            .with_velocity(Vector3::new(1.0, 2.0, 2.0))
            .with_color([0.8, 0.2, 0.2])
    }

    /// Builder: set initial position.
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Builder: set initial velocity.
    pub fn with_velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set initial angular velocity (radians per second).
    pub fn with_angular_velocity(mut self, angular_velocity: Vector3<f32>) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Builder: set the display color.
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Add `delta` to every velocity component.
    ///
    /// Hosts bind this to a speed-boost key: a positive delta speeds the
    /// ball up, a negative one slows it down.
    #[inline]
    pub fn boost(&mut self, delta: f32) {
        self.velocity += Vector3::repeat(delta);
    }

    /// Returns the current speed (magnitude of velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Returns the kinetic energy of the sphere: `0.5 * m * v^2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}
