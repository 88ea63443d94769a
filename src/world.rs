//! Owning wrapper tying a sphere to a stepper, with reset and boost.

use log::{debug, trace};

use crate::room::Boundary;
use crate::sphere::Sphere;
use crate::stepper::Stepper;

/// A stepper plus the sphere it advances, with the starting state kept
/// around so the host's reset key can restore it.
///
/// This is the piece a host embeds: the timer tick calls
/// [`step_millis`](World::step_millis) (skipping it while paused — pausing
/// is the host's flag, not the simulation's), the renderer reads
/// [`sphere`](World::sphere), and the input handler calls
/// [`boost`](World::boost) and [`reset`](World::reset).
///
/// Stepping and reading are sequential on the host's thread; nothing here
/// blocks or spawns. A host that moves rendering off-thread must arrange its
/// own synchronization so the renderer always sees a fully-stepped state.
#[derive(Debug, Clone)]
pub struct World {
    stepper: Stepper,
    sphere: Sphere,
    initial: Sphere,
}

impl World {
    /// Create a world from a stepper and a starting sphere.
    ///
    /// # Panics
    /// Panics if the sphere cannot fit in the stepper's room. A sphere with
    /// diameter at or above the room size would invert the position clamp
    /// bounds, so degenerate configuration is rejected here rather than
    /// checked every step.
    pub fn new(stepper: Stepper, sphere: Sphere) -> Self {
        assert!(
            stepper.room().fits(&sphere),
            "sphere diameter must be smaller than the room"
        );
        Self {
            stepper,
            initial: sphere.clone(),
            sphere,
        }
    }

    /// Advance the simulation by `millis` milliseconds.
    pub fn step_millis(&mut self, millis: u32) -> heapless::Vec<Boundary, 6> {
        self.step(millis as f32 / 1000.0)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Traces the post-step position each tick and logs boundary hits at
    /// debug level.
    pub fn step(&mut self, dt: f32) -> heapless::Vec<Boundary, 6> {
        let contacts = self.stepper.step(&mut self.sphere, dt);

        let p = &self.sphere.position;
        trace!("sphere position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        if !contacts.is_empty() {
            debug!("boundary contacts: {:?}", contacts.as_slice());
        }

        contacts
    }

    /// Restore the sphere to the state it was constructed with.
    pub fn reset(&mut self) {
        debug!("sphere reset to initial state");
        self.sphere = self.initial.clone();
    }

    /// Add `delta` to every component of the sphere's velocity (the host's
    /// speed-boost key).
    pub fn boost(&mut self, delta: f32) {
        self.sphere.boost(delta);
    }

    /// The simulated sphere, for rendering.
    #[inline]
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// Mutable access for hosts that poke velocity directly.
    #[inline]
    pub fn sphere_mut(&mut self) -> &mut Sphere {
        &mut self.sphere
    }

    /// The stepper and its room.
    #[inline]
    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::room::Room;
    use nalgebra::Vector3;

    fn demo_world() -> World {
        World::new(Stepper::new(Room::new(20.0)), Sphere::demo_ball())
    }

    #[test]
    fn test_world_creation() {
        let world = demo_world();
        assert_eq!(world.sphere().position, Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(world.stepper().room().size(), 20.0);
    }

    #[test]
    #[should_panic]
    fn test_oversized_sphere_rejected() {
        let stepper = Stepper::new(Room::new(1.0));
        World::new(stepper, Sphere::new(0.5, 1.0));
    }

    #[test]
    fn test_step_advances_sphere() {
        let mut world = demo_world();
        world.step_millis(10);
        assert_ne!(world.sphere().position, Vector3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut world = demo_world();
        for _ in 0..200 {
            world.step_millis(10);
        }
        assert_ne!(*world.sphere(), Sphere::demo_ball());

        world.reset();
        assert_eq!(*world.sphere(), Sphere::demo_ball());
    }

    #[test]
    fn test_reset_is_unaffected_by_boost() {
        let mut world = demo_world();
        world.boost(10.0);
        assert_eq!(world.sphere().velocity, Vector3::new(11.0, 12.0, 12.0));

        world.reset();
        assert_eq!(world.sphere().velocity, Vector3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn test_sphere_mut_allows_velocity_pokes() {
        let mut world = demo_world();
        world.sphere_mut().velocity = Vector3::new(0.0, -5.0, 0.0);
        assert_eq!(world.sphere().velocity, Vector3::new(0.0, -5.0, 0.0));
    }
}
