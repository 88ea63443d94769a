//! The axis-aligned cubic room the sphere is confined to.

use crate::sphere::Sphere;

/// A cubic room spanning `[0, size]` on every axis.
///
/// The walls are implicit; there are no wall bodies. The stepper tests the
/// sphere's surface against the six boundary planes directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    size: f32,
}

impl Room {
    /// Create a room with the given side length.
    ///
    /// # Panics
    /// Panics if `size` is not positive and finite.
    pub fn new(size: f32) -> Self {
        assert!(
            size > 0.0 && size.is_finite(),
            "room size must be positive and finite"
        );
        Self { size }
    }

    /// Side length of the cube.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Whether a sphere of this radius can exist inside the room at all.
    ///
    /// A sphere with `2 * radius >= size` inverts the clamp bounds
    /// `[radius, size - radius]`, so it must be rejected up front.
    #[inline]
    pub fn fits(&self, sphere: &Sphere) -> bool {
        2.0 * sphere.radius < self.size
    }

    /// Whether the sphere is fully inside the room (surface included).
    pub fn contains(&self, sphere: &Sphere) -> bool {
        let r = sphere.radius;
        let p = &sphere.position;
        p.x >= r
            && p.x <= self.size - r
            && p.y >= r
            && p.y <= self.size - r
            && p.z >= r
            && p.z <= self.size - r
    }
}

impl Default for Room {
    /// The bundled demos' room: a 20-unit cube.
    fn default() -> Self {
        Self::new(20.0)
    }
}

/// One of the six boundary planes of a [`Room`].
///
/// Returned by the stepper to report which planes the sphere hit during a
/// step. A corner hit reports every plane involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The floor, `y = 0`.
    Floor,
    /// The wall at `x = 0`.
    WallXMin,
    /// The wall at `x = size`.
    WallXMax,
    /// The wall at `z = 0`.
    WallZMin,
    /// The wall at `z = size`.
    WallZMax,
    /// The ceiling, `y = size`.
    Ceiling,
}
