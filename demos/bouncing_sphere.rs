//! Bouncing Sphere Demo
//!
//! Drives the physics at a fixed 10 ms tick and prints the sphere's
//! trajectory as it bounces around the 20-unit room, loses energy to
//! restitution and friction, and settles into a roll.
//!
//! Run with `RUST_LOG=roombounce=trace` to see the per-tick position trace
//! and boundary-contact log lines.

use roombounce::{Room, Sphere, Stepper, World};

const TICK_MS: u32 = 10;
const TICKS: u32 = 3000; // 30 simulated seconds

fn main() {
    env_logger::init();

    let stepper = Stepper::new(Room::new(20.0));
    let mut world = World::new(stepper, Sphere::demo_ball());

    let mut bounces = 0u32;
    for tick in 0..TICKS {
        let contacts = world.step_millis(TICK_MS);
        bounces += contacts.len() as u32;

        if tick % 100 == 0 {
            let s = world.sphere();
            println!(
                "t={:5.1}s  pos=({:6.2}, {:6.2}, {:6.2})  speed={:5.2}  spin=({:6.2}, {:6.2}, {:6.2})",
                tick as f32 * TICK_MS as f32 / 1000.0,
                s.position.x,
                s.position.y,
                s.position.z,
                s.speed(),
                s.angular_velocity.x,
                s.angular_velocity.y,
                s.angular_velocity.z,
            );
        }
    }

    let s = world.sphere();
    println!(
        "done: {} boundary contacts, final pos=({:.2}, {:.2}, {:.2}), rotation=({:.0}°, {:.0}°, {:.0}°)",
        bounces,
        s.position.x,
        s.position.y,
        s.position.z,
        s.rotation_angle.x,
        s.rotation_angle.y,
        s.rotation_angle.z,
    );
}
