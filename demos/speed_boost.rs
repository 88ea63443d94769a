//! Speed Boost Demo
//!
//! Exercises the host-side controls headlessly: let the ball
//! settle, hit it with the speed-boost key a few times, then reset it to
//! the starting state.

use roombounce::{Room, Sphere, Stepper, World};

const TICK_MS: u32 = 10;

fn report(label: &str, world: &World) {
    let s = world.sphere();
    println!(
        "{label:>12}: pos=({:6.2}, {:6.2}, {:6.2})  speed={:5.2}",
        s.position.x,
        s.position.y,
        s.position.z,
        s.speed()
    );
}

fn main() {
    env_logger::init();

    let mut world = World::new(Stepper::new(Room::new(20.0)), Sphere::demo_ball());
    report("start", &world);

    // Let the ball bleed off most of its energy
    for _ in 0..1500 {
        world.step_millis(TICK_MS);
    }
    report("settled", &world);

    // '+' key: add 10 to every velocity component
    world.boost(10.0);
    report("boosted", &world);

    for _ in 0..500 {
        world.step_millis(TICK_MS);
    }
    report("after kick", &world);

    // '-' key pulls it back down
    world.boost(-10.0);
    for _ in 0..500 {
        world.step_millis(TICK_MS);
    }
    report("slowed", &world);

    // 'r' key: back to the fixed starting state
    world.reset();
    report("reset", &world);
}
