//! Cosmetic particle integration and expiry.

use hecs::{Entity, World};

use bulwark_core::components::Particle;
use bulwark_core::constants::PARTICLE_GRAVITY;
use bulwark_core::types::{Position, Velocity};

/// Drift, fall and fade particles; despawn the expired ones.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, frames: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Particle)>()
    {
        pos.x += vel.x * frames;
        pos.y += vel.y * frames;
        vel.y += PARTICLE_GRAVITY * frames;
        particle.life -= frames;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
