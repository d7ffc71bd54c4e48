//! Projectile system: homing flight and impact resolution.

use hecs::Entity;

use bulwark_core::components::{Enemy, Projectile};
use bulwark_core::types::Position;

use crate::combat::{self, SimContext};

/// Move every projectile toward its target; resolve arrivals and drop
/// projectiles whose target is gone.
pub fn run(ctx: &mut SimContext, frames: f64) {
    let projectiles: Vec<Entity> = ctx
        .world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in projectiles {
        if !advance(ctx, entity, frames) {
            let _ = ctx.world.despawn(entity);
        }
    }
}

/// Returns `false` once the projectile is spent.
fn advance(ctx: &mut SimContext, entity: Entity, frames: f64) -> bool {
    let projectile = match ctx.world.get::<&Projectile>(entity) {
        Ok(p) => *p,
        Err(_) => return false,
    };

    // The target handle is re-validated every tick; a despawned or leaked
    // enemy discards the projectile without effect.
    let target_pos = match ctx
        .world
        .query_one_mut::<(&Position, &Enemy)>(projectile.target)
    {
        Ok((pos, enemy)) if !enemy.reached_end => *pos,
        _ => return false,
    };

    let arrived = match ctx.world.get::<&mut Position>(entity) {
        Ok(mut pos) => pos.step_toward(&target_pos, projectile.speed * frames),
        Err(_) => return false,
    };
    if arrived {
        combat::resolve_impact(ctx, &projectile);
        return false;
    }
    true
}
