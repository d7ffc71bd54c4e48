//! Power-up expiry, collection and effects.

use hecs::{Entity, World};
use tracing::debug;

use bulwark_core::catalog::tower_definition;
use bulwark_core::components::{Enemy, PowerUp, Tower};
use bulwark_core::constants::*;
use bulwark_core::enums::PowerUpKind;
use bulwark_core::events::GameEvent;
use bulwark_core::types::Position;

use crate::combat::{self, SimContext};
use crate::scheduler::TimedAction;

/// Count down time-to-live and despawn expired pickups.
pub fn run(world: &mut World, frames: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, powerup) in world.query_mut::<&mut PowerUp>() {
        powerup.ttl -= frames;
        if powerup.ttl <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Collect at most one pickup under `position`.
pub fn collect_at(ctx: &mut SimContext, position: Position) -> Option<PowerUpKind> {
    let (entity, kind) = ctx
        .world
        .query::<(&Position, &PowerUp)>()
        .iter()
        .find(|(_, (pos, powerup))| {
            pos.range_to(&position) <= powerup.radius + POWERUP_PICK_SLACK
        })
        .map(|(entity, (_, powerup))| (entity, powerup.kind))?;
    let _ = ctx.world.despawn(entity);
    apply(ctx, kind);
    Some(kind)
}

/// Collect every pickup currently on the field.
pub fn collect_all(ctx: &mut SimContext) -> Vec<PowerUpKind> {
    let pickups: Vec<(Entity, PowerUpKind)> = ctx
        .world
        .query::<&PowerUp>()
        .iter()
        .map(|(entity, powerup)| (entity, powerup.kind))
        .collect();

    for &(entity, kind) in &pickups {
        let _ = ctx.world.despawn(entity);
        apply(ctx, kind);
    }
    pickups.into_iter().map(|(_, kind)| kind).collect()
}

/// Apply a power-up's effect.
pub fn apply(ctx: &mut SimContext, kind: PowerUpKind) {
    debug!(?kind, "power-up applied");
    ctx.events.push(GameEvent::PowerUpCollected { kind });

    match kind {
        PowerUpKind::Gold => ctx.run.earn(GOLD_POWERUP_AMOUNT),
        PowerUpKind::Speed => {
            for (_entity, tower) in ctx.world.query_mut::<&mut Tower>() {
                tower.stats.fire_rate = (tower.stats.fire_rate * SPEED_BOOST_FACTOR)
                    .floor()
                    .max(SPEED_BOOST_MIN_FIRE_RATE);
            }
            ctx.scheduler
                .schedule_in(SPEED_BOOST_MS, TimedAction::RestoreFireRates);
        }
        PowerUpKind::Shield => ctx.run.lives += SHIELD_POWERUP_LIVES,
        PowerUpKind::Nuke => {
            let enemies: Vec<Entity> = ctx
                .world
                .query::<&Enemy>()
                .iter()
                .map(|(entity, _)| entity)
                .collect();
            for entity in enemies {
                combat::kill_enemy(ctx, entity);
            }
        }
    }
}

/// End of a speed boost: every tower goes back to its catalog fire rate.
///
/// This also drops the fire-rate part of any upgrade bought before expiry.
pub fn restore_fire_rates(ctx: &mut SimContext) {
    for (_entity, tower) in ctx.world.query_mut::<&mut Tower>() {
        tower.stats.fire_rate = tower_definition(tower.base).fire_rate;
    }
    debug!("speed boost expired");
    ctx.events.push(GameEvent::SpeedBoostExpired);
}
