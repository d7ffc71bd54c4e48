//! Tower system: placement, upgrades, cooldowns and firing.

use hecs::{Entity, World};
use tracing::debug;

use bulwark_core::components::Tower;
use bulwark_core::constants::*;
use bulwark_core::enums::TowerKind;
use bulwark_core::error::{PlacementError, UpgradeError};
use bulwark_core::events::GameEvent;
use bulwark_core::types::Position;

use crate::combat::{self, SimContext};
use crate::economy::RunState;
use crate::path::Path;
use crate::world_setup;

/// Result of a successful upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerUpgrade {
    pub entity: Entity,
    pub tower: TowerKind,
    pub level: u32,
    pub cost: u32,
}

/// Place a tower, paying its catalog cost.
pub fn place_tower(
    ctx: &mut SimContext,
    position: Position,
    kind: TowerKind,
) -> Result<Entity, PlacementError> {
    let result = try_place(ctx.world, ctx.path, ctx.run, position, kind);
    match result {
        Ok(_) => {
            debug!(tower = kind.id(), x = position.x, y = position.y, "tower placed");
            ctx.events.push(GameEvent::TowerPlaced {
                tower: kind,
                x: position.x,
                y: position.y,
            });
        }
        Err(reason) => {
            debug!(tower = kind.id(), %reason, "placement rejected");
            ctx.events.push(GameEvent::PlacementRejected { reason });
        }
    }
    result
}

fn try_place(
    world: &mut World,
    path: &Path,
    run: &mut RunState,
    position: Position,
    kind: TowerKind,
) -> Result<Entity, PlacementError> {
    let cost = bulwark_core::catalog::tower_definition(kind).cost;
    if run.gold < cost {
        return Err(PlacementError::InsufficientFunds {
            cost,
            gold: run.gold,
        });
    }
    let distance = path.distance_to(&position);
    if distance < PATH_CLEARANCE {
        return Err(PlacementError::TooCloseToPath { distance });
    }
    run.gold -= cost;
    Ok(world_setup::spawn_tower(world, position, kind))
}

/// Gold needed to take `tower` to its next level.
pub fn upgrade_cost(tower: &Tower) -> u32 {
    (f64::from(tower.stats.cost) * (1.0 + f64::from(tower.level) * UPGRADE_COST_FACTOR)).floor()
        as u32
}

/// Upgrade one tower's stat block in place if the run can pay for it.
pub fn upgrade(run: &mut RunState, tower: &mut Tower) -> Result<u32, UpgradeError> {
    let cost = upgrade_cost(tower);
    if !run.try_spend(cost) {
        return Err(UpgradeError::InsufficientFunds {
            cost,
            gold: run.gold,
        });
    }
    tower.level += 1;
    tower.stats.damage = (tower.stats.damage * UPGRADE_DAMAGE_FACTOR).round();
    tower.stats.range = (tower.stats.range * UPGRADE_RANGE_FACTOR).round();
    tower.stats.fire_rate =
        (tower.stats.fire_rate * UPGRADE_FIRE_RATE_FACTOR).floor().max(MIN_FIRE_RATE_FRAMES);
    Ok(cost)
}

/// Upgrade the first tower within reach of `position`.
///
/// `Ok(None)` means there was no tower there.
pub fn upgrade_tower_at(
    ctx: &mut SimContext,
    position: Position,
) -> Result<Option<TowerUpgrade>, UpgradeError> {
    let run = &mut *ctx.run;
    let picked = ctx
        .world
        .query_mut::<(&Position, &mut Tower)>()
        .into_iter()
        .find(|(_, (pos, _))| pos.range_to(&position) < UPGRADE_PICK_RADIUS)
        .map(|(entity, (_, tower))| {
            upgrade(run, tower).map(|cost| (entity, tower.base, tower.level, cost))
        });

    match picked {
        None => Ok(None),
        Some(Ok((entity, tower, level, cost))) => {
            debug!(tower = tower.id(), level, cost, "tower upgraded");
            ctx.events.push(GameEvent::TowerUpgraded { tower, level, cost });
            Ok(Some(TowerUpgrade {
                entity,
                tower,
                level,
                cost,
            }))
        }
        Some(Err(reason)) => {
            ctx.events.push(GameEvent::UpgradeRejected { reason });
            Err(reason)
        }
    }
}

/// Advance cooldowns and fire at the best target in range.
pub fn run(world: &mut World, path: &Path, frames: f64) {
    let candidates = combat::target_candidates(world, path);
    let mut shots = Vec::new();

    for (_entity, (pos, tower)) in world.query_mut::<(&Position, &mut Tower)>() {
        tower.cooldown -= frames;
        if tower.cooldown > 0.0 {
            continue;
        }
        if let Some(target) = combat::select_target(&candidates, pos, tower.stats.range) {
            shots.push((*pos, target, tower.stats));
            tower.cooldown = tower.stats.fire_rate;
        }
    }

    for (origin, target, stats) in shots {
        world_setup::spawn_projectile(world, origin, target, &stats);
    }
}
