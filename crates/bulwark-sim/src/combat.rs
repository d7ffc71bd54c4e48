//! Combat resolution: targeting, damage, status effects and kill handling.
//!
//! Every function that can remove an enemy takes a `SimContext` so rewards,
//! drops and events are applied in one place.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::{Enemy, Projectile, ProjectileBehavior};
use bulwark_core::constants::*;
use bulwark_core::enums::PowerUpKind;
use bulwark_core::events::GameEvent;
use bulwark_core::types::Position;

use crate::economy::RunState;
use crate::path::Path;
use crate::scheduler::Scheduler;
use crate::world_setup;

/// Mutable view of everything a tick may touch.
pub struct SimContext<'a> {
    pub world: &'a mut World,
    pub path: &'a Path,
    pub run: &'a mut RunState,
    pub rng: &'a mut ChaCha8Rng,
    pub scheduler: &'a mut Scheduler,
    pub events: &'a mut Vec<GameEvent>,
}

/// An enemy a tower may shoot at this tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate {
    pub entity: Entity,
    pub position: Position,
    pub progress: f64,
}

/// How far along the route an enemy is: waypoints passed plus a fraction
/// for the distance covered since the last one.
pub fn path_progress(path: &Path, position: &Position, enemy: &Enemy) -> f64 {
    let last_passed = path.waypoint(enemy.path_index);
    enemy.path_index as f64 + position.range_to(&last_passed) / PROGRESS_SEGMENT_SCALE
}

/// Collect targetable enemies once per tick.
pub fn target_candidates(world: &World, path: &Path) -> Vec<TargetCandidate> {
    world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| !enemy.reached_end)
        .map(|(entity, (position, enemy))| TargetCandidate {
            entity,
            position: *position,
            progress: path_progress(path, position, enemy),
        })
        .collect()
}

/// Pick the in-range enemy furthest along the path. Ties keep the first seen.
pub fn select_target(
    candidates: &[TargetCandidate],
    origin: &Position,
    range: f64,
) -> Option<Entity> {
    let mut best: Option<&TargetCandidate> = None;
    for candidate in candidates {
        if origin.range_to(&candidate.position) > range {
            continue;
        }
        if best.map_or(true, |b| candidate.progress > b.progress) {
            best = Some(candidate);
        }
    }
    best.map(|c| c.entity)
}

/// Subtract `damage`, apply `effect`, and kill on hp <= 0.
/// Returns `true` if this hit killed the enemy.
fn strike(
    ctx: &mut SimContext,
    entity: Entity,
    damage: f64,
    effect: impl FnOnce(&mut Enemy),
) -> bool {
    let dead = match ctx.world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) => {
            enemy.hp -= damage;
            effect(&mut *enemy);
            enemy.hp <= 0.0
        }
        Err(_) => return false,
    };
    dead && kill_enemy(ctx, entity)
}

/// Plain damage with kill check.
pub fn damage_enemy(ctx: &mut SimContext, entity: Entity, damage: f64) -> bool {
    strike(ctx, entity, damage, |_| {})
}

/// Add poison magnitude and refresh its duration.
pub fn apply_poison(enemy: &mut Enemy) {
    enemy.dot_accumulator += POISON_DOT_MAGNITUDE;
    enemy.dot_timer = enemy.dot_timer.max(POISON_DOT_FRAMES);
}

/// Refresh slow to its full duration.
pub fn apply_slow(enemy: &mut Enemy) {
    enemy.slow_timer = enemy.slow_timer.max(SLOW_FRAMES);
}

/// Resolve a projectile that reached its (still live) target.
pub fn resolve_impact(ctx: &mut SimContext, projectile: &Projectile) {
    let target = projectile.target;
    let center = match ctx.world.get::<&Position>(target) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    let damage = projectile.damage;

    match projectile.behavior {
        ProjectileBehavior::Direct => {
            damage_enemy(ctx, target, damage);
        }
        ProjectileBehavior::Poison => {
            strike(ctx, target, damage, apply_poison);
        }
        ProjectileBehavior::Slow => {
            strike(ctx, target, damage, apply_slow);
        }
        ProjectileBehavior::Area { blast_radius } => {
            let caught: Vec<Entity> = ctx
                .world
                .query::<(&Position, &Enemy)>()
                .iter()
                .filter(|(_, (pos, _))| pos.range_to(&center) <= blast_radius)
                .map(|(entity, _)| entity)
                .collect();
            for entity in caught {
                damage_enemy(ctx, entity, damage);
            }
        }
        ProjectileBehavior::Chain {
            hops,
            radius,
            falloff,
        } => {
            damage_enemy(ctx, target, damage);
            let hop_damage = (damage * falloff).floor();
            let mut hit = vec![target];
            let mut from = center;
            for _ in 0..hops {
                let Some((next, next_pos)) = nearest_unhit(ctx.world, &from, radius, &hit) else {
                    break;
                };
                damage_enemy(ctx, next, hop_damage);
                hit.push(next);
                from = next_pos;
            }
        }
    }
}

/// Nearest live enemy strictly within `radius` of `from`, skipping `exclude`.
fn nearest_unhit(
    world: &World,
    from: &Position,
    radius: f64,
    exclude: &[Entity],
) -> Option<(Entity, Position)> {
    world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(entity, _)| !exclude.contains(entity))
        .map(|(entity, (pos, _))| (entity, *pos, pos.range_to(from)))
        .filter(|&(_, _, distance)| distance < radius)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(entity, pos, _)| (entity, pos))
}

/// Gold paid for killing an enemy with `max_hp`.
pub fn kill_reward(max_hp: f64) -> u32 {
    KILL_GOLD_MIN.max((max_hp / KILL_GOLD_HP_DIVISOR).floor() as u32)
}

/// Reward and remove a killed enemy.
///
/// Returns `false` without side effects if the enemy is already gone, so a
/// second call for the same entity can never pay out twice.
pub fn kill_enemy(ctx: &mut SimContext, entity: Entity) -> bool {
    let (position, enemy) = match ctx.world.query_one_mut::<(&Position, &Enemy)>(entity) {
        Ok((pos, enemy)) => (*pos, enemy.clone()),
        Err(_) => return false,
    };
    let _ = ctx.world.despawn(entity);

    world_setup::spawn_particles(ctx.world, ctx.rng, position, enemy.color, KILL_PARTICLES);

    let gold = kill_reward(enemy.max_hp);
    ctx.run.earn(gold);
    ctx.run.score += enemy.score_value;

    if ctx.rng.gen_bool(POWERUP_DROP_CHANCE) {
        let kind = *PowerUpKind::ALL
            .choose(&mut *ctx.rng)
            .unwrap_or(&PowerUpKind::Gold);
        let drop_at = Position::new(
            position.x + ctx.rng.gen_range(-POWERUP_JITTER..POWERUP_JITTER),
            position.y + ctx.rng.gen_range(-POWERUP_JITTER..POWERUP_JITTER),
        );
        world_setup::spawn_powerup(ctx.world, drop_at, kind);
    }

    ctx.events.push(GameEvent::EnemyKilled {
        kind: enemy.kind,
        gold,
        score: enemy.score_value,
    });
    true
}
