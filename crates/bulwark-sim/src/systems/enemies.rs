//! Enemy system: damage over time, path movement, leak and kill removal.

use hecs::Entity;
use tracing::warn;

use bulwark_core::components::Enemy;
use bulwark_core::constants::*;
use bulwark_core::enums::EnemyKind;
use bulwark_core::events::GameEvent;
use bulwark_core::types::{ColorTag, Position};

use crate::combat::{self, SimContext};
use crate::path::Path;
use crate::world_setup;

const LEAK_PARTICLE_COLOR: ColorTag = ColorTag::rgb(0xff6b6b);

/// Apply one tick of poison. Clears the effect once its timer runs out.
pub fn tick_damage_over_time(enemy: &mut Enemy, frames: f64) {
    if enemy.dot_timer <= 0.0 {
        return;
    }
    enemy.dot_timer -= frames;
    enemy.hp -= enemy.dot_accumulator * (frames / POISON_DOT_DIVISOR);
    if enemy.dot_timer <= 0.0 {
        enemy.dot_accumulator = 0.0;
        enemy.dot_timer = 0.0;
    }
}

/// Walk toward the next waypoint, snapping onto it when it is within reach.
pub fn advance_along_path(position: &mut Position, enemy: &mut Enemy, path: &Path, frames: f64) {
    if enemy.slow_timer > 0.0 {
        enemy.slow_timer = (enemy.slow_timer - frames).max(0.0);
    }
    let speed = if enemy.slow_timer > 0.0 {
        enemy.speed * SLOW_FACTOR
    } else {
        enemy.speed
    };

    if enemy.path_index >= path.last_index() {
        enemy.reached_end = true;
        return;
    }

    let next = path.waypoint(enemy.path_index + 1);
    if position.step_toward(&next, speed * frames) {
        *position = next;
        enemy.path_index += 1;
        if enemy.path_index >= path.last_index() {
            enemy.reached_end = true;
        }
    }
}

enum Outcome {
    Alive,
    Leaked(EnemyKind, Position),
    Dead,
}

/// Update every enemy, then remove it if it leaked or died.
///
/// Leaking is checked first: an enemy that reaches the end costs a life and
/// pays no reward, even if its hp is also gone.
pub fn run(ctx: &mut SimContext, frames: f64) {
    let enemies: Vec<Entity> = ctx
        .world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in enemies {
        let outcome = match ctx.world.query_one_mut::<(&mut Position, &mut Enemy)>(entity) {
            Ok((pos, enemy)) => {
                tick_damage_over_time(enemy, frames);
                advance_along_path(pos, enemy, ctx.path, frames);
                if enemy.reached_end {
                    Outcome::Leaked(enemy.kind, *pos)
                } else if enemy.hp <= 0.0 {
                    Outcome::Dead
                } else {
                    Outcome::Alive
                }
            }
            Err(_) => continue,
        };

        match outcome {
            Outcome::Alive => {}
            Outcome::Leaked(kind, pos) => leak(ctx, entity, kind, pos),
            Outcome::Dead => {
                combat::kill_enemy(ctx, entity);
            }
        }
    }
}

fn leak(ctx: &mut SimContext, entity: Entity, kind: EnemyKind, pos: Position) {
    let _ = ctx.world.despawn(entity);
    world_setup::spawn_particles(ctx.world, ctx.rng, pos, LEAK_PARTICLE_COLOR, 1);
    let game_over = ctx.run.lose_life();
    ctx.events.push(GameEvent::EnemyLeaked {
        kind,
        lives: ctx.run.lives,
    });
    if game_over {
        warn!(wave = ctx.run.wave, score = ctx.run.score, "game over");
        ctx.events.push(GameEvent::GameOver {
            wave: ctx.run.wave,
            score: ctx.run.score,
        });
    }
}
