//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use bulwark_core::components::*;
use bulwark_core::enums::TowerKind;
use bulwark_core::events::GameEvent;
use bulwark_core::state::*;
use bulwark_core::types::{Position, SimTime};

use crate::economy::RunState;
use crate::systems::towers::upgrade_cost;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    run: &RunState,
    selected_tower: TowerKind,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        run: run.view(),
        selected_tower,
        towers: build_towers(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        powerups: build_powerups(world),
        particles: build_particles(world),
        events,
    }
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .query::<(&Position, &Tower)>()
        .iter()
        .map(|(_, (pos, tower))| TowerView {
            position: *pos,
            kind: tower.base,
            level: tower.level,
            range: tower.stats.range,
            damage: tower.stats.damage,
            fire_rate: tower.stats.fire_rate,
            color: tower.stats.color,
            upgrade_cost: upgrade_cost(tower),
        })
        .collect()
}

/// Enemies ordered by path index so later ones draw on top.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(_, (pos, enemy))| EnemyView {
            position: *pos,
            kind: enemy.kind,
            radius: enemy.radius,
            color: enemy.color,
            health_fraction: (enemy.hp / enemy.max_hp).clamp(0.0, 1.0),
            path_index: enemy.path_index,
            slowed: enemy.slow_timer > 0.0,
            poisoned: enemy.dot_timer > 0.0,
            flying: enemy.flying,
        })
        .collect();

    enemies.sort_by_key(|e| e.path_index);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_, (pos, projectile))| ProjectileView {
            position: *pos,
            radius: projectile.radius,
            color: projectile.color,
        })
        .collect()
}

fn build_powerups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&Position, &PowerUp)>()
        .iter()
        .map(|(_, (pos, powerup))| PowerUpView {
            position: *pos,
            kind: powerup.kind,
            label: powerup.kind.label(),
            radius: powerup.radius,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            color: particle.color,
            size: particle.size,
        })
        .collect()
}
