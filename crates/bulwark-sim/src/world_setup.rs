//! Entity spawn factories.
//!
//! Each function builds one entity's component bundle. Gameplay checks
//! (gold, clearance) happen in the callers.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::catalog::{enemy_preset, tower_definition, TowerDefinition};
use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::*;
use bulwark_core::types::{ColorTag, Position, Velocity};

use crate::path::Path;

/// Spawn a level-1 tower holding its own copy of the catalog definition.
pub fn spawn_tower(world: &mut World, position: Position, kind: TowerKind) -> Entity {
    world.spawn((
        position,
        Tower {
            stats: tower_definition(kind),
            base: kind,
            level: 1,
            cooldown: 0.0,
        },
    ))
}

/// Spawn a fresh enemy at the start of the path.
pub fn spawn_enemy(world: &mut World, path: &Path, kind: EnemyKind) -> Entity {
    let preset = enemy_preset(kind);
    world.spawn((
        path.start(),
        Enemy {
            kind,
            hp: preset.hp,
            max_hp: preset.hp,
            speed: preset.speed,
            radius: preset.radius,
            color: preset.color,
            score_value: preset.score_value,
            flying: preset.flying,
            path_index: 0,
            reached_end: false,
            slow_timer: 0.0,
            dot_accumulator: 0.0,
            dot_timer: 0.0,
        },
    ))
}

/// Projectile behavior fired by a tower with the given attack.
pub fn behavior_for(attack: AttackKind) -> ProjectileBehavior {
    match attack {
        AttackKind::Direct => ProjectileBehavior::Direct,
        AttackKind::Poison => ProjectileBehavior::Poison,
        AttackKind::Slow => ProjectileBehavior::Slow,
        AttackKind::Area => ProjectileBehavior::Area {
            blast_radius: MORTAR_BLAST_RADIUS,
        },
        AttackKind::Chain => ProjectileBehavior::Chain {
            hops: CHAIN_HOPS,
            radius: CHAIN_RADIUS,
            falloff: CHAIN_FALLOFF,
        },
    }
}

fn projectile_color(behavior: &ProjectileBehavior) -> ColorTag {
    ColorTag::rgb(match behavior {
        ProjectileBehavior::Direct => 0xffd93d,
        ProjectileBehavior::Poison => 0x8bc34a,
        ProjectileBehavior::Slow => 0x39a0ed,
        ProjectileBehavior::Area { .. } => 0xff8a80,
        ProjectileBehavior::Chain { .. } => 0xfff176,
    })
}

/// Spawn a projectile at `origin` homing on `target` with the tower's current stats.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Entity,
    stats: &TowerDefinition,
) -> Entity {
    let behavior = behavior_for(stats.attack);
    world.spawn((
        origin,
        Projectile {
            target,
            speed: PROJECTILE_SPEED,
            damage: stats.damage,
            radius: PROJECTILE_RADIUS,
            color: projectile_color(&behavior),
            behavior,
        },
    ))
}

/// Spawn a burst of cosmetic particles.
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    color: ColorTag,
    count: usize,
) {
    for _ in 0..count {
        let velocity = Velocity::new(
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
        );
        let particle = Particle {
            color,
            life: rng.gen_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
        };
        world.spawn((position, velocity, particle));
    }
}

pub fn spawn_powerup(world: &mut World, position: Position, kind: PowerUpKind) -> Entity {
    world.spawn((
        position,
        PowerUp {
            kind,
            radius: POWERUP_RADIUS,
            ttl: POWERUP_TTL_FRAMES,
        },
    ))
}
