//! Wave director: builds spawn schedules with escalating difficulty and
//! detects wave completion.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use bulwark_core::components::{Enemy, Projectile};
use bulwark_core::constants::*;
use bulwark_core::enums::EnemyKind;
use bulwark_core::events::GameEvent;

use crate::combat::SimContext;
use crate::scheduler::TimedAction;
use crate::world_setup;

/// Regular enemies in `wave`.
pub fn enemy_count(wave: u32) -> u32 {
    WAVE_BASE_COUNT + (f64::from(wave) * WAVE_COUNT_GROWTH).floor() as u32
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave > 0 && wave % BOSS_WAVE_INTERVAL == 0
}

/// Start the next wave: bump the counter and schedule its spawns.
///
/// Returns the new wave number, or `None` once the run is over.
pub fn spawn_wave(ctx: &mut SimContext) -> Option<u32> {
    if !ctx.run.playing {
        return None;
    }
    ctx.run.wave += 1;
    ctx.run.wave_active = true;
    let wave = ctx.run.wave;
    let count = enemy_count(wave);
    let time_scale = ctx.run.time_scale;

    for i in 0..count {
        ctx.scheduler.schedule_in(
            f64::from(i) * WAVE_SPAWN_STAGGER_MS / time_scale,
            TimedAction::SpawnEnemy { wave },
        );
    }
    if is_boss_wave(wave) {
        ctx.scheduler.schedule_in(
            (f64::from(count) * WAVE_SPAWN_STAGGER_MS + BOSS_EXTRA_DELAY_MS) / time_scale,
            TimedAction::SpawnBoss { wave },
        );
    }

    info!(wave, enemies = count, boss = is_boss_wave(wave), "wave started");
    ctx.events.push(GameEvent::WaveStarted {
        wave,
        enemies: count + u32::from(is_boss_wave(wave)),
    });
    Some(wave)
}

/// Queue `n` waves (at least one), spaced apart. The first starts now.
pub fn send_multiple_waves(ctx: &mut SimContext, n: u32) {
    let spacing = MULTI_WAVE_SPACING_MS / ctx.run.time_scale;
    for i in 0..n.max(1) {
        ctx.scheduler
            .schedule_in(f64::from(i) * spacing, TimedAction::SpawnWave);
    }
}

/// Pick the preset for one regular spawn of `wave`.
///
/// Each condition is an independent draw; the first that passes wins.
pub fn roll_enemy_kind(rng: &mut ChaCha8Rng, wave: u32) -> EnemyKind {
    if wave > SHIELD_MIN_WAVE && rng.gen_bool(SHIELD_CHANCE) {
        EnemyKind::Shield
    } else if wave > FAST_MIN_WAVE && rng.gen_bool(FAST_CHANCE) {
        EnemyKind::Fast
    } else {
        EnemyKind::Grunt
    }
}

/// Spawn one scheduled regular enemy.
pub fn spawn_scheduled_enemy(ctx: &mut SimContext, wave: u32) {
    let kind = roll_enemy_kind(ctx.rng, wave);
    world_setup::spawn_enemy(ctx.world, ctx.path, kind);
}

/// Close the active wave once the field is clear and nothing else is on
/// its way. Pays the clear bonus. Returns `true` on completion.
pub fn check_wave_complete(ctx: &mut SimContext) -> bool {
    if !ctx.run.wave_active || ctx.scheduler.has_pending_enemy_spawns() {
        return false;
    }
    let enemies = ctx.world.query::<&Enemy>().iter().count();
    let projectiles = ctx.world.query::<&Projectile>().iter().count();
    if enemies > 0 || projectiles > 0 {
        return false;
    }

    let bonus = ctx.run.wave_bonus();
    ctx.run.wave_active = false;
    ctx.run.earn(bonus);
    info!(wave = ctx.run.wave, bonus, "wave cleared");
    ctx.events.push(GameEvent::WaveCleared {
        wave: ctx.run.wave,
        bonus,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn enemy_count_grows_with_wave() {
        assert_eq!(enemy_count(1), 8);
        assert_eq!(enemy_count(2), 11);
        assert_eq!(enemy_count(5), 19);
        assert_eq!(enemy_count(8), 26);
    }

    #[test]
    fn every_eighth_wave_has_a_boss() {
        assert!(!is_boss_wave(0));
        assert!(!is_boss_wave(7));
        assert!(is_boss_wave(8));
        assert!(is_boss_wave(16));
    }

    #[test]
    fn early_waves_are_all_grunts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            assert_eq!(roll_enemy_kind(&mut rng, 2), EnemyKind::Grunt);
        }
    }

    #[test]
    fn mid_waves_add_fast_but_not_shield() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let kinds: Vec<EnemyKind> = (0..500).map(|_| roll_enemy_kind(&mut rng, 4)).collect();
        assert!(kinds.contains(&EnemyKind::Fast));
        assert!(!kinds.contains(&EnemyKind::Shield));
    }

    #[test]
    fn late_waves_mix_all_regular_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 4000;
        let kinds: Vec<EnemyKind> = (0..n).map(|_| roll_enemy_kind(&mut rng, 9)).collect();
        let shields = kinds.iter().filter(|k| **k == EnemyKind::Shield).count();
        let fasts = kinds.iter().filter(|k| **k == EnemyKind::Fast).count();
        // Shield 20%; fast 25% of the remaining 80% = 20%.
        let shield_share = shields as f64 / n as f64;
        let fast_share = fasts as f64 / n as f64;
        assert!((shield_share - 0.2).abs() < 0.03, "shield share {shield_share}");
        assert!((fast_share - 0.2).abs() < 0.03, "fast share {fast_share}");
        assert!(!kinds.contains(&EnemyKind::Boss));
    }
}
