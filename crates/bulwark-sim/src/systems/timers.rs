//! Runs due scheduler tasks at the start of a tick.

use bulwark_core::enums::EnemyKind;

use crate::combat::SimContext;
use crate::scheduler::TimedAction;
use crate::systems::{powerups, waves};
use crate::world_setup;

/// Drain every task that is due, including ones scheduled by tasks run here.
pub fn run(ctx: &mut SimContext) {
    while let Some(action) = ctx.scheduler.pop_due() {
        match action {
            TimedAction::SpawnWave => {
                waves::spawn_wave(ctx);
            }
            TimedAction::SpawnEnemy { wave } => waves::spawn_scheduled_enemy(ctx, wave),
            TimedAction::SpawnBoss { .. } => {
                world_setup::spawn_enemy(ctx.world, ctx.path, EnemyKind::Boss);
            }
            TimedAction::RestoreFireRates => powerups::restore_fire_rates(ctx),
        }
    }
}
