//! Scripted player for headless sessions.
//!
//! Reads the latest snapshot and answers with the commands a cautious player
//! would issue: grab power-ups, build along a fixed list of spots, upgrade
//! the cheapest tower, and start the next wave once the field is quiet.

use bulwark_core::catalog::tower_definition;
use bulwark_core::commands::PlayerCommand;
use bulwark_core::enums::TowerKind;
use bulwark_core::state::GameStateSnapshot;
use bulwark_core::types::Position;

/// Build order for the default map. Every spot clears the path.
pub const BUILD_ORDER: [(f64, f64, TowerKind); 6] = [
    (60.0, 190.0, TowerKind::Basic),
    (200.0, 230.0, TowerKind::Rapid),
    (290.0, 270.0, TowerKind::Frost),
    (480.0, 300.0, TowerKind::Poison),
    (600.0, 220.0, TowerKind::Tesla),
    (760.0, 220.0, TowerKind::Mortar),
];

#[derive(Debug, Clone)]
pub struct Autopilot {
    build_order: Vec<(Position, TowerKind)>,
    /// Placements issued so far; the next one waits until the snapshot shows them.
    requested_towers: usize,
    /// Wave number the last `SpawnWave` should produce.
    requested_wave: u32,
    waves_remaining: u32,
}

impl Autopilot {
    pub fn new(waves: u32) -> Self {
        Self {
            build_order: BUILD_ORDER
                .iter()
                .map(|&(x, y, kind)| (Position::new(x, y), kind))
                .collect(),
            requested_towers: 0,
            requested_wave: 0,
            waves_remaining: waves,
        }
    }

    pub fn waves_remaining(&self) -> u32 {
        self.waves_remaining
    }

    /// Whether every wave has been sent and the last one is over.
    pub fn is_finished(&self, snapshot: &GameStateSnapshot) -> bool {
        !snapshot.run.playing
            || (self.waves_remaining == 0
                && snapshot.run.wave >= self.requested_wave
                && !snapshot.run.wave_active)
    }

    /// Commands to issue in response to `snapshot`.
    pub fn plan(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let run = &snapshot.run;
        if !run.playing || run.paused {
            return Vec::new();
        }
        let mut commands = Vec::new();

        if !snapshot.powerups.is_empty() {
            commands.push(PlayerCommand::CollectAllPowerUps);
        }

        // Wait for earlier orders to land before spending again.
        if snapshot.towers.len() >= self.requested_towers {
            if let Some(&(spot, kind)) = self.build_order.get(snapshot.towers.len()) {
                if run.gold >= tower_definition(kind).cost {
                    commands.push(PlayerCommand::PlaceTower {
                        x: spot.x,
                        y: spot.y,
                        tower: Some(kind),
                    });
                    self.requested_towers = snapshot.towers.len() + 1;
                }
            } else if let Some(tower) = snapshot
                .towers
                .iter()
                .filter(|t| t.upgrade_cost <= run.gold)
                .min_by_key(|t| t.upgrade_cost)
            {
                commands.push(PlayerCommand::UpgradeTowerAt {
                    x: tower.position.x,
                    y: tower.position.y,
                });
            }
        }

        if self.waves_remaining > 0 && !run.wave_active && run.wave >= self.requested_wave {
            commands.push(PlayerCommand::SpawnWave);
            self.requested_wave = run.wave + 1;
            self.waves_remaining -= 1;
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::enums::PowerUpKind;
    use bulwark_core::state::{PowerUpView, RunView, TowerView};

    fn snapshot(gold: u32) -> GameStateSnapshot {
        GameStateSnapshot {
            run: RunView {
                gold,
                lives: 20,
                playing: true,
                time_scale: 1.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn tower_view(x: f64, y: f64, upgrade_cost: u32) -> TowerView {
        let def = tower_definition(TowerKind::Basic);
        TowerView {
            position: Position::new(x, y),
            kind: TowerKind::Basic,
            level: 1,
            range: def.range,
            damage: def.damage,
            fire_rate: def.fire_rate,
            color: def.color,
            upgrade_cost,
        }
    }

    #[test]
    fn first_plan_builds_and_starts_a_wave() {
        let mut pilot = Autopilot::new(2);
        let commands = pilot.plan(&snapshot(200));
        assert_eq!(
            commands,
            vec![
                PlayerCommand::PlaceTower {
                    x: 60.0,
                    y: 190.0,
                    tower: Some(TowerKind::Basic),
                },
                PlayerCommand::SpawnWave,
            ]
        );
        assert_eq!(pilot.waves_remaining(), 1);
    }

    #[test]
    fn stale_snapshot_does_not_repeat_orders() {
        let mut pilot = Autopilot::new(2);
        pilot.plan(&snapshot(200));
        assert!(pilot.plan(&snapshot(200)).is_empty());
    }

    #[test]
    fn upgrades_cheapest_tower_after_build_order() {
        let mut pilot = Autopilot::new(0);
        let mut snap = snapshot(150);
        snap.towers = BUILD_ORDER
            .iter()
            .enumerate()
            .map(|(i, &(x, y, _))| tower_view(x, y, 120 + i as u32))
            .collect();
        snap.towers[3].upgrade_cost = 100;
        pilot.requested_towers = snap.towers.len();

        assert_eq!(
            pilot.plan(&snap),
            vec![PlayerCommand::UpgradeTowerAt { x: 480.0, y: 300.0 }]
        );
    }

    #[test]
    fn collects_powerups() {
        let mut pilot = Autopilot::new(0);
        let mut snap = snapshot(0);
        snap.powerups.push(PowerUpView {
            position: Position::new(300.0, 300.0),
            kind: PowerUpKind::Gold,
            label: 'G',
            radius: 12.0,
        });
        assert_eq!(pilot.plan(&snap), vec![PlayerCommand::CollectAllPowerUps]);
    }

    #[test]
    fn idle_after_game_over() {
        let mut pilot = Autopilot::new(3);
        let mut snap = snapshot(1000);
        snap.run.playing = false;
        assert!(pilot.plan(&snap).is_empty());
        assert!(pilot.is_finished(&snap));
    }

    #[test]
    fn finished_once_last_wave_clears() {
        let mut pilot = Autopilot::new(1);
        pilot.plan(&snapshot(0));
        let mut snap = snapshot(0);
        snap.run.wave = 1;
        snap.run.wave_active = true;
        assert!(!pilot.is_finished(&snap));
        snap.run.wave_active = false;
        assert!(pilot.is_finished(&snap));
    }

    #[test]
    fn build_order_clears_default_path() {
        let path = bulwark_sim::path::Path::default_map();
        for (x, y, _) in BUILD_ORDER {
            assert!(path.distance_to(&Position::new(x, y)) >= 28.0);
        }
    }
}
