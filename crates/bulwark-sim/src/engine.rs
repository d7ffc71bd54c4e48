//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the run state, processes
//! player commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless: rendering, input and storage
//! live outside this crate.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::constants::FRAME_RATE;
use bulwark_core::enums::{EnemyKind, PowerUpKind, TowerKind};
use bulwark_core::error::{PlacementError, UpgradeError};
use bulwark_core::events::GameEvent;
use bulwark_core::state::{GameStateSnapshot, SaveRecord};
use bulwark_core::types::{Position, SimTime};

use crate::combat::SimContext;
use crate::economy::RunState;
use crate::path::Path;
use crate::scheduler::Scheduler;
use crate::systems;
use crate::systems::towers::TowerUpgrade;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same frame deltas give the same run.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Progress to resume from, if any.
    pub save: Option<SaveRecord>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            save: None,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    path: Path,
    time: SimTime,
    run: RunState,
    rng: ChaCha8Rng,
    scheduler: Scheduler,
    /// Advisory selection used by `PlaceTower` commands without a tower.
    selected_tower: TowerKind,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine on the default map.
    pub fn new(config: SimConfig) -> Self {
        Self::with_path(config, Path::default_map())
    }

    /// Create an engine on a custom path.
    pub fn with_path(config: SimConfig, path: Path) -> Self {
        let mut run = config
            .save
            .as_ref()
            .map(RunState::from_record)
            .unwrap_or_default();
        if config.time_scale.is_finite() && config.time_scale > 0.0 {
            run.time_scale = config.time_scale;
        }

        Self {
            world: World::new(),
            path,
            time: SimTime::default(),
            run,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scheduler: Scheduler::default(),
            selected_tower: TowerKind::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_secs` wall-clock seconds
    /// and return the resulting snapshot.
    pub fn tick(&mut self, dt_secs: f64) -> GameStateSnapshot {
        self.advance(dt_secs);
        self.snapshot()
    }

    /// Advance one frame without building a snapshot. Events keep
    /// accumulating until the next `snapshot`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.process_commands();

        let dt_secs = if dt_secs.is_finite() {
            dt_secs.max(0.0)
        } else {
            0.0
        };

        if self.run.is_running() {
            self.run_systems(dt_secs);
            self.time.advance(dt_secs);
        } else if !self.run.playing && !self.run.paused {
            // Game over: only cosmetics keep moving.
            let frames = dt_secs * FRAME_RATE * self.run.time_scale;
            systems::particles::run(&mut self.world, frames, &mut self.despawn_buffer);
        }
    }

    /// Build a snapshot, draining pending events into it.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.run,
            self.selected_tower,
            events,
        )
    }

    // --- Direct commands ---

    /// Try to place a tower at `position`.
    pub fn place_tower(
        &mut self,
        position: Position,
        kind: TowerKind,
    ) -> Result<Entity, PlacementError> {
        systems::towers::place_tower(&mut self.context(), position, kind)
    }

    /// Try to upgrade the tower near `position`. `Ok(None)` if there is none.
    pub fn upgrade_tower_at(
        &mut self,
        position: Position,
    ) -> Result<Option<TowerUpgrade>, UpgradeError> {
        systems::towers::upgrade_tower_at(&mut self.context(), position)
    }

    pub fn collect_powerup_at(&mut self, position: Position) -> Option<PowerUpKind> {
        systems::powerups::collect_at(&mut self.context(), position)
    }

    pub fn collect_all_powerups(&mut self) -> Vec<PowerUpKind> {
        systems::powerups::collect_all(&mut self.context())
    }

    /// Apply a power-up effect directly, as if it had been collected.
    pub fn apply_powerup(&mut self, kind: PowerUpKind) {
        systems::powerups::apply(&mut self.context(), kind);
    }

    /// Start the next wave now. Returns its number, or `None` after game over.
    pub fn spawn_wave(&mut self) -> Option<u32> {
        systems::waves::spawn_wave(&mut self.context())
    }

    /// Queue `n` waves (clamped to at least one).
    pub fn send_multiple_waves(&mut self, n: u32) {
        systems::waves::send_multiple_waves(&mut self.context(), n);
    }

    /// Flip between 1x and 2x. Returns the new scale.
    pub fn toggle_time_scale(&mut self) -> f64 {
        let scale = self.run.toggle_time_scale();
        debug!(scale, "time scale changed");
        self.events.push(GameEvent::TimeScaleChanged { scale });
        scale
    }

    pub fn select_tower_type(&mut self, kind: TowerKind) {
        self.selected_tower = kind;
    }

    pub fn pause(&mut self) {
        if self.run.playing {
            self.run.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.run.paused = false;
    }

    /// Spawn an enemy at the path start outside of any wave.
    pub fn spawn_enemy(&mut self, kind: EnemyKind) -> Entity {
        world_setup::spawn_enemy(&mut self.world, &self.path, kind)
    }

    // --- Read access ---

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn save_record(&self) -> SaveRecord {
        self.run.save_record()
    }

    pub fn is_game_over(&self) -> bool {
        !self.run.playing
    }

    pub fn selected_tower(&self) -> TowerKind {
        self.selected_tower
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.run.time_scale
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a mutable reference to the run state (for tests).
    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    pub(crate) fn context(&mut self) -> SimContext<'_> {
        SimContext {
            world: &mut self.world,
            path: &self.path,
            run: &mut self.run,
            rng: &mut self.rng,
            scheduler: &mut self.scheduler,
            events: &mut self.events,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Rejections surface as events.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y, tower } => {
                let kind = tower.unwrap_or(self.selected_tower);
                let _ = self.place_tower(Position::new(x, y), kind);
            }
            PlayerCommand::UpgradeTowerAt { x, y } => {
                let _ = self.upgrade_tower_at(Position::new(x, y));
            }
            PlayerCommand::SelectTowerType { tower } => self.select_tower_type(tower),
            PlayerCommand::CollectPowerUpAt { x, y } => {
                self.collect_powerup_at(Position::new(x, y));
            }
            PlayerCommand::CollectAllPowerUps => {
                self.collect_all_powerups();
            }
            PlayerCommand::SpawnWave => {
                self.spawn_wave();
            }
            PlayerCommand::SendWaves { count } => self.send_multiple_waves(count),
            PlayerCommand::ToggleTimeScale => {
                self.toggle_time_scale();
            }
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_secs: f64) {
        let frames = dt_secs * FRAME_RATE * self.run.time_scale;
        self.scheduler.advance(dt_secs * 1000.0);

        let Self {
            world,
            path,
            run,
            rng,
            scheduler,
            events,
            despawn_buffer,
            ..
        } = self;
        let mut ctx = SimContext {
            world,
            path,
            run,
            rng,
            scheduler,
            events,
        };

        // 1. Due timers (wave spawns, boost expiry)
        systems::timers::run(&mut ctx);
        // 2. Towers: cooldowns, targeting, firing
        systems::towers::run(ctx.world, ctx.path, frames);
        // 3. Projectiles: homing, impact resolution
        systems::projectiles::run(&mut ctx, frames);
        // 4. Enemies: DoT, movement, leak/kill removal
        systems::enemies::run(&mut ctx, frames);
        // 5. Particles
        systems::particles::run(ctx.world, frames, despawn_buffer);
        // 6. Power-up expiry
        systems::powerups::run(ctx.world, frames, despawn_buffer);
        // 7. Wave completion
        systems::waves::check_wave_complete(&mut ctx);
    }
}
