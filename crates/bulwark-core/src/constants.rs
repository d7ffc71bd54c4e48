//! Simulation constants and tuning parameters.
//!
//! Durations suffixed `_FRAMES` are in 60 Hz frame units and are advanced by
//! the scaled frame delta. Durations suffixed `_MS` are scheduler delays in
//! real milliseconds.

/// Frame rate the per-tick quantities are calibrated against.
pub const FRAME_RATE: f64 = 60.0;

/// Time scale used by the fast-forward toggle.
pub const FAST_TIME_SCALE: f64 = 2.0;

// --- Run state defaults ---

pub const START_GOLD: u32 = 200;
pub const START_LIVES: i32 = 20;

// --- Placement ---

/// Minimum distance between a tower and the path centerline.
pub const PATH_CLEARANCE: f64 = 28.0;

/// Reach of an upgrade click around a tower's center.
pub const UPGRADE_PICK_RADIUS: f64 = 22.0;

// --- Upgrades ---

/// Upgrade cost is `floor(base_cost * (1 + level * UPGRADE_COST_FACTOR))`.
pub const UPGRADE_COST_FACTOR: f64 = 0.7;
pub const UPGRADE_DAMAGE_FACTOR: f64 = 1.6;
pub const UPGRADE_RANGE_FACTOR: f64 = 1.05;
pub const UPGRADE_FIRE_RATE_FACTOR: f64 = 0.85;

/// Hard floor on an upgraded tower's fire-rate cooldown.
pub const MIN_FIRE_RATE_FRAMES: f64 = 4.0;

// --- Targeting ---

/// Divisor applied to in-segment distance when scoring path progress.
pub const PROGRESS_SEGMENT_SCALE: f64 = 200.0;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f64 = 9.0;
pub const PROJECTILE_RADIUS: f64 = 4.0;

/// Damage-over-time magnitude added per poison hit.
pub const POISON_DOT_MAGNITUDE: f64 = 8.0;
/// Damage-over-time duration refreshed by a poison hit.
pub const POISON_DOT_FRAMES: f64 = 8.0;
/// DoT damage per frame is `accumulator * frames / POISON_DOT_DIVISOR`.
pub const POISON_DOT_DIVISOR: f64 = 10.0;

/// Slow duration refreshed by a frost hit.
pub const SLOW_FRAMES: f64 = 120.0;
/// Speed multiplier while slowed.
pub const SLOW_FACTOR: f64 = 0.45;

pub const MORTAR_BLAST_RADIUS: f64 = 18.0;

pub const CHAIN_HOPS: u32 = 3;
pub const CHAIN_RADIUS: f64 = 80.0;
pub const CHAIN_FALLOFF: f64 = 0.6;

// --- Kill handling ---

pub const KILL_PARTICLES: usize = 18;
/// Kill reward is `max(KILL_GOLD_MIN, floor(max_hp / KILL_GOLD_HP_DIVISOR))`.
pub const KILL_GOLD_MIN: u32 = 6;
pub const KILL_GOLD_HP_DIVISOR: f64 = 12.0;

pub const POWERUP_DROP_CHANCE: f64 = 0.16;
/// Drop position jitter on each axis.
pub const POWERUP_JITTER: f64 = 14.0;

// --- Power-ups ---

pub const POWERUP_RADIUS: f64 = 12.0;
pub const POWERUP_TTL_FRAMES: f64 = 12.0 * FRAME_RATE;
/// Extra slack around a power-up's radius for click collection.
pub const POWERUP_PICK_SLACK: f64 = 4.0;

pub const GOLD_POWERUP_AMOUNT: u32 = 140;
pub const SHIELD_POWERUP_LIVES: i32 = 5;
pub const SPEED_BOOST_FACTOR: f64 = 0.6;
pub const SPEED_BOOST_MIN_FIRE_RATE: f64 = 3.0;
/// Real-time length of the speed boost (not divided by time scale).
pub const SPEED_BOOST_MS: f64 = 9000.0;

// --- Particles ---

pub const PARTICLE_SPREAD: f64 = 2.0;
pub const PARTICLE_LIFE_MIN: f64 = 30.0;
pub const PARTICLE_LIFE_MAX: f64 = 70.0;
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 3.0;
pub const PARTICLE_GRAVITY: f64 = 0.06;

// --- Waves ---

/// Regular enemy count is `WAVE_BASE_COUNT + floor(wave * WAVE_COUNT_GROWTH)`.
pub const WAVE_BASE_COUNT: u32 = 6;
pub const WAVE_COUNT_GROWTH: f64 = 2.6;
pub const WAVE_SPAWN_STAGGER_MS: f64 = 420.0;

/// Every Nth wave ends with a boss.
pub const BOSS_WAVE_INTERVAL: u32 = 8;
pub const BOSS_EXTRA_DELAY_MS: f64 = 900.0;

/// Shield enemies can appear after this wave.
pub const SHIELD_MIN_WAVE: u32 = 5;
pub const SHIELD_CHANCE: f64 = 0.2;
/// Fast enemies can appear after this wave.
pub const FAST_MIN_WAVE: u32 = 2;
pub const FAST_CHANCE: f64 = 0.25;

/// Spacing between waves queued by a multi-wave send.
pub const MULTI_WAVE_SPACING_MS: f64 = 3800.0;

/// Wave clear bonus is `WAVE_BONUS_BASE + wave * WAVE_BONUS_PER_WAVE`.
pub const WAVE_BONUS_BASE: u32 = 80;
pub const WAVE_BONUS_PER_WAVE: u32 = 10;
