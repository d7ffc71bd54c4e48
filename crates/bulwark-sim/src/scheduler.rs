//! Deferred one-shot tasks keyed by a logical millisecond clock.
//!
//! The engine advances the clock by the real frame delta and drains due
//! tasks once per tick, before any system runs. Tasks cannot be cancelled;
//! an action whose subject no longer exists resolves to a no-op.

/// Work deferred to a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    /// Start a wave (queued by a multi-wave send).
    SpawnWave,
    /// One regular enemy of the given wave.
    SpawnEnemy { wave: u32 },
    /// The boss closing a boss wave.
    SpawnBoss { wave: u32 },
    /// End of a speed boost.
    RestoreFireRates,
}

impl TimedAction {
    pub fn is_enemy_spawn(&self) -> bool {
        matches!(
            self,
            TimedAction::SpawnEnemy { .. } | TimedAction::SpawnBoss { .. }
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledTask {
    pub due_ms: f64,
    /// Insertion order, used to break ties between equal due times.
    seq: u64,
    pub action: TimedAction,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: f64,
    next_seq: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Schedule `action` to run `delay_ms` from now.
    pub fn schedule_in(&mut self, delay_ms: f64, action: TimedAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask {
            due_ms: self.now_ms + delay_ms.max(0.0),
            seq,
            action,
        });
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.now_ms += dt_ms.max(0.0);
    }

    /// Remove and return the earliest task that is due.
    pub fn pop_due(&mut self) -> Option<TimedAction> {
        let now = self.now_ms;
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= now)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        Some(self.tasks.remove(index).action)
    }

    pub fn pending(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn has_pending_enemy_spawns(&self) -> bool {
        self.tasks.iter().any(|task| task.action.is_enemy_spawn())
    }
}
