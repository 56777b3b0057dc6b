//! Cooperative timers and the tick driver
//!
//! The host framework runs everything on one thread: timers fire between
//! input events, never during a tick. `Scheduler` is a virtual-time timer
//! queue with one cancellable primitive; `TickDriver` layers the two tick
//! policies on top of it.

use serde::{Deserialize, Serialize};

/// Handle for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due_ms: u64,
    /// Re-armed after firing when set
    period_ms: Option<u64>,
}

/// Virtual-time timer queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn arm(&mut self, delay_ms: u64, period_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms: self.now_ms + delay_ms,
            period_ms,
        });
        id
    }

    /// Fire once after `delay_ms`
    pub fn after(&mut self, delay_ms: u64) -> TimerId {
        self.arm(delay_ms, None)
    }

    /// Fire every `period_ms`, first after one period
    pub fn periodic(&mut self, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.arm(period_ms, Some(period_ms))
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the next timer
    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock
    /// to its due time. Ties fire in arming order. Periodic timers re-arm one
    /// period after their due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let Timer {
            id,
            due_ms,
            period_ms,
        } = self.timers[index].clone();
        self.now_ms = self.now_ms.max(due_ms);
        match period_ms {
            Some(period) => self.timers[index].due_ms += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(id)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

/// How the next tick gets scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// Host fires every period regardless of tick duration
    FixedPeriod { period_ms: u64 },
    /// Next tick is armed only after the current one finishes
    Chained { delay_ms: u64 },
}

/// Drives ticks for one app activation.
///
/// `running` is checked before every reschedule so a chained tick that fires
/// around deactivation can't queue another cycle.
#[derive(Debug, Clone)]
pub struct TickDriver {
    schedule: Schedule,
    running: bool,
    timer: Option<TimerId>,
    last_tick_ms: Option<u64>,
    frame_rate: Option<f32>,
    ticks: u64,
}

impl TickDriver {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            running: false,
            timer: None,
            last_tick_ms: None,
            frame_rate: None,
            ticks: 0,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run since the last start
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Observed ticks per second, from the last inter-tick gap
    pub fn frame_rate(&self) -> Option<f32> {
        self.frame_rate
    }

    /// Begin ticking. A fixed-period timer is armed here; a chained one is
    /// armed by `finish_tick`.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        if let Some(old) = self.timer.take() {
            scheduler.cancel(old);
        }
        self.running = true;
        self.ticks = 0;
        self.last_tick_ms = None;
        self.frame_rate = None;
        if let Schedule::FixedPeriod { period_ms } = self.schedule {
            self.timer = Some(scheduler.periodic(period_ms));
        }
    }

    /// Stop ticking and cancel any outstanding timer
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        self.running = false;
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
    }

    /// Claim a fired timer. Returns true if it is ours and a tick should run.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        if matches!(self.schedule, Schedule::Chained { .. }) {
            self.timer = None;
        }
        self.running
    }

    /// Record the start of a tick. Returns false when stopped.
    pub fn begin_tick(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        if let Some(last) = self.last_tick_ms {
            let elapsed = now_ms.saturating_sub(last);
            self.frame_rate = (elapsed > 0).then(|| 1000.0 / elapsed as f32);
        }
        self.last_tick_ms = Some(now_ms);
        self.ticks += 1;
        true
    }

    /// Finish a tick, arming the next one for the chained policy
    pub fn finish_tick(&mut self, scheduler: &mut Scheduler) {
        if !self.running {
            return;
        }
        if let Schedule::Chained { delay_ms } = self.schedule {
            if self.timer.is_none() {
                // A zero delay would refire within the same instant forever
                self.timer = Some(scheduler.after(delay_ms.max(1)));
            }
        }
    }
}
