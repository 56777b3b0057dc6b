//! Stand-in for the badge's window framework
//!
//! Owns the app, display and accelerometer, and runs the cooperative loop:
//! queued button presses are dispatched only between timer firings, and each
//! tick runs to completion before anything else happens.

use std::collections::VecDeque;

use super::{BallApp, Button};
use crate::platform::Accelerometer;
use crate::renderer::Surface;
use crate::scheduler::Scheduler;

pub struct Host<S: Surface, A: Accelerometer> {
    app: BallApp,
    surface: S,
    accel: A,
    scheduler: Scheduler,
    pending: VecDeque<Button>,
    active: bool,
}

impl<S: Surface, A: Accelerometer> Host<S, A> {
    pub fn new(app: BallApp, surface: S, accel: A) -> Self {
        Self {
            app,
            surface,
            accel,
            scheduler: Scheduler::new(),
            pending: VecDeque::new(),
            active: false,
        }
    }

    pub fn app(&self) -> &BallApp {
        &self.app
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn accelerometer_mut(&mut self) -> &mut A {
        &mut self.accel
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.app
            .on_activate(&mut self.surface, &mut self.accel, &mut self.scheduler);
    }

    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.pending.clear();
        self.app.on_deactivate(&mut self.scheduler);
    }

    /// Queue a button press for the next gap between ticks
    pub fn press(&mut self, button: Button) {
        self.pending.push_back(button);
    }

    fn dispatch_input(&mut self) {
        while let Some(button) = self.pending.pop_front() {
            if !self.active {
                log::debug!("Dropped {:?} while inactive", button);
                continue;
            }
            self.app.on_button(button, &mut self.surface);
        }
    }

    /// Advance virtual time by `duration_ms`, firing due timers in order.
    /// Returns the number of ticks that ran.
    pub fn run_for(&mut self, duration_ms: u64) -> u64 {
        let until = self.scheduler.now_ms().saturating_add(duration_ms);
        let mut ticks = 0;
        loop {
            self.dispatch_input();
            let Some(id) = self.scheduler.pop_due(until) else {
                break;
            };
            if self
                .app
                .on_timer(id, &mut self.surface, &mut self.accel, &mut self.scheduler)
            {
                ticks += 1;
            }
        }
        self.scheduler.advance_to(until);
        ticks
    }
}
