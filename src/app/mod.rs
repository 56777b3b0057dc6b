//! The ball toy apps
//!
//! `BallApp` is what the host window framework instantiates. It owns its own
//! registry, RNG and tick driver, reacts to activation, timer and button
//! callbacks, and paints to whatever surface the host hands it.

pub mod crosshair;
pub mod host;

pub use crate::settings::Variant;
pub use crosshair::{CROSSHAIR_STEP, Crosshair};
pub use host::Host;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::color::{BACKGROUND_COLOR, CROSSHAIR_COLOR};
use crate::platform::Accelerometer;
use crate::renderer::{Surface, disc_radius_px, paint};
use crate::scheduler::{Scheduler, TickDriver, TimerId};
use crate::settings::Settings;
use crate::sim::{Disc, Discs, Playfield, SimState, TickInput, TickReport, tick};

/// Badge buttons the sandbox listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Joystick centre: drop an obstacle at the crosshair
    Confirm,
    /// Button A: remove the last disc
    Cancel,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// Crosshair offset for joystick directions
    pub fn offset(&self) -> Option<Vec2> {
        match self {
            Button::Up => Some(Vec2::new(0.0, -CROSSHAIR_STEP)),
            Button::Down => Some(Vec2::new(0.0, CROSSHAIR_STEP)),
            Button::Left => Some(Vec2::new(-CROSSHAIR_STEP, 0.0)),
            Button::Right => Some(Vec2::new(CROSSHAIR_STEP, 0.0)),
            Button::Confirm | Button::Cancel => None,
        }
    }
}

/// A ball toy instance
#[derive(Debug, Clone)]
pub struct BallApp {
    settings: Settings,
    sim: SimState,
    rng: Pcg32,
    driver: TickDriver,
    crosshair: Option<Crosshair>,
    last_report: Option<TickReport>,
}

impl BallApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            sim: SimState::new(Playfield::new(0.0, 0.0), settings.variant.static_redraw()),
            rng: Pcg32::seed_from_u64(settings.seed),
            driver: TickDriver::new(settings.schedule()),
            crosshair: None,
            last_report: None,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn discs(&self) -> &Discs {
        &self.sim.discs
    }

    pub fn crosshair(&self) -> Option<&Crosshair> {
        self.crosshair.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn ticks(&self) -> u64 {
        self.driver.ticks()
    }

    pub fn frame_rate(&self) -> Option<f32> {
        self.driver.frame_rate()
    }

    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// Reset the registry, clear the display, run the first tick and start
    /// the tick schedule
    pub fn on_activate<S, A>(&mut self, surface: &mut S, accel: &mut A, scheduler: &mut Scheduler)
    where
        S: Surface + ?Sized,
        A: Accelerometer + ?Sized,
    {
        let playfield = Playfield::from_surface(surface.width(), surface.height());
        let variant = self.settings.variant;

        let mut sim = SimState::new(playfield, variant.static_redraw());
        sim.speed = self.settings.speed;
        sim.discs = Discs::seed(
            &playfield,
            self.settings.ball_count,
            self.settings.seeded_statics(),
            &mut self.rng,
        );
        self.sim = sim;
        self.crosshair = variant.interactive().then(|| Crosshair::home(&playfield));
        self.last_report = None;

        log::info!(
            "Activated {} on {}x{}: {} discs ({} static), {:?}",
            variant.as_str(),
            surface.width(),
            surface.height(),
            self.sim.discs.len(),
            self.sim.discs.static_count(),
            self.driver.schedule()
        );

        surface.fill(BACKGROUND_COLOR);
        self.driver.start(scheduler);
        self.run_tick(surface, accel, scheduler);
    }

    /// Stop ticking. No further tick runs until the next activation.
    pub fn on_deactivate(&mut self, scheduler: &mut Scheduler) {
        self.driver.stop(scheduler);
        log::info!(
            "Deactivated {} after {} ticks",
            self.settings.variant.as_str(),
            self.driver.ticks()
        );
    }

    /// Timer callback. Returns true if a tick ran.
    pub fn on_timer<S, A>(
        &mut self,
        id: TimerId,
        surface: &mut S,
        accel: &mut A,
        scheduler: &mut Scheduler,
    ) -> bool
    where
        S: Surface + ?Sized,
        A: Accelerometer + ?Sized,
    {
        if !self.driver.on_timer(id) {
            return false;
        }
        self.run_tick(surface, accel, scheduler)
    }

    fn run_tick<S, A>(&mut self, surface: &mut S, accel: &mut A, scheduler: &mut Scheduler) -> bool
    where
        S: Surface + ?Sized,
        A: Accelerometer + ?Sized,
    {
        if !self.driver.begin_tick(scheduler.now_ms()) {
            return false;
        }

        let input = TickInput::new(accel.read());
        let report = tick(&mut self.sim, &input);
        paint(surface, &report.ops, BACKGROUND_COLOR);
        if let Some(crosshair) = &self.crosshair {
            crosshair.draw(surface, CROSSHAIR_COLOR);
        }

        if self.settings.show_debug {
            log::debug!(
                "accel X: {:.3} accel Y: {:.3} low X: {:.3} low Y: {:.3} height: {:?} moved: {} rejected: {} frame rate: {:?}",
                report.tilt.x,
                report.tilt.y,
                report.low_point.x,
                report.low_point.y,
                report.first_height,
                report.moved,
                report.rejected,
                self.driver.frame_rate()
            );
        }

        self.last_report = Some(report);
        self.driver.finish_tick(scheduler);
        true
    }

    /// Button callback. Returns true if the press was handled.
    pub fn on_button<S: Surface + ?Sized>(&mut self, button: Button, surface: &mut S) -> bool {
        if !self.settings.variant.interactive() {
            return false;
        }
        match button {
            Button::Confirm => self.add_obstacle(surface).is_some(),
            Button::Cancel => {
                self.remove_last_obstacle(surface);
                true
            }
            _ => match button.offset() {
                Some(offset) => {
                    self.move_crosshair(offset, surface);
                    true
                }
                None => false,
            },
        }
    }

    /// Drop a static obstacle at the crosshair and paint it straight away
    pub fn add_obstacle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<u32> {
        let pos = self.crosshair?.pos;
        let disc = *self.sim.discs.append_obstacle(pos);
        let (x, y) = disc.pixel();
        surface.fill_circle(x, y, disc_radius_px(), disc.color);
        self.sim.mark_statics_dirty();
        log::debug!("Added obstacle {} at ({:.0}, {:.0})", disc.id, pos.x, pos.y);
        Some(disc.id)
    }

    /// Erase and remove the most recent disc. No-op when empty.
    pub fn remove_last_obstacle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Disc> {
        let disc = self.sim.discs.remove_last()?;
        let (x, y) = disc.pixel();
        surface.fill_circle(x, y, disc_radius_px(), BACKGROUND_COLOR);
        self.sim.mark_statics_dirty();
        log::debug!("Removed disc {} ({} left)", disc.id, self.sim.discs.len());
        Some(disc)
    }

    fn move_crosshair<S: Surface + ?Sized>(&mut self, offset: Vec2, surface: &mut S) {
        let playfield = self.sim.playfield;
        let Some(crosshair) = self.crosshair.as_mut() else {
            return;
        };
        crosshair.draw(surface, BACKGROUND_COLOR);
        crosshair.step(offset, &playfield);
        crosshair.draw(surface, CROSSHAIR_COLOR);
        log::debug!("Crosshair at ({:.0}, {:.0})", crosshair.pos.x, crosshair.pos.y);
        self.sim.mark_statics_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, OBSTACLE_COLOR, YELLOW};
    use crate::consts::{BALL_COUNT, STATIC_COUNT};
    use crate::platform::FixedTilt;
    use crate::renderer::FrameBuffer;

    fn activated(variant: Variant) -> (BallApp, FrameBuffer, Scheduler) {
        let mut app = BallApp::new(Settings::for_variant(variant));
        let mut fb = FrameBuffer::new(135, 240);
        let mut scheduler = Scheduler::new();
        app.on_activate(&mut fb, &mut FixedTilt::level(), &mut scheduler);
        (app, fb, scheduler)
    }

    #[test]
    fn test_tilt_activation_seeds_and_ticks() {
        let (app, fb, scheduler) = activated(Variant::Tilt);
        assert_eq!(app.discs().len(), BALL_COUNT + STATIC_COUNT);
        assert_eq!(app.discs().static_count(), STATIC_COUNT);
        assert!(app.crosshair().is_none());
        assert!(app.is_running());
        assert_eq!(app.ticks(), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(fb.stats().fills, 1);
        // Every disc was painted on the first tick
        assert!(fb.count(BLACK) < fb.pixels().len());
    }

    #[test]
    fn test_sandbox_activation() {
        let (app, _fb, scheduler) = activated(Variant::Sandbox);
        assert_eq!(app.discs().len(), BALL_COUNT);
        assert_eq!(app.discs().static_count(), 0);
        assert_eq!(app.crosshair().map(|c| c.pos), Some(Vec2::new(5.0, 235.0)));
        // The first tick armed the chained timer
        assert_eq!(scheduler.pending(), 1);
        assert!(!app.sim().statics_dirty);
    }

    #[test]
    fn test_tilt_variant_ignores_buttons() {
        let (mut app, mut fb, _) = activated(Variant::Tilt);
        let before = app.discs().clone();
        for button in [Button::Confirm, Button::Cancel, Button::Up] {
            assert!(!app.on_button(button, &mut fb));
        }
        assert_eq!(app.discs(), &before);
    }

    #[test]
    fn test_confirm_adds_obstacle_at_crosshair() {
        let (mut app, mut fb, _) = activated(Variant::Sandbox);
        assert!(app.on_button(Button::Up, &mut fb));
        assert!(app.on_button(Button::Right, &mut fb));
        assert!(app.on_button(Button::Confirm, &mut fb));

        let last = *app.discs().last().unwrap();
        assert!(last.is_static);
        assert_eq!(last.id, BALL_COUNT as u32);
        assert_eq!(last.pos, Vec2::new(15.0, 225.0));
        assert!(app.sim().statics_dirty);
        // Inside the disc, off the crosshair arms and ring
        assert_eq!(fb.pixel(17, 227), Some(OBSTACLE_COLOR));
    }

    #[test]
    fn test_cancel_removes_last_and_empties_safely() {
        let (mut app, mut fb, _) = activated(Variant::Sandbox);
        app.on_button(Button::Confirm, &mut fb);
        let removed = app.remove_last_obstacle(&mut fb).unwrap();
        assert!(removed.is_static);
        assert_eq!(app.discs().len(), BALL_COUNT);

        // Keep going: moving discs go too, then nothing happens
        for _ in 0..BALL_COUNT + 3 {
            assert!(app.on_button(Button::Cancel, &mut fb));
        }
        assert!(app.discs().is_empty());
        assert_eq!(app.remove_last_obstacle(&mut fb), None);
    }

    #[test]
    fn test_crosshair_move_redraws_and_marks_dirty() {
        let (mut app, mut fb, _) = activated(Variant::Sandbox);
        fb.reset_stats();
        assert!(app.on_button(Button::Up, &mut fb));
        assert_eq!(fb.stats().lines, 4);
        assert_eq!(fb.stats().circles, 2);
        assert_eq!(app.crosshair().map(|c| c.pos), Some(Vec2::new(5.0, 225.0)));
        assert_eq!(fb.pixel(5, 225), Some(YELLOW));
        assert!(app.sim().statics_dirty);
    }

    #[test]
    fn test_deactivate_stops_timers() {
        let (mut app, mut fb, mut scheduler) = activated(Variant::Tilt);
        app.on_deactivate(&mut scheduler);
        assert!(!app.is_running());
        assert_eq!(scheduler.pending(), 0);

        let stray = scheduler.after(1);
        let id = scheduler.pop_due(u64::MAX).unwrap();
        assert_eq!(id, stray);
        assert!(!app.on_timer(id, &mut fb, &mut FixedTilt::level(), &mut scheduler));
    }

    #[test]
    fn test_reactivation_resets_registry() {
        let (mut app, mut fb, mut scheduler) = activated(Variant::Sandbox);
        app.on_button(Button::Confirm, &mut fb);
        app.on_button(Button::Confirm, &mut fb);
        assert_eq!(app.discs().len(), BALL_COUNT + 2);

        app.on_deactivate(&mut scheduler);
        app.on_activate(&mut fb, &mut FixedTilt::level(), &mut scheduler);
        assert_eq!(app.discs().len(), BALL_COUNT);
        assert_eq!(app.discs().static_count(), 0);
        assert_eq!(app.ticks(), 1);
    }

    #[test]
    fn test_instances_do_not_share_registries() {
        let (mut a, mut fb, _) = activated(Variant::Sandbox);
        let (b, _, _) = activated(Variant::Sandbox);
        a.on_button(Button::Confirm, &mut fb);
        assert_eq!(a.discs().len(), b.discs().len() + 1);
    }
}
