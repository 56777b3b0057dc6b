//! Platform abstraction layer
//!
//! The accelerometer driver lives in the host firmware. The toy only needs a
//! 3-axis reading per tick, each component nominally in [-1, 1].

use glam::Vec3;

/// Source of acceleration samples
pub trait Accelerometer {
    fn read(&mut self) -> Vec3;
}

impl<A: Accelerometer + ?Sized> Accelerometer for &mut A {
    fn read(&mut self) -> Vec3 {
        (**self).read()
    }
}

/// Always reports the same reading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedTilt(pub Vec3);

impl FixedTilt {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec3::new(x, y, -1.0))
    }

    pub fn level() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Accelerometer for FixedTilt {
    fn read(&mut self) -> Vec3 {
        self.0
    }
}

/// Replays recorded samples, then holds the last one
#[derive(Debug, Clone, Default)]
pub struct ScriptedAccelerometer {
    samples: Vec<Vec3>,
    cursor: usize,
}

impl ScriptedAccelerometer {
    pub fn new(samples: Vec<Vec3>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Samples consumed so far
    pub fn reads(&self) -> usize {
        self.cursor
    }
}

impl Accelerometer for ScriptedAccelerometer {
    fn read(&mut self) -> Vec3 {
        let sample = match self.samples.get(self.cursor) {
            Some(&s) => s,
            None => self.samples.last().copied().unwrap_or(Vec3::ZERO),
        };
        self.cursor += 1;
        sample
    }
}

/// Synthetic slow circular tilt, for the headless demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobbleAccelerometer {
    phase: f32,
    step: f32,
    amplitude: f32,
}

impl WobbleAccelerometer {
    /// `step` is the phase advance per read, in radians
    pub fn new(step: f32) -> Self {
        Self {
            phase: 0.0,
            step,
            amplitude: 0.6,
        }
    }
}

impl Accelerometer for WobbleAccelerometer {
    fn read(&mut self) -> Vec3 {
        let sample = Vec3::new(
            self.amplitude * self.phase.cos(),
            self.amplitude * self.phase.sin(),
            -1.0,
        );
        self.phase = (self.phase + self.step) % std::f32::consts::TAU;
        sample
    }
}
