//! One simulation tick
//!
//! Sample tilt, project the low point, rebuild the depth order, then walk it
//! lowest first: erase each moving disc, try to move it, and paint it again.
//! The result is an ordered list of paint operations for the renderer.

use glam::{Vec2, Vec3};

use super::depth::{depth_order, height, low_point};
use super::motion::integrate;
use super::state::SimState;
use crate::color::Color;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Raw accelerometer sample. Only x and y are used.
    pub accel: Vec3,
}

impl TickInput {
    pub fn new(accel: Vec3) -> Self {
        Self { accel }
    }

    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.accel.truncate()
    }
}

/// A paint step at an integer disc centre, in painter's order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    /// Paint the background over the disc
    Erase { x: i32, y: i32 },
    /// Paint the disc
    Draw { x: i32, y: i32, color: Color },
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tilt: Vec2,
    pub low_point: Vec2,
    /// Height of the first registry disc, if any
    pub first_height: Option<f32>,
    /// Moving discs that reached their candidate
    pub moved: usize,
    /// Moving discs whose step was rejected
    pub rejected: usize,
    pub ops: Vec<PaintOp>,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) -> TickReport {
    let tilt = input.tilt();
    let low = low_point(tilt);
    let order = depth_order(state.discs.as_slice(), low);
    let redraw_statics = state.statics_need_redraw();

    let mut report = TickReport {
        tilt,
        low_point: low,
        first_height: state.discs.get(0).map(|d| height(d, low)),
        ops: Vec::with_capacity(order.len() * 2),
        ..Default::default()
    };

    let playfield = state.playfield;
    let speed = state.speed;
    let discs = state.discs.as_mut_slice();

    for &index in &order {
        if discs[index].is_static {
            if redraw_statics {
                let (x, y) = discs[index].pixel();
                report.ops.push(PaintOp::Draw {
                    x,
                    y,
                    color: discs[index].color,
                });
            }
            continue;
        }

        let (x, y) = discs[index].pixel();
        report.ops.push(PaintOp::Erase { x, y });

        if integrate(index, tilt, speed, &playfield, &order, discs) {
            report.moved += 1;
        } else {
            report.rejected += 1;
        }

        let disc = &discs[index];
        let (x, y) = disc.pixel();
        report.ops.push(PaintOp::Draw {
            x,
            y,
            color: disc.color,
        });
    }

    state.statics_dirty = false;
    state.time_ticks += 1;
    report
}
