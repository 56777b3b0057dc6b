//! Disc records, the playfield and the ball registry
//!
//! Everything a tick reads or writes lives here. Each app instance owns its
//! own `SimState`; nothing is shared between instances.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{BALL_COLORS, Color, OBSTACLE_COLOR};
use crate::consts::*;

/// A fixed-radius disc, either moving under tilt or static
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Registry insertion index
    pub id: u32,
    /// Centre in display pixel space
    pub pos: Vec2,
    pub color: Color,
    /// Static discs never move
    pub is_static: bool,
    /// Whether the last attempted move was rejected
    #[serde(default)]
    pub has_collision: bool,
}

impl Disc {
    pub fn moving(id: u32, pos: Vec2, color: Color) -> Self {
        Self {
            id,
            pos,
            color,
            is_static: false,
            has_collision: false,
        }
    }

    pub fn obstacle(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            color: OBSTACLE_COLOR,
            is_static: true,
            has_collision: false,
        }
    }

    /// Integer pixel centre (truncated, not rounded)
    #[inline]
    pub fn pixel(&self) -> (i32, i32) {
        (self.pos.x as i32, self.pos.y as i32)
    }
}

/// The area disc centres are confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Playfield matching a display of the given pixel size
    pub fn from_surface(width: i32, height: i32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Lowest legal centre
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::splat(BALL_RADIUS)
    }

    /// Highest legal centre
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width - BALL_RADIUS, self.height - BALL_RADIUS)
    }

    /// Clamp a centre into the playfield.
    ///
    /// Applies the lower bound first, then the upper, so a playfield narrower
    /// than one disc pins centres to the upper bound instead of panicking.
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.max(self.min()).min(self.max())
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.clamp(pos) == pos
    }

    /// Uniformly random centre inside the margins
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Vec2 {
        let (min, max) = (self.min(), self.max());
        let x = if max.x > min.x { rng.random_range(min.x..=max.x) } else { min.x };
        let y = if max.y > min.y { rng.random_range(min.y..=max.y) } else { min.y };
        self.clamp(Vec2::new(x, y))
    }
}

/// Ordered collection of discs.
///
/// Ids are insertion indices. Removal only ever takes the last entry, so ids
/// stay unique and `remove_last(append(r))` restores `r` exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discs {
    discs: Vec<Disc>,
}

impl Discs {
    pub fn new() -> Self {
        Self { discs: Vec::new() }
    }

    /// Create `count` moving discs with palette colours and `static_count`
    /// obstacles, all at random positions inside the playfield
    pub fn seed<R: Rng>(
        playfield: &Playfield,
        count: usize,
        static_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut discs = Self {
            discs: Vec::with_capacity(count + static_count),
        };
        for _ in 0..count {
            let pos = playfield.random_position(rng);
            let color = BALL_COLORS[rng.random_range(0..BALL_COLORS.len())];
            discs.push_moving(pos, color);
        }
        for _ in 0..static_count {
            let pos = playfield.random_position(rng);
            discs.append_obstacle(pos);
        }
        discs
    }

    #[inline]
    fn next_id(&self) -> u32 {
        self.discs.len() as u32
    }

    /// Append a moving disc, returning its id
    pub fn push_moving(&mut self, pos: Vec2, color: Color) -> u32 {
        let id = self.next_id();
        self.discs.push(Disc::moving(id, pos, color));
        id
    }

    /// Append a static obstacle
    pub fn append_obstacle(&mut self, pos: Vec2) -> &Disc {
        let id = self.next_id();
        self.discs.push(Disc::obstacle(id, pos));
        &self.discs[self.discs.len() - 1]
    }

    /// Remove the most recently added disc. Moving discs go too once the
    /// obstacles are exhausted. No-op on an empty registry.
    pub fn remove_last(&mut self) -> Option<Disc> {
        self.discs.pop()
    }

    pub fn clear(&mut self) {
        self.discs.clear();
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disc> {
        self.discs.iter()
    }

    pub fn as_slice(&self) -> &[Disc] {
        &self.discs
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Disc] {
        &mut self.discs
    }

    pub fn get(&self, index: usize) -> Option<&Disc> {
        self.discs.get(index)
    }

    pub fn find(&self, id: u32) -> Option<&Disc> {
        self.discs.iter().find(|d| d.id == id)
    }

    pub fn last(&self) -> Option<&Disc> {
        self.discs.last()
    }

    pub fn static_count(&self) -> usize {
        self.discs.iter().filter(|d| d.is_static).count()
    }
}

/// When static discs get repainted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaticRedraw {
    /// Every tick
    #[default]
    Always,
    /// Only after something marked them dirty
    WhenDirty,
}

/// Complete simulation state for one app instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub playfield: Playfield,
    pub discs: Discs,
    /// Pixels per tick at full tilt
    pub speed: f32,
    pub static_redraw: StaticRedraw,
    /// Set when obstacles or the cursor changed since the last tick
    pub statics_dirty: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(playfield: Playfield, static_redraw: StaticRedraw) -> Self {
        Self {
            playfield,
            discs: Discs::new(),
            speed: SPEED,
            static_redraw,
            statics_dirty: true,
            time_ticks: 0,
        }
    }

    pub fn mark_statics_dirty(&mut self) {
        self.statics_dirty = true;
    }

    /// Whether this tick should repaint static discs
    pub fn statics_need_redraw(&self) -> bool {
        match self.static_redraw {
            StaticRedraw::Always => true,
            StaticRedraw::WhenDirty => self.statics_dirty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_seed_assigns_sequential_ids_and_kinds() {
        let playfield = Playfield::new(135.0, 240.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let discs = Discs::seed(&playfield, BALL_COUNT, STATIC_COUNT, &mut rng);

        assert_eq!(discs.len(), BALL_COUNT + STATIC_COUNT);
        for (index, disc) in discs.iter().enumerate() {
            assert_eq!(disc.id, index as u32);
            assert_eq!(disc.is_static, index >= BALL_COUNT);
            assert!(playfield.contains(disc.pos));
            if disc.is_static {
                assert_eq!(disc.color, OBSTACLE_COLOR);
            } else {
                assert!(BALL_COLORS.contains(&disc.color));
            }
        }
        assert_eq!(discs.static_count(), STATIC_COUNT);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let playfield = Playfield::new(135.0, 240.0);
        let a = Discs::seed(&playfield, 10, 5, &mut Pcg32::seed_from_u64(99));
        let b = Discs::seed(&playfield, 10, 5, &mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_obstacle_add_then_remove_restores_registry() {
        let mut discs = Discs::new();
        discs.push_moving(Vec2::new(10.0, 10.0), BALL_COLORS[0]);
        discs.push_moving(Vec2::new(30.0, 10.0), BALL_COLORS[1]);
        discs.push_moving(Vec2::new(50.0, 10.0), BALL_COLORS[2]);
        let before = discs.clone();

        let added = *discs.append_obstacle(Vec2::new(60.0, 60.0));
        assert_eq!(discs.len(), 4);
        assert!(added.is_static);
        assert_eq!(added.id, 3);
        assert_eq!(added.pos, Vec2::new(60.0, 60.0));

        let removed = discs.remove_last();
        assert_eq!(removed, Some(added));
        assert_eq!(discs, before);
    }

    #[test]
    fn test_remove_last_on_empty_is_noop() {
        let mut discs = Discs::new();
        assert_eq!(discs.remove_last(), None);
        assert!(discs.is_empty());
    }

    #[test]
    fn test_clamp_narrow_playfield_does_not_panic() {
        let playfield = Playfield::new(6.0, 6.0);
        let clamped = playfield.clamp(Vec2::new(100.0, -100.0));
        assert_eq!(clamped, Vec2::new(1.0, 1.0));

        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(playfield.random_position(&mut rng), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_pixel_truncates() {
        let disc = Disc::moving(0, Vec2::new(12.9, 7.1), BALL_COLORS[0]);
        assert_eq!(disc.pixel(), (12, 7));
    }

    #[test]
    fn test_statics_need_redraw_by_policy() {
        let mut state = SimState::new(Playfield::new(100.0, 100.0), StaticRedraw::WhenDirty);
        assert!(state.statics_need_redraw());
        state.statics_dirty = false;
        assert!(!state.statics_need_redraw());
        state.mark_statics_dirty();
        assert!(state.statics_need_redraw());

        state.static_redraw = StaticRedraw::Always;
        state.statics_dirty = false;
        assert!(state.statics_need_redraw());
    }

    proptest! {
        #[test]
        fn prop_append_remove_restores(seed in any::<u64>(), x in 0.0f32..200.0, y in 0.0f32..200.0) {
            let playfield = Playfield::new(200.0, 200.0);
            let mut discs = Discs::seed(&playfield, 6, 2, &mut Pcg32::seed_from_u64(seed));
            let before = discs.clone();
            discs.append_obstacle(Vec2::new(x, y));
            discs.remove_last();
            prop_assert_eq!(discs, before);
        }
    }
}
