//! Game state and core simulation types
//!
//! Every piece of state that advances a run lives here, owned by a
//! single `World` that the shell passes exclusively to `tick::step`.
//! Nothing in this module reads clocks or input devices; timing arrives
//! as pre-expired flags and randomness comes from the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use super::pipes::Pipe;
use super::rect::Rect;
use crate::tuning::{Tuning, TuningError};

/// Current mode of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen; the world idles until the first jump
    Start,
    /// Active run
    Playing,
    /// Run over; the scene freezes until the restart jump
    GameOver,
}

/// Side-effect notification for the shell to realize, typically as sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A jump was applied (including the one that starts the run)
    JumpFlap,
    /// The bird struck a pipe
    Hit,
    /// The bird struck the ground
    Die,
    /// A pipe pair was cleared
    Point,
    /// The world was reset for a new run
    Reset,
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Center position; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity in px/step, positive = down
    pub vel_y: f32,
    /// Wing sprite frame index
    pub frame: usize,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.bird_start,
            vel_y: 0.0,
            frame: 0,
        }
    }

    /// Collision rect, derived from the logical center
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_center(self.pos, tuning.bird_size)
    }

    /// Overwrite velocity with the jump impulse; jumps never stack
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel_y = tuning.jump_impulse;
    }

    /// Advance the wing animation one sprite frame
    pub fn advance_frame(&mut self, tuning: &Tuning) {
        if tuning.bird_frames > 0 {
            self.frame = (self.frame + 1) % tuning.bird_frames;
        }
    }

    /// One step of gravity integration.
    ///
    /// A bird pushed past the top of the screen is pinned there with its
    /// velocity zeroed; otherwise the floor is checked. The two are
    /// mutually exclusive within a step. Returns whether the rect
    /// reached the floor line; the caller owns the death transition.
    pub fn fall(&mut self, tuning: &Tuning) -> bool {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        let half_h = tuning.bird_size.y * 0.5;
        if self.pos.y - half_h <= 0.0 {
            self.pos.y = half_h;
            self.vel_y = 0.0;
            false
        } else {
            self.pos.y + half_h >= tuning.floor_y
        }
    }

    /// Display tilt in degrees, a pure function of velocity.
    /// Positive tilts the nose up (rising), negative down (diving).
    pub fn tilt_deg(&self, tuning: &Tuning) -> f32 {
        (self.vel_y * tuning.tilt_per_vel).clamp(-tuning.tilt_limit, tuning.tilt_limit)
    }
}

/// Score bookkeeping for the current process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points this run
    pub score: u32,
    /// Best score since process start; never decreases, survives resets
    pub high_score: u32,
    /// Armed when the next pass may claim a point; disarmed after a
    /// count until the scoring zone is clear again, so one pipe can't
    /// count twice
    pub pending: bool,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            high_score: 0,
            pending: true,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed this world was built from, kept for reproducibility
    pub seed: u64,
    /// Seeded RNG driving gap choice and particle spray
    pub rng: Pcg32,
    /// Gameplay constants the world was built with
    pub tuning: Tuning,
    /// Current mode
    pub mode: GameMode,
    /// The player
    pub bird: Bird,
    /// Live pipe pairs, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Impact debris
    pub particles: ParticleSystem,
    /// Score, high score and the pass-arming flag
    pub score: ScoreState,
    /// Floor art scroll offset; wraps at the tile width
    pub floor_x: f32,
    /// Steps taken since construction or the last reset
    pub ticks: u64,
}

impl World {
    /// World with the reference tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// World with caller-supplied tuning, validated before anything is built
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Start,
            bird: Bird::new(&tuning),
            pipes: Vec::new(),
            particles: ParticleSystem::default(),
            score: ScoreState::default(),
            floor_x: 0.0,
            ticks: 0,
            tuning,
        }
    }

    /// Reset for a new run: everything back to the initial state except
    /// the high score and the RNG stream
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear();
        self.particles.clear();
        self.score.score = 0;
        self.score.pending = true;
        self.mode = GameMode::Start;
        self.floor_x = 0.0;
        self.ticks = 0;
    }
}
