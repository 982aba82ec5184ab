//! Gatewing - the deterministic core of a gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, scoring, particles)
//! - `tuning`: Data-driven game balance
//!
//! There is deliberately no rendering, audio or window code here. A
//! shell drives `sim::step` once per frame with sampled input flags and
//! realizes the returned effect events and snapshot however it likes;
//! the headless driver binary shows the minimal loop.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Frame and cadence constants shells drive the core with
pub mod consts {
    /// Target frame rate; one `sim::step` call equals one frame
    pub const FRAME_RATE: u32 = 60;
    /// Canonical step duration in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Wing-animation cadence; shells fire `animation_tick` at this rate
    pub const FLAP_ANIM_INTERVAL_MS: u64 = 200;
    /// Pipe-spawn cadence; shells fire `spawn_tick` at this rate
    pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1200;
}
