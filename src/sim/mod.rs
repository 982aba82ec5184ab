//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, frame-locked timing
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//! - Side effects leave only through the per-step effect list

pub mod particles;
pub mod pipes;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use particles::{Particle, ParticleSystem};
pub use pipes::Pipe;
pub use rect::Rect;
pub use snapshot::{BirdView, ParticleView, PipeView, Snapshot};
pub use state::{Bird, Effect, GameMode, ScoreState, World};
pub use tick::{StepError, StepInput, StepOutput, step};
