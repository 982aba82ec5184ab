//! Fixed timestep simulation step
//!
//! The single mutation point of the whole game. One `step` call advances
//! the world by one frame and hands back the effect events the shell
//! must realize plus a read-only snapshot to draw from.

use glam::Vec2;
use thiserror::Error;

use super::pipes::Pipe;
use super::snapshot::Snapshot;
use super::state::{Effect, GameMode, World};

/// Input flags for a single step, sampled once by the shell.
///
/// The shell owns the clocks: it expires the animation and spawn timers
/// against wall time and reports them here as already-fired flags, so
/// the simulation itself never reads a clock.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    /// Jump was pressed since the last step
    pub jump_pressed: bool,
    /// The wing-animation timer fired (roughly every 200 ms)
    pub animation_tick: bool,
    /// The pipe-spawn timer fired (roughly every 1200 ms)
    pub spawn_tick: bool,
}

/// What one step hands back to the shell
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    /// Effect events in the order they occurred
    pub effects: Vec<Effect>,
    /// The world as it stands after the step
    pub snapshot: Snapshot,
}

/// Caller contract violations
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    /// Time cannot be negative, NaN or infinite
    #[error("invalid step duration {0}s; dt must be finite and non-negative")]
    InvalidDt(f32),
}

/// Advance the world by one frame.
///
/// `dt` is validated, not integrated: the simulation is frame-locked
/// (all speeds are px/step at the fixed frame rate), so callers pass
/// `consts::FRAME_DT` and the check only rejects a broken clock before
/// it can corrupt state.
pub fn step(world: &mut World, input: &StepInput, dt: f32) -> Result<StepOutput, StepError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(StepError::InvalidDt(dt));
    }

    let mut effects = Vec::new();
    world.ticks += 1;

    match world.mode {
        GameMode::Start => {
            // The first jump both starts the run and propels the bird
            if input.jump_pressed {
                world.mode = GameMode::Playing;
                world.bird.flap(&world.tuning);
                effects.push(Effect::JumpFlap);
            }
        }

        GameMode::Playing => {
            if input.jump_pressed {
                world.bird.flap(&world.tuning);
                effects.push(Effect::JumpFlap);
            }
            if input.animation_tick {
                world.bird.advance_frame(&world.tuning);
            }
            if input.spawn_tick {
                if let Some(pipe) = Pipe::spawn(&mut world.rng, &world.tuning) {
                    world.pipes.push(pipe);
                }
            }

            // Gravity; reaching the floor ends the run on the spot
            if world.bird.fall(&world.tuning) {
                world.mode = GameMode::GameOver;
                effects.push(Effect::Die);
                let rect = world.bird.rect(&world.tuning);
                let impact = Vec2::new(rect.center().x, rect.bottom());
                let count = world.tuning.floor_hit_burst;
                world
                    .particles
                    .burst(&mut world.rng, impact, count, &world.tuning);
            }

            // The floor keeps scrolling through the frame the run ends on
            world.floor_x -= world.tuning.floor_speed;
            if world.floor_x <= -world.tuning.floor_tile_w {
                world.floor_x = 0.0;
            }

            if world.mode == GameMode::Playing {
                scroll_pipes(world, &mut effects);
            }
            if world.mode == GameMode::Playing {
                update_score(world, &mut effects);
            }

            // Publish the best even on the step the run ends
            world.score.high_score = world.score.high_score.max(world.score.score);
        }

        GameMode::GameOver => {
            if input.jump_pressed {
                world.reset();
                effects.push(Effect::Reset);
            }
        }
    }

    // Debris keeps moving whatever the mode
    world.particles.update(&world.tuning);

    Ok(StepOutput {
        effects,
        snapshot: Snapshot::capture(world),
    })
}

/// Scroll the pipe stream, cull pairs past the left edge, then test the
/// bird against what's left. A hit ends the run with a debris burst at
/// the bird's center.
fn scroll_pipes(world: &mut World, effects: &mut Vec<Effect>) {
    let speed = world.tuning.pipe_speed;
    for pipe in &mut world.pipes {
        pipe.advance(speed);
    }
    world.pipes.retain(|p| !p.offscreen(&world.tuning));

    let bird_rect = world.bird.rect(&world.tuning);
    if world
        .pipes
        .iter()
        .any(|p| p.hits(&bird_rect, &world.tuning))
    {
        world.mode = GameMode::GameOver;
        effects.push(Effect::Hit);
        let count = world.tuning.pipe_hit_burst;
        world
            .particles
            .burst(&mut world.rng, bird_rect.center(), count, &world.tuning);
    }
}

/// Count at most one pass per step, then re-arm once the scoring zone is
/// clear of pipe centers so the same pair can never count twice.
fn update_score(world: &mut World, effects: &mut Vec<Effect>) {
    let bird_x = world.bird.pos.x;

    if world.score.pending {
        for pipe in &world.pipes {
            if bird_x > pipe.x && bird_x < pipe.x + world.tuning.score_window {
                world.score.score += 1;
                world.score.pending = false;
                effects.push(Effect::Point);
                break;
            }
        }
    }

    let zone_clear = world
        .pipes
        .iter()
        .all(|p| (p.x - bird_x).abs() >= world.tuning.score_rearm_radius);
    if zone_clear {
        world.score.pending = true;
    }
}
