//! Gatewing headless driver
//!
//! Runs the simulation core without a renderer: synthesizes the timer
//! ticks a shell would normally deliver, optionally lets a naive
//! autopilot play, and logs every effect event the core emits. Useful
//! for smoke runs and for eyeballing determinism (same seed and flags,
//! same log).

use anyhow::Result;
use clap::Parser;

use gatewing::consts::{FLAP_ANIM_INTERVAL_MS, FRAME_DT, FRAME_RATE, PIPE_SPAWN_INTERVAL_MS};
use gatewing::sim::{Effect, GameMode, Snapshot, StepInput, World, step};

/// Headless soak run of the gatewing simulation core
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// World seed
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Frames to simulate (3600 = one minute of play)
    #[arg(long, default_value_t = 3600)]
    steps: u64,

    /// Keep flapping toward the next gap; without this the run ends at
    /// the first fall
    #[arg(long)]
    autopilot: bool,

    /// Print the final snapshot as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Timer cadences expressed in whole frames
    let steps_per_anim = FLAP_ANIM_INTERVAL_MS * u64::from(FRAME_RATE) / 1000;
    let steps_per_spawn = PIPE_SPAWN_INTERVAL_MS * u64::from(FRAME_RATE) / 1000;

    let mut world = World::new(args.seed);
    log::info!(
        "headless run: seed={} steps={} autopilot={}",
        args.seed,
        args.steps,
        args.autopilot
    );

    for frame in 1..=args.steps {
        let input = StepInput {
            jump_pressed: frame == 1 || (args.autopilot && wants_flap(&world)),
            animation_tick: frame % steps_per_anim == 0,
            spawn_tick: frame % steps_per_spawn == 0,
        };

        let out = step(&mut world, &input, FRAME_DT)?;
        for effect in &out.effects {
            match effect {
                Effect::Point => log::info!("point at step {frame}, score={}", out.snapshot.score),
                Effect::Hit => log::info!("hit a pipe at step {frame}"),
                Effect::Die => log::info!("hit the ground at step {frame}"),
                Effect::Reset => log::info!("world reset at step {frame}"),
                Effect::JumpFlap => log::debug!("flap at step {frame}"),
            }
        }

        if world.mode == GameMode::GameOver && !args.autopilot {
            break;
        }
    }

    log::info!(
        "run complete: mode={:?} score={} high_score={}",
        world.mode,
        world.score.score,
        world.score.high_score
    );

    if args.json {
        let snapshot = Snapshot::capture(&world);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

/// Flap when sinking below the next gap center (or, with no pipe ahead,
/// below the idle cruising height). Always jumps outside a run so play
/// starts and restarts on its own.
fn wants_flap(world: &World) -> bool {
    match world.mode {
        GameMode::Start | GameMode::GameOver => true,
        GameMode::Playing => {
            let bird = &world.bird;
            let target = world
                .pipes
                .iter()
                .find(|p| p.right(&world.tuning) >= bird.pos.x)
                .map(|p| p.gap_center)
                .unwrap_or(world.tuning.screen_h * 0.45);
            bird.vel_y >= 0.0 && bird.pos.y > target
        }
    }
}
