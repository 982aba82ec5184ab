//! Read-only render view of the world
//!
//! Everything a renderer needs for one frame, captured as plain owned
//! data after each step. Drawing code consumes this instead of reaching
//! back into live simulation state, which keeps the mutation boundary
//! at exactly one place: `tick::step`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GameMode, World};

/// Bird render state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    /// Center position
    pub pos: Vec2,
    /// Tilt in degrees, positive = nose up
    pub tilt_deg: f32,
    /// Wing sprite frame index
    pub frame: usize,
}

/// One pipe pair's derived rects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub top: Rect,
    pub bottom: Rect,
}

/// One particle's render state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining-life fraction in [0, 1]
    pub opacity: f32,
}

/// Complete description of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub bird: BirdView,
    /// Pipe pairs, leftmost first
    pub pipes: Vec<PipeView>,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub high_score: u32,
    /// Floor art scroll offset
    pub floor_x: f32,
    /// Steps since construction or reset; drives idle animations
    pub ticks: u64,
}

impl Snapshot {
    /// Capture the world as it stands
    pub fn capture(world: &World) -> Self {
        let tuning = &world.tuning;
        Self {
            mode: world.mode,
            bird: BirdView {
                pos: world.bird.pos,
                tilt_deg: world.bird.tilt_deg(tuning),
                frame: world.bird.frame,
            },
            pipes: world
                .pipes
                .iter()
                .map(|p| PipeView {
                    top: p.top_rect(tuning),
                    bottom: p.bottom_rect(tuning),
                })
                .collect(),
            particles: world
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    opacity: p.opacity(tuning),
                })
                .collect(),
            score: world.score.score,
            high_score: world.score.high_score,
            floor_x: world.floor_x,
            ticks: world.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipes::Pipe;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_mirrors_world() {
        let mut world = World::new(3);
        world.pipes.push(Pipe {
            x: 200.0,
            gap_center: 325.0,
        });
        world.score.score = 4;
        world.score.high_score = 11;
        world.floor_x = -40.0;
        world.ticks = 99;

        let snap = Snapshot::capture(&world);

        assert_eq!(snap.mode, GameMode::Start);
        assert_eq!(snap.bird.pos, world.tuning.bird_start);
        assert_eq!(snap.bird.frame, 0);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].top, world.pipes[0].top_rect(&world.tuning));
        assert_eq!(snap.pipes[0].bottom, world.pipes[0].bottom_rect(&world.tuning));
        assert!(snap.particles.is_empty());
        assert_eq!(snap.score, 4);
        assert_eq!(snap.high_score, 11);
        assert_eq!(snap.floor_x, -40.0);
        assert_eq!(snap.ticks, 99);
    }

    #[test]
    fn test_capture_is_detached_from_world() {
        let mut world = World::new(3);
        let snap = Snapshot::capture(&world);

        world.bird.pos = Vec2::new(1.0, 1.0);
        world.score.score = 50;

        assert_eq!(snap.bird.pos, Tuning::default().bird_start);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let world = World::new(8);
        let snap = Snapshot::capture(&world);
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
