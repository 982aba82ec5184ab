//! Pipe pairs, the gated obstacles
//!
//! A pipe stores only its logical state: the shared horizontal center of
//! both pieces and the vertical center of the opening. The two collision
//! rects are derived on demand from that state plus tuning, so movement,
//! collision and rendering can never disagree about where a pipe is.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// One top/bottom pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Horizontal center of both pieces
    pub x: f32,
    /// Vertical center of the opening
    pub gap_center: f32,
}

impl Pipe {
    /// Spawn a pair just past the right screen edge, with the gap center
    /// drawn uniformly from the tuning's candidate list.
    ///
    /// Returns `None` for an empty candidate list instead of panicking;
    /// `Tuning::validate` rejects that configuration up front.
    pub fn spawn(rng: &mut Pcg32, tuning: &Tuning) -> Option<Self> {
        let gap_center = tuning.gap_center_choices.choose(rng).copied()?;
        Some(Self {
            x: tuning.screen_w + tuning.pipe_spawn_margin,
            gap_center,
        })
    }

    /// Scroll left one step
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Right edge of both pieces
    #[inline]
    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_w * 0.5
    }

    /// Lower edge of the top piece
    #[inline]
    pub fn gap_top(&self, tuning: &Tuning) -> f32 {
        self.gap_center - tuning.pipe_gap * 0.5
    }

    /// Upper edge of the bottom piece
    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_center + tuning.pipe_gap * 0.5
    }

    /// Collision rect of the top piece, anchored to the gap's upper edge
    pub fn top_rect(&self, tuning: &Tuning) -> Rect {
        let half_w = tuning.pipe_w * 0.5;
        let bottom = self.gap_top(tuning);
        Rect::new(
            Vec2::new(self.x - half_w, bottom - tuning.pipe_h),
            Vec2::new(self.x + half_w, bottom),
        )
    }

    /// Collision rect of the bottom piece, anchored to the gap's lower edge
    pub fn bottom_rect(&self, tuning: &Tuning) -> Rect {
        let half_w = tuning.pipe_w * 0.5;
        let top = self.gap_bottom(tuning);
        Rect::new(
            Vec2::new(self.x - half_w, top),
            Vec2::new(self.x + half_w, top + tuning.pipe_h),
        )
    }

    /// Whether either piece overlaps the given rect
    pub fn hits(&self, rect: &Rect, tuning: &Tuning) -> bool {
        self.top_rect(tuning).overlaps(rect) || self.bottom_rect(tuning).overlaps(rect)
    }

    /// True once the pair has fully scrolled off the left edge
    pub fn offscreen(&self, tuning: &Tuning) -> bool {
        self.right(tuning) < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_position_and_candidate_gap() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);

        for _ in 0..32 {
            let pipe = Pipe::spawn(&mut rng, &tuning).unwrap();
            assert_eq!(pipe.x, tuning.screen_w + tuning.pipe_spawn_margin);
            assert!(tuning.gap_center_choices.contains(&pipe.gap_center));
        }
    }

    #[test]
    fn test_spawn_with_no_candidates_returns_none() {
        let tuning = Tuning {
            gap_center_choices: Vec::new(),
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(11);
        assert!(Pipe::spawn(&mut rng, &tuning).is_none());
    }

    #[test]
    fn test_derived_rects_frame_the_gap() {
        let tuning = Tuning::default();
        let pipe = Pipe {
            x: 100.0,
            gap_center: 225.0,
        };

        let top = pipe.top_rect(&tuning);
        let bottom = pipe.bottom_rect(&tuning);

        assert_eq!(top.min, Vec2::new(74.0, -170.0));
        assert_eq!(top.max, Vec2::new(126.0, 150.0));
        assert_eq!(bottom.min, Vec2::new(74.0, 300.0));
        assert_eq!(bottom.max, Vec2::new(126.0, 620.0));
        assert_eq!(bottom.top() - top.bottom(), tuning.pipe_gap);
    }

    #[test]
    fn test_bird_through_gap_center_does_not_hit() {
        let tuning = Tuning::default();
        let pipe = Pipe {
            x: 67.0,
            gap_center: 225.0,
        };
        let bird = Rect::from_center(Vec2::new(67.0, 225.0), tuning.bird_size);
        assert!(!pipe.hits(&bird, &tuning));
    }

    #[test]
    fn test_edge_touch_counts_as_hit() {
        let tuning = Tuning::default();
        let pipe = Pipe {
            x: 67.0,
            gap_center: 225.0,
        };
        // Bird rect top exactly on the top piece's lower edge
        let grazing = Rect::from_center(
            Vec2::new(67.0, pipe.gap_top(&tuning) + tuning.bird_size.y * 0.5),
            tuning.bird_size,
        );
        assert!(pipe.hits(&grazing, &tuning));

        // One pixel further down clears it
        let clear = Rect::from_center(
            Vec2::new(67.0, pipe.gap_top(&tuning) + tuning.bird_size.y * 0.5 + 1.0),
            tuning.bird_size,
        );
        assert!(!pipe.hits(&clear, &tuning));
    }

    #[test]
    fn test_offscreen_boundary() {
        let tuning = Tuning::default();
        let half_w = tuning.pipe_w * 0.5;

        let touching = Pipe {
            x: -half_w,
            gap_center: 225.0,
        };
        assert_eq!(touching.right(&tuning), 0.0);
        assert!(!touching.offscreen(&tuning));

        let gone = Pipe {
            x: -half_w - 0.5,
            gap_center: 225.0,
        };
        assert!(gone.offscreen(&tuning));
    }

    proptest! {
        #[test]
        fn test_gap_height_is_constant_for_any_spawn(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);

            let pipe = Pipe::spawn(&mut rng, &tuning).unwrap();
            let opening = pipe.gap_bottom(&tuning) - pipe.gap_top(&tuning);
            prop_assert!((opening - tuning.pipe_gap).abs() < 1e-6);

            // Two pieces never overlap each other
            prop_assert!(!pipe.top_rect(&tuning).overlaps(&pipe.bottom_rect(&tuning)));
        }
    }
}
