use crate::constants::{FOLLOWER_HOVER_SCALE, FOLLOWER_SMOOTHING};
use glam::Vec2;

/// Inertial trail behind the real pointer.
///
/// `pointer` is the last recorded viewport position; `position` chases it by
/// a fixed fraction of the remaining distance each frame, so it converges
/// without overshooting for any smoothing factor in (0, 1].
///
/// Hover targets can nest (a link inside a card), so hover is a depth count
/// of entered targets rather than a flag.
#[derive(Default, Clone, Copy, Debug)]
pub struct Follower {
    pub pointer: Vec2,
    pub position: Vec2,
    pub hover_depth: u32,
}

impl Follower {
    #[inline]
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(x, y);
        }
    }

    #[inline]
    pub fn enter_hover(&mut self) {
        self.hover_depth += 1;
    }

    #[inline]
    pub fn leave_hover(&mut self) {
        self.hover_depth = self.hover_depth.saturating_sub(1);
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hover_depth > 0
    }

    /// Advance one animation frame and return the new position.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.position += (self.pointer - self.position) * FOLLOWER_SMOOTHING;
        self.position
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        if self.is_hovered() {
            FOLLOWER_HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.position.x,
            self.position.y,
            self.scale()
        )
    }
}
