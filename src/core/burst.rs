use crate::constants::{
    BURST_LAUNCH_DELAY_MS, BUTTON_BURST_COUNT, BUTTON_BURST_DISTANCE_MIN,
    BUTTON_BURST_DISTANCE_SPAN, BUTTON_BURST_LIFETIME_MS, BUTTON_GLYPHS, MESSAGE_BURST_COUNT,
    MESSAGE_BURST_DISTANCE, MESSAGE_BURST_LIFETIME_MS, MESSAGE_GLYPH,
};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstKind {
    /// Small burst from a floating message.
    Message,
    /// Larger burst from a call-to-action button, paired with a wand overlay.
    Button,
}

impl BurstKind {
    #[inline]
    pub fn count(self) -> usize {
        match self {
            BurstKind::Message => MESSAGE_BURST_COUNT,
            BurstKind::Button => BUTTON_BURST_COUNT,
        }
    }

    #[inline]
    pub fn lifetime_ms(self) -> i32 {
        match self {
            BurstKind::Message => MESSAGE_BURST_LIFETIME_MS,
            BurstKind::Button => BUTTON_BURST_LIFETIME_MS,
        }
    }

    #[inline]
    pub fn font_size(self) -> &'static str {
        match self {
            BurstKind::Message => "1rem",
            BurstKind::Button => "1.5rem",
        }
    }

    #[inline]
    pub fn z_index(self) -> &'static str {
        match self {
            BurstKind::Message => "9998",
            BurstKind::Button => "9999",
        }
    }

    pub fn transition(self) -> String {
        format!("all {}s ease", self.lifetime_ms() as f32 / 1000.0)
    }

    /// Time from spawn until the particles are detached.
    #[inline]
    pub fn removal_ms(self) -> i32 {
        BURST_LAUNCH_DELAY_MS + self.lifetime_ms()
    }

    fn distance<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        match self {
            BurstKind::Message => MESSAGE_BURST_DISTANCE,
            BurstKind::Button => {
                BUTTON_BURST_DISTANCE_MIN + rng.gen::<f32>() * BUTTON_BURST_DISTANCE_SPAN
            }
        }
    }

    fn glyph<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        match self {
            BurstKind::Message => MESSAGE_GLYPH,
            BurstKind::Button => BUTTON_GLYPHS[rng.gen_range(0..BUTTON_GLYPHS.len())],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    /// Final displacement from the burst origin, in CSS pixels.
    pub offset: Vec2,
}

impl Particle {
    pub fn launch_transform(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px)) scale(0)",
            self.offset.x, self.offset.y
        )
    }
}

/// Lay out one burst: particle `i` of `n` flies along `i / n` of a full turn.
pub fn plan_burst<R: Rng + ?Sized>(kind: BurstKind, rng: &mut R) -> Vec<Particle> {
    let n = kind.count();
    (0..n)
        .map(|i| {
            let glyph = kind.glyph(rng);
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            let offset = Vec2::from_angle(angle) * kind.distance(rng);
            Particle { glyph, offset }
        })
        .collect()
}
