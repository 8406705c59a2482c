use crate::constants::{
    NAV_BRAND_BRIGHTNESS_BOOST, NAV_BRAND_GLOW_PX, NAV_EFFECT_RADIUS, NAV_LINK_BRIGHTNESS_BOOST,
    NAV_LINK_GLOW_PX, NAV_MAX_SCALE_BOOST,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItemKind {
    Link,
    Brand,
}

impl NavItemKind {
    fn glow_color(self) -> &'static str {
        match self {
            NavItemKind::Link => "var(--accent-color)",
            NavItemKind::Brand => "var(--primary-color)",
        }
    }
}

/// Index and distance of the rect whose center is closest to `pointer`.
/// The first of equally distant rects wins.
pub fn nearest(pointer: Vec2, rects: impl IntoIterator<Item = Rect>) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, rect) in rects.into_iter().enumerate() {
        let d = pointer.distance(rect.center());
        match best {
            Some((_, bd)) if d >= bd => {}
            _ if d.is_nan() => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

pub const NEUTRAL_TRANSFORM: &str = "scale(1)";
pub const NEUTRAL_TEXT_SHADOW: &str = "none";
pub const NEUTRAL_FILTER: &str = "brightness(1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavGlow {
    pub kind: NavItemKind,
    pub scale: f32,
    pub glow_px: u32,
    pub brightness: f32,
}

impl NavGlow {
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    pub fn text_shadow(&self) -> String {
        let c = self.kind.glow_color();
        let s = self.glow_px as f32;
        format!(
            "0 0 {}px {c}, 0 0 {}px {c}, 0 0 {}px {c}",
            s,
            s * 1.5,
            s * 2.0
        )
    }

    pub fn filter(&self) -> String {
        format!("brightness({})", self.brightness)
    }
}

/// Highlight for the nearest item, or `None` when it lies at or beyond the
/// effect radius.
pub fn nav_glow(kind: NavItemKind, distance: f32) -> Option<NavGlow> {
    if distance.is_nan() || distance >= NAV_EFFECT_RADIUS {
        return None;
    }
    let intensity = 1.0 - distance / NAV_EFFECT_RADIUS;
    let (glow, boost) = match kind {
        NavItemKind::Link => (NAV_LINK_GLOW_PX, NAV_LINK_BRIGHTNESS_BOOST),
        NavItemKind::Brand => (NAV_BRAND_GLOW_PX, NAV_BRAND_BRIGHTNESS_BOOST),
    };
    Some(NavGlow {
        kind,
        scale: 1.0 + intensity * NAV_MAX_SCALE_BOOST,
        glow_px: (intensity * glow).floor() as u32,
        brightness: 1.0 + intensity * boost,
    })
}
