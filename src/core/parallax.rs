use crate::constants::{
    BLOB_ROTATE_PER_PX, BLOB_SPEED_BASE, BLOB_SPEED_STEP, MESSAGE_SPEED_BASE,
    MESSAGE_SPEED_STEP, PARALLAX_RATE,
};

#[inline]
pub fn parallax_rate(scrolled: f64) -> f64 {
    scrolled * PARALLAX_RATE
}

/// Background blobs drift with scroll and rotate slowly; deeper blobs (by
/// document order) move faster.
pub fn blob_transform(scrolled: f64, index: usize) -> String {
    let speed = BLOB_SPEED_BASE + index as f64 * BLOB_SPEED_STEP;
    format!(
        "translateY({}px) rotate({}deg)",
        parallax_rate(scrolled) * speed,
        scrolled * BLOB_ROTATE_PER_PX
    )
}

pub fn message_transform(scrolled: f64, index: usize) -> String {
    let speed = MESSAGE_SPEED_BASE + index as f64 * MESSAGE_SPEED_STEP;
    format!("translateY({}px)", parallax_rate(scrolled) * speed)
}
