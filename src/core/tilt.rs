use crate::constants::{TILT_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};

/// 3D tilt for a card given the pointer position local to the card.
/// Returns `(rotate_x_deg, rotate_y_deg)`.
#[inline]
pub fn tilt_angles(local_x: f64, local_y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (local_y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - local_x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(local_x: f64, local_y: f64, width: f64, height: f64) -> String {
    let (rx, ry) = tilt_angles(local_x, local_y, width, height);
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
        TILT_PERSPECTIVE_PX, rx, ry, TILT_LIFT_PX
    )
}

pub fn tilt_reset() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) translateZ(0)",
        TILT_PERSPECTIVE_PX
    )
}
