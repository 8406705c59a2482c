use crate::constants::{MOBILE_MAX_VIEWPORT_PX, MOBILE_UA_TOKENS};

/// True for touch-first devices, where pointer-driven effects stay off.
#[inline]
pub fn is_mobile(user_agent: &str, viewport_width: f64) -> bool {
    if viewport_width <= MOBILE_MAX_VIEWPORT_PX {
        return true;
    }
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
}
