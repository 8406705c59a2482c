pub mod click;
pub mod nav;
pub mod pointer;
pub mod scroll;

pub use click::{wire_button_bursts, wire_floating_messages, wire_form_loading, wire_smooth_anchors};
pub use nav::wire_navbar_proximity;
pub use pointer::{wire_card_tilt, wire_pointer_follower};
pub use scroll::wire_parallax;
