pub mod burst;
pub mod device;
pub mod follower;
pub mod parallax;
pub mod proximity;
pub mod theme;
pub mod tilt;
pub mod typewriter;

pub use burst::*;
pub use device::*;
pub use follower::*;
pub use parallax::*;
pub use proximity::*;
pub use theme::*;
pub use tilt::*;
pub use typewriter::*;
