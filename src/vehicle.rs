mod car;
mod danger_level;
mod frame;

pub use car::{Car, CarId};
pub use danger_level::DangerLevel;
pub use frame::Frame;
