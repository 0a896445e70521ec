pub mod exercise;
pub mod log;
pub mod user;

pub use exercise::*;
pub use log::*;
pub use user::*;
