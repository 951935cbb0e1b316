pub mod aggregate;
pub use aggregate::*;

pub mod controller;
pub use controller::*;

pub mod progress;
pub use progress::*;
