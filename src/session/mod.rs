pub mod bankroll;
pub use bankroll::*;

pub mod config;
pub use config::*;

pub mod result;
pub use result::*;

#[allow(clippy::module_inception)]
pub mod session;
pub use session::*;

pub mod table;
pub use table::*;
