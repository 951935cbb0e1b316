pub mod dalembert;
pub use dalembert::*;

pub mod factory;
pub use factory::*;

pub mod fibonacci;
pub use fibonacci::*;

pub mod flat;
pub use flat::*;

pub mod martingale;
pub use martingale::*;

pub mod paroli;
pub use paroli::*;

pub mod proportional;
pub use proportional::*;

pub mod system;
pub use system::*;
