pub mod chi;
pub use chi::*;

pub mod compare;
pub use compare::*;

pub mod math;
pub use math::*;

pub mod theory;
pub use theory::*;

pub mod wilson;
pub use wilson::*;
