pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod paytable;
pub use paytable::*;

pub mod phase;
pub use phase::*;

pub mod record;
pub use record::*;

pub mod state;
pub use state::*;
