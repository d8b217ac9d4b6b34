pub mod health_live;
pub mod health_ready;

pub use health_live::*;
pub use health_ready::*;
