pub mod calculator;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use calculator::*;
pub use entities::*;
pub use errors::*;
