pub mod catalog;
pub mod defaults;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use catalog::*;
pub use entities::*;
pub use errors::*;
