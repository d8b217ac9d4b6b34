pub mod distance;
pub mod entities;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
