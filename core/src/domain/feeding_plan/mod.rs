pub mod entities;
pub mod errors;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod splitter;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use splitter::*;
