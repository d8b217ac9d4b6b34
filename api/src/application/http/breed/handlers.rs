pub mod get_breed;
pub mod get_breeds;

pub use get_breed::*;
pub use get_breeds::*;
