pub mod find_vets;

pub use find_vets::*;
