pub mod calculate_ration;

pub use calculate_ration::*;
