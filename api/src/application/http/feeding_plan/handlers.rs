pub mod build_feeding_plan;
pub mod generate_feeding_plan;

pub use build_feeding_plan::*;
pub use generate_feeding_plan::*;
