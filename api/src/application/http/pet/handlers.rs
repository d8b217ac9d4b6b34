pub mod create_pet;
pub mod create_pet_feeding_plan;
pub mod delete_pet;
pub mod delete_pets;
pub mod get_pet;
pub mod get_pets;
pub mod get_weight_history;
pub mod record_weight;
pub mod update_pet;

pub use create_pet::*;
pub use create_pet_feeding_plan::*;
pub use delete_pet::*;
pub use delete_pets::*;
pub use get_pet::*;
pub use get_pets::*;
pub use get_weight_history::*;
pub use record_weight::*;
pub use update_pet::*;
