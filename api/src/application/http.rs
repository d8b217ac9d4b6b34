pub mod breed;
pub mod chat;
pub mod feeding_plan;
pub mod health;
pub mod pet;
pub mod ration;
pub mod server;
pub mod vet;
