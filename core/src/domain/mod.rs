pub mod breed;
pub mod chat;
pub mod common;
pub mod feeding_plan;
pub mod health;
pub mod llm;
pub mod pet;
pub mod ration;
pub mod vet;
