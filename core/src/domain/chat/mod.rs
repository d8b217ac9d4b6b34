pub mod entities;
pub mod knowledge_base;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use knowledge_base::KnowledgeBase;
