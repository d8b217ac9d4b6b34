pub mod chat;
pub mod quick_answer;

pub use chat::*;
pub use quick_answer::*;
