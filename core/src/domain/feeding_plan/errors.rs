use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedingPlanError {
    #[error("Invalid feeding plan input: {0}")]
    InvalidInput(String),
}
