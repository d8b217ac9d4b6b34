use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ration::{entities::RationResult, value_objects::CalculateRationInput},
};

pub trait RationService: Send + Sync {
    fn calculate_ration(
        &self,
        input: CalculateRationInput,
    ) -> impl Future<Output = Result<RationResult, CoreError>> + Send;
}
