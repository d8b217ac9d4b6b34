use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fidofeed_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "The service is temporarily unavailable. Please try again in a moment.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong on our side. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    /// Maps a core error, replacing external failure details with `unavailable_message`.
    pub fn from_core(error: CoreError, unavailable_message: &str) -> Self {
        match error {
            CoreError::UnknownBreed(_) | CoreError::InvalidAge(_) | CoreError::InvalidInput(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::ExternalServiceError(detail) => {
                error!("External service failure: {}", detail);
                ApiError::ServiceUnavailable(unavailable_message.to_string())
            }
            CoreError::StorageError(_)
            | CoreError::InvalidCatalog(_)
            | CoreError::InternalServerError => {
                error!("Internal failure: {}", error);
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        ApiError::from_core(error, SERVICE_UNAVAILABLE_MESSAGE)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect::<Vec<_>>();
        messages.sort();

        ApiError::BadRequest(messages.join(", "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}
