use axum::{extract::Request, middleware::Next, response::Response};

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const DEFAULT_DEVICE_ID: &str = "default_device";

/// Owner of the stored pets, taken from the `X-Device-Id` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceContext {
    pub device_id: String,
}

/// Middleware to handle device identification
/// Requests without a usable `X-Device-Id` header share the default device.
pub async fn device_middleware(mut req: Request, next: Next) -> Response {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DEVICE_ID)
        .to_string();

    req.extensions_mut().insert(DeviceContext { device_id });

    next.run(req).await
}
