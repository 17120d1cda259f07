//! Request and response interceptors.
use reqwest::header::HeaderValue;
use reqwest::{Method, Request, Response, StatusCode};

use client_host::SharedHost;

use crate::error::{ApiError, Result};
use crate::response::ApiResponse;

/// Header carrying the host's signed init-data token.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Attaches the current init-data token to outbound requests.
///
/// The token is read from the host at dispatch time, never cached: the host
/// may populate it after the client was constructed.
#[derive(Clone)]
pub struct InitDataInterceptor {
    host: SharedHost,
}

impl InitDataInterceptor {
    pub fn new(host: SharedHost) -> Self {
        Self { host }
    }

    /// Set the header when a token is available; leave it unset otherwise.
    pub fn intercept(&self, request: &mut Request) -> Result<()> {
        let init_data = self.host.current_init_data();

        if init_data.is_empty() {
            request.headers_mut().remove(INIT_DATA_HEADER);
            return Ok(());
        }

        let value = HeaderValue::from_str(&init_data).map_err(ApiError::InvalidInitData)?;
        request.headers_mut().insert(INIT_DATA_HEADER, value);
        Ok(())
    }
}

/// Turn a received response into a success or a classified failure.
///
/// Successful responses pass through untouched. A 401 is logged and surfaced
/// as [`ApiError::Unauthorized`]; other failures as [`ApiError::Status`].
/// Nothing is retried or swallowed.
pub async fn intercept_response<T>(
    method: &Method,
    path: &str,
    response: Response,
) -> Result<ApiResponse<T>> {
    let status = response.status();
    let headers = response.headers().clone();

    if status.is_success() {
        let body = response.bytes().await?.to_vec();
        return Ok(ApiResponse::new(status, headers, body));
    }

    if status == StatusCode::UNAUTHORIZED {
        tracing::error!("Unauthorized access: {} {}", method, path);
        return Err(ApiError::Unauthorized {
            method: method.clone(),
            path: path.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::debug!("{} {} failed with status {}", method, path, status);

    Err(ApiError::Status {
        method: method.clone(),
        path: path.to_string(),
        status,
        body,
    })
}
