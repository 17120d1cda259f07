//! Raw response handed back to callers.
use std::marker::PhantomData;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Successful response with its body still undecoded.
///
/// `T` is the record type the endpoint returns; callers unwrap it with
/// [`ApiResponse::data`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    _record: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            _record: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode the body. An empty body decodes as JSON `null`.
    pub fn data(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let response: ApiResponse<()> =
            ApiResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), Vec::new());
        assert!(response.data().is_ok());

        let response: ApiResponse<Vec<u32>> =
            ApiResponse::new(StatusCode::OK, HeaderMap::new(), Vec::new());
        assert!(response.data().is_err());
    }

    #[test]
    fn test_json_body() {
        let response: ApiResponse<Vec<u32>> =
            ApiResponse::new(StatusCode::OK, HeaderMap::new(), b"[1, 2, 3]".to_vec());
        assert_eq!(response.data().unwrap(), vec![1, 2, 3]);
    }
}
