//! Shared HTTP client wired with the init-data and error interceptors.
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Request, Url};
use serde::Serialize;

use client_host::SharedHost;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::interceptor::{InitDataInterceptor, intercept_response};
use crate::resources::{GroupsApi, UsersApi, WishesApi};
use crate::response::ApiResponse;

/// Single HTTP client instance for the whole application.
///
/// Cheap to clone: the underlying reqwest client is reference counted.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    init_data: InitDataInterceptor,
}

impl ApiClient {
    /// Build the client. The host is consulted on every request, so the
    /// client may be built before the host session is detected.
    pub fn new(config: ApiConfig, host: SharedHost) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .map_err(ApiError::Client)?;

        tracing::debug!("API client configured: base_url={}", config.base_url);

        Ok(Self {
            http,
            base_url: config.base_url,
            init_data: InitDataInterceptor::new(host),
        })
    }

    /// Headers sent with every request: only `Content-Type: application/json`.
    pub fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn wishes(&self) -> WishesApi<'_> {
        WishesApi::new(self)
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self)
    }

    /// Absolute URL for an API path such as `/api/wishes/`.
    pub fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })
    }

    /// Build a request with the init-data header applied, without sending it.
    pub fn prepare<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Request>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut builder = self.http.request(method, self.url(path)?);

        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let mut request = builder.build()?;
        self.init_data.intercept(&mut request)?;
        Ok(request)
    }

    /// Issue exactly one request and classify the response.
    pub async fn send<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let request = self.prepare(method.clone(), path, query, body)?;

        tracing::debug!("{} {}", method, request.url());

        let response = self.http.execute(request).await?;
        intercept_response(&method, path, response).await
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.send::<T, (), ()>(Method::GET, path, None, None).await
    }

    pub(crate) async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>>
    where
        Q: Serialize + ?Sized,
    {
        self.send::<T, Q, ()>(Method::GET, path, Some(query), None)
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
    {
        self.send::<T, (), B>(Method::POST, path, None, Some(body))
            .await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
    {
        self.send::<T, (), B>(Method::PUT, path, None, Some(body))
            .await
    }

    pub(crate) async fn patch<T>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.send::<T, (), ()>(Method::PATCH, path, None, None)
            .await
    }

    pub(crate) async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.send::<T, (), ()>(Method::DELETE, path, None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_host::MockHost;

    use super::*;
    use crate::interceptor::INIT_DATA_HEADER;

    fn client(host: MockHost, base: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base), Arc::new(host)).unwrap()
    }

    #[test]
    fn test_default_headers_are_json_only() {
        let headers = ApiClient::default_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let api = client(MockHost::absent(), "https://example.com/backend/");
        assert_eq!(
            api.url("/api/wishes/").unwrap().as_str(),
            "https://example.com/backend/api/wishes/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let api = client(MockHost::absent(), "not a url");
        assert!(matches!(
            api.url("/api/groups/"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_prepare_applies_interceptor() {
        let api = client(MockHost::present("abc123"), "http://localhost:8000");
        let request = api
            .prepare::<(), ()>(Method::GET, "/api/wishes/", None, None)
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().path(), "/api/wishes/");
        assert_eq!(request.headers().get(INIT_DATA_HEADER).unwrap(), "abc123");
    }
}
