//! The base client: request building, credential handling, and decoding.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::envelope;
use crate::error::ApiError;

/// Backend API client. Cheap to clone; holds a shared connection pool and
/// cookie store (credentials are included on every request).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { http, config })
    }

    /// Build with a preconfigured `reqwest::Client` (tests, custom pools).
    pub fn with_http(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        envelope::decode(status, &body)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::validation(format!("invalid query: {e}")))?;
        let path = if qs.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{qs}")
        };
        self.get(&path).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
    }

    /// DELETE where only success/failure matters; the payload is discarded.
    pub(crate) async fn delete_void(&self, path: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}
