//! Image upload to the third-party image host (imgbb).
//!
//! Out-of-band from the backend: multipart `POST` with an `image` field,
//! keyed by an API key in the query string. The response uses the familiar
//! `{success, data: {url}}` envelope, so the canonical decoder applies.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::envelope;
use crate::error::ApiError;

const IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: String,
}

/// Uploads images and returns their public URLs.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ImageUploader {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            endpoint: IMGBB_ENDPOINT.to_owned(),
            api_key: api_key.into(),
        })
    }

    /// Point at a different host (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Upload raw image bytes; returns the hosted URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_owned());
        let form = Form::new().part("image", part);
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        let image: UploadedImage = envelope::decode(status, &body)?;
        Ok(image.url)
    }
}
