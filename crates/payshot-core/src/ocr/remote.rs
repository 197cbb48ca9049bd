//! Remote OCR provider.
//!
//! Uploads the image as a multipart form to an HTTP OCR service and
//! reads the recognized text from the `text` field of the JSON reply.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::OcrProvider;
use crate::error::OcrError;

#[derive(Deserialize)]
struct OcrResponse {
    text: Option<String>,
}

/// OCR provider backed by a remote HTTP service.
pub struct RemoteProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteProvider {
    /// Create a provider for `endpoint` with the given request timeout.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

#[async_trait]
impl OcrProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn recognize(&self, path: &Path) -> Result<String, OcrError> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("image", part);

        debug!("Uploading {} to {}", path.display(), self.endpoint);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(OcrError::Recognition(format!(
                "OCR service returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let body: OcrResponse = response
            .json()
            .await
            .map_err(|e| OcrError::MalformedResponse(e.to_string()))?;

        body.text
            .ok_or_else(|| OcrError::MalformedResponse("response has no `text` field".to_string()))
    }
}
