use std::path::Path;
use std::time::Duration;

use scribe_core::JobId;

use crate::types::{RawStatus, TransportError, UploadReceipt};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Boundary to the backend. `/status` is global: it reports whichever job
/// the backend is currently or most recently processing, not one scoped to
/// this caller.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Submit one audio file; the receipt carries the backend-assigned id.
    async fn submit_audio(&self, path: &Path) -> Result<UploadReceipt, TransportError>;

    /// Fetch the single shared status record.
    async fn fetch_status(&self) -> Result<RawStatus, TransportError>;

    /// Navigable reference to the finished report. The engine never fetches
    /// it; the completion gate decides when it may be surfaced.
    fn report_url(&self, job_id: &JobId) -> String;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        reqwest::Url::parse(&settings.base_url)
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn submit_audio(&self, path: &Path) -> Result<UploadReceipt, TransportError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| TransportError::FileUnreadable {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload-audio"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        response
            .json::<UploadReceipt>()
            .await
            .map_err(|err| TransportError::MalformedResponse(err.to_string()))
    }

    async fn fetch_status(&self) -> Result<RawStatus, TransportError> {
        let response = self
            .client
            .get(self.endpoint("status"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        response
            .json::<RawStatus>()
            .await
            .map_err(|err| TransportError::MalformedResponse(err.to_string()))
    }

    fn report_url(&self, job_id: &JobId) -> String {
        format!("{}/download-pdf/{}", self.base_url, job_id)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }
    TransportError::Network(err.to_string())
}
