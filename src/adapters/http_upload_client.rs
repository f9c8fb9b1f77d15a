use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::core::interfaces::adapters::ImageUploader;
use crate::core::models::{UploadRequest, UploadResult};
use crate::global_constants;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTimeouts {
    pub connect: Duration,
    pub write: Duration,
    pub read: Duration,
}

impl Default for UploadTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(global_constants::UPLOAD_CONNECT_TIMEOUT_SECONDS),
            write: Duration::from_secs(global_constants::UPLOAD_WRITE_TIMEOUT_SECONDS),
            read: Duration::from_secs(global_constants::UPLOAD_READ_TIMEOUT_SECONDS),
        }
    }
}

impl UploadTimeouts {
    /// reqwest has no write timeout; the whole exchange is capped at the sum of the phases.
    fn request_deadline(&self) -> Duration {
        self.connect + self.write + self.read
    }
}

pub struct HttpUploadClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpUploadClient {
    pub fn initialize() -> Result<Self> {
        Self::for_endpoint(global_constants::UPLOAD_ENDPOINT_URL, UploadTimeouts::default())
    }

    pub(crate) fn for_endpoint(endpoint_url: &str, timeouts: UploadTimeouts) -> Result<Self> {
        log::debug!(
            "{} initializing http client for {} ({:?})",
            global_constants::LOG_TAG_UPLOAD,
            endpoint_url,
            timeouts
        );

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .timeout(timeouts.request_deadline())
            .build()
            .context("failed to build upload http client")?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.to_string(),
        })
    }

    async fn post_request(&self, request: &UploadRequest) -> Result<reqwest::Response> {
        let body = request
            .to_json_bytes()
            .context("failed to serialize upload request")?;

        log::info!(
            "{} posting {} bytes ({} base64 chars) to {}",
            global_constants::LOG_TAG_UPLOAD,
            body.len(),
            request.image().len(),
            self.endpoint_url
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .header(CONTENT_TYPE, global_constants::UPLOAD_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        Ok(response)
    }

    async fn log_rejection_reason(response: reqwest::Response) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let Ok(response_text) = response.text().await else {
            return;
        };

        log::debug!(
            "{} server rejection reason: {}",
            global_constants::LOG_TAG_UPLOAD,
            rejection_reason_from_body(response_text)
        );
    }
}

fn rejection_reason_from_body(response_text: String) -> String {
    serde_json::from_str::<serde_json::Value>(&response_text)
        .ok()
        .and_then(|json| json["error"].as_str().map(str::to_string))
        .unwrap_or(response_text)
}

fn describe_transport_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<reqwest::Error>() {
        Some(reqwest_error) if reqwest_error.is_timeout() => {
            format!("request timed out ({})", reqwest_error)
        }
        Some(reqwest_error) if reqwest_error.is_connect() => {
            format!("could not connect ({})", reqwest_error)
        }
        _ => format!("{:#}", error),
    }
}

#[async_trait]
impl ImageUploader for HttpUploadClient {
    async fn send(&self, request: &UploadRequest) -> UploadResult {
        match self.post_request(request).await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let result = UploadResult::from_status_code(status_code);

                if result == UploadResult::Success {
                    log::info!(
                        "{} server accepted upload with status {}",
                        global_constants::LOG_TAG_UPLOAD,
                        status_code
                    );
                } else {
                    log::warn!(
                        "{} server rejected upload with status {}",
                        global_constants::LOG_TAG_UPLOAD,
                        status_code
                    );
                    Self::log_rejection_reason(response).await;
                }

                result
            }
            Err(error) => {
                let message = describe_transport_error(&error);
                log::error!(
                    "{} upload failed before a response: {}",
                    global_constants::LOG_TAG_UPLOAD,
                    message
                );
                UploadResult::TransportError { message }
            }
        }
    }
}
