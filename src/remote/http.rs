//! reqwest implementation of [`SubjectGateway`].
//!
//! Status and body handling is uniform across the four endpoints:
//! - transport failures become `Network`
//! - non-2xx statuses become `RemoteRejected` with the response text
//! - bodies that are not the expected JSON become `Parse`

use std::time::Duration;

use reqwest::header;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, validate_base_url};
use crate::error::{AssuntoError, Result};
use crate::types::{COURSES_PATH, Course, SUBJECTS_PATH, Subject, SubjectPayload};

use super::SubjectGateway;

/// HTTP gateway bound to one backend origin
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Create a gateway for `base_url`. `timeout` of `None` means requests never
    /// time out on the client side.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base = validate_base_url(base_url)?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AssuntoError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base,
        })
    }

    /// Create a gateway from configuration, honoring a command-line override
    pub fn from_config(config: &Config, base_url_override: Option<&str>) -> Result<Self> {
        Self::new(
            &config.effective_base_url(base_url_override),
            config.timeout(),
        )
    }

    /// The normalized base URL (always ends with '/')
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AssuntoError::InvalidUrl(path.to_string(), e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}

/// Check the status, then decode the body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "request rejected");
        return Err(AssuntoError::RemoteRejected {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| AssuntoError::Parse(e.to_string()))
}

impl SubjectGateway for HttpGateway {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get_json(COURSES_PATH).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.get_json(SUBJECTS_PATH).await
    }

    async fn save_subject(&self, payload: &SubjectPayload) -> Result<Subject> {
        let request = match payload.id {
            Some(id) => {
                let url = self.endpoint(&format!("{SUBJECTS_PATH}/{id}"))?;
                tracing::debug!(%url, "PUT");
                self.client.put(url)
            }
            None => {
                let url = self.endpoint(SUBJECTS_PATH)?;
                tracing::debug!(%url, "POST");
                self.client.post(url)
            }
        };

        let response = request
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            )
            .json(payload)
            .send()
            .await?;

        read_json(response).await
    }
}
