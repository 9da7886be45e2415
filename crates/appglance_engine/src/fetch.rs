use std::time::Duration;

use appglance_core::{AppReport, FailureReason};
use pipeline_logging::pipeline_debug;

use crate::report::parse_report;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Base URL of the analytics service, scheme and host only.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        // Request timeout stays under the 5s pipeline deadline so a slow
        // server surfaces as a fetch failure rather than a deadline hit.
        Self {
            endpoint: "https://app.sensortower.com".to_string(),
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(4),
        }
    }
}

/// Fetch failure with the transport detail preserved for logging. The
/// pipeline core only ever sees the `reason` taxonomy.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{reason}: {message}")]
pub struct FetchError {
    pub reason: FailureReason,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait ReportFetcher: Send + Sync {
    /// Issues exactly one fetch attempt for `app_id`. No retries.
    async fn fetch(&self, app_id: &str) -> Result<AppReport, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpReportFetcher {
    settings: FetchSettings,
}

impl HttpReportFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureReason::Network, err.to_string()))
    }

    fn request_url(&self, app_id: &str) -> Result<url::Url, FetchError> {
        let mut url = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureReason::Network, err.to_string()))?;
        url.set_path("/api/android/apps");
        url.query_pairs_mut().append_pair("app_ids", app_id);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ReportFetcher for HttpReportFetcher {
    async fn fetch(&self, app_id: &str) -> Result<AppReport, FetchError> {
        let url = self.request_url(app_id)?;
        let client = self.build_client()?;
        pipeline_debug!("GET {url}");

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureReason::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_report(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    // Transport timeouts count as network failures; the pipeline treats
    // them identically anyway.
    FetchError::new(FailureReason::Network, err.to_string())
}
