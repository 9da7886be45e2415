//! Deserialization of the analytics API payload.

use appglance_core::{AppReport, FailureReason};
use serde::Deserialize;

use crate::FetchError;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    apps: Vec<ApiApp>,
}

#[derive(Debug, Deserialize)]
struct ApiApp {
    name: String,
    humanized_worldwide_last_month_downloads: HumanizedMetric,
    humanized_worldwide_last_month_revenue: HumanizedMetric,
}

/// The API wraps each humanized figure in an object; only the display
/// string is of interest.
#[derive(Debug, Deserialize)]
struct HumanizedMetric {
    string: String,
}

/// Parses the response body into an [`AppReport`].
///
/// The first element of the `apps` array wins; extra elements and unknown
/// fields are ignored. Any shape mismatch, including an empty array, maps
/// to [`FailureReason::Parse`].
pub fn parse_report(body: &str) -> Result<AppReport, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::new(FailureReason::Parse, err.to_string()))?;

    let app = response
        .apps
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::new(FailureReason::Parse, "empty apps array"))?;

    Ok(AppReport {
        name: app.name,
        downloads: app.humanized_worldwide_last_month_downloads.string,
        revenue: app.humanized_worldwide_last_month_revenue.string,
    })
}
