use crate::AppReport;

/// A user-visible message handed to the platform presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Renders a successful fetch as a structured report notification.
pub fn report_notification(report: &AppReport) -> Notification {
    Notification {
        title: format!("App: {}", report.name),
        body: format!(
            "{} - Downloads: {}, Revenue: {}",
            report.name, report.downloads, report.revenue
        ),
    }
}

/// Renders the original shared text verbatim when no report is available.
pub fn fallback_notification(shared_text: &str) -> Notification {
    Notification {
        title: "Something went wrong".to_string(),
        body: shared_text.to_string(),
    }
}
