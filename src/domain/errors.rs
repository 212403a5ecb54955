use std::fmt;

#[derive(Debug, Clone)]
pub enum ProbeError {
    InvalidUrl(String),
    RequestFailed(String),
    ReadBodyFailed(String),
    ReportFailed(String),
    Config(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ProbeError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ProbeError::ReadBodyFailed(msg) => write!(f, "Failed to read response body: {}", msg),
            ProbeError::ReportFailed(msg) => write!(f, "Report error: {}", msg),
            ProbeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl ProbeError {
    /// HTML fragment for embedding this error in a report page.
    pub fn html(&self) -> String {
        format!("<pre class=\"error\">{}</pre>", escape(&self.to_string()))
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl std::error::Error for ProbeError {}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_markup() {
        let err = ProbeError::RequestFailed("<script>alert(1)</script>".to_string());
        let html = err.html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
