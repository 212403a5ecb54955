use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{ProbeError, Result, TestSuite};
use crate::ports::ReportPort;

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct ErrorSection {
    label: String,
    url: String,
    error_html: String,
}

#[derive(Default)]
struct ReportState {
    suites: Vec<TestSuite>,
    errors: Vec<ErrorSection>,
}

/// Report sink that accumulates suite outcomes and error sections, then
/// renders them as one self-contained HTML page.
pub struct HtmlReport {
    run_id: Uuid,
    state: Arc<RwLock<ReportState>>,
}

impl HtmlReport {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            state: Arc::new(RwLock::new(ReportState::default())),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub async fn render(&self) -> String {
        let state = self.state.read().await;

        let mut page = String::new();
        let _ = writeln!(page, "<!DOCTYPE html>");
        let _ = writeln!(page, "<html><head><meta charset=\"utf-8\"><title>proxyprobe report</title></head><body>");
        let _ = writeln!(page, "<h1>proxyprobe run {}</h1>", self.run_id);

        let _ = writeln!(page, "<table border=\"1\"><tr><th>Suite</th><th>Status</th><th>Phases passed</th></tr>");
        for suite in &state.suites {
            let _ = writeln!(
                page,
                "<tr><td>{}</td><td>{}</td><td>{}/{}</td></tr>",
                escape(&suite.label),
                suite.status,
                suite.passed_phases(),
                suite.phases.len()
            );
        }
        let _ = writeln!(page, "</table>");

        for err in &state.errors {
            let _ = writeln!(page, "<div id=\"{}\">", escape(&err.label));
            let _ = writeln!(page, "<h2>{}</h2>", escape(&err.label));
            let _ = writeln!(page, "<p>GET {}</p>", escape(&err.url));
            // Fragment comes from error_html and is already escaped.
            let _ = writeln!(page, "{}", err.error_html);
            let _ = writeln!(page, "</div>");
        }

        let _ = writeln!(page, "</body></html>");
        page
    }

    pub async fn write_to(&self, path: &Path) -> Result<()> {
        let page = self.render().await;
        tokio::fs::write(path, page)
            .await
            .map_err(|e| ProbeError::ReportFailed(format!("{}: {}", path.display(), e)))?;
        info!("Wrote report to {}", path.display());
        Ok(())
    }
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportPort for HtmlReport {
    async fn display_err_response(&self, label: &str, url: &str, error_html: &str) -> Result<()> {
        warn!("{}: GET {} failed", label, url);

        let mut state = self.state.write().await;
        state.errors.push(ErrorSection {
            label: label.to_string(),
            url: url.to_string(),
            error_html: error_html.to_string(),
        });
        Ok(())
    }

    async fn record_suite(&self, suite: &TestSuite) -> Result<()> {
        info!(
            "{}: {} ({}/{} phases passed)",
            suite.label,
            suite.status,
            suite.passed_phases(),
            suite.phases.len()
        );

        let mut state = self.state.write().await;
        state.suites.push(suite.clone());
        Ok(())
    }
}
