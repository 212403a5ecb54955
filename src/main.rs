use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use proxyprobe::adapters::{HtmlReport, ReqwestHttpClient};
use proxyprobe::handlers::{CommonHandler, NodeV10Handler};
use proxyprobe::ports::ReportPort;

#[derive(Parser, Debug)]
#[clap(version = env!("PROXYPROBE_VERSION"))]
pub struct Opts {
    /// Base URL of the proxy to probe
    #[clap(long, short = 'p')]
    proxy_url: Option<String>,

    /// Where to write the HTML report
    #[clap(long, short = 'o', default_value = "proxyprobe-report.html")]
    report: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProbeConfig {
    proxy_url: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proxy_url: "http://localhost:7950".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();

    let proxy_url = match opts.proxy_url {
        Some(url) => url,
        None => confy::load::<ProbeConfig>("proxyprobe", None)?.proxy_url,
    };
    let proxy_url = proxy_url.parse::<url::Url>()?;
    info!("Probing proxy at {}", proxy_url);

    let http_client = Arc::new(ReqwestHttpClient::new());
    let report = Arc::new(HtmlReport::new());

    let common = CommonHandler::new(proxy_url.as_str(), http_client, report.clone());
    let node_v1_0 = NodeV10Handler::new(common);

    let suite = node_v1_0.handle_heartbeat().await;
    report.record_suite(&suite).await?;

    report.write_to(&opts.report).await?;
    info!(
        "Run {} finished: {} ({}/{} phases passed)",
        report.run_id(),
        suite.status,
        suite.passed_phases(),
        suite.phases.len()
    );

    if !suite.is_successful() {
        std::process::exit(1);
    }
    Ok(())
}
