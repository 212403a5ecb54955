use tracing::error;

use super::CommonHandler;
use crate::domain::{StatusCode, TestStatus, TestSuite};

const API_VERSION: &str = "v1.0";
const HEARTBEAT_PATH: &str = "/node/heartbeatstatus";
const HEARTBEAT_ERR_LABEL: &str = "LoadHeartBeatOutput";

/// Handler for the node API calls of API v1.0.
pub struct NodeV10Handler {
    common: CommonHandler,
}

impl NodeV10Handler {
    pub fn new(common: CommonHandler) -> Self {
        Self { common }
    }

    /// Check the node heartbeat endpoint. Always yields a well-formed
    /// suite; a failed call is reported to the sink, never propagated.
    pub async fn handle_heartbeat(&self) -> TestSuite {
        let mut phases = Vec::new();

        let url = self.common.endpoint(HEARTBEAT_PATH);
        match self.common.http_client().get(&url).await {
            Ok(response) => {
                phases.push(self.common.run_basic_phase_ok(&response, StatusCode::OK));

                TestSuite::new(API_VERSION, phases, TestStatus::Successful, Some(response))
            }
            Err(err) => {
                if let Err(report_err) = self
                    .common
                    .report()
                    .display_err_response(HEARTBEAT_ERR_LABEL, &url, &err.html())
                    .await
                {
                    error!("Failed to report heartbeat error: {}", report_err);
                }

                TestSuite::new(API_VERSION, phases, TestStatus::Unsuccessful, None)
            }
        }
    }
}
