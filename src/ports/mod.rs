pub mod http_client;
pub mod report;

pub use http_client::HttpClientPort;
pub use report::ReportPort;
