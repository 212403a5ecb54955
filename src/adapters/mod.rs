pub mod html_report;
pub mod reqwest_client;

pub use html_report::HtmlReport;
pub use reqwest_client::ReqwestHttpClient;
