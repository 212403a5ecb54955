pub use http::StatusCode;
use std::collections::HashMap;

/// Raw outcome of one GET against the proxy, as yielded by the HTTP client port.
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CheckResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Overall outcome of a test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Successful,
    Unsuccessful,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Successful => write!(f, "SUCCESSFUL"),
            TestStatus::Unsuccessful => write!(f, "UNSUCCESSFUL"),
        }
    }
}

/// One assertion inside a suite, recorded pass/fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPhase {
    pub name: String,
    pub passed: bool,
    pub expected_status: StatusCode,
    pub actual_status: StatusCode,
}

impl TestPhase {
    pub fn status_check(expected: StatusCode, actual: StatusCode) -> Self {
        Self {
            name: format!("status code equals {}", expected.as_u16()),
            passed: actual == expected,
            expected_status: expected,
            actual_status: actual,
        }
    }
}

/// Aggregate outcome of one check invocation: an API-version label, the
/// phases that ran, the overall status and the raw response when the call
/// came back at all. Immutable once built.
#[derive(Debug, Clone)]
pub struct TestSuite {
    pub label: String,
    pub phases: Vec<TestPhase>,
    pub status: TestStatus,
    pub payload: Option<CheckResponse>,
}

impl TestSuite {
    pub fn new(label: &str, phases: Vec<TestPhase>, status: TestStatus, payload: Option<CheckResponse>) -> Self {
        Self {
            label: label.to_string(),
            phases,
            status,
            payload,
        }
    }

    pub fn passed_phases(&self) -> usize {
        self.phases.iter().filter(|p| p.passed).count()
    }

    pub fn is_successful(&self) -> bool {
        self.status == TestStatus::Successful
    }
}
