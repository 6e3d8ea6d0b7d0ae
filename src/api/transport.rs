use crate::error::Result;
use reqwest::Method;
use serde_json::Value;

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("agentspace-cli/", env!("CARGO_PKG_VERSION"));

pub const AUTHORIZATION: &str = "authorization";
pub const CONTENT_TYPE: &str = "content-type";
pub const USER_PROJECT: &str = "x-goog-user-project";

/// One outgoing API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>, token: &str) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![(AUTHORIZATION, format!("Bearer {}", token))],
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json_content(self) -> Self {
        self.header(CONTENT_TYPE, "application/json")
    }

    /// Bill the request to the given project
    pub fn user_project(self, project_id: &str) -> Self {
        self.header(USER_PROJECT, project_id)
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The services signal success with a plain 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Parsed body, or the raw text as a JSON string when it is not JSON
    pub fn json_or_text(&self) -> Value {
        self.json()
            .unwrap_or_else(|| Value::String(self.body.clone()))
    }
}

/// Sends a request and hands back the response, whatever its status
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking HTTPS transport
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(ApiResponse { status, body })
    }
}
