//! Executes `HttpRequest` values over the network with ureq.
//!
//! The agent is built with `http_status_as_error(false)` so 4xx/5xx responses
//! come back as data; interpreting the status is the client's job. Connection
//! failures surface as `ApiError::Transport`.

use tracing::debug;
use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (timeouts, proxy). It should have
    /// `http_status_as_error(false)`, otherwise error replies become
    /// `ApiError::Transport` instead of `ApiResponse::Error`.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }

    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %req.method, url = %req.path, "sending request");

        let mut response = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.path), &req.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&req.path), &req.headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&req.path), &req.headers);
                match &req.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(&req.path), &req.headers);
                match &req.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        debug!(method = %req.method, url = %req.path, status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
