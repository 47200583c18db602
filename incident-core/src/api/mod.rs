use crate::error::ClientError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Write;

mod auth;
mod incidents;
mod technicians;
mod users;

/// Percent-encodes one path segment. Everything outside the RFC 3986 unreserved set
/// is escaped, so `/`, `?` and `#` in a username or id stay inside the segment.
pub(crate) fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte))
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request against the backend. `path` is relative to the configured API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))?);
        Ok(self)
    }

    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(ToString::to_string);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back the raw status and body. Network failures are
/// `ClientError::Transport`; HTTP error statuses are returned as ordinary responses.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Stateless wrapper over the backend's REST endpoints. No retries, no caching.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::debug!("{} {} -> {}", method.as_str(), path, response.status);
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn fetch_text(&self, request: ApiRequest) -> Result<String, ClientError> {
        Ok(self.execute(request).await?.body)
    }
}


#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses in order and records every request it saw.
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub responses: RefCell<VecDeque<Result<ApiResponse, ClientError>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, err: ClientError) -> Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".into())))
        }
    }
}
