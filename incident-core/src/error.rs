use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("invalid response payload: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text suitable for a message banner or alert.
    ///
    /// Plain-text error bodies from the backend are shown as-is; JSON bodies carrying an
    /// `error` or `message` field show that field.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => "Unable to reach the server. Please try again.".into(),
            ClientError::Status { status, body } => {
                body_message(body).unwrap_or_else(|| format!("Request failed ({status})"))
            }
            ClientError::Decode(_) => "The server sent an unexpected response.".into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => ["error", "message"]
            .iter()
            .find_map(|k| v.get(k).and_then(serde_json::Value::as_str))
            .map(ToString::to_string),
        Err(_) => Some(body.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("login response carried no token")]
    MissingToken,

    #[error("login response carried no username")]
    MissingUsername,

    #[error("login response carried no role")]
    MissingRole,

    #[error("session storage unavailable: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Client(ClientError::Status { status: 401, .. })
            | AuthError::Client(ClientError::Status { status: 404, .. }) => {
                "Invalid username or password.".into()
            }
            AuthError::Client(err) => err.user_message(),
            AuthError::Session(SessionError::Storage(_)) => {
                "Your session could not be saved in this browser.".into()
            }
            AuthError::Session(_) => "Login failed: the server did not issue a session.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("no username found in session storage")]
    MissingUsername,

    #[error("failed to load specializations: {0}")]
    Specializations(ClientError),

    #[error("failed to load incidents: {0}")]
    Incidents(ClientError),
}

impl DashboardError {
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::MissingUsername => "You are not signed in as a technician.".into(),
            DashboardError::Specializations(err) => {
                format!("Error fetching specializations: {}", err.user_message())
            }
            DashboardError::Incidents(err) => {
                format!("Error fetching incidents: {}", err.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_body_text() {
        let plain = ClientError::Status {
            status: 400,
            body: "Invalid specialization value".into(),
        };
        assert_eq!(plain.user_message(), "Invalid specialization value");

        let json = ClientError::Status {
            status: 409,
            body: r#"{"error":"username taken"}"#.into(),
        };
        assert_eq!(json.user_message(), "username taken");

        let empty = ClientError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(empty.user_message(), "Request failed (500)");
    }

    #[test]
    fn rejected_credentials_read_as_invalid_login() {
        let err = AuthError::from(ClientError::Status {
            status: 401,
            body: "Invalid password".into(),
        });
        assert_eq!(err.user_message(), "Invalid username or password.");
    }
}
