pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

pub const STORAGE_TOKEN_KEY: &str = "jwtToken";
pub const STORAGE_USERNAME_KEY: &str = "username";
pub const STORAGE_ROLE_KEY: &str = "role";

pub const OPEN_STATUS: &str = "Open";
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    /// Builds a config from an optional override, falling back to [`DEFAULT_API_BASE`].
    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn from_override(api_base: Option<&str>) -> Self {
        let base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_override(None)
    }
}
