use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Technician,
    Other(String),
}

impl Role {
    pub const KNOWN: [Role; 3] = [Role::Admin, Role::User, Role::Technician];

    /// Case-insensitive and whitespace-tolerant.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            "technician" => Role::Technician,
            _ => Role::Other(raw.trim().to_string()),
        }
    }

    /// Only matches the three named roles, never [`Role::Other`].
    pub fn known(raw: &str) -> Option<Self> {
        match Self::parse(raw) {
            Role::Other(_) => None,
            role => Some(role),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Technician => "technician",
            Role::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Technician => "Technician",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landing route after a successful login.
pub fn route_for(role: &Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::User => Route::ReportIncident,
        Role::Technician => Route::Technician,
        Role::Other(_) => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_routes_per_role() {
        assert_eq!(route_for(&Role::parse("admin")).path(), "/admin");
        assert_eq!(route_for(&Role::parse("user")).path(), "/report-incident");
        assert_eq!(route_for(&Role::parse("technician")).path(), "/technician");
        assert_eq!(route_for(&Role::parse("auditor")).path(), "/home");
        assert_eq!(route_for(&Role::parse("")).path(), "/home");
    }

    #[test]
    fn parse_ignores_case_and_keeps_unknown_roles() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse(" Technician "), Role::Technician);
        assert_eq!(Role::parse("Auditor"), Role::Other("Auditor".into()));
        assert_eq!(Role::known("auditor"), None);
        assert_eq!(Role::known("User"), Some(Role::User));
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Role::Technician).expect("json");
        assert_eq!(json, "\"technician\"");
        let role: Role = serde_json::from_str("\"Admin\"").expect("role");
        assert_eq!(role, Role::Admin);
    }
}
