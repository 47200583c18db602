use crate::role::Role;
use crate::utility::deserialize_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Specialization {
    Network,
    Hardware,
    Software,
    Database,
    Security,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::Network,
        Specialization::Hardware,
        Specialization::Software,
        Specialization::Database,
        Specialization::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Specialization::Network => "network",
            Specialization::Hardware => "hardware",
            Specialization::Software => "software",
            Specialization::Database => "database",
            Specialization::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Specialization::Network => "Network",
            Specialization::Hardware => "Hardware",
            Specialization::Software => "Software",
            Specialization::Database => "Database",
            Specialization::Security => "Security",
        }
    }
}

impl FromStr for Specialization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NETWORK" => Ok(Specialization::Network),
            "HARDWARE" => Ok(Specialization::Hardware),
            "SOFTWARE" => Ok(Specialization::Software),
            "DATABASE" => Ok(Specialization::Database),
            "SECURITY" => Ok(Specialization::Security),
            other => Err(format!("invalid specialization '{other}'")),
        }
    }
}

impl TryFrom<String> for Specialization {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Specialization> for String {
    fn from(s: Specialization) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<Specialization>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reporter: Option<User>,
    #[serde(default)]
    pub assigned_technician: Option<User>,
}

impl Incident {
    pub fn is_open(&self) -> bool {
        self.status.as_deref() == Some(crate::config::OPEN_STATUS)
    }

    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority)
    }
}

pub const PRIORITY_LEVELS: [i32; 4] = [1, 2, 3, 4];

pub fn priority_label(priority: Option<i32>) -> &'static str {
    match priority {
        Some(1) => "Low",
        Some(2) => "Medium",
        Some(3) => "High",
        Some(4) => "Critical",
        _ => "Unassigned",
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<Specialization>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub status: String,
    pub creation_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecializationQuery {
    pub specializations: Vec<Specialization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_accepts_backend_shapes() {
        let raw = r#"{
          "id":"inc-1",
          "title":"router down",
          "description":"core switch unreachable",
          "category":"NETWORK",
          "status":"Open",
          "priority":3,
          "creationDate":1718000000000,
          "reporter":{"id":"u1","username":"bob","email":"bob@corp.io","role":"user","password":"x"},
          "assignedTechnician":{"id":"t1","username":"tech","email":"t@corp.io","role":"technician","specializations":["network"]}
        }"#;
        let incident: Incident = serde_json::from_str(raw).expect("incident");
        assert!(incident.is_open());
        assert_eq!(incident.priority_label(), "High");
        assert_eq!(
            incident.creation_date.map(|d| d.timestamp_millis()),
            Some(1_718_000_000_000)
        );
        let tech = incident.assigned_technician.expect("tech");
        assert_eq!(tech.specializations, vec![Specialization::Network]);
        assert_eq!(incident.reporter.map(|u| u.role), Some(Role::User));
    }

    #[test]
    fn incident_accepts_iso_date_and_missing_relations() {
        let raw = r#"{"title":"disk","status":"Resolved","creationDate":"2024-06-10T08:00:00Z"}"#;
        let incident: Incident = serde_json::from_str(raw).expect("incident");
        assert!(!incident.is_open());
        assert!(incident.reporter.is_none());
        assert_eq!(incident.priority_label(), "Unassigned");
        assert!(incident.creation_date.is_some());
    }

    #[test]
    fn out_of_range_priority_still_decodes() {
        let raw = r#"[{"title":"legacy","status":"Open","priority":1000},
                      {"title":"odd","status":"Open","priority":-2},
                      {"title":"fine","status":"Open","priority":1}]"#;
        let incidents: Vec<Incident> = serde_json::from_str(raw).expect("incidents");
        let labels: Vec<&str> = incidents.iter().map(Incident::priority_label).collect();
        assert_eq!(labels, vec!["Unassigned", "Unassigned", "Low"]);
        assert_eq!(incidents[0].priority, Some(1000));
    }

    #[test]
    fn specializations_accept_any_case() {
        assert_eq!("DATABASE".parse::<Specialization>(), Ok(Specialization::Database));
        assert_eq!("security".parse::<Specialization>(), Ok(Specialization::Security));
        assert!("plumbing".parse::<Specialization>().is_err());
        let json = serde_json::to_string(&Specialization::Hardware).expect("json");
        assert_eq!(json, "\"hardware\"");
    }

    #[test]
    fn new_user_omits_specializations_for_non_technicians() {
        let user = NewUser {
            username: "bob".into(),
            password: "secret1".into(),
            email: "bob@corp.io".into(),
            role: Role::User,
            specializations: None,
        };
        let value = serde_json::to_value(&user).expect("json");
        assert!(value.get("specializations").is_none());
        assert_eq!(value["role"], "user");
    }
}
