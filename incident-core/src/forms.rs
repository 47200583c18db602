use crate::config::{OPEN_STATUS, PASSWORD_MIN_LEN};
use crate::model::{LoginRequest, NewIncident, NewUser, Specialization, User, UserUpdate};
use crate::role::Role;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

fn required(value: &str, field: &str) -> Result<String, String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(v.to_string())
}

fn email(value: &str) -> Result<String, String> {
    let v = required(value, "Email")?;
    if !EMAIL_REGEX.is_match(&v) {
        return Err("Please enter a valid email".into());
    }
    Ok(v)
}

fn role(value: &str) -> Result<Role, String> {
    let v = required(value, "Role")?;
    Role::known(&v).ok_or_else(|| format!("invalid role '{v}'"))
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, String> {
        let username = required(&self.username, "Username")?;
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        Ok(LoginRequest {
            username,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct NewUserForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
    pub specializations: BTreeSet<Specialization>,
}

impl NewUserForm {
    pub fn toggle_specialization(&mut self, spec: Specialization, selected: bool) {
        if selected {
            self.specializations.insert(spec);
        } else {
            self.specializations.remove(&spec);
        }
    }

    /// Specializations are only sent when the role is technician.
    pub fn validate(&self) -> Result<NewUser, String> {
        let username = required(&self.username, "Username")?;
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(format!(
                "Password must be at least {PASSWORD_MIN_LEN} characters"
            ));
        }
        let email = email(&self.email)?;
        let role = role(&self.role)?;
        let specializations = match role {
            Role::Technician => Some(self.specializations.iter().copied().collect()),
            _ => None,
        };
        Ok(NewUser {
            username,
            password: self.password.clone(),
            email,
            role,
            specializations,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct EditUserForm {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl EditUserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<UserUpdate, String> {
        Ok(UserUpdate {
            username: required(&self.username, "Username")?,
            email: email(&self.email)?,
            role: role(&self.role)?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct IncidentReportForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

impl IncidentReportForm {
    /// New reports always start `Open`, stamped with the submission time.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewIncident, String> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let category = match self.category.trim() {
            "" => None,
            c => Some(
                c.parse::<Specialization>()
                    .map(|s| s.as_str().to_uppercase())
                    .map_err(|_| "Please select a category".to_string())?,
            ),
        };
        let priority = match self.priority.trim() {
            "" => None,
            p => match p.parse::<i32>() {
                Ok(level @ 1..=4) => Some(level),
                _ => return Err("Please select a priority".into()),
            },
        };
        Ok(NewIncident {
            title,
            description,
            category,
            priority,
            status: OPEN_STATUS.to_string(),
            creation_date: now,
        })
    }
}
