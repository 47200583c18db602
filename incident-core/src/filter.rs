use crate::model::{Incident, User};
use crate::role::Role;

/// Admin search box filter.
///
/// A term naming one of the known roles selects exactly that role. Any other term is a
/// case-insensitive substring match on username or role. An empty term keeps everything.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return users.iter().collect();
    }

    if let Some(role) = Role::KNOWN.into_iter().find(|r| r.as_str() == term) {
        return users.iter().filter(|u| u.role == role).collect();
    }

    users
        .iter()
        .filter(|u| {
            u.username.to_lowercase().contains(&term) || u.role.as_str().to_lowercase().contains(&term)
        })
        .collect()
}

pub fn open_incidents(incidents: &[Incident]) -> Vec<&Incident> {
    incidents.iter().filter(|i| i.is_open()).collect()
}
