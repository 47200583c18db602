use std::fmt;

/// Router pattern for [`Route::EditUser`].
pub const EDIT_USER_PATTERN: &str = "/edit-user/:id";

/// Client-side routes. Access control is advisory only: views inspect the session role
/// to decide what to render, nothing blocks navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Home,
    Login,
    Admin,
    EditUser(String),
    AddUser,
    ReportIncident,
    Technician,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".into(),
            Route::Home => "/home".into(),
            Route::Login => "/login".into(),
            Route::Admin => "/admin".into(),
            Route::EditUser(id) => format!("/edit-user/{id}"),
            Route::AddUser => "/add-user".into(),
            Route::ReportIncident => "/report-incident".into(),
            Route::Technician => "/technician".into(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Some(Route::Root),
            ["home"] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["admin"] => Some(Route::Admin),
            ["edit-user", id] => Some(Route::EditUser((*id).to_string())),
            ["add-user"] => Some(Route::AddUser),
            ["report-incident"] => Some(Route::ReportIncident),
            ["technician"] => Some(Route::Technician),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
