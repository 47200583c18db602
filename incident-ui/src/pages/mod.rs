mod add_user;
mod admin;
mod edit_user;
mod home;
mod login;
mod report_incident;
mod technician;

pub use add_user::AddUserPage;
pub use admin::AdminPage;
pub use edit_user::EditUserPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use report_incident::ReportIncidentPage;
pub use technician::TechnicianPage;

use crate::context::SessionContext;
use incident_core::{Role, Route};
use leptos::*;
use leptos_router::*;

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

fn role_options() -> impl IntoView {
    Role::KNOWN
        .into_iter()
        .map(|role| {
            view! { <option value=role.as_str().to_string()>{role.label().to_string()}</option> }
        })
        .collect_view()
}

/// Renders `children` only for sessions holding `role`. Advisory: the backend enforces
/// the real access rules.
#[component]
fn RoleGate(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notice = format!("This page requires the {} role.", role.label());
    let allowed = move || session.current().is_some_and(|s| s.role == role);

    view! {
      <Show
        when=allowed
        fallback=move || view! {
          <div class="notice">
            <p>{notice.clone()}</p>
            <A href=Route::Login.path()>"Sign in"</A>
          </div>
        }
      >
        {children()}
      </Show>
    }
}
