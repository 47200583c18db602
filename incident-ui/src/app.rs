use crate::bridge::FetchTransport;
use crate::context::{Api, SessionContext};
use crate::pages::*;
use incident_core::config::Config;
use incident_core::route::EDIT_USER_PATTERN;
use incident_core::{ApiClient, Route as Page};
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_override(option_env!("INCIDENT_API_BASE"));
    tracing::debug!("api base {}", config.api_base);

    provide_context(SessionContext::init());
    provide_context::<Api>(ApiClient::new(FetchTransport::new(config)));

    view! {
      <Router>
        <main class="container mx-auto p-4">
          <Routes>
            <Route path=Page::Root.path() view=|| view! { <Redirect path=Page::Home.path()/> }/>
            <Route path=Page::Home.path() view=HomePage/>
            <Route path=Page::Login.path() view=LoginPage/>
            <Route path=Page::Admin.path() view=AdminPage/>
            <Route path=EDIT_USER_PATTERN view=EditUserPage/>
            <Route path=Page::AddUser.path() view=AddUserPage/>
            <Route path=Page::ReportIncident.path() view=ReportIncidentPage/>
            <Route path=Page::Technician.path() view=TechnicianPage/>
          </Routes>
        </main>
      </Router>
    }
}
