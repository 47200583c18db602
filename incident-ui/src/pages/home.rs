use crate::context::SessionContext;
use incident_core::Route;
use leptos::*;
use leptos_router::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    view! {
      <section class="home">
        <h1 class="text-3xl font-bold mb-4">"Incident Desk"</h1>
        <p class="mb-6">
          "Report incidents, follow them through to resolution, and manage the people who handle them."
        </p>
        {move || match session.current() {
            Some(s) => view! {
              <A href=s.landing_route().path()>{format!("Continue as {}", s.username)}</A>
            }
            .into_view(),
            None => view! { <A href=Route::Login.path()>"Sign in"</A> }.into_view(),
        }}
      </section>
    }
}
