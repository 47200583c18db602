use crate::context::{Api, SessionContext};
use incident_core::forms::LoginForm;
use incident_core::AuthError;
use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let form = create_rw_signal(LoginForm::default());
    let message = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match form.with_untracked(LoginForm::validate) {
            Ok(c) => c,
            Err(e) => {
                message.set(Some(e));
                return;
            }
        };

        pending.set(true);
        message.set(None);
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = match api.login(&credentials).await {
                Ok(response) => session.complete_login(response),
                Err(err) => Err(AuthError::from(err)),
            };
            pending.set(false);
            match outcome {
                Ok(route) => navigate(&route.path(), Default::default()),
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    message.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
      <section class="login max-w-sm mx-auto">
        <h2 class="text-2xl font-bold mb-6">"Sign in"</h2>
        <form on:submit=submit class="stack">
          <input
            type="text"
            placeholder="Username"
            prop:value=move || form.with(|f| f.username.clone())
            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
          />
          <input
            type="password"
            placeholder="Password"
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
          />
          <button type="submit" prop:disabled=move || pending.get()>
            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
          </button>
        </form>
        <Show when=move || message.get().is_some() fallback=|| ()>
          <p class="error">{move || message.get().unwrap_or_default()}</p>
        </Show>
      </section>
    }
}
