use crate::context::{Api, SessionContext};
use incident_core::model::Incident;
use incident_core::technician::{load_dashboard, TechnicianDashboard};
use incident_core::Route;
use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn TechnicianPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let dashboard = create_rw_signal(None::<TechnicianDashboard>);
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(true);

    {
        let current = session.current_untracked();
        spawn_local(async move {
            match load_dashboard(&api, current.as_ref()).await {
                Ok(d) => dashboard.set(Some(d)),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    }

    let specializations = move || {
        dashboard.with(|d| {
            d.as_ref()
                .map(|d| {
                    d.specializations
                        .iter()
                        .map(|s| s.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default()
        })
    };
    let open = move || {
        dashboard.with(|d| {
            d.as_ref()
                .map(|d| d.open_incidents().into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let logout = move |_: ev::MouseEvent| {
        let route = session.logout();
        navigate(&route.path(), Default::default());
    };

    view! {
      <section class="technician">
        <header class="row">
          <h2 class="text-2xl font-bold">"Technician dashboard"</h2>
          <button on:click=logout>"Logout"</button>
        </header>

        <Show when=move || loading.get() fallback=|| ()>
          <p class="meta">"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <div class="error">
            <p>{move || error.get().unwrap_or_default()}</p>
            <A href=Route::Login.path()>"Sign in"</A>
          </div>
        </Show>

        <p>
          <b>"Specializations: "</b>
          {specializations}
        </p>

        <h3>"Open incidents"</h3>
        <ul>
          <For
            each=open
            key=|i| i.id.clone().unwrap_or_else(|| i.title.clone())
            children=move |i: Incident| view! {
              <li>
                <div><b>{i.title.clone()}</b> <span class="meta">{format!("({})", i.priority_label())}</span></div>
                <div>{i.description.clone()}</div>
                <div class="meta">
                  {i.category.clone().unwrap_or_default()}
                  " "
                  {i.creation_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()}
                </div>
              </li>
            }
          />
        </ul>
      </section>
    }
}
