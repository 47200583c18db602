use super::{alert, role_options, RoleGate};
use crate::context::Api;
use incident_core::forms::NewUserForm;
use incident_core::model::Specialization;
use incident_core::{Role, Route};
use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AddUserPage() -> impl IntoView {
    view! {
      <RoleGate role=Role::Admin>
        <AddUserForm/>
      </RoleGate>
    }
}

#[component]
fn AddUserForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let form = create_rw_signal(NewUserForm::default());
    let error = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);
    let is_technician =
        move || form.with(|f| Role::known(&f.role) == Some(Role::Technician));

    let submit = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.with_untracked(NewUserForm::validate) {
                Ok(p) => p,
                Err(e) => {
                    error.set(Some(e));
                    return;
                }
            };
            error.set(None);
            pending.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api.create_user(&payload).await;
                pending.set(false);
                match result {
                    Ok(_) => {
                        navigate(&Route::Admin.path(), Default::default());
                        alert("User created successfully!");
                    }
                    Err(err) => {
                        tracing::error!("error creating user: {err}");
                        alert(&format!("Error: {}", err.user_message()));
                    }
                }
            });
        }
    };

    view! {
      <section class="add-user max-w-lg">
        <h2 class="text-2xl font-bold mb-6">"Add user"</h2>
        <form on:submit=submit class="stack">
          <input
            type="text"
            placeholder="Username"
            prop:value=move || form.with(|f| f.username.clone())
            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
          />
          <input
            type="password"
            placeholder="Password (6 characters minimum)"
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
          />
          <input
            type="email"
            placeholder="Email"
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
          />
          <select
            prop:value=move || form.with(|f| f.role.clone())
            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
          >
            <option value="">"Select a role"</option>
            {role_options()}
          </select>

          <Show when=is_technician fallback=|| ()>
            <fieldset>
              <legend>"Specializations"</legend>
              {Specialization::ALL
                  .into_iter()
                  .map(|spec| {
                      view! {
                        <label class="row">
                          <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.specializations.contains(&spec))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.toggle_specialization(spec, checked));
                            }
                          />
                          {spec.label()}
                        </label>
                      }
                  })
                  .collect_view()}
            </fieldset>
          </Show>

          <div class="row">
            <button type="submit" prop:disabled=move || pending.get()>"Create user"</button>
            <button type="button" on:click=move |_| navigate(&Route::Admin.path(), Default::default())>
              "Back"
            </button>
          </div>
        </form>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
      </section>
    }
}
