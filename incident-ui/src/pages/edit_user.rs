use super::{role_options, RoleGate};
use crate::context::Api;
use incident_core::forms::EditUserForm;
use incident_core::{Role, Route};
use leptos::*;
use leptos_router::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn EditUserPage() -> impl IntoView {
    view! {
      <RoleGate role=Role::Admin>
        <EditUser/>
      </RoleGate>
    }
}

#[component]
fn EditUser() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let params = use_params_map();
    let user_id = move || params.with(|p| p.get("id").cloned());

    let form = create_rw_signal(EditUserForm::default());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    {
        let api = api.clone();
        create_effect(move |_| match user_id() {
            Some(id) => {
                let api = api.clone();
                spawn_local(async move {
                    match api.get_user(&id).await {
                        Ok(user) => form.set(EditUserForm::from_user(&user)),
                        Err(err) => {
                            tracing::error!("error loading user {id}: {err}");
                            error.set(Some("Error loading user details. Please try again.".into()));
                        }
                    }
                });
            }
            None => {
                tracing::error!("user id not found in route parameters");
                error.set(Some("No user selected.".into()));
            }
        });
    }

    let submit = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = params.with_untracked(|p| p.get("id").cloned()) else {
                return;
            };
            let update = match form.with_untracked(EditUserForm::validate) {
                Ok(u) => u,
                Err(_) => {
                    error.set(Some("Please fill in all required fields correctly.".into()));
                    success.set(None);
                    return;
                }
            };
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api.update_user(&id, &update).await {
                    Ok(_) => {
                        success.set(Some("User updated successfully!".into()));
                        error.set(None);
                        set_timeout(
                            move || navigate(&Route::Admin.path(), Default::default()),
                            Duration::from_millis(1500),
                        );
                    }
                    Err(err) => {
                        tracing::error!("error updating user {id}: {err}");
                        error.set(Some(
                            "Error updating user. Please check the form and try again.".into(),
                        ));
                        success.set(None);
                    }
                }
            });
        }
    };

    view! {
      <section class="edit-user max-w-lg">
        <h2 class="text-2xl font-bold mb-6">"Edit user"</h2>
        <form on:submit=submit class="stack">
          <input
            type="text"
            placeholder="Username"
            prop:value=move || form.with(|f| f.username.clone())
            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
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
          <div class="row">
            <button type="submit">"Save"</button>
            <button type="button" on:click=move |_| navigate(&Route::Admin.path(), Default::default())>
              "Cancel"
            </button>
          </div>
        </form>
        <Show when=move || success.get().is_some() fallback=|| ()>
          <p class="success">{move || success.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
      </section>
    }
}
