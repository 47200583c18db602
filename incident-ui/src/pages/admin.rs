use super::{alert, confirm, RoleGate};
use crate::context::{Api, SessionContext};
use incident_core::filter::filter_users;
use incident_core::model::User;
use incident_core::{Role, Route};
use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
      <RoleGate role=Role::Admin>
        <UserManagement/>
      </RoleGate>
    }
}

#[component]
fn UserManagement() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let users = create_rw_signal(Vec::<User>::new());
    let search = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let filtered = create_memo(move |_| {
        search.with(|term| {
            users.with(|all| filter_users(all, term).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let load_users = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_users().await {
                    Ok(list) => {
                        users.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("error loading users: {err}");
                        error.set(Some(err.user_message()));
                    }
                }
            });
        }
    };

    let delete_user = {
        let api = api.clone();
        let load_users = load_users.clone();
        move |id: String| {
            if !confirm("Do you really want to delete this user?") {
                return;
            }
            let api = api.clone();
            let load_users = load_users.clone();
            spawn_local(async move {
                match api.delete_user(&id).await {
                    Ok(text) => {
                        tracing::debug!("delete {id}: {text}");
                        load_users();
                        alert("User deleted successfully");
                    }
                    Err(err) => {
                        tracing::error!("error deleting user {id}: {err}");
                        alert("There was an error while deleting the user.");
                    }
                }
            });
        }
    };

    load_users();

    let logout = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| {
            let route = session.logout();
            navigate(&route.path(), Default::default());
        }
    };

    view! {
      <section class="admin">
        <header class="row">
          <h2 class="text-2xl font-bold">"User Management"</h2>
          <A href=Route::AddUser.path()>"Add user"</A>
          <button on:click=logout>"Logout"</button>
        </header>

        <input
          type="search"
          placeholder="Search by username or role"
          prop:value=move || search.get()
          on:input=move |ev| search.set(event_target_value(&ev))
        />

        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>

        <table class="w-full">
          <thead>
            <tr>
              <th>"Username"</th>
              <th>"Email"</th>
              <th>"Role"</th>
              <th>"Specializations"</th>
              <th></th>
            </tr>
          </thead>
          <tbody>
            <For
              each=move || filtered.get()
              key=|u| u.id.clone().unwrap_or_else(|| u.username.clone())
              children=move |user: User| {
                let id = user.id.clone().unwrap_or_default();
                let edit_route = Route::EditUser(id.clone()).path();
                let navigate = navigate.clone();
                let delete_user = delete_user.clone();
                let specs = user
                    .specializations
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                view! {
                  <tr>
                    <td>{user.username.clone()}</td>
                    <td>{user.email.clone()}</td>
                    <td>{user.role.label().to_string()}</td>
                    <td>{specs}</td>
                    <td class="row">
                      <button on:click=move |_| navigate(&edit_route, Default::default())>"Edit"</button>
                      <button on:click=move |_| delete_user(id.clone())>"Delete"</button>
                    </td>
                  </tr>
                }
              }
            />
          </tbody>
        </table>
      </section>
    }
}
