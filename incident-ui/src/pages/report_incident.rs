use crate::context::Api;
use chrono::Utc;
use incident_core::forms::IncidentReportForm;
use incident_core::model::{priority_label, Specialization, PRIORITY_LEVELS};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ReportIncidentPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let form = create_rw_signal(IncidentReportForm::default());
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let incident = match form.with_untracked(|f| f.validate(Utc::now())) {
            Ok(i) => i,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        submitting.set(true);
        submitted.set(false);
        error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.create_incident(&incident).await {
                Ok(_) => {
                    submitted.set(true);
                    form.set(IncidentReportForm::default());
                }
                Err(err) => {
                    tracing::error!("error reporting incident: {err}");
                    error.set(Some(
                        "Failed to submit incident report. Please try again.".into(),
                    ));
                }
            }
            submitting.set(false);
        });
    };

    view! {
      <section class="container mx-auto p-4">
        <h2 class="text-2xl font-bold mb-6">"Report an Incident"</h2>
        <form on:submit=submit class="max-w-2xl stack">
          <label class="block mb-2">"Title"</label>
          <input
            type="text"
            class="w-full p-2 border rounded"
            placeholder="Brief title describing the issue"
            prop:value=move || form.with(|f| f.title.clone())
            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
          />

          <label class="block mb-2">"Category"</label>
          <select
            class="w-full p-2 border rounded"
            prop:value=move || form.with(|f| f.category.clone())
            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
          >
            <option value="">"Select a category"</option>
            {Specialization::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str().to_uppercase()>{s.label()}</option> })
                .collect_view()}
          </select>

          <label class="block mb-2">"Priority"</label>
          <select
            class="w-full p-2 border rounded"
            prop:value=move || form.with(|f| f.priority.clone())
            on:change=move |ev| form.update(|f| f.priority = event_target_value(&ev))
          >
            <option value="">"Select a priority"</option>
            {PRIORITY_LEVELS
                .into_iter()
                .map(|p| view! { <option value=p.to_string()>{priority_label(Some(p))}</option> })
                .collect_view()}
          </select>

          <label class="block mb-2">"Description"</label>
          <textarea
            rows="6"
            class="w-full p-2 border rounded"
            placeholder="Detailed description of the issue"
            prop:value=move || form.with(|f| f.description.clone())
            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
          ></textarea>

          <button
            type="submit"
            class="w-full bg-blue-500 text-white p-2 rounded"
            prop:disabled=move || submitting.get()
          >
            {move || if submitting.get() { "Submitting..." } else { "Submit Incident Report" }}
          </button>
        </form>

        <Show when=move || submitted.get() fallback=|| ()>
          <div class="mt-4 p-4 bg-green-100 text-green-700 rounded">
            "Incident reported successfully!"
          </div>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <div class="mt-4 p-4 bg-red-100 text-red-700 rounded">
            {move || error.get().unwrap_or_default()}
          </div>
        </Show>
      </section>
    }
}
