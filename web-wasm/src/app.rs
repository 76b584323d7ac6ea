//! Main application component

use leptos::prelude::*;

use car_ai_common::data_url::extract_base64_from_data_url;
use car_ai_common::form::ClassifierForm;

use crate::api::classifier;
use crate::components::{header::Header, result_panel::ResultPanel, upload_area::UploadArea};
use crate::config::ApiConfig;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Endpoint picked once at startup, injected into the classify action
    let config = StoredValue::new(ApiConfig::resolve());

    // All form state lives in the shared controller
    let form = RwSignal::new(ClassifierForm::new());

    let has_selection = move || form.read().selected().is_some();
    let is_classifying = move || form.read().is_classifying();
    let error = move || form.read().error().map(|s| s.to_string());
    let outcome = Signal::derive(move || form.read().outcome().cloned());

    let on_classify = move |_| {
        let payload = form.with_untracked(|f| {
            f.preview()
                .and_then(extract_base64_from_data_url)
                .map(|s| s.to_string())
        });
        let Some(payload) = payload else {
            return;
        };

        // The controller refuses re-entrant submissions; without a
        // generation there is nothing to send.
        let mut generation = None;
        form.update(|f| generation = f.begin_classify());
        let Some(generation) = generation else {
            return;
        };

        leptos::task::spawn_local(async move {
            let config = config.get_value();
            let result = classifier::classify_vehicle(&config, &payload)
                .await
                .map_err(|e| e.to_string());
            form.update(|f| f.complete_classify(generation, result));
        });
    };

    let on_reset = move |_| form.update(|f| f.reset());

    view! {
        <div class="container">
            <Header />

            <main class="card">
                <div class="card-banner">
                    <h2>"Quick Vehicle Assessment"</h2>
                    <p>"Upload a photo of your vehicle to get instant classification powered by AI"</p>
                </div>

                <div class="card-body">
                    <UploadArea form=form />

                    <Show when=has_selection>
                        <div class="actions">
                            <button
                                class="btn btn-primary"
                                disabled=is_classifying
                                on:click=on_classify
                            >
                                {move || if is_classifying() { "Classifying..." } else { "Classify Vehicle" }}
                            </button>
                            <button class="btn btn-secondary" on:click=on_reset>
                                "Reset"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || error().is_some()>
                        <div class="error-banner">
                            <p>{move || error().unwrap_or_default()}</p>
                        </div>
                    </Show>

                    <Show when=move || outcome.get().is_some()>
                        <ResultPanel outcome=outcome />
                    </Show>
                </div>
            </main>

            <footer class="footer">
                <p>"Powered by AI | Body Type 97.6% | Brand 75.2% | Trained on 23,000+ images"</p>
            </footer>
        </div>
    }
}
