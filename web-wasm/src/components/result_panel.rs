//! Classification result cards

use leptos::prelude::*;

use car_ai_common::types::{RankedPrediction, VehicleClassification};

#[component]
pub fn ResultPanel(outcome: Signal<Option<VehicleClassification>>) -> impl IntoView {
    view! {
        <div class="results">
            <h3>"Classification Results"</h3>
            {move || outcome.get().map(|result| view! {
                <div class="result-card body-type">
                    <div class="result-head">
                        <h4>"Vehicle Type"</h4>
                        <span class="confidence-badge">
                            {format!("{:.1}% Confident", result.body_type.confidence * 100.0)}
                        </span>
                    </div>
                    <p class="predicted-class">{result.body_type.predicted_class.clone()}</p>
                    <RankedList
                        title="Top 3 Predictions:"
                        predictions=result.body_type.top_3_predictions.clone()
                    />
                </div>
                <div class="result-card brand">
                    <div class="result-head">
                        <h4>"Vehicle Brand"</h4>
                        <span class="confidence-badge">
                            {format!("{:.1}% Confident", result.brand.confidence * 100.0)}
                        </span>
                    </div>
                    <p class="predicted-class">{result.brand.predicted_class.clone()}</p>
                    <RankedList
                        title="Top 5 Predictions:"
                        predictions=result.brand.top_5_predictions.clone()
                    />
                </div>
            })}
        </div>
    }
}

#[component]
fn RankedList(title: &'static str, predictions: Vec<RankedPrediction>) -> impl IntoView {
    view! {
        <div class="ranked-list">
            <p class="ranked-title">{title}</p>
            {predictions
                .into_iter()
                .map(|prediction| view! {
                    <div class="ranked-row">
                        <span>{prediction.label}</span>
                        <span class="ranked-confidence">
                            {format!("{:.2}%", prediction.confidence * 100.0)}
                        </span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
