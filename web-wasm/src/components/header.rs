//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Turners Insurance"</h1>
            <p class="subtitle">"AI-Powered Vehicle Classification"</p>
        </header>
    }
}
