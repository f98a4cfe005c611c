//! UI Components

use leptos::prelude::*;

/// Inline error text under an input; renders empty when there is no error
#[component]
pub fn InlineError(message: Signal<String>) -> impl IntoView {
    view! {
        <span class="error">{move || message.get()}</span>
    }
}
