//! Main App Component

use leptos::prelude::*;

use crate::pages::LoginPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <LoginPage />
        </main>
    }
}
