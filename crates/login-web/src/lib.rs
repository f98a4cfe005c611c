//! login-form Web Frontend
//!
//! Leptos CSR page for the email/password login form. The whole form lives in
//! one `RwSignal<LoginForm>`: inputs write through `set_email`/`set_password`,
//! submit runs `begin_submit`, the request goes out on `spawn_local`, and
//! `finish_submit` settles it. Field errors, the form-level error and the
//! submit button's label and disabled state are all read back from the signal.
//! Successful logins are written to the browser console.

mod app;
mod pages;
mod components;
mod api;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
