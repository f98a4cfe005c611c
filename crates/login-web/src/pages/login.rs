//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use login_core::LoginForm;

use crate::api;
use crate::components::InlineError;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Validation errors and the in-flight guard are applied inside begin_submit
        let Some(Ok(credentials)) = form.try_update(LoginForm::begin_submit) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = api::login(&credentials).await;
            if let Ok(response) = &result {
                leptos::logging::log!("{}", api::success_message(response));
            }
            form.update(|f| f.finish_submit(&result));
        });
    };

    let email_error = Signal::derive(move || form.with(|f| f.errors().email.clone()));
    let password_error = Signal::derive(move || form.with(|f| f.errors().password.clone()));
    let form_error = Signal::derive(move || form.with(|f| f.errors().form.clone()));

    view! {
        <div class="login">
            <div class="login-card">
                <form on:submit=submit>
                    <h1>"Login"</h1>

                    <div class="field">
                        <label>"Email:"</label>
                        <input
                            type="email"
                            name="email"
                            prop:value=move || form.with(|f| f.email().to_string())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                        <InlineError message=email_error />
                    </div>

                    <div class="field">
                        <label>"Password:"</label>
                        <input
                            type="password"
                            name="password"
                            prop:value=move || form.with(|f| f.password().to_string())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                        <InlineError message=password_error />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(LoginForm::submit_disabled)
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                    <InlineError message=form_error />
                </form>
            </div>
        </div>
    }
}
