//! Sign-in page; navigation target of the registration screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Sign-in page with an email + password form.
///
/// Sessions are not wired to an account service yet; input problems surface
/// on a single info line rather than per field.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(email_value) => {
                info.set(format!("Sign-in for {email_value} is not available yet."));
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let navigate = use_navigate();
    let on_create_account = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate("/signup", NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <img class="login-logo" src="/assets/logo.svg" alt="Parlor"/>
                <h1 class="login-title">"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-create" href="/signup" on:click=on_create_account>
                    "Create your account"
                </a>
            </div>
        </div>
    }
}

/// Require both fields before any sign-in dispatch. Returns the trimmed
/// email.
fn validate_sign_in_input(email: &str, password: &str) -> Result<String, &'static str> {
    let trimmed = email.trim();
    if trimmed.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(trimmed.to_owned())
}
