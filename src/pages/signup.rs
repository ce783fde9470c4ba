//! Registration page: name, email, and password with per-field validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns transient input state and the error mapping. Validation and
//! the focus chain live in `form`; account creation runs behind the submit
//! decision so the logic here stays testable without a browser. A failed
//! request surfaces as one blocking alert and leaves the field-level state
//! untouched.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::submit_button::SubmitButton;
use crate::form::controller::evaluate;
use crate::form::errors::FieldErrors;
use crate::form::focus::{dom_id, next_after};
use crate::form::schema::{Field, SignUpFormData};
use crate::net::types::NewUser;
use crate::util::focus::focus_dom_field;

/// Fixed alert shown when a submission fails past validation.
pub const SIGNUP_ALERT_TITLE: &str = "Sign-up failed";
/// Fixed alert body; no request detail is surfaced to the user.
pub const SIGNUP_ALERT_BODY: &str =
    "Something went wrong while creating your account. Please try again.";

/// Registration screen with logo, three-field form, and back-to-sign-in.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let submit = move || {
        if busy.get() {
            return;
        }
        let data = SignUpFormData {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };
        let mut accepted = None;
        errors.update(|map| accepted = decide_submission(&data, map));
        let Some(new_user) = accepted else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&new_user).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    log::error!("sign-up submission failed: {err}");
                    crate::util::alert::show_alert(SIGNUP_ALERT_TITLE, SIGNUP_ALERT_BODY);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_user;
            busy.set(false);
        }
    };

    // Keyboard advance: each field hands focus to its successor; the last
    // field submits the form.
    let advance_from = move |field: Field| match next_after(field) {
        Some(next) => focus_dom_field(next),
        None => submit(),
    };
    let on_name_enter = Callback::new(move |()| advance_from(Field::Name));
    let on_email_enter = Callback::new(move |()| advance_from(Field::Email));
    let on_password_enter = Callback::new(move |()| advance_from(Field::Password));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let navigate = use_navigate();
    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate("/", NavigateOptions::default());
    };

    let error_for = move |field: Field| {
        Signal::derive(move || errors.with(|map| map.message_for(field).map(ToOwned::to_owned)))
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <img class="signup-logo" src="/assets/logo.svg" alt="Parlor"/>
                <h1 class="signup-title">"Create your account"</h1>
                <form class="signup-form" on:submit=on_submit>
                    <FormInput
                        id=dom_id(Field::Name)
                        input_type="text"
                        autocomplete="name"
                        placeholder="Name"
                        icon="user"
                        value=name
                        error=error_for(Field::Name)
                        on_enter=on_name_enter
                    />
                    <FormInput
                        id=dom_id(Field::Email)
                        input_type="email"
                        autocomplete="email"
                        placeholder="Email"
                        icon="mail"
                        value=email
                        error=error_for(Field::Email)
                        on_enter=on_email_enter
                    />
                    <FormInput
                        id=dom_id(Field::Password)
                        input_type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        icon="key"
                        value=password
                        error=error_for(Field::Password)
                        on_enter=on_password_enter
                    />
                    <SubmitButton label="Sign up" busy=busy.into()/>
                </form>
            </div>
            <a class="signup-back" href="/" on:click=on_back>
                <span class="signup-back__icon" aria-hidden="true"></span>
                "Back to sign in"
            </a>
        </div>
    }
}

/// Apply one submit decision to the error map.
///
/// The map is cleared before validation runs, so repeated attempts are
/// idempotent and a later valid attempt never shows stale messages.
fn decide_submission(data: &SignUpFormData, errors: &mut FieldErrors) -> Option<NewUser> {
    errors.clear();
    match evaluate(data) {
        Ok(user) => Some(user),
        Err(mapped) => {
            *errors = mapped;
            None
        }
    }
}
