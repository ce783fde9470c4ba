//! Busy-aware primary action button.

use leptos::prelude::*;

/// Form submit button; disabled while a submission is in flight.
#[component]
pub fn SubmitButton(label: &'static str, busy: Signal<bool>) -> impl IntoView {
    view! {
        <button class="form-button" type="submit" disabled=move || busy.get()>
            {label}
        </button>
    }
}
