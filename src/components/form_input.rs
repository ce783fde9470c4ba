//! Single form field with icon, focus identity, and inline error message.

#[cfg(test)]
#[path = "form_input_test.rs"]
mod form_input_test;

use leptos::prelude::*;

/// Text input used by the account forms.
///
/// `id` ties the element to the focus chain; `on_enter` fires when the user
/// submits the field from the keyboard.
#[component]
pub fn FormInput(
    id: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    icon: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    on_enter: Callback<()>,
) -> impl IntoView {
    let container_class = move || input_container_class(error.get().is_some());
    let icon_class = icon_class_for(icon);

    view! {
        <div class=container_class>
            <span class=icon_class aria-hidden="true"></span>
            <input
                id=id
                class="form-input__field"
                type=input_type
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_enter.run(());
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <span class="form-input__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

fn input_container_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input form-input--error"
    } else {
        "form-input"
    }
}

fn icon_class_for(icon: &str) -> String {
    format!("form-input__icon form-input__icon--{icon}")
}
