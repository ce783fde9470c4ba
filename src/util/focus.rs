//! DOM focus driver for the field chain.

use crate::form::schema::Field;

/// Focus the input element bound to `field`. No-op outside the browser or
/// when the element is not mounted.
pub fn focus_dom_field(field: Field) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(crate::form::focus::dom_id(field)));
        if let Some(element) = element {
            if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = field;
    }
}
