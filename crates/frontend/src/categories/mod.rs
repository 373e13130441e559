//! Category selection for the package search form.
//!
//! Contains:
//! - `tree` - the category tree model and pure cascade logic
//! - `selector` - the Leptos island rendering one `<select>` per level

pub mod selector;
pub mod tree;

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

use selector::CategorySelector;
use tree::Category;

/// Mounts the cascading selector into `#category-dynamic-form` when the page
/// carries one, hiding the static fallback form. Pages without the form (or
/// without a usable `window.categories` global) are left untouched.
pub fn mount_category_selector(document: &Document) {
    let Some(mount) = document
        .get_element_by_id("category-dynamic-form")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let Some(roots) = embedded_categories() else {
        log::warn!("categories: window.categories missing or malformed, keeping static form");
        return;
    };

    let initial = canonical_field(document)
        .map(|input| input.value())
        .unwrap_or_default();

    if let Some(static_form) = document
        .get_element_by_id("category-form")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = static_form.style().set_property("display", "none");
    }
    let _ = mount.style().set_property("display", "block");

    let on_change = Callback::new(|path: String| sync_canonical_field(&path));

    leptos::mount::mount_to(mount, move || {
        view! { <CategorySelector roots=roots initial=initial on_change=on_change /> }
    })
    .forget();
}

/// Reads the category tree the server embeds as `window.categories`.
fn embedded_categories() -> Option<Vec<Category>> {
    let window = web_sys::window()?;
    let global: &JsValue = window.as_ref();
    let value = js_sys::Reflect::get(global, &JsValue::from_str("categories")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

fn canonical_field(document: &Document) -> Option<HtmlInputElement> {
    document
        .get_element_by_id("category")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Mirrors the selection into the hidden `#category` input and fires its
/// `change` event so the surrounding form logic reacts.
fn sync_canonical_field(path: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(input) = canonical_field(&document) else {
        return;
    };
    if input.value() != path {
        input.set_value(path);
        if let Ok(ev) = web_sys::Event::new("change") {
            let _ = input.dispatch_event(&ev);
        }
    }
}
