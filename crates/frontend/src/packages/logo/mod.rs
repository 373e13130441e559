//! Package logo handling: the admin upload widget and the edit-page preview
//! mirror.

pub mod uploader;
pub mod validation;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlInputElement};

use uploader::LogoUploader;

/// Mounts the upload widget into `#logo-uploader` on the admin page.
pub fn mount_logo_uploader(document: &Document) {
    let Some(mount) = document
        .get_element_by_id("logo-uploader")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    leptos::mount::mount_to(mount, LogoUploader).forget();
}

/// On the package edit page, re-points every logo preview in the collection
/// at the freshly selected file. The edit form's file input carries the
/// `logo-file` id.
///
/// The listener closure is intentionally leaked (`.forget()`): it lives for
/// the lifetime of the page.
pub fn enhance_logo_mirrors(document: &Document) {
    let Some(input) = document
        .get_element_by_id("logo-file")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let document = document.clone();
    let on_change = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) else {
            return;
        };

        if let Ok(images) = document.query_selector_all(".packageLogoCollection img.packageLogo")
        {
            for i in 0..images.length() {
                if let Some(img) = images
                    .get(i)
                    .and_then(|n| n.dyn_into::<HtmlImageElement>().ok())
                {
                    img.set_src(&url);
                }
            }
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
