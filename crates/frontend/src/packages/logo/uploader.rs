//! Logo upload widget for the package admin form.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::validation;

/// Monotonic stamp identifying one file selection.
///
/// Dimension probes finish asynchronously, so a slow probe for an earlier
/// file can outlive the selection it belongs to. Each selection takes the
/// next generation, and a probe applies its result only while its own
/// generation is still the latest one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Generation(u64);

impl Generation {
    fn next(self) -> Generation {
        Generation(self.0 + 1)
    }

    fn is_current(self, latest: Generation) -> bool {
        self == latest
    }
}

/// File picker with live preview and validation. The submit button stays
/// disabled until a file passes every blocking check; dimension checks run
/// once the browser has decoded the image.
#[component]
pub fn LogoUploader() -> impl IntoView {
    let (preview_url, set_preview_url) = signal(Option::<String>::None);
    let (error_text, set_error_text) = signal(String::new());
    let (can_upload, set_can_upload) = signal(false);
    let latest_selection = StoredValue::new(Generation::default());

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        let generation = latest_selection.with_value(|latest| latest.next());
        latest_selection.set_value(generation);

        set_can_upload.set(false);

        let report = validation::check_file(&file.type_(), file.size() as u64);
        set_error_text.set(report.text());

        let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) else {
            return;
        };
        set_preview_url.set(Some(url.clone()));

        // Dimensions are only known once the image has been decoded.
        leptos::task::spawn_local(async move {
            let Ok(image) = web_sys::HtmlImageElement::new() else {
                return;
            };
            image.set_src(&url);
            if JsFuture::from(image.decode()).await.is_err() {
                // undecodable file: leave the upload disabled
                return;
            }
            // a newer selection owns the widget by now; drop this result
            if !latest_selection.with_value(|latest| generation.is_current(*latest)) {
                return;
            }

            let mut blocking = report.blocking;
            if let Some(message) =
                validation::check_dimensions(image.natural_width(), image.natural_height())
            {
                set_error_text.update(|text| {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&message);
                });
                blocking = true;
            }
            set_can_upload.set(!blocking);
        });
    };

    view! {
        <div class="logo-uploader">
            <img
                class="packageLogo"
                class:hidden=move || preview_url.get().is_none()
                src=move || preview_url.get()
            />
            <span class="logoError">{move || error_text.get()}</span>
            <input type="file" accept="image/*" on:change=handle_file_select />
            <button
                type="submit"
                id="logo-upload-button"
                disabled=move || !can_upload.get()
            >
                "Upload"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_selection_advances_the_generation() {
        let first = Generation::default().next();
        let second = first.next();
        assert_ne!(first, second);
    }

    #[test]
    fn slow_probe_for_an_earlier_file_is_stale() {
        // Select file A, then file B before A's dimension probe finishes:
        // A's probe must not apply its result over B's selection.
        let a = Generation::default().next();
        let b = a.next();
        assert!(!a.is_current(b));
        assert!(b.is_current(b));
    }

    #[test]
    fn latest_selection_stays_current() {
        let only = Generation::default().next();
        assert!(only.is_current(only));
    }
}
