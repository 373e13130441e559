//! Top-level subtabs controller: discovery, activation passes and the
//! `hashchange` wiring that keeps the active tab in step with the URL
//! fragment.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use super::dom::SubtabGroup;
use crate::shared::url_utils::current_fragment;

pub struct SubtabsController {
    groups: Vec<SubtabGroup>,
}

impl SubtabsController {
    /// Discovers every subtabs container present in the document. The set of
    /// groups is fixed from this point on; only activation state is
    /// recomputed afterwards.
    pub fn discover(document: &Document) -> Self {
        let groups = SubtabGroup::discover(document);
        log::debug!("subtabs: discovered {} group(s)", groups.len());
        Self { groups }
    }

    /// Runs one activation pass over every group.
    ///
    /// `requested` of `None` resolves the page id from the current URL
    /// fragment at call time; `Some("")` asks each group for its default
    /// (first in-page tab).
    pub fn activate_all(&self, requested: Option<&str>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let page = match requested {
            Some(page) => page.to_string(),
            None => current_fragment(),
        };
        for group in &self.groups {
            group.activate(&document, &page);
        }
    }

    /// Applies the initial activation (defaults, then the deep link if the
    /// URL carries a fragment) and attaches the `hashchange` listener.
    ///
    /// The listener closure is intentionally leaked (`.forget()`): it has to
    /// live for the lifetime of the page.
    pub fn install(self, window: &Window) {
        self.activate_all(Some(""));

        let fragment = current_fragment();
        if !fragment.is_empty() {
            self.activate_all(Some(&fragment));
        }

        let on_hashchange = Closure::wrap(Box::new(move || {
            self.activate_all(None);
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
        on_hashchange.forget();
    }
}
