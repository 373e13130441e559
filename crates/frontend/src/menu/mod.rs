//! Collapsible navigation menu enhancement for the `#cssmenu` block.
//!
//! Only one main dropdown may be open at a time. The mobile hamburger
//! toggles the whole menu but never claims the "currently open" slot, and a
//! click anywhere outside the menu closes whatever dropdown is open. The
//! open-item slot is local to the controller instance instead of a
//! process-wide global.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, Window};

type OpenItem = Rc<RefCell<Option<Element>>>;

pub struct MenuController {
    open_main_item: OpenItem,
}

impl MenuController {
    /// Wires up the navigation menu if the page has one.
    ///
    /// Pages that define the `cssmenu_no_js` global keep the pure-CSS menu
    /// and are left alone.
    ///
    /// All listener closures are intentionally leaked (`.forget()`): the menu
    /// lives for the lifetime of the page.
    pub fn install(document: &Document, window: &Window) {
        if no_js_opt_out(window) {
            return;
        }
        let Some(body) = document.body() else {
            return;
        };

        let controller = MenuController {
            open_main_item: Rc::new(RefCell::new(None)),
        };

        if let Ok(Some(hamburger)) = body.query_selector(".hamburger.expand-toggle") {
            if let Some(container) = hamburger.parent_element() {
                let open = controller.open_main_item.clone();
                let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
                    handle_toggle(&container, &ev, true, &open);
                }) as Box<dyn FnMut(MouseEvent)>);
                let _ = hamburger
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                on_click.forget();
            }
        }

        if let Ok(toggles) = body.query_selector_all("#cssmenu .expand-toggle") {
            for i in 0..toggles.length() {
                let Some(toggle) = toggles.get(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                if toggle.class_list().contains("hamburger") {
                    continue;
                }
                let Some(container) = toggle.parent_element() else {
                    continue;
                };
                let open = controller.open_main_item.clone();
                let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
                    handle_toggle(&container, &ev, false, &open);
                }) as Box<dyn FnMut(MouseEvent)>);
                let _ = toggle
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                on_click.forget();
            }
        }

        // Clicks outside the menu close the open dropdown.
        let open = controller.open_main_item;
        let on_window_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let mut open = open.borrow_mut();
            if let Some(item) = open.take() {
                let _ = item.class_list().remove_1("open");
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = window
            .add_event_listener_with_callback("click", on_window_click.as_ref().unchecked_ref());
        on_window_click.forget();
    }
}

/// Whether the server opted this page out of the enhanced menu by defining
/// the `cssmenu_no_js` global (any value counts, matching a `typeof` check).
fn no_js_opt_out(window: &Window) -> bool {
    let global: &JsValue = window.as_ref();
    js_sys::Reflect::get(global, &JsValue::from_str("cssmenu_no_js"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}

fn handle_toggle(container: &Element, ev: &MouseEvent, is_hamburger: bool, open: &OpenItem) {
    let _ = container.class_list().toggle("open");

    let mut open = open.borrow_mut();
    if let Some(previous) = open.as_ref() {
        if previous != container {
            let _ = previous.class_list().remove_1("open");
        }
    }

    // The hamburger toggles the whole menu on mobile; it never becomes the
    // tracked dropdown itself.
    if !is_hamburger {
        *open = if container.class_list().contains("open") {
            Some(container.clone())
        } else {
            None
        };
    }

    ev.stop_propagation();
}
