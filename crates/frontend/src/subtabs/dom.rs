//! web-sys adapter between the activation planner and the page markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::model::{plan_activation, TabEntry};

fn panel_id(page: &str) -> String {
    format!("tab-{page}")
}

/// One `.subtabsHeader` container and the panels its links point at.
///
/// Groups are discovered once at boot; the link list itself is re-read on
/// every activation pass so the adapter never caches stale anchors.
pub struct SubtabGroup {
    header: Element,
}

impl SubtabGroup {
    /// Collects every subtabs container present in the document.
    pub fn discover(document: &Document) -> Vec<SubtabGroup> {
        let mut groups = Vec::new();
        if let Ok(nodes) = document.query_selector_all(".subtabsHeader") {
            for i in 0..nodes.length() {
                if let Some(header) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    groups.push(SubtabGroup { header });
                }
            }
        }
        groups
    }

    fn links(&self) -> Vec<Element> {
        let mut links = Vec::new();
        if let Ok(nodes) = self.header.query_selector_all("a.tab") {
            for i in 0..nodes.length() {
                if let Some(link) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    links.push(link);
                }
            }
        }
        links
    }

    fn entry_for(document: &Document, link: &Element) -> TabEntry {
        let page = link.get_attribute("data-tab").unwrap_or_default();
        let has_panel =
            !page.is_empty() && document.get_element_by_id(&panel_id(&page)).is_some();
        TabEntry {
            page,
            external: link.class_list().contains("external"),
            has_panel,
        }
    }

    /// Activates the tab matching `requested` in this group, leaving the
    /// group untouched when it does not own that page.
    pub fn activate(&self, document: &Document, requested: &str) {
        let links = self.links();
        let entries: Vec<TabEntry> = links
            .iter()
            .map(|link| Self::entry_for(document, link))
            .collect();

        let Some(decisions) = plan_activation(&entries, requested) else {
            return;
        };

        for decision in decisions {
            let link = &links[decision.index];
            let page = &entries[decision.index].page;

            if decision.show {
                let _ = link.class_list().add_1("active");
            } else {
                let _ = link.class_list().remove_1("active");
            }

            if let Some(panel) = document.get_element_by_id(&panel_id(page)) {
                show_panel(&panel, page, decision.show);
            }
        }
    }
}

/// Sets panel visibility, migrating legacy server markup on first touch.
///
/// Server pages render each panel with an in-page anchor (`<a name=...>`)
/// followed by an `<h2>` title so the content works without the enhancement
/// layer. Once the tab links take over navigation the anchor is removed and
/// the heading hidden; both steps are idempotent across repeated calls.
fn show_panel(panel: &Element, page: &str, show: bool) {
    let mut heading = panel.first_element_child();

    if let Some(first) = heading.clone() {
        if first.tag_name() == "A" && first.get_attribute("name").as_deref() == Some(page) {
            heading = first.next_element_sibling();
            first.remove();
        }
    }

    if let Some(h2) = heading.filter(|h| h.tag_name() == "H2") {
        if let Some(h2) = h2.dyn_ref::<HtmlElement>() {
            let _ = h2.style().set_property("display", "none");
        }
    }

    if let Some(panel) = panel.dyn_ref::<HtmlElement>() {
        let style = panel.style();
        let _ = if show {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }

    let _ = panel.class_list().add_1("js");
}
