//! Pure activation logic for subtab groups.
//!
//! The planner is deliberately DOM-free: the adapter in `super::dom` reads
//! the link list into [`TabEntry`] view-models, asks [`plan_activation`] what
//! to do, and applies the resulting decisions. That keeps every precedence
//! rule (explicit request vs. URL fragment vs. first-tab default) testable
//! without a browser.

/// View-model of one navigation link inside a subtabs header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    /// Page identifier from the `data-tab` attribute. Empty when the
    /// attribute is missing; such links are ignored.
    pub page: String,
    /// External links navigate away and never take part in in-page switching.
    pub external: bool,
    /// Whether the `tab-<page>` panel exists in the document. A tab without
    /// a panel stays inert: it is skipped, not errored on.
    pub has_panel: bool,
}

impl TabEntry {
    fn is_candidate(&self) -> bool {
        !self.external && !self.page.is_empty()
    }
}

/// One visibility decision produced by [`plan_activation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDecision {
    /// Index into the entry slice the plan was computed from.
    pub index: usize,
    /// Whether this tab becomes the active one (link marked, panel shown).
    pub show: bool,
}

/// Computes the activation plan for one group.
///
/// `requested` is the already-resolved effective page id; an empty string
/// means "use the group default" (the first in-page tab wins).
///
/// Returns `None` when a non-empty `requested` page is not declared by any
/// in-page tab of this group: the group belongs to a different part of the
/// document and must be left exactly as it is.
///
/// Otherwise the returned decisions carry at most one `show == true`. Tabs
/// without a panel get no decision (their link class is left alone), except
/// for the fallback case: when nothing matched, the first in-page tab is
/// force-activated so a group with at least one in-page tab never ends up
/// with zero active tabs.
pub fn plan_activation(entries: &[TabEntry], requested: &str) -> Option<Vec<TabDecision>> {
    if !requested.is_empty() && !entries.iter().any(|e| e.is_candidate() && e.page == requested) {
        return None;
    }

    let mut open = requested.to_string();
    let mut first: Option<usize> = None;
    let mut got_active = false;
    let mut decisions = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_candidate() {
            continue;
        }

        if open.is_empty() {
            open = entry.page.clone();
        }
        if first.is_none() {
            first = Some(index);
        }

        if !entry.has_panel {
            continue;
        }

        let show = entry.page == open;
        decisions.push(TabDecision { index, show });
        if show {
            got_active = true;
        }
    }

    if !got_active {
        if let Some(index) = first {
            match decisions.iter_mut().find(|d| d.index == index) {
                Some(decision) => decision.show = true,
                None => decisions.insert(0, TabDecision { index, show: true }),
            }
        }
    }

    Some(decisions)
}
