//! Page bootstrap.
//!
//! One bundle serves every page of the site: each enhancement checks for its
//! anchor markup and quietly does nothing when the page does not carry it.

use crate::categories;
use crate::menu::MenuController;
use crate::packages;
use crate::subtabs::SubtabsController;

pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    MenuController::install(&document, &window);
    SubtabsController::discover(&document).install(&window);
    categories::mount_category_selector(&document);
    packages::logo::mount_logo_uploader(&document);
    packages::logo::enhance_logo_mirrors(&document);
}
