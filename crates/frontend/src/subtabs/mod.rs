//! Subtab navigation: keeps exactly one tab/panel pair active per group and
//! synchronizes the selection with the URL fragment in both directions.
//!
//! Contains:
//! - `model` - the pure activation planner (no DOM access)
//! - `dom` - adapter applying plans to `.subtabsHeader` markup
//! - `controller` - discovery, activation passes, `hashchange` wiring

pub mod controller;
pub mod dom;
pub mod model;

pub use controller::SubtabsController;
