//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page shell and the route guard while reading shared
//! state from Leptos context providers.

pub mod dashboard_layout;
pub mod navbar;
pub mod page_header;
pub mod protected_route;
pub mod sidebar;
