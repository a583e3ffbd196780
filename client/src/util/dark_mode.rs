//! Dark mode preference and toggle.
//!
//! Reads the learner's preference from the key-value store and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back through
//! the same store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the toggle still
//! takes effect for the current page. SSR paths never touch the DOM.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "edumentor_dark";

/// Read the dark mode preference.
///
/// A stored value wins; otherwise fall back to the system color scheme.
pub fn read_preference<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match store.get(STORAGE_KEY) {
        Some(val) => val == "true",
        None => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle<S: KeyValueStore + ?Sized>(store: &S, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set(STORAGE_KEY, if next { "true" } else { "false" }) {
        leptos::logging::warn!("dark mode preference not saved: {e}");
    }
    next
}
