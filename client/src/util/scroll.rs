//! Smooth scrolling to in-page sections.
//!
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Anchor ids of the page sections.
pub const SERVICES_SECTION: &str = "services";
pub const APPROACH_SECTION: &str = "approach";
pub const PROCESS_SECTION: &str = "how-it-works";
pub const CONSULTATION_SECTION: &str = "consultation-form";

/// `href` for an in-page link to the section with `id`.
#[must_use]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Scroll the element with `id` into view with smooth behavior.
///
/// Returns `false` when there is no such element (or no browser).
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
