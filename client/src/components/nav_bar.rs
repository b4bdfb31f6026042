//! Sticky top navigation with in-page anchors.

use leptos::prelude::*;

use crate::util::scroll::{APPROACH_SECTION, PROCESS_SECTION, SERVICES_SECTION, section_href};

/// Anchor label paired with the section it targets, in display order.
pub(crate) const NAV_LINKS: [(&str, &str); 3] = [
    ("Our Approach", APPROACH_SECTION),
    ("Services", SERVICES_SECTION),
    ("Process", PROCESS_SECTION),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav__inner">
                <div class="brand">"GreenSetu"</div>
                <div class="nav__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, id)| view! { <a href=section_href(id) class="nav__link">{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
