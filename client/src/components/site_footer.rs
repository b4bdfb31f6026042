//! Page footer: tagline, navigation, contact.

use leptos::prelude::*;

use super::nav_bar::NAV_LINKS;
use crate::util::scroll::section_href;

pub(crate) const CONTACT_EMAIL: &str = "shreejadhav4625@gmail.com";

pub(crate) fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="grid grid--three footer__columns">
                    <div>
                        <h3 class="brand footer__brand">"GreenSetu"</h3>
                        <p class="footer__text">"Practical Sustainability and AI Systems for Real-World Impact"</p>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Navigation"</h4>
                        <ul class="footer__list">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(label, id)| view! { <li><a href=section_href(id) class="footer__link">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Contact"</h4>
                        <a href=mailto(CONTACT_EMAIL) class="footer__mail">{CONTACT_EMAIL}</a>
                    </div>
                </div>
                <div class="footer__legal">
                    <p>"© 2024 GreenSetu. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
