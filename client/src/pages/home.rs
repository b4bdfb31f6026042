//! Landing page: every section of the single-page site, top to bottom.

use leptos::prelude::*;

use crate::components::approach_section::ApproachSection;
use crate::components::consultation_form::ConsultationFormSection;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::process_section::ProcessSection;
use crate::components::services_section::ServicesSection;
use crate::components::site_footer::SiteFooter;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__grid" aria-hidden="true"></div>
            <NavBar/>
            <Hero/>
            <ServicesSection/>
            <ApproachSection/>
            <ProcessSection/>
            <ConsultationFormSection/>
            <SiteFooter/>
        </div>
    }
}
