//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::consultation::ConsultationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the consultation form state and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let consultation = RwSignal::new(ConsultationState::default());
    provide_context(consultation);

    view! {
        <Stylesheet id="leptos" href="/pkg/greensetu.css"/>
        <Title text="GreenSetu | Sustainability × AI"/>
        <Meta
            name="description"
            content="Practical sustainability and AI systems: emissions reduction, supply chain decarbonization, and production-grade automation."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
