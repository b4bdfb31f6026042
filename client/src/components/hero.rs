//! Hero banner with the two call-to-action buttons.

use leptos::prelude::*;

use crate::util::scroll::{APPROACH_SECTION, CONSULTATION_SECTION, scroll_to_section};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="section hero">
            <div class="container">
                <div class="hero__body">
                    <div class="badge">
                        <span>"Sustainability × AI"</span>
                    </div>
                    <h1 class="hero__title">"Where Sustainability Meets Intelligent Systems"</h1>
                    <p class="hero__lead">
                        "We help organizations reduce environmental impact and operational cost using AI-driven automation and data-backed sustainability solutions."
                    </p>
                    <div class="hero__actions">
                        <button
                            class="button button--primary button--pill"
                            type="button"
                            on:click=move |_| {
                                scroll_to_section(CONSULTATION_SECTION);
                            }
                        >
                            "Get Started"
                        </button>
                        <button
                            class="button button--outline button--pill"
                            type="button"
                            on:click=move |_| {
                                scroll_to_section(APPROACH_SECTION);
                            }
                        >
                            "Explore More"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
