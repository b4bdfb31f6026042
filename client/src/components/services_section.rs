//! "Dual Expertise" section: one card per practice area.

use leptos::prelude::*;

use crate::util::scroll::SERVICES_SECTION;

pub(crate) struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub points: [&'static str; 4],
}

pub(crate) static SERVICE_CARDS: [ServiceCard; 2] = [
    ServiceCard {
        icon: "🌍",
        title: "Sustainability",
        tagline: "Carbon Emissions Reduction",
        points: [
            "Carbon emissions reduction strategies",
            "Supplier emissions tracking & optimization",
            "Supply chain decarbonization",
            "Emissions data collection & dashboards",
        ],
    },
    ServiceCard {
        icon: "⚡",
        title: "AI & Automation",
        tagline: "Intelligent Systems",
        points: [
            "AI-powered document processing",
            "Internal knowledge & decision systems",
            "LLM-based analytics and assistants",
            "Cost-optimized, production-grade AI systems",
        ],
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SERVICES_SECTION class="section section--bordered">
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-title">"Dual Expertise"</h2>
                    <p class="section-lead">
                        "Comprehensive solutions spanning sustainability and AI to drive real impact."
                    </p>
                </div>
                <div class="grid grid--two">
                    {SERVICE_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="card card--accent">
                                    <div class="card__icon">{card.icon}</div>
                                    <h3 class="card__title">{card.title}</h3>
                                    <p class="card__tagline">{card.tagline}</p>
                                    <ul class="card__points">
                                        {card
                                            .points
                                            .iter()
                                            .map(|point| {
                                                view! {
                                                    <li>
                                                        <span class="card__arrow">"→"</span>
                                                        <span>{*point}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
