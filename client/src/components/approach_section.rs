//! "Why GreenSetu?" section.

use leptos::prelude::*;

use crate::util::scroll::APPROACH_SECTION;

/// `(icon, title, description)` per card.
pub(crate) const APPROACH_POINTS: [(&str, &str, &str); 4] = [
    (
        "⚙️",
        "Hybrid Expertise",
        "We combine deep sustainability domain knowledge with production-grade AI engineering. Most consultants specialize in one or the other. We do both, and do it well.",
    ),
    (
        "🏗️",
        "Real-World Systems",
        "We build production systems, not prototypes. Every solution is designed for scale, reliability, and cost optimization from day one.",
    ),
    (
        "📊",
        "Outcome-Driven",
        "We focus on measurable impact: reduced compliance costs, faster reporting, lower emissions footprint, and optimized operational efficiency.",
    ),
    (
        "💡",
        "No Buzzwords",
        "We speak plainly about capabilities and limitations. You get honest assessment and realistic timelines, not marketing hype.",
    ),
];

#[component]
pub fn ApproachSection() -> impl IntoView {
    view! {
        <section id=APPROACH_SECTION class="section section--bordered">
            <div class="container">
                <h2 class="section-title section-title--spaced">"Why GreenSetu?"</h2>
                <div class="grid grid--two">
                    {APPROACH_POINTS
                        .into_iter()
                        .map(|(icon, title, desc)| {
                            view! {
                                <div class="card">
                                    <div class="card__emoji">{icon}</div>
                                    <h3 class="card__title">{title}</h3>
                                    <p class="card__text">{desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
