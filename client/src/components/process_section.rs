//! "Our Process" section: four numbered steps.

use leptos::prelude::*;

use crate::util::scroll::PROCESS_SECTION;

/// `(title, description)` per step; the number is derived from position.
pub(crate) const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Discover", "We understand your sustainability and operational objectives."),
    ("Design", "We design lean data & AI architectures tailored for you."),
    ("Build", "We build and deploy production-grade systems."),
    ("Optimize", "We optimize for compliance, cost, and sustainable scale."),
];

/// Two-digit step label, 1-based.
pub(crate) fn step_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section id=PROCESS_SECTION class="section section--bordered">
            <div class="container">
                <h2 class="section-title section-title--spaced">"Our Process"</h2>
                <div class="grid grid--four">
                    {PROCESS_STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, desc))| {
                            view! {
                                <div class="card card--accent card--compact">
                                    <div class="step__number">{step_label(i)}</div>
                                    <h3 class="step__title">{title}</h3>
                                    <p class="card__text card__text--small">{desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
