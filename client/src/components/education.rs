//! Education section: one card per degree.

use leptos::prelude::*;

use crate::content::{EDUCATION, Icon, section_id};
use crate::util::reveal::RevealSpec;
use crate::util::tween::Style;

pub fn cards_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(60.0).blur(8.0), 800.0)
        .stagger(200.0)
        .start(0.85)
}

#[component]
pub fn Education() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let title = NodeRef::<leptos::html::H2>::new();
    let cards = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{element_children, html, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(section), Some(title), Some(cards)) = (section.get(), title.get(), cards.get()) else {
                return false;
            };
            s.reveal(&section, vec![html(title)], RevealSpec::heading());
            s.reveal(&cards, element_children(&cards), cards_reveal());
            true
        });
    }

    view! {
        <section id={section_id::EDUCATION} node_ref=section class="section education">
            <div class="glow-orb education-orb-a"></div>
            <div class="glow-orb education-orb-b"></div>

            <div class="container narrow">
                <h2 node_ref=title class="section-title centered">
                    <span class="gradient-text">"Education"</span>
                </h2>

                <div node_ref=cards class="education-list">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="glass-card education-card">
                                    <div class="card-icon">{Icon::GraduationCap.glyph()}</div>
                                    <div class="card-body">
                                        <h3 class="card-title">{entry.institution}</h3>
                                        <p class="card-subtitle">{entry.degree}</p>
                                        <div class="card-meta">
                                            <span>{Icon::Calendar.glyph()} " " {entry.period}</span>
                                            <span>{Icon::MapPin.glyph()} " " {entry.location}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
