//! Achievements grid.

use leptos::prelude::*;

use crate::content::{ACHIEVEMENTS, section_id};
use crate::util::reveal::RevealSpec;
use crate::util::tween::Style;

pub fn cards_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(60.0).scale(0.95).blur(8.0), 800.0)
        .stagger(150.0)
        .start(0.85)
}

#[component]
pub fn Achievements() -> impl IntoView {
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
        <section id={section_id::ACHIEVEMENTS} node_ref=section class="section achievements">
            <div class="glow-orb achievements-orb-a"></div>
            <div class="glow-orb achievements-orb-b"></div>

            <div class="container narrow">
                <h2 node_ref=title class="section-title centered">
                    <span class="gradient-text">"Achievements"</span>
                </h2>

                <div node_ref=cards class="achievements-grid">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="glass-card achievement-card">
                                    <div class="card-icon">{achievement.icon.glyph()}</div>
                                    <div>
                                        <h3 class="card-title">{achievement.title}</h3>
                                        <p class="card-text">{achievement.description}</p>
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
