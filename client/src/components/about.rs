//! About section: portrait, bio, and the skills grid.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::content::{PROFILE, SKILLS, section_id};
use crate::util::easing::Ease;
use crate::util::reveal::RevealSpec;
use crate::util::tween::Style;

pub fn section_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.blur(10.0), 1000.0)
}

pub fn portrait_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.x(-100.0).rotate(-5.0), 1000.0).start(0.7)
}

pub fn bio_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.x(100.0), 1000.0).start(0.7)
}

pub fn skills_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(30.0).scale(0.8), 500.0)
        .ease(Ease::back_out())
        .stagger(100.0)
}

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let portrait = NodeRef::<leptos::html::Div>::new();
    let bio = NodeRef::<leptos::html::Div>::new();
    let skills = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{element_children, html, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(section), Some(portrait), Some(bio), Some(skills)) =
                (section.get(), portrait.get(), bio.get(), skills.get())
            else {
                return false;
            };
            s.reveal(&section, vec![html(section.clone())], section_reveal());
            s.reveal(&section, vec![html(portrait)], portrait_reveal());
            s.reveal(&section, vec![html(bio)], bio_reveal());
            s.reveal(&skills, element_children(&skills), skills_reveal());
            true
        });
    }

    view! {
        <section id={section_id::ABOUT} node_ref=section class="section about">
            <div class="glow-orb about-orb-a"></div>
            <div class="glow-orb about-orb-b"></div>

            <div class="container about-grid">
                <div node_ref=portrait class="about-portrait">
                    <div class="profile-glow">
                        <img src=PROFILE.image alt=PROFILE.name class="profile-image" />
                    </div>
                </div>

                <div node_ref=bio class="about-bio">
                    <h2 class="section-title">"About " <span class="gradient-text">"Me"</span></h2>
                    {PROFILE.bio.iter().map(|paragraph| view! { <p class="about-text">{*paragraph}</p> }).collect_view()}

                    <div node_ref=skills class="skills-grid">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="skill-item">
                                        <span class="skill-glyph">{skill.icon.glyph()}</span>
                                        <span class="skill-name">{skill.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
