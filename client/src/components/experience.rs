//! Work experience section laid out as an alternating timeline.

use leptos::prelude::*;

use crate::content::{EXPERIENCE, Icon, section_id};
use crate::util::reveal::RevealSpec;
use crate::util::tween::Style;

pub fn cards_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.x(-60.0), 800.0)
        .stagger(200.0)
        .start(0.75)
}

/// Even entries sit on the right of the line on wide screens.
pub fn card_class(index: usize) -> &'static str {
    if index % 2 == 0 { "experience-card experience-card-right" } else { "experience-card experience-card-left" }
}

#[component]
pub fn Experience() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let title = NodeRef::<leptos::html::H2>::new();
    let timeline = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{html, select_all, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(section), Some(title), Some(timeline)) = (section.get(), title.get(), timeline.get()) else {
                return false;
            };
            s.reveal(&section, vec![html(title)], RevealSpec::heading());
            s.reveal(&timeline, select_all(&timeline, ".experience-card"), cards_reveal());
            true
        });
    }

    view! {
        <section id={section_id::EXPERIENCE} node_ref=section class="section experience">
            <div class="glow-orb experience-orb-a"></div>
            <div class="glow-orb experience-orb-b"></div>

            <div class="container">
                <h2 node_ref=title class="section-title centered">
                    "Work " <span class="gradient-text">"Experience"</span>
                </h2>

                <div node_ref=timeline class="experience-timeline">
                    <div class="experience-line"></div>
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, job)| {
                            view! {
                                <div class=card_class(index)>
                                    <div class="experience-dot"></div>
                                    <div class="glass-card experience-body">
                                        <div class="experience-header">
                                            <div class="card-icon">{Icon::Briefcase.glyph()}</div>
                                            <div>
                                                <h3 class="card-title">{job.title}</h3>
                                                <p class="card-subtitle">{job.company}</p>
                                            </div>
                                        </div>
                                        <div class="card-meta">
                                            <span>{Icon::MapPin.glyph()} " " {job.location}</span>
                                            <span>{Icon::Calendar.glyph()} " " {job.period}</span>
                                        </div>
                                        <ul class="experience-points">
                                            {job.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                                        </ul>
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
