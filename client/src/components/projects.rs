//! Featured projects grid. Cards with a URL open it in a new tab.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::{Icon, PROJECTS, Project, section_id};
use crate::util::reveal::RevealSpec;
use crate::util::tween::Style;

pub fn cards_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(80.0).scale(0.9), 800.0)
        .stagger(200.0)
        .start(0.75)
}

/// The first card spans two columns on medium screens.
pub fn card_class(index: usize) -> &'static str {
    if index == 0 { "project-card-wrapper project-card-wide" } else { "project-card-wrapper" }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-media">
                <img src=project.image alt=project.title class="project-image" />
                <div class="project-media-shade"></div>
                <div class="project-badge">{project.icon.glyph()}</div>
            </div>
            <div class="project-body">
                <div class="project-heading">
                    <h3 class="card-title">{project.title}</h3>
                    <span class="project-arrow">{Icon::ArrowUpRight.glyph()}</span>
                </div>
                <p class="card-text">{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
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
        <section id={section_id::PROJECTS} node_ref=section class="section projects">
            <div class="glow-orb projects-orb-a"></div>
            <div class="glow-orb projects-orb-b"></div>

            <div class="container">
                <h2 node_ref=title class="section-title centered">
                    "Featured " <span class="gradient-text">"Projects"</span>
                </h2>

                <div node_ref=cards class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| match project.link {
                            Some(url) => {
                                view! {
                                    <a class=card_class(index) href=url target="_blank" rel="noopener noreferrer">
                                        {project_card(project)}
                                    </a>
                                }
                                    .into_any()
                            }
                            None => view! { <div class=card_class(index)>{project_card(project)}</div> }.into_any(),
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
