//! Landing section: headline, subtitle, call to action, animated backdrop.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::content::{PROFILE, section_id};
use crate::util::easing::Ease;
use crate::util::scroll;
use crate::util::timeline::{Position, Timeline};
use crate::util::tween::{Style, Tween};

pub const HEADLINE: usize = 0;
pub const SUBTITLE: usize = 1;
pub const CTA: usize = 2;
pub const BACKDROP: usize = 3;

/// Headline, subtitle and CTA overlap as they rise in; the backdrop slides
/// in alongside them.
#[must_use]
pub fn hero_entrance() -> Timeline {
    let headline = Tween::new(Style::HIDDEN.y(60.0).blur(10.0), Style::IDENTITY, 1000.0, Ease::Power3Out);
    let subtitle = Tween::new(Style::HIDDEN.y(40.0).blur(8.0), Style::IDENTITY, 800.0, Ease::Power3Out);
    let cta = Tween::new(Style::HIDDEN.scale(0.8), Style::IDENTITY, 600.0, Ease::back_out());
    let backdrop = Tween::new(Style::HIDDEN.x(100.0), Style::IDENTITY, 1000.0, Ease::Power3Out);

    Timeline::new()
        .add(HEADLINE, headline, Position::End)
        .add(SUBTITLE, subtitle, Position::Relative(-500.0))
        .add(CTA, cta, Position::Relative(-300.0))
        .add(BACKDROP, backdrop, Position::Relative(-1000.0))
}

#[component]
pub fn Hero() -> impl IntoView {
    let headline = NodeRef::<leptos::html::H1>::new();
    let subtitle = NodeRef::<leptos::html::P>::new();
    let cta = NodeRef::<leptos::html::A>::new();
    let backdrop = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{html, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(h), Some(p), Some(a), Some(b)) = (headline.get(), subtitle.get(), cta.get(), backdrop.get())
            else {
                return false;
            };
            s.entrance(hero_entrance(), vec![html(h), html(p), html(a), html(b)]);
            true
        });
    }

    let on_hire = move |ev: leptos::ev::MouseEvent| {
        if scroll::scroll_to_anchor("#contact") {
            ev.prevent_default();
        }
    };

    view! {
        <section id={section_id::HERO} class="hero">
            <div node_ref=backdrop class="hero-backdrop">
                <div class="hero-sphere"></div>
                <div class="hero-overlay"></div>
            </div>

            <div class="glow-orb hero-orb hero-orb-a"></div>
            <div class="glow-orb hero-orb hero-orb-b"></div>
            <div class="glow-orb hero-orb hero-orb-c"></div>

            <div class="container hero-content">
                <h1 node_ref=headline class="hero-headline">
                    "Hi, I'm "
                    <span class="gradient-text text-glow">{PROFILE.name}</span>
                </h1>
                <p node_ref=subtitle class="hero-subtitle">
                    "Student at "
                    <span class="text-primary">{PROFILE.school}</span>
                    {PROFILE.roles.iter().map(|role| format!(" • {role}")).collect::<String>()}
                </p>
                <a node_ref=cta href="#contact" class="btn-neon pulse-glow" on:click=on_hire>
                    "Hire Me"
                </a>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>
        </section>
    }
}
