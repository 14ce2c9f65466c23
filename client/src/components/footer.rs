//! Site footer: logo, short navigation, credits, and drifting particles.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::{FOOTER_LINKS, FOOTER_PARTICLE_COUNT, Icon, PROFILE, footer_particles};
use crate::util::reveal::RevealSpec;
use crate::util::scroll;
use crate::util::tween::Style;

pub fn content_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(60.0).blur(8.0), 800.0).start(0.9)
}

fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if scroll::scroll_to_anchor(href) {
        ev.prevent_default();
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let footer = NodeRef::<leptos::html::Footer>::new();
    let content = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{html, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(footer), Some(content)) = (footer.get(), content.get()) else {
                return false;
            };
            s.reveal(&footer, vec![html(content)], content_reveal());
            true
        });
    }

    view! {
        <footer node_ref=footer class="footer">
            <div class="footer-particles" aria-hidden="true">
                {footer_particles(FOOTER_PARTICLE_COUNT)
                    .into_iter()
                    .map(|particle| view! { <div class="particle" style=particle.style()></div> })
                    .collect_view()}
            </div>
            <div class="glow-orb footer-orb"></div>

            <div node_ref=content class="container footer-content">
                <div class="footer-row">
                    <a href="#hero" class="footer-logo gradient-text" on:click=move |ev| follow_anchor(&ev, "#hero")>
                        {PROFILE.initials}
                    </a>

                    <nav class="footer-links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <a href=href class="footer-link" on:click=move |ev| follow_anchor(&ev, href)>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <p class="footer-credit">
                        "Made with " <span class="heart">{Icon::Heart.glyph()}</span> " by " {PROFILE.short_name}
                    </p>
                </div>

                <p class="footer-copyright">
                    "© " {current_year()} " " {PROFILE.name} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
