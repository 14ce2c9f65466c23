//! Fixed site header with desktop links and a mobile overlay menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::{Icon, NAV_LINKS, PROFILE};
use crate::util::easing::Ease;
use crate::util::scroll;
use crate::util::timeline::{Position, Timeline};
use crate::util::tween::{Style, Tween};

const NAV_CLASS: &str = "navbar";
const NAV_SCROLLED_CLASS: &str = "navbar navbar-scrolled";

/// Header slides down from above the viewport.
#[must_use]
pub fn navbar_entrance() -> Timeline {
    let drop_in = Tween::new(Style::HIDDEN.y(-100.0), Style::IDENTITY, 1000.0, Ease::Power3Out);
    Timeline::new().add(0, drop_in, Position::At(0.0))
}

/// Overlay panel slides in from the right edge; its links follow with a
/// stagger. Target 0 is the panel, targets `1..=link_count` the links.
#[must_use]
pub fn mobile_menu_entrance(panel_width_px: f64, link_count: usize) -> Timeline {
    let panel = Tween::new(Style::HIDDEN.x(panel_width_px), Style::IDENTITY, 500.0, Ease::Power3Out);
    let link = Tween::new(Style::HIDDEN.x(50.0), Style::IDENTITY, 400.0, Ease::Power2Out);
    let links: Vec<usize> = (1..=link_count).collect();
    Timeline::new()
        .add(0, panel, Position::At(0.0))
        .add_staggered(&links, link, 100.0, Position::At(200.0))
}

#[must_use]
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { NAV_SCROLLED_CLASS } else { NAV_CLASS }
}

/// Click handler for in-page links: cancel navigation and scroll smoothly.
fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if scroll::scroll_to_anchor(href) {
        ev.prevent_default();
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{html, use_motion_scope, when_mounted};

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let now = scroll::is_scrolled(scroll::scroll_y());
            if scrolled.get_untracked() != now {
                scrolled.set(now);
            }
        });
        on_cleanup(move || handle.remove());
        scrolled.set(scroll::is_scrolled(scroll::scroll_y()));

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let Some(nav) = nav_ref.get() else {
                return false;
            };
            s.entrance(navbar_entrance(), vec![html(nav)]);
            true
        });
    }

    let close_menu = Callback::new(move |()| menu_open.set(false));

    view! {
        <nav node_ref=nav_ref class=move || nav_class(scrolled.get())>
            <div class="container navbar-inner">
                <a href="#hero" class="navbar-logo gradient-text" on:click=move |ev| follow_anchor(&ev, "#hero")>
                    {PROFILE.initials}
                </a>

                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a href=href class="nav-link" on:click=move |ev| follow_anchor(&ev, href)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn-neon btn-small" on:click=move |ev| follow_anchor(&ev, "#contact")>
                        "Hire Me"
                    </a>
                </div>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { Icon::Close.glyph() } else { Icon::Menu.glyph() }}
                </button>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <MobileMenu on_close=close_menu />
        </Show>
    }
}

#[component]
fn MobileMenu(on_close: Callback<()>) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::{html, select_all, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let Some(panel) = panel_ref.get() else {
                return false;
            };
            let links = select_all(&panel, "a");
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(400.0);
            let mut targets = vec![html(panel)];
            let link_count = links.len();
            targets.extend(links);
            s.entrance(mobile_menu_entrance(width, link_count), targets);
            true
        });
    }

    let navigate = move |ev: leptos::ev::MouseEvent, href: &str| {
        on_close.run(());
        follow_anchor(&ev, href);
    };

    view! {
        <div node_ref=panel_ref class="mobile-menu-overlay">
            <button class="mobile-menu-close" aria-label="Close menu" on:click=move |_| on_close.run(())>
                {Icon::Close.glyph()}
            </button>
            {NAV_LINKS
                .iter()
                .map(|link| {
                    let href = link.href;
                    view! {
                        <a href=href class="mobile-menu-link" on:click=move |ev| navigate(ev, href)>
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
            <a href="#contact" class="btn-neon mobile-menu-cta" on:click=move |ev| navigate(ev, "#contact")>
                "Hire Me"
            </a>
        </div>
    }
}
