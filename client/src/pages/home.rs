//! The portfolio page: preloader first, then every section.
//!
//! ARCHITECTURE
//! ============
//! `PageState` starts in `Loading`, where only the preloader is rendered.
//! The preloader's completion callback moves it to `Loaded`, which mounts
//! `MainContent` and fades it in. Sections wire their own reveals when they
//! mount, so nothing observes the page while the preloader is up.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::achievements::Achievements;
use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::preloader::Preloader;
use crate::components::projects::Projects;
use crate::state::page::PageState;
use crate::util::scroll;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = RwSignal::new(PageState::default());

    let on_loaded = Callback::new(move |()| {
        let changed = page.try_update(PageState::mark_loaded).unwrap_or(false);
        if changed {
            log::info!("preloader finished; mounting content");
        }
    });

    Effect::new(move |_| scroll::set_smooth_scrolling(true));
    on_cleanup(|| scroll::set_smooth_scrolling(false));

    view! {
        <Show when=move || page.get().is_loaded() fallback=move || view! { <Preloader on_complete=on_loaded /> }>
            <MainContent />
        </Show>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let root = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::page::content_fade_in;
        use crate::util::motion::{html, use_motion_scope, when_mounted};
        use crate::util::timeline::{Position, Timeline};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let Some(root) = root.get() else {
                return false;
            };
            s.entrance(Timeline::new().add(0, content_fade_in(), Position::At(0.0)), vec![html(root)]);
            true
        });
    }

    view! {
        <div node_ref=root class="site" style="opacity: 0;">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Education />
                <Experience />
                <Achievements />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
