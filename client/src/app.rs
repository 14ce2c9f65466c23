//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::content::PROFILE;
use crate::pages::home::HomePage;
use crate::state::contact::ContactForm;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared toast queue and contact draft, then routes every path
/// to the single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let contact = RwSignal::new(ContactForm::default());

    provide_context(toasts);
    provide_context(contact);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PROFILE.site_title/>
        <Meta name="description" content=PROFILE.tagline/>

        <Router>
            <Routes fallback=|| view! { <HomePage/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
