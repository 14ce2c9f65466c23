//! Contact section: form, submission feedback, and social links.
//!
//! Submitting validates the draft, makes one call to the relay endpoint, and
//! reports the outcome as a toast. The form and toast queue live in app
//! context so an in-flight submission still lands if the section unmounts.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::toast::notify;
use crate::content::{Icon, SOCIAL_LINKS, section_id};
use crate::net::api::send_contact_message;
use crate::state::contact::{ContactField, ContactForm, ContactFormError, SubmitOutcome, deliver};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::easing::Ease;
use crate::util::reveal::RevealSpec;
use crate::util::timeline::{Position, Timeline};
use crate::util::tween::{Style, Tween};

pub fn form_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.x(-50.0), 600.0)
        .stagger(150.0)
        .start(0.75)
}

pub fn social_reveal() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.scale(0.0), 500.0)
        .ease(Ease::back_out())
        .stagger(100.0)
        .start(0.85)
}

/// Button pulse after a successful send: up to 1.1 and back.
#[must_use]
pub fn submit_pulse() -> Timeline {
    let grow = Tween::new(Style::IDENTITY, Style::IDENTITY.scale(1.1), 200.0, Ease::Power2InOut);
    let shrink = Tween::new(Style::IDENTITY.scale(1.1), Style::IDENTITY, 200.0, Ease::Power2InOut);
    Timeline::new().add(0, grow, Position::At(0.0)).add(0, shrink, Position::End)
}

fn outcome_kind(outcome: &SubmitOutcome) -> ToastKind {
    if outcome.is_sent() { ToastKind::Success } else { ToastKind::Error }
}

/// The submit button if the section is still mounted. The reply can land
/// after the section (and its node ref) has been disposed.
#[cfg(any(test, feature = "hydrate"))]
fn live_button(button: NodeRef<leptos::html::Button>) -> Option<leptos::web_sys::HtmlButtonElement> {
    button.try_get_untracked().flatten()
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let section = NodeRef::<leptos::html::Section>::new();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let socials = NodeRef::<leptos::html::Div>::new();
    let submit_ref = NodeRef::<leptos::html::Button>::new();

    #[cfg(feature = "hydrate")]
    let scope = {
        use crate::util::motion::{element_children, select_all, use_motion_scope, when_mounted};

        let scope = use_motion_scope();
        when_mounted(scope, move |s| {
            let (Some(section), Some(form_el), Some(socials)) = (section.get(), form_ref.get(), socials.get()) else {
                return false;
            };
            s.reveal(&section, select_all(&section, ".contact-title"), RevealSpec::heading());
            s.reveal(&form_el, element_children(&form_el), form_reveal());
            s.reveal(&socials, element_children(&socials), social_reveal());
            true
        });
        scope
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        let message = match started {
            Ok(message) => message,
            Err(ContactFormError::AlreadySubmitting) => return,
            Err(err) => {
                notify(toasts, ToastKind::Error, "Check your details", &err.to_string());
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let outcome = deliver(message, |m| async move { send_contact_message(&m).await }).await;
            let _ = form.try_update(|f| f.finish(&outcome));
            let (title, description) = outcome.toast_text();
            notify(toasts, outcome_kind(&outcome), title, &description);

            #[cfg(feature = "hydrate")]
            {
                if outcome.is_sent()
                    && let Some(button) = live_button(submit_ref)
                {
                    let _ = scope.try_with_value(|s| s.entrance(submit_pulse(), vec![crate::util::motion::html(button)]));
                }
            }
        });
    };

    let field_value = move |field: ContactField| move || form.with(|f| f.draft.get(field).to_owned());
    let on_field = move |field: ContactField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.draft.set(field, value));
        }
    };
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <section id={section_id::CONTACT} node_ref=section class="section contact">
            <div class="glow-orb contact-orb-a"></div>
            <div class="glow-orb contact-orb-b"></div>

            <div class="container narrow centered">
                <h2 class="contact-title section-title">"Let's " <span class="gradient-text">"Connect"</span></h2>
                <p class="contact-title contact-lead">
                    "Have a project in mind or want to collaborate? I'd love to hear from you."
                </p>

                <form node_ref=form_ref class="contact-form" on:submit=on_submit novalidate=true>
                    <div class="form-element">
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            class="input"
                            prop:value=field_value(ContactField::Name)
                            on:input=on_field(ContactField::Name)
                        />
                    </div>
                    <div class="form-element">
                        <input
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            class="input"
                            prop:value=field_value(ContactField::Email)
                            on:input=on_field(ContactField::Email)
                        />
                    </div>
                    <div class="form-element">
                        <textarea
                            name="message"
                            placeholder="Your Message"
                            rows="5"
                            class="input textarea"
                            prop:value=field_value(ContactField::Message)
                            on:input=on_field(ContactField::Message)
                        ></textarea>
                    </div>
                    <div class="form-element">
                        <button node_ref=submit_ref type="submit" class="btn-neon btn-block" disabled=submitting>
                            {move || {
                                if submitting() {
                                    view! { <span class="spinner">"⏳"</span> " Sending..." }.into_any()
                                } else {
                                    view! { <span>{Icon::PaperPlane.glyph()}</span> " Send Message" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>

                <div node_ref=socials class="social-icons">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            let target = link.external.then_some("_blank");
                            let rel = link.external.then_some("noopener noreferrer");
                            view! {
                                <a href=link.href target=target rel=rel class="social-icon" aria-label=link.label>
                                    {link.icon.glyph()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
