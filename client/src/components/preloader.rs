//! Full-screen preloader shown before the site mounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the logo, progress bar, and percentage readout, and drives the
//! [`Preloader`] controller from `requestAnimationFrame`. Styles flow through
//! signals so the server-rendered first frame matches hydration. On
//! `Complete` the surface is hidden and `on_complete` runs on a later task;
//! unmounting cancels the controller first, so the callback can never fire
//! after teardown.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::state::preloader::{Preloader as Controller, PreloaderFrame};

#[component]
pub fn Preloader(on_complete: Callback<()>) -> impl IntoView {
    let frame = RwSignal::new(Controller::new().frame());
    let percentage = RwSignal::new(0_u8);
    let hidden = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let run = StoredValue::new_local(None::<run::PreloaderRun>);
        Effect::new(move |_| {
            run.set_value(Some(run::PreloaderRun::start(frame, percentage, hidden, on_complete)));
        });
        on_cleanup(move || {
            let _ = run.try_update_value(|r| {
                if let Some(r) = r.take() {
                    r.cancel();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_complete;

    let surface_style = move || {
        if hidden.get() {
            "display: none;".to_owned()
        } else {
            frame.get().surface.to_css()
        }
    };
    let style_of = move |pick: fn(&PreloaderFrame) -> String| move || frame.with(pick);

    view! {
        <div class="preloader" style=surface_style aria-busy="true">
            <div class="glow-orb preloader-orb preloader-orb-a"></div>
            <div class="glow-orb preloader-orb preloader-orb-b"></div>

            <div class="preloader-logo" style=style_of(|f| f.logo.to_css())>
                <h1 class="preloader-initials gradient-text">{PROFILE.initials}</h1>
                <p class="preloader-caption">"Loading Experience"</p>
            </div>

            <div class="progress-bar-container" style=style_of(|f| f.bar_container.to_css())>
                <div class="progress-bar" style=style_of(|f| format!("width: {:.2}%;", f.bar_width_pct))></div>
            </div>

            <span class="preloader-percentage" style=style_of(|f| f.percentage.to_css())>
                {move || percentage.get()}
                "%"
            </span>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod run {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use leptos::prelude::*;

    use crate::state::preloader::{Preloader, PreloaderEvent, PreloaderFrame};
    use crate::util::motion::FrameLoop;

    /// One live preloader run: the controller, its frame loop, and the flag
    /// that gates the completion callback.
    pub struct PreloaderRun {
        controller: Rc<RefCell<Preloader>>,
        alive: Rc<Cell<bool>>,
        frames: Option<FrameLoop>,
    }

    impl PreloaderRun {
        pub fn start(
            frame: RwSignal<PreloaderFrame>,
            percentage: RwSignal<u8>,
            hidden: RwSignal<bool>,
            on_complete: Callback<()>,
        ) -> Self {
            let controller = Rc::new(RefCell::new(Preloader::new()));
            let alive = Rc::new(Cell::new(true));

            let complete = {
                let alive = Rc::clone(&alive);
                move || {
                    hidden.set(true);
                    let alive = Rc::clone(&alive);
                    leptos::task::spawn_local(async move {
                        if alive.get() {
                            on_complete.run(());
                        }
                    });
                }
            };

            let mut origin: Option<f64> = None;
            let frames = FrameLoop::start({
                let controller = Rc::clone(&controller);
                let alive = Rc::clone(&alive);
                let complete = complete.clone();
                move |ts| {
                    if !alive.get() {
                        return false;
                    }
                    let elapsed = ts - *origin.get_or_insert(ts);
                    let Ok(mut preloader) = controller.try_borrow_mut() else {
                        return true;
                    };
                    let mut finished = false;
                    for event in preloader.advance(elapsed) {
                        match event {
                            PreloaderEvent::StageEntered(stage) => log::debug!("preloader stage: {stage:?}"),
                            PreloaderEvent::Progress(value) => percentage.set(value),
                            PreloaderEvent::Complete => finished = true,
                        }
                    }
                    frame.set(preloader.frame());
                    let running = !preloader.stage().is_terminal();
                    drop(preloader);
                    if finished {
                        complete();
                    }
                    running
                }
            });

            if frames.is_none() {
                log::warn!("animation frames unavailable; skipping preloader");
                if let Ok(mut preloader) = controller.try_borrow_mut() {
                    preloader.advance(f64::MAX);
                    frame.set(preloader.frame());
                    percentage.set(preloader.percentage());
                }
                complete();
            }

            Self { controller, alive, frames }
        }

        pub fn cancel(&self) {
            self.alive.set(false);
            if let Ok(mut preloader) = self.controller.try_borrow_mut() {
                preloader.cancel();
            }
            if let Some(frames) = &self.frames {
                frames.stop();
            }
        }
    }

    impl Drop for PreloaderRun {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}
