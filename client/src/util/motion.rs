//! Browser driver for entrance timelines and scroll-reveal triggers.
//!
//! ARCHITECTURE
//! ============
//! Each component that animates acquires one [`MotionScope`] through
//! [`use_motion_scope`]. The scope owns everything the component wires up:
//! `IntersectionObserver`s and their callbacks, the target elements, one
//! `requestAnimationFrame` loop, and the pure playback state
//! ([`RevealSet`], entrance [`Timeline`]s). Releasing the scope disconnects
//! every observer and stops the frame loop; it runs from `on_cleanup` and
//! again from `Drop` when the owner disposes the stored value, so teardown
//! happens on every exit path.
//!
//! Only compiled with the `hydrate` feature.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::{RevealSet, RevealSpec, RevealTrigger, TriggerId, root_margin};
use super::timeline::{Playhead, Timeline};
use super::tween::Style;

/// Largest step fed to playheads, so a backgrounded tab resumes smoothly.
const MAX_FRAME_STEP_MS: f64 = 64.0;

// =============================================================================
// FRAME LOOP
// =============================================================================

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// The callback returns `false` to stop. Dropping the loop cancels the
/// pending frame; the closure itself is released on a later task so a loop
/// torn down from inside its own callback never frees running code.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Start ticking. Returns `None` outside a browser window.
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let handle_cb = Rc::clone(&handle);
        let callback_cb = Rc::downgrade(&callback);
        let window_cb = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle_cb.set(None);
            if !on_frame(ts) {
                return;
            }
            let Some(callback) = callback_cb.upgrade() else {
                return;
            };
            let next = callback
                .borrow()
                .as_ref()
                .and_then(|cb| window_cb.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            handle_cb.set(next);
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        first?;
        handle.set(first);
        Some(Self { handle, callback })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        if let Some(closure) = self.callback.borrow_mut().take() {
            leptos::task::spawn_local(async move {
                drop(closure);
            });
        }
    }
}

// =============================================================================
// DOM HELPERS
// =============================================================================

/// Write a sampled style to an element's inline style.
pub fn apply_style(element: &HtmlElement, style: &Style) {
    let css = element.style();
    let _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    let _ = css.set_property("transform", &style.transform());
    let _ = css.set_property("filter", &style.filter());
}

/// Element children of `parent`, in document order.
pub fn element_children(parent: &web_sys::Element) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Descendants of `root` matching `selector`, in document order.
pub fn select_all(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Upcast any element handle from a `NodeRef` to `HtmlElement`.
pub fn html(element: impl JsCast) -> HtmlElement {
    element.unchecked_into()
}

// =============================================================================
// SCOPE
// =============================================================================

struct ObserverSlot {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

struct Entrance {
    timeline: Timeline,
    playhead: Playhead,
    targets: Vec<HtmlElement>,
}

#[derive(Default)]
struct ScopeInner {
    reveals: RevealSet,
    reveal_targets: HashMap<TriggerId, Vec<HtmlElement>>,
    entrances: Vec<Entrance>,
    observers: Vec<ObserverSlot>,
    frames: Option<FrameLoop>,
    last_frame_ts: Option<f64>,
    released: bool,
}

impl ScopeInner {
    /// One animation frame. Returns `true` while anything is still moving.
    fn tick(&mut self, ts: f64) -> bool {
        let dt = self
            .last_frame_ts
            .map_or(0.0, |last| (ts - last).clamp(0.0, MAX_FRAME_STEP_MS));
        self.last_frame_ts = Some(ts);

        for id in self.reveals.advance(dt) {
            if let Some(targets) = self.reveal_targets.get(&id) {
                write_styles(targets, &self.reveals.styles(id));
            }
        }

        self.entrances.retain_mut(|entrance| {
            let moving = entrance.playhead.advance(dt);
            write_styles(&entrance.targets, &entrance.timeline.sample(entrance.playhead.position_ms()));
            moving
        });

        let busy = self.reveals.in_flight() > 0 || !self.entrances.is_empty();
        if !busy {
            self.last_frame_ts = None;
        }
        busy
    }
}

fn write_styles(targets: &[HtmlElement], styles: &[(usize, Style)]) {
    for (index, style) in styles {
        if let Some(element) = targets.get(*index) {
            apply_style(element, style);
        }
    }
}

fn ensure_ticking(inner: &Rc<RefCell<ScopeInner>>) {
    {
        let state = inner.borrow();
        if state.released || state.frames.as_ref().is_some_and(FrameLoop::is_running) {
            return;
        }
    }
    let weak = Rc::downgrade(inner);
    let frames = FrameLoop::start(move |ts| tick_weak(&weak, ts));
    inner.borrow_mut().frames = frames;
}

fn tick_weak(weak: &Weak<RefCell<ScopeInner>>, ts: f64) -> bool {
    let Some(inner) = weak.upgrade() else {
        return false;
    };
    let Ok(mut state) = inner.try_borrow_mut() else {
        return true;
    };
    !state.released && state.tick(ts)
}

/// Owner of one component's observers, playbacks, and frame loop.
pub struct MotionScope {
    inner: Rc<RefCell<ScopeInner>>,
}

impl MotionScope {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Rc::new(RefCell::new(ScopeInner::default())) }
    }

    /// Register a reversible scroll reveal: `anchor` crossing the threshold
    /// line plays `spec` across `targets` in order.
    pub fn reveal(&self, anchor: &web_sys::Element, targets: Vec<HtmlElement>, spec: RevealSpec) {
        if targets.is_empty() {
            log::debug!("reveal skipped: no targets");
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut state = self.inner.borrow_mut();
        if state.released {
            return;
        }

        let id = state.reveals.register(RevealTrigger::new(spec, targets.len()));
        write_styles(&targets, &state.reveals.styles(id));
        state.reveal_targets.insert(id, targets);

        let weak = Rc::downgrade(&self.inner);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let mut started = false;
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let top = entry.bounding_client_rect().top();
                let Ok(mut state) = inner.try_borrow_mut() else {
                    continue;
                };
                started |= state.reveals.observe(id, top, viewport).is_some();
            }
            if started {
                ensure_ticking(&inner);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&root_margin(spec.start));
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.0));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(anchor);
                state.observers.push(ObserverSlot { observer, _callback: callback });
            }
            Err(err) => {
                log::warn!("reveal observer unavailable: {err:?}");
                state.reveals.unregister(id);
                if let Some(targets) = state.reveal_targets.remove(&id) {
                    write_styles(&targets, &spec.timeline(targets.len()).sample(f64::MAX));
                }
            }
        }
    }

    /// Play a one-shot entrance timeline immediately.
    pub fn entrance(&self, timeline: Timeline, targets: Vec<HtmlElement>) {
        if timeline.is_empty() || targets.is_empty() {
            return;
        }
        {
            let mut state = self.inner.borrow_mut();
            if state.released {
                return;
            }
            write_styles(&targets, &timeline.sample(0.0));
            let mut playhead = Playhead::new(timeline.duration_ms());
            playhead.play();
            state.entrances.push(Entrance { timeline, playhead, targets });
        }
        ensure_ticking(&self.inner);
    }

    /// Disconnect observers, stop the frame loop, and drop every playback.
    pub fn release(&self) {
        let Ok(mut state) = self.inner.try_borrow_mut() else {
            return;
        };
        if state.released {
            return;
        }
        state.released = true;
        for slot in state.observers.drain(..) {
            slot.observer.disconnect();
        }
        state.frames.take();
        state.reveals.release();
        state.reveal_targets.clear();
        state.entrances.clear();
    }
}

impl Default for MotionScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MotionScope {
    fn drop(&mut self) {
        self.release();
    }
}

/// Acquire a scope tied to the current reactive owner.
pub fn use_motion_scope() -> StoredValue<MotionScope, LocalStorage> {
    let scope = StoredValue::new_local(MotionScope::new());
    on_cleanup(move || {
        let _ = scope.try_with_value(MotionScope::release);
    });
    scope
}

/// Run `wire` once every `NodeRef` it reads has mounted.
///
/// `wire` returns `false` while a ref is still missing; the effect re-runs
/// when that ref is set and stops after the first successful wiring.
pub fn when_mounted(scope: StoredValue<MotionScope, LocalStorage>, wire: impl Fn(&MotionScope) -> bool + 'static) {
    Effect::new(move |wired: Option<bool>| {
        if wired == Some(true) {
            return true;
        }
        scope.try_with_value(|s| wire(s)).unwrap_or(true)
    });
}
