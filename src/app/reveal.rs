//! Binds the motion core to DOM elements.
//!
//! Everything here is scoped to the reactive owner that calls it: scroll
//! subscriptions go away with the owner, and running animation loops stop
//! writing styles once it is disposed.

use std::{
    cell::RefCell,
    mem,
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use leptos::{html::ElementType, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::motion::{Bounds, Direction, Frame, ScrollTrigger, Timeline, TriggerStart, Tween};

/// Fires once the element's top is 100px above the bottom of the viewport.
pub const FAR_START: TriggerStart = TriggerStart::top_at_bottom_minus(100.0);
/// Fires once the element's top is 50px above the bottom of the viewport.
pub const NEAR_START: TriggerStart = TriggerStart::top_at_bottom_minus(50.0);

/// Set when the reactive owner that created it is disposed.
#[derive(Debug, Clone)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    /// Tied to the current owner.
    pub fn scoped() -> Self {
        let flag = Arc::new(AtomicBool::new(false));
        on_cleanup({
            let flag = flag.clone();
            move || flag.store(true, Ordering::Relaxed)
        });
        Self(flag)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The page's vertical scroll offset, shared by everything that reacts to
/// scrolling so the window carries a single listener.
#[derive(Debug, Clone, Copy)]
pub struct WindowScroll(pub Signal<f64>);

impl WindowScroll {
    pub fn provide() -> Self {
        let (_, y) = use_window_scroll();
        let scroll = Self(y);
        provide_context(scroll);
        scroll
    }

    /// The provided offset, or a fresh listener outside of a provider.
    pub fn use_y() -> Signal<f64> {
        use_context::<Self>()
            .map(|s| s.0)
            .unwrap_or_else(|| use_window_scroll().1)
    }
}

#[derive(Debug, Clone, Copy)]
enum Select {
    Scope,
    Matching(&'static str),
}

/// A tween bound to elements of a component, started on mount or by a
/// one-shot scroll trigger on the scope element.
#[derive(Debug, Clone)]
pub struct Reveal {
    tween: Tween,
    targets: Select,
    trigger: Option<TriggerStart>,
}

impl Reveal {
    /// Animates the scope element itself, as soon as it is mounted.
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            targets: Select::Scope,
            trigger: None,
        }
    }

    /// Animates the scope's descendants matching `selector` instead.
    pub fn targets(mut self, selector: &'static str) -> Self {
        self.targets = Select::Matching(selector);
        self
    }

    /// Waits until the scope element reaches `start`.
    pub fn on_scroll(mut self, start: TriggerStart) -> Self {
        self.trigger = Some(start);
        self
    }
}

struct Binding {
    targets: Vec<HtmlElement>,
    trigger: Option<(Element, ScrollTrigger)>,
}

impl Binding {
    fn acquire(scope: Element, reveal: &Reveal) -> Option<Self> {
        let targets = match reveal.targets {
            Select::Scope => scope.clone().dyn_into::<HtmlElement>().ok().into_iter().collect(),
            Select::Matching(selector) => query_all(&scope, selector),
        };
        if targets.is_empty() {
            return None;
        }
        for el in &targets {
            apply_frame(el, reveal.tween.from_frame());
        }
        Some(Self {
            targets,
            trigger: reveal.trigger.map(|start| (scope, ScrollTrigger::new(start))),
        })
    }

    fn should_start(&mut self) -> bool {
        match &mut self.trigger {
            None => true,
            Some((el, trigger)) => trigger.observe(bounds(el), viewport_height()),
        }
    }
}

enum Slot {
    Unmounted,
    Armed(Binding),
    Done,
}

/// Binds `reveal` to the element behind `scope`.
///
/// If the element never mounts, or the reveal's selector matches nothing, the
/// reveal is skipped. Once it has started, it stops following the scroll.
pub fn use_reveal<E>(scope: NodeRef<E>, reveal: Reveal)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let cancelled = Cancellation::scoped();
    let scroll_y = reveal.trigger.map(|_| WindowScroll::use_y());

    let mut slot = Slot::Unmounted;
    Effect::new(move |_| {
        // returning before any read leaves the effect with no dependencies
        if matches!(slot, Slot::Done) {
            return;
        }
        if let Some(scroll_y) = scroll_y {
            scroll_y.track();
        }
        if matches!(slot, Slot::Unmounted) {
            let Some(scope) = scope.get() else {
                return;
            };
            slot = match Binding::acquire(scope.unchecked_into(), &reveal) {
                Some(binding) => Slot::Armed(binding),
                None => {
                    log::debug!("nothing to reveal for {:?}", reveal.targets);
                    Slot::Done
                }
            };
        }
        let Slot::Armed(binding) = &mut slot else {
            return;
        };
        if binding.should_start() {
            let targets = mem::take(&mut binding.targets);
            slot = Slot::Done;
            animate(Rc::new(Run {
                targets,
                tween: reveal.tween.clone(),
                started_at: js_sys::Date::now(),
                cancelled: cancelled.clone(),
            }));
        }
    });
}

struct Run {
    targets: Vec<HtmlElement>,
    tween: Tween,
    started_at: f64,
    cancelled: Cancellation,
}

fn animate(run: Rc<Run>) {
    request_animation_frame(move || {
        if run.cancelled.is_cancelled() {
            return;
        }
        let elapsed = (js_sys::Date::now() - run.started_at) / 1000.0;
        for (i, el) in run.targets.iter().enumerate() {
            apply_frame(el, &run.tween.sample(elapsed, i));
        }
        if !run.tween.is_finished(elapsed, run.targets.len()) {
            animate(run);
        }
    });
}

struct PlayerState {
    timeline: Timeline,
    targets: Vec<Vec<HtmlElement>>,
    ticking: bool,
    last_tick: Option<f64>,
}

impl PlayerState {
    fn render(&self) {
        for (step, els) in self.targets.iter().enumerate() {
            for (i, el) in els.iter().enumerate() {
                if let Some(frame) = self.timeline.sample(step, i) {
                    apply_frame(el, &frame);
                }
            }
        }
    }
}

/// Plays a [`Timeline`] over DOM elements.
///
/// Create it in the component body and [`attach`](Self::attach) the elements
/// once they are mounted; runs requested before that only move the playhead.
#[derive(Clone)]
pub struct TimelinePlayer {
    state: Rc<RefCell<PlayerState>>,
    cancelled: Cancellation,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        let cancelled = Cancellation::scoped();
        let state = PlayerState {
            timeline,
            targets: Vec::new(),
            ticking: false,
            last_tick: None,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.is_cancelled()
    }

    pub fn is_attached(&self) -> bool {
        !self.state.borrow().targets.is_empty()
    }

    /// `targets[n]` holds the elements of the timeline's step `n`.
    pub fn attach(&self, targets: Vec<Vec<HtmlElement>>) {
        let mut state = self.state.borrow_mut();
        state.targets = targets;
        state.render();
    }

    pub fn run(&self, direction: Direction) {
        let start = {
            let mut state = self.state.borrow_mut();
            state.timeline.run(direction);
            let start = state.timeline.is_playing() && !state.ticking;
            if start {
                state.ticking = true;
                state.last_tick = None;
            }
            start
        };
        if start {
            tick(self.clone());
        }
    }
}

fn tick(player: TimelinePlayer) {
    request_animation_frame(move || {
        let now = js_sys::Date::now();
        let playing = {
            let mut state = player.state.borrow_mut();
            if player.is_cancelled() {
                state.ticking = false;
                return;
            }
            let dt = state.last_tick.map(|t| (now - t) / 1000.0).unwrap_or(0.0);
            state.last_tick = Some(now);
            let playing = state.timeline.advance(dt);
            state.render();
            state.ticking = playing;
            playing
        };
        if playing {
            tick(player);
        }
    });
}

pub fn query_all(scope: &Element, selector: &str) -> Vec<HtmlElement> {
    let list = match scope.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn apply_frame(el: &HtmlElement, frame: &Frame) {
    let style = el.style();
    for (property, value) in frame.declarations() {
        if let Err(e) = style.set_property(property, &value) {
            log::warn!("couldn't set {property}: {e:?}");
        }
    }
}

fn bounds(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        top: rect.top(),
        height: rect.height(),
    }
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::state::menu_timeline;

    #[test]
    fn test_cancellation_follows_owner() {
        let owner = Owner::new();
        let cancelled = owner.with(Cancellation::scoped);
        assert!(!cancelled.is_cancelled());
        owner.cleanup();
        assert!(cancelled.is_cancelled());
    }

    #[test]
    fn test_player_stops_with_owner() {
        let owner = Owner::new();
        let player = owner.with(|| TimelinePlayer::new(menu_timeline(4)));
        assert!(!player.is_cancelled());
        assert!(!player.is_attached());
        owner.cleanup();
        assert!(player.is_cancelled());
    }

    #[test]
    fn test_scroll_offset_is_shared() {
        let owner = Owner::new();
        owner.with(|| {
            WindowScroll::provide();
            let child = Owner::current().map(|o| o.child());
            let seen = child.map(|c| c.with(|| use_context::<WindowScroll>().is_some()));
            assert_eq!(seen, Some(true));
            assert_eq!(WindowScroll::use_y().get_untracked(), 0.0);
        });
    }
}
