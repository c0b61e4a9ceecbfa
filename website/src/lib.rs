//! Browser host for the Gather page controller.
//!
//! Translates DOM events into controller messages and performs the actions
//! the controller hands back (the inquiry request, reveal observation).

pub mod fetch;
pub mod web_dom;

use std::cell::RefCell;
use std::rc::Rc;

use gather_app::dom::names;
use gather_app::{
    parse_site_config, run_submission, Controller, InputKey, Message, SiteConfig, UpdateAction,
};
use js_sys::{Array, Function};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MediaQueryListEvent,
};

use fetch::FetchTransport;
use web_dom::WebDom;

const SITE_CONFIG: &str = include_str!("../site.toml");
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type Shared = Rc<RefCell<Controller<WebDom>>>;

/// Embedded site settings, or the defaults if they fail to parse
pub fn site_config() -> SiteConfig {
    match parse_site_config(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded site.toml is invalid, using defaults: {e}");
            SiteConfig::default()
        }
    }
}

/// Attach the controller to the current page and wire every listener.
pub fn start(config: SiteConfig) {
    let dom = match WebDom::new() {
        Ok(dom) => dom,
        Err(e) => {
            log::warn!("page behavior disabled: {e}");
            return;
        }
    };
    let controller = match Controller::attach(dom, config) {
        Ok(controller) => Rc::new(RefCell::new(controller)),
        Err(e) => {
            log::error!("page controller not attached: {e}");
            return;
        }
    };

    let document = controller.borrow().dom().document().clone();
    if document.ready_state() == "loading" {
        let ctrl = controller.clone();
        let on_ready = Closure::once_into_js(move || on_dom_ready(&ctrl));
        listen(&document, "DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        on_dom_ready(&controller);
    }
}

fn on_dom_ready(controller: &Shared) {
    let reduced_motion = {
        let ctrl = controller.borrow();
        ctrl.dom()
            .window()
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|mql| mql.matches())
    };

    dispatch(controller, Message::DomReady { reduced_motion });

    install_click_listener(controller);
    install_key_listener(controller);
    install_breakpoint_listener(controller);
    install_form_listener(controller);
}

/// Run `message` through the controller and perform what it asks for
fn dispatch(controller: &Shared, message: Message<Element>) {
    let actions = match controller.try_borrow_mut() {
        Ok(mut ctrl) => ctrl.dispatch(message),
        Err(_) => {
            log::warn!("event dropped: controller busy ({message:?})");
            return;
        }
    };
    for action in actions {
        perform(controller, action);
    }
}

fn perform(controller: &Shared, action: UpdateAction<Element>) {
    match action {
        UpdateAction::SubmitInquiry { endpoint, payload } => {
            let ctrl = controller.clone();
            spawn_local(async move {
                let settled = run_submission(&FetchTransport, &endpoint, &payload).await;
                dispatch(&ctrl, settled);
            });
        }
        UpdateAction::ObserveReveals { targets } => observe_reveals(controller, targets),
    }
}

/// Register `callback` for `event`, logging a failed registration
fn listen(target: &EventTarget, event: &str, callback: &Function) {
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log::error!("failed to register {event} listener: {e:?}");
    }
}

fn install_click_listener(controller: &Shared) {
    let ctrl = controller.clone();
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        dispatch(&ctrl, Message::Click { target });
    }));
    let document = controller.borrow().dom().document().clone();
    listen(&document, "click", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn install_key_listener(controller: &Shared) {
    let ctrl = controller.clone();
    let callback = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |event: KeyboardEvent| {
        dispatch(&ctrl, Message::Key(InputKey::from_dom_key(&event.key())));
    }));
    let document = controller.borrow().dom().document().clone();
    listen(&document, "keydown", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn install_breakpoint_listener(controller: &Shared) {
    let (window, query) = {
        let ctrl = controller.borrow();
        (ctrl.dom().window().clone(), ctrl.config().desktop_media_query())
    };
    let Some(mql) = window.match_media(&query).ok().flatten() else {
        log::warn!("matchMedia unavailable for {query}");
        return;
    };

    let ctrl = controller.clone();
    let callback =
        Closure::<dyn FnMut(MediaQueryListEvent)>::wrap(Box::new(move |event: MediaQueryListEvent| {
            dispatch(
                &ctrl,
                Message::BreakpointChanged {
                    desktop: event.matches(),
                },
            );
        }));
    listen(&mql, "change", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn install_form_listener(controller: &Shared) {
    let Some(form) = controller
        .borrow()
        .dom()
        .document()
        .get_element_by_id(names::INQUIRY_FORM_ID)
    else {
        return;
    };

    let ctrl = controller.clone();
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        dispatch(&ctrl, Message::SubmitRequested);
    }));
    listen(&form, "submit", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn observe_reveals(controller: &Shared, targets: Vec<Element>) {
    let settings = controller.borrow().config().reveal.clone();

    let ctrl = controller.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                dispatch(&ctrl, Message::RevealIntersected { target });
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&settings.threshold.into());
    init.set_root_margin(&settings.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            log::debug!("observing {} reveal targets", targets.len());
        }
        Err(e) => log::error!("IntersectionObserver unavailable: {e:?}"),
    }
    callback.forget();
}
