//! Browser bindings for the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. These modules translate DOM
//! events into calls on the pure cores (`theme`, `reveal`, `interaction`) and
//! apply their results back to the page. Controllers live for the whole page,
//! so their event closures are intentionally leaked with `Closure::forget`;
//! the only per-activation closures (notifications) are dropped on removal.

pub mod interaction;
pub mod reveal;
pub mod storage;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::ShowcaseError;
use crate::reveal::{ObserverOptions, WatchSet};

pub(crate) fn window() -> Result<Window, ShowcaseError> {
    web_sys::window().ok_or(ShowcaseError::MissingCapability("window"))
}

pub(crate) fn document() -> Result<Document, ShowcaseError> {
    window()?.document().ok_or(ShowcaseError::MissingCapability("document"))
}

/// Log a failed DOM call instead of dropping it.
pub(crate) fn report<T>(result: Result<T, JsValue>, context: &str) {
    if let Err(err) = result {
        log::warn!("{context}: {}", ShowcaseError::from(err));
    }
}

/// Elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, ShowcaseError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .map(JsCast::unchecked_into::<Element>)
        .collect())
}

/// Like [`query_all`], keeping only HTML elements (styleable ones).
pub(crate) fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, ShowcaseError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    report(el.style().set_property(property, value), property);
}

/// Attach a listener that lives as long as the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ShowcaseError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Like [`listen`], marked passive so scrolling is never blocked.
pub(crate) fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ShowcaseError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Fire-and-forget delayed callback.
pub(crate) fn after(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}

/// Run `f` on the next animation frame, or immediately if the browser
/// refuses the request.
pub(crate) fn on_next_frame(window: &Window, f: impl FnOnce() + 'static) {
    let task: Box<dyn FnOnce()> = Box::new(f);
    let task = Rc::new(RefCell::new(Some(task)));
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let task_for_cb = Rc::clone(&task);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(task) = task_for_cb.borrow_mut().take() {
            task();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else if let Some(task) = task.borrow_mut().take() {
        task();
    }
}

fn has_intersection_observer(window: &Window) -> bool {
    matches!(js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")), Ok(true))
}

/// Visibility watcher that reports each element once, on its first
/// intersection, and then stops observing it.
pub(crate) struct OneShotWatcher {
    observer: IntersectionObserver,
    watched: Rc<RefCell<WatchSet<Element>>>,
}

impl OneShotWatcher {
    /// # Errors
    ///
    /// [`ShowcaseError::MissingCapability`] when the browser has no
    /// `IntersectionObserver`; callers skip the feature.
    pub(crate) fn new<F>(window: &Window, options: Option<&ObserverOptions>, mut on_first: F) -> Result<Self, ShowcaseError>
    where
        F: FnMut(&Element) + 'static,
    {
        if !has_intersection_observer(window) {
            return Err(ShowcaseError::MissingCapability("IntersectionObserver"));
        }

        let watched = Rc::new(RefCell::new(WatchSet::new()));
        let watched_for_cb = Rc::clone(&watched);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    let hit = watched_for_cb
                        .borrow_mut()
                        .handle(&entry.target(), entry.is_intersecting());
                    if let Some(el) = hit {
                        observer.unobserve(&el);
                        on_first(&el);
                    }
                }
            },
        );

        let observer = match options {
            Some(options) => {
                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(options.threshold));
                init.set_root_margin(&options.root_margin);
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
        };
        callback.forget();

        Ok(Self { observer, watched })
    }

    pub(crate) fn observe(&self, el: &Element) {
        if self.watched.borrow_mut().observe(el.clone()) {
            self.observer.observe(el);
        }
    }

    pub(crate) fn pending(&self) -> usize {
        self.watched.borrow().len()
    }
}
