use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage,
};

use crate::reveal::{ripple_geometry, RIPPLE_HOST_SELECTOR, RIPPLE_HOST_STYLE, RIPPLE_LIFETIME};
use crate::sections::{SectionBounds, SECTIONS};
use crate::theme::{StorageError, Theme, ThemeStore, ThemeSurface, THEME_ATTRIBUTE, THEME_KEY};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage` slot for the theme preference.
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(THEME_KEY, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

/// Sets `data-theme` on `<html>`, through a view transition when allowed.
pub struct DocumentThemeSurface {
    pub animate: bool,
}

impl ThemeSurface for DocumentThemeSurface {
    fn apply(&self, theme: Theme) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let Some(root) = document.document_element() else {
            return;
        };

        let transition = if self.animate && !reduced_motion() {
            view_transition(&document)
        } else {
            None
        };
        let Some(start) = transition else {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            return;
        };

        let deferred = root.clone();
        let update = Closure::once_into_js(move || {
            let _ = deferred.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        });
        if start.call1(&document, &update).is_err() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

fn reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// `document.startViewTransition`, where the browser has it.
fn view_transition(document: &Document) -> Option<Function> {
    Reflect::get(document, &JsValue::from_str("startViewTransition"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: section.id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.client_height()),
            })
        })
        .collect()
}

/// Smooth-scrolls to the element with `id`. Returns `false` when there is
/// no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn location_hash() -> Option<String> {
    window()?.location().hash().ok().filter(|hash| !hash.is_empty())
}

pub fn notify(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn mark_body_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}

/// An attached DOM event listener; dropping it detaches the listener.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn attach(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::attach(window()?.into(), event, handler)
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer watching a set of elements; dropping it
/// disconnects the observer.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn observe_all(
        selector: &str,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let document = window()?.document()?;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        let nodes = document.query_selector_all(selector).ok()?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn set_width(element: &Element, width: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("width", width);
    }
}

/// Appends a short-lived ripple span to the button under the click.
///
/// Yew delegates listeners to the app root, so the button is found from the
/// event target rather than `current_target`.
pub fn spawn_ripple(event: &MouseEvent) {
    let Some(button) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(RIPPLE_HOST_SELECTOR).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let ripple = ripple_geometry(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );
    let style = button.style();
    for (property, value) in RIPPLE_HOST_STYLE {
        let _ = style.set_property(property, value);
    }
    let _ = span.set_attribute("style", &ripple.to_css());
    if button.append_child(&span).is_err() {
        return;
    }

    Timeout::new(millis(RIPPLE_LIFETIME), move || span.remove()).forget();
}
