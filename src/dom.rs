use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::state::{clamp_offset, Section, Viewport};

/// Scrolls the real document.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn current_scroll_offset() -> u32 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(clamp_offset)
        .unwrap_or(0)
}

/// The URL fragment without its leading `#`, if there is a non-empty one.
pub fn location_fragment() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    (!fragment.is_empty()).then(|| fragment.to_string())
}

/// A `scroll` listener on `window` that is removed again when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// `on_scroll` receives the raw `window.scrollY` on every event.
    pub fn attach<F>(mut on_scroll: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let reader = window.clone();

        let callback = Closure::wrap(Box::new(move || match reader.scroll_y() {
            Ok(offset) => on_scroll(offset),
            Err(err) => warn!("Could not read scroll position: {:?}", err),
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        debug!("Scroll listener attached");

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("Scroll listener released"),
            Err(err) => warn!("Failed to release scroll listener: {:?}", err),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event};

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll() {
        let event = Event::new("scroll").unwrap();
        window().unwrap().dispatch_event(&event).unwrap();
    }

    fn scroll_y() -> f64 {
        window().unwrap().scroll_y().unwrap()
    }

    /// Appends a block tall enough to make the page scrollable.
    fn append_spacer() -> Element {
        let document = window().unwrap().document().unwrap();
        let spacer = document.create_element("div").unwrap();
        spacer.set_attribute("style", "height: 3000px").unwrap();
        document.body().unwrap().append_child(&spacer).unwrap();
        spacer
    }

    #[wasm_bindgen_test]
    async fn scrolls_to_present_section_smoothly() {
        let document = window().unwrap().document().unwrap();
        let spacer = append_spacer();
        let target = document.create_element("section").unwrap();
        target.set_id("services");
        target.set_attribute("style", "height: 3000px").unwrap();
        document.body().unwrap().append_child(&target).unwrap();
        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);

        assert!(BrowserViewport.scroll_into_view(Section::Services));
        // An instant jump would already have moved the page here.
        assert!(scroll_y() < 1.0);

        TimeoutFuture::new(1_500).await;
        assert!(scroll_y() > 0.0);

        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        target.remove();
        spacer.remove();
    }

    #[wasm_bindgen_test]
    fn absent_section_is_not_scrolled() {
        let document = window().unwrap().document().unwrap();
        assert!(document.get_element_by_id("contact").is_none());
        assert!(!BrowserViewport.scroll_into_view(Section::Contact));
    }

    #[wasm_bindgen_test]
    fn listener_stops_firing_after_drop() {
        let calls = Rc::new(Cell::new(0));
        let listener = {
            let calls = calls.clone();
            ScrollListener::attach(move |_| calls.set(calls.get() + 1)).unwrap()
        };

        fire_scroll();
        assert_eq!(calls.get(), 1);

        drop(listener);
        fire_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn unscrolled_page_reports_zero_offset() {
        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        assert_eq!(current_scroll_offset(), 0);
    }

    #[wasm_bindgen_test]
    fn reports_offset_of_scrolled_page() {
        let spacer = append_spacer();
        window().unwrap().scroll_to_with_x_and_y(0.0, 120.0);

        assert_eq!(current_scroll_offset(), 120);

        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        spacer.remove();
    }
}
