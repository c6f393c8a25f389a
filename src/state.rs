//! Page controller state.
//!
//! Everything here is free of DOM access so it can be driven from unit tests.
//! The browser side lives in [`crate::dom`].

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::SCROLL_THRESHOLD;

/// One addressable region of the page. The id doubles as the element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    /// Case-sensitive, same as `document.getElementById`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// The two looks of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Solid,
}

impl NavStyle {
    pub fn for_offset(offset: u32) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavStyle::Solid
        } else {
            NavStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Transparent => "top-nav--transparent",
            NavStyle::Solid => "top-nav--solid",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub menu_open: bool,
    pub scroll_offset: u32,
}

impl PageState {
    pub fn new(scroll_offset: u32) -> Self {
        Self {
            menu_open: false,
            scroll_offset,
        }
    }

    pub fn nav_style(&self) -> NavStyle {
        NavStyle::for_offset(self.scroll_offset)
    }
}

pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    /// Raw `window.scrollY` as reported by the browser.
    Scrolled(f64),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::ToggleMenu => next.menu_open = !next.menu_open,
            PageAction::CloseMenu => next.menu_open = false,
            PageAction::Scrolled(raw) => next.scroll_offset = clamp_offset(raw),
        }
        Rc::new(next)
    }
}

/// Browsers report fractional and, during elastic overscroll, negative offsets.
pub fn clamp_offset(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        raw.round().min(u32::MAX as f64) as u32
    }
}

/// Something that can bring a section into view.
pub trait Viewport {
    /// Returns false when the section has no element on the page.
    fn scroll_into_view(&self, section: Section) -> bool;
}

/// Scrolls to `section_id` if it names a section and closes the mobile menu
/// either way. The returned action is meant to be dispatched to the page
/// reducer.
pub fn navigate_to_section<V: Viewport + ?Sized>(viewport: &V, section_id: &str) -> PageAction {
    match Section::from_id(section_id) {
        Some(section) => {
            if !viewport.scroll_into_view(section) {
                debug!("Section #{} is not on the page", section.id());
            }
        }
        None => debug!("Ignoring navigation to unknown section {:?}", section_id),
    }
    PageAction::CloseMenu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingViewport {
        present: Vec<Section>,
        scrolled: RefCell<Vec<Section>>,
    }

    impl RecordingViewport {
        fn with_all_sections() -> Self {
            Self {
                present: Section::ALL.to_vec(),
                ..Default::default()
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_into_view(&self, section: Section) -> bool {
            if self.present.contains(&section) {
                self.scrolled.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    fn apply(state: PageState, action: PageAction) -> PageState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn nav_is_solid_only_past_threshold() {
        assert_eq!(NavStyle::for_offset(0), NavStyle::Transparent);
        assert_eq!(NavStyle::for_offset(50), NavStyle::Transparent);
        assert_eq!(NavStyle::for_offset(51), NavStyle::Solid);
        assert_eq!(NavStyle::for_offset(100), NavStyle::Solid);
    }

    #[test]
    fn crossing_threshold_flips_style_every_time() {
        let mut state = PageState::new(0);
        for (raw, expected) in [
            (49.0, NavStyle::Transparent),
            (51.0, NavStyle::Solid),
            (50.0, NavStyle::Transparent),
            (51.0, NavStyle::Solid),
        ] {
            state = apply(state, PageAction::Scrolled(raw));
            assert_eq!(state.nav_style(), expected, "at offset {}", raw);
        }
    }

    #[test]
    fn scroll_overwrites_offset_with_clamped_value() {
        let state = apply(PageState::new(300), PageAction::Scrolled(100.4));
        assert_eq!(state.scroll_offset, 100);

        let state = apply(state, PageAction::Scrolled(-12.0));
        assert_eq!(state.scroll_offset, 0);

        let state = apply(state, PageAction::Scrolled(f64::NAN));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn sub_pixel_scrolls_leave_state_equal() {
        let before = apply(PageState::new(0), PageAction::Scrolled(100.2));
        let after = apply(before.clone(), PageAction::Scrolled(99.8));
        assert_eq!(before, after);
        assert_eq!(before.nav_style(), after.nav_style());
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let open = PageState {
            menu_open: true,
            scroll_offset: 0,
        };
        assert!(apply(open, PageAction::Scrolled(200.0)).menu_open);
    }

    #[test]
    fn toggling_twice_restores_initial_state() {
        let initial = PageState::new(0);
        let once = apply(initial.clone(), PageAction::ToggleMenu);
        assert!(once.menu_open);
        let twice = apply(once, PageAction::ToggleMenu);
        assert_eq!(twice, initial);
    }

    #[test]
    fn every_nav_label_closes_menu() {
        let viewport = RecordingViewport::with_all_sections();
        for section in Section::ALL {
            for menu_open in [true, false] {
                let state = PageState {
                    menu_open,
                    scroll_offset: 0,
                };
                let action = navigate_to_section(&viewport, &section.label().to_lowercase());
                assert!(!apply(state, action).menu_open);
            }
        }
        let scrolled = viewport.scrolled.borrow();
        assert_eq!(scrolled.len(), 2 * Section::ALL.len());
        assert!(Section::ALL.iter().all(|s| scrolled.contains(s)));
    }

    #[test]
    fn unknown_section_scrolls_nowhere_but_closes_menu() {
        let viewport = RecordingViewport::with_all_sections();
        let open = PageState {
            menu_open: true,
            scroll_offset: 0,
        };
        for id in ["", "pricing", "Contact", "#contact", " about"] {
            let action = navigate_to_section(&viewport, id);
            assert!(!apply(open.clone(), action).menu_open);
        }
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn missing_element_still_closes_menu() {
        let viewport = RecordingViewport::default();
        let action = navigate_to_section(&viewport, "about");
        let state = apply(
            PageState {
                menu_open: true,
                scroll_offset: 0,
            },
            action,
        );
        assert!(!state.menu_open);
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }
}
