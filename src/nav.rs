//! Scroll-driven navigation state for the page.
//!
//! [`NavState`] is the single state container for the nav bar. It is written
//! only by the handlers on this type: [`NavState::on_scroll`] (the tracker),
//! [`NavState::navigate_to`] / [`NavState::navigate`] (the smooth-scroll
//! navigator) and [`NavState::toggle_menu`]. All layout queries go through
//! [`SectionLayout`], so the logic here never touches the DOM directly.

use crate::sections::{SectionId, SECTIONS};

/// Scroll offset (px) past which the nav bar switches to its "scrolled" look.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Distance (px) from the viewport top of the line that picks the active section.
pub const REFERENCE_LINE: f64 = 100.0;

/// Vertical extent of a section, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Both edges are inclusive.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The host layout engine, as seen by the navigation logic.
pub trait SectionLayout {
    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;
    /// Bounding rect of the section's element, or `None` if it isn't on the page.
    fn section_rect(&self, section: SectionId) -> Option<SectionRect>;
    /// Starts an animated scroll bringing the section's top to the viewport top.
    /// Returns `false` if the section's element could not be found.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub active: SectionId,
    pub is_scrolled: bool,
    pub menu_open: bool,
}

/// First section, in declared order, whose rect crosses the reference line.
pub fn section_at_reference_line<L: SectionLayout + ?Sized>(layout: &L) -> Option<SectionId> {
    SECTIONS.into_iter().find(|&section| {
        layout
            .section_rect(section)
            .is_some_and(|rect| rect.contains(REFERENCE_LINE))
    })
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes `is_scrolled` and `active` from the current layout.
    ///
    /// When no section crosses the reference line `active` keeps its previous
    /// value. Returns whether anything changed, so callers only notify
    /// subscribers on a real transition.
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> bool {
        let before = *self;
        self.is_scrolled = layout.scroll_offset() > SCROLLED_THRESHOLD;
        if let Some(section) = section_at_reference_line(layout) {
            self.active = section;
        }
        *self != before
    }

    /// Smooth-scrolls to `section` and closes the menu.
    ///
    /// Does nothing if the layout can't find the section. The menu closes
    /// right away, without waiting for the scroll to finish. `active` is
    /// left alone; the tracker picks it up once the scroll settles. Returns
    /// whether the state changed.
    pub fn navigate_to<L: SectionLayout + ?Sized>(
        &mut self,
        layout: &L,
        section: SectionId,
    ) -> bool {
        if !layout.scroll_into_view(section) {
            log::debug!("no element for section {section}, skipping scroll");
            return false;
        }
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Like [`NavState::navigate_to`], but takes an id or `#hash` string.
    /// Unknown ids are a no-op.
    pub fn navigate<L: SectionLayout + ?Sized>(&mut self, layout: &L, target: &str) -> bool {
        match target.parse::<SectionId>() {
            Ok(section) => self.navigate_to(layout, section),
            Err(e) => {
                log::debug!("ignoring navigation: {e}");
                false
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    struct FakeLayout {
        offset: f64,
        rects: HashMap<SectionId, SectionRect>,
        scrolled_to: RefCell<Vec<SectionId>>,
    }

    impl FakeLayout {
        fn with_offset(offset: f64) -> Self {
            Self {
                offset,
                ..Default::default()
            }
        }

        fn rect(mut self, section: SectionId, top: f64, bottom: f64) -> Self {
            self.rects.insert(section, SectionRect::new(top, bottom));
            self
        }
    }

    impl SectionLayout for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
            self.rects.get(&section).copied()
        }

        fn scroll_into_view(&self, section: SectionId) -> bool {
            if !self.rects.contains_key(&section) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(section);
            true
        }
    }

    /// A page where every section is laid out, stacked 500px apart, scrolled to `offset`.
    fn stacked_page(offset: f64) -> FakeLayout {
        SECTIONS
            .into_iter()
            .enumerate()
            .fold(FakeLayout::with_offset(offset), |layout, (i, s)| {
                let top = i as f64 * 500.0 - offset;
                layout.rect(s, top, top + 500.0)
            })
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.active, SectionId::Home);
        assert!(!state.is_scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_then_about_becomes_active() {
        let mut state = NavState::new();

        let changed = state.on_scroll(&FakeLayout::with_offset(80.0));
        assert!(changed);
        assert!(state.is_scrolled);
        assert_eq!(state.active, SectionId::Home);

        let layout = FakeLayout::with_offset(80.0).rect(SectionId::About, 50.0, 400.0);
        assert!(state.on_scroll(&layout));
        assert_eq!(state.active, SectionId::About);
        assert!(state.is_scrolled);
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut state = NavState::new();
        state.on_scroll(&FakeLayout::with_offset(50.0));
        assert!(!state.is_scrolled);
        state.on_scroll(&FakeLayout::with_offset(50.5));
        assert!(state.is_scrolled);
        state.on_scroll(&FakeLayout::with_offset(0.0));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_reference_line_edges_inclusive() {
        let mut state = NavState::new();
        state.on_scroll(&FakeLayout::default().rect(SectionId::Skills, 100.0, 300.0));
        assert_eq!(state.active, SectionId::Skills);

        state.on_scroll(&FakeLayout::default().rect(SectionId::Projects, -200.0, 100.0));
        assert_eq!(state.active, SectionId::Projects);

        // just below the line
        state.on_scroll(&FakeLayout::default().rect(SectionId::Contact, 100.5, 300.0));
        assert_eq!(state.active, SectionId::Projects);
    }

    #[test]
    fn test_overlap_first_declared_wins() {
        let mut state = NavState::new();
        let layout = FakeLayout::default()
            .rect(SectionId::Education, 0.0, 800.0)
            .rect(SectionId::Skills, 90.0, 110.0)
            .rect(SectionId::Contact, -50.0, 150.0);
        state.on_scroll(&layout);
        assert_eq!(state.active, SectionId::Skills);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut state = NavState {
            active: SectionId::Experience,
            is_scrolled: true,
            menu_open: false,
        };
        // past the bottom of the last section
        let layout = FakeLayout::with_offset(9000.0).rect(SectionId::Contact, -900.0, 20.0);
        let changed = state.on_scroll(&layout);
        assert!(!changed);
        assert_eq!(state.active, SectionId::Experience);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut state = NavState::new();
        let layout = FakeLayout::with_offset(1200.0).rect(SectionId::Education, 20.0, 600.0);
        state.on_scroll(&layout);
        assert_eq!(state.active, SectionId::Education);
    }

    #[test]
    fn test_unchanged_scroll_reports_no_change() {
        let mut state = NavState::new();
        let layout = stacked_page(1000.0);
        assert!(state.on_scroll(&layout));
        assert_eq!(state.active, SectionId::Experience);
        assert!(!state.on_scroll(&layout));
    }

    #[test]
    fn test_stacked_page_walk() {
        let mut state = NavState::new();
        let seen = (0..7)
            .map(|i| {
                state.on_scroll(&stacked_page(i as f64 * 500.0));
                state.active
            })
            .collect::<Vec<_>>();
        assert_eq!(seen, SECTIONS.to_vec());
    }

    #[test]
    fn test_navigate_closes_menu_immediately() {
        let layout = stacked_page(0.0);
        let mut state = NavState {
            menu_open: true,
            ..NavState::new()
        };

        let changed = state.navigate(&layout, "projects");
        assert!(changed);
        assert!(!state.menu_open);
        // scroll has only been requested, tracker hasn't run
        assert_eq!(state.active, SectionId::Home);
        assert_eq!(*layout.scrolled_to.borrow(), vec![SectionId::Projects]);
    }

    #[test]
    fn test_navigate_with_closed_menu() {
        let layout = stacked_page(0.0);
        let mut state = NavState::new();
        assert!(!state.navigate_to(&layout, SectionId::Education));
        assert_eq!(state, NavState::new());
        assert_eq!(*layout.scrolled_to.borrow(), vec![SectionId::Education]);
    }

    #[test]
    fn test_navigate_hash() {
        let layout = stacked_page(0.0);
        let mut state = NavState::new();
        state.navigate(&layout, "#contact");
        assert_eq!(*layout.scrolled_to.borrow(), vec![SectionId::Contact]);
    }

    #[test]
    fn test_navigate_unknown_is_noop() {
        let layout = stacked_page(0.0);
        let mut state = NavState {
            active: SectionId::Skills,
            is_scrolled: true,
            menu_open: true,
        };
        let before = state;
        assert!(!state.navigate(&layout, "resume"));
        assert_eq!(state, before);
        assert!(layout.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_navigate_absent_element_is_noop() {
        let layout = FakeLayout::default().rect(SectionId::Home, 0.0, 500.0);
        let mut state = NavState {
            menu_open: true,
            ..NavState::new()
        };
        assert!(!state.navigate_to(&layout, SectionId::Projects));
        assert!(state.menu_open);
        assert!(layout.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    fn arb_rects() -> impl Strategy<Value = Vec<Option<(f64, f64)>>> {
        prop::collection::vec(
            prop::option::of((-2000.0f64..2000.0, 0.0f64..1500.0).prop_map(|(top, h)| (top, top + h))),
            SECTIONS.len(),
        )
    }

    proptest! {
        #[test]
        fn scrolled_flag_tracks_offset(offset in -100.0f64..10_000.0) {
            let mut state = NavState::new();
            state.on_scroll(&FakeLayout::with_offset(offset));
            prop_assert_eq!(state.is_scrolled, offset > SCROLLED_THRESHOLD);
        }

        #[test]
        fn active_is_first_match_or_previous(rects in arb_rects(), prev in 0usize..7) {
            let layout = SECTIONS
                .into_iter()
                .zip(rects.iter())
                .fold(FakeLayout::default(), |layout, (s, r)| match r {
                    Some((top, bottom)) => layout.rect(s, *top, *bottom),
                    None => layout,
                });
            let expected = SECTIONS
                .into_iter()
                .zip(rects.iter())
                .find(|(_, r)| r.is_some_and(|(top, bottom)| top <= REFERENCE_LINE && bottom >= REFERENCE_LINE))
                .map(|(s, _)| s)
                .unwrap_or(SECTIONS[prev]);

            let mut state = NavState { active: SECTIONS[prev], ..NavState::new() };
            state.on_scroll(&layout);
            prop_assert_eq!(state.active, expected);
        }
    }
}
