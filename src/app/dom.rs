use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{SectionLayout, SectionRect};
use crate::sections::SectionId;

/// [`SectionLayout`] backed by the live document. Only call from event
/// handlers; there is no window during SSR.
pub struct DomLayout;

fn section_element(section: SectionId) -> Option<Element> {
    document().get_element_by_id(section.as_str())
}

impl SectionLayout for DomLayout {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
        let rect = section_element(section)?.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, section: SectionId) -> bool {
        let el = if let Some(el) = section_element(section) {
            el
        } else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
