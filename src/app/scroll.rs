use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::state::nav::{scroll_destination, ScrollTarget};

/// Smooth-scrolls to an in-page link target, leaving room for the fixed
/// header. Returns `false` when the link doesn't resolve to anything on the
/// page.
pub fn scroll_to_href(href: &str) -> bool {
    let Some(target) = ScrollTarget::from_href(href) else {
        return false;
    };
    let top = match target {
        ScrollTarget::Top => 0.0,
        ScrollTarget::Section(id) => {
            let Some(el) = document().get_element_by_id(id) else {
                log::debug!("no element for anchor {href}");
                return false;
            };
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            scroll_destination(el.get_bounding_client_rect().top(), scroll_y)
        }
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
    true
}

pub fn scroll_into_view(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
