/// Height of the fixed navigation bar; in-page scrolls stop this far above
/// their target.
pub const HEADER_OFFSET: f64 = 100.0;

/// Scroll offset past which the nav bar switches to its scrolled style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Home",
        href: "#",
    },
    NavItem {
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        label: "Skills",
        href: "#skills",
    },
    NavItem {
        label: "Contact",
        href: "#contact",
    },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Where an in-page link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget<'a> {
    Top,
    Section(&'a str),
}

impl<'a> ScrollTarget<'a> {
    /// `#` is the top of the page, `#id` a section. Anything else is not an
    /// in-page link.
    pub fn from_href(href: &'a str) -> Option<Self> {
        match href.strip_prefix('#')? {
            "" => Some(Self::Top),
            id if id.chars().any(char::is_whitespace) => None,
            id => Some(Self::Section(id)),
        }
    }
}

/// Document scroll offset that brings an element whose top is currently at
/// `element_top` (viewport coordinates) just below the header.
pub fn scroll_destination(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}
