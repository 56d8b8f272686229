use crate::motion::{Direction, Ease, Frame, Timeline, Tween};

/// Slides the panel in from the right, then brings the `links` up one by
/// one. Step 0 targets the panel, step 1 the links.
pub fn menu_timeline(links: usize) -> Timeline {
    Timeline::new()
        .then(
            Tween::new(Frame::new().x(100.0), Frame::new().x(0.0))
                .duration(0.5)
                .ease(Ease::Power3Out),
            1,
        )
        .then(
            Tween::new(Frame::new().y(10.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.3)
                .stagger(0.1),
            links,
        )
}

/// Inline style of the panel while the menu is closed.
pub fn closed_panel_style() -> String {
    menu_timeline(0)
        .sample(0, 0)
        .map(|frame| frame.style())
        .unwrap_or_default()
}

/// Open/closed state of the slide-in mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Following a navigation link always closes the menu.
    pub fn closed(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Which way the menu timeline plays on entering this state.
    pub fn timeline_direction(self) -> Direction {
        match self {
            Self::Closed => Direction::Reverse,
            Self::Open => Direction::Forward,
        }
    }

    /// Page scrolling is locked while the menu covers the page.
    pub fn locks_scroll(self) -> bool {
        self.is_open()
    }

    /// Value for the body's `overflow` style in this state.
    pub fn body_overflow(self) -> &'static str {
        if self.locks_scroll() {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        assert!(!state.locks_scroll());
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn test_toggle_round_trip() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert!(open.locks_scroll());
        assert_eq!(open.body_overflow(), "hidden");
        assert_eq!(open.timeline_direction(), Direction::Forward);

        let closed = open.toggled();
        assert_eq!(closed, MenuState::Closed);
        assert!(!closed.locks_scroll());
        assert_eq!(closed.body_overflow(), "");
        assert_eq!(closed.timeline_direction(), Direction::Reverse);
    }

    #[test]
    fn test_panel_offset_comes_from_timeline() {
        assert_eq!(closed_panel_style(), "translate: 100%;");

        let mut timeline = menu_timeline(4);
        let rest = timeline.sample(0, 0).unwrap();
        assert_eq!(rest.declarations(), vec![("translate", "100%".to_string())]);
        let link = timeline.sample(1, 3).unwrap();
        assert_eq!(link.opacity, Some(0.0));

        timeline.run(MenuState::Open.timeline_direction());
        while timeline.advance(0.05) {}
        let open = timeline.sample(0, 0).unwrap();
        assert_eq!(open.declarations(), vec![("translate", "0%".to_string())]);
        let shown = timeline.sample(1, 3).unwrap().opacity.unwrap();
        assert!((shown - 1.0).abs() < 1e-6, "{shown}");

        timeline.run(MenuState::Closed.timeline_direction());
        while timeline.advance(0.05) {}
        assert_eq!(timeline.sample(0, 0).unwrap().style(), closed_panel_style());
    }

    #[test]
    fn test_navigation_closes() {
        assert_eq!(MenuState::Open.closed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.closed(), MenuState::Closed);
    }
}
