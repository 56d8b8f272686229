use std::str::FromStr;

use super::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn position(self, top: f64, height: f64) -> f64 {
        match self {
            Edge::Top => top,
            Edge::Center => top + height / 2.0,
            Edge::Bottom => top + height,
        }
    }
}

impl FromStr for Edge {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(()),
        }
    }
}

/// Element geometry relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

/// Where a scroll trigger starts: a point on the element meets a line in the
/// viewport. Written GSAP style, e.g. `"top bottom-=100"` fires once the
/// element's top edge is 100px above the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerStart {
    element: Edge,
    element_offset: f64,
    viewport: Edge,
    viewport_offset: f64,
}

impl TriggerStart {
    /// `"top bottom-={offset}"`
    pub const fn top_at_bottom_minus(offset: f64) -> Self {
        Self {
            element: Edge::Top,
            element_offset: 0.0,
            viewport: Edge::Bottom,
            viewport_offset: -offset,
        }
    }

    pub fn is_reached(&self, bounds: Bounds, viewport_height: f64) -> bool {
        let point = self.element.position(bounds.top, bounds.height) + self.element_offset;
        let line = self.viewport.position(0.0, viewport_height) + self.viewport_offset;
        point <= line
    }
}

fn parse_point(s: &str) -> Option<(Edge, f64)> {
    let split = s.find("+=").or_else(|| s.find("-="));
    let Some(i) = split else {
        return Some((s.parse().ok()?, 0.0));
    };
    let edge = s[..i].parse().ok()?;
    let amount = s[i + 2..].trim_end_matches("px").parse::<f64>().ok()?;
    let sign = if s[i..].starts_with('-') { -1.0 } else { 1.0 };
    Some((edge, sign * amount))
}

impl FromStr for TriggerStart {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MotionError::InvalidTriggerStart(s.to_string());
        let mut parts = s.split_whitespace();
        let (element, element_offset) = parts.next().and_then(parse_point).ok_or_else(err)?;
        let (viewport, viewport_offset) = parts.next().and_then(parse_point).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self {
            element,
            element_offset,
            viewport,
            viewport_offset,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Latch {
    Armed,
    Fired,
}

/// A one-shot scroll trigger. It fires the first time its start is reached
/// and never again, whatever the scroll direction does afterwards.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    start: TriggerStart,
    latch: Latch,
}

impl ScrollTrigger {
    pub fn new(start: TriggerStart) -> Self {
        Self {
            start,
            latch: Latch::Armed,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.latch == Latch::Fired
    }

    /// Checks the element against the viewport. Returns `true` only on the
    /// observation that fires the trigger.
    pub fn observe(&mut self, bounds: Bounds, viewport_height: f64) -> bool {
        if self.latch == Latch::Fired {
            return false;
        }
        if self.start.is_reached(bounds, viewport_height) {
            self.latch = Latch::Fired;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn at(top: f64) -> Bounds {
        Bounds { top, height: 200.0 }
    }

    #[test]
    fn test_parse() {
        let start: TriggerStart = "top bottom-=100".parse().unwrap();
        assert_eq!(start, TriggerStart::top_at_bottom_minus(100.0));

        let start: TriggerStart = "center top+=20px".parse().unwrap();
        assert!(start.is_reached(Bounds { top: -80.0, height: 200.0 }, VH));
        assert!(!start.is_reached(Bounds { top: -70.0, height: 200.0 }, VH));

        assert!("top  bottom".parse::<TriggerStart>().is_ok());
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "top", "top bottom center", "left bottom", "top bottom-=x"] {
            assert_eq!(
                bad.parse::<TriggerStart>(),
                Err(MotionError::InvalidTriggerStart(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_threshold() {
        let start = TriggerStart::top_at_bottom_minus(100.0);
        assert!(!start.is_reached(at(701.0), VH));
        assert!(start.is_reached(at(700.0), VH));
        // already scrolled past
        assert!(start.is_reached(at(-500.0), VH));
    }

    #[test]
    fn test_fires_once_across_direction_changes() {
        let mut trigger = ScrollTrigger::new(TriggerStart::top_at_bottom_minus(50.0));
        assert!(!trigger.observe(at(900.0), VH));
        assert!(!trigger.has_fired());

        let mut fired = 0;
        // scroll down, back up past the line, and down again
        for top in [800.0, 760.0, 740.0, 600.0, 900.0, 1200.0, 700.0, 300.0, 740.0] {
            if trigger.observe(at(top), VH) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(trigger.has_fired());
    }
}
