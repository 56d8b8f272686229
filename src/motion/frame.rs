/// A visual state of one element. Properties left as `None` are not animated
/// and never written to the element's style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Horizontal translation, percent of the element's own width.
    pub x: Option<f64>,
    /// Vertical translation in pixels.
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    /// Width, percent of the containing block.
    pub width: Option<f64>,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            x: None,
            y: None,
            opacity: None,
            width: None,
        }
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Interpolates towards `to` by `t`. A property is only carried into the
    /// result when both endpoints define it.
    pub fn lerp(&self, to: &Frame, t: f64) -> Frame {
        fn mix(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a + (b - a) * t),
                _ => None,
            }
        }
        Frame {
            x: mix(self.x, to.x, t),
            y: mix(self.y, to.y, t),
            opacity: mix(self.opacity, to.opacity, t),
            width: mix(self.width, to.width, t),
        }
    }

    /// Inline style declarations for this frame, as `(property, value)` pairs.
    ///
    /// Offsets go through the standalone `translate` property, the same one
    /// Tailwind's `translate-*` utilities set, so an inline frame replaces a
    /// utility offset instead of stacking on top of it.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(3);
        match (self.x, self.y) {
            (Some(x), Some(y)) => out.push(("translate", format!("{x}% {y}px"))),
            (Some(x), None) => out.push(("translate", format!("{x}%"))),
            (None, Some(y)) => out.push(("translate", format!("0px {y}px"))),
            (None, None) => {}
        }
        if let Some(opacity) = self.opacity {
            out.push(("opacity", format!("{opacity}")));
        }
        if let Some(width) = self.width {
            out.push(("width", format!("{width}%")));
        }
        out
    }

    /// The declarations as a `style` attribute value.
    pub fn style(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_only_shared_properties() {
        let from = Frame::new().y(20.0).opacity(0.0).width(50.0);
        let to = Frame::new().y(0.0).opacity(1.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.y, Some(10.0));
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.width, None);
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_declarations() {
        let frame = Frame::new().y(20.0).opacity(0.0);
        assert_eq!(
            frame.declarations(),
            vec![
                ("translate", "0px 20px".to_string()),
                ("opacity", "0".to_string()),
            ]
        );

        let frame = Frame::new().x(100.0);
        assert_eq!(
            frame.declarations(),
            vec![("translate", "100%".to_string())]
        );

        let frame = Frame::new().x(50.0).y(-10.0).width(85.0);
        assert_eq!(
            frame.declarations(),
            vec![
                ("translate", "50% -10px".to_string()),
                ("width", "85%".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_frame_writes_nothing() {
        assert!(Frame::new().declarations().is_empty());
        assert_eq!(Frame::new().style(), "");
    }

    #[test]
    fn test_style_attribute() {
        assert_eq!(
            Frame::new().x(100.0).opacity(0.5).style(),
            "translate: 100%; opacity: 0.5;"
        );
    }
}
