/// Easing curves, using GSAP names.
///
/// `PowerN` curves are polynomial of degree `N + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power1InOut,
    Power3Out,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` onto the curve. Input outside the
    /// range is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power3Out,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), 0.0);
            assert_eq!(ease.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power1Out.apply(0.5));
        assert_eq!(Ease::Power1InOut.apply(0.5), 0.5);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for step in 1..=20 {
                let v = ease.apply(step as f64 / 20.0);
                assert!(v >= prev, "{ease:?} decreased at step {step}");
                prev = v;
            }
        }
    }
}
