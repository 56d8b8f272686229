use super::{Ease, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Alternate between `from` and `to` forever.
    YoyoForever,
}

/// A from/to animation over one or more targets.
///
/// Targets are addressed by index; target `i` starts `i * stagger` seconds
/// after the first one. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Frame,
    to: Frame,
    duration: f64,
    delay: f64,
    stagger: f64,
    ease: Ease,
    repeat: Repeat,
}

impl Tween {
    pub const DEFAULT_DURATION: f64 = 0.5;

    pub fn new(from: Frame, to: Frame) -> Self {
        Self {
            from,
            to,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
            repeat: Repeat::default(),
        }
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn from_frame(&self) -> &Frame {
        &self.from
    }

    pub fn to_frame(&self) -> &Frame {
        &self.to
    }

    /// Time from the start of the tween until the last of `count` targets has
    /// settled. Infinite for repeating tweens.
    pub fn total_duration(&self, count: usize) -> f64 {
        if self.repeat == Repeat::YoyoForever {
            return f64::INFINITY;
        }
        let last = count.saturating_sub(1) as f64;
        self.delay + self.stagger * last + self.duration
    }

    pub fn is_finished(&self, elapsed: f64, count: usize) -> bool {
        elapsed >= self.total_duration(count)
    }

    /// Frame of target `index` at `elapsed` seconds after the tween started.
    ///
    /// Before a target's start its `from` frame is returned so that elements
    /// are hidden from the first frame on.
    pub fn sample(&self, elapsed: f64, index: usize) -> Frame {
        let local = elapsed - self.delay - self.stagger * index as f64;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration == 0.0 {
            return self.to;
        }
        let progress = match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::YoyoForever => {
                let cycle = (local / self.duration).floor();
                let phase = local / self.duration - cycle;
                if cycle as u64 % 2 == 0 {
                    phase
                } else {
                    1.0 - phase
                }
            }
        };
        self.from.lerp(&self.to, self.ease.apply(progress))
    }
}
