use super::{Frame, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

#[derive(Debug, Clone)]
struct Step {
    tween: Tween,
    count: usize,
    offset: f64,
}

/// Tweens played back to back, with a playhead that can run in either
/// direction. A new timeline starts paused at time zero.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    playhead: f64,
    direction: Direction,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tween over `count` targets, starting when the previous step
    /// ends.
    pub fn then(mut self, tween: Tween, count: usize) -> Self {
        let offset = self.duration();
        self.steps.push(Step {
            tween,
            count,
            offset,
        });
        self
    }

    pub fn duration(&self) -> f64 {
        self.steps
            .last()
            .map(|s| s.offset + s.tween.total_duration(s.count))
            .unwrap_or(0.0)
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.playhead < self.duration();
    }

    /// Plays backwards from wherever the playhead currently is.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.playhead > 0.0;
    }

    pub fn run(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.play(),
            Direction::Reverse => self.reverse(),
        }
    }

    /// Moves the playhead by `dt` seconds. Returns whether the timeline is
    /// still playing afterwards.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.playing {
            return false;
        }
        let end = self.duration();
        match self.direction {
            Direction::Forward => {
                self.playhead = (self.playhead + dt).min(end);
                self.playing = self.playhead < end;
            }
            Direction::Reverse => {
                self.playhead = (self.playhead - dt).max(0.0);
                self.playing = self.playhead > 0.0;
            }
        }
        self.playing
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn targets(&self, step: usize) -> usize {
        self.steps.get(step).map(|s| s.count).unwrap_or(0)
    }

    /// Frame of target `index` in step `step` at the current playhead.
    pub fn sample(&self, step: usize, index: usize) -> Option<Frame> {
        let step = self.steps.get(step)?;
        Some(step.tween.sample(self.playhead - step.offset, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Ease;

    fn menu() -> Timeline {
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
                4,
            )
    }

    #[test]
    fn test_starts_paused_at_zero() {
        let mut tl = menu();
        assert!(!tl.is_playing());
        assert_eq!(tl.playhead(), 0.0);
        assert!(!tl.advance(1.0));
        assert_eq!(tl.sample(0, 0).unwrap().x, Some(100.0));
        assert_eq!(tl.sample(1, 3).unwrap().opacity, Some(0.0));
        assert!(tl.sample(2, 0).is_none());
    }

    #[test]
    fn test_steps_run_in_sequence() {
        let tl = menu();
        assert_eq!(tl.step_count(), 2);
        assert_eq!(tl.targets(1), 4);
        assert!((tl.duration() - 1.1).abs() < 1e-9);

        let mut tl = tl;
        tl.play();
        tl.advance(0.25);
        let panel = tl.sample(0, 0).unwrap().x.unwrap();
        assert!(panel > 0.0 && panel < 100.0);
        // links wait for the panel
        assert_eq!(tl.sample(1, 0).unwrap().opacity, Some(0.0));
    }

    #[test]
    fn test_play_to_end_then_reverse_to_start() {
        let mut tl = menu();
        tl.play();
        while tl.advance(1.0 / 60.0) {}
        assert_eq!(tl.playhead(), tl.duration());
        assert_eq!(tl.sample(0, 0).unwrap().x, Some(0.0));
        assert_eq!(tl.sample(1, 3).unwrap().opacity, Some(1.0));

        tl.reverse();
        assert!(tl.is_playing());
        while tl.advance(1.0 / 60.0) {}
        assert_eq!(tl.playhead(), 0.0);
        assert_eq!(tl.direction(), Direction::Reverse);
        assert_eq!(tl.sample(0, 0).unwrap().x, Some(100.0));
    }

    #[test]
    fn test_reverse_midway_turns_around() {
        let mut tl = menu();
        tl.run(Direction::Forward);
        tl.advance(0.3);
        tl.run(Direction::Reverse);
        tl.advance(0.1);
        assert!((tl.playhead() - 0.2).abs() < 1e-9);
        tl.advance(5.0);
        assert_eq!(tl.playhead(), 0.0);
        assert!(!tl.is_playing());
    }

    #[test]
    fn test_play_at_end_is_noop() {
        let mut tl = menu();
        tl.play();
        tl.advance(10.0);
        tl.play();
        assert!(!tl.is_playing());
    }
}
