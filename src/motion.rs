mod ease;
mod frame;
mod text;
mod timeline;
mod trigger;
mod tween;

pub use ease::Ease;
pub use frame::Frame;
pub use text::words;
pub use timeline::{Direction, Timeline};
pub use trigger::{Bounds, Edge, ScrollTrigger, TriggerStart};
pub use tween::{Repeat, Tween};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("invalid trigger start: {0:?}")]
    InvalidTriggerStart(String),
}
