mod contact;
mod menu;
pub mod nav;
mod toast;

pub use contact::{
    Acknowledgment, ContactDraft, ContactError, ContactForm, Field, SubmitPhase, SUBMIT_LATENCY,
};
pub use menu::{closed_panel_style, menu_timeline, MenuState};
pub use toast::{Toast, ToastQueue};
