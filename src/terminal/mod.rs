//! Terminal lifecycle: raw-mode setup, teardown and panic recovery.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};
