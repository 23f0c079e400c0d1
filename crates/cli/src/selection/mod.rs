//! Interactive bookmark selection.
//!
//! This module provides the terminal picker: a modal state machine fed by
//! key presses, a pure render plan builder, and a crossterm display that
//! draws the plan.
//!
//! # Modes
//!
//! - **Run**: type to narrow bookmarks by name prefix, Tab to autocomplete,
//!   Enter to commit the single exact match
//! - **Delete** (`^D`): type a bookmark number and press Enter
//! - **Confirm delete**: answer `[yes]/no`
//! - **Settings** (`^S`): toggle display settings with 1-4
//!
//! `^F` toggles fitting the table to the terminal width, `^C` exits from any
//! mode and Esc exits from Run mode.

// Export public items from submodules
pub mod colors;
pub mod input;
pub mod render;
pub mod state;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::confirm;
pub use render::RenderPlan;
pub use state::Session;
pub use types::{Key, Mode, SessionState, Transition, Viewport};
pub use ui::{run_picker, PickerOutcome};
