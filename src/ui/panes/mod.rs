//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the step's sequence as horizontal bars with compare/swap/resolved colouring
//! - [`narration`]: narration of every step up to the current one
//! - [`stack`]: call frames recorded by recursive traces
//! - [`details`]: algorithm, request, index sets and challenge score
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared block, scrolling and formatting helpers
//!
//! Each pane module exports a primary `render_*` function; panes that need
//! more than a couple of inputs take a `*RenderData` struct.

mod utils;

pub mod bars;
pub mod details;
pub mod narration;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use details::{render_details_pane, DetailsRenderData};
pub use narration::render_narration_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub(crate) use utils::format_bytes;
