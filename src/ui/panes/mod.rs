//! TUI pane rendering modules
//!
//! Each module exports one stateless `render_*` function; scroll offsets live
//! in [`App`](crate::ui::App) and are passed in by reference.
//!
//! # Pane Modules
//!
//! - [`header`]: pattern name, difficulty badge and description
//! - [`catalog`]: pattern list used to switch patterns
//! - [`preview`]: draws the active scene renderer (3D sheet or crease diagram)
//! - [`steps`]: instructions with the step list, or tips and materials
//! - [`status`]: status bar with keybindings and step position

pub mod catalog;
pub mod header;
pub mod preview;
pub mod status;
pub mod steps;

pub use catalog::render_catalog_pane;
pub use header::render_header;
pub use preview::render_preview_pane;
pub use status::render_status_bar;
pub use steps::{render_steps_pane, DetailTab};
