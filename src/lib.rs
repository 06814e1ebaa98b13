//! # Introduction
//!
//! foldstep presents a catalog of origami tessellation patterns and steps
//! through their folding instructions in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), with a preview pane that follows the
//! current step.
//!
//! ## Data flow
//!
//! ```text
//! pattern id → PatternCatalog::lookup → PatternRecord → StepViewer → Renderer
//! ```
//!
//! 1. [`catalog`]: immutable pattern table with a fallback default record,
//!    built-in content and JSON loading.
//! 2. [`viewer`]: the bounded step cursor and the navigation operations
//!    (`select`, `next`, `previous`, `jump_to`, `reset`).
//! 3. [`render`]: the [`render::Renderer`] capability and its implementations
//!    (rotating sheet model, crease diagram, no-op, recorder).
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use foldstep::catalog::PatternCatalog;
//! use foldstep::render::NullRenderer;
//! use foldstep::viewer::StepViewer;
//!
//! let catalog = PatternCatalog::builtin().unwrap();
//! let mut viewer = StepViewer::new(&catalog, NullRenderer, "waterbomb");
//! viewer.jump_to(99);
//! assert_eq!(viewer.position().to_string(), "Step 6 of 6");
//! ```

pub mod catalog;
pub mod render;
pub mod ui;
pub mod viewer;
