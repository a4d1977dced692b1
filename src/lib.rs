//! # Introduction
//!
//! simd-viewer renders SIMD register contents (128- and 256-bit, integer and
//! floating point) as rows of per-lane boxes in the terminal. Hovering a lane
//! highlights every other lane on screen holding the same value, and a picker
//! row groups lanes visually at a chosen byte width.
//!
//! ## Frame pipeline
//!
//! ```text
//! pointer → push_* rows → flush (layout + draw) → next frame
//! ```
//!
//! 1. [`register`]: typed register values (a raw bit pattern plus a lane
//!    kind), lane extraction and decimal/hex formatting.
//! 2. [`viewer`]: the [`viewer::Viewer`] display list with its row stack, render
//!    flags, the "same value" oracle and the one-frame-delayed hover state.
//!    Draws through the [`viewer::Canvas`] trait.
//! 3. [`ui`]: ratatui/crossterm host with a terminal `Canvas`, status bar and
//!    the frame loop; not part of the stable library API.
//! 4. [`demo`]: illustrative intrinsic call sites grouped into scenarios.

pub mod demo;
pub mod register;
pub mod ui;
pub mod viewer;
