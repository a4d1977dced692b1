//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, the frame loop, keyboard and mouse handling
//! - **[`canvas`]**: [`canvas::TerminalCanvas`], the viewer's drawing surface on a
//!   ratatui buffer
//! - **[`status`]**: stateless status bar render function
//! - **[`theme`]**: centralized color palette, including the viewer's paints
//!
//! The entry point for consumers is [`App`]: construct it with a scenario
//! [`Catalogue`] and a [`Viewer`], then call [`App::run`] to start the frame loop.
//!
//! [`Catalogue`]: crate::demo::Catalogue
//! [`Viewer`]: crate::viewer::Viewer
//! [`App::run`]: app::App::run

pub mod app;
pub mod canvas;
pub mod status;
pub mod theme;

pub use app::App;
