//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, diagnostic selection
//! - **[`panes`]**: stateless render functions for each visible pane (source, diagnostics,
//!   tokens, symbol table, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AnalysisReport`] and the analyzed source, then call [`App::run`] to start
//! the event loop.
//!
//! [`AnalysisReport`]: crate::pipeline::AnalysisReport
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
