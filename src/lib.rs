//! Issue Card Viewer (icv)
//!
//! TUI application that fetches issue records from a remote tracker and
//! renders each as a card, lazily mounting expensive card content as it
//! nears the visible viewport.
//!
//! Follows a Pure Core / Impure Shell architecture: `lazy`, `model`,
//! `parser` and `state` are pure and unit-testable without a terminal;
//! `fetch`, `logging` and `view` form the shell.

pub mod config;
pub mod fetch;
pub mod lazy;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod view;
