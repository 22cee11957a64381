//! Core systems for Zonemap.
//!
//! This crate provides the pieces every Zonemap widget builds on:
//!
//! - [`Signal`]: observer notifications (item selected, repaint requested)
//! - [`UiHandler`]: the UI thread's deferred task queue
//! - [`logging`]: `tracing` target and span names
//!
//! Everything here is meant to be driven from a single UI thread. Types are
//! `Send + Sync` so handles can be captured by posted tasks.

pub mod logging;
pub mod signal;
mod task;

pub use signal::{ConnectionId, Signal};
pub use task::{TaskId, TaskQueue, UiHandler};
