//! Tracing targets used across Zonemap.
//!
//! Zonemap is instrumented with the `tracing` crate. Install a subscriber in
//! the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("zonemap::layout=debug,zonemap::input=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "zonemap_core::signal";
    /// UI task queue target.
    pub const TASK: &str = "zonemap_core::task";
    /// Side-list rebuilds and slot distribution.
    pub const LAYOUT: &str = "zonemap::layout";
    /// Paint passes (background, pins, labels).
    pub const PAINT: &str = "zonemap::paint";
    /// Press handling and hit-testing.
    pub const INPUT: &str = "zonemap::input";
    /// Provider attachment and callbacks.
    pub const ADAPTER: &str = "zonemap::adapter";
    /// Configuration loading.
    pub const CONFIG: &str = "zonemap::config";
}

/// Span names for frame-level tracing.
pub mod span_names {
    /// A full paint pass of a map view.
    pub const PAINT_FRAME: &str = "zonemap::paint_frame";
    /// A side-list rebuild.
    pub const REBUILD: &str = "zonemap::rebuild";
}
