//! # Observability & Tracing
//!
//! Structured logging for the catalog service, built on the `tracing`
//! crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: table actor startup, shutdown, final sizes
//! - **Record Operations**: Create, Get, List, Reorder, Delete
//! - **Ordering Decisions**: neighbor selection and renumber events —
//!   `Sort keys exhausted, renumbering group` is the one log line that
//!   marks the rare O(n) recovery
//! - **Request Flow**: client calls are wrapped in `#[instrument]` spans
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`; the compact format hides module paths
//! (`with_target(false)`) since the `table` field already identifies the
//! source.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads per request
//! RUST_LOG=trace cargo run     # Engine-level key computations too
//! ```

/// Initializes the tracing subscriber once for the whole process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the `table` field identifies the source
        .compact()
        .init();
}
