//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the catalog service:
//! starting the table actors, handing out their clients, and coordinating
//! clean termination.
//!
//! ## The Orchestration Pattern
//!
//! The individual pieces are simple — a pure engine, two table actors, two
//! typed clients — and the conductor that wires them together is
//! [`CatalogSystem`]:
//!
//! 1. **Actor Creation** - Instantiate both table actors and their clients
//! 2. **Lifecycle Management** - Spawn each actor in its own Tokio task
//! 3. **Graceful Shutdown** - Drop clients to close the channels, then
//!    await the actor tasks
//! 4. **Observability Setup** - [`setup_tracing`] initializes structured
//!    logging for the whole process
//!
//! ## Graceful Shutdown
//!
//! When the clients are dropped, the channel senders go with them; each
//! actor's `recv()` returns `None`, the loop exits after processing any
//! queued requests, and the final table size is logged. No messages are
//! lost.
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use tracing::*;
