//! # Catalog Admin Library
//!
//! This library exposes the catalog reorder service for integration testing:
//! the models, the actor-based store, the typed clients, and the lifecycle
//! orchestrator.

pub mod category_store;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod store;
