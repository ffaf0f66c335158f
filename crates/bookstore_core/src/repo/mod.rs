//! Repository layer: typed row decoding over injected connections.
//!
//! # Responsibility
//! - Define the query capability repositories depend on.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Repositories borrow their connection and never open, close or pool it.
//! - Connection failures are propagated, never recovered locally.

pub mod book_repo;
pub mod connection;
