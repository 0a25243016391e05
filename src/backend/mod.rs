//! Hosted backend collaborators
//!
//! This module defines the interfaces the core consumes from the hosted
//! backend platform and the errors those collaborators surface. The
//! implementations live in the excluded presentation/backend layers; tests
//! exercise the core against in-memory doubles.
//!
//! # Overview
//!
//! - **SyncService**: the idempotent validation-state sync RPC
//! - **AuthGateway**: backend session sign-out
//! - **CacheInvalidator**: refetch triggers for cached query groups
//! - **SessionNotifier**: non-blocking idle warning and login redirect
//! - **BackendError**: structured RPC/network/auth failures

pub mod error;
pub mod ports;

// Re-export all public types for convenience
pub use error::*;
pub use ports::*;
