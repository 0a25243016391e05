//! Core types and identifiers for the fleet operations core
//!
//! This module contains fundamental types, identifiers, and configuration
//! structures used throughout the fleet operations system.
//!
//! # Overview
//!
//! The types module provides the foundational data types for the core:
//!
//! - **Identifiers**: UUID-based unique identifiers for all entities
//! - **Enums**: Closed, type-safe enumerations for roles, permissions,
//!   document kinds, alert levels, and change-stream operations
//! - **Configuration**: Core configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::types::*;
//!
//! // Create unique identifiers
//! let user_id = UserId::new();
//! let vehicle_id = VehicleId::new();
//! let document_id = DocumentId::new();
//!
//! // Use enums for type safety
//! let role = Role::Dispatcher;
//! let permission = Permission::ManageMissions;
//! let kind = DocumentKind::Insurance;
//!
//! // Configure the core
//! let config = CoreConfig {
//!     renewal_window_days: 45,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
