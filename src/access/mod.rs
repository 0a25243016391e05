//! Access control and permission resolution
//!
//! This module handles user accounts and the capability checks that gate
//! role-restricted areas of the application.
//!
//! # Overview
//!
//! The access module provides:
//!
//! - **UserAccount**: identity plus assigned role and explicit grants
//! - **has_permission / has_role**: pure, total capability checks
//!
//! Roles and permissions are closed enumerations; the admin role and the
//! [`Permission::All`](crate::types::Permission::All) grant are sentinels
//! that satisfy every check.
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::access::{has_permission, has_role, UserAccount};
//! use fleet_ops_core::types::{Permission, Role};
//!
//! let dispatcher = UserAccount::with_permissions(
//!     "Ana",
//!     Role::Dispatcher,
//!     vec![Permission::ManageMissions],
//! );
//!
//! assert!(has_permission(Some(&dispatcher), Permission::ManageMissions));
//! assert!(!has_permission(Some(&dispatcher), Permission::ManageUsers));
//! assert!(has_role(Some(&dispatcher), Role::Dispatcher));
//!
//! // No authenticated user: every check fails
//! assert!(!has_permission(None, Permission::ViewReports));
//! ```

pub mod account;
pub mod resolver;

// Re-export all public types for convenience
pub use account::*;
pub use resolver::*;
