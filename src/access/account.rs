//! User account model
//!
//! This module contains the [`UserAccount`] record carrying the role and
//! explicit permission grants that capability checks are resolved against.

use crate::types::{Permission, Role, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user account with an assigned role and explicit permission grants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique identifier for the account
    pub id: UserId,
    /// Display name shown in the application shell
    pub display_name: String,
    /// Assigned role
    pub role: Role,
    /// Explicit permission grants; [`Permission::All`] grants everything
    pub permissions: Vec<Permission>,
}

impl UserAccount {
    /// Create an account with a role and no explicit grants
    pub fn new(display_name: impl Into<String>, role: Role) -> Self {
        Self { id: UserId::new(), display_name: display_name.into(), role, permissions: Vec::new() }
    }

    /// Create an account with a role and explicit grants
    pub fn with_permissions(
        display_name: impl Into<String>,
        role: Role,
        permissions: Vec<Permission>,
    ) -> Self {
        Self { id: UserId::new(), display_name: display_name.into(), role, permissions }
    }

    /// Add an explicit permission grant
    pub fn grant(&mut self, permission: Permission) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    /// Remove an explicit permission grant
    pub fn revoke(&mut self, permission: Permission) {
        self.permissions.retain(|p| *p != permission);
    }

    /// Check whether this account may perform the named action
    ///
    /// Equivalent to [`has_permission`](crate::access::has_permission) with
    /// `Some(self)`.
    pub fn can(&self, permission: Permission) -> bool {
        crate::access::has_permission(Some(self), permission)
    }

    /// Check whether this account satisfies the given role
    ///
    /// Equivalent to [`has_role`](crate::access::has_role) with `Some(self)`.
    pub fn is(&self, role: Role) -> bool {
        crate::access::has_role(Some(self), role)
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.display_name, self.id, self.role)
    }
}
