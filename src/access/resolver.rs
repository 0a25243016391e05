//! Capability resolution
//!
//! Pure boolean checks deciding whether a user may perform a named action
//! or satisfies a role requirement. Both functions are total and
//! deterministic over their inputs; there is no error path.

use crate::access::UserAccount;
use crate::types::{Permission, Role};

/// Check whether the user may perform the named action
///
/// Returns `true` iff the user is present and:
/// - their role is [`Role::Admin`], or
/// - their grants contain [`Permission::All`], or
/// - their grants contain the queried permission.
///
/// An absent user always fails the check.
pub fn has_permission(user: Option<&UserAccount>, permission: Permission) -> bool {
    let Some(user) = user else {
        return false;
    };

    if user.role == Role::Admin {
        return true;
    }

    user.permissions.iter().any(|granted| match granted {
        Permission::All => true,
        other => *other == permission,
    })
}

/// Check whether the user satisfies the given role
///
/// Returns `true` iff the user is present and their role equals the queried
/// role, or their role is [`Role::Admin`] (admin satisfies every role
/// check). An absent user always fails the check.
pub fn has_role(user: Option<&UserAccount>, role: Role) -> bool {
    match user {
        Some(user) => user.role == role || user.role == Role::Admin,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_user_fails_every_check() {
        assert!(!has_permission(None, Permission::ManageVehicles));
        assert!(!has_role(None, Role::Driver));
    }

    #[test]
    fn explicit_grant_resolves_exactly() {
        let user = UserAccount::with_permissions(
            "dispatcher",
            Role::Dispatcher,
            vec![Permission::ManageMissions],
        );
        assert!(has_permission(Some(&user), Permission::ManageMissions));
        assert!(!has_permission(Some(&user), Permission::ManageBilling));
    }

    #[test]
    fn admin_role_satisfies_any_role_check() {
        let admin = UserAccount::new("root", Role::Admin);
        assert!(has_role(Some(&admin), Role::Driver));
        assert!(has_role(Some(&admin), Role::Hseq));
        assert!(has_role(Some(&admin), Role::Admin));
    }
}
