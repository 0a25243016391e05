//! Unit tests for capability resolution
//!
//! Verifies the admin and "all" sentinels, exact-grant matching, and the
//! absent-user behavior of the permission resolver.

use fleet_ops_core::access::{has_permission, has_role, UserAccount};
use fleet_ops_core::types::{Permission, Role};

const EVERY_PERMISSION: [Permission; 9] = [
    Permission::All,
    Permission::ManageVehicles,
    Permission::ManageDrivers,
    Permission::ManageMissions,
    Permission::ManageCargo,
    Permission::ManageBilling,
    Permission::ManageHseq,
    Permission::ManageUsers,
    Permission::ViewReports,
];

const EVERY_ROLE: [Role; 6] =
    [Role::Admin, Role::Manager, Role::Dispatcher, Role::Driver, Role::Hseq, Role::Accountant];

/// An admin passes every permission check regardless of explicit grants
#[test]
fn test_admin_role_grants_every_permission() {
    let admin = UserAccount::new("root", Role::Admin);
    assert!(admin.permissions.is_empty());

    for permission in EVERY_PERMISSION {
        assert!(
            has_permission(Some(&admin), permission),
            "admin should pass the {} check",
            permission
        );
    }
}

/// The "all" grant passes every permission check for any role
#[test]
fn test_all_grant_passes_every_permission_check() {
    for role in [Role::Driver, Role::Accountant, Role::Hseq] {
        let user = UserAccount::with_permissions("holder", role, vec![Permission::All]);
        for permission in EVERY_PERMISSION {
            assert!(
                has_permission(Some(&user), permission),
                "{} with the all grant should pass the {} check",
                role,
                permission
            );
        }
    }
}

/// No authenticated user fails every permission and role check
#[test]
fn test_absent_user_fails_all_checks() {
    for permission in EVERY_PERMISSION {
        assert!(!has_permission(None, permission));
    }
    for role in EVERY_ROLE {
        assert!(!has_role(None, role));
    }
}

/// Explicit grants match exactly; no partial or implied access
#[test]
fn test_explicit_grants_match_exactly() {
    let dispatcher = UserAccount::with_permissions(
        "dispatcher",
        Role::Dispatcher,
        vec![Permission::ManageMissions, Permission::ViewReports],
    );

    assert!(has_permission(Some(&dispatcher), Permission::ManageMissions));
    assert!(has_permission(Some(&dispatcher), Permission::ViewReports));
    assert!(!has_permission(Some(&dispatcher), Permission::ManageVehicles));
    assert!(!has_permission(Some(&dispatcher), Permission::ManageUsers));
    assert!(!has_permission(Some(&dispatcher), Permission::All));
}

/// A user with no grants and a non-admin role can do nothing
#[test]
fn test_no_grants_means_no_access() {
    let driver = UserAccount::new("driver", Role::Driver);
    for permission in EVERY_PERMISSION {
        assert!(!has_permission(Some(&driver), permission));
    }
}

/// Role checks: exact match or admin
#[test]
fn test_role_checks_exact_or_admin() {
    let manager = UserAccount::new("manager", Role::Manager);
    assert!(has_role(Some(&manager), Role::Manager));
    assert!(!has_role(Some(&manager), Role::Admin));
    assert!(!has_role(Some(&manager), Role::Driver));

    let admin = UserAccount::new("root", Role::Admin);
    for role in EVERY_ROLE {
        assert!(has_role(Some(&admin), role), "admin should satisfy the {} role check", role);
    }
}

/// Resolution is pure: repeated checks give identical answers
#[test]
fn test_resolution_is_deterministic() {
    let user =
        UserAccount::with_permissions("hseq", Role::Hseq, vec![Permission::ManageHseq]);

    for _ in 0..3 {
        assert!(has_permission(Some(&user), Permission::ManageHseq));
        assert!(!has_permission(Some(&user), Permission::ManageBilling));
        assert!(has_role(Some(&user), Role::Hseq));
    }
}

/// Grant and revoke maintain a duplicate-free grant set
#[test]
fn test_grant_and_revoke() {
    let mut user = UserAccount::new("ops", Role::Manager);

    user.grant(Permission::ManageVehicles);
    user.grant(Permission::ManageVehicles);
    assert_eq!(user.permissions.len(), 1);
    assert!(user.can(Permission::ManageVehicles));

    user.revoke(Permission::ManageVehicles);
    assert!(!user.can(Permission::ManageVehicles));
    assert!(user.permissions.is_empty());
}
