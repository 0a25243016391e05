//! Enumeration types for the fleet operations core
//!
//! This module contains all enumeration types used throughout the system,
//! including roles, permissions, document kinds, alert levels, tracked
//! activity kinds, change operations, cached query groups, and output formats.
//!
//! Roles and permissions are closed enumerations rather than free-form
//! strings so that unsupported values are rejected at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user account can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access; satisfies every role and permission check
    Admin,
    /// Fleet manager with broad operational access
    Manager,
    /// Mission planning and dispatch
    Dispatcher,
    /// Vehicle driver with limited self-service access
    Driver,
    /// Health, safety, environment and quality officer
    Hseq,
    /// Billing and invoicing
    Accountant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Dispatcher => write!(f, "dispatcher"),
            Role::Driver => write!(f, "driver"),
            Role::Hseq => write!(f, "hseq"),
            Role::Accountant => write!(f, "accountant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "dispatcher" => Ok(Role::Dispatcher),
            "driver" => Ok(Role::Driver),
            "hseq" => Ok(Role::Hseq),
            "accountant" => Ok(Role::Accountant),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Named capabilities that can be granted to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Sentinel grant satisfying every permission check
    All,
    /// Create, update and archive vehicles
    ManageVehicles,
    /// Create, update and archive driver records
    ManageDrivers,
    /// Plan, assign and close missions
    ManageMissions,
    /// Manage cargo manifests
    ManageCargo,
    /// Manage invoices and billing runs
    ManageBilling,
    /// Manage HSEQ compliance records
    ManageHseq,
    /// Administer user accounts and grants
    ManageUsers,
    /// Read-only access to operational reports
    ViewReports,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::All => write!(f, "all"),
            Permission::ManageVehicles => write!(f, "manage_vehicles"),
            Permission::ManageDrivers => write!(f, "manage_drivers"),
            Permission::ManageMissions => write!(f, "manage_missions"),
            Permission::ManageCargo => write!(f, "manage_cargo"),
            Permission::ManageBilling => write!(f, "manage_billing"),
            Permission::ManageHseq => write!(f, "manage_hseq"),
            Permission::ManageUsers => write!(f, "manage_users"),
            Permission::ViewReports => write!(f, "view_reports"),
        }
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Permission::All),
            "manage_vehicles" => Ok(Permission::ManageVehicles),
            "manage_drivers" => Ok(Permission::ManageDrivers),
            "manage_missions" => Ok(Permission::ManageMissions),
            "manage_cargo" => Ok(Permission::ManageCargo),
            "manage_billing" => Ok(Permission::ManageBilling),
            "manage_hseq" => Ok(Permission::ManageHseq),
            "manage_users" => Ok(Permission::ManageUsers),
            "view_reports" => Ok(Permission::ViewReports),
            _ => Err(format!("Unknown permission: {}", s)),
        }
    }
}

/// Kinds of documents attached to a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Vehicle registration certificate
    Registration,
    /// Insurance policy
    Insurance,
    /// Periodic technical inspection certificate
    TechnicalInspection,
    /// Transport operating permit
    OperatingPermit,
    /// Maintenance record
    MaintenanceRecord,
    /// Anything that does not fit the categories above
    Other,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Registration => write!(f, "Registration"),
            DocumentKind::Insurance => write!(f, "Insurance"),
            DocumentKind::TechnicalInspection => write!(f, "Technical Inspection"),
            DocumentKind::OperatingPermit => write!(f, "Operating Permit"),
            DocumentKind::MaintenanceRecord => write!(f, "Maintenance Record"),
            DocumentKind::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registration" => Ok(DocumentKind::Registration),
            "insurance" => Ok(DocumentKind::Insurance),
            "technical inspection" | "technical_inspection" => Ok(DocumentKind::TechnicalInspection),
            "operating permit" | "operating_permit" => Ok(DocumentKind::OperatingPermit),
            "maintenance record" | "maintenance_record" => Ok(DocumentKind::MaintenanceRecord),
            "other" => Ok(DocumentKind::Other),
            _ => Err(format!("Unknown document kind: {}", s)),
        }
    }
}

/// Urgency classification derived from a document's expiration date
///
/// Alert levels are always computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Expiration is comfortably in the future
    Valid,
    /// Expiration falls within the renewal window
    ToRenew,
    /// Expiration date has passed
    Expired,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertLevel::Valid => write!(f, "valid"),
            AlertLevel::ToRenew => write!(f, "to_renew"),
            AlertLevel::Expired => write!(f, "expired"),
        }
    }
}

/// User-input events that reset the idle-session timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Pointer button pressed
    PointerDown,
    /// Pointer moved
    PointerMove,
    /// Key pressed
    KeyPress,
    /// Viewport scrolled
    Scroll,
    /// Touch contact started
    TouchStart,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::PointerDown => write!(f, "pointer_down"),
            ActivityKind::PointerMove => write!(f, "pointer_move"),
            ActivityKind::KeyPress => write!(f, "key_press"),
            ActivityKind::Scroll => write!(f, "scroll"),
            ActivityKind::TouchStart => write!(f, "touch_start"),
        }
    }
}

/// Row-level change operations delivered by the change-notification stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeOp {
    /// Row inserted
    Insert,
    /// Row updated
    Update,
    /// Row deleted
    Delete,
}

impl fmt::Display for ChangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeOp::Insert => write!(f, "INSERT"),
            ChangeOp::Update => write!(f, "UPDATE"),
            ChangeOp::Delete => write!(f, "DELETE"),
        }
    }
}

/// Cached query groups invalidated after a reconciliation pass
///
/// Each group keys a family of cached query results elsewhere in the
/// application; invalidating it forces dependent views to refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryGroup {
    /// Mission list and detail queries
    Missions,
    /// Vehicle/driver validation-state queries
    Validations,
    /// Aggregate dashboard queries
    Dashboard,
}

impl QueryGroup {
    /// Every cached query group, in invalidation order
    pub const ALL: [QueryGroup; 3] =
        [QueryGroup::Missions, QueryGroup::Validations, QueryGroup::Dashboard];
}

impl fmt::Display for QueryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryGroup::Missions => write!(f, "missions"),
            QueryGroup::Validations => write!(f, "validations"),
            QueryGroup::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Output formats supported by the alert-scan CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    Json,
    /// One JSON object per line
    JsonLines,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonLines => write!(f, "json_lines"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "json_lines" | "jsonl" | "json-lines" => Ok(OutputFormat::JsonLines),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
