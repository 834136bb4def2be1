//! Role and permission domain models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in role names. Roles stay plain strings at the registry boundary
/// so unknown roles degrade to "no permission" instead of failing to parse.
pub const ROLE_FARMER: &str = "farmer";
pub const ROLE_INSPECTOR: &str = "inspector";
pub const ROLE_LOGISTICS: &str = "logistics";
pub const ROLE_PACKAGING: &str = "packaging";
pub const ROLE_RETAILER: &str = "retailer";
pub const ROLE_VIEWER: &str = "viewer";
pub const ROLE_ADMIN: &str = "admin";

/// Per-role aggregate capability record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermission {
    pub role: String,
    /// Event-type ids the role may create
    pub can_create_events: Vec<String>,
    /// Event-type ids the role may edit
    pub can_edit_events: Vec<String>,
    /// Event-type ids the role may view
    pub can_view_events: Vec<String>,
    /// Event-type ids the role may delete
    pub can_delete_events: Vec<String>,
    /// Event-type ids the role may approve
    pub can_approve_events: Vec<String>,
    pub can_manage_users: bool,
    pub can_view_reports: bool,
    pub can_export_data: bool,
    pub can_manage_system: bool,
}

/// System-wide capability keys (the four booleans on [`RolePermission`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemPermission {
    #[serde(rename = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canViewReports")]
    ViewReports,
    #[serde(rename = "canExportData")]
    ExportData,
    #[serde(rename = "canManageSystem")]
    ManageSystem,
}

impl FromStr for SystemPermission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canManageUsers" => Ok(SystemPermission::ManageUsers),
            "canViewReports" => Ok(SystemPermission::ViewReports),
            "canExportData" => Ok(SystemPermission::ExportData),
            "canManageSystem" => Ok(SystemPermission::ManageSystem),
            _ => Err(()),
        }
    }
}

/// Outcome of a validation wrapper (`valid` plus a rejection message)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self { valid: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { valid: false, message: Some(message.into()) }
    }
}

/// Navigation entry (routing metadata, no authorization semantics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    pub fn new(name: &str, href: &str) -> Self {
        Self { name: name.to_string(), href: href.to_string() }
    }
}
