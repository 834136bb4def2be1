//! Business logic services layer

pub mod navigation;
pub mod permission_service;

pub use permission_service::PermissionService;
