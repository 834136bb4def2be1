//! HTTP 处理器模块

pub mod event_type;
pub mod health;
pub mod metrics;
pub mod navigation;
pub mod permission;
