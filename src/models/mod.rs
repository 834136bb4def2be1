//! 数据模型模块
//! 事件类型与角色权限的静态目录模型

pub mod event_type;
pub mod role;
