//! 权限检查服务
//! 事件类型目录与角色权限表的只读查询入口

use crate::catalog;
use crate::error::AppError;
use crate::models::event_type::{EventCategory, EventType};
use crate::models::role::{RolePermission, SystemPermission, ValidationOutcome, ROLE_ADMIN};

/// 权限注册表：启动时构建，运行期不可变
pub struct PermissionService {
    event_types: Vec<EventType>,
    role_permissions: Vec<RolePermission>,
}

impl PermissionService {
    /// 从给定目录构建服务，并做启动期一致性校验
    ///
    /// 校验失败说明配置表本身有数据录入错误，直接拒绝启动。
    pub fn new(
        event_types: Vec<EventType>,
        role_permissions: Vec<RolePermission>,
    ) -> Result<Self, AppError> {
        let service = Self { event_types, role_permissions };
        service.validate_tables()?;
        Ok(service)
    }

    /// 使用内置目录构建服务
    pub fn with_builtin() -> Result<Self, AppError> {
        Self::new(catalog::builtin_event_types(), catalog::builtin_role_permissions())
    }

    /// 启动期一致性校验
    /// 1. 每个事件类型的 required_role 必须出现在自身 can_edit 中
    /// 2. 角色权限表引用的事件 id 必须存在于事件类型目录中
    fn validate_tables(&self) -> Result<(), AppError> {
        for et in &self.event_types {
            if !et.allows_edit_by(&et.required_role) {
                return Err(AppError::Config(format!(
                    "event type '{}': required role '{}' missing from can_edit",
                    et.id, et.required_role
                )));
            }
        }

        for rp in &self.role_permissions {
            let sets = [
                ("can_create_events", &rp.can_create_events),
                ("can_edit_events", &rp.can_edit_events),
                ("can_view_events", &rp.can_view_events),
                ("can_delete_events", &rp.can_delete_events),
                ("can_approve_events", &rp.can_approve_events),
            ];
            for (set_name, ids) in sets {
                for id in ids {
                    if self.event_type(id).is_none() {
                        return Err(AppError::Config(format!(
                            "role '{}': {} references unknown event type '{}'",
                            rp.role, set_name, id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// 完整事件类型目录（保持录入顺序）
    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    /// 角色权限表条目数
    pub fn role_count(&self) -> usize {
        self.role_permissions.len()
    }

    /// 按 id 查找事件类型
    pub fn event_type(&self, event_type_id: &str) -> Option<&EventType> {
        self.event_types.iter().find(|et| et.id == event_type_id)
    }

    /// 角色可见的事件类型（按目录顺序）
    pub fn event_types_for_role(&self, role: &str) -> Vec<&EventType> {
        self.event_types.iter().filter(|et| et.allows_view_by(role)).collect()
    }

    /// 角色可创建的事件类型
    ///
    /// admin 旁路明确排除 required_role 为 admin 的事件类型，
    /// 这些类型只会经由第一个分支（required_role 精确匹配）进入结果。
    pub fn creatable_event_types(&self, role: &str) -> Vec<&EventType> {
        self.event_types
            .iter()
            .filter(|et| {
                et.required_role == role || (role == ROLE_ADMIN && et.required_role != ROLE_ADMIN)
            })
            .collect()
    }

    /// 角色可见且属于指定环节的事件类型
    pub fn events_by_category(&self, role: &str, category: EventCategory) -> Vec<&EventType> {
        self.event_types
            .iter()
            .filter(|et| et.category == category && et.allows_view_by(role))
            .collect()
    }

    /// 角色能否创建该类型事件（未知 id 一律为否）
    pub fn can_create_event(&self, role: &str, event_type_id: &str) -> bool {
        match self.event_type(event_type_id) {
            Some(et) => {
                et.required_role == role || (role == ROLE_ADMIN && et.required_role != ROLE_ADMIN)
            }
            None => false,
        }
    }

    /// 角色能否编辑该类型事件（由事件类型自身的 can_edit 决定）
    pub fn can_edit_event(&self, role: &str, event_type_id: &str) -> bool {
        match self.event_type(event_type_id) {
            Some(et) => et.allows_edit_by(role) || role == ROLE_ADMIN,
            None => false,
        }
    }

    /// 角色能否查看该类型事件（由事件类型自身的 can_view 决定）
    pub fn can_view_event(&self, role: &str, event_type_id: &str) -> bool {
        match self.event_type(event_type_id) {
            Some(et) => et.allows_view_by(role) || role == ROLE_ADMIN,
            None => false,
        }
    }

    /// 角色能否删除该类型事件
    ///
    /// 与编辑/查看不同，删除由角色聚合表的 can_delete_events 决定，
    /// 且不做事件类型存在性检查。两条查询路径刻意保持独立。
    pub fn can_delete_event(&self, role: &str, event_type_id: &str) -> bool {
        if role == ROLE_ADMIN {
            return true;
        }
        self.role_permissions(role)
            .is_some_and(|rp| rp.can_delete_events.iter().any(|id| id == event_type_id))
    }

    /// 角色能否审批该类型事件
    /// requires_approval 为 false 的类型任何角色都不能审批，admin 也不行。
    pub fn can_approve_event(&self, role: &str, event_type_id: &str) -> bool {
        match self.event_type(event_type_id) {
            Some(et) => et.requires_approval && (et.allows_edit_by(role) || role == ROLE_ADMIN),
            None => false,
        }
    }

    /// 角色聚合权限记录；角色不在表中返回 None（非错误）
    pub fn role_permissions(&self, role: &str) -> Option<&RolePermission> {
        self.role_permissions.iter().find(|rp| rp.role == role)
    }

    /// 系统级布尔权限；角色不存在返回 false
    pub fn has_permission(&self, role: &str, permission: SystemPermission) -> bool {
        match self.role_permissions(role) {
            Some(rp) => match permission {
                SystemPermission::ManageUsers => rp.can_manage_users,
                SystemPermission::ViewReports => rp.can_view_reports,
                SystemPermission::ExportData => rp.can_export_data,
                SystemPermission::ManageSystem => rp.can_manage_system,
            },
            None => false,
        }
    }

    /// 创建校验：失败时返回带角色与事件类型 id 的拒绝消息
    pub fn validate_event_creation(&self, role: &str, event_type_id: &str) -> ValidationOutcome {
        if self.can_create_event(role, event_type_id) {
            ValidationOutcome::ok()
        } else {
            tracing::warn!(
                role = %role,
                event_type_id = %event_type_id,
                "Event creation denied"
            );
            ValidationOutcome::rejected(format!(
                "Role '{}' is not allowed to create '{}' events",
                role, event_type_id
            ))
        }
    }

    /// 编辑校验：失败时返回带角色与事件类型 id 的拒绝消息
    pub fn validate_event_edit(&self, role: &str, event_type_id: &str) -> ValidationOutcome {
        if self.can_edit_event(role, event_type_id) {
            ValidationOutcome::ok()
        } else {
            tracing::warn!(
                role = %role,
                event_type_id = %event_type_id,
                "Event edit denied"
            );
            ValidationOutcome::rejected(format!(
                "Role '{}' is not allowed to edit '{}' events",
                role, event_type_id
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_pass_validation() {
        assert!(PermissionService::with_builtin().is_ok());
    }

    #[test]
    fn test_new_rejects_unknown_event_reference() {
        let mut roles = catalog::builtin_role_permissions();
        roles[0].can_delete_events.push("no-such-event".to_string());

        let result = PermissionService::new(catalog::builtin_event_types(), roles);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_required_role_outside_can_edit() {
        let mut events = catalog::builtin_event_types();
        events[0].can_edit.clear();

        let result = PermissionService::new(events, catalog::builtin_role_permissions());
        assert!(result.is_err());
    }
}
