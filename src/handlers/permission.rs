//! 权限查询的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::AppState,
    models::role::SystemPermission,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;

/// 权限判定查询参数
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub role: String,
    pub event_type: String,
    pub action: String,
}

/// 权限判定
/// action ∈ {create, edit, view, delete, approve}；
/// 未知角色或事件类型降级为 allowed=false，未知 action 是请求错误。
pub async fn check_permission(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = &state.permission_service;
    let (role, id) = (query.role.as_str(), query.event_type.as_str());

    let allowed = match query.action.as_str() {
        "create" => service.can_create_event(role, id),
        "edit" => service.can_edit_event(role, id),
        "view" => service.can_view_event(role, id),
        "delete" => service.can_delete_event(role, id),
        "approve" => service.can_approve_event(role, id),
        other => {
            return Err(AppError::BadRequest(format!("Unknown action: {}", other)));
        }
    };

    Ok(Json(json!({ "allowed": allowed })))
}

/// 创建/编辑校验，返回 {valid, message?}
pub async fn validate_action(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = &state.permission_service;
    let (role, id) = (query.role.as_str(), query.event_type.as_str());

    let outcome = match query.action.as_str() {
        "create" => service.validate_event_creation(role, id),
        "edit" => service.validate_event_edit(role, id),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown action: {}. Must be one of: create, edit",
                other
            )));
        }
    };

    Ok(Json(outcome))
}

/// 角色聚合权限记录；角色不在表中返回 404
pub async fn get_role_permissions(
    State(state): State<Arc<AppState>>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let permissions = state
        .permission_service
        .role_permissions(&role)
        .ok_or(AppError::NotFound)?;

    Ok(Json(permissions.clone()))
}

/// 系统级布尔权限查询；未知角色降级为 granted=false
pub async fn check_system_permission(
    State(state): State<Arc<AppState>>,
    Path((role, permission)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let permission = SystemPermission::from_str(&permission)
        .map_err(|_| AppError::BadRequest(format!("Unknown system permission: {}", permission)))?;

    let granted = state.permission_service.has_permission(&role, permission);

    Ok(Json(json!({ "granted": granted })))
}
