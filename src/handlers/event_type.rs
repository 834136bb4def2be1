//! 事件类型目录的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, models::event_type::EventCategory};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;

/// 目录查询参数
#[derive(Debug, Deserialize)]
pub struct ListEventTypesQuery {
    pub role: Option<String>,
    pub category: Option<String>,
}

/// 创建列表查询参数
#[derive(Debug, Deserialize)]
pub struct CreatableQuery {
    pub role: String,
}

/// 列出事件类型目录
/// 不带参数返回完整目录；带 role 返回该角色可见子集；
/// 同时带 category 则再按环节过滤。未知角色返回空列表。
pub async fn list_event_types(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEventTypesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = &state.permission_service;

    let event_types = match (&query.role, &query.category) {
        (None, None) => service.event_types().iter().collect::<Vec<_>>(),
        (Some(role), None) => service.event_types_for_role(role),
        (Some(role), Some(category)) => {
            let category = EventCategory::from_str(category)
                .map_err(|_| AppError::BadRequest(format!("Unknown category: {}", category)))?;
            service.events_by_category(role, category)
        }
        (None, Some(_)) => {
            return Err(AppError::BadRequest(
                "category filter requires a role parameter".to_string(),
            ))
        }
    };

    let count = event_types.len();
    Ok(Json(json!({
        "event_types": event_types,
        "count": count
    })))
}

/// 列出角色可创建的事件类型
pub async fn list_creatable_event_types(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreatableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let event_types = state.permission_service.creatable_event_types(&query.role);

    let count = event_types.len();
    Ok(Json(json!({
        "event_types": event_types,
        "count": count
    })))
}
