//! 导航菜单的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, services::navigation};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// 角色导航条目；未知角色返回空列表
pub async fn get_navigation(
    State(_state): State<Arc<AppState>>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = navigation::navigation_items(&role);

    let count = items.len();
    Ok(Json(json!({
        "items": items,
        "count": count
    })))
}
