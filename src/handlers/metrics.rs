//! 指标处理器
//! 提供 /metrics 端点

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::middleware::AppState;

/// 指标响应
#[derive(Serialize)]
pub struct MetricsResponse {
    pub event_type_count: usize,
    pub role_count: usize,
    pub process_uptime_secs: u64,
}

/// 指标暴露端点
pub async fn metrics_export(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    // 简化实现：返回基础指标
    // 实际生产环境应使用 Prometheus exporter

    Json(MetricsResponse {
        event_type_count: state.permission_service.event_types().len(),
        role_count: state.permission_service.role_count(),
        process_uptime_secs: crate::handlers::health::get_uptime(),
    })
}
