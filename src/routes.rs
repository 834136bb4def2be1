//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 注册表查询端点（全部只读）
    let api_routes = Router::new()
        .route("/api/v1/event-types", get(handlers::event_type::list_event_types))
        .route(
            "/api/v1/event-types/creatable",
            get(handlers::event_type::list_creatable_event_types),
        )
        .route("/api/v1/permissions/check", get(handlers::permission::check_permission))
        .route("/api/v1/permissions/validate", get(handlers::permission::validate_action))
        .route(
            "/api/v1/roles/{role}/permissions",
            get(handlers::permission::get_role_permissions),
        )
        .route(
            "/api/v1/roles/{role}/system/{permission}",
            get(handlers::permission::check_system_permission),
        )
        .route("/api/v1/roles/{role}/navigation", get(handlers::navigation::get_navigation));

    // 指标端点
    let metrics_routes = Router::new().route("/metrics", get(handlers::metrics::metrics_export));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(metrics_routes)
        // 仪表盘前端跨域只读访问
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
