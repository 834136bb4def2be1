//! 测试公共模块
//! 提供测试辅助函数和测试工具

use std::sync::Arc;
use trace_system::{
    config::{AppConfig, LoggingConfig, ServerConfig},
    middleware::AppState,
    services::PermissionService,
};

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(), // 使用随机端口
            graceful_shutdown_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// 创建测试应用状态（内置目录）
pub fn create_test_app_state() -> Arc<AppState> {
    Arc::new(AppState {
        config: create_test_config(),
        permission_service: Arc::new(
            PermissionService::with_builtin().expect("builtin tables must validate"),
        ),
    })
}
