//! 注册表查询 API 集成测试
//!
//! 未知角色/事件类型在 HTTP 层同样静默降级；
//! 非法的 action/category/权限键属于请求错误，返回 400

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;
use common::create_test_app_state;

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let state = create_test_app_state();
    let app = trace_system::routes::create_router(state);

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_list_full_catalog() {
    let (status, json) = get_json("/api/v1/event-types").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 12);
    assert_eq!(json["event_types"][0]["id"], "seed-planting");
}

#[tokio::test]
async fn test_list_for_viewer_excludes_irrigation() {
    let (status, json) = get_json("/api/v1/event-types?role=viewer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 11);
    let ids: Vec<&str> = json["event_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|et| et["id"].as_str().unwrap())
        .collect();
    assert!(!ids.contains(&"irrigation"));
}

#[tokio::test]
async fn test_list_for_unknown_role_is_empty() {
    let (status, json) = get_json("/api/v1/event-types?role=ghost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_list_by_category() {
    let (status, json) = get_json("/api/v1/event-types?role=farmer&category=growth").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["event_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|et| et["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["fertilization", "irrigation", "pest-control"]);
}

#[tokio::test]
async fn test_list_with_unknown_category_is_bad_request() {
    let (status, json) = get_json("/api/v1/event-types?role=farmer&category=shipping").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], 400);
}

#[tokio::test]
async fn test_category_without_role_is_bad_request() {
    let (status, _) = get_json("/api/v1/event-types?category=growth").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_creatable_event_types_for_farmer() {
    let (status, json) = get_json("/api/v1/event-types/creatable?role=farmer").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["event_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|et| et["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["seed-planting", "fertilization", "irrigation", "pest-control", "harvest"]
    );
}

#[tokio::test]
async fn test_check_create_allowed() {
    let (status, json) =
        get_json("/api/v1/permissions/check?role=farmer&event_type=harvest&action=create").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["allowed"], true);
}

#[tokio::test]
async fn test_check_delete_denied_for_farmer_harvest() {
    let (status, json) =
        get_json("/api/v1/permissions/check?role=farmer&event_type=harvest&action=delete").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["allowed"], false);
}

#[tokio::test]
async fn test_check_unknown_event_type_degrades_to_false() {
    let (status, json) =
        get_json("/api/v1/permissions/check?role=admin&event_type=phantom&action=edit").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["allowed"], false);
}

#[tokio::test]
async fn test_check_unknown_action_is_bad_request() {
    let (status, _) =
        get_json("/api/v1/permissions/check?role=farmer&event_type=harvest&action=publish").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_rejection_embeds_role_and_event_type() {
    let (status, json) =
        get_json("/api/v1/permissions/validate?role=viewer&event_type=harvest&action=create").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("viewer"));
    assert!(message.contains("harvest"));
}

#[tokio::test]
async fn test_validate_pass_has_no_message() {
    let (status, json) =
        get_json("/api/v1/permissions/validate?role=inspector&event_type=certification&action=edit")
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_validate_only_accepts_create_and_edit() {
    let (status, _) =
        get_json("/api/v1/permissions/validate?role=farmer&event_type=harvest&action=delete").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_role_permissions() {
    let (status, json) = get_json("/api/v1/roles/farmer/permissions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["role"], "farmer");
    assert_eq!(json["can_view_reports"], true);
    assert_eq!(json["can_manage_users"], false);
}

#[tokio::test]
async fn test_get_role_permissions_unknown_role_is_404() {
    let (status, json) = get_json("/api/v1/roles/ghost/permissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], 404);
}

#[tokio::test]
async fn test_system_permission_granted() {
    let (status, json) = get_json("/api/v1/roles/inspector/system/canExportData").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["granted"], true);
}

#[tokio::test]
async fn test_system_permission_unknown_role_degrades_to_false() {
    let (status, json) = get_json("/api/v1/roles/ghost/system/canManageUsers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["granted"], false);
}

#[tokio::test]
async fn test_system_permission_unknown_key_is_bad_request() {
    let (status, _) = get_json("/api/v1/roles/farmer/system/canDoAnything").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_viewer_navigation_starts_with_dashboard() {
    let (status, json) = get_json("/api/v1/roles/viewer/navigation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["name"], "Dashboard");
    assert_eq!(json["items"][0]["href"], "/dashboard");
}

#[tokio::test]
async fn test_unknown_role_navigation_is_empty() {
    let (status, json) = get_json("/api/v1/roles/ghost/navigation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}
