//! 内置静态目录
//! 事件类型目录与角色权限表，进程启动时构建一次，运行期只读

use crate::models::event_type::{EventCategory, EventType};
use crate::models::role::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    name: &str,
    description: &str,
    category: EventCategory,
    required_role: &str,
    can_edit: &[&str],
    can_view: &[&str],
    requires_approval: bool,
    attachments_allowed: bool,
) -> EventType {
    EventType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        required_role: required_role.to_string(),
        can_edit: strings(can_edit),
        can_view: strings(can_view),
        requires_approval,
        attachments_allowed,
    }
}

/// 内置事件类型目录（顺序即展示顺序）
pub fn builtin_event_types() -> Vec<EventType> {
    vec![
        event(
            "seed-planting",
            "Seed Planting",
            "Seeds or seedlings planted on a registered plot",
            EventCategory::Planting,
            ROLE_FARMER,
            &[ROLE_FARMER],
            &[ROLE_FARMER, ROLE_INSPECTOR, ROLE_VIEWER],
            false,
            true,
        ),
        event(
            "fertilization",
            "Fertilization",
            "Fertilizer application record",
            EventCategory::Growth,
            ROLE_FARMER,
            &[ROLE_FARMER],
            &[ROLE_FARMER, ROLE_INSPECTOR, ROLE_VIEWER],
            false,
            true,
        ),
        event(
            "irrigation",
            "Irrigation",
            "Irrigation session record",
            EventCategory::Growth,
            ROLE_FARMER,
            &[ROLE_FARMER],
            &[ROLE_FARMER, ROLE_INSPECTOR],
            false,
            false,
        ),
        event(
            "pest-control",
            "Pest Control",
            "Pesticide or biological control application, subject to review",
            EventCategory::Growth,
            ROLE_FARMER,
            &[ROLE_FARMER, ROLE_INSPECTOR],
            &[ROLE_FARMER, ROLE_INSPECTOR, ROLE_VIEWER],
            true,
            true,
        ),
        event(
            "harvest",
            "Harvest",
            "Crop harvested and batch number assigned",
            EventCategory::Harvest,
            ROLE_FARMER,
            &[ROLE_FARMER, ROLE_INSPECTOR],
            &[ROLE_FARMER, ROLE_INSPECTOR, ROLE_LOGISTICS, ROLE_RETAILER, ROLE_VIEWER],
            false,
            true,
        ),
        event(
            "quality-inspection",
            "Quality Inspection",
            "On-site quality inspection of a harvested batch",
            EventCategory::Quality,
            ROLE_INSPECTOR,
            &[ROLE_INSPECTOR],
            &[ROLE_FARMER, ROLE_INSPECTOR, ROLE_RETAILER, ROLE_VIEWER],
            true,
            true,
        ),
        event(
            "certification",
            "Certification",
            "Quality certification issued for a batch",
            EventCategory::Quality,
            ROLE_INSPECTOR,
            &[ROLE_INSPECTOR],
            &[
                ROLE_FARMER,
                ROLE_INSPECTOR,
                ROLE_LOGISTICS,
                ROLE_PACKAGING,
                ROLE_RETAILER,
                ROLE_VIEWER,
            ],
            true,
            true,
        ),
        event(
            "transport-departure",
            "Transport Departure",
            "Batch picked up and in transit",
            EventCategory::Logistics,
            ROLE_LOGISTICS,
            &[ROLE_LOGISTICS],
            &[ROLE_LOGISTICS, ROLE_PACKAGING, ROLE_RETAILER, ROLE_VIEWER],
            false,
            false,
        ),
        event(
            "transport-arrival",
            "Transport Arrival",
            "Batch delivered at destination",
            EventCategory::Logistics,
            ROLE_LOGISTICS,
            &[ROLE_LOGISTICS],
            &[ROLE_LOGISTICS, ROLE_PACKAGING, ROLE_RETAILER, ROLE_VIEWER],
            false,
            false,
        ),
        event(
            "packaging",
            "Packaging",
            "Batch packaged into consumer units",
            EventCategory::Packaging,
            ROLE_PACKAGING,
            &[ROLE_PACKAGING],
            &[ROLE_PACKAGING, ROLE_RETAILER, ROLE_VIEWER],
            false,
            true,
        ),
        event(
            "labeling",
            "Labeling",
            "Trace labels printed and applied",
            EventCategory::Packaging,
            ROLE_PACKAGING,
            &[ROLE_PACKAGING],
            &[ROLE_PACKAGING, ROLE_RETAILER, ROLE_VIEWER],
            false,
            false,
        ),
        event(
            "retail-receiving",
            "Retail Receiving",
            "Goods received and shelved at the retail store",
            EventCategory::Logistics,
            ROLE_RETAILER,
            &[ROLE_RETAILER],
            &[ROLE_LOGISTICS, ROLE_RETAILER, ROLE_VIEWER],
            false,
            false,
        ),
    ]
}

const ALL_EVENT_IDS: &[&str] = &[
    "seed-planting",
    "fertilization",
    "irrigation",
    "pest-control",
    "harvest",
    "quality-inspection",
    "certification",
    "transport-departure",
    "transport-arrival",
    "packaging",
    "labeling",
    "retail-receiving",
];

/// 内置角色权限表
pub fn builtin_role_permissions() -> Vec<RolePermission> {
    vec![
        RolePermission {
            role: ROLE_FARMER.to_string(),
            can_create_events: strings(&[
                "seed-planting",
                "fertilization",
                "irrigation",
                "pest-control",
                "harvest",
            ]),
            can_edit_events: strings(&[
                "seed-planting",
                "fertilization",
                "irrigation",
                "pest-control",
                "harvest",
            ]),
            can_view_events: strings(&[
                "seed-planting",
                "fertilization",
                "irrigation",
                "pest-control",
                "harvest",
                "quality-inspection",
                "certification",
            ]),
            // 收获记录进入流通环节后不允许农户删除
            can_delete_events: strings(&["seed-planting", "fertilization", "irrigation"]),
            can_approve_events: vec![],
            can_manage_users: false,
            can_view_reports: true,
            can_export_data: false,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_INSPECTOR.to_string(),
            can_create_events: strings(&["quality-inspection", "certification"]),
            can_edit_events: strings(&["pest-control", "quality-inspection", "certification"]),
            can_view_events: strings(&[
                "seed-planting",
                "fertilization",
                "irrigation",
                "pest-control",
                "harvest",
                "quality-inspection",
                "certification",
            ]),
            can_delete_events: vec![],
            can_approve_events: strings(&["pest-control", "quality-inspection", "certification"]),
            can_manage_users: false,
            can_view_reports: true,
            can_export_data: true,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_LOGISTICS.to_string(),
            can_create_events: strings(&["transport-departure", "transport-arrival"]),
            can_edit_events: strings(&["transport-departure", "transport-arrival"]),
            can_view_events: strings(&[
                "harvest",
                "certification",
                "transport-departure",
                "transport-arrival",
                "retail-receiving",
            ]),
            can_delete_events: strings(&["transport-departure", "transport-arrival"]),
            can_approve_events: vec![],
            can_manage_users: false,
            can_view_reports: false,
            can_export_data: false,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_PACKAGING.to_string(),
            can_create_events: strings(&["packaging", "labeling"]),
            can_edit_events: strings(&["packaging", "labeling"]),
            can_view_events: strings(&[
                "certification",
                "transport-departure",
                "transport-arrival",
                "packaging",
                "labeling",
            ]),
            can_delete_events: strings(&["labeling"]),
            can_approve_events: vec![],
            can_manage_users: false,
            can_view_reports: false,
            can_export_data: false,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_RETAILER.to_string(),
            can_create_events: strings(&["retail-receiving"]),
            can_edit_events: strings(&["retail-receiving"]),
            can_view_events: strings(&[
                "harvest",
                "quality-inspection",
                "certification",
                "transport-departure",
                "transport-arrival",
                "packaging",
                "labeling",
                "retail-receiving",
            ]),
            can_delete_events: vec![],
            can_approve_events: vec![],
            can_manage_users: false,
            can_view_reports: true,
            can_export_data: false,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_VIEWER.to_string(),
            can_create_events: vec![],
            can_edit_events: vec![],
            // 公众侧只读，可见性完全由事件类型的 can_view 决定
            can_view_events: strings(&[
                "seed-planting",
                "fertilization",
                "pest-control",
                "harvest",
                "quality-inspection",
                "certification",
                "transport-departure",
                "transport-arrival",
                "packaging",
                "labeling",
                "retail-receiving",
            ]),
            can_delete_events: vec![],
            can_approve_events: vec![],
            can_manage_users: false,
            can_view_reports: false,
            can_export_data: false,
            can_manage_system: false,
        },
        RolePermission {
            role: ROLE_ADMIN.to_string(),
            can_create_events: strings(ALL_EVENT_IDS),
            can_edit_events: strings(ALL_EVENT_IDS),
            can_view_events: strings(ALL_EVENT_IDS),
            can_delete_events: strings(ALL_EVENT_IDS),
            can_approve_events: strings(ALL_EVENT_IDS),
            can_manage_users: true,
            can_view_reports: true,
            can_export_data: true,
            can_manage_system: true,
        },
    ]
}
