//! 导航菜单查询
//! 纯路由元数据查找表，不包含任何授权语义

use crate::models::role::*;
use once_cell::sync::Lazy;

/// 公共仪表盘入口，viewer 角色的菜单在自身条目前追加该项
static DASHBOARD_ENTRY: Lazy<NavItem> = Lazy::new(|| NavItem::new("Dashboard", "/dashboard"));

/// 角色对应的导航条目；未知角色返回空列表
pub fn navigation_items(role: &str) -> Vec<NavItem> {
    match role {
        ROLE_FARMER => vec![
            NavItem::new("Farm Overview", "/farmer"),
            NavItem::new("Record Event", "/farmer/record"),
            NavItem::new("My Plots", "/farmer/plots"),
            NavItem::new("Reports", "/farmer/reports"),
        ],
        ROLE_INSPECTOR => vec![
            NavItem::new("Inspection Queue", "/inspector"),
            NavItem::new("Certifications", "/inspector/certifications"),
            NavItem::new("Reports", "/inspector/reports"),
        ],
        ROLE_LOGISTICS => vec![
            NavItem::new("Shipments", "/logistics"),
            NavItem::new("Record Transport", "/logistics/record"),
        ],
        ROLE_PACKAGING => vec![
            NavItem::new("Packaging Lines", "/packaging"),
            NavItem::new("Record Packaging", "/packaging/record"),
        ],
        ROLE_RETAILER => vec![
            NavItem::new("Incoming Goods", "/retailer"),
            NavItem::new("Shelf Records", "/retailer/shelf"),
        ],
        ROLE_VIEWER => vec![DASHBOARD_ENTRY.clone(), NavItem::new("Trace Product", "/trace")],
        ROLE_ADMIN => vec![
            NavItem::new("Admin Console", "/admin"),
            NavItem::new("User Management", "/admin/users"),
            NavItem::new("System Settings", "/admin/settings"),
            NavItem::new("Reports", "/admin/reports"),
        ],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_menu_starts_with_dashboard() {
        let items = navigation_items(ROLE_VIEWER);
        assert_eq!(items[0], NavItem::new("Dashboard", "/dashboard"));
    }

    #[test]
    fn test_unknown_role_has_no_menu() {
        assert!(navigation_items("ghost").is_empty());
    }
}
