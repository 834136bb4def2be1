//! Traceability event type domain models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supply-chain stage a traceability event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Planting,
    Growth,
    Harvest,
    Quality,
    Logistics,
    Packaging,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Planting => "planting",
            EventCategory::Growth => "growth",
            EventCategory::Harvest => "harvest",
            EventCategory::Quality => "quality",
            EventCategory::Logistics => "logistics",
            EventCategory::Packaging => "packaging",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planting" => Ok(EventCategory::Planting),
            "growth" => Ok(EventCategory::Growth),
            "harvest" => Ok(EventCategory::Harvest),
            "quality" => Ok(EventCategory::Quality),
            "logistics" => Ok(EventCategory::Logistics),
            "packaging" => Ok(EventCategory::Packaging),
            _ => Err(()),
        }
    }
}

/// Event type (static authorization metadata for one kind of traceability record)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: EventCategory,
    /// The single role allowed to originate events of this type
    pub required_role: String,
    /// Roles allowed to modify an existing event of this type
    pub can_edit: Vec<String>,
    /// Roles allowed to read events of this type
    pub can_view: Vec<String>,
    /// Whether a second approval step is required before the event is final
    pub requires_approval: bool,
    /// Whether file/photo attachments may be associated with the event
    pub attachments_allowed: bool,
}

impl EventType {
    pub fn allows_edit_by(&self, role: &str) -> bool {
        self.can_edit.iter().any(|r| r == role)
    }

    pub fn allows_view_by(&self, role: &str) -> bool {
        self.can_view.iter().any(|r| r == role)
    }
}
