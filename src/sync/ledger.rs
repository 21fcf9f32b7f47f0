use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity kinds tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Template,
    Plan,
    Session,
    Client,
    Exercise,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Template,
        EntityKind::Plan,
        EntityKind::Session,
        EntityKind::Client,
        EntityKind::Exercise,
    ];

    /// Storage key of the collection holding this kind.
    pub fn collection_key(&self) -> &'static str {
        match self {
            EntityKind::Template => "workout_templates",
            EntityKind::Plan => "workout_plans",
            EntityKind::Session => "workout_sessions",
            EntityKind::Client => "clients",
            EntityKind::Exercise => "exercises",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Template => write!(f, "template"),
            EntityKind::Plan => write!(f, "plan"),
            EntityKind::Session => write!(f, "session"),
            EntityKind::Client => write!(f, "client"),
            EntityKind::Exercise => write!(f, "exercise"),
        }
    }
}

/// What the remote backend should do with the entity on the next sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncAction::Create => write!(f, "create"),
            SyncAction::Update => write!(f, "update"),
            SyncAction::Delete => write!(f, "delete"),
        }
    }
}

/// One outstanding mutation, keyed by (kind, id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncLedgerEntry {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub id: String,
    pub action: SyncAction,
    pub timestamp: DateTime<Utc>,
}

impl SyncLedgerEntry {
    pub fn new(kind: EntityKind, id: &str, action: SyncAction) -> Self {
        Self {
            kind,
            id: id.to_string(),
            action,
            timestamp: Utc::now(),
        }
    }

    /// Whether this entry is keyed by the given (kind, id) pair.
    pub fn matches(&self, kind: EntityKind, id: &str) -> bool {
        self.kind == kind && self.id == id
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.timestamp).num_minutes()
    }

    /// Human-readable age for display ("just now", "5m ago", "2h ago", ...).
    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew (negative ages)
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_entry_serializes_with_type_field() {
        let entry = SyncLedgerEntry::new(EntityKind::Template, "template-1", SyncAction::Delete);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "template");
        assert_eq!(json["action"], "delete");
        assert_eq!(json["id"], "template-1");
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_matches() {
        let entry = SyncLedgerEntry::new(EntityKind::Plan, "plan-1", SyncAction::Create);
        assert!(entry.matches(EntityKind::Plan, "plan-1"));
        assert!(!entry.matches(EntityKind::Plan, "plan-2"));
        assert!(!entry.matches(EntityKind::Session, "plan-1"));
    }

    #[test]
    fn test_age_display_just_now() {
        let entry = SyncLedgerEntry::new(EntityKind::Client, "client-1", SyncAction::Update);
        assert_eq!(entry.age_display(), "just now");
    }

    #[test]
    fn test_age_display_rounding() {
        let mut entry = SyncLedgerEntry::new(EntityKind::Client, "client-1", SyncAction::Update);

        entry.timestamp = Utc::now() - Duration::minutes(5);
        assert_eq!(entry.age_display(), "5m ago");

        // 1h 45m rounds up to 2h
        entry.timestamp = Utc::now() - Duration::minutes(105);
        assert_eq!(entry.age_display(), "2h ago");

        // 1d 13h rounds up to 2d
        entry.timestamp = Utc::now() - Duration::minutes(1440 + 13 * 60);
        assert_eq!(entry.age_display(), "2d ago");
    }

    #[test]
    fn test_collection_key() {
        assert_eq!(EntityKind::Template.collection_key(), "workout_templates");
        assert_eq!(EntityKind::Exercise.collection_key(), "exercises");
    }
}
