use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unordered set of distinct user identities; the count is its cardinality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VoterSnapshot", into = "VoterSnapshot")]
pub struct VoterSet {
    users: HashSet<Uuid>,
}

impl VoterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user_id: &Uuid) -> bool {
        self.users.contains(user_id)
    }

    /// Returns false when the user was already present
    pub fn insert(&mut self, user_id: Uuid) -> bool {
        self.users.insert(user_id)
    }

    /// Returns false when the user was not present
    pub fn remove(&mut self, user_id: &Uuid) -> bool {
        self.users.remove(user_id)
    }

    pub fn count(&self) -> u32 {
        self.users.len() as u32
    }
}

#[derive(Serialize, Deserialize)]
struct VoterSnapshot {
    #[serde(default)]
    count: u32,
    #[serde(default)]
    users: Vec<Uuid>,
}

impl From<VoterSnapshot> for VoterSet {
    fn from(snapshot: VoterSnapshot) -> Self {
        Self {
            users: snapshot.users.into_iter().collect(),
        }
    }
}

impl From<VoterSet> for VoterSnapshot {
    fn from(set: VoterSet) -> Self {
        Self {
            count: set.count(),
            users: set.users.into_iter().collect(),
        }
    }
}

/// Reporters of a review plus the free-text reasons they gave
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLog {
    #[serde(flatten)]
    reporters: VoterSet,
    #[serde(default)]
    reasons: Vec<String>,
}

impl ReportLog {
    pub fn has_reported(&self, user_id: &Uuid) -> bool {
        self.reporters.contains(user_id)
    }

    /// Record a report; returns false for a repeat reporter and records nothing
    pub fn record(&mut self, reporter: Uuid, reason: Option<String>) -> bool {
        if !self.reporters.insert(reporter) {
            return false;
        }
        if let Some(reason) = reason {
            self.reasons.push(reason);
        }
        true
    }

    pub fn count(&self) -> u32 {
        self.reporters.count()
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tracks_cardinality() {
        let mut set = VoterSet::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.insert(b));
        assert_eq!(set.count(), 2);

        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert_eq!(set.count(), 1);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_deserialize_dedupes_and_recounts() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"count": 9, "users": ["{id}", "{id}"]}}"#);
        let set: VoterSet = serde_json::from_str(&json).unwrap();

        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_report_log_ignores_repeat_reporter() {
        let mut log = ReportLog::default();
        let reporter = Uuid::new_v4();

        assert!(log.record(reporter, Some("spam".into())));
        assert!(!log.record(reporter, Some("still spam".into())));
        assert!(log.record(Uuid::new_v4(), None));

        assert_eq!(log.count(), 2);
        assert_eq!(log.reasons(), ["spam".to_string()]);
    }

    #[test]
    fn test_report_log_serialized_shape() {
        let mut log = ReportLog::default();
        log.record(Uuid::new_v4(), Some("offensive".into()));
        let json = serde_json::to_value(&log).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["users"].as_array().unwrap().len(), 1);
        assert_eq!(json["reasons"][0], "offensive");
    }
}
