// 🧒 Child Entity - recipient record for one allocation run
//
// The id is identity (never changes, orderable); age, score and preferences
// are read-only inputs; assigned_budget and received_gifts are the two
// fields the allocator mutates.

use serde::{Deserialize, Serialize};

/// Age above which a child is a young adult and excluded from allocation.
/// A child aged exactly 18 is still eligible.
pub const YOUNG_ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    /// Stable identity - unique within a catalog, used as the priority
    /// tie-break key
    pub id: u32,

    /// Age in years
    pub age: u32,

    /// Averaged merit score - higher scores are served first
    pub average_score: f64,

    /// Currency ceiling for this child's gifts. Decremented during
    /// allocation; the post-run value is the persisted remaining budget.
    pub assigned_budget: f64,

    /// Preference categories in priority order (first = most wanted).
    /// Matched against gift categories by substring containment.
    pub gift_preferences: Vec<String>,

    /// Ids of gifts committed to this child, in commit order.
    /// Empty before allocation.
    #[serde(default)]
    pub received_gifts: Vec<u32>,
}

impl Child {
    pub fn new(
        id: u32,
        age: u32,
        average_score: f64,
        assigned_budget: f64,
        gift_preferences: Vec<String>,
    ) -> Self {
        Child {
            id,
            age,
            average_score,
            assigned_budget,
            gift_preferences,
            received_gifts: Vec::new(),
        }
    }

    /// Children strictly older than the threshold are skipped entirely
    pub fn is_young_adult(&self) -> bool {
        self.age > YOUNG_ADULT_AGE
    }

    /// Membership test guarding the no-double-gift invariant
    pub fn has_gift(&self, gift_id: u32) -> bool {
        self.received_gifts.contains(&gift_id)
    }

    /// Append a committed gift id (append-only, never removed)
    pub fn receive_gift(&mut self, gift_id: u32) {
        self.received_gifts.push(gift_id);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_child(age: u32) -> Child {
        Child::new(1, age, 8.5, 100.0, vec!["toys".to_string()])
    }

    #[test]
    fn test_child_creation() {
        let child = sample_child(10);

        assert_eq!(child.id, 1);
        assert_eq!(child.age, 10);
        assert_eq!(child.average_score, 8.5);
        assert_eq!(child.assigned_budget, 100.0);
        assert_eq!(child.gift_preferences, vec!["toys".to_string()]);
        assert!(child.received_gifts.is_empty());
    }

    #[test]
    fn test_young_adult_boundary() {
        // 18 is still eligible, 19 is not
        assert!(!sample_child(18).is_young_adult());
        assert!(sample_child(19).is_young_adult());
        assert!(!sample_child(0).is_young_adult());
    }

    #[test]
    fn test_receive_and_membership() {
        let mut child = sample_child(10);

        assert!(!child.has_gift(42));
        child.receive_gift(42);
        assert!(child.has_gift(42));
        assert!(!child.has_gift(43));

        child.receive_gift(43);
        assert_eq!(child.received_gifts, vec![42, 43]);
    }

    #[test]
    fn test_child_deserialize_defaults_received_gifts() {
        let json = r#"{
            "id": 7,
            "age": 12,
            "average_score": 9.1,
            "assigned_budget": 50.0,
            "gift_preferences": ["books", "toys"]
        }"#;

        let child: Child = serde_json::from_str(json).unwrap();
        assert_eq!(child.id, 7);
        assert!(child.received_gifts.is_empty());
        assert_eq!(child.gift_preferences.len(), 2);
    }
}
