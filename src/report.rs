// 📋 Allocation Report - observation of one allocation run
//
// The allocator mutates the catalog in place; the report is a read-only
// record of what happened, suitable for printing or JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed assignment, in commit order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftAssignment {
    pub child_id: u32,
    pub gift_id: u32,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    /// When this run completed
    pub generated_at: DateTime<Utc>,

    /// Children that entered the allocation loop (age <= 18)
    pub eligible_children: usize,

    /// Young adults skipped by the age filter
    pub excluded_children: usize,

    /// Every committed assignment, in the order the allocator made them
    pub assignments: Vec<GiftAssignment>,

    /// Sum of prices over committed assignments
    pub total_value: f64,
}

impl AllocationReport {
    pub fn new(eligible_children: usize, excluded_children: usize) -> Self {
        AllocationReport {
            generated_at: Utc::now(),
            eligible_children,
            excluded_children,
            assignments: Vec::new(),
            total_value: 0.0,
        }
    }

    pub fn record(&mut self, assignment: GiftAssignment) {
        self.total_value += assignment.price;
        self.assignments.push(assignment);
    }

    /// Assignments committed to one child, in commit order
    pub fn assignments_for(&self, child_id: u32) -> Vec<&GiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.child_id == child_id)
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} gift(s) assigned to {} eligible child(ren) ({} excluded), total value {:.2}",
            self.assignments.len(),
            self.eligible_children,
            self.excluded_children,
            self.total_value
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_assignments_and_value() {
        let mut report = AllocationReport::new(2, 1);

        report.record(GiftAssignment {
            child_id: 1,
            gift_id: 100,
            category: "toy-car".to_string(),
            price: 15.0,
        });
        report.record(GiftAssignment {
            child_id: 2,
            gift_id: 101,
            category: "books".to_string(),
            price: 5.5,
        });

        assert_eq!(report.assignments.len(), 2);
        assert_eq!(report.total_value, 20.5);
        assert_eq!(report.assignments_for(1).len(), 1);
        assert_eq!(report.assignments_for(1)[0].gift_id, 100);
        assert!(report.assignments_for(3).is_empty());
    }

    #[test]
    fn test_summary_line() {
        let mut report = AllocationReport::new(1, 2);
        report.record(GiftAssignment {
            child_id: 1,
            gift_id: 100,
            category: "toy-car".to_string(),
            price: 15.0,
        });

        let summary = report.summary();
        assert!(summary.contains("1 gift(s)"));
        assert!(summary.contains("1 eligible"));
        assert!(summary.contains("2 excluded"));
        assert!(summary.contains("15.00"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = AllocationReport::new(0, 0);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("generated_at"));
        assert!(json.contains("\"assignments\":[]"));
    }
}
