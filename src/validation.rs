// 📐 Catalog Validation - fail fast before the allocator sorts anything
//
// The allocation algorithm is total over well-formed input; the one invalid
// state it cannot tolerate is a non-finite number reaching a comparator.
// Validation runs once, before any mutation, and reports every violation.

use crate::catalog::Catalog;
use anyhow::{anyhow, Result};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl ValidationError {
    fn child(id: u32, field: &str, message: String) -> Self {
        ValidationError {
            field: field.to_string(),
            message,
            context: format!("Child {}", id),
        }
    }

    fn gift(id: u32, field: &str, message: String) -> Self {
        ValidationError {
            field: field.to_string(),
            message,
            context: format!("Gift {}", id),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CATALOG VALIDATOR
// ============================================================================

/// Validate every child and gift record; returns every violation found.
/// An empty vec means the catalog is safe to allocate.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for child in &catalog.children {
        if !child.average_score.is_finite() {
            errors.push(ValidationError::child(
                child.id,
                "average_score",
                format!("Must be a finite number, got {}", child.average_score),
            ));
        }

        if !child.assigned_budget.is_finite() {
            errors.push(ValidationError::child(
                child.id,
                "assigned_budget",
                format!("Must be a finite number, got {}", child.assigned_budget),
            ));
        }
    }

    for gift in &catalog.gifts {
        if !gift.price.is_finite() || gift.price < 0.0 {
            errors.push(ValidationError::gift(
                gift.id,
                "price",
                format!("Must be a finite non-negative number, got {}", gift.price),
            ));
        }
    }

    errors
}

/// Convert the violation list into a single error listing every problem,
/// or Ok when the catalog is well-formed.
pub fn ensure_valid(catalog: &Catalog) -> Result<()> {
    let errors = validate_catalog(catalog);
    if errors.is_empty() {
        return Ok(());
    }

    let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    Err(anyhow!(
        "Invalid catalog ({} record error(s)): {}",
        errors.len(),
        details.join("; ")
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Child, Gift};

    fn valid_catalog() -> Catalog {
        Catalog::new(
            vec![Child::new(1, 10, 8.0, 20.0, vec!["toy".to_string()])],
            vec![Gift::new(100, "toy-car", 15.0, 1)],
        )
    }

    #[test]
    fn test_valid_catalog_passes() {
        let catalog = valid_catalog();
        assert!(validate_catalog(&catalog).is_empty());
        assert!(ensure_valid(&catalog).is_ok());
    }

    #[test]
    fn test_nan_score_rejected() {
        let mut catalog = valid_catalog();
        catalog.children[0].average_score = f64::NAN;

        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "average_score");
        assert_eq!(errors[0].context, "Child 1");
    }

    #[test]
    fn test_infinite_budget_rejected() {
        let mut catalog = valid_catalog();
        catalog.children[0].assigned_budget = f64::INFINITY;

        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "assigned_budget");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut catalog = valid_catalog();
        catalog.gifts[0].price = -1.0;

        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "price");
        assert_eq!(errors[0].context, "Gift 100");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut catalog = valid_catalog();
        catalog.children[0].average_score = f64::NAN;
        catalog.gifts[0].price = f64::NAN;

        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 2);

        let err = ensure_valid(&catalog).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 record error(s)"));
        assert!(msg.contains("average_score"));
        assert!(msg.contains("price"));
    }
}
