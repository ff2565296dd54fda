// 🎁 Gift Entity - shared stock record
//
// category is the matching key: a preference matches when it appears as a
// substring of the category ("toy" matches "toy-car"). quantity is the
// shared stock counter decremented on every committed assignment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    /// Stable identity - unique within a catalog
    pub id: u32,

    /// Category string; may contain several preference tokens
    /// (e.g. "board games" matches both "board" and "games")
    pub category: String,

    /// Price, non-negative
    pub price: f64,

    /// Remaining stock. Decremented on each committed assignment,
    /// never below 0.
    pub quantity: u32,
}

impl Gift {
    pub fn new(id: u32, category: &str, price: f64, quantity: u32) -> Self {
        Gift {
            id,
            category: category.to_string(),
            price,
            quantity,
        }
    }

    /// Substring containment match against a preference token
    pub fn matches_preference(&self, preference: &str) -> bool {
        self.category.contains(preference)
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Consume one unit of stock after a committed assignment
    pub fn take_one(&mut self) {
        debug_assert!(self.quantity > 0, "take_one on out-of-stock gift");
        self.quantity -= 1;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_creation() {
        let gift = Gift::new(100, "toy-car", 15.0, 3);

        assert_eq!(gift.id, 100);
        assert_eq!(gift.category, "toy-car");
        assert_eq!(gift.price, 15.0);
        assert_eq!(gift.quantity, 3);
    }

    #[test]
    fn test_preference_matching_is_substring_containment() {
        let gift = Gift::new(1, "board games", 20.0, 1);

        assert!(gift.matches_preference("board"));
        assert!(gift.matches_preference("games"));
        assert!(gift.matches_preference("board games"));
        // matching is containment of the preference in the category,
        // not the other way around
        assert!(!gift.matches_preference("board games deluxe"));
        assert!(!gift.matches_preference("toys"));
        // case sensitive, as declared
        assert!(!gift.matches_preference("Board"));
    }

    #[test]
    fn test_stock_consumption() {
        let mut gift = Gift::new(2, "plush", 9.99, 2);

        assert!(gift.in_stock());
        gift.take_one();
        assert_eq!(gift.quantity, 1);
        gift.take_one();
        assert_eq!(gift.quantity, 0);
        assert!(!gift.in_stock());
    }
}
