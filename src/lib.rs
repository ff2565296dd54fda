// Gift Allocation System - Core Library
// Exposes all modules for use in the CLI and tests

pub mod allocator;
pub mod catalog;
pub mod entities;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use allocator::allocate;
pub use catalog::Catalog;
pub use entities::{Child, Gift};
pub use entities::child::YOUNG_ADULT_AGE;
pub use report::{AllocationReport, GiftAssignment};
pub use validation::{ensure_valid, validate_catalog, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
