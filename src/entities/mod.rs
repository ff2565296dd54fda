// Entity Models - plain data records for one allocation run
//
// Each entity is:
// - Constructed and populated by the Catalog loaders before allocation
// - Mutated only by the allocator (budget, received gifts, stock)

pub mod child;
pub mod gift;

pub use child::Child;
pub use gift::Gift;
