// Entity Models - static configuration data
//
// Each entity has:
// - Stable slug identity used in routes and form values
// - A read-only registry for lookups

pub mod category;
pub mod condition;

pub use category::{Category, CategoryRegistry};
pub use condition::{ConditionGrade, ConditionRegistry};
