//! Shared domain models
//!
//! Single source of truth for the types that flow from the catalog through
//! the scanners into the aggregate result.

pub mod feature;
pub mod issue;
pub mod location;
pub mod status;

pub use feature::{BaselineInfo, FeatureDomain, FeatureRecord, SpecificationLink};
pub use issue::Issue;
pub use location::Location;
pub use status::{PriorityLevel, StatusLevel};
