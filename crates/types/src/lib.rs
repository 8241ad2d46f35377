#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Project object model records for clay
//!
//! This crate holds the plain data that the fluent builders populate: the
//! distribution management block of a project and its nested records, plus
//! the input-location metadata every record can carry.

pub mod distribution;
pub mod location;
pub mod status;
pub mod validation;

// Re-export commonly used types
pub use distribution::{DeploymentRepository, DistributionManagement, Relocation, Site};
pub use location::{InputLocation, InputLocationTracker, InputSource, LocationKey, Locations};
pub use status::DistributionStatus;
pub use validation::ValidationPolicy;
