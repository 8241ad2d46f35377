#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Fluent builders for clay model records
//!
//! Every builder wraps one freshly defaulted record, overwrites a single
//! field per `with_*` call and hands the record over in `build`. Setters
//! that take a nested record accept either the record itself or that
//! record's own builder, because each builder converts into its record.
//!
//! ```
//! use clay_builder::{new_deployment_repository, new_distribution_management};
//!
//! let dm = new_distribution_management()
//!     .with_download_url("https://example.org/dl")
//!     .with_repository(new_deployment_repository().with_id("central"))
//!     .with_status("verified")
//!     .build();
//!
//! assert_eq!(dm.repository.unwrap().id.as_deref(), Some("central"));
//! ```

pub mod distribution;
pub mod location;
pub mod relocation;
pub mod repository;
pub mod site;

pub use distribution::{new_distribution_management, FluentDistributionManagementBuilder};
pub use location::{
    new_input_location, new_input_source, FluentInputLocationBuilder, FluentInputSourceBuilder,
};
pub use relocation::{new_relocation, FluentRelocationBuilder};
pub use repository::{new_deployment_repository, FluentDeploymentRepositoryBuilder};
pub use site::{new_site, FluentSiteBuilder};
