//! Builder for the distribution management block

use clay_types::{
    DeploymentRepository, DistributionManagement, InputLocation, InputLocationTracker,
    LocationKey, Relocation, Site,
};

/// Start a builder wrapping an empty [`DistributionManagement`]
#[must_use]
pub fn new_distribution_management() -> FluentDistributionManagementBuilder {
    FluentDistributionManagementBuilder::new()
}

/// Fluent builder for [`DistributionManagement`]
///
/// Describes everything that pertains to distributing a project: where its
/// artifacts and site are deployed. Every setter overwrites its field; none
/// of them validate.
#[derive(Debug, Clone, Default)]
pub struct FluentDistributionManagementBuilder {
    management: DistributionManagement,
}

impl FluentDistributionManagementBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue editing an existing record
    #[must_use]
    pub fn from_existing(management: DistributionManagement) -> Self {
        Self { management }
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> DistributionManagement {
        self.management
    }

    /// Set the URL of the project's download page
    ///
    /// Used to locate artifacts that are not in the repository, typically
    /// because of licensing restrictions.
    #[must_use]
    pub fn with_download_url(mut self, download_url: impl Into<String>) -> Self {
        self.management.download_url = Some(download_url.into());
        self
    }

    /// Record where the value for `key` came from
    #[must_use]
    pub fn with_location(
        mut self,
        key: impl Into<LocationKey>,
        location: impl Into<InputLocation>,
    ) -> Self {
        self.management.set_location(key, location.into());
        self
    }

    /// Set relocation information for an artifact that moved to a new
    /// group ID and/or artifact ID
    #[must_use]
    pub fn with_relocation(mut self, relocation: impl Into<Relocation>) -> Self {
        self.management.relocation = Some(relocation.into());
        self
    }

    /// Set where the project web site is deployed
    #[must_use]
    pub fn with_site(mut self, site: impl Into<Site>) -> Self {
        self.management.site = Some(site.into());
        self
    }

    /// Set the remote repository that receives the project's artifacts
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<DeploymentRepository>) -> Self {
        self.management.repository = Some(repository.into());
        self
    }

    /// Set where snapshots are deployed; defaults to the repository when unset
    #[must_use]
    pub fn with_snapshot_repository(
        mut self,
        repository: impl Into<DeploymentRepository>,
    ) -> Self {
        self.management.snapshot_repository = Some(repository.into());
        self
    }

    /// Set the status of this artifact in the remote repository
    ///
    /// Documented values are `none`, `converted`, `partner`, `deployed` and
    /// `verified`. Any string is stored as given.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.management.status = Some(status.into());
        self
    }
}

impl From<FluentDistributionManagementBuilder> for DistributionManagement {
    fn from(builder: FluentDistributionManagementBuilder) -> Self {
        builder.build()
    }
}
