//! Builder for deployment repositories

use clay_types::{DeploymentRepository, InputLocation, InputLocationTracker, LocationKey};

/// Start a builder wrapping a default [`DeploymentRepository`]
#[must_use]
pub fn new_deployment_repository() -> FluentDeploymentRepositoryBuilder {
    FluentDeploymentRepositoryBuilder::default()
}

/// Fluent builder for [`DeploymentRepository`]
///
/// Starts from the model defaults: `default` layout, unique snapshot versions.
#[derive(Debug, Clone, Default)]
pub struct FluentDeploymentRepositoryBuilder {
    repository: DeploymentRepository,
}

impl FluentDeploymentRepositoryBuilder {
    /// Build the deployment repository
    #[must_use]
    pub fn build(self) -> DeploymentRepository {
        self.repository
    }

    /// Set the identifier matching a server entry in the user's settings
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.repository.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.repository.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.repository.url = Some(url.into());
        self
    }

    /// Set the repository layout, `default` or `legacy`
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.repository.layout = layout.into();
        self
    }

    /// Whether deployed snapshots get a unique timestamped version
    #[must_use]
    pub fn with_unique_version(mut self, unique_version: bool) -> Self {
        self.repository.unique_version = unique_version;
        self
    }

    /// Record where the value for `key` came from
    #[must_use]
    pub fn with_location(
        mut self,
        key: impl Into<LocationKey>,
        location: impl Into<InputLocation>,
    ) -> Self {
        self.repository.set_location(key, location.into());
        self
    }
}

impl From<FluentDeploymentRepositoryBuilder> for DeploymentRepository {
    fn from(builder: FluentDeploymentRepositoryBuilder) -> Self {
        builder.build()
    }
}
