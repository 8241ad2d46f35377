//! Builder for site deployment targets

use clay_types::{InputLocation, InputLocationTracker, LocationKey, Site};

/// Start a builder wrapping an empty [`Site`]
#[must_use]
pub fn new_site() -> FluentSiteBuilder {
    FluentSiteBuilder::default()
}

/// Fluent builder for [`Site`]
#[derive(Debug, Clone, Default)]
pub struct FluentSiteBuilder {
    site: Site,
}

impl FluentSiteBuilder {
    /// Build the site
    #[must_use]
    pub fn build(self) -> Site {
        self.site
    }

    /// Set the identifier matching a server entry in the user's settings
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.site.id = Some(id.into());
        self
    }

    /// Set the human readable name of the deployment location
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.site.name = Some(name.into());
        self
    }

    /// Set the URL the site is deployed to, e.g. `scp://host/path`
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.site.url = Some(url.into());
        self
    }

    /// Record where the value for `key` came from
    #[must_use]
    pub fn with_location(
        mut self,
        key: impl Into<LocationKey>,
        location: impl Into<InputLocation>,
    ) -> Self {
        self.site.set_location(key, location.into());
        self
    }
}

impl From<FluentSiteBuilder> for Site {
    fn from(builder: FluentSiteBuilder) -> Self {
        builder.build()
    }
}
