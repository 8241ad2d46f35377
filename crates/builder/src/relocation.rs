//! Builder for artifact relocations

use clay_types::{InputLocation, InputLocationTracker, LocationKey, Relocation};

/// Start a builder wrapping an empty [`Relocation`]
#[must_use]
pub fn new_relocation() -> FluentRelocationBuilder {
    FluentRelocationBuilder::default()
}

/// Fluent builder for [`Relocation`]
///
/// Describes where an artifact has moved to. Coordinates that are left unset
/// keep their old value.
#[derive(Debug, Clone, Default)]
pub struct FluentRelocationBuilder {
    relocation: Relocation,
}

impl FluentRelocationBuilder {
    /// Build the relocation
    #[must_use]
    pub fn build(self) -> Relocation {
        self.relocation
    }

    /// Set the group the artifact has moved to
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.relocation.group_id = Some(group_id.into());
        self
    }

    /// Set the new artifact ID of the artifact
    #[must_use]
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.relocation.artifact_id = Some(artifact_id.into());
        self
    }

    /// Set the new version of the artifact
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.relocation.version = Some(version.into());
        self
    }

    /// Set an additional message shown to the user about the move
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.relocation.message = Some(message.into());
        self
    }

    /// Record where the value for `key` came from
    #[must_use]
    pub fn with_location(
        mut self,
        key: impl Into<LocationKey>,
        location: impl Into<InputLocation>,
    ) -> Self {
        self.relocation.set_location(key, location.into());
        self
    }
}

impl From<FluentRelocationBuilder> for Relocation {
    fn from(builder: FluentRelocationBuilder) -> Self {
        builder.build()
    }
}
