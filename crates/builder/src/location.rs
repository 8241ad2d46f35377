//! Builders for input locations and their sources

use clay_types::{InputLocation, InputLocationTracker, InputSource, LocationKey};

/// Start a builder for a location at `line_number`, `column_number`
#[must_use]
pub fn new_input_location(line_number: u32, column_number: u32) -> FluentInputLocationBuilder {
    FluentInputLocationBuilder {
        location: InputLocation::new(line_number, column_number),
    }
}

/// Start a builder wrapping an empty [`InputSource`]
#[must_use]
pub fn new_input_source() -> FluentInputSourceBuilder {
    FluentInputSourceBuilder::default()
}

/// Fluent builder for [`InputLocation`]
#[derive(Debug, Clone)]
pub struct FluentInputLocationBuilder {
    location: InputLocation,
}

impl FluentInputLocationBuilder {
    /// Build the input location
    #[must_use]
    pub fn build(self) -> InputLocation {
        self.location
    }

    /// Set the input description this location points into
    #[must_use]
    pub fn with_source(mut self, source: impl Into<InputSource>) -> Self {
        self.location.source = Some(source.into());
        self
    }

    /// Record the location of a value nested below this one
    #[must_use]
    pub fn with_location(
        mut self,
        key: impl Into<LocationKey>,
        location: impl Into<InputLocation>,
    ) -> Self {
        self.location.set_location(key, location.into());
        self
    }
}

impl From<FluentInputLocationBuilder> for InputLocation {
    fn from(builder: FluentInputLocationBuilder) -> Self {
        builder.build()
    }
}

/// Fluent builder for [`InputSource`]
#[derive(Debug, Clone, Default)]
pub struct FluentInputSourceBuilder {
    source: InputSource,
}

impl FluentInputSourceBuilder {
    /// Build the input source
    #[must_use]
    pub fn build(self) -> InputSource {
        self.source
    }

    /// Set the identifier of the model the input belongs to
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.source.model_id = Some(model_id.into());
        self
    }

    /// Set the path or URL of the input
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.source.location = Some(location.into());
        self
    }
}

impl From<FluentInputSourceBuilder> for InputSource {
    fn from(builder: FluentInputSourceBuilder) -> Self {
        builder.build()
    }
}
