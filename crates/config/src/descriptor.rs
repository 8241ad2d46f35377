//! Distribution descriptor loading
//!
//! A descriptor is a small TOML file describing one distribution management
//! block. Loading it runs every value through the fluent builders and
//! records, for each entry, the line and column it was read from.

use clay_builder::{
    new_deployment_repository, new_distribution_management, new_input_location,
    new_input_source, new_relocation, new_site, FluentDeploymentRepositoryBuilder,
    FluentDistributionManagementBuilder, FluentInputLocationBuilder, FluentRelocationBuilder,
    FluentSiteBuilder,
};
use clay_errors::{ConfigError, Error};
use clay_types::{DeploymentRepository, DistributionManagement, LocationKey};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use toml::Spanned;
use tracing::{debug, info};

/// Conventional descriptor file name
pub const DESCRIPTOR_FILE: &str = "distribution.toml";

// Keys are snake_case; the POM element names written by `render` are aliases.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    #[serde(alias = "downloadUrl")]
    download_url: Option<Spanned<String>>,
    status: Option<Spanned<String>>,
    relocation: Option<Spanned<RawRelocation>>,
    site: Option<Spanned<RawSite>>,
    repository: Option<Spanned<RawRepository>>,
    #[serde(alias = "snapshotRepository")]
    snapshot_repository: Option<Spanned<RawRepository>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRelocation {
    #[serde(alias = "groupId")]
    group_id: Option<Spanned<String>>,
    #[serde(alias = "artifactId")]
    artifact_id: Option<Spanned<String>>,
    version: Option<Spanned<String>>,
    message: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    id: Option<Spanned<String>>,
    name: Option<Spanned<String>>,
    url: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRepository {
    id: Option<Spanned<String>>,
    name: Option<Spanned<String>>,
    url: Option<Spanned<String>>,
    layout: Option<Spanned<String>>,
    #[serde(alias = "uniqueVersion")]
    unique_version: Option<Spanned<bool>>,
}

/// Maps byte offsets of one descriptor to input locations
struct Positions<'a> {
    text: &'a str,
    source: &'a str,
}

impl Positions<'_> {
    fn at<T>(&self, spanned: &Spanned<T>) -> FluentInputLocationBuilder {
        let offset = spanned.span().start.min(self.text.len());
        let before = self.text.get(..offset).unwrap_or(self.text);
        let line = before.matches('\n').count() + 1;
        let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;

        new_input_location(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
        .with_source(new_input_source().with_location(self.source))
    }
}

/// Parse descriptor text into a distribution management record
///
/// `source` names the input in the recorded locations, usually the file path.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if the text is not valid TOML or
/// contains keys a descriptor does not know.
pub fn parse_descriptor(text: &str, source: &str) -> Result<DistributionManagement, Error> {
    let raw: RawDescriptor = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        message: format!("{source}: {e}"),
    })?;
    let pos = Positions { text, source };

    let mut builder = new_distribution_management();

    if let Some(url) = raw.download_url {
        builder = builder
            .with_location(LocationKey::DOWNLOAD_URL, pos.at(&url))
            .with_download_url(url.into_inner());
    }
    if let Some(status) = raw.status {
        builder = builder
            .with_location(LocationKey::STATUS, pos.at(&status))
            .with_status(status.into_inner());
    }
    if let Some(relocation) = raw.relocation {
        builder = builder.with_location(LocationKey::RELOCATION, pos.at(&relocation));
        builder = builder.with_relocation(relocation_from(relocation.into_inner(), &pos));
    }
    if let Some(site) = raw.site {
        builder = builder.with_location(LocationKey::SITE, pos.at(&site));
        builder = builder.with_site(site_from(site.into_inner(), &pos));
    }
    if let Some(repository) = raw.repository {
        builder = builder.with_location(LocationKey::REPOSITORY, pos.at(&repository));
        builder = builder.with_repository(repository_from(repository.into_inner(), &pos));
    }
    if let Some(repository) = raw.snapshot_repository {
        builder = builder.with_location(LocationKey::SNAPSHOT_REPOSITORY, pos.at(&repository));
        builder =
            builder.with_snapshot_repository(repository_from(repository.into_inner(), &pos));
    }

    Ok(builder.build())
}

fn relocation_from(raw: RawRelocation, pos: &Positions<'_>) -> FluentRelocationBuilder {
    let mut builder = new_relocation();
    if let Some(v) = raw.group_id {
        builder = builder
            .with_location("groupId", pos.at(&v))
            .with_group_id(v.into_inner());
    }
    if let Some(v) = raw.artifact_id {
        builder = builder
            .with_location("artifactId", pos.at(&v))
            .with_artifact_id(v.into_inner());
    }
    if let Some(v) = raw.version {
        builder = builder.with_location("version", pos.at(&v)).with_version(v.into_inner());
    }
    if let Some(v) = raw.message {
        builder = builder.with_location("message", pos.at(&v)).with_message(v.into_inner());
    }
    builder
}

fn site_from(raw: RawSite, pos: &Positions<'_>) -> FluentSiteBuilder {
    let mut builder = new_site();
    if let Some(v) = raw.id {
        builder = builder.with_location("id", pos.at(&v)).with_id(v.into_inner());
    }
    if let Some(v) = raw.name {
        builder = builder.with_location("name", pos.at(&v)).with_name(v.into_inner());
    }
    if let Some(v) = raw.url {
        builder = builder.with_location("url", pos.at(&v)).with_url(v.into_inner());
    }
    builder
}

fn repository_from(raw: RawRepository, pos: &Positions<'_>) -> FluentDeploymentRepositoryBuilder {
    let mut builder = new_deployment_repository();
    if let Some(v) = raw.id {
        builder = builder.with_location("id", pos.at(&v)).with_id(v.into_inner());
    }
    if let Some(v) = raw.name {
        builder = builder.with_location("name", pos.at(&v)).with_name(v.into_inner());
    }
    if let Some(v) = raw.url {
        builder = builder.with_location("url", pos.at(&v)).with_url(v.into_inner());
    }
    if let Some(v) = raw.layout {
        builder = builder.with_location("layout", pos.at(&v)).with_layout(v.into_inner());
    }
    if let Some(v) = raw.unique_version {
        builder = builder
            .with_location("uniqueVersion", pos.at(&v))
            .with_unique_version(v.into_inner());
    }
    builder
}

/// Load a descriptor from disk
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::ParseError` if it is not UTF-8 or not a valid descriptor,
/// and `Error::Io` for any other read failure.
pub async fn load_descriptor(path: &Path) -> Result<DistributionManagement, Error> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| crate::read_error(&e, path))?;

    let management = parse_descriptor(&contents, &path.display().to_string())?;
    info!(
        path = %path.display(),
        locations = management.locations.len(),
        "loaded distribution descriptor"
    );
    Ok(management)
}

/// Apply `CLAY_*` environment overrides to a loaded record
///
/// Overridden fields lose their recorded location, as their value no longer
/// comes from the descriptor.
#[must_use]
pub fn merge_env(management: DistributionManagement) -> DistributionManagement {
    merge_overrides(management, |var| std::env::var(var).ok())
}

/// Apply overrides looked up through `lookup` instead of the process environment
#[must_use]
pub fn merge_overrides(
    mut management: DistributionManagement,
    lookup: impl Fn(&str) -> Option<String>,
) -> DistributionManagement {
    let mut overridden = Vec::new();

    // Repository URLs patch the existing record rather than replacing it
    let repository =
        lookup("CLAY_REPOSITORY_URL").map(|url| with_url(management.repository.take(), url));
    let snapshot_repository = lookup("CLAY_SNAPSHOT_REPOSITORY_URL")
        .map(|url| with_url(management.snapshot_repository.take(), url));

    let mut builder = FluentDistributionManagementBuilder::from_existing(management);

    if let Some(url) = lookup("CLAY_DOWNLOAD_URL") {
        debug!(var = "CLAY_DOWNLOAD_URL", "overriding download url");
        overridden.push(LocationKey::DOWNLOAD_URL);
        builder = builder.with_download_url(url);
    }
    if let Some(status) = lookup("CLAY_STATUS") {
        debug!(var = "CLAY_STATUS", %status, "overriding status");
        overridden.push(LocationKey::STATUS);
        builder = builder.with_status(status);
    }
    if let Some(repository) = repository {
        debug!(var = "CLAY_REPOSITORY_URL", "overriding repository url");
        builder = builder.with_repository(repository);
    }
    if let Some(repository) = snapshot_repository {
        debug!(var = "CLAY_SNAPSHOT_REPOSITORY_URL", "overriding snapshot repository url");
        builder = builder.with_snapshot_repository(repository);
    }

    let mut management = builder.build();
    for key in overridden {
        management.locations.remove(&key);
    }
    management
}

fn with_url(existing: Option<DeploymentRepository>, url: String) -> DeploymentRepository {
    let mut repository = existing.unwrap_or_default();
    repository.url = Some(url);
    repository.locations.remove("url");
    repository
}

#[cfg(test)]
mod tests {
    use super::*;
    use clay_types::{InputLocationTracker, ValidationPolicy};

    const SAMPLE: &str = r#"download_url = "https://example.org/dl"
status = "deployed"

[repository]
id = "central"
url = "https://repo.example.org/releases"

[snapshot_repository]
id = "snapshots"
url = "https://repo.example.org/snapshots"
unique_version = false

[site]
id = "docs"
url = "scp://docs.example.org/www"

[relocation]
group_id = "org.example.new"
message = "moved"
"#;

    #[test]
    fn test_parse_fields() {
        let dm = parse_descriptor(SAMPLE, "distribution.toml").unwrap();

        assert_eq!(dm.download_url.as_deref(), Some("https://example.org/dl"));
        assert_eq!(dm.status.as_deref(), Some("deployed"));
        let repo = dm.repository.as_ref().unwrap();
        assert_eq!(repo.id.as_deref(), Some("central"));
        assert!(repo.unique_version);
        let snapshots = dm.snapshot_repository.as_ref().unwrap();
        assert_eq!(snapshots.id.as_deref(), Some("snapshots"));
        assert!(!snapshots.unique_version);
        assert_eq!(dm.site.as_ref().and_then(|s| s.id.as_deref()), Some("docs"));
        assert_eq!(
            dm.relocation.as_ref().and_then(|r| r.group_id.as_deref()),
            Some("org.example.new")
        );
        assert!(dm.validate(&ValidationPolicy::default()).is_empty());
    }

    #[test]
    fn test_parse_records_locations() {
        let dm = parse_descriptor(SAMPLE, "distribution.toml").unwrap();

        let download = dm.location("downloadUrl").unwrap();
        assert_eq!(download.line_number, 1);
        assert!(download.column_number > 1);
        assert_eq!(
            download.source.as_ref().and_then(|s| s.location.as_deref()),
            Some("distribution.toml")
        );
        assert_eq!(dm.location("status").map(|l| l.line_number), Some(2));
        for key in ["repository", "snapshotRepository", "site", "relocation"] {
            assert!(dm.location(key).is_some(), "missing location for {key}");
        }

        let repo = dm.repository.as_ref().unwrap();
        assert_eq!(repo.location("id").map(|l| l.line_number), Some(5));
        assert_eq!(repo.location("url").map(|l| l.line_number), Some(6));
        let snapshots = dm.snapshot_repository.as_ref().unwrap();
        assert_eq!(
            snapshots.location("uniqueVersion").map(|l| l.line_number),
            Some(11)
        );
    }

    #[test]
    fn test_parse_empty_descriptor() {
        let dm = parse_descriptor("", "empty.toml").unwrap();
        assert_eq!(dm, DistributionManagement::default());
    }

    #[test]
    fn test_parse_keeps_unknown_status() {
        let dm = parse_descriptor(r#"status = "shipped""#, "d.toml").unwrap();
        assert_eq!(dm.status.as_deref(), Some("shipped"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_descriptor("[repository]\nmirror = true\n", "d.toml").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::ParseError { message }) if message.starts_with("d.toml")
        ));
    }

    #[test]
    fn test_rendered_toml_loads_back() {
        let mut original = parse_descriptor(SAMPLE, "distribution.toml").unwrap();
        let text = crate::render(&original, crate::OutputFormat::Toml).unwrap();
        assert!(text.contains("downloadUrl"));

        let mut reloaded = parse_descriptor(&text, "rendered.toml").unwrap();
        for dm in [&mut original, &mut reloaded] {
            dm.locations.clear();
            for repo in [dm.repository.as_mut(), dm.snapshot_repository.as_mut()]
                .into_iter()
                .flatten()
            {
                repo.locations.clear();
            }
            if let Some(site) = dm.site.as_mut() {
                site.locations.clear();
            }
            if let Some(relocation) = dm.relocation.as_mut() {
                relocation.locations.clear();
            }
        }
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        assert!(parse_descriptor("download_url = ", "d.toml").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_descriptor(Path::new("/nonexistent/distribution.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_descriptor(dir.path()).await.unwrap_err();
        match &err {
            Error::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected io error, got {other:?}"),
        }
        assert_eq!(clay_errors::UserFacingError::user_code(&err), Some("error.io"));
    }

    #[tokio::test]
    async fn test_load_non_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, b"\xff\xfe").unwrap();

        let err = load_descriptor(&path).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::ParseError { ref message }) if message.contains("UTF-8")
        ));
    }

    #[test]
    fn test_overrides() {
        let dm = parse_descriptor(SAMPLE, "distribution.toml").unwrap();
        let dm = merge_overrides(dm, |var| match var {
            "CLAY_STATUS" => Some("verified".to_string()),
            "CLAY_REPOSITORY_URL" => Some("https://mirror.example.org".to_string()),
            _ => None,
        });

        assert_eq!(dm.status.as_deref(), Some("verified"));
        assert!(dm.location("status").is_none());
        assert!(dm.location("downloadUrl").is_some());

        let repo = dm.repository.as_ref().unwrap();
        assert_eq!(repo.id.as_deref(), Some("central"));
        assert_eq!(repo.url.as_deref(), Some("https://mirror.example.org"));
        assert!(repo.location("url").is_none());
        assert!(repo.location("id").is_some());
    }

    #[test]
    fn test_override_creates_missing_repository() {
        let dm = merge_overrides(DistributionManagement::default(), |var| {
            (var == "CLAY_SNAPSHOT_REPOSITORY_URL").then(|| "https://snap.example.org".to_string())
        });
        let snapshots = dm.snapshot_repository.unwrap();
        assert_eq!(snapshots.url.as_deref(), Some("https://snap.example.org"));
        assert_eq!(snapshots.layout, "default");
        assert!(dm.repository.is_none());
    }
}
