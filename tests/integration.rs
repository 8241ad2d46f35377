//! Integration tests for clay
//!
//! These tests exercise descriptor loading, the fluent builders, validation
//! and rendering together, using temporary descriptor files.

use std::path::PathBuf;
use tempfile::TempDir;
use tokio::fs;

// Test utilities module
mod utils {
    use super::*;

    pub struct TestEnvironment {
        pub temp_dir: TempDir,
    }

    impl TestEnvironment {
        pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
            Ok(Self {
                temp_dir: TempDir::new()?,
            })
        }

        /// Write a descriptor into the scratch directory and return its path
        pub async fn write_descriptor(
            &self,
            name: &str,
            contents: &str,
        ) -> Result<PathBuf, Box<dyn std::error::Error>> {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, contents).await?;
            Ok(path)
        }
    }
}

mod descriptor_tests {
    use super::utils::TestEnvironment;
    use clay_builder::*;
    use clay_config::{load_descriptor, merge_overrides, render, OutputFormat};
    use clay_types::{DistributionManagement, InputLocationTracker, ValidationPolicy};

    const PARENT: &str = r#"download_url = "https://example.org/dl"

[repository]
id = "central"
url = "https://repo.example.org/releases"

[site]
id = "docs"
url = "scp://docs.example.org/www"
"#;

    const CHILD: &str = r#"status = "deployed"

[snapshot_repository]
id = "snapshots"
url = "https://repo.example.org/snapshots"
"#;

    #[tokio::test]
    async fn test_loaded_descriptor_matches_hand_built_record() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_descriptor("parent.toml", PARENT).await.unwrap();

        let mut loaded = load_descriptor(&path).await.unwrap();
        loaded.locations.clear();
        if let Some(repo) = loaded.repository.as_mut() {
            repo.locations.clear();
        }
        if let Some(site) = loaded.site.as_mut() {
            site.locations.clear();
        }

        let expected = new_distribution_management()
            .with_download_url("https://example.org/dl")
            .with_repository(
                new_deployment_repository()
                    .with_id("central")
                    .with_url("https://repo.example.org/releases"),
            )
            .with_site(
                new_site()
                    .with_id("docs")
                    .with_url("scp://docs.example.org/www"),
            )
            .build();
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn test_child_inherits_from_parent() {
        let env = TestEnvironment::new().unwrap();
        let parent_path = env.write_descriptor("parent.toml", PARENT).await.unwrap();
        let child_path = env.write_descriptor("child.toml", CHILD).await.unwrap();

        let parent = load_descriptor(&parent_path).await.unwrap();
        let mut child = load_descriptor(&child_path).await.unwrap();
        child.merge_from(&parent);

        assert_eq!(child.status.as_deref(), Some("deployed"));
        assert_eq!(child.download_url.as_deref(), Some("https://example.org/dl"));
        assert_eq!(
            child.snapshot_repository.as_ref().and_then(|r| r.id.as_deref()),
            Some("snapshots")
        );
        assert_eq!(
            child
                .effective_snapshot_repository()
                .and_then(|r| r.id.as_deref()),
            Some("snapshots")
        );

        // The inherited repository still points at the parent file
        let source = child
            .location("repository")
            .and_then(|l| l.source.as_ref())
            .and_then(|s| s.location.clone())
            .unwrap();
        assert!(source.ends_with("parent.toml"));
        let source = child
            .location("status")
            .and_then(|l| l.source.as_ref())
            .and_then(|s| s.location.clone())
            .unwrap();
        assert!(source.ends_with("child.toml"));

        assert!(child.validate(&ValidationPolicy::default()).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_descriptor_reports_all_problems() {
        let env = TestEnvironment::new().unwrap();
        let path = env
            .write_descriptor(
                "broken.toml",
                r#"status = "shipped"

[repository]
name = "nameless"
"#,
            )
            .await
            .unwrap();

        let dm = load_descriptor(&path).await.unwrap();
        let problems = dm.validate(&ValidationPolicy::default());
        assert_eq!(problems.len(), 3);

        let problems = dm.validate(&ValidationPolicy::lenient());
        assert_eq!(problems.len(), 1);
    }

    #[tokio::test]
    async fn test_render_after_overrides() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_descriptor("parent.toml", PARENT).await.unwrap();

        let dm = load_descriptor(&path).await.unwrap();
        let dm = merge_overrides(dm, |var| {
            (var == "CLAY_STATUS").then(|| "verified".to_string())
        });

        let json = render(&dm, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "verified");
        assert_eq!(value["repository"]["id"], "central");

        let text = render(&dm, OutputFormat::Toml).unwrap();
        let reparsed: DistributionManagement = toml::from_str(&text).unwrap();
        assert_eq!(reparsed.status.as_deref(), Some("verified"));
        assert_eq!(reparsed.site.and_then(|s| s.id).as_deref(), Some("docs"));
    }

    #[tokio::test]
    async fn test_unknown_key_is_a_parse_error() {
        let env = TestEnvironment::new().unwrap();
        let path = env
            .write_descriptor("typo.toml", "downlaod_url = \"https://example.org\"\n")
            .await
            .unwrap();

        let err = load_descriptor(&path).await.unwrap_err();
        assert!(matches!(
            err,
            clay_errors::Error::Config(clay_errors::ConfigError::ParseError { .. })
        ));
    }
}
