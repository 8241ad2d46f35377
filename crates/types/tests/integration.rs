//! Integration tests for types

#[cfg(test)]
mod tests {
    use clay_types::*;

    #[test]
    fn test_toml_roundtrip_drops_locations() {
        let mut dm = DistributionManagement {
            download_url: Some("https://example.org/dl".to_string()),
            repository: Some(DeploymentRepository {
                id: Some("central".to_string()),
                url: Some("https://repo.example.org/releases".to_string()),
                unique_version: false,
                ..DeploymentRepository::default()
            }),
            ..DistributionManagement::default()
        };
        dm.set_location(LocationKey::REPOSITORY, InputLocation::new(3, 1));

        let text = toml::to_string(&dm).unwrap();
        assert!(text.contains("downloadUrl"));
        assert!(text.contains("uniqueVersion = false"));

        let parsed: DistributionManagement = toml::from_str(&text).unwrap();
        assert!(parsed.locations.is_empty());
        dm.locations.clear();
        assert_eq!(parsed, dm);
    }

    #[test]
    fn test_repository_defaults_on_deserialize() {
        let repo: DeploymentRepository = serde_json::from_str(r#"{"id":"central"}"#).unwrap();
        assert_eq!(repo.layout, "default");
        assert!(repo.unique_version);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&DistributionStatus::Partner).unwrap();
        assert_eq!(json, r#""partner""#);

        let status: DistributionStatus = serde_json::from_str(r#""converted""#).unwrap();
        assert_eq!(status, DistributionStatus::Converted);
    }

    #[test]
    fn test_every_record_tracks_locations() {
        let mut site = Site::default();
        site.set_location("url", InputLocation::new(7, 7));
        assert_eq!(site.location("url").map(|l| l.line_number), Some(7));

        let mut relocation = Relocation::default();
        relocation.set_location(LocationKey::SELF, InputLocation::new(1, 1));
        assert!(relocation.location("").is_some());
    }
}
