//! Distribution management records
//!
//! These mirror the `distributionManagement` block of a project object
//! model: where artifacts and the project site are deployed, where an
//! artifact has been relocated to, and its repository status. All fields are
//! optional and public; nothing here enforces cross-field consistency.

use crate::location::{InputLocationTracker, LocationKey, Locations};
use crate::status::DistributionStatus;
use clay_errors::ModelError;
use serde::{Deserialize, Serialize};

/// Everything that pertains to distributing a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionManagement {
    /// Download page for artifacts that are not in the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// One of `none`, `converted`, `partner`, `deployed`, `verified`; stored unchecked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relocation: Option<Relocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<DeploymentRepository>,
    /// Falls back to `repository` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_repository: Option<DeploymentRepository>,
    #[serde(skip)]
    pub locations: Locations,
}

/// New coordinates of an artifact that has moved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Extra message shown to users of the old coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub locations: Locations,
}

/// Deployment target for the project web site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip)]
    pub locations: Locations,
}

/// Remote repository that receives deployed artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRepository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Whether snapshots get a unique timestamped version
    #[serde(default = "default_unique_version")]
    pub unique_version: bool,
    #[serde(skip)]
    pub locations: Locations,
}

impl Default for DeploymentRepository {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            url: None,
            layout: default_layout(),
            unique_version: default_unique_version(),
            locations: Locations::new(),
        }
    }
}

fn default_layout() -> String {
    "default".to_string()
}

fn default_unique_version() -> bool {
    true
}

impl DistributionManagement {
    /// Parse the stored status string
    ///
    /// An unset status reads as [`DistributionStatus::None`].
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidStatus` if the status is not one of the
    /// documented values.
    pub fn status_kind(&self) -> Result<DistributionStatus, ModelError> {
        self.status
            .as_deref()
            .map_or(Ok(DistributionStatus::None), str::parse)
    }

    /// Repository that snapshot artifacts are deployed to
    #[must_use]
    pub fn effective_snapshot_repository(&self) -> Option<&DeploymentRepository> {
        self.snapshot_repository
            .as_ref()
            .or(self.repository.as_ref())
    }

    /// Whether no field has been set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.download_url.is_none()
            && self.relocation.is_none()
            && self.site.is_none()
            && self.repository.is_none()
            && self.snapshot_repository.is_none()
            && self.status.is_none()
    }

    /// Inherit unset fields from a parent project's distribution management
    ///
    /// Values already present on `self` win. Relocation and status describe
    /// a single artifact and are never inherited. Locations of inherited
    /// fields are carried along with them.
    pub fn merge_from(&mut self, parent: &DistributionManagement) {
        fn inherit<T: Clone>(child: &mut Option<T>, parent: Option<&T>) -> bool {
            match (child.is_none(), parent) {
                (true, Some(value)) => {
                    *child = Some(value.clone());
                    true
                }
                _ => false,
            }
        }

        let inherited = [
            (
                LocationKey::DOWNLOAD_URL,
                inherit(&mut self.download_url, parent.download_url.as_ref()),
            ),
            (
                LocationKey::SITE,
                inherit(&mut self.site, parent.site.as_ref()),
            ),
            (
                LocationKey::REPOSITORY,
                inherit(&mut self.repository, parent.repository.as_ref()),
            ),
            (
                LocationKey::SNAPSHOT_REPOSITORY,
                inherit(
                    &mut self.snapshot_repository,
                    parent.snapshot_repository.as_ref(),
                ),
            ),
        ];

        for (key, taken) in inherited {
            if let (true, Some(location)) = (taken, parent.location(key.as_str())) {
                self.set_location(key, location.clone());
            }
        }
    }
}

impl InputLocationTracker for DistributionManagement {
    fn locations(&self) -> &Locations {
        &self.locations
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }
}

impl InputLocationTracker for Relocation {
    fn locations(&self) -> &Locations {
        &self.locations
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }
}

impl InputLocationTracker for Site {
    fn locations(&self) -> &Locations {
        &self.locations
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }
}

impl InputLocationTracker for DeploymentRepository {
    fn locations(&self) -> &Locations {
        &self.locations
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }
}
