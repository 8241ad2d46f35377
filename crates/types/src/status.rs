//! Repository status of a deployed artifact

use clay_errors::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of an artifact in the remote repository
///
/// Records keep the status as a plain string; this enum is what consumers
/// parse it into when they want to check it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionStatus {
    /// No status recorded
    #[default]
    None,
    /// Converted by a repository manager from a legacy descriptor
    Converted,
    /// Synced directly from a partner repository
    Partner,
    /// Deployed from a build tool
    Deployed,
    /// Verified by hand as correct and final
    Verified,
}

impl DistributionStatus {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Converted,
        Self::Partner,
        Self::Deployed,
        Self::Verified,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Converted => "converted",
            Self::Partner => "partner",
            Self::Deployed => "deployed",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for DistributionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

impl From<DistributionStatus> for String {
    fn from(status: DistributionStatus) -> Self {
        status.as_str().to_string()
    }
}
