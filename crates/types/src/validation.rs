//! Consumer-side checks for built distribution records
//!
//! Building a record never validates it. Code that hands a record onward
//! (a renderer, a deploy step) runs these checks and decides what to do with
//! the problems reported.

use crate::distribution::{DeploymentRepository, DistributionManagement, Relocation, Site};
use clay_errors::ModelError;
use serde::{Deserialize, Serialize};

/// Which checks `DistributionManagement::validate` performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Status must be one of the documented values
    #[serde(default = "default_true")]
    pub strict_status: bool,
    /// Repositories must name a URL
    #[serde(default = "default_true")]
    pub require_repository_url: bool,
    /// Reject any status, as a local project must not set one
    #[serde(default)]
    pub forbid_status: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            strict_status: true,
            require_repository_url: true,
            forbid_status: false,
        }
    }
}

impl ValidationPolicy {
    /// Only structural checks; status and urls are left alone
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_status: false,
            require_repository_url: false,
            forbid_status: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl DistributionManagement {
    /// Collect every problem with this record under `policy`
    ///
    /// An empty vector means the record is acceptable.
    #[must_use]
    pub fn validate(&self, policy: &ValidationPolicy) -> Vec<ModelError> {
        let mut problems = Vec::new();

        if let Some(status) = &self.status {
            if policy.forbid_status {
                problems.push(ModelError::StatusNotAllowed);
            } else if policy.strict_status {
                if let Err(e) = status.parse::<crate::DistributionStatus>() {
                    problems.push(e);
                }
            }
        }

        if let Some(repository) = &self.repository {
            check_repository("repository", repository, policy, &mut problems);
        }
        if let Some(repository) = &self.snapshot_repository {
            check_repository("snapshotRepository", repository, policy, &mut problems);
        }
        if let Some(site) = &self.site {
            check_site(site, &mut problems);
        }
        if let Some(relocation) = &self.relocation {
            check_relocation(relocation, &mut problems);
        }

        problems
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn check_repository(
    record: &str,
    repository: &DeploymentRepository,
    policy: &ValidationPolicy,
    problems: &mut Vec<ModelError>,
) {
    if is_blank(repository.id.as_ref()) {
        problems.push(ModelError::missing(record, "id"));
    }
    if policy.require_repository_url && is_blank(repository.url.as_ref()) {
        problems.push(ModelError::missing(record, "url"));
    }
    if repository.layout.trim().is_empty() {
        problems.push(ModelError::InvalidValue {
            field: format!("{record}.layout"),
            value: repository.layout.clone(),
        });
    }
}

fn check_site(site: &Site, problems: &mut Vec<ModelError>) {
    if is_blank(site.id.as_ref()) {
        problems.push(ModelError::missing("site", "id"));
    }
}

fn check_relocation(relocation: &Relocation, problems: &mut Vec<ModelError>) {
    if is_blank(relocation.group_id.as_ref())
        && is_blank(relocation.artifact_id.as_ref())
        && is_blank(relocation.version.as_ref())
    {
        problems.push(ModelError::InvalidValue {
            field: "relocation".to_string(),
            value: "no groupId, artifactId or version".to_string(),
        });
    }
}
