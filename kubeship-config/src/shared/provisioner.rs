use serde::{Deserialize, Serialize};

use crate::shared::{ClusterConfig, ValidationError, WorkloadConfig};

/// Complete configuration for the provisioner binary.
///
/// Aggregates the cluster connection settings and the workload description.
/// Typically loaded from configuration files at startup and validated before
/// any connection is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProvisionerConfig {
    /// Settings for reaching the cluster control plane.
    #[serde(default)]
    pub cluster: ClusterConfig,
    /// The workload to provision.
    pub workload: WorkloadConfig,
}

impl ProvisionerConfig {
    /// Validates the complete provisioner configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.workload.validate()
    }
}
