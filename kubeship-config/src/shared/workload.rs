use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::ValidationError;

/// Describes the workload to provision: one Deployment and one Service.
///
/// The single `labels` map is the source of truth for resource identity. The
/// builders derive the pod template labels, the Deployment selector, and the
/// Service selector from it, so the three can never diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkloadConfig {
    /// Name of the Deployment resource.
    pub deployment_name: String,
    /// Name of the Service resource.
    pub service_name: String,
    /// Name of the container inside the pod template.
    pub container_name: String,
    /// Container image reference, including tag.
    pub image: String,
    /// Port the container listens on.
    pub container_port: u32,
    /// Externally exposed Service port, routed to `container_port`.
    pub service_port: u32,
    /// Desired number of pod replicas.
    pub replicas: i32,
    /// Label set shared by the pod template, the Deployment selector, and the
    /// Service selector.
    pub labels: BTreeMap<String, String>,
}

impl WorkloadConfig {
    /// Validates the workload configuration.
    ///
    /// Rejects empty names, an empty label set, negative replica counts, and
    /// port numbers outside 1-65535. Ports are carried as `u32` so that
    /// out-of-range values survive deserialization long enough to be rejected
    /// here instead of wrapping silently.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deployment_name.is_empty() {
            return Err(ValidationError::EmptyField("deployment_name"));
        }
        if self.service_name.is_empty() {
            return Err(ValidationError::EmptyField("service_name"));
        }
        if self.container_name.is_empty() {
            return Err(ValidationError::EmptyField("container_name"));
        }
        if self.image.is_empty() {
            return Err(ValidationError::EmptyField("image"));
        }
        if self.labels.is_empty() {
            return Err(ValidationError::EmptyLabels);
        }
        if self.replicas < 0 {
            return Err(ValidationError::NegativeReplicas(self.replicas));
        }

        validate_port("container_port", self.container_port)?;
        validate_port("service_port", self.service_port)?;

        Ok(())
    }
}

/// Checks that a port number falls within the valid TCP port range.
fn validate_port(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 || value > u16::MAX as u32 {
        return Err(ValidationError::PortOutOfRange { field, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_workload() -> WorkloadConfig {
        WorkloadConfig {
            deployment_name: "bookdeployment".to_string(),
            service_name: "bookservice".to_string(),
            container_name: "bookserver".to_string(),
            image: "hamim99/book-server:latest".to_string(),
            container_port: 8080,
            service_port: 4000,
            replicas: 2,
            labels: BTreeMap::from([("app".to_string(), "bookserver".to_string())]),
        }
    }

    #[test]
    fn valid_workload_passes_validation() {
        assert!(valid_workload().validate().is_ok());
    }

    #[test]
    fn zero_replicas_are_accepted() {
        let mut workload = valid_workload();
        workload.replicas = 0;
        assert!(workload.validate().is_ok());
    }

    #[test]
    fn negative_replicas_are_rejected() {
        let mut workload = valid_workload();
        workload.replicas = -2;
        assert!(matches!(
            workload.validate(),
            Err(ValidationError::NegativeReplicas(-2))
        ));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut workload = valid_workload();
        workload.container_port = 0;
        assert!(matches!(
            workload.validate(),
            Err(ValidationError::PortOutOfRange {
                field: "container_port",
                value: 0
            })
        ));
    }

    #[test]
    fn port_above_range_is_rejected() {
        let mut workload = valid_workload();
        workload.service_port = 70_000;
        assert!(matches!(
            workload.validate(),
            Err(ValidationError::PortOutOfRange {
                field: "service_port",
                value: 70_000
            })
        ));
    }

    #[test]
    fn boundary_ports_are_accepted() {
        let mut workload = valid_workload();
        workload.container_port = 1;
        workload.service_port = 65_535;
        assert!(workload.validate().is_ok());
    }

    #[test]
    fn empty_labels_are_rejected() {
        let mut workload = valid_workload();
        workload.labels.clear();
        assert!(matches!(
            workload.validate(),
            Err(ValidationError::EmptyLabels)
        ));
    }

    #[test]
    fn empty_deployment_name_is_rejected() {
        let mut workload = valid_workload();
        workload.deployment_name.clear();
        assert!(matches!(
            workload.validate(),
            Err(ValidationError::EmptyField("deployment_name"))
        ));
    }
}
