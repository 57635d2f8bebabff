use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default namespace used when none is configured.
const DEFAULT_NAMESPACE: &str = "default";

/// Settings for reaching the cluster control plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClusterConfig {
    /// Namespace the workload resources are created in.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Optional path to a kubeconfig file.
    ///
    /// When unset the client infers its configuration from the environment
    /// (in-cluster service account or the user's `~/.kube/config`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,
    /// Optional kubeconfig context to use instead of the current context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            kubeconfig: None,
            context: None,
        }
    }
}
