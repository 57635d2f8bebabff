use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use std::fmt;
use thiserror::Error;

/// Kind of cluster resource handled by the provisioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Deployment,
    Service,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Deployment => write!(f, "deployment"),
            ResourceKind::Service => write!(f, "service"),
        }
    }
}

/// Errors emitted by the cluster integration.
///
/// Connection-phase variants are fatal to the whole run and occur before any
/// resource is touched. Submission-phase variants carry the kind and name of
/// the resource whose creation failed, plus the underlying cause, so a
/// failure can be diagnosed without re-running at higher verbosity.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The kubeconfig file is missing, unreadable, or unparseable.
    #[error("failed to load cluster credentials: {0}")]
    Credential(#[from] kube::config::KubeconfigError),

    /// No usable ambient cluster configuration could be inferred.
    #[error("failed to infer cluster configuration: {0}")]
    InferCredential(#[from] kube::config::InferConfigError),

    /// The control plane endpoint is unreachable or rejected authentication.
    #[error("failed to connect to the cluster control plane: {0}")]
    Connection(#[source] kube::Error),

    /// A resource with the same name already exists.
    ///
    /// Creation uses create-only semantics, so re-running the provisioner
    /// surfaces a conflict instead of updating in place.
    #[error("{kind} `{name}` already exists on the cluster")]
    AlreadyExists { kind: ResourceKind, name: String },

    /// The session lacks permission to create the resource.
    #[error("not authorized to create {kind} `{name}`: {message}")]
    Authorization {
        kind: ResourceKind,
        name: String,
        message: String,
    },

    /// The control plane rejected the descriptor as invalid.
    ///
    /// Distinct from local pre-flight validation: this is a server-side
    /// schema rejection.
    #[error("control plane rejected {kind} `{name}`: {message}")]
    Rejected {
        kind: ResourceKind,
        name: String,
        message: String,
    },

    /// The create request failed at the transport level (network error or
    /// timeout).
    #[error("transport failure while creating {kind} `{name}`: {source}")]
    Transport {
        kind: ResourceKind,
        name: String,
        #[source]
        source: kube::Error,
    },
}

/// Client interface describing the cluster operations used by the submitter.
///
/// The trait deliberately exposes create operations only. The provisioner
/// never updates or deletes resources, so a partial failure leaves whatever
/// was already accepted untouched on the cluster. Each call submits one
/// descriptor exactly once, with no internal retry.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Submits a Deployment to the control plane.
    ///
    /// Returns the name the control plane assigned to the accepted resource.
    async fn create_deployment(&self, deployment: &Deployment) -> Result<String, ClusterError>;

    /// Submits a Service to the control plane.
    ///
    /// Returns the name the control plane assigned to the accepted resource.
    async fn create_service(&self, service: &Service) -> Result<String, ClusterError>;
}
