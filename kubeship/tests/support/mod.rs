#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use kubeship::cluster::{ClusterClient, ClusterError, ResourceKind};

/// Failure a fake can be forced to return for a resource kind.
#[derive(Debug, Clone, Copy)]
pub enum ForcedFailure {
    Authorization,
    Rejected,
}

/// In-memory stand-in for the cluster control plane.
///
/// Records every create call, keeps the set of accepted resource names, and
/// rejects duplicate names with an already-exists error the way the real
/// control plane does. Individual resource kinds can be forced to fail.
pub struct FakeClusterClient {
    pub deployment_calls: AtomicUsize,
    pub service_calls: AtomicUsize,
    created: Mutex<HashSet<(ResourceKind, String)>>,
    fail_deployments: Option<ForcedFailure>,
    fail_services: Option<ForcedFailure>,
}

impl FakeClusterClient {
    /// A fake that accepts every fresh resource name.
    pub fn accepting() -> Self {
        Self::new(None, None)
    }

    /// A fake whose deployment creations fail with the given failure.
    pub fn failing_deployments(failure: ForcedFailure) -> Self {
        Self::new(Some(failure), None)
    }

    /// A fake whose service creations fail with the given failure.
    pub fn failing_services(failure: ForcedFailure) -> Self {
        Self::new(None, Some(failure))
    }

    fn new(fail_deployments: Option<ForcedFailure>, fail_services: Option<ForcedFailure>) -> Self {
        Self {
            deployment_calls: AtomicUsize::new(0),
            service_calls: AtomicUsize::new(0),
            created: Mutex::new(HashSet::new()),
            fail_deployments,
            fail_services,
        }
    }

    /// Returns whether a resource with the given kind and name was accepted
    /// and is still present on the fake cluster.
    pub fn has_created(&self, kind: ResourceKind, name: &str) -> bool {
        self.created
            .lock()
            .unwrap()
            .contains(&(kind, name.to_string()))
    }

    fn create(
        &self,
        kind: ResourceKind,
        name: String,
        failure: Option<ForcedFailure>,
    ) -> Result<String, ClusterError> {
        if let Some(failure) = failure {
            return Err(forced_error(kind, &name, failure));
        }

        let mut created = self.created.lock().unwrap();
        if !created.insert((kind, name.clone())) {
            return Err(ClusterError::AlreadyExists { kind, name });
        }

        Ok(name)
    }
}

fn forced_error(kind: ResourceKind, name: &str, failure: ForcedFailure) -> ClusterError {
    match failure {
        ForcedFailure::Authorization => ClusterError::Authorization {
            kind,
            name: name.to_string(),
            message: "forbidden".to_string(),
        },
        ForcedFailure::Rejected => ClusterError::Rejected {
            kind,
            name: name.to_string(),
            message: "invalid descriptor".to_string(),
        },
    }
}

#[async_trait]
impl ClusterClient for FakeClusterClient {
    async fn create_deployment(&self, deployment: &Deployment) -> Result<String, ClusterError> {
        self.deployment_calls.fetch_add(1, Ordering::SeqCst);
        self.create(
            ResourceKind::Deployment,
            deployment.name_any(),
            self.fail_deployments,
        )
    }

    async fn create_service(&self, service: &Service) -> Result<String, ClusterError> {
        self.service_calls.fetch_add(1, Ordering::SeqCst);
        self.create(ResourceKind::Service, service.name_any(), self.fail_services)
    }
}
