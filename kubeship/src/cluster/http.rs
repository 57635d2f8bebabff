use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::{Api, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config, ResourceExt};
use kubeship_config::shared::ClusterConfig;
use tracing::info;

use crate::cluster::{ClusterClient, ClusterError, ResourceKind};

/// [`ClusterClient`] implementation backed by the [`kube`] HTTP client.
///
/// Holds one authenticated session for the lifetime of the run. All create
/// calls are scoped to the namespace fixed at connect time.
pub struct HttpClusterClient {
    client: Client,
    namespace: String,
}

impl HttpClusterClient {
    /// Establishes an authenticated session against the cluster control plane.
    ///
    /// Reads credentials from the configured kubeconfig path when one is set,
    /// honoring the configured context, and otherwise infers the
    /// configuration from the environment. The connection is probed eagerly
    /// with a version request so that an unreachable endpoint or rejected
    /// credentials fail here, before any resource is submitted.
    pub async fn connect(cluster_config: &ClusterConfig) -> Result<Self, ClusterError> {
        let config = match &cluster_config.kubeconfig {
            Some(path) => {
                let kubeconfig = Kubeconfig::read_from(path)?;
                let options = KubeConfigOptions {
                    context: cluster_config.context.clone(),
                    ..KubeConfigOptions::default()
                };

                Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            None => Config::infer().await?,
        };

        let client = Client::try_from(config).map_err(ClusterError::Connection)?;

        let version = client
            .apiserver_version()
            .await
            .map_err(ClusterError::Connection)?;
        info!(
            version = %version.git_version,
            namespace = %cluster_config.namespace,
            "connected to cluster control plane"
        );

        Ok(Self {
            client,
            namespace: cluster_config.namespace.clone(),
        })
    }
}

#[async_trait]
impl ClusterClient for HttpClusterClient {
    async fn create_deployment(&self, deployment: &Deployment) -> Result<String, ClusterError> {
        let name = deployment.name_any();
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);

        let created = api
            .create(&PostParams::default(), deployment)
            .await
            .map_err(|err| classify_create_error(ResourceKind::Deployment, &name, err))?;

        Ok(created.name_any())
    }

    async fn create_service(&self, service: &Service) -> Result<String, ClusterError> {
        let name = service.name_any();
        let api: Api<Service> = Api::namespaced(self.client.clone(), &self.namespace);

        let created = api
            .create(&PostParams::default(), service)
            .await
            .map_err(|err| classify_create_error(ResourceKind::Service, &name, err))?;

        Ok(created.name_any())
    }
}

/// Maps a raw [`kube::Error`] from a create call onto the typed submission
/// error taxonomy.
///
/// Status codes follow the Kubernetes API conventions: 409 for a name
/// conflict, 401/403 for missing permissions, 400/422 for a descriptor the
/// control plane considers invalid. Everything else is a transport failure.
fn classify_create_error(kind: ResourceKind, name: &str, err: kube::Error) -> ClusterError {
    match err {
        kube::Error::Api(response) if response.code == 409 => ClusterError::AlreadyExists {
            kind,
            name: name.to_string(),
        },
        kube::Error::Api(response) if response.code == 401 || response.code == 403 => {
            ClusterError::Authorization {
                kind,
                name: name.to_string(),
                message: response.message,
            }
        }
        kube::Error::Api(response) if response.code == 400 || response.code == 422 => {
            ClusterError::Rejected {
                kind,
                name: name.to_string(),
                message: response.message,
            }
        }
        source => ClusterError::Transport {
            kind,
            name: name.to_string(),
            source,
        },
    }
}
