//! Pure construction of workload resource descriptors.
//!
//! The builders validate the configuration and assemble [`k8s_openapi`]
//! descriptors without touching the cluster. Both derive every label-bearing
//! field from the single configured label set, which is what keeps the
//! Deployment's pods matched by its own selector and by the Service.

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kubeship_config::shared::{ValidationError, WorkloadConfig};

/// Name attached to the container port and the service port.
const PORT_NAME: &str = "http";

/// Protocol for both port declarations.
const PROTOCOL_TCP: &str = "TCP";

/// Service type exposing the workload on a port of every cluster node.
const SERVICE_TYPE_NODE_PORT: &str = "NodePort";

/// Builds the Deployment descriptor for a workload.
///
/// The pod template labels and the Deployment selector are both copies of
/// the configured label set, so the Deployment always matches its own pods.
/// Fails with a [`ValidationError`] before any descriptor is assembled if
/// the configuration is invalid.
pub fn build_deployment(workload: &WorkloadConfig) -> Result<Deployment, ValidationError> {
    workload.validate()?;

    let labels = workload.labels.clone();

    Ok(Deployment {
        metadata: ObjectMeta {
            name: Some(workload.deployment_name.clone()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(workload.replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: workload.container_name.clone(),
                        image: Some(workload.image.clone()),
                        ports: Some(vec![ContainerPort {
                            name: Some(PORT_NAME.to_string()),
                            container_port: workload.container_port as i32,
                            protocol: Some(PROTOCOL_TCP.to_string()),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Builds the Service descriptor for a workload.
///
/// The Service selector is a copy of the same label set used by
/// [`build_deployment`] and routes the configured service port to the
/// container port. The Service is node-exposed (`NodePort`).
pub fn build_service(workload: &WorkloadConfig) -> Result<Service, ValidationError> {
    workload.validate()?;

    Ok(Service {
        metadata: ObjectMeta {
            name: Some(workload.service_name.clone()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            type_: Some(SERVICE_TYPE_NODE_PORT.to_string()),
            selector: Some(workload.labels.clone()),
            ports: Some(vec![ServicePort {
                name: Some(PORT_NAME.to_string()),
                port: workload.service_port as i32,
                target_port: Some(IntOrString::Int(workload.container_port as i32)),
                protocol: Some(PROTOCOL_TCP.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    })
}
