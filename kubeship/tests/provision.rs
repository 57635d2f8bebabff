mod support;

use std::collections::BTreeMap;
use std::sync::atomic::Ordering;

use kubeship::cluster::{ClusterError, ResourceKind};
use kubeship::report::report;
use kubeship::submit::provision_workload;
use kubeship_config::shared::{ValidationError, WorkloadConfig};
use kubeship_telemetry::init_test_tracing;
use support::{FakeClusterClient, ForcedFailure};

fn book_workload() -> WorkloadConfig {
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

#[tokio::test]
async fn provisions_deployment_then_service() {
    init_test_tracing();

    let client = FakeClusterClient::accepting();

    let outcomes = provision_workload(&client, &book_workload()).await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].kind, ResourceKind::Deployment);
    assert_eq!(outcomes[0].result.as_ref().unwrap(), "bookdeployment");
    assert_eq!(outcomes[1].kind, ResourceKind::Service);
    assert_eq!(outcomes[1].result.as_ref().unwrap(), "bookservice");
    assert_eq!(client.deployment_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.service_calls.load(Ordering::SeqCst), 1);
    assert!(report(&outcomes));
}

#[tokio::test]
async fn deployment_failure_blocks_service_submission() {
    init_test_tracing();

    let client = FakeClusterClient::failing_deployments(ForcedFailure::Authorization);

    let outcomes = provision_workload(&client, &book_workload()).await.unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(matches!(
        outcomes[0].result,
        Err(ClusterError::Authorization { .. })
    ));
    assert_eq!(client.service_calls.load(Ordering::SeqCst), 0);
    assert!(!report(&outcomes));
}

#[tokio::test]
async fn service_failure_leaves_deployment_in_place() {
    init_test_tracing();

    let client = FakeClusterClient::failing_services(ForcedFailure::Rejected);

    let outcomes = provision_workload(&client, &book_workload()).await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_accepted());
    assert!(matches!(
        outcomes[1].result,
        Err(ClusterError::Rejected { .. })
    ));
    // No compensating delete: the accepted deployment is still on the fake
    // cluster after the service failure.
    assert!(client.has_created(ResourceKind::Deployment, "bookdeployment"));
    assert!(!report(&outcomes));
}

#[tokio::test]
async fn resubmission_conflicts_instead_of_succeeding() {
    init_test_tracing();

    let client = FakeClusterClient::accepting();

    let first = provision_workload(&client, &book_workload()).await.unwrap();
    assert!(report(&first));

    let second = provision_workload(&client, &book_workload()).await.unwrap();

    assert!(matches!(
        second[0].result,
        Err(ClusterError::AlreadyExists {
            kind: ResourceKind::Deployment,
            ..
        })
    ));
    // The deployment conflict blocks the dependent service submission, so the
    // service was only ever submitted once.
    assert_eq!(second.len(), 1);
    assert_eq!(client.service_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_port_fails_before_any_network_call() {
    init_test_tracing();

    let client = FakeClusterClient::accepting();
    let mut workload = book_workload();
    workload.service_port = 70_000;

    let result = provision_workload(&client, &workload).await;

    assert!(matches!(
        result,
        Err(ValidationError::PortOutOfRange {
            field: "service_port",
            ..
        })
    ));
    assert_eq!(client.deployment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.service_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn negative_replicas_fail_before_any_network_call() {
    init_test_tracing();

    let client = FakeClusterClient::accepting();
    let mut workload = book_workload();
    workload.replicas = -1;

    let result = provision_workload(&client, &workload).await;

    assert!(matches!(result, Err(ValidationError::NegativeReplicas(-1))));
    assert_eq!(client.deployment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.service_calls.load(Ordering::SeqCst), 0);
}
