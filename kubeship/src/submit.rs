//! Sequential submission of workload descriptors to the control plane.

use kubeship_config::shared::{ValidationError, WorkloadConfig};
use tracing::{info, warn};

use crate::cluster::{ClusterClient, ClusterError, ResourceKind};
use crate::workload::{build_deployment, build_service};

/// Result of submitting a single resource descriptor to the control plane.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// Kind of the submitted resource.
    pub kind: ResourceKind,
    /// Name the descriptor was submitted under.
    pub name: String,
    /// Accepted name echoed by the control plane, or the typed failure.
    pub result: Result<String, ClusterError>,
}

impl SubmissionOutcome {
    /// Returns whether the control plane accepted the resource.
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Provisions the workload: builds both descriptors, then submits them in
/// dependency order.
///
/// Both descriptors are built before anything is submitted, so an invalid
/// configuration fails without touching the cluster. The Deployment goes
/// first; if its submission fails, the Service submission is not attempted,
/// which guarantees this code path never creates a Service whose selector
/// matches no pods. A Service failure after an accepted Deployment leaves
/// the Deployment on the cluster: already-accepted resources are never
/// rolled back, and the reporter surfaces the partial result.
///
/// Submissions are plain sequential awaits. Dropping the returned future
/// cancels the in-flight call, and a cancelled Deployment submission
/// structurally prevents the Service call.
pub async fn provision_workload(
    client: &dyn ClusterClient,
    workload: &WorkloadConfig,
) -> Result<Vec<SubmissionOutcome>, ValidationError> {
    let deployment = build_deployment(workload)?;
    let service = build_service(workload)?;

    let mut outcomes = Vec::with_capacity(2);

    info!(name = %workload.deployment_name, "submitting deployment");
    let deployment_result = client.create_deployment(&deployment).await;
    let deployment_accepted = deployment_result.is_ok();
    outcomes.push(SubmissionOutcome {
        kind: ResourceKind::Deployment,
        name: workload.deployment_name.clone(),
        result: deployment_result,
    });

    if !deployment_accepted {
        warn!(
            name = %workload.service_name,
            "skipping service submission after deployment failure"
        );
        return Ok(outcomes);
    }

    info!(name = %workload.service_name, "submitting service");
    let service_result = client.create_service(&service).await;
    outcomes.push(SubmissionOutcome {
        kind: ResourceKind::Service,
        name: workload.service_name.clone(),
        result: service_result,
    });

    Ok(outcomes)
}
