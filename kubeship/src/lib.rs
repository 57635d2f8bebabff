//! One-shot provisioning of a replicated workload on a Kubernetes cluster.
//!
//! Builds a Deployment and a Service descriptor from configuration, submits
//! both to the cluster control plane in dependency order, and reports the
//! per-resource outcome. The provisioner issues create calls only: it never
//! updates, retries, or rolls back, so a re-run against existing resources
//! fails with a conflict instead of silently succeeding.

pub mod cluster;
pub mod report;
pub mod submit;
pub mod workload;
