//! Cluster control plane integration.
//!
//! This module contains the abstraction and implementation used to submit
//! workload resources (Deployments and Services) to a Kubernetes control
//! plane. Consumers should depend on the trait [`ClusterClient`] and avoid
//! relying on a specific transport.
//!
//! The default client, [`http::HttpClusterClient`], is backed by the [`kube`]
//! crate and talks to the cluster using either a configured kubeconfig path
//! or the ambient configuration (in-cluster or local `~/.kube/config`).
//! Keeping the abstraction in [`base`] lets tests substitute a fake control
//! plane that records calls instead of issuing them.
//!
//! See [`base`] for errors, resource kinds, and the client trait.

mod base;
pub mod http;

pub use base::*;
