use thiserror::Error;

/// Configuration validation errors.
///
/// All validation happens locally, before any request is issued against the
/// cluster control plane.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required name field is empty.
    #[error("`{0}` cannot be empty")]
    EmptyField(&'static str),

    /// The label set is empty.
    ///
    /// An empty label set would produce a Deployment selector and a Service
    /// selector that never match the workload's pods.
    #[error("`labels` must contain at least one entry")]
    EmptyLabels,

    /// The desired replica count is negative.
    ///
    /// Zero is accepted: it creates a Deployment that runs no pods, which the
    /// control plane tolerates.
    #[error("`replicas` cannot be negative (got {0})")]
    NegativeReplicas(i32),

    /// A port number is outside the valid TCP port range.
    #[error("`{field}` must be within 1-65535 (got {value})")]
    PortOutOfRange { field: &'static str, value: u32 },
}
