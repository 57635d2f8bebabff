//! Per-resource outcome reporting.

use tracing::{error, info};

use crate::submit::SubmissionOutcome;

/// Reports every submission outcome in submission order and returns the
/// overall run result.
///
/// Emits one line per descriptor: either the name the control plane accepted
/// or the typed failure. The run succeeds only when every descriptor was
/// accepted; a single failure marks the whole run failed even when other
/// resources were created, so the caller can see exactly what exists on the
/// cluster.
pub fn report(outcomes: &[SubmissionOutcome]) -> bool {
    let mut all_accepted = true;

    for outcome in outcomes {
        match &outcome.result {
            Ok(accepted_name) => {
                info!(kind = %outcome.kind, name = %accepted_name, "resource created");
            }
            Err(err) => {
                all_accepted = false;
                error!(
                    kind = %outcome.kind,
                    name = %outcome.name,
                    error = %err,
                    "resource creation failed"
                );
            }
        }
    }

    all_accepted
}
