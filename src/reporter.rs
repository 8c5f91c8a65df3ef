use crate::assessor::AssessedCandidate;
use crate::description::FailureDescription;
use crate::failure::FailureKind;

/// Observes the construction of failure descriptions.
pub trait Reporter {
    /// Called before a failure is described
    fn describing(&self, _kind: FailureKind, _requested_name: &str) {}

    /// Called once the attribute describer for a failure has been selected
    fn selected_describer(&self, _describer: &str) {}

    /// Called after a candidate has been added to the message
    fn rendered_candidate(&self, _candidate: &AssessedCandidate) {}

    /// Called after the description has been built
    fn described(&self, _description: &FailureDescription) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpReporter;

impl Reporter for NoOpReporter {}

/// Forwards every event to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn describing(&self, kind: FailureKind, requested_name: &str) {
        tracing::debug!(?kind, requested_name, "describing variant selection failure");
    }

    fn selected_describer(&self, describer: &str) {
        tracing::debug!(describer, "selected attribute describer");
    }

    fn rendered_candidate(&self, candidate: &AssessedCandidate) {
        tracing::trace!(
            candidate = candidate.display_name(),
            incompatibilities = candidate.incompatibilities().count(),
            "rendered candidate"
        );
    }

    fn described(&self, description: &FailureDescription) {
        tracing::debug!(
            kind = ?description.kind(),
            section = description.documentation().section,
            "described variant selection failure"
        );
    }
}
