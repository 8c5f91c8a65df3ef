use crate::describer::{select_describer, AttributeDescriber, DefaultDescriber};
use crate::description::FailureDescription;
use crate::error::VariantSelectionError;
use crate::failure::{
    IncompatibleMultipleVariantsFailure, NoMatchingVariantsFailure, ResolutionFailure,
};
use crate::reporter::{NoOpReporter, Reporter};
use crate::tree::TreeNode;
use itertools::Itertools;

/// Explains resolution failures to the user.
///
/// Describing a failure is deterministic and does not mutate anything, so a single describer can
/// be shared between threads as long as its reporter can.
#[derive(Clone, Debug, Default)]
pub struct FailureDescriber<R = NoOpReporter> {
    reporter: R,
}

impl FailureDescriber {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Reporter> FailureDescriber<R> {
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> FailureDescriber<R2> {
        FailureDescriber { reporter }
    }

    pub fn describe(&self, failure: &ResolutionFailure) -> FailureDescription {
        self.reporter
            .describing(failure.kind(), failure.requested_name());

        let describer = select_describer(failure.requested_attributes(), failure.schema());
        self.reporter.selected_describer(describer.name());

        let message = match failure {
            ResolutionFailure::NoMatchingVariants(f) => self.no_matching_variants(f, describer),
            ResolutionFailure::IncompatibleMultipleVariants(f) => {
                self.incompatible_multiple_variants(f)
            }
        };

        let description = FailureDescription::new(failure.kind(), message);
        self.reporter.described(&description);
        description
    }

    /// Describes the failure and wraps it into the error matching its kind
    pub fn describe_error(&self, failure: &ResolutionFailure) -> VariantSelectionError {
        self.describe(failure).into_error()
    }

    /// One child per candidate, listing only the attributes that make it incompatible
    fn no_matching_variants(
        &self,
        failure: &NoMatchingVariantsFailure,
        describer: &dyn AttributeDescriber,
    ) -> String {
        let details = failure.details();
        let mut root = TreeNode::new(format!(
            "No variants of {} match the consumer attributes",
            details.requested_name()
        ));

        for candidate in details.candidates() {
            let mut node = TreeNode::new(candidate.display_name());
            for incompatibility in candidate.incompatibilities() {
                node.push(TreeNode::new(
                    describer.describe_incompatibility(incompatibility),
                ));
            }
            root.push(node);
            self.reporter.rendered_candidate(candidate);
        }

        root.to_string()
    }

    /// One line per candidate with all of its attributes, since the candidates conflict with each
    /// other rather than with the request
    fn incompatible_multiple_variants(
        &self,
        failure: &IncompatibleMultipleVariantsFailure,
    ) -> String {
        let details = failure.details();
        let header = format!(
            "Multiple incompatible variants of {} were selected:",
            details.requested_name()
        );

        let lines = details.candidates().iter().map(|candidate| {
            let attributes = candidate.all_candidate_attributes().iter().collect_vec();
            self.reporter.rendered_candidate(candidate);
            format!(
                "   - Variant {} has attributes {}",
                candidate.display_name(),
                DefaultDescriber.describe_attribute_set(&attributes)
            )
        });

        std::iter::once(header).chain(lines).join("\n")
    }
}
