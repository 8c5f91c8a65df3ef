mod assessor;
mod attributes;
mod describer;
mod description;
pub mod ecosystem;
mod error;
mod failure;
mod failure_describer;
mod reporter;
mod schema;
mod tree;

pub use assessor::{
    assess, AssessedCandidate, AttributeAssessment, CandidateAssessor, CandidateVariant,
    Classification, Incompatibility,
};
pub use attributes::{
    AttributeKey, AttributeSet, AttributeType, AttributeValue, RequestedAttributes, Value,
};
pub use describer::{select_describer, AttributeDescriber, DefaultDescriber};
pub use description::{
    DocumentationLinks, DocumentationSuggestion, FailureDescription, SectionLinks,
    REVIEW_ALGORITHM,
};
pub use error::{AttributeError, FailureError, VariantSelectionError};
pub use failure::{
    FailureDetails, FailureKind, IncompatibleMultipleVariantsFailure, NoMatchingVariantsFailure,
    ResolutionFailure,
};
pub use failure_describer::FailureDescriber;
pub use reporter::{NoOpReporter, Reporter, TracingReporter};
pub use schema::{AttributesSchema, AttributesSchemaBuilder, CompatibilityRule};
pub use tree::TreeNode;
