use crate::attributes::{AttributeKey, AttributeType};
use crate::description::FailureDescription;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("attribute '{key}' expects a value of type {expected}, but got {actual}")]
    TypeMismatch {
        key: String,
        expected: AttributeType,
        actual: AttributeType,
    },
    #[error("attribute {0} was declared more than once")]
    DuplicateKey(AttributeKey),
}

/// Contract violations detected while constructing a resolution failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureError {
    #[error("a failure for {0} must carry at least one candidate")]
    NoCandidates(String),
    #[error("candidate {candidate} of {requested_name} was assessed against a different set of requested attributes")]
    InconsistentRequest {
        requested_name: String,
        candidate: String,
    },
}

/// The user-facing error produced from a described failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantSelectionError {
    #[error("{}", .0.message())]
    NoMatchingVariants(FailureDescription),
    #[error("{}", .0.message())]
    IncompatibleVariants(FailureDescription),
}

impl VariantSelectionError {
    pub fn description(&self) -> &FailureDescription {
        match self {
            VariantSelectionError::NoMatchingVariants(d)
            | VariantSelectionError::IncompatibleVariants(d) => d,
        }
    }
}
