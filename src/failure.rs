use crate::assessor::{AssessedCandidate, CandidateAssessor, CandidateVariant};
use crate::attributes::RequestedAttributes;
use crate::error::FailureError;
use crate::schema::AttributesSchema;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FailureKind {
    /// None of the candidates is compatible with the request
    NoMatchingVariants,
    /// More than one variant was selected and they are incompatible with each other
    IncompatibleMultipleVariants,
}

/// Data shared by every kind of resolution failure.
#[derive(Clone, Debug)]
pub struct FailureDetails {
    requested_name: String,
    requested: RequestedAttributes,
    schema: Arc<AttributesSchema>,
    candidates: Vec<AssessedCandidate>,
}

impl FailureDetails {
    fn new(
        requested_name: impl Into<String>,
        requested: RequestedAttributes,
        schema: Arc<AttributesSchema>,
        candidates: Vec<AssessedCandidate>,
    ) -> Result<Self, FailureError> {
        let requested_name = requested_name.into();
        if candidates.is_empty() {
            return Err(FailureError::NoCandidates(requested_name));
        }

        if let Some(c) = candidates
            .iter()
            .find(|c| !Arc::ptr_eq(c.requested(), &requested) && **c.requested() != *requested)
        {
            return Err(FailureError::InconsistentRequest {
                candidate: c.display_name().to_string(),
                requested_name,
            });
        }

        Ok(Self {
            requested_name,
            requested,
            schema,
            candidates,
        })
    }

    pub fn requested_name(&self) -> &str {
        &self.requested_name
    }

    pub fn requested_attributes(&self) -> &RequestedAttributes {
        &self.requested
    }

    pub fn schema(&self) -> &AttributesSchema {
        &self.schema
    }

    /// The assessed candidates, never empty
    pub fn candidates(&self) -> &[AssessedCandidate] {
        &self.candidates
    }
}

#[derive(Clone, Debug)]
pub struct NoMatchingVariantsFailure {
    details: FailureDetails,
}

impl NoMatchingVariantsFailure {
    pub fn new(
        requested_name: impl Into<String>,
        requested: RequestedAttributes,
        schema: Arc<AttributesSchema>,
        candidates: Vec<AssessedCandidate>,
    ) -> Result<Self, FailureError> {
        FailureDetails::new(requested_name, requested, schema, candidates)
            .map(|details| Self { details })
    }

    /// Assesses every candidate against the request using the schema's compatibility rules
    pub fn assess_all(
        requested_name: impl Into<String>,
        requested: RequestedAttributes,
        schema: Arc<AttributesSchema>,
        candidates: impl IntoIterator<Item = CandidateVariant>,
    ) -> Result<Self, FailureError> {
        let assessor = CandidateAssessor::new(&schema);
        let candidates = candidates
            .into_iter()
            .map(|c| assessor.assess(c, &requested))
            .collect();
        Self::new(requested_name, requested, schema, candidates)
    }

    pub fn details(&self) -> &FailureDetails {
        &self.details
    }
}

#[derive(Clone, Debug)]
pub struct IncompatibleMultipleVariantsFailure {
    details: FailureDetails,
}

impl IncompatibleMultipleVariantsFailure {
    pub fn new(
        requested_name: impl Into<String>,
        requested: RequestedAttributes,
        schema: Arc<AttributesSchema>,
        candidates: Vec<AssessedCandidate>,
    ) -> Result<Self, FailureError> {
        FailureDetails::new(requested_name, requested, schema, candidates)
            .map(|details| Self { details })
    }

    pub fn details(&self) -> &FailureDetails {
        &self.details
    }
}

/// The ways in which variant selection can fail.
#[derive(Clone, Debug)]
pub enum ResolutionFailure {
    NoMatchingVariants(NoMatchingVariantsFailure),
    IncompatibleMultipleVariants(IncompatibleMultipleVariantsFailure),
}

impl ResolutionFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolutionFailure::NoMatchingVariants(_) => FailureKind::NoMatchingVariants,
            ResolutionFailure::IncompatibleMultipleVariants(_) => {
                FailureKind::IncompatibleMultipleVariants
            }
        }
    }

    pub fn details(&self) -> &FailureDetails {
        match self {
            ResolutionFailure::NoMatchingVariants(f) => f.details(),
            ResolutionFailure::IncompatibleMultipleVariants(f) => f.details(),
        }
    }

    pub fn requested_name(&self) -> &str {
        self.details().requested_name()
    }

    pub fn requested_attributes(&self) -> &RequestedAttributes {
        self.details().requested_attributes()
    }

    pub fn schema(&self) -> &AttributesSchema {
        self.details().schema()
    }

    pub fn candidates(&self) -> &[AssessedCandidate] {
        self.details().candidates()
    }
}

impl From<NoMatchingVariantsFailure> for ResolutionFailure {
    fn from(failure: NoMatchingVariantsFailure) -> Self {
        ResolutionFailure::NoMatchingVariants(failure)
    }
}

impl From<IncompatibleMultipleVariantsFailure> for ResolutionFailure {
    fn from(failure: IncompatibleMultipleVariantsFailure) -> Self {
        ResolutionFailure::IncompatibleMultipleVariants(failure)
    }
}
