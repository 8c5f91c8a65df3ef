use crate::attributes::{AttributeKey, AttributeSet, AttributeValue, RequestedAttributes, Value};
use crate::schema::AttributesSchema;
use itertools::{EitherOrBoth, Itertools};
use std::sync::Arc;

/// A variant offered for selection, identified by a display name and carrying its declared
/// attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateVariant {
    display_name: String,
    attributes: AttributeSet,
}

impl CandidateVariant {
    pub fn new(display_name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            display_name: display_name.into(),
            attributes,
        }
    }

    /// A variant owned by a component, displayed as `<component> (<variant>)`
    pub fn in_component(component: &str, variant: &str, attributes: AttributeSet) -> Self {
        Self::new(format!("{component} ({variant})"), attributes)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Classification {
    Matched,
    Mismatched,
    RequestedOnly,
    CandidateOnly,
}

/// How a single attribute of a candidate compares to the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeAssessment {
    key: AttributeKey,
    requested: Option<AttributeValue>,
    candidate: Option<AttributeValue>,
    classification: Classification,
}

/// An assessment that explains why a candidate cannot be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Incompatibility<'a> {
    Mismatched {
        requested: &'a AttributeValue,
        candidate: &'a AttributeValue,
    },
    Missing {
        requested: &'a AttributeValue,
    },
}

impl AttributeAssessment {
    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn requested(&self) -> Option<&AttributeValue> {
        self.requested.as_ref()
    }

    pub fn candidate(&self) -> Option<&AttributeValue> {
        self.candidate.as_ref()
    }

    pub fn requested_value(&self) -> Option<&Value> {
        self.requested.as_ref().map(|v| v.value())
    }

    pub fn candidate_value(&self) -> Option<&Value> {
        self.candidate.as_ref().map(|v| v.value())
    }

    /// Returns the reason this attribute makes the candidate incompatible, if it does
    pub fn incompatibility(&self) -> Option<Incompatibility<'_>> {
        match (self.classification, &self.requested, &self.candidate) {
            (Classification::Mismatched, Some(requested), Some(candidate)) => {
                Some(Incompatibility::Mismatched {
                    requested,
                    candidate,
                })
            }
            (Classification::RequestedOnly, Some(requested), None) => {
                Some(Incompatibility::Missing { requested })
            }
            _ => None,
        }
    }
}

/// A candidate together with the assessment of each of its attributes against a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessedCandidate {
    candidate: CandidateVariant,
    requested: RequestedAttributes,
    assessments: Vec<AttributeAssessment>,
    compatible: bool,
}

impl AssessedCandidate {
    pub fn display_name(&self) -> &str {
        self.candidate.display_name()
    }

    pub fn candidate(&self) -> &CandidateVariant {
        &self.candidate
    }

    pub fn requested(&self) -> &RequestedAttributes {
        &self.requested
    }

    /// One assessment per attribute in the union of requested and declared keys, sorted by key
    pub fn assessments(&self) -> &[AttributeAssessment] {
        &self.assessments
    }

    /// Whether no requested attribute is missing or declared with a conflicting value
    pub fn is_compatible(&self) -> bool {
        self.compatible
    }

    pub fn all_candidate_attributes(&self) -> &AttributeSet {
        self.candidate.attributes()
    }

    pub fn incompatibilities(&self) -> impl Iterator<Item = Incompatibility<'_>> + '_ {
        self.assessments.iter().filter_map(|a| a.incompatibility())
    }
}

/// Compares candidates against a request, attribute by attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateAssessor<'s> {
    schema: Option<&'s AttributesSchema>,
}

impl<'s> CandidateAssessor<'s> {
    /// An assessor that consults the compatibility rules of the given schema
    pub fn new(schema: &'s AttributesSchema) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    pub fn assess(
        &self,
        candidate: CandidateVariant,
        requested: &RequestedAttributes,
    ) -> AssessedCandidate {
        // Both sides are sorted by key, so merging them visits every key of the union exactly once
        let assessments: Vec<_> = requested
            .sorted()
            .into_iter()
            .merge_join_by(candidate.attributes().sorted(), |r, c| r.key().cmp(c.key()))
            .map(|pair| match pair {
                EitherOrBoth::Both(requested, declared) => {
                    let classification = if self.is_compatible(requested, declared) {
                        Classification::Matched
                    } else {
                        Classification::Mismatched
                    };
                    AttributeAssessment {
                        key: requested.key().clone(),
                        requested: Some(requested.clone()),
                        candidate: Some(declared.clone()),
                        classification,
                    }
                }
                EitherOrBoth::Left(requested) => AttributeAssessment {
                    key: requested.key().clone(),
                    requested: Some(requested.clone()),
                    candidate: None,
                    classification: Classification::RequestedOnly,
                },
                EitherOrBoth::Right(declared) => AttributeAssessment {
                    key: declared.key().clone(),
                    requested: None,
                    candidate: Some(declared.clone()),
                    classification: Classification::CandidateOnly,
                },
            })
            .collect();

        let compatible = assessments.iter().all(|a| {
            !matches!(
                a.classification,
                Classification::Mismatched | Classification::RequestedOnly
            )
        });

        tracing::trace!(
            candidate = candidate.display_name(),
            compatible,
            "assessed candidate"
        );

        AssessedCandidate {
            candidate,
            requested: Arc::clone(requested),
            assessments,
            compatible,
        }
    }

    fn is_compatible(&self, requested: &AttributeValue, declared: &AttributeValue) -> bool {
        match self.schema {
            Some(schema) => {
                schema.is_compatible(requested.key(), requested.value(), declared.value())
            }
            None => requested.value() == declared.value(),
        }
    }
}

/// Assesses a candidate using plain value equality for every attribute
pub fn assess(candidate: CandidateVariant, requested: &RequestedAttributes) -> AssessedCandidate {
    CandidateAssessor::default().assess(candidate, requested)
}
