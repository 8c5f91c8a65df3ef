use crate::assessor::Incompatibility;
use crate::attributes::{AttributeKey, AttributeSet, AttributeValue};
use crate::schema::AttributesSchema;
use itertools::Itertools;

/// Turns attribute values into human readable text.
///
/// Describers are registered in an [`AttributesSchema`] and selected per failure with
/// [`select_describer`]. A describer only has to phrase attribute sets; the phrasing of individual
/// incompatibilities is built on top of that and can be overridden.
pub trait AttributeDescriber: Send + Sync {
    /// A short name identifying the describer in logs
    fn name(&self) -> &str;

    /// Whether this describer is able to describe every one of the given attributes
    fn can_describe(&self, keys: &[&AttributeKey]) -> bool;

    /// Describe a set of attribute values as a single phrase
    fn describe_attribute_set(&self, values: &[&AttributeValue]) -> String;

    /// Describe what an attribute is about, used when a candidate does not declare it
    fn describe_key(&self, key: &AttributeKey) -> String {
        key.name().to_string()
    }

    fn describe_mismatch(&self, requested: &AttributeValue, candidate: &AttributeValue) -> String {
        format!(
            "Incompatible because this component declares {} and the consumer needed {}",
            self.describe_attribute_set(&[candidate]),
            self.describe_attribute_set(&[requested])
        )
    }

    fn describe_missing(&self, requested: &AttributeValue) -> String {
        format!(
            "Doesn't say anything about {} (required {})",
            self.describe_key(requested.key()),
            self.describe_attribute_set(&[requested])
        )
    }

    fn describe_incompatibility(&self, incompatibility: Incompatibility<'_>) -> String {
        match incompatibility {
            Incompatibility::Mismatched {
                requested,
                candidate,
            } => self.describe_mismatch(requested, candidate),
            Incompatibility::Missing { requested } => self.describe_missing(requested),
        }
    }
}

/// Describes any attribute as `key=value`, sorted by key name and joined by commas.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDescriber;

static DEFAULT_DESCRIBER: DefaultDescriber = DefaultDescriber;

impl AttributeDescriber for DefaultDescriber {
    fn name(&self) -> &str {
        "default"
    }

    fn can_describe(&self, _keys: &[&AttributeKey]) -> bool {
        true
    }

    fn describe_attribute_set(&self, values: &[&AttributeValue]) -> String {
        values
            .iter()
            .sorted_by(|a, b| a.key().cmp(b.key()))
            .join(", ")
    }
}

/// Selects the most specific describer able to describe all requested attributes.
///
/// Registered describers are scanned in priority order; when none of them claims the requested
/// keys the [`DefaultDescriber`] is returned.
pub fn select_describer<'a>(
    requested: &AttributeSet,
    schema: &'a AttributesSchema,
) -> &'a dyn AttributeDescriber {
    let keys: Vec<_> = requested.keys().collect();
    let describer = schema
        .describers()
        .find(|d| d.can_describe(&keys))
        .unwrap_or(&DEFAULT_DESCRIBER as &dyn AttributeDescriber);

    tracing::trace!(
        describer = describer.name(),
        attributes = keys.len(),
        "selected attribute describer"
    );

    describer
}
