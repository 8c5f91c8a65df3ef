use crate::attributes::{AttributeKey, Value};
use crate::describer::AttributeDescriber;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Decides whether a candidate's value satisfies the requested value for one attribute. The first
/// argument is the requested value, the second the candidate's.
pub type CompatibilityRule = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// The attribute schema of the current resolution context.
///
/// Besides compatibility rules it carries the describers registered by the host, in priority
/// order. The fallback describer is not part of the registry; it is always consulted last.
#[derive(Clone, Default)]
pub struct AttributesSchema {
    describers: Vec<Arc<dyn AttributeDescriber>>,
    rules: FxHashMap<AttributeKey, CompatibilityRule>,
}

impl AttributesSchema {
    pub fn builder() -> AttributesSchemaBuilder {
        AttributesSchemaBuilder::default()
    }

    /// Registered describers, most specific first
    pub fn describers(&self) -> impl Iterator<Item = &dyn AttributeDescriber> + '_ {
        self.describers.iter().map(|d| &**d)
    }

    /// Whether the candidate value is compatible with the requested one. Falls back to equality
    /// for attributes without a registered rule.
    pub fn is_compatible(&self, key: &AttributeKey, requested: &Value, candidate: &Value) -> bool {
        match self.rules.get(key) {
            Some(rule) => rule(requested, candidate),
            None => requested == candidate,
        }
    }
}

impl Debug for AttributesSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributesSchema")
            .field(
                "describers",
                &self.describers.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Default)]
pub struct AttributesSchemaBuilder {
    schema: AttributesSchema,
}

impl AttributesSchemaBuilder {
    /// Registers a describer with a lower priority than every describer registered before it
    pub fn describer(mut self, describer: impl AttributeDescriber + 'static) -> Self {
        self.schema.describers.push(Arc::new(describer));
        self
    }

    /// Registers the compatibility rule of an attribute, replacing any previous rule for it
    pub fn compatibility_rule(
        mut self,
        key: AttributeKey,
        rule: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.schema.rules.insert(key, Arc::new(rule));
        self
    }

    pub fn build(self) -> AttributesSchema {
        self.schema
    }
}
