use crate::error::VariantSelectionError;
use crate::failure::FailureKind;

/// A pointer into the documentation: a sentence to print before the link and the section the
/// link points at.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DocumentationSuggestion {
    pub prefix: &'static str,
    pub section: &'static str,
}

/// Suggested for every failure, on top of the failure specific documentation.
pub const REVIEW_ALGORITHM: DocumentationSuggestion = DocumentationSuggestion {
    prefix: "Review the variant matching algorithm at ",
    section: "sub:variant-aware-matching",
};

impl FailureKind {
    pub const fn documentation(self) -> DocumentationSuggestion {
        match self {
            FailureKind::NoMatchingVariants => DocumentationSuggestion {
                prefix: "No matching variant errors are explained in more detail at ",
                section: "sub:variant-no-match",
            },
            FailureKind::IncompatibleMultipleVariants => DocumentationSuggestion {
                prefix: "Incompatible variant errors are explained in more detail at ",
                section: "sub:variant-incompatible",
            },
        }
    }
}

/// Turns a documentation section into a link the user can follow.
pub trait DocumentationLinks {
    fn link_to_section(&self, section: &str) -> String;
}

/// Links sections as anchors of a single page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLinks {
    page_url: String,
}

impl SectionLinks {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
        }
    }
}

impl DocumentationLinks for SectionLinks {
    fn link_to_section(&self, section: &str) -> String {
        format!("{}#{}", self.page_url, section)
    }
}

/// The rendered explanation of a resolution failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureDescription {
    kind: FailureKind,
    message: String,
    documentation: DocumentationSuggestion,
    suggest_review_algorithm: bool,
}

impl FailureDescription {
    pub(crate) fn new(kind: FailureKind, message: String) -> Self {
        Self {
            kind,
            message,
            documentation: kind.documentation(),
            suggest_review_algorithm: true,
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn documentation(&self) -> DocumentationSuggestion {
        self.documentation
    }

    pub fn suggest_review_algorithm(&self) -> bool {
        self.suggest_review_algorithm
    }

    /// The suggestions of this description as printable sentences
    pub fn resolutions(&self, links: &impl DocumentationLinks) -> Vec<String> {
        let review = self.suggest_review_algorithm.then_some(REVIEW_ALGORITHM);
        std::iter::once(self.documentation)
            .chain(review)
            .map(|s| format!("{}{}.", s.prefix, links.link_to_section(s.section)))
            .collect()
    }

    pub fn into_error(self) -> VariantSelectionError {
        match self.kind {
            FailureKind::NoMatchingVariants => VariantSelectionError::NoMatchingVariants(self),
            FailureKind::IncompatibleMultipleVariants => {
                VariantSelectionError::IncompatibleVariants(self)
            }
        }
    }
}
