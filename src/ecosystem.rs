//! Describers for the attributes of well known ecosystems.

use crate::attributes::{AttributeKey, AttributeValue};
use crate::describer::AttributeDescriber;
use itertools::Itertools;

pub const USAGE: &str = "org.gradle.usage";
pub const CATEGORY: &str = "org.gradle.category";
pub const LIBRARY_ELEMENTS: &str = "org.gradle.libraryelements";
pub const BUNDLING: &str = "org.gradle.dependency.bundling";
pub const TARGET_JVM_VERSION: &str = "org.gradle.jvm.version";
pub const TARGET_JVM_ENVIRONMENT: &str = "org.gradle.jvm.environment";

pub const OPERATING_SYSTEM: &str = "org.gradle.native.operatingSystem";
pub const ARCHITECTURE: &str = "org.gradle.native.architecture";

const JVM_ATTRIBUTES: [&str; 6] = [
    USAGE,
    CATEGORY,
    LIBRARY_ELEMENTS,
    BUNDLING,
    TARGET_JVM_VERSION,
    TARGET_JVM_ENVIRONMENT,
];

const NATIVE_ATTRIBUTES: [&str; 2] = [OPERATING_SYSTEM, ARCHITECTURE];

fn claims(domain: &[&str], keys: &[&AttributeKey]) -> bool {
    !keys.is_empty()
        && keys
            .iter()
            .all(|k| domain.iter().any(|name| *name == k.name()))
}

fn find<'a>(values: &[&'a AttributeValue], name: &str) -> Option<&'a AttributeValue> {
    values.iter().copied().find(|v| v.key().name() == name)
}

/// Phrases the attributes of the JVM ecosystem, e.g. `a library for use during runtime, compatible
/// with Java 11, packaged as a jar`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JvmEcosystemDescriber;

impl JvmEcosystemDescriber {
    fn category(value: &str) -> String {
        match value {
            "library" => "a library".to_string(),
            "platform" => "a platform".to_string(),
            "enforced-platform" => "an enforced platform".to_string(),
            "documentation" => "documentation".to_string(),
            other => format!("a component of category '{other}'"),
        }
    }

    fn usage(value: &str) -> String {
        match value {
            "java-api" => "for use during compile-time".to_string(),
            "java-runtime" => "for use during runtime".to_string(),
            other => format!("for use during '{other}'"),
        }
    }

    fn library_elements(value: &str) -> String {
        match value {
            "jar" => "packaged as a jar".to_string(),
            "classes" => "preferably in the form of class files".to_string(),
            "resources" => "preferably only the resources files".to_string(),
            "classes+resources" => "preferably not packaged as a jar".to_string(),
            other => format!("with the library elements '{other}'"),
        }
    }

    fn bundling(value: &str) -> String {
        match value {
            "external" => "with its dependencies declared externally".to_string(),
            "embedded" => "with its dependencies bundled (fat jar)".to_string(),
            "shadowed" => "with its dependencies repackaged (shadow jar)".to_string(),
            other => format!("with its dependencies bundled as '{other}'"),
        }
    }

    fn environment(value: &str) -> String {
        match value {
            "standard-jvm" => "preferably optimized for standard JVMs".to_string(),
            "android" => "preferably optimized for Android".to_string(),
            other => format!("preferably optimized for '{other}'"),
        }
    }
}

impl AttributeDescriber for JvmEcosystemDescriber {
    fn name(&self) -> &str {
        "jvm-ecosystem"
    }

    fn can_describe(&self, keys: &[&AttributeKey]) -> bool {
        claims(&JVM_ATTRIBUTES, keys)
    }

    fn describe_attribute_set(&self, values: &[&AttributeValue]) -> String {
        let text = |name| find(values, name).map(|v| v.value().to_string());

        let mut head = text(CATEGORY)
            .map(|c| Self::category(&c))
            .unwrap_or_else(|| "a component".to_string());
        if let Some(usage) = text(USAGE) {
            head.push(' ');
            head.push_str(&Self::usage(&usage));
        }

        let details = [
            text(TARGET_JVM_VERSION).map(|v| format!("compatible with Java {v}")),
            text(LIBRARY_ELEMENTS).map(|v| Self::library_elements(&v)),
            text(BUNDLING).map(|v| Self::bundling(&v)),
            text(TARGET_JVM_ENVIRONMENT).map(|v| Self::environment(&v)),
        ];

        std::iter::once(head).chain(details.into_iter().flatten()).join(", ")
    }

    fn describe_key(&self, key: &AttributeKey) -> String {
        match key.name() {
            USAGE => "its usage".to_string(),
            CATEGORY => "its component category".to_string(),
            LIBRARY_ELEMENTS => "its elements".to_string(),
            BUNDLING => "how its dependencies are found".to_string(),
            TARGET_JVM_VERSION => "its target Java version".to_string(),
            TARGET_JVM_ENVIRONMENT => "its target Java environment".to_string(),
            other => other.to_string(),
        }
    }
}

/// Phrases native platform attributes, e.g. `a component for linux on x86-64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePlatformDescriber;

impl AttributeDescriber for NativePlatformDescriber {
    fn name(&self) -> &str {
        "native-platform"
    }

    fn can_describe(&self, keys: &[&AttributeKey]) -> bool {
        claims(&NATIVE_ATTRIBUTES, keys)
    }

    fn describe_attribute_set(&self, values: &[&AttributeValue]) -> String {
        let mut text = "a component".to_string();
        if let Some(os) = find(values, OPERATING_SYSTEM) {
            text.push_str(&format!(" for {}", os.value()));
        }
        if let Some(arch) = find(values, ARCHITECTURE) {
            text.push_str(&format!(" on {}", arch.value()));
        }
        text
    }

    fn describe_key(&self, key: &AttributeKey) -> String {
        match key.name() {
            OPERATING_SYSTEM => "its operating system".to_string(),
            ARCHITECTURE => "its architecture".to_string(),
            other => other.to_string(),
        }
    }
}
