use std::sync::Arc;

use variant_diagnostics::ecosystem::{
    JvmEcosystemDescriber, NativePlatformDescriber, CATEGORY, OPERATING_SYSTEM,
    TARGET_JVM_VERSION, USAGE,
};
use variant_diagnostics::{
    assess, AttributeKey, AttributeSet, AttributeType, AttributeValue, AttributesSchema,
    CandidateVariant, FailureDescriber, FailureError, FailureKind,
    IncompatibleMultipleVariantsFailure, NoMatchingVariantsFailure, RequestedAttributes,
    ResolutionFailure, SectionLinks, TracingReporter, VariantSelectionError, REVIEW_ALGORITHM,
};

fn attributes(values: impl IntoIterator<Item = AttributeValue>) -> anyhow::Result<AttributeSet> {
    Ok(AttributeSet::from_values(values)?)
}

fn requested(values: impl IntoIterator<Item = AttributeValue>) -> anyhow::Result<RequestedAttributes> {
    Ok(Arc::new(attributes(values)?))
}

fn ecosystem_schema() -> Arc<AttributesSchema> {
    Arc::new(
        AttributesSchema::builder()
            .describer(NativePlatformDescriber)
            .describer(JvmEcosystemDescriber)
            .build(),
    )
}

fn no_matching_jar() -> anyhow::Result<ResolutionFailure> {
    let requested = requested([AttributeValue::named("usage", "java-api")])?;
    let candidate = CandidateVariant::in_component(
        "lib-1.0",
        "runtime",
        attributes([
            AttributeValue::named("usage", "java-runtime"),
            AttributeValue::named("status", "release"),
        ])?,
    );

    Ok(NoMatchingVariantsFailure::new(
        "jar",
        Arc::clone(&requested),
        Arc::default(),
        vec![assess(candidate, &requested)],
    )?
    .into())
}

fn incompatible_jar() -> anyhow::Result<ResolutionFailure> {
    let requested = requested([AttributeValue::named("usage", "java-api")])?;
    let lib_a = CandidateVariant::new(
        "lib-a",
        attributes([
            AttributeValue::named("usage", "java-api"),
            AttributeValue::boolean("debug", true),
        ])?,
    );
    let lib_b = CandidateVariant::new(
        "lib-b",
        attributes([
            AttributeValue::named("usage", "java-api"),
            AttributeValue::boolean("debug", false),
        ])?,
    );

    Ok(IncompatibleMultipleVariantsFailure::new(
        "jar",
        Arc::clone(&requested),
        Arc::default(),
        vec![assess(lib_a, &requested), assess(lib_b, &requested)],
    )?
    .into())
}

#[test]
fn no_matching_variants_lists_only_incompatible_attributes() -> anyhow::Result<()> {
    let description = FailureDescriber::new().describe(&no_matching_jar()?);

    assert_eq!(description.kind(), FailureKind::NoMatchingVariants);
    insta::assert_snapshot!(description.message(), @r###"
    No variants of jar match the consumer attributes:
      - lib-1.0 (runtime):
          - Incompatible because this component declares usage=java-runtime and the consumer needed usage=java-api
    "###);

    Ok(())
}

#[test]
fn incompatible_variants_list_all_attributes() -> anyhow::Result<()> {
    let description = FailureDescriber::new().describe(&incompatible_jar()?);

    assert_eq!(description.kind(), FailureKind::IncompatibleMultipleVariants);
    assert_eq!(
        description.message(),
        "Multiple incompatible variants of jar were selected:\n   - Variant lib-a has attributes debug=true, usage=java-api\n   - Variant lib-b has attributes debug=false, usage=java-api"
    );

    Ok(())
}

#[test]
fn missing_attributes_are_listed() -> anyhow::Result<()> {
    let requested = requested([
        AttributeValue::named("usage", "java-api"),
        AttributeValue::boolean("debug", true),
    ])?;
    let candidates = [
        CandidateVariant::new("lib-1.0 (api)", attributes([AttributeValue::named("usage", "java-api")])?),
        CandidateVariant::new("lib-1.0 (empty)", AttributeSet::new()),
    ];

    let failure = NoMatchingVariantsFailure::assess_all(
        "lib",
        Arc::clone(&requested),
        Arc::default(),
        candidates,
    )?;
    let description = FailureDescriber::new().describe(&failure.into());

    insta::assert_snapshot!(description.message(), @r###"
    No variants of lib match the consumer attributes:
      - lib-1.0 (api):
          - Doesn't say anything about debug (required debug=true)
      - lib-1.0 (empty):
          - Doesn't say anything about debug (required debug=true)
          - Doesn't say anything about usage (required usage=java-api)
    "###);

    Ok(())
}

#[test]
fn ecosystem_describer_phrases_jvm_attributes() -> anyhow::Result<()> {
    let requested = requested([
        AttributeValue::named(USAGE, "java-api"),
        AttributeValue::named(CATEGORY, "library"),
        AttributeValue::integer(TARGET_JVM_VERSION, 8),
    ])?;
    let candidates = [
        CandidateVariant::in_component(
            "lib-1.0",
            "runtimeElements",
            attributes([
                AttributeValue::named(CATEGORY, "library"),
                AttributeValue::named(USAGE, "java-runtime"),
                AttributeValue::integer(TARGET_JVM_VERSION, 11),
            ])?,
        ),
        CandidateVariant::in_component(
            "lib-1.0",
            "sourcesElements",
            attributes([
                AttributeValue::named(CATEGORY, "documentation"),
                AttributeValue::named("org.gradle.docstype", "sources"),
                AttributeValue::named(USAGE, "java-runtime"),
            ])?,
        ),
    ];

    let failure =
        NoMatchingVariantsFailure::assess_all("lib", requested, ecosystem_schema(), candidates)?;
    let description = FailureDescriber::new()
        .with_reporter(TracingReporter)
        .describe(&failure.into());

    insta::assert_snapshot!(description.message(), @r###"
    No variants of lib match the consumer attributes:
      - lib-1.0 (runtimeElements):
          - Incompatible because this component declares a component, compatible with Java 11 and the consumer needed a component, compatible with Java 8
          - Incompatible because this component declares a component for use during runtime and the consumer needed a component for use during compile-time
      - lib-1.0 (sourcesElements):
          - Incompatible because this component declares documentation and the consumer needed a library
          - Doesn't say anything about its target Java version (required a component, compatible with Java 8)
          - Incompatible because this component declares a component for use during runtime and the consumer needed a component for use during compile-time
    "###);

    Ok(())
}

#[test]
fn compatibility_rules_decide_mismatches() -> anyhow::Result<()> {
    let version = AttributeKey::new(TARGET_JVM_VERSION, AttributeType::Integer);
    let schema = Arc::new(
        AttributesSchema::builder()
            .describer(JvmEcosystemDescriber)
            .compatibility_rule(version, |requested, candidate| {
                match (requested.as_integer(), candidate.as_integer()) {
                    (Some(requested), Some(candidate)) => candidate <= requested,
                    _ => false,
                }
            })
            .build(),
    );
    let requested = requested([
        AttributeValue::integer(TARGET_JVM_VERSION, 11),
        AttributeValue::named(USAGE, "java-api"),
    ])?;
    let candidates = [
        CandidateVariant::new(
            "lib-1.0 (java8Api)",
            attributes([
                AttributeValue::integer(TARGET_JVM_VERSION, 8),
                AttributeValue::named(USAGE, "java-runtime"),
            ])?,
        ),
        CandidateVariant::new(
            "lib-1.0 (java17Api)",
            attributes([
                AttributeValue::integer(TARGET_JVM_VERSION, 17),
                AttributeValue::named(USAGE, "java-api"),
            ])?,
        ),
    ];

    let failure = NoMatchingVariantsFailure::assess_all("lib", requested, schema, candidates)?;
    let description = FailureDescriber::new().describe(&failure.into());

    insta::assert_snapshot!(description.message(), @r###"
    No variants of lib match the consumer attributes:
      - lib-1.0 (java8Api):
          - Incompatible because this component declares a component for use during runtime and the consumer needed a component for use during compile-time
      - lib-1.0 (java17Api):
          - Incompatible because this component declares a component, compatible with Java 17 and the consumer needed a component, compatible with Java 11
    "###);

    Ok(())
}

#[test]
fn mixed_domains_fall_back_to_the_default_describer() -> anyhow::Result<()> {
    let requested = requested([
        AttributeValue::named(USAGE, "java-api"),
        AttributeValue::named(OPERATING_SYSTEM, "linux"),
    ])?;
    let candidate = CandidateVariant::new(
        "lib-1.0 (windowsApi)",
        attributes([
            AttributeValue::named(USAGE, "java-api"),
            AttributeValue::named(OPERATING_SYSTEM, "windows"),
        ])?,
    );

    let failure = NoMatchingVariantsFailure::assess_all(
        "lib",
        requested,
        ecosystem_schema(),
        [candidate],
    )?;
    let description = FailureDescriber::new().describe(&failure.into());

    insta::assert_snapshot!(description.message(), @r###"
    No variants of lib match the consumer attributes:
      - lib-1.0 (windowsApi):
          - Incompatible because this component declares org.gradle.native.operatingSystem=windows and the consumer needed org.gradle.native.operatingSystem=linux
    "###);

    Ok(())
}

#[test]
fn every_description_carries_both_suggestions() -> anyhow::Result<()> {
    let describer = FailureDescriber::new();
    let links = SectionLinks::new("https://docs.gradle.org/current/userguide/variant_model.html");

    for (failure, section) in [
        (no_matching_jar()?, "sub:variant-no-match"),
        (incompatible_jar()?, "sub:variant-incompatible"),
    ] {
        let description = describer.describe(&failure);

        assert_eq!(description.documentation(), failure.kind().documentation());
        assert_eq!(description.documentation().section, section);
        assert!(description.suggest_review_algorithm());

        let resolutions = description.resolutions(&links);
        assert_eq!(resolutions.len(), 2);
        assert!(resolutions[0].starts_with(description.documentation().prefix));
        assert!(resolutions[0].ends_with(&format!("#{section}.")));
        assert!(resolutions[1].starts_with(REVIEW_ALGORITHM.prefix));
    }

    Ok(())
}

#[test]
fn errors_match_the_failure_kind() -> anyhow::Result<()> {
    let describer = FailureDescriber::new();

    let err = describer.describe_error(&no_matching_jar()?);
    assert!(matches!(err, VariantSelectionError::NoMatchingVariants(_)));
    assert!(err
        .to_string()
        .starts_with("No variants of jar match the consumer attributes"));

    let err = describer.describe_error(&incompatible_jar()?);
    assert!(matches!(err, VariantSelectionError::IncompatibleVariants(_)));
    assert_eq!(err.description().kind(), FailureKind::IncompatibleMultipleVariants);

    Ok(())
}

#[test]
fn describing_twice_is_identical() -> anyhow::Result<()> {
    let describer = FailureDescriber::new();
    for failure in [no_matching_jar()?, incompatible_jar()?] {
        assert_eq!(describer.describe(&failure), describer.describe(&failure));
    }

    Ok(())
}

#[test]
fn failures_without_candidates_are_rejected() -> anyhow::Result<()> {
    let err = IncompatibleMultipleVariantsFailure::new(
        "jar",
        requested([AttributeValue::named("usage", "java-api")])?,
        Arc::default(),
        Vec::new(),
    )
    .unwrap_err();

    assert_eq!(err, FailureError::NoCandidates("jar".to_string()));
    Ok(())
}

#[test]
fn failures_are_described_concurrently() -> anyhow::Result<()> {
    let describer = FailureDescriber::new();
    let failures = vec![no_matching_jar()?, incompatible_jar()?, no_matching_jar()?];
    let expected: Vec<_> = failures.iter().map(|f| describer.describe(f)).collect();

    let described: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = failures
            .into_iter()
            .map(|failure| {
                let describer = &describer;
                s.spawn(move || describer.describe(&failure))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("describing thread panicked"))
            .collect()
    });

    assert_eq!(described, expected);
    Ok(())
}
