/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use acm::operation::import_certificate::ImportCertificateRequest;
use acm::operation::list_certificates::ListCertificatesRequest;
use acm::primitives::{Blob, DateTime};
use acm::types::{
    CertificateDetail, CertificateStatus, CertificateSummary, Filters, KeyAlgorithm, KeyUsageName,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn certificate_detail_with_known_status() {
    let detail = CertificateDetail::builder()
        .domain_name("example.com")
        .status(CertificateStatus::from("ISSUED"))
        .build();

    assert_eq!(detail.status(), Some(&CertificateStatus::Issued));
    assert_eq!(detail.status().map(|s| s.as_str()), Some("ISSUED"));
    assert!(!detail.has_key_usages());
    assert!(detail.key_usages().is_empty());
    assert_eq!(detail.to_builder().build(), detail);
}

#[test]
fn all_absent_records_are_legal() {
    let detail = CertificateDetail::builder().build();
    assert_eq!(detail.domain_name(), None);
    assert_eq!(detail.created_at(), None);
    assert!(detail.subject_alternative_names().is_empty());
    assert_eq!(detail, detail.to_builder().build());

    let filters = Filters::builder().build();
    assert_eq!(filters, Filters::builder().build());
    assert_eq!(hash_of(&filters), hash_of(&Filters::builder().build()));
}

#[test]
fn unset_and_empty_lists_report_presence_but_compare_equal() {
    let unset = ListCertificatesRequest::builder().max_items(5).build();
    let empty = ListCertificatesRequest::builder()
        .max_items(5)
        .set_certificate_statuses(Some(vec![]))
        .build();

    assert!(!unset.has_certificate_statuses());
    assert!(empty.has_certificate_statuses());
    assert!(unset.certificate_statuses().is_empty());
    assert!(empty.certificate_statuses().is_empty());
    assert_eq!(unset, empty);
    assert_eq!(hash_of(&unset), hash_of(&empty));

    // presence survives the builder round trip
    assert!(empty.to_builder().build().has_certificate_statuses());
    assert!(!unset.to_builder().build().has_certificate_statuses());
}

#[test]
fn list_setters_normalize_to_the_same_content() {
    let appended = CertificateSummary::builder()
        .key_usages(KeyUsageName::DigitalSignature)
        .key_usages(KeyUsageName::from("KEY_ENCIPHERMENT"))
        .build();
    let mut source = vec![KeyUsageName::DigitalSignature, KeyUsageName::KeyEncipherment];
    let replaced = CertificateSummary::builder()
        .set_key_usages(Some(source.clone()))
        .build();
    source.clear();

    assert_eq!(appended, replaced);
    assert_eq!(replaced.key_usages().len(), 2);
}

#[test]
fn unknown_enum_values_keep_their_text() {
    let summary = CertificateSummary::builder()
        .status(CertificateStatus::from("QUARANTINED"))
        .key_algorithm(KeyAlgorithm::from("ML_DSA_87"))
        .build();
    assert!(matches!(summary.status(), Some(CertificateStatus::Unknown(_))));
    assert_eq!(summary.status().map(|s| s.as_str()), Some("QUARANTINED"));
    assert_eq!(summary.key_algorithm().map(|k| k.to_string()), Some("ML_DSA_87".to_string()));
    assert_eq!(summary, summary.to_builder().build());
}

#[test]
fn builds_are_independent_snapshots() {
    let builder = CertificateSummary::builder().domain_name("a.example.com");
    let first = builder.build();
    let builder = builder
        .domain_name("b.example.com")
        .subject_alternative_name_summaries("www.b.example.com");
    let second = builder.build();

    assert_eq!(first.domain_name(), Some("a.example.com"));
    assert!(!first.has_subject_alternative_name_summaries());
    assert_eq!(second.domain_name(), Some("b.example.com"));
    assert_eq!(second.subject_alternative_name_summaries(), ["www.b.example.com"]);
    assert_eq!(builder.build(), second);
}

#[test]
fn nested_records_are_copied_by_to_builder() {
    let original = CertificateDetail::builder()
        .renewal_summary_with(|r| r.renewal_status(acm::types::RenewalStatus::Success))
        .key_usages_with(|k| k.name(KeyUsageName::DigitalSignature))
        .build();
    let edited = original
        .to_builder()
        .key_usages_with(|k| k.name(KeyUsageName::CrlSigning))
        .build();

    assert_eq!(original.key_usages().len(), 1);
    assert_eq!(edited.key_usages().len(), 2);
    assert_eq!(edited.renewal_summary(), original.renewal_summary());
}

#[test]
fn private_key_is_redacted_from_debug_only() {
    let with_key = |key: &str| {
        ImportCertificateRequest::builder()
            .certificate(Blob::new("-----BEGIN CERTIFICATE-----"))
            .private_key(Blob::new(key))
            .build()
    };
    let a = with_key("first-secret");
    let b = with_key("second-secret");

    let debug = format!("{:?}", a);
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
    assert!(!debug.contains("first-secret"));
    assert!(debug.contains("certificate"));
    assert_eq!(format!("{:?}", a), format!("{:?}", b));
    assert_ne!(a, b);
    assert_ne!(hash_of(&a), hash_of(&b));
}

fn summary_strategy() -> impl Strategy<Value = CertificateSummary> {
    (
        proptest::option::of("[a-z]{1,12}\\.example\\.com"),
        proptest::option::of(proptest::collection::vec("[a-z]{1,8}", 0..4)),
        proptest::option::of(any::<bool>()),
        proptest::option::of(proptest::sample::select(CertificateStatus::values())),
        proptest::option::of(any::<i64>().prop_map(|secs| DateTime::from_secs(secs / 1000))),
        proptest::option::of("[A-Z_]{1,10}"),
    )
        .prop_map(|(domain, sans, in_use, status, created_at, raw_status)| {
            let status = raw_status
                .map(|s| CertificateStatus::from(s.as_str()))
                .or_else(|| status.map(CertificateStatus::from));
            CertificateSummary::builder()
                .set_domain_name(domain)
                .set_subject_alternative_name_summaries(sans)
                .set_in_use(in_use)
                .set_status(status)
                .set_created_at(created_at)
                .build()
        })
}

proptest! {
    #[test]
    fn to_builder_round_trips(summary in summary_strategy()) {
        let rebuilt = summary.to_builder().build();
        prop_assert_eq!(&rebuilt, &summary);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&summary));
        prop_assert_eq!(
            rebuilt.has_subject_alternative_name_summaries(),
            summary.has_subject_alternative_name_summaries()
        );
    }

    #[test]
    fn equality_depends_on_list_content(names in proptest::collection::vec("[a-z]{1,8}", 0..5)) {
        let from_vec = CertificateSummary::builder()
            .set_subject_alternative_name_summaries(Some(names.clone()))
            .build();
        let appended = names
            .iter()
            .fold(CertificateSummary::builder(), |b, n| b.subject_alternative_name_summaries(n.as_str()))
            .build();
        prop_assert_eq!(&from_vec, &appended);
        prop_assert_eq!(hash_of(&from_vec), hash_of(&appended));
    }
}
