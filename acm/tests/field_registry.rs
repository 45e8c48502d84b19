/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use acm::operation::list_certificates::{ListCertificatesRequest, ListCertificatesResponse};
use acm::primitives::DateTime;
use acm::types::{
    CertificateDetail, CertificateStatus, KeyUsageName, RenewalStatus, RenewalSummary,
};
use pretty_assertions::assert_eq;
use smithy_schema::{FieldInput, FieldValueError, MarshallingType, SdkPojo, Schema};
use tracing_test::traced_test;

fn detail() -> CertificateDetail {
    CertificateDetail::builder()
        .certificate_arn("arn:aws:acm:us-east-1:123456789012:certificate/abc")
        .domain_name("example.com")
        .subject_alternative_names("example.com")
        .subject_alternative_names("www.example.com")
        .created_at(DateTime::from_secs(1_576_540_098))
        .status(CertificateStatus::Issued)
        .renewal_summary_with(|r| r.renewal_status(RenewalStatus::PendingAutoRenewal))
        .key_usages_with(|k| k.name(KeyUsageName::DigitalSignature))
        .build()
}

#[test]
fn descriptor_table_follows_declaration_order() {
    let names: Vec<_> = CertificateDetail::sdk_fields()
        .iter()
        .map(|f| f.member_name())
        .collect();
    assert_eq!(&names[..4], ["CertificateArn", "DomainName", "SubjectAlternativeNames", "DomainValidationOptions"]);
    assert_eq!(names.len(), 26);
    assert!(CertificateDetail::sdk_fields().iter().all(|f| !f.is_sensitive()));

    let created_at = CertificateDetail::sdk_field("CreatedAt").expect("declared");
    assert_eq!(created_at.marshalling_type(), MarshallingType::Instant);
    let key_usages = CertificateDetail::sdk_field("KeyUsages").expect("declared");
    assert_eq!(key_usages.marshalling_type(), MarshallingType::List);
    assert_eq!(
        key_usages.element().map(|e| e.shape_id().as_str()),
        Some("com.amazonaws.acm#KeyUsage")
    );
}

#[test]
fn values_are_read_by_wire_name() {
    let detail = detail();
    assert_eq!(detail.get_value_for_field::<&str>("DomainName"), Ok(Some("example.com")));
    assert_eq!(detail.get_value_for_field::<String>("Status"), Ok(Some("ISSUED".to_string())));
    assert_eq!(
        detail.get_value_for_field::<DateTime>("CreatedAt"),
        Ok(Some(DateTime::from_secs(1_576_540_098)))
    );
    assert_eq!(
        detail.get_value_for_field::<Vec<&str>>("SubjectAlternativeNames"),
        Ok(Some(vec!["example.com", "www.example.com"]))
    );
    let renewal = detail
        .get_value_for_field::<&RenewalSummary>("RenewalSummary")
        .expect("typed")
        .expect("present");
    assert_eq!(renewal.renewal_status(), Some(&RenewalStatus::PendingAutoRenewal));
}

#[test]
fn absent_and_unknown_members_read_as_none() {
    let detail = detail();
    assert_eq!(detail.get_value_for_field::<&str>("Serial"), Ok(None));
    assert_eq!(detail.get_value_for_field::<Vec<String>>("InUseBy"), Ok(None));
    assert_eq!(detail.get_value_for_field::<&str>("ManagedBy"), Ok(None));
}

#[test]
fn type_mismatch_is_an_error() {
    let err = detail()
        .get_value_for_field::<i32>("DomainName")
        .expect_err("string is not an integer");
    match &err {
        FieldValueError::TypeMismatch { member, expected, .. } => {
            assert_eq!(*member, Some("DomainName"));
            assert_eq!(*expected, MarshallingType::Integer);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("DomainName"));
}

#[test]
fn records_are_populated_from_wire_members() {
    let response = ListCertificatesResponse::from_members(vec![
        ("NextToken".to_string(), FieldInput::from("page-2")),
        (
            "CertificateSummaryList".to_string(),
            FieldInput::List(vec![FieldInput::Structure(vec![
                ("DomainName".to_string(), FieldInput::from("example.com")),
                ("Status".to_string(), FieldInput::from("REVOKED_LATER")),
                ("KeyUsages".to_string(), FieldInput::from(vec!["DIGITAL_SIGNATURE"])),
                ("InUse".to_string(), FieldInput::from(true)),
            ])]),
        ),
    ])
    .expect("well-formed members");

    assert_eq!(response.next_token(), Some("page-2"));
    let summary = &response.certificate_summary_list()[0];
    assert_eq!(summary.domain_name(), Some("example.com"));
    assert_eq!(summary.status().map(|s| s.as_str()), Some("REVOKED_LATER"));
    assert_eq!(summary.key_usages(), [KeyUsageName::DigitalSignature]);
    assert_eq!(summary.in_use(), Some(true));
}

#[test]
fn explicitly_empty_wire_lists_are_present() {
    let request = ListCertificatesRequest::from_members(vec![(
        "CertificateStatuses".to_string(),
        FieldInput::List(vec![]),
    )])
    .expect("well-formed members");
    assert!(request.has_certificate_statuses());
    assert_eq!(request, ListCertificatesRequest::builder().build());
}

#[test]
fn wrong_wire_kind_names_the_member() {
    let err = ListCertificatesRequest::from_members(vec![(
        "MaxItems".to_string(),
        FieldInput::from("ten"),
    )])
    .expect_err("string is not an integer");
    assert!(err.to_string().contains("MaxItems"));
}

#[traced_test]
#[test]
fn unknown_wire_members_are_skipped() {
    let request = ListCertificatesRequest::from_members(vec![
        ("NextToken".to_string(), FieldInput::from("t")),
        ("Shard".to_string(), FieldInput::from(3)),
    ])
    .expect("unknown members are not an error");
    assert_eq!(request, ListCertificatesRequest::builder().next_token("t").build());
    assert!(logs_contain("ignoring unknown member"));
    assert!(logs_contain("Shard"));
}

#[traced_test]
#[test]
fn unknown_enum_values_are_traced() {
    let status = CertificateStatus::from("ARCHIVED");
    assert_eq!(status.as_str(), "ARCHIVED");
    assert!(logs_contain("unknown enum value"));
}
