/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldInput, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>This structure is returned in the response object of <code>ListCertificates</code> action.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CertificateSummary {
    pub(crate) certificate_arn: ::std::option::Option<String>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) subject_alternative_name_summaries: ::smithy_types::TrackedList<String>,
    pub(crate) has_additional_subject_alternative_names: ::std::option::Option<bool>,
    pub(crate) status: ::std::option::Option<crate::types::CertificateStatus>,
    pub(crate) r#type: ::std::option::Option<crate::types::CertificateType>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
    pub(crate) key_usages: ::smithy_types::TrackedList<crate::types::KeyUsageName>,
    pub(crate) extended_key_usages: ::smithy_types::TrackedList<crate::types::ExtendedKeyUsageName>,
    pub(crate) in_use: ::std::option::Option<bool>,
    pub(crate) exported: ::std::option::Option<bool>,
    pub(crate) renewal_eligibility: ::std::option::Option<crate::types::RenewalEligibility>,
    pub(crate) not_before: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) not_after: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) created_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) issued_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) imported_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) revoked_at: ::std::option::Option<::smithy_types::DateTime>,
}
impl CertificateSummary {
    /// <p>Amazon Resource Name (ARN) of the certificate.</p>
    pub fn certificate_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// <p>Fully qualified domain name (FQDN), such as www.example.com or example.com, for the certificate.</p>
    pub fn domain_name(&self) -> ::std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// <p>One or more domain names (subject alternative names) included in the certificate. This list contains the domain names that are bound to the public key that is contained in the certificate.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_subject_alternative_name_summaries()`](Self::has_subject_alternative_name_summaries) to tell an absent list from an empty one.
    pub fn subject_alternative_name_summaries(&self) -> &[String] {
        self.subject_alternative_name_summaries.as_slice()
    }
    /// Returns true if `SubjectAlternativeNameSummaries` was set, even to an empty list.
    pub fn has_subject_alternative_name_summaries(&self) -> bool {
        self.subject_alternative_name_summaries.is_set()
    }

    /// <p>When called by <code>ListCertificates</code>, indicates whether the full list of subject alternative names has been included in the response.</p>
    pub fn has_additional_subject_alternative_names(&self) -> ::std::option::Option<bool> {
        self.has_additional_subject_alternative_names
    }

    /// <p>The status of the certificate.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::CertificateStatus> {
        self.status.as_ref()
    }

    /// <p>The source of the certificate. For certificates provided by ACM, this value is <code>AMAZON_ISSUED</code>. For certificates that you imported with <code>ImportCertificate</code>, this value is <code>IMPORTED</code>.</p>
    pub fn r#type(&self) -> ::std::option::Option<&crate::types::CertificateType> {
        self.r#type.as_ref()
    }

    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub fn key_algorithm(&self) -> ::std::option::Option<&crate::types::KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }

    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_key_usages()`](Self::has_key_usages) to tell an absent list from an empty one.
    pub fn key_usages(&self) -> &[crate::types::KeyUsageName] {
        self.key_usages.as_slice()
    }
    /// Returns true if `KeyUsages` was set, even to an empty list.
    pub fn has_key_usages(&self) -> bool {
        self.key_usages.is_set()
    }

    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_extended_key_usages()`](Self::has_extended_key_usages) to tell an absent list from an empty one.
    pub fn extended_key_usages(&self) -> &[crate::types::ExtendedKeyUsageName] {
        self.extended_key_usages.as_slice()
    }
    /// Returns true if `ExtendedKeyUsages` was set, even to an empty list.
    pub fn has_extended_key_usages(&self) -> bool {
        self.extended_key_usages.is_set()
    }

    /// <p>Indicates whether the certificate is currently in use by any Amazon Web Services resources.</p>
    pub fn in_use(&self) -> ::std::option::Option<bool> {
        self.in_use
    }

    /// <p>Indicates whether the certificate has been exported.</p>
    pub fn exported(&self) -> ::std::option::Option<bool> {
        self.exported
    }

    /// <p>Specifies whether the certificate is eligible for renewal.</p>
    pub fn renewal_eligibility(&self) -> ::std::option::Option<&crate::types::RenewalEligibility> {
        self.renewal_eligibility.as_ref()
    }

    /// <p>The time before which the certificate is not valid.</p>
    pub fn not_before(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.not_before
    }

    /// <p>The time after which the certificate is not valid.</p>
    pub fn not_after(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.not_after
    }

    /// <p>The time at which the certificate was requested.</p>
    pub fn created_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.created_at
    }

    /// <p>The time at which the certificate was issued.</p>
    pub fn issued_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.issued_at
    }

    /// <p>The date and time when the certificate was imported.</p>
    pub fn imported_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.imported_at
    }

    /// <p>The time at which the certificate was revoked.</p>
    pub fn revoked_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.revoked_at
    }
}
impl CertificateSummary {
    /// Creates a new builder-style object to manufacture [`CertificateSummary`].
    pub fn builder() -> crate::types::builders::CertificateSummaryBuilder {
        crate::types::builders::CertificateSummaryBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::CertificateSummaryBuilder {
        crate::types::builders::CertificateSummaryBuilder {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_name_summaries: self.subject_alternative_name_summaries.clone().into_option(),
            has_additional_subject_alternative_names: self.has_additional_subject_alternative_names.clone(),
            status: self.status.clone(),
            r#type: self.r#type.clone(),
            key_algorithm: self.key_algorithm.clone(),
            key_usages: self.key_usages.clone().into_option(),
            extended_key_usages: self.extended_key_usages.clone().into_option(),
            in_use: self.in_use.clone(),
            exported: self.exported.clone(),
            renewal_eligibility: self.renewal_eligibility.clone(),
            not_before: self.not_before.clone(),
            not_after: self.not_after.clone(),
            created_at: self.created_at.clone(),
            issued_at: self.issued_at.clone(),
            imported_at: self.imported_at.clone(),
            revoked_at: self.revoked_at.clone(),
        }
    }
}

/// A builder for [`CertificateSummary`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CertificateSummaryBuilder {
    pub(crate) certificate_arn: ::std::option::Option<String>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) subject_alternative_name_summaries: ::std::option::Option<::std::vec::Vec<String>>,
    pub(crate) has_additional_subject_alternative_names: ::std::option::Option<bool>,
    pub(crate) status: ::std::option::Option<crate::types::CertificateStatus>,
    pub(crate) r#type: ::std::option::Option<crate::types::CertificateType>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
    pub(crate) key_usages: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>>,
    pub(crate) extended_key_usages: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>>,
    pub(crate) in_use: ::std::option::Option<bool>,
    pub(crate) exported: ::std::option::Option<bool>,
    pub(crate) renewal_eligibility: ::std::option::Option<crate::types::RenewalEligibility>,
    pub(crate) not_before: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) not_after: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) created_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) issued_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) imported_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) revoked_at: ::std::option::Option<::smithy_types::DateTime>,
}
impl CertificateSummaryBuilder {
    /// <p>Amazon Resource Name (ARN) of the certificate.</p>
    pub fn certificate_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Amazon Resource Name (ARN) of the certificate.</p>
    pub fn set_certificate_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }
    /// <p>Amazon Resource Name (ARN) of the certificate.</p>
    pub fn get_certificate_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_arn
    }
    /// <p>Fully qualified domain name (FQDN), such as www.example.com or example.com, for the certificate.</p>
    pub fn domain_name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.domain_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Fully qualified domain name (FQDN), such as www.example.com or example.com, for the certificate.</p>
    pub fn set_domain_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.domain_name = input;
        self
    }
    /// <p>Fully qualified domain name (FQDN), such as www.example.com or example.com, for the certificate.</p>
    pub fn get_domain_name(&self) -> &::std::option::Option<String> {
        &self.domain_name
    }
    /// Appends an item to `subject_alternative_name_summaries`.
    ///
    /// To override the contents of this collection use [`set_subject_alternative_name_summaries`](Self::set_subject_alternative_name_summaries).
    ///
    /// <p>One or more domain names (subject alternative names) included in the certificate. This list contains the domain names that are bound to the public key that is contained in the certificate.</p>
    pub fn subject_alternative_name_summaries(mut self, input: impl ::std::convert::Into<String>) -> Self {
        let mut v = self.subject_alternative_name_summaries.unwrap_or_default();
        v.push(input.into());
        self.subject_alternative_name_summaries = ::std::option::Option::Some(v);
        self
    }
    /// <p>One or more domain names (subject alternative names) included in the certificate. This list contains the domain names that are bound to the public key that is contained in the certificate.</p>
    pub fn set_subject_alternative_name_summaries(mut self, input: ::std::option::Option<::std::vec::Vec<String>>) -> Self {
        self.subject_alternative_name_summaries = input;
        self
    }
    /// <p>One or more domain names (subject alternative names) included in the certificate. This list contains the domain names that are bound to the public key that is contained in the certificate.</p>
    pub fn get_subject_alternative_name_summaries(&self) -> &::std::option::Option<::std::vec::Vec<String>> {
        &self.subject_alternative_name_summaries
    }
    /// <p>When called by <code>ListCertificates</code>, indicates whether the full list of subject alternative names has been included in the response.</p>
    pub fn has_additional_subject_alternative_names(mut self, input: bool) -> Self {
        self.has_additional_subject_alternative_names = ::std::option::Option::Some(input);
        self
    }
    /// <p>When called by <code>ListCertificates</code>, indicates whether the full list of subject alternative names has been included in the response.</p>
    pub fn set_has_additional_subject_alternative_names(mut self, input: ::std::option::Option<bool>) -> Self {
        self.has_additional_subject_alternative_names = input;
        self
    }
    /// <p>When called by <code>ListCertificates</code>, indicates whether the full list of subject alternative names has been included in the response.</p>
    pub fn get_has_additional_subject_alternative_names(&self) -> &::std::option::Option<bool> {
        &self.has_additional_subject_alternative_names
    }
    /// <p>The status of the certificate.</p>
    pub fn status(mut self, input: crate::types::CertificateStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status of the certificate.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::CertificateStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The status of the certificate.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::CertificateStatus> {
        &self.status
    }
    /// <p>The source of the certificate. For certificates provided by ACM, this value is <code>AMAZON_ISSUED</code>. For certificates that you imported with <code>ImportCertificate</code>, this value is <code>IMPORTED</code>.</p>
    pub fn r#type(mut self, input: crate::types::CertificateType) -> Self {
        self.r#type = ::std::option::Option::Some(input);
        self
    }
    /// <p>The source of the certificate. For certificates provided by ACM, this value is <code>AMAZON_ISSUED</code>. For certificates that you imported with <code>ImportCertificate</code>, this value is <code>IMPORTED</code>.</p>
    pub fn set_type(mut self, input: ::std::option::Option<crate::types::CertificateType>) -> Self {
        self.r#type = input;
        self
    }
    /// <p>The source of the certificate. For certificates provided by ACM, this value is <code>AMAZON_ISSUED</code>. For certificates that you imported with <code>ImportCertificate</code>, this value is <code>IMPORTED</code>.</p>
    pub fn get_type(&self) -> &::std::option::Option<crate::types::CertificateType> {
        &self.r#type
    }
    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub fn key_algorithm(mut self, input: crate::types::KeyAlgorithm) -> Self {
        self.key_algorithm = ::std::option::Option::Some(input);
        self
    }
    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub fn set_key_algorithm(mut self, input: ::std::option::Option<crate::types::KeyAlgorithm>) -> Self {
        self.key_algorithm = input;
        self
    }
    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub fn get_key_algorithm(&self) -> &::std::option::Option<crate::types::KeyAlgorithm> {
        &self.key_algorithm
    }
    /// Appends an item to `key_usages`.
    ///
    /// To override the contents of this collection use [`set_key_usages`](Self::set_key_usages).
    ///
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn key_usages(mut self, input: crate::types::KeyUsageName) -> Self {
        let mut v = self.key_usages.unwrap_or_default();
        v.push(input);
        self.key_usages = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn set_key_usages(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>>) -> Self {
        self.key_usages = input;
        self
    }
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn get_key_usages(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>> {
        &self.key_usages
    }
    /// Appends an item to `extended_key_usages`.
    ///
    /// To override the contents of this collection use [`set_extended_key_usages`](Self::set_extended_key_usages).
    ///
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn extended_key_usages(mut self, input: crate::types::ExtendedKeyUsageName) -> Self {
        let mut v = self.extended_key_usages.unwrap_or_default();
        v.push(input);
        self.extended_key_usages = ::std::option::Option::Some(v);
        self
    }
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn set_extended_key_usages(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>>) -> Self {
        self.extended_key_usages = input;
        self
    }
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn get_extended_key_usages(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>> {
        &self.extended_key_usages
    }
    /// <p>Indicates whether the certificate is currently in use by any Amazon Web Services resources.</p>
    pub fn in_use(mut self, input: bool) -> Self {
        self.in_use = ::std::option::Option::Some(input);
        self
    }
    /// <p>Indicates whether the certificate is currently in use by any Amazon Web Services resources.</p>
    pub fn set_in_use(mut self, input: ::std::option::Option<bool>) -> Self {
        self.in_use = input;
        self
    }
    /// <p>Indicates whether the certificate is currently in use by any Amazon Web Services resources.</p>
    pub fn get_in_use(&self) -> &::std::option::Option<bool> {
        &self.in_use
    }
    /// <p>Indicates whether the certificate has been exported.</p>
    pub fn exported(mut self, input: bool) -> Self {
        self.exported = ::std::option::Option::Some(input);
        self
    }
    /// <p>Indicates whether the certificate has been exported.</p>
    pub fn set_exported(mut self, input: ::std::option::Option<bool>) -> Self {
        self.exported = input;
        self
    }
    /// <p>Indicates whether the certificate has been exported.</p>
    pub fn get_exported(&self) -> &::std::option::Option<bool> {
        &self.exported
    }
    /// <p>Specifies whether the certificate is eligible for renewal.</p>
    pub fn renewal_eligibility(mut self, input: crate::types::RenewalEligibility) -> Self {
        self.renewal_eligibility = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies whether the certificate is eligible for renewal.</p>
    pub fn set_renewal_eligibility(mut self, input: ::std::option::Option<crate::types::RenewalEligibility>) -> Self {
        self.renewal_eligibility = input;
        self
    }
    /// <p>Specifies whether the certificate is eligible for renewal.</p>
    pub fn get_renewal_eligibility(&self) -> &::std::option::Option<crate::types::RenewalEligibility> {
        &self.renewal_eligibility
    }
    /// <p>The time before which the certificate is not valid.</p>
    pub fn not_before(mut self, input: ::smithy_types::DateTime) -> Self {
        self.not_before = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time before which the certificate is not valid.</p>
    pub fn set_not_before(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.not_before = input;
        self
    }
    /// <p>The time before which the certificate is not valid.</p>
    pub fn get_not_before(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.not_before
    }
    /// <p>The time after which the certificate is not valid.</p>
    pub fn not_after(mut self, input: ::smithy_types::DateTime) -> Self {
        self.not_after = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time after which the certificate is not valid.</p>
    pub fn set_not_after(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.not_after = input;
        self
    }
    /// <p>The time after which the certificate is not valid.</p>
    pub fn get_not_after(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.not_after
    }
    /// <p>The time at which the certificate was requested.</p>
    pub fn created_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.created_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the certificate was requested.</p>
    pub fn set_created_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.created_at = input;
        self
    }
    /// <p>The time at which the certificate was requested.</p>
    pub fn get_created_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.created_at
    }
    /// <p>The time at which the certificate was issued.</p>
    pub fn issued_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.issued_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the certificate was issued.</p>
    pub fn set_issued_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.issued_at = input;
        self
    }
    /// <p>The time at which the certificate was issued.</p>
    pub fn get_issued_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.issued_at
    }
    /// <p>The date and time when the certificate was imported.</p>
    pub fn imported_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.imported_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the certificate was imported.</p>
    pub fn set_imported_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.imported_at = input;
        self
    }
    /// <p>The date and time when the certificate was imported.</p>
    pub fn get_imported_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.imported_at
    }
    /// <p>The time at which the certificate was revoked.</p>
    pub fn revoked_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.revoked_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the certificate was revoked.</p>
    pub fn set_revoked_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.revoked_at = input;
        self
    }
    /// <p>The time at which the certificate was revoked.</p>
    pub fn get_revoked_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.revoked_at
    }
    /// Constructs a [`CertificateSummary`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> CertificateSummary {
        CertificateSummary {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_name_summaries: self.subject_alternative_name_summaries.clone().into(),
            has_additional_subject_alternative_names: self.has_additional_subject_alternative_names.clone(),
            status: self.status.clone(),
            r#type: self.r#type.clone(),
            key_algorithm: self.key_algorithm.clone(),
            key_usages: self.key_usages.clone().into(),
            extended_key_usages: self.extended_key_usages.clone().into(),
            in_use: self.in_use.clone(),
            exported: self.exported.clone(),
            renewal_eligibility: self.renewal_eligibility.clone(),
            not_before: self.not_before.clone(),
            not_after: self.not_after.clone(),
            created_at: self.created_at.clone(),
            issued_at: self.issued_at.clone(),
            imported_at: self.imported_at.clone(),
            revoked_at: self.revoked_at.clone(),
        }
    }
}

pub(crate) static CERTIFICATE_SUMMARY_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "CertificateSummary"));

static CERTIFICATE_SUMMARY_FIELDS: &[SdkField<CertificateSummary>] = &[
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "CertificateArn"),
        MarshallingType::String,
        |input| input.certificate_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_arn(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "DomainName"),
        MarshallingType::String,
        |input| input.domain_name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_domain_name(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "SubjectAlternativeNameSummaries"),
        MarshallingType::List,
        |input| {
            input
                .subject_alternative_name_summaries
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_subject_alternative_name_summaries(Some(value.expect_list_of(FieldInput::expect_string)?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "HasAdditionalSubjectAlternativeNames"),
        MarshallingType::Boolean,
        |input| input.has_additional_subject_alternative_names.map(FieldValue::Boolean),
        |builder, value| Ok(builder.set_has_additional_subject_alternative_names(Some(value.expect_boolean()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "Status"),
        MarshallingType::String,
        |input| input.status.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_status(Some(crate::types::CertificateStatus::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "Type"),
        MarshallingType::String,
        |input| input.r#type.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_type(Some(crate::types::CertificateType::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "KeyAlgorithm"),
        MarshallingType::String,
        |input| input.key_algorithm.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_key_algorithm(Some(crate::types::KeyAlgorithm::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "KeyUsages"),
        MarshallingType::List,
        |input| {
            input
                .key_usages
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_key_usages(Some(value.expect_list_of(|item| Ok(crate::types::KeyUsageName::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "ExtendedKeyUsages"),
        MarshallingType::List,
        |input| {
            input
                .extended_key_usages
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_extended_key_usages(Some(value.expect_list_of(|item| Ok(crate::types::ExtendedKeyUsageName::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "InUse"),
        MarshallingType::Boolean,
        |input| input.in_use.map(FieldValue::Boolean),
        |builder, value| Ok(builder.set_in_use(Some(value.expect_boolean()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "Exported"),
        MarshallingType::Boolean,
        |input| input.exported.map(FieldValue::Boolean),
        |builder, value| Ok(builder.set_exported(Some(value.expect_boolean()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "RenewalEligibility"),
        MarshallingType::String,
        |input| input.renewal_eligibility.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_renewal_eligibility(Some(crate::types::RenewalEligibility::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "NotBefore"),
        MarshallingType::Instant,
        |input| input.not_before.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_not_before(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "NotAfter"),
        MarshallingType::Instant,
        |input| input.not_after.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_not_after(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "CreatedAt"),
        MarshallingType::Instant,
        |input| input.created_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_created_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "IssuedAt"),
        MarshallingType::Instant,
        |input| input.issued_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_issued_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "ImportedAt"),
        MarshallingType::Instant,
        |input| input.imported_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_imported_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateSummary>::new(
        shape_id!("com.amazonaws.acm", "CertificateSummary", "RevokedAt"),
        MarshallingType::Instant,
        |input| input.revoked_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_revoked_at(Some(value.expect_timestamp()?))),
    ),
];

impl SdkPojo for CertificateSummary {
    type Builder = crate::types::builders::CertificateSummaryBuilder;

    fn schema() -> &'static StructureSchema {
        &CERTIFICATE_SUMMARY_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        CERTIFICATE_SUMMARY_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
