/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldInput, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Contains metadata about an ACM certificate. This structure is returned in the response to a <code>DescribeCertificate</code> request.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CertificateDetail {
    pub(crate) certificate_arn: ::std::option::Option<String>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) subject_alternative_names: ::smithy_types::TrackedList<String>,
    pub(crate) domain_validation_options: ::smithy_types::TrackedList<crate::types::DomainValidation>,
    pub(crate) serial: ::std::option::Option<String>,
    pub(crate) subject: ::std::option::Option<String>,
    pub(crate) issuer: ::std::option::Option<String>,
    pub(crate) created_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) issued_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) imported_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) status: ::std::option::Option<crate::types::CertificateStatus>,
    pub(crate) revoked_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) revocation_reason: ::std::option::Option<crate::types::RevocationReason>,
    pub(crate) not_before: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) not_after: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
    pub(crate) signature_algorithm: ::std::option::Option<String>,
    pub(crate) in_use_by: ::smithy_types::TrackedList<String>,
    pub(crate) failure_reason: ::std::option::Option<crate::types::FailureReason>,
    pub(crate) r#type: ::std::option::Option<crate::types::CertificateType>,
    pub(crate) renewal_summary: ::std::option::Option<crate::types::RenewalSummary>,
    pub(crate) key_usages: ::smithy_types::TrackedList<crate::types::KeyUsage>,
    pub(crate) extended_key_usages: ::smithy_types::TrackedList<crate::types::ExtendedKeyUsage>,
    pub(crate) certificate_authority_arn: ::std::option::Option<String>,
    pub(crate) renewal_eligibility: ::std::option::Option<crate::types::RenewalEligibility>,
    pub(crate) options: ::std::option::Option<crate::types::CertificateOptions>,
}
impl CertificateDetail {
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    pub fn certificate_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// <p>The fully qualified domain name for the certificate, such as www.example.com or example.com.</p>
    pub fn domain_name(&self) -> ::std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// <p>One or more domain names (subject alternative names) included in the certificate.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_subject_alternative_names()`](Self::has_subject_alternative_names) to tell an absent list from an empty one.
    pub fn subject_alternative_names(&self) -> &[String] {
        self.subject_alternative_names.as_slice()
    }
    /// Returns true if `SubjectAlternativeNames` was set, even to an empty list.
    pub fn has_subject_alternative_names(&self) -> bool {
        self.subject_alternative_names.is_set()
    }

    /// <p>Contains information about the initial validation of each domain name that occurs as a result of the <code>RequestCertificate</code> request. This field exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_domain_validation_options()`](Self::has_domain_validation_options) to tell an absent list from an empty one.
    pub fn domain_validation_options(&self) -> &[crate::types::DomainValidation] {
        self.domain_validation_options.as_slice()
    }
    /// Returns true if `DomainValidationOptions` was set, even to an empty list.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_set()
    }

    /// <p>The serial number of the certificate.</p>
    pub fn serial(&self) -> ::std::option::Option<&str> {
        self.serial.as_deref()
    }

    /// <p>The name of the entity that is associated with the public key contained in the certificate.</p>
    pub fn subject(&self) -> ::std::option::Option<&str> {
        self.subject.as_deref()
    }

    /// <p>The name of the certificate authority that issued and signed the certificate.</p>
    pub fn issuer(&self) -> ::std::option::Option<&str> {
        self.issuer.as_deref()
    }

    /// <p>The time at which the certificate was requested.</p>
    pub fn created_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.created_at
    }

    /// <p>The time at which the certificate was issued. This value exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn issued_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.issued_at
    }

    /// <p>The date and time when the certificate was imported. This value exists only when the certificate type is <code>IMPORTED</code>.</p>
    pub fn imported_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.imported_at
    }

    /// <p>The status of the certificate.</p>
    /// <p>A certificate enters status PENDING_VALIDATION upon being requested. If the certificate fails validation, it enters status FAILED. If the validation process cannot be completed for the certificate, its status eventually becomes VALIDATION_TIMED_OUT.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::CertificateStatus> {
        self.status.as_ref()
    }

    /// <p>The time at which the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn revoked_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.revoked_at
    }

    /// <p>The reason the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn revocation_reason(&self) -> ::std::option::Option<&crate::types::RevocationReason> {
        self.revocation_reason.as_ref()
    }

    /// <p>The time before which the certificate is not valid.</p>
    pub fn not_before(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.not_before
    }

    /// <p>The time after which the certificate is not valid.</p>
    pub fn not_after(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.not_after
    }

    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub fn key_algorithm(&self) -> ::std::option::Option<&crate::types::KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }

    /// <p>The algorithm that was used to sign the certificate.</p>
    pub fn signature_algorithm(&self) -> ::std::option::Option<&str> {
        self.signature_algorithm.as_deref()
    }

    /// <p>A list of ARNs for the Amazon Web Services resources that are using the certificate. A certificate can be used by multiple Amazon Web Services resources.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_in_use_by()`](Self::has_in_use_by) to tell an absent list from an empty one.
    pub fn in_use_by(&self) -> &[String] {
        self.in_use_by.as_slice()
    }
    /// Returns true if `InUseBy` was set, even to an empty list.
    pub fn has_in_use_by(&self) -> bool {
        self.in_use_by.is_set()
    }

    /// <p>The reason the certificate request failed. This value exists only when the certificate status is <code>FAILED</code>.</p>
    pub fn failure_reason(&self) -> ::std::option::Option<&crate::types::FailureReason> {
        self.failure_reason.as_ref()
    }

    /// <p>The source of the certificate. For certificates provided by ACM, this value is <code>AMAZON_ISSUED</code>. For certificates that you imported with <code>ImportCertificate</code>, this value is <code>IMPORTED</code>.</p>
    pub fn r#type(&self) -> ::std::option::Option<&crate::types::CertificateType> {
        self.r#type.as_ref()
    }

    /// <p>Contains information about the status of ACM's managed renewal for the certificate.</p>
    pub fn renewal_summary(&self) -> ::std::option::Option<&crate::types::RenewalSummary> {
        self.renewal_summary.as_ref()
    }

    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_key_usages()`](Self::has_key_usages) to tell an absent list from an empty one.
    pub fn key_usages(&self) -> &[crate::types::KeyUsage] {
        self.key_usages.as_slice()
    }
    /// Returns true if `KeyUsages` was set, even to an empty list.
    pub fn has_key_usages(&self) -> bool {
        self.key_usages.is_set()
    }

    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_extended_key_usages()`](Self::has_extended_key_usages) to tell an absent list from an empty one.
    pub fn extended_key_usages(&self) -> &[crate::types::ExtendedKeyUsage] {
        self.extended_key_usages.as_slice()
    }
    /// Returns true if `ExtendedKeyUsages` was set, even to an empty list.
    pub fn has_extended_key_usages(&self) -> bool {
        self.extended_key_usages.is_set()
    }

    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that issued the certificate.</p>
    pub fn certificate_authority_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_authority_arn.as_deref()
    }

    /// <p>Specifies whether the certificate is eligible for renewal.</p>
    pub fn renewal_eligibility(&self) -> ::std::option::Option<&crate::types::RenewalEligibility> {
        self.renewal_eligibility.as_ref()
    }

    /// <p>Value that specifies whether to add the certificate to a transparency log.</p>
    pub fn options(&self) -> ::std::option::Option<&crate::types::CertificateOptions> {
        self.options.as_ref()
    }
}
impl CertificateDetail {
    /// Creates a new builder-style object to manufacture [`CertificateDetail`].
    pub fn builder() -> crate::types::builders::CertificateDetailBuilder {
        crate::types::builders::CertificateDetailBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::CertificateDetailBuilder {
        crate::types::builders::CertificateDetailBuilder {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_names: self.subject_alternative_names.clone().into_option(),
            domain_validation_options: self.domain_validation_options.clone().into_option(),
            serial: self.serial.clone(),
            subject: self.subject.clone(),
            issuer: self.issuer.clone(),
            created_at: self.created_at.clone(),
            issued_at: self.issued_at.clone(),
            imported_at: self.imported_at.clone(),
            status: self.status.clone(),
            revoked_at: self.revoked_at.clone(),
            revocation_reason: self.revocation_reason.clone(),
            not_before: self.not_before.clone(),
            not_after: self.not_after.clone(),
            key_algorithm: self.key_algorithm.clone(),
            signature_algorithm: self.signature_algorithm.clone(),
            in_use_by: self.in_use_by.clone().into_option(),
            failure_reason: self.failure_reason.clone(),
            r#type: self.r#type.clone(),
            renewal_summary: self.renewal_summary.clone(),
            key_usages: self.key_usages.clone().into_option(),
            extended_key_usages: self.extended_key_usages.clone().into_option(),
            certificate_authority_arn: self.certificate_authority_arn.clone(),
            renewal_eligibility: self.renewal_eligibility.clone(),
            options: self.options.clone(),
        }
    }
}

/// A builder for [`CertificateDetail`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CertificateDetailBuilder {
    pub(crate) certificate_arn: ::std::option::Option<String>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) subject_alternative_names: ::std::option::Option<::std::vec::Vec<String>>,
    pub(crate) domain_validation_options: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>>,
    pub(crate) serial: ::std::option::Option<String>,
    pub(crate) subject: ::std::option::Option<String>,
    pub(crate) issuer: ::std::option::Option<String>,
    pub(crate) created_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) issued_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) imported_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) status: ::std::option::Option<crate::types::CertificateStatus>,
    pub(crate) revoked_at: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) revocation_reason: ::std::option::Option<crate::types::RevocationReason>,
    pub(crate) not_before: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) not_after: ::std::option::Option<::smithy_types::DateTime>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
    pub(crate) signature_algorithm: ::std::option::Option<String>,
    pub(crate) in_use_by: ::std::option::Option<::std::vec::Vec<String>>,
    pub(crate) failure_reason: ::std::option::Option<crate::types::FailureReason>,
    pub(crate) r#type: ::std::option::Option<crate::types::CertificateType>,
    pub(crate) renewal_summary: ::std::option::Option<crate::types::RenewalSummary>,
    pub(crate) key_usages: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsage>>,
    pub(crate) extended_key_usages: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsage>>,
    pub(crate) certificate_authority_arn: ::std::option::Option<String>,
    pub(crate) renewal_eligibility: ::std::option::Option<crate::types::RenewalEligibility>,
    pub(crate) options: ::std::option::Option<crate::types::CertificateOptions>,
}
impl CertificateDetailBuilder {
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    pub fn certificate_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    pub fn set_certificate_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    pub fn get_certificate_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_arn
    }
    /// <p>The fully qualified domain name for the certificate, such as www.example.com or example.com.</p>
    pub fn domain_name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.domain_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The fully qualified domain name for the certificate, such as www.example.com or example.com.</p>
    pub fn set_domain_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.domain_name = input;
        self
    }
    /// <p>The fully qualified domain name for the certificate, such as www.example.com or example.com.</p>
    pub fn get_domain_name(&self) -> &::std::option::Option<String> {
        &self.domain_name
    }
    /// Appends an item to `subject_alternative_names`.
    ///
    /// To override the contents of this collection use [`set_subject_alternative_names`](Self::set_subject_alternative_names).
    ///
    /// <p>One or more domain names (subject alternative names) included in the certificate.</p>
    pub fn subject_alternative_names(mut self, input: impl ::std::convert::Into<String>) -> Self {
        let mut v = self.subject_alternative_names.unwrap_or_default();
        v.push(input.into());
        self.subject_alternative_names = ::std::option::Option::Some(v);
        self
    }
    /// <p>One or more domain names (subject alternative names) included in the certificate.</p>
    pub fn set_subject_alternative_names(mut self, input: ::std::option::Option<::std::vec::Vec<String>>) -> Self {
        self.subject_alternative_names = input;
        self
    }
    /// <p>One or more domain names (subject alternative names) included in the certificate.</p>
    pub fn get_subject_alternative_names(&self) -> &::std::option::Option<::std::vec::Vec<String>> {
        &self.subject_alternative_names
    }
    /// Appends an item to `domain_validation_options`.
    ///
    /// To override the contents of this collection use [`set_domain_validation_options`](Self::set_domain_validation_options).
    ///
    /// <p>Contains information about the initial validation of each domain name that occurs as a result of the <code>RequestCertificate</code> request. This field exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn domain_validation_options(mut self, input: crate::types::DomainValidation) -> Self {
        let mut v = self.domain_validation_options.unwrap_or_default();
        v.push(input);
        self.domain_validation_options = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `domain_validation_options`, produced by configuring a fresh [`DomainValidationBuilder`](crate::types::builders::DomainValidationBuilder).
    pub fn domain_validation_options_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::DomainValidationBuilder) -> crate::types::builders::DomainValidationBuilder,
    ) -> Self {
        let item = f(crate::types::DomainValidation::builder()).build();
        self.domain_validation_options(item)
    }
    /// <p>Contains information about the initial validation of each domain name that occurs as a result of the <code>RequestCertificate</code> request. This field exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn set_domain_validation_options(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>>) -> Self {
        self.domain_validation_options = input;
        self
    }
    /// <p>Contains information about the initial validation of each domain name that occurs as a result of the <code>RequestCertificate</code> request. This field exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn get_domain_validation_options(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>> {
        &self.domain_validation_options
    }
    /// <p>The serial number of the certificate.</p>
    pub fn serial(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.serial = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The serial number of the certificate.</p>
    pub fn set_serial(mut self, input: ::std::option::Option<String>) -> Self {
        self.serial = input;
        self
    }
    /// <p>The serial number of the certificate.</p>
    pub fn get_serial(&self) -> &::std::option::Option<String> {
        &self.serial
    }
    /// <p>The name of the entity that is associated with the public key contained in the certificate.</p>
    pub fn subject(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.subject = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the entity that is associated with the public key contained in the certificate.</p>
    pub fn set_subject(mut self, input: ::std::option::Option<String>) -> Self {
        self.subject = input;
        self
    }
    /// <p>The name of the entity that is associated with the public key contained in the certificate.</p>
    pub fn get_subject(&self) -> &::std::option::Option<String> {
        &self.subject
    }
    /// <p>The name of the certificate authority that issued and signed the certificate.</p>
    pub fn issuer(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.issuer = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the certificate authority that issued and signed the certificate.</p>
    pub fn set_issuer(mut self, input: ::std::option::Option<String>) -> Self {
        self.issuer = input;
        self
    }
    /// <p>The name of the certificate authority that issued and signed the certificate.</p>
    pub fn get_issuer(&self) -> &::std::option::Option<String> {
        &self.issuer
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
    /// <p>The time at which the certificate was issued. This value exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn issued_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.issued_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the certificate was issued. This value exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn set_issued_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.issued_at = input;
        self
    }
    /// <p>The time at which the certificate was issued. This value exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
    pub fn get_issued_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.issued_at
    }
    /// <p>The date and time when the certificate was imported. This value exists only when the certificate type is <code>IMPORTED</code>.</p>
    pub fn imported_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.imported_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the certificate was imported. This value exists only when the certificate type is <code>IMPORTED</code>.</p>
    pub fn set_imported_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.imported_at = input;
        self
    }
    /// <p>The date and time when the certificate was imported. This value exists only when the certificate type is <code>IMPORTED</code>.</p>
    pub fn get_imported_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.imported_at
    }
    /// <p>The status of the certificate.</p>
    /// <p>A certificate enters status PENDING_VALIDATION upon being requested. If the certificate fails validation, it enters status FAILED. If the validation process cannot be completed for the certificate, its status eventually becomes VALIDATION_TIMED_OUT.</p>
    pub fn status(mut self, input: crate::types::CertificateStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status of the certificate.</p>
    /// <p>A certificate enters status PENDING_VALIDATION upon being requested. If the certificate fails validation, it enters status FAILED. If the validation process cannot be completed for the certificate, its status eventually becomes VALIDATION_TIMED_OUT.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::CertificateStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The status of the certificate.</p>
    /// <p>A certificate enters status PENDING_VALIDATION upon being requested. If the certificate fails validation, it enters status FAILED. If the validation process cannot be completed for the certificate, its status eventually becomes VALIDATION_TIMED_OUT.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::CertificateStatus> {
        &self.status
    }
    /// <p>The time at which the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn revoked_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.revoked_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn set_revoked_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.revoked_at = input;
        self
    }
    /// <p>The time at which the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn get_revoked_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.revoked_at
    }
    /// <p>The reason the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn revocation_reason(mut self, input: crate::types::RevocationReason) -> Self {
        self.revocation_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The reason the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn set_revocation_reason(mut self, input: ::std::option::Option<crate::types::RevocationReason>) -> Self {
        self.revocation_reason = input;
        self
    }
    /// <p>The reason the certificate was revoked. This value exists only when the certificate status is <code>REVOKED</code>.</p>
    pub fn get_revocation_reason(&self) -> &::std::option::Option<crate::types::RevocationReason> {
        &self.revocation_reason
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
    /// <p>The algorithm that was used to sign the certificate.</p>
    pub fn signature_algorithm(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.signature_algorithm = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The algorithm that was used to sign the certificate.</p>
    pub fn set_signature_algorithm(mut self, input: ::std::option::Option<String>) -> Self {
        self.signature_algorithm = input;
        self
    }
    /// <p>The algorithm that was used to sign the certificate.</p>
    pub fn get_signature_algorithm(&self) -> &::std::option::Option<String> {
        &self.signature_algorithm
    }
    /// Appends an item to `in_use_by`.
    ///
    /// To override the contents of this collection use [`set_in_use_by`](Self::set_in_use_by).
    ///
    /// <p>A list of ARNs for the Amazon Web Services resources that are using the certificate. A certificate can be used by multiple Amazon Web Services resources.</p>
    pub fn in_use_by(mut self, input: impl ::std::convert::Into<String>) -> Self {
        let mut v = self.in_use_by.unwrap_or_default();
        v.push(input.into());
        self.in_use_by = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of ARNs for the Amazon Web Services resources that are using the certificate. A certificate can be used by multiple Amazon Web Services resources.</p>
    pub fn set_in_use_by(mut self, input: ::std::option::Option<::std::vec::Vec<String>>) -> Self {
        self.in_use_by = input;
        self
    }
    /// <p>A list of ARNs for the Amazon Web Services resources that are using the certificate. A certificate can be used by multiple Amazon Web Services resources.</p>
    pub fn get_in_use_by(&self) -> &::std::option::Option<::std::vec::Vec<String>> {
        &self.in_use_by
    }
    /// <p>The reason the certificate request failed. This value exists only when the certificate status is <code>FAILED</code>.</p>
    pub fn failure_reason(mut self, input: crate::types::FailureReason) -> Self {
        self.failure_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The reason the certificate request failed. This value exists only when the certificate status is <code>FAILED</code>.</p>
    pub fn set_failure_reason(mut self, input: ::std::option::Option<crate::types::FailureReason>) -> Self {
        self.failure_reason = input;
        self
    }
    /// <p>The reason the certificate request failed. This value exists only when the certificate status is <code>FAILED</code>.</p>
    pub fn get_failure_reason(&self) -> &::std::option::Option<crate::types::FailureReason> {
        &self.failure_reason
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
    /// <p>Contains information about the status of ACM's managed renewal for the certificate.</p>
    pub fn renewal_summary(mut self, input: crate::types::RenewalSummary) -> Self {
        self.renewal_summary = ::std::option::Option::Some(input);
        self
    }
    /// Sets `renewal_summary` to a value produced by configuring a fresh [`RenewalSummaryBuilder`](crate::types::builders::RenewalSummaryBuilder).
    pub fn renewal_summary_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::RenewalSummaryBuilder) -> crate::types::builders::RenewalSummaryBuilder,
    ) -> Self {
        let value = f(crate::types::RenewalSummary::builder()).build();
        self.renewal_summary(value)
    }
    /// <p>Contains information about the status of ACM's managed renewal for the certificate.</p>
    pub fn set_renewal_summary(mut self, input: ::std::option::Option<crate::types::RenewalSummary>) -> Self {
        self.renewal_summary = input;
        self
    }
    /// <p>Contains information about the status of ACM's managed renewal for the certificate.</p>
    pub fn get_renewal_summary(&self) -> &::std::option::Option<crate::types::RenewalSummary> {
        &self.renewal_summary
    }
    /// Appends an item to `key_usages`.
    ///
    /// To override the contents of this collection use [`set_key_usages`](Self::set_key_usages).
    ///
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn key_usages(mut self, input: crate::types::KeyUsage) -> Self {
        let mut v = self.key_usages.unwrap_or_default();
        v.push(input);
        self.key_usages = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `key_usages`, produced by configuring a fresh [`KeyUsageBuilder`](crate::types::builders::KeyUsageBuilder).
    pub fn key_usages_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::KeyUsageBuilder) -> crate::types::builders::KeyUsageBuilder,
    ) -> Self {
        let item = f(crate::types::KeyUsage::builder()).build();
        self.key_usages(item)
    }
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn set_key_usages(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsage>>) -> Self {
        self.key_usages = input;
        self
    }
    /// <p>A list of Key Usage X.509 v3 extension objects.</p>
    pub fn get_key_usages(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::KeyUsage>> {
        &self.key_usages
    }
    /// Appends an item to `extended_key_usages`.
    ///
    /// To override the contents of this collection use [`set_extended_key_usages`](Self::set_extended_key_usages).
    ///
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn extended_key_usages(mut self, input: crate::types::ExtendedKeyUsage) -> Self {
        let mut v = self.extended_key_usages.unwrap_or_default();
        v.push(input);
        self.extended_key_usages = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `extended_key_usages`, produced by configuring a fresh [`ExtendedKeyUsageBuilder`](crate::types::builders::ExtendedKeyUsageBuilder).
    pub fn extended_key_usages_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::ExtendedKeyUsageBuilder) -> crate::types::builders::ExtendedKeyUsageBuilder,
    ) -> Self {
        let item = f(crate::types::ExtendedKeyUsage::builder()).build();
        self.extended_key_usages(item)
    }
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn set_extended_key_usages(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsage>>) -> Self {
        self.extended_key_usages = input;
        self
    }
    /// <p>Contains a list of Extended Key Usage X.509 v3 extension objects.</p>
    pub fn get_extended_key_usages(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsage>> {
        &self.extended_key_usages
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that issued the certificate.</p>
    pub fn certificate_authority_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_authority_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that issued the certificate.</p>
    pub fn set_certificate_authority_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_authority_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that issued the certificate.</p>
    pub fn get_certificate_authority_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_authority_arn
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
    /// <p>Value that specifies whether to add the certificate to a transparency log.</p>
    pub fn options(mut self, input: crate::types::CertificateOptions) -> Self {
        self.options = ::std::option::Option::Some(input);
        self
    }
    /// Sets `options` to a value produced by configuring a fresh [`CertificateOptionsBuilder`](crate::types::builders::CertificateOptionsBuilder).
    pub fn options_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::CertificateOptionsBuilder) -> crate::types::builders::CertificateOptionsBuilder,
    ) -> Self {
        let value = f(crate::types::CertificateOptions::builder()).build();
        self.options(value)
    }
    /// <p>Value that specifies whether to add the certificate to a transparency log.</p>
    pub fn set_options(mut self, input: ::std::option::Option<crate::types::CertificateOptions>) -> Self {
        self.options = input;
        self
    }
    /// <p>Value that specifies whether to add the certificate to a transparency log.</p>
    pub fn get_options(&self) -> &::std::option::Option<crate::types::CertificateOptions> {
        &self.options
    }
    /// Constructs a [`CertificateDetail`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> CertificateDetail {
        CertificateDetail {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_names: self.subject_alternative_names.clone().into(),
            domain_validation_options: self.domain_validation_options.clone().into(),
            serial: self.serial.clone(),
            subject: self.subject.clone(),
            issuer: self.issuer.clone(),
            created_at: self.created_at.clone(),
            issued_at: self.issued_at.clone(),
            imported_at: self.imported_at.clone(),
            status: self.status.clone(),
            revoked_at: self.revoked_at.clone(),
            revocation_reason: self.revocation_reason.clone(),
            not_before: self.not_before.clone(),
            not_after: self.not_after.clone(),
            key_algorithm: self.key_algorithm.clone(),
            signature_algorithm: self.signature_algorithm.clone(),
            in_use_by: self.in_use_by.clone().into(),
            failure_reason: self.failure_reason.clone(),
            r#type: self.r#type.clone(),
            renewal_summary: self.renewal_summary.clone(),
            key_usages: self.key_usages.clone().into(),
            extended_key_usages: self.extended_key_usages.clone().into(),
            certificate_authority_arn: self.certificate_authority_arn.clone(),
            renewal_eligibility: self.renewal_eligibility.clone(),
            options: self.options.clone(),
        }
    }
}

pub(crate) static CERTIFICATE_DETAIL_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "CertificateDetail"));

static CERTIFICATE_DETAIL_FIELDS: &[SdkField<CertificateDetail>] = &[
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "CertificateArn"),
        MarshallingType::String,
        |input| input.certificate_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_arn(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "DomainName"),
        MarshallingType::String,
        |input| input.domain_name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_domain_name(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "SubjectAlternativeNames"),
        MarshallingType::List,
        |input| {
            input
                .subject_alternative_names
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_subject_alternative_names(Some(value.expect_list_of(FieldInput::expect_string)?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "DomainValidationOptions"),
        MarshallingType::List,
        |input| {
            input
                .domain_validation_options
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_domain_validation_options(Some(value.expect_list_of(crate::types::DomainValidation::from_input)?)))
        },
    )
    .with_element(&crate::types::_domain_validation::DOMAIN_VALIDATION_SCHEMA),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Serial"),
        MarshallingType::String,
        |input| input.serial.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_serial(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Subject"),
        MarshallingType::String,
        |input| input.subject.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_subject(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Issuer"),
        MarshallingType::String,
        |input| input.issuer.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_issuer(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "CreatedAt"),
        MarshallingType::Instant,
        |input| input.created_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_created_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "IssuedAt"),
        MarshallingType::Instant,
        |input| input.issued_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_issued_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "ImportedAt"),
        MarshallingType::Instant,
        |input| input.imported_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_imported_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Status"),
        MarshallingType::String,
        |input| input.status.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_status(Some(crate::types::CertificateStatus::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "RevokedAt"),
        MarshallingType::Instant,
        |input| input.revoked_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_revoked_at(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "RevocationReason"),
        MarshallingType::String,
        |input| input.revocation_reason.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_revocation_reason(Some(crate::types::RevocationReason::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "NotBefore"),
        MarshallingType::Instant,
        |input| input.not_before.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_not_before(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "NotAfter"),
        MarshallingType::Instant,
        |input| input.not_after.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_not_after(Some(value.expect_timestamp()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "KeyAlgorithm"),
        MarshallingType::String,
        |input| input.key_algorithm.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_key_algorithm(Some(crate::types::KeyAlgorithm::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "SignatureAlgorithm"),
        MarshallingType::String,
        |input| input.signature_algorithm.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_signature_algorithm(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "InUseBy"),
        MarshallingType::List,
        |input| {
            input
                .in_use_by
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_in_use_by(Some(value.expect_list_of(FieldInput::expect_string)?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "FailureReason"),
        MarshallingType::String,
        |input| input.failure_reason.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_failure_reason(Some(crate::types::FailureReason::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Type"),
        MarshallingType::String,
        |input| input.r#type.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_type(Some(crate::types::CertificateType::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "RenewalSummary"),
        MarshallingType::SdkPojo,
        |input| input.renewal_summary.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_renewal_summary(Some(crate::types::RenewalSummary::from_input(value)?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "KeyUsages"),
        MarshallingType::List,
        |input| {
            input
                .key_usages
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_key_usages(Some(value.expect_list_of(crate::types::KeyUsage::from_input)?)))
        },
    )
    .with_element(&crate::types::_key_usage::KEY_USAGE_SCHEMA),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "ExtendedKeyUsages"),
        MarshallingType::List,
        |input| {
            input
                .extended_key_usages
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_extended_key_usages(Some(value.expect_list_of(crate::types::ExtendedKeyUsage::from_input)?)))
        },
    )
    .with_element(&crate::types::_extended_key_usage::EXTENDED_KEY_USAGE_SCHEMA),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "CertificateAuthorityArn"),
        MarshallingType::String,
        |input| input.certificate_authority_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_authority_arn(Some(value.expect_string()?))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "RenewalEligibility"),
        MarshallingType::String,
        |input| input.renewal_eligibility.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_renewal_eligibility(Some(crate::types::RenewalEligibility::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<CertificateDetail>::new(
        shape_id!("com.amazonaws.acm", "CertificateDetail", "Options"),
        MarshallingType::SdkPojo,
        |input| input.options.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_options(Some(crate::types::CertificateOptions::from_input(value)?))),
    ),
];

impl SdkPojo for CertificateDetail {
    type Builder = crate::types::builders::CertificateDetailBuilder;

    fn schema() -> &'static StructureSchema {
        &CERTIFICATE_DETAIL_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        CERTIFICATE_DETAIL_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
