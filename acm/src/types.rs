/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data structures shared by the ACM operations.

pub use crate::types::_certificate_detail::CertificateDetail;
pub use crate::types::_certificate_options::CertificateOptions;
pub use crate::types::_certificate_status::CertificateStatus;
pub use crate::types::_certificate_summary::CertificateSummary;
pub use crate::types::_certificate_transparency_logging_preference::CertificateTransparencyLoggingPreference;
pub use crate::types::_certificate_type::CertificateType;
pub use crate::types::_domain_status::DomainStatus;
pub use crate::types::_domain_validation::DomainValidation;
pub use crate::types::_domain_validation_option::DomainValidationOption;
pub use crate::types::_extended_key_usage::ExtendedKeyUsage;
pub use crate::types::_extended_key_usage_name::ExtendedKeyUsageName;
pub use crate::types::_failure_reason::FailureReason;
pub use crate::types::_filters::Filters;
pub use crate::types::_key_algorithm::KeyAlgorithm;
pub use crate::types::_key_usage::KeyUsage;
pub use crate::types::_key_usage_name::KeyUsageName;
pub use crate::types::_record_type::RecordType;
pub use crate::types::_renewal_eligibility::RenewalEligibility;
pub use crate::types::_renewal_status::RenewalStatus;
pub use crate::types::_renewal_summary::RenewalSummary;
pub use crate::types::_resource_record::ResourceRecord;
pub use crate::types::_revocation_reason::RevocationReason;
pub use crate::types::_sort_by::SortBy;
pub use crate::types::_sort_order::SortOrder;
pub use crate::types::_tag::Tag;
pub use crate::types::_validation_method::ValidationMethod;

pub(crate) mod _certificate_detail;
pub(crate) mod _certificate_options;
pub(crate) mod _certificate_status;
pub(crate) mod _certificate_summary;
pub(crate) mod _certificate_transparency_logging_preference;
pub(crate) mod _certificate_type;
pub(crate) mod _domain_status;
pub(crate) mod _domain_validation;
pub(crate) mod _domain_validation_option;
pub(crate) mod _extended_key_usage;
pub(crate) mod _extended_key_usage_name;
pub(crate) mod _failure_reason;
pub(crate) mod _filters;
pub(crate) mod _key_algorithm;
pub(crate) mod _key_usage;
pub(crate) mod _key_usage_name;
pub(crate) mod _record_type;
pub(crate) mod _renewal_eligibility;
pub(crate) mod _renewal_status;
pub(crate) mod _renewal_summary;
pub(crate) mod _resource_record;
pub(crate) mod _revocation_reason;
pub(crate) mod _sort_by;
pub(crate) mod _sort_order;
pub(crate) mod _tag;
pub(crate) mod _validation_method;

/// Builders for the shared data structures.
pub mod builders {
    pub use crate::types::_certificate_detail::CertificateDetailBuilder;
    pub use crate::types::_certificate_options::CertificateOptionsBuilder;
    pub use crate::types::_certificate_summary::CertificateSummaryBuilder;
    pub use crate::types::_domain_validation::DomainValidationBuilder;
    pub use crate::types::_domain_validation_option::DomainValidationOptionBuilder;
    pub use crate::types::_extended_key_usage::ExtendedKeyUsageBuilder;
    pub use crate::types::_filters::FiltersBuilder;
    pub use crate::types::_key_usage::KeyUsageBuilder;
    pub use crate::types::_renewal_summary::RenewalSummaryBuilder;
    pub use crate::types::_resource_record::ResourceRecordBuilder;
    pub use crate::types::_tag::TagBuilder;
}
