/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Contains information about the status of ACM's managed renewal for the certificate. This structure exists only when the certificate type is <code>AMAZON_ISSUED</code>.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RenewalSummary {
    pub(crate) renewal_status: ::std::option::Option<crate::types::RenewalStatus>,
    pub(crate) domain_validation_options: ::smithy_types::TrackedList<crate::types::DomainValidation>,
    pub(crate) renewal_status_reason: ::std::option::Option<crate::types::FailureReason>,
    pub(crate) updated_at: ::std::option::Option<::smithy_types::DateTime>,
}
impl RenewalSummary {
    /// <p>The status of ACM's managed renewal of the certificate.</p>
    pub fn renewal_status(&self) -> ::std::option::Option<&crate::types::RenewalStatus> {
        self.renewal_status.as_ref()
    }

    /// <p>Contains information about the validation of each domain name in the certificate, as it pertains to ACM's managed renewal.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_domain_validation_options()`](Self::has_domain_validation_options) to tell an absent list from an empty one.
    pub fn domain_validation_options(&self) -> &[crate::types::DomainValidation] {
        self.domain_validation_options.as_slice()
    }
    /// Returns true if `DomainValidationOptions` was set, even to an empty list.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_set()
    }

    /// <p>The reason that a renewal request was unsuccessful.</p>
    pub fn renewal_status_reason(&self) -> ::std::option::Option<&crate::types::FailureReason> {
        self.renewal_status_reason.as_ref()
    }

    /// <p>The time at which the renewal summary was last updated.</p>
    pub fn updated_at(&self) -> ::std::option::Option<::smithy_types::DateTime> {
        self.updated_at
    }
}
impl RenewalSummary {
    /// Creates a new builder-style object to manufacture [`RenewalSummary`].
    pub fn builder() -> crate::types::builders::RenewalSummaryBuilder {
        crate::types::builders::RenewalSummaryBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::RenewalSummaryBuilder {
        crate::types::builders::RenewalSummaryBuilder {
            renewal_status: self.renewal_status.clone(),
            domain_validation_options: self.domain_validation_options.clone().into_option(),
            renewal_status_reason: self.renewal_status_reason.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// A builder for [`RenewalSummary`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct RenewalSummaryBuilder {
    pub(crate) renewal_status: ::std::option::Option<crate::types::RenewalStatus>,
    pub(crate) domain_validation_options: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>>,
    pub(crate) renewal_status_reason: ::std::option::Option<crate::types::FailureReason>,
    pub(crate) updated_at: ::std::option::Option<::smithy_types::DateTime>,
}
impl RenewalSummaryBuilder {
    /// <p>The status of ACM's managed renewal of the certificate.</p>
    pub fn renewal_status(mut self, input: crate::types::RenewalStatus) -> Self {
        self.renewal_status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status of ACM's managed renewal of the certificate.</p>
    pub fn set_renewal_status(mut self, input: ::std::option::Option<crate::types::RenewalStatus>) -> Self {
        self.renewal_status = input;
        self
    }
    /// <p>The status of ACM's managed renewal of the certificate.</p>
    pub fn get_renewal_status(&self) -> &::std::option::Option<crate::types::RenewalStatus> {
        &self.renewal_status
    }
    /// Appends an item to `domain_validation_options`.
    ///
    /// To override the contents of this collection use [`set_domain_validation_options`](Self::set_domain_validation_options).
    ///
    /// <p>Contains information about the validation of each domain name in the certificate, as it pertains to ACM's managed renewal.</p>
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
    /// <p>Contains information about the validation of each domain name in the certificate, as it pertains to ACM's managed renewal.</p>
    pub fn set_domain_validation_options(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>>) -> Self {
        self.domain_validation_options = input;
        self
    }
    /// <p>Contains information about the validation of each domain name in the certificate, as it pertains to ACM's managed renewal.</p>
    pub fn get_domain_validation_options(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::DomainValidation>> {
        &self.domain_validation_options
    }
    /// <p>The reason that a renewal request was unsuccessful.</p>
    pub fn renewal_status_reason(mut self, input: crate::types::FailureReason) -> Self {
        self.renewal_status_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The reason that a renewal request was unsuccessful.</p>
    pub fn set_renewal_status_reason(mut self, input: ::std::option::Option<crate::types::FailureReason>) -> Self {
        self.renewal_status_reason = input;
        self
    }
    /// <p>The reason that a renewal request was unsuccessful.</p>
    pub fn get_renewal_status_reason(&self) -> &::std::option::Option<crate::types::FailureReason> {
        &self.renewal_status_reason
    }
    /// <p>The time at which the renewal summary was last updated.</p>
    pub fn updated_at(mut self, input: ::smithy_types::DateTime) -> Self {
        self.updated_at = ::std::option::Option::Some(input);
        self
    }
    /// <p>The time at which the renewal summary was last updated.</p>
    pub fn set_updated_at(mut self, input: ::std::option::Option<::smithy_types::DateTime>) -> Self {
        self.updated_at = input;
        self
    }
    /// <p>The time at which the renewal summary was last updated.</p>
    pub fn get_updated_at(&self) -> &::std::option::Option<::smithy_types::DateTime> {
        &self.updated_at
    }
    /// Constructs a [`RenewalSummary`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> RenewalSummary {
        RenewalSummary {
            renewal_status: self.renewal_status.clone(),
            domain_validation_options: self.domain_validation_options.clone().into(),
            renewal_status_reason: self.renewal_status_reason.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

pub(crate) static RENEWAL_SUMMARY_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "RenewalSummary"));

static RENEWAL_SUMMARY_FIELDS: &[SdkField<RenewalSummary>] = &[
    SdkField::<RenewalSummary>::new(
        shape_id!("com.amazonaws.acm", "RenewalSummary", "RenewalStatus"),
        MarshallingType::String,
        |input| input.renewal_status.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_renewal_status(Some(crate::types::RenewalStatus::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<RenewalSummary>::new(
        shape_id!("com.amazonaws.acm", "RenewalSummary", "DomainValidationOptions"),
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
    SdkField::<RenewalSummary>::new(
        shape_id!("com.amazonaws.acm", "RenewalSummary", "RenewalStatusReason"),
        MarshallingType::String,
        |input| input.renewal_status_reason.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_renewal_status_reason(Some(crate::types::FailureReason::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<RenewalSummary>::new(
        shape_id!("com.amazonaws.acm", "RenewalSummary", "UpdatedAt"),
        MarshallingType::Instant,
        |input| input.updated_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.set_updated_at(Some(value.expect_timestamp()?))),
    ),
];

impl SdkPojo for RenewalSummary {
    type Builder = crate::types::builders::RenewalSummaryBuilder;

    fn schema() -> &'static StructureSchema {
        &RENEWAL_SUMMARY_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        RENEWAL_SUMMARY_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
