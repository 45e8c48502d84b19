/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Contains information about the domain names that you want ACM to use to send you emails that enable you to validate domain ownership.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DomainValidationOption {
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_domain: ::std::option::Option<String>,
}
impl DomainValidationOption {
    /// <p>A fully qualified domain name (FQDN) in the certificate request.</p>
    pub fn domain_name(&self) -> ::std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// <p>The domain name that you want ACM to use to send you validation emails. This domain name is the suffix of the email addresses that you want ACM to use.</p>
    pub fn validation_domain(&self) -> ::std::option::Option<&str> {
        self.validation_domain.as_deref()
    }
}
impl DomainValidationOption {
    /// Creates a new builder-style object to manufacture [`DomainValidationOption`].
    pub fn builder() -> crate::types::builders::DomainValidationOptionBuilder {
        crate::types::builders::DomainValidationOptionBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::DomainValidationOptionBuilder {
        crate::types::builders::DomainValidationOptionBuilder {
            domain_name: self.domain_name.clone(),
            validation_domain: self.validation_domain.clone(),
        }
    }
}

/// A builder for [`DomainValidationOption`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DomainValidationOptionBuilder {
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_domain: ::std::option::Option<String>,
}
impl DomainValidationOptionBuilder {
    /// <p>A fully qualified domain name (FQDN) in the certificate request.</p>
    pub fn domain_name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.domain_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A fully qualified domain name (FQDN) in the certificate request.</p>
    pub fn set_domain_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.domain_name = input;
        self
    }
    /// <p>A fully qualified domain name (FQDN) in the certificate request.</p>
    pub fn get_domain_name(&self) -> &::std::option::Option<String> {
        &self.domain_name
    }
    /// <p>The domain name that you want ACM to use to send you validation emails. This domain name is the suffix of the email addresses that you want ACM to use.</p>
    pub fn validation_domain(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.validation_domain = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The domain name that you want ACM to use to send you validation emails. This domain name is the suffix of the email addresses that you want ACM to use.</p>
    pub fn set_validation_domain(mut self, input: ::std::option::Option<String>) -> Self {
        self.validation_domain = input;
        self
    }
    /// <p>The domain name that you want ACM to use to send you validation emails. This domain name is the suffix of the email addresses that you want ACM to use.</p>
    pub fn get_validation_domain(&self) -> &::std::option::Option<String> {
        &self.validation_domain
    }
    /// Constructs a [`DomainValidationOption`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> DomainValidationOption {
        DomainValidationOption {
            domain_name: self.domain_name.clone(),
            validation_domain: self.validation_domain.clone(),
        }
    }
}

pub(crate) static DOMAIN_VALIDATION_OPTION_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "DomainValidationOption"));

static DOMAIN_VALIDATION_OPTION_FIELDS: &[SdkField<DomainValidationOption>] = &[
    SdkField::<DomainValidationOption>::new(
        shape_id!("com.amazonaws.acm", "DomainValidationOption", "DomainName"),
        MarshallingType::String,
        |input| input.domain_name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_domain_name(Some(value.expect_string()?))),
    ),
    SdkField::<DomainValidationOption>::new(
        shape_id!("com.amazonaws.acm", "DomainValidationOption", "ValidationDomain"),
        MarshallingType::String,
        |input| input.validation_domain.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_validation_domain(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for DomainValidationOption {
    type Builder = crate::types::builders::DomainValidationOptionBuilder;

    fn schema() -> &'static StructureSchema {
        &DOMAIN_VALIDATION_OPTION_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        DOMAIN_VALIDATION_OPTION_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
