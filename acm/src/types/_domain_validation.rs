/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldInput, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Contains information about the validation of each domain name in the certificate.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DomainValidation {
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_emails: ::smithy_types::TrackedList<String>,
    pub(crate) validation_domain: ::std::option::Option<String>,
    pub(crate) validation_status: ::std::option::Option<crate::types::DomainStatus>,
    pub(crate) resource_record: ::std::option::Option<crate::types::ResourceRecord>,
    pub(crate) validation_method: ::std::option::Option<crate::types::ValidationMethod>,
}
impl DomainValidation {
    /// <p>A fully qualified domain name (FQDN) in the certificate. For example, <code>www.example.com</code> or <code>example.com</code>.</p>
    pub fn domain_name(&self) -> ::std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// <p>A list of email addresses that ACM used to send domain validation emails.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_validation_emails()`](Self::has_validation_emails) to tell an absent list from an empty one.
    pub fn validation_emails(&self) -> &[String] {
        self.validation_emails.as_slice()
    }
    /// Returns true if `ValidationEmails` was set, even to an empty list.
    pub fn has_validation_emails(&self) -> bool {
        self.validation_emails.is_set()
    }

    /// <p>The domain name that ACM used to send domain validation emails.</p>
    pub fn validation_domain(&self) -> ::std::option::Option<&str> {
        self.validation_domain.as_deref()
    }

    /// <p>The validation status of the domain name.</p>
    pub fn validation_status(&self) -> ::std::option::Option<&crate::types::DomainStatus> {
        self.validation_status.as_ref()
    }

    /// <p>Contains the CNAME record that you add to your DNS database for domain validation.</p>
    pub fn resource_record(&self) -> ::std::option::Option<&crate::types::ResourceRecord> {
        self.resource_record.as_ref()
    }

    /// <p>Specifies the domain validation method.</p>
    pub fn validation_method(&self) -> ::std::option::Option<&crate::types::ValidationMethod> {
        self.validation_method.as_ref()
    }
}
impl DomainValidation {
    /// Creates a new builder-style object to manufacture [`DomainValidation`].
    pub fn builder() -> crate::types::builders::DomainValidationBuilder {
        crate::types::builders::DomainValidationBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::DomainValidationBuilder {
        crate::types::builders::DomainValidationBuilder {
            domain_name: self.domain_name.clone(),
            validation_emails: self.validation_emails.clone().into_option(),
            validation_domain: self.validation_domain.clone(),
            validation_status: self.validation_status.clone(),
            resource_record: self.resource_record.clone(),
            validation_method: self.validation_method.clone(),
        }
    }
}

/// A builder for [`DomainValidation`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DomainValidationBuilder {
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_emails: ::std::option::Option<::std::vec::Vec<String>>,
    pub(crate) validation_domain: ::std::option::Option<String>,
    pub(crate) validation_status: ::std::option::Option<crate::types::DomainStatus>,
    pub(crate) resource_record: ::std::option::Option<crate::types::ResourceRecord>,
    pub(crate) validation_method: ::std::option::Option<crate::types::ValidationMethod>,
}
impl DomainValidationBuilder {
    /// <p>A fully qualified domain name (FQDN) in the certificate. For example, <code>www.example.com</code> or <code>example.com</code>.</p>
    pub fn domain_name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.domain_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A fully qualified domain name (FQDN) in the certificate. For example, <code>www.example.com</code> or <code>example.com</code>.</p>
    pub fn set_domain_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.domain_name = input;
        self
    }
    /// <p>A fully qualified domain name (FQDN) in the certificate. For example, <code>www.example.com</code> or <code>example.com</code>.</p>
    pub fn get_domain_name(&self) -> &::std::option::Option<String> {
        &self.domain_name
    }
    /// Appends an item to `validation_emails`.
    ///
    /// To override the contents of this collection use [`set_validation_emails`](Self::set_validation_emails).
    ///
    /// <p>A list of email addresses that ACM used to send domain validation emails.</p>
    pub fn validation_emails(mut self, input: impl ::std::convert::Into<String>) -> Self {
        let mut v = self.validation_emails.unwrap_or_default();
        v.push(input.into());
        self.validation_emails = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of email addresses that ACM used to send domain validation emails.</p>
    pub fn set_validation_emails(mut self, input: ::std::option::Option<::std::vec::Vec<String>>) -> Self {
        self.validation_emails = input;
        self
    }
    /// <p>A list of email addresses that ACM used to send domain validation emails.</p>
    pub fn get_validation_emails(&self) -> &::std::option::Option<::std::vec::Vec<String>> {
        &self.validation_emails
    }
    /// <p>The domain name that ACM used to send domain validation emails.</p>
    pub fn validation_domain(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.validation_domain = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The domain name that ACM used to send domain validation emails.</p>
    pub fn set_validation_domain(mut self, input: ::std::option::Option<String>) -> Self {
        self.validation_domain = input;
        self
    }
    /// <p>The domain name that ACM used to send domain validation emails.</p>
    pub fn get_validation_domain(&self) -> &::std::option::Option<String> {
        &self.validation_domain
    }
    /// <p>The validation status of the domain name.</p>
    pub fn validation_status(mut self, input: crate::types::DomainStatus) -> Self {
        self.validation_status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The validation status of the domain name.</p>
    pub fn set_validation_status(mut self, input: ::std::option::Option<crate::types::DomainStatus>) -> Self {
        self.validation_status = input;
        self
    }
    /// <p>The validation status of the domain name.</p>
    pub fn get_validation_status(&self) -> &::std::option::Option<crate::types::DomainStatus> {
        &self.validation_status
    }
    /// <p>Contains the CNAME record that you add to your DNS database for domain validation.</p>
    pub fn resource_record(mut self, input: crate::types::ResourceRecord) -> Self {
        self.resource_record = ::std::option::Option::Some(input);
        self
    }
    /// Sets `resource_record` to a value produced by configuring a fresh [`ResourceRecordBuilder`](crate::types::builders::ResourceRecordBuilder).
    pub fn resource_record_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::ResourceRecordBuilder) -> crate::types::builders::ResourceRecordBuilder,
    ) -> Self {
        let value = f(crate::types::ResourceRecord::builder()).build();
        self.resource_record(value)
    }
    /// <p>Contains the CNAME record that you add to your DNS database for domain validation.</p>
    pub fn set_resource_record(mut self, input: ::std::option::Option<crate::types::ResourceRecord>) -> Self {
        self.resource_record = input;
        self
    }
    /// <p>Contains the CNAME record that you add to your DNS database for domain validation.</p>
    pub fn get_resource_record(&self) -> &::std::option::Option<crate::types::ResourceRecord> {
        &self.resource_record
    }
    /// <p>Specifies the domain validation method.</p>
    pub fn validation_method(mut self, input: crate::types::ValidationMethod) -> Self {
        self.validation_method = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the domain validation method.</p>
    pub fn set_validation_method(mut self, input: ::std::option::Option<crate::types::ValidationMethod>) -> Self {
        self.validation_method = input;
        self
    }
    /// <p>Specifies the domain validation method.</p>
    pub fn get_validation_method(&self) -> &::std::option::Option<crate::types::ValidationMethod> {
        &self.validation_method
    }
    /// Constructs a [`DomainValidation`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> DomainValidation {
        DomainValidation {
            domain_name: self.domain_name.clone(),
            validation_emails: self.validation_emails.clone().into(),
            validation_domain: self.validation_domain.clone(),
            validation_status: self.validation_status.clone(),
            resource_record: self.resource_record.clone(),
            validation_method: self.validation_method.clone(),
        }
    }
}

pub(crate) static DOMAIN_VALIDATION_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "DomainValidation"));

static DOMAIN_VALIDATION_FIELDS: &[SdkField<DomainValidation>] = &[
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "DomainName"),
        MarshallingType::String,
        |input| input.domain_name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_domain_name(Some(value.expect_string()?))),
    ),
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "ValidationEmails"),
        MarshallingType::List,
        |input| {
            input
                .validation_emails
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_validation_emails(Some(value.expect_list_of(FieldInput::expect_string)?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "ValidationDomain"),
        MarshallingType::String,
        |input| input.validation_domain.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_validation_domain(Some(value.expect_string()?))),
    ),
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "ValidationStatus"),
        MarshallingType::String,
        |input| input.validation_status.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_validation_status(Some(crate::types::DomainStatus::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "ResourceRecord"),
        MarshallingType::SdkPojo,
        |input| input.resource_record.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_resource_record(Some(crate::types::ResourceRecord::from_input(value)?))),
    ),
    SdkField::<DomainValidation>::new(
        shape_id!("com.amazonaws.acm", "DomainValidation", "ValidationMethod"),
        MarshallingType::String,
        |input| input.validation_method.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_validation_method(Some(crate::types::ValidationMethod::from(value.expect_string()?.as_str())))),
    ),
];

impl SdkPojo for DomainValidation {
    type Builder = crate::types::builders::DomainValidationBuilder;

    fn schema() -> &'static StructureSchema {
        &DOMAIN_VALIDATION_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        DOMAIN_VALIDATION_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
