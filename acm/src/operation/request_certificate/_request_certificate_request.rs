/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldInput, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::request::{AcmRequest, AcmRequestBuilder};

/// <p>Requests an ACM certificate for use with other Amazon Web Services services.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RequestCertificateRequest {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_method: ::std::option::Option<crate::types::ValidationMethod>,
    pub(crate) subject_alternative_names: ::smithy_types::TrackedList<String>,
    pub(crate) idempotency_token: ::std::option::Option<String>,
    pub(crate) domain_validation_options: ::smithy_types::TrackedList<crate::types::DomainValidationOption>,
    pub(crate) options: ::std::option::Option<crate::types::CertificateOptions>,
    pub(crate) certificate_authority_arn: ::std::option::Option<String>,
    pub(crate) tags: ::smithy_types::TrackedList<crate::types::Tag>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
}
impl RequestCertificateRequest {
    /// <p>Fully qualified domain name (FQDN), such as www.example.com, that you want to secure with an ACM certificate. Use an asterisk (*) to create a wildcard certificate that protects several sites in the same domain.</p>
    pub fn domain_name(&self) -> ::std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// <p>The method you want to use if you are requesting a public certificate to validate that you own or control domain.</p>
    pub fn validation_method(&self) -> ::std::option::Option<&crate::types::ValidationMethod> {
        self.validation_method.as_ref()
    }

    /// <p>Additional FQDNs to be included in the Subject Alternative Name extension of the ACM certificate.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_subject_alternative_names()`](Self::has_subject_alternative_names) to tell an absent list from an empty one.
    pub fn subject_alternative_names(&self) -> &[String] {
        self.subject_alternative_names.as_slice()
    }
    /// Returns true if `SubjectAlternativeNames` was set, even to an empty list.
    pub fn has_subject_alternative_names(&self) -> bool {
        self.subject_alternative_names.is_set()
    }

    /// <p>Customer chosen string that can be used to distinguish between calls to <code>RequestCertificate</code>. Idempotency tokens time out after one hour.</p>
    pub fn idempotency_token(&self) -> ::std::option::Option<&str> {
        self.idempotency_token.as_deref()
    }

    /// <p>The domain name that you want ACM to use to send you emails so that you can validate domain ownership.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_domain_validation_options()`](Self::has_domain_validation_options) to tell an absent list from an empty one.
    pub fn domain_validation_options(&self) -> &[crate::types::DomainValidationOption] {
        self.domain_validation_options.as_slice()
    }
    /// Returns true if `DomainValidationOptions` was set, even to an empty list.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_set()
    }

    /// <p>Currently, you can use this parameter to specify whether to add the certificate to a certificate transparency log.</p>
    pub fn options(&self) -> ::std::option::Option<&crate::types::CertificateOptions> {
        self.options.as_ref()
    }

    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that will be used to issue the certificate.</p>
    pub fn certificate_authority_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_authority_arn.as_deref()
    }

    /// <p>One or more resource tags to associate with the certificate.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_tags()`](Self::has_tags) to tell an absent list from an empty one.
    pub fn tags(&self) -> &[crate::types::Tag] {
        self.tags.as_slice()
    }
    /// Returns true if `Tags` was set, even to an empty list.
    pub fn has_tags(&self) -> bool {
        self.tags.is_set()
    }

    /// <p>Specifies the algorithm of the public and private key pair that your certificate uses to encrypt data.</p>
    pub fn key_algorithm(&self) -> ::std::option::Option<&crate::types::KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }
}
impl RequestCertificateRequest {
    /// Creates a new builder-style object to manufacture [`RequestCertificateRequest`].
    pub fn builder() -> crate::operation::request_certificate::builders::RequestCertificateRequestBuilder {
        crate::operation::request_certificate::builders::RequestCertificateRequestBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::request_certificate::builders::RequestCertificateRequestBuilder {
        crate::operation::request_certificate::builders::RequestCertificateRequestBuilder {
            override_configuration: self.override_configuration.clone(),
            domain_name: self.domain_name.clone(),
            validation_method: self.validation_method.clone(),
            subject_alternative_names: self.subject_alternative_names.clone().into_option(),
            idempotency_token: self.idempotency_token.clone(),
            domain_validation_options: self.domain_validation_options.clone().into_option(),
            options: self.options.clone(),
            certificate_authority_arn: self.certificate_authority_arn.clone(),
            tags: self.tags.clone().into_option(),
            key_algorithm: self.key_algorithm.clone(),
        }
    }
}

/// A builder for [`RequestCertificateRequest`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct RequestCertificateRequestBuilder {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) domain_name: ::std::option::Option<String>,
    pub(crate) validation_method: ::std::option::Option<crate::types::ValidationMethod>,
    pub(crate) subject_alternative_names: ::std::option::Option<::std::vec::Vec<String>>,
    pub(crate) idempotency_token: ::std::option::Option<String>,
    pub(crate) domain_validation_options: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidationOption>>,
    pub(crate) options: ::std::option::Option<crate::types::CertificateOptions>,
    pub(crate) certificate_authority_arn: ::std::option::Option<String>,
    pub(crate) tags: ::std::option::Option<::std::vec::Vec<crate::types::Tag>>,
    pub(crate) key_algorithm: ::std::option::Option<crate::types::KeyAlgorithm>,
}
impl RequestCertificateRequestBuilder {
    /// <p>Fully qualified domain name (FQDN), such as www.example.com, that you want to secure with an ACM certificate. Use an asterisk (*) to create a wildcard certificate that protects several sites in the same domain.</p>
    pub fn domain_name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.domain_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Fully qualified domain name (FQDN), such as www.example.com, that you want to secure with an ACM certificate. Use an asterisk (*) to create a wildcard certificate that protects several sites in the same domain.</p>
    pub fn set_domain_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.domain_name = input;
        self
    }
    /// <p>Fully qualified domain name (FQDN), such as www.example.com, that you want to secure with an ACM certificate. Use an asterisk (*) to create a wildcard certificate that protects several sites in the same domain.</p>
    pub fn get_domain_name(&self) -> &::std::option::Option<String> {
        &self.domain_name
    }
    /// <p>The method you want to use if you are requesting a public certificate to validate that you own or control domain.</p>
    pub fn validation_method(mut self, input: crate::types::ValidationMethod) -> Self {
        self.validation_method = ::std::option::Option::Some(input);
        self
    }
    /// <p>The method you want to use if you are requesting a public certificate to validate that you own or control domain.</p>
    pub fn set_validation_method(mut self, input: ::std::option::Option<crate::types::ValidationMethod>) -> Self {
        self.validation_method = input;
        self
    }
    /// <p>The method you want to use if you are requesting a public certificate to validate that you own or control domain.</p>
    pub fn get_validation_method(&self) -> &::std::option::Option<crate::types::ValidationMethod> {
        &self.validation_method
    }
    /// Appends an item to `subject_alternative_names`.
    ///
    /// To override the contents of this collection use [`set_subject_alternative_names`](Self::set_subject_alternative_names).
    ///
    /// <p>Additional FQDNs to be included in the Subject Alternative Name extension of the ACM certificate.</p>
    pub fn subject_alternative_names(mut self, input: impl ::std::convert::Into<String>) -> Self {
        let mut v = self.subject_alternative_names.unwrap_or_default();
        v.push(input.into());
        self.subject_alternative_names = ::std::option::Option::Some(v);
        self
    }
    /// <p>Additional FQDNs to be included in the Subject Alternative Name extension of the ACM certificate.</p>
    pub fn set_subject_alternative_names(mut self, input: ::std::option::Option<::std::vec::Vec<String>>) -> Self {
        self.subject_alternative_names = input;
        self
    }
    /// <p>Additional FQDNs to be included in the Subject Alternative Name extension of the ACM certificate.</p>
    pub fn get_subject_alternative_names(&self) -> &::std::option::Option<::std::vec::Vec<String>> {
        &self.subject_alternative_names
    }
    /// <p>Customer chosen string that can be used to distinguish between calls to <code>RequestCertificate</code>. Idempotency tokens time out after one hour.</p>
    pub fn idempotency_token(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.idempotency_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Customer chosen string that can be used to distinguish between calls to <code>RequestCertificate</code>. Idempotency tokens time out after one hour.</p>
    pub fn set_idempotency_token(mut self, input: ::std::option::Option<String>) -> Self {
        self.idempotency_token = input;
        self
    }
    /// <p>Customer chosen string that can be used to distinguish between calls to <code>RequestCertificate</code>. Idempotency tokens time out after one hour.</p>
    pub fn get_idempotency_token(&self) -> &::std::option::Option<String> {
        &self.idempotency_token
    }
    /// Appends an item to `domain_validation_options`.
    ///
    /// To override the contents of this collection use [`set_domain_validation_options`](Self::set_domain_validation_options).
    ///
    /// <p>The domain name that you want ACM to use to send you emails so that you can validate domain ownership.</p>
    pub fn domain_validation_options(mut self, input: crate::types::DomainValidationOption) -> Self {
        let mut v = self.domain_validation_options.unwrap_or_default();
        v.push(input);
        self.domain_validation_options = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `domain_validation_options`, produced by configuring a fresh [`DomainValidationOptionBuilder`](crate::types::builders::DomainValidationOptionBuilder).
    pub fn domain_validation_options_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::DomainValidationOptionBuilder) -> crate::types::builders::DomainValidationOptionBuilder,
    ) -> Self {
        let item = f(crate::types::DomainValidationOption::builder()).build();
        self.domain_validation_options(item)
    }
    /// <p>The domain name that you want ACM to use to send you emails so that you can validate domain ownership.</p>
    pub fn set_domain_validation_options(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::DomainValidationOption>>) -> Self {
        self.domain_validation_options = input;
        self
    }
    /// <p>The domain name that you want ACM to use to send you emails so that you can validate domain ownership.</p>
    pub fn get_domain_validation_options(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::DomainValidationOption>> {
        &self.domain_validation_options
    }
    /// <p>Currently, you can use this parameter to specify whether to add the certificate to a certificate transparency log.</p>
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
    /// <p>Currently, you can use this parameter to specify whether to add the certificate to a certificate transparency log.</p>
    pub fn set_options(mut self, input: ::std::option::Option<crate::types::CertificateOptions>) -> Self {
        self.options = input;
        self
    }
    /// <p>Currently, you can use this parameter to specify whether to add the certificate to a certificate transparency log.</p>
    pub fn get_options(&self) -> &::std::option::Option<crate::types::CertificateOptions> {
        &self.options
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that will be used to issue the certificate.</p>
    pub fn certificate_authority_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_authority_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that will be used to issue the certificate.</p>
    pub fn set_certificate_authority_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_authority_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the private certificate authority (CA) that will be used to issue the certificate.</p>
    pub fn get_certificate_authority_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_authority_arn
    }
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// <p>One or more resource tags to associate with the certificate.</p>
    pub fn tags(mut self, input: crate::types::Tag) -> Self {
        let mut v = self.tags.unwrap_or_default();
        v.push(input);
        self.tags = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `tags`, produced by configuring a fresh [`TagBuilder`](crate::types::builders::TagBuilder).
    pub fn tags_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::TagBuilder) -> crate::types::builders::TagBuilder,
    ) -> Self {
        let item = f(crate::types::Tag::builder()).build();
        self.tags(item)
    }
    /// <p>One or more resource tags to associate with the certificate.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Tag>>) -> Self {
        self.tags = input;
        self
    }
    /// <p>One or more resource tags to associate with the certificate.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Tag>> {
        &self.tags
    }
    /// <p>Specifies the algorithm of the public and private key pair that your certificate uses to encrypt data.</p>
    pub fn key_algorithm(mut self, input: crate::types::KeyAlgorithm) -> Self {
        self.key_algorithm = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the algorithm of the public and private key pair that your certificate uses to encrypt data.</p>
    pub fn set_key_algorithm(mut self, input: ::std::option::Option<crate::types::KeyAlgorithm>) -> Self {
        self.key_algorithm = input;
        self
    }
    /// <p>Specifies the algorithm of the public and private key pair that your certificate uses to encrypt data.</p>
    pub fn get_key_algorithm(&self) -> &::std::option::Option<crate::types::KeyAlgorithm> {
        &self.key_algorithm
    }
    /// Constructs a [`RequestCertificateRequest`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> RequestCertificateRequest {
        RequestCertificateRequest {
            override_configuration: self.override_configuration.clone(),
            domain_name: self.domain_name.clone(),
            validation_method: self.validation_method.clone(),
            subject_alternative_names: self.subject_alternative_names.clone().into(),
            idempotency_token: self.idempotency_token.clone(),
            domain_validation_options: self.domain_validation_options.clone().into(),
            options: self.options.clone(),
            certificate_authority_arn: self.certificate_authority_arn.clone(),
            tags: self.tags.clone().into(),
            key_algorithm: self.key_algorithm.clone(),
        }
    }
}

impl AcmRequest for RequestCertificateRequest {
    fn override_configuration(&self) -> ::std::option::Option<&::aws_types::RequestOverrideConfiguration> {
        self.override_configuration.as_ref()
    }
}

impl AcmRequestBuilder for RequestCertificateRequestBuilder {
    fn set_override_configuration(
        mut self,
        input: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    ) -> Self {
        self.override_configuration = input;
        self
    }

    fn get_override_configuration(&self) -> &::std::option::Option<::aws_types::RequestOverrideConfiguration> {
        &self.override_configuration
    }
}

pub(crate) static REQUEST_CERTIFICATE_REQUEST_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "RequestCertificateRequest"));

static REQUEST_CERTIFICATE_REQUEST_FIELDS: &[SdkField<RequestCertificateRequest>] = &[
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "DomainName"),
        MarshallingType::String,
        |input| input.domain_name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_domain_name(Some(value.expect_string()?))),
    ),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "ValidationMethod"),
        MarshallingType::String,
        |input| input.validation_method.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_validation_method(Some(crate::types::ValidationMethod::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "SubjectAlternativeNames"),
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
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "IdempotencyToken"),
        MarshallingType::String,
        |input| input.idempotency_token.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_idempotency_token(Some(value.expect_string()?))),
    ),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "DomainValidationOptions"),
        MarshallingType::List,
        |input| {
            input
                .domain_validation_options
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_domain_validation_options(Some(value.expect_list_of(crate::types::DomainValidationOption::from_input)?)))
        },
    )
    .with_element(&crate::types::_domain_validation_option::DOMAIN_VALIDATION_OPTION_SCHEMA),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "Options"),
        MarshallingType::SdkPojo,
        |input| input.options.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_options(Some(crate::types::CertificateOptions::from_input(value)?))),
    ),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "CertificateAuthorityArn"),
        MarshallingType::String,
        |input| input.certificate_authority_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_authority_arn(Some(value.expect_string()?))),
    ),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "Tags"),
        MarshallingType::List,
        |input| {
            input
                .tags
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_tags(Some(value.expect_list_of(crate::types::Tag::from_input)?)))
        },
    )
    .with_element(&crate::types::_tag::TAG_SCHEMA),
    SdkField::<RequestCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateRequest", "KeyAlgorithm"),
        MarshallingType::String,
        |input| input.key_algorithm.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_key_algorithm(Some(crate::types::KeyAlgorithm::from(value.expect_string()?.as_str())))),
    ),
];

impl SdkPojo for RequestCertificateRequest {
    type Builder = crate::operation::request_certificate::builders::RequestCertificateRequestBuilder;

    fn schema() -> &'static StructureSchema {
        &REQUEST_CERTIFICATE_REQUEST_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        REQUEST_CERTIFICATE_REQUEST_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
