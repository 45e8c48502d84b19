/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::request::{AcmRequest, AcmRequestBuilder};

/// <p>Returns detailed metadata about the specified ACM certificate.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DescribeCertificateRequest {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) certificate_arn: ::std::option::Option<String>,
}
impl DescribeCertificateRequest {
    /// <p>The Amazon Resource Name (ARN) of the ACM certificate.</p>
    pub fn certificate_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_arn.as_deref()
    }
}
impl DescribeCertificateRequest {
    /// Creates a new builder-style object to manufacture [`DescribeCertificateRequest`].
    pub fn builder() -> crate::operation::describe_certificate::builders::DescribeCertificateRequestBuilder {
        crate::operation::describe_certificate::builders::DescribeCertificateRequestBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::describe_certificate::builders::DescribeCertificateRequestBuilder {
        crate::operation::describe_certificate::builders::DescribeCertificateRequestBuilder {
            override_configuration: self.override_configuration.clone(),
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

/// A builder for [`DescribeCertificateRequest`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DescribeCertificateRequestBuilder {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) certificate_arn: ::std::option::Option<String>,
}
impl DescribeCertificateRequestBuilder {
    /// <p>The Amazon Resource Name (ARN) of the ACM certificate.</p>
    pub fn certificate_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the ACM certificate.</p>
    pub fn set_certificate_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the ACM certificate.</p>
    pub fn get_certificate_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_arn
    }
    /// Constructs a [`DescribeCertificateRequest`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> DescribeCertificateRequest {
        DescribeCertificateRequest {
            override_configuration: self.override_configuration.clone(),
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl AcmRequest for DescribeCertificateRequest {
    fn override_configuration(&self) -> ::std::option::Option<&::aws_types::RequestOverrideConfiguration> {
        self.override_configuration.as_ref()
    }
}

impl AcmRequestBuilder for DescribeCertificateRequestBuilder {
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

pub(crate) static DESCRIBE_CERTIFICATE_REQUEST_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "DescribeCertificateRequest"));

static DESCRIBE_CERTIFICATE_REQUEST_FIELDS: &[SdkField<DescribeCertificateRequest>] = &[
    SdkField::<DescribeCertificateRequest>::new(
        shape_id!("com.amazonaws.acm", "DescribeCertificateRequest", "CertificateArn"),
        MarshallingType::String,
        |input| input.certificate_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_arn(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for DescribeCertificateRequest {
    type Builder = crate::operation::describe_certificate::builders::DescribeCertificateRequestBuilder;

    fn schema() -> &'static StructureSchema {
        &DESCRIBE_CERTIFICATE_REQUEST_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        DESCRIBE_CERTIFICATE_REQUEST_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
