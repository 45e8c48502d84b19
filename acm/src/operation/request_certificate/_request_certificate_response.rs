/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::response::{AcmResponse, AcmResponseBuilder};
use aws_types::RequestId;

/// <p>The output of the <code>RequestCertificate</code> operation.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RequestCertificateResponse {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) certificate_arn: ::std::option::Option<String>,
}
impl RequestCertificateResponse {
    /// <p>String that contains the ARN of the issued certificate.</p>
    pub fn certificate_arn(&self) -> ::std::option::Option<&str> {
        self.certificate_arn.as_deref()
    }
}
impl RequestCertificateResponse {
    /// Creates a new builder-style object to manufacture [`RequestCertificateResponse`].
    pub fn builder() -> crate::operation::request_certificate::builders::RequestCertificateResponseBuilder {
        crate::operation::request_certificate::builders::RequestCertificateResponseBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::request_certificate::builders::RequestCertificateResponseBuilder {
        crate::operation::request_certificate::builders::RequestCertificateResponseBuilder {
            response_metadata: self.response_metadata.clone(),
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

/// A builder for [`RequestCertificateResponse`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct RequestCertificateResponseBuilder {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) certificate_arn: ::std::option::Option<String>,
}
impl RequestCertificateResponseBuilder {
    /// <p>String that contains the ARN of the issued certificate.</p>
    pub fn certificate_arn(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.certificate_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>String that contains the ARN of the issued certificate.</p>
    pub fn set_certificate_arn(mut self, input: ::std::option::Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }
    /// <p>String that contains the ARN of the issued certificate.</p>
    pub fn get_certificate_arn(&self) -> &::std::option::Option<String> {
        &self.certificate_arn
    }
    /// Constructs a [`RequestCertificateResponse`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> RequestCertificateResponse {
        RequestCertificateResponse {
            response_metadata: self.response_metadata.clone(),
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl AcmResponse for RequestCertificateResponse {
    fn response_metadata(&self) -> ::std::option::Option<&::aws_types::ResponseMetadata> {
        self.response_metadata.as_ref()
    }
}

impl AcmResponseBuilder for RequestCertificateResponseBuilder {
    fn set_response_metadata(mut self, input: ::std::option::Option<::aws_types::ResponseMetadata>) -> Self {
        self.response_metadata = input;
        self
    }

    fn get_response_metadata(&self) -> &::std::option::Option<::aws_types::ResponseMetadata> {
        &self.response_metadata
    }
}

impl RequestId for RequestCertificateResponse {
    fn request_id(&self) -> ::std::option::Option<&str> {
        self.response_metadata.request_id()
    }
}

pub(crate) static REQUEST_CERTIFICATE_RESPONSE_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "RequestCertificateResponse"));

static REQUEST_CERTIFICATE_RESPONSE_FIELDS: &[SdkField<RequestCertificateResponse>] = &[
    SdkField::<RequestCertificateResponse>::new(
        shape_id!("com.amazonaws.acm", "RequestCertificateResponse", "CertificateArn"),
        MarshallingType::String,
        |input| input.certificate_arn.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_certificate_arn(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for RequestCertificateResponse {
    type Builder = crate::operation::request_certificate::builders::RequestCertificateResponseBuilder;

    fn schema() -> &'static StructureSchema {
        &REQUEST_CERTIFICATE_RESPONSE_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        REQUEST_CERTIFICATE_RESPONSE_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
