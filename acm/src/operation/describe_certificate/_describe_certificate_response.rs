/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::response::{AcmResponse, AcmResponseBuilder};
use aws_types::RequestId;

/// <p>The output of the <code>DescribeCertificate</code> operation.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DescribeCertificateResponse {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) certificate: ::std::option::Option<crate::types::CertificateDetail>,
}
impl DescribeCertificateResponse {
    /// <p>Metadata about an ACM certificate.</p>
    pub fn certificate(&self) -> ::std::option::Option<&crate::types::CertificateDetail> {
        self.certificate.as_ref()
    }
}
impl DescribeCertificateResponse {
    /// Creates a new builder-style object to manufacture [`DescribeCertificateResponse`].
    pub fn builder() -> crate::operation::describe_certificate::builders::DescribeCertificateResponseBuilder {
        crate::operation::describe_certificate::builders::DescribeCertificateResponseBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::describe_certificate::builders::DescribeCertificateResponseBuilder {
        crate::operation::describe_certificate::builders::DescribeCertificateResponseBuilder {
            response_metadata: self.response_metadata.clone(),
            certificate: self.certificate.clone(),
        }
    }
}

/// A builder for [`DescribeCertificateResponse`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DescribeCertificateResponseBuilder {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) certificate: ::std::option::Option<crate::types::CertificateDetail>,
}
impl DescribeCertificateResponseBuilder {
    /// <p>Metadata about an ACM certificate.</p>
    pub fn certificate(mut self, input: crate::types::CertificateDetail) -> Self {
        self.certificate = ::std::option::Option::Some(input);
        self
    }
    /// Sets `certificate` to a value produced by configuring a fresh [`CertificateDetailBuilder`](crate::types::builders::CertificateDetailBuilder).
    pub fn certificate_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::CertificateDetailBuilder) -> crate::types::builders::CertificateDetailBuilder,
    ) -> Self {
        let value = f(crate::types::CertificateDetail::builder()).build();
        self.certificate(value)
    }
    /// <p>Metadata about an ACM certificate.</p>
    pub fn set_certificate(mut self, input: ::std::option::Option<crate::types::CertificateDetail>) -> Self {
        self.certificate = input;
        self
    }
    /// <p>Metadata about an ACM certificate.</p>
    pub fn get_certificate(&self) -> &::std::option::Option<crate::types::CertificateDetail> {
        &self.certificate
    }
    /// Constructs a [`DescribeCertificateResponse`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> DescribeCertificateResponse {
        DescribeCertificateResponse {
            response_metadata: self.response_metadata.clone(),
            certificate: self.certificate.clone(),
        }
    }
}

impl AcmResponse for DescribeCertificateResponse {
    fn response_metadata(&self) -> ::std::option::Option<&::aws_types::ResponseMetadata> {
        self.response_metadata.as_ref()
    }
}

impl AcmResponseBuilder for DescribeCertificateResponseBuilder {
    fn set_response_metadata(mut self, input: ::std::option::Option<::aws_types::ResponseMetadata>) -> Self {
        self.response_metadata = input;
        self
    }

    fn get_response_metadata(&self) -> &::std::option::Option<::aws_types::ResponseMetadata> {
        &self.response_metadata
    }
}

impl RequestId for DescribeCertificateResponse {
    fn request_id(&self) -> ::std::option::Option<&str> {
        self.response_metadata.request_id()
    }
}

pub(crate) static DESCRIBE_CERTIFICATE_RESPONSE_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "DescribeCertificateResponse"));

static DESCRIBE_CERTIFICATE_RESPONSE_FIELDS: &[SdkField<DescribeCertificateResponse>] = &[
    SdkField::<DescribeCertificateResponse>::new(
        shape_id!("com.amazonaws.acm", "DescribeCertificateResponse", "Certificate"),
        MarshallingType::SdkPojo,
        |input| input.certificate.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_certificate(Some(crate::types::CertificateDetail::from_input(value)?))),
    ),
];

impl SdkPojo for DescribeCertificateResponse {
    type Builder = crate::operation::describe_certificate::builders::DescribeCertificateResponseBuilder;

    fn schema() -> &'static StructureSchema {
        &DESCRIBE_CERTIFICATE_RESPONSE_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        DESCRIBE_CERTIFICATE_RESPONSE_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
