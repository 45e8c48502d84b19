/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::response::{AcmResponse, AcmResponseBuilder};
use aws_types::RequestId;

/// <p>The output of the <code>ListCertificates</code> operation.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListCertificatesResponse {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) next_token: ::std::option::Option<String>,
    pub(crate) certificate_summary_list: ::smithy_types::TrackedList<crate::types::CertificateSummary>,
}
impl ListCertificatesResponse {
    /// <p>When the list is truncated, this value is present and contains the value to use for the <code>NextToken</code> parameter in a subsequent pagination request.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>A list of ACM certificates.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_certificate_summary_list()`](Self::has_certificate_summary_list) to tell an absent list from an empty one.
    pub fn certificate_summary_list(&self) -> &[crate::types::CertificateSummary] {
        self.certificate_summary_list.as_slice()
    }
    /// Returns true if `CertificateSummaryList` was set, even to an empty list.
    pub fn has_certificate_summary_list(&self) -> bool {
        self.certificate_summary_list.is_set()
    }
}
impl ListCertificatesResponse {
    /// Creates a new builder-style object to manufacture [`ListCertificatesResponse`].
    pub fn builder() -> crate::operation::list_certificates::builders::ListCertificatesResponseBuilder {
        crate::operation::list_certificates::builders::ListCertificatesResponseBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::list_certificates::builders::ListCertificatesResponseBuilder {
        crate::operation::list_certificates::builders::ListCertificatesResponseBuilder {
            response_metadata: self.response_metadata.clone(),
            next_token: self.next_token.clone(),
            certificate_summary_list: self.certificate_summary_list.clone().into_option(),
        }
    }
}

/// A builder for [`ListCertificatesResponse`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ListCertificatesResponseBuilder {
    pub(crate) response_metadata: ::std::option::Option<::aws_types::ResponseMetadata>,
    pub(crate) next_token: ::std::option::Option<String>,
    pub(crate) certificate_summary_list: ::std::option::Option<::std::vec::Vec<crate::types::CertificateSummary>>,
}
impl ListCertificatesResponseBuilder {
    /// <p>When the list is truncated, this value is present and contains the value to use for the <code>NextToken</code> parameter in a subsequent pagination request.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>When the list is truncated, this value is present and contains the value to use for the <code>NextToken</code> parameter in a subsequent pagination request.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>When the list is truncated, this value is present and contains the value to use for the <code>NextToken</code> parameter in a subsequent pagination request.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<String> {
        &self.next_token
    }
    /// Appends an item to `certificate_summary_list`.
    ///
    /// To override the contents of this collection use [`set_certificate_summary_list`](Self::set_certificate_summary_list).
    ///
    /// <p>A list of ACM certificates.</p>
    pub fn certificate_summary_list(mut self, input: crate::types::CertificateSummary) -> Self {
        let mut v = self.certificate_summary_list.unwrap_or_default();
        v.push(input);
        self.certificate_summary_list = ::std::option::Option::Some(v);
        self
    }
    /// Appends an item to `certificate_summary_list`, produced by configuring a fresh [`CertificateSummaryBuilder`](crate::types::builders::CertificateSummaryBuilder).
    pub fn certificate_summary_list_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::CertificateSummaryBuilder) -> crate::types::builders::CertificateSummaryBuilder,
    ) -> Self {
        let item = f(crate::types::CertificateSummary::builder()).build();
        self.certificate_summary_list(item)
    }
    /// <p>A list of ACM certificates.</p>
    pub fn set_certificate_summary_list(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::CertificateSummary>>) -> Self {
        self.certificate_summary_list = input;
        self
    }
    /// <p>A list of ACM certificates.</p>
    pub fn get_certificate_summary_list(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::CertificateSummary>> {
        &self.certificate_summary_list
    }
    /// Constructs a [`ListCertificatesResponse`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> ListCertificatesResponse {
        ListCertificatesResponse {
            response_metadata: self.response_metadata.clone(),
            next_token: self.next_token.clone(),
            certificate_summary_list: self.certificate_summary_list.clone().into(),
        }
    }
}

impl AcmResponse for ListCertificatesResponse {
    fn response_metadata(&self) -> ::std::option::Option<&::aws_types::ResponseMetadata> {
        self.response_metadata.as_ref()
    }
}

impl AcmResponseBuilder for ListCertificatesResponseBuilder {
    fn set_response_metadata(mut self, input: ::std::option::Option<::aws_types::ResponseMetadata>) -> Self {
        self.response_metadata = input;
        self
    }

    fn get_response_metadata(&self) -> &::std::option::Option<::aws_types::ResponseMetadata> {
        &self.response_metadata
    }
}

impl RequestId for ListCertificatesResponse {
    fn request_id(&self) -> ::std::option::Option<&str> {
        self.response_metadata.request_id()
    }
}

pub(crate) static LIST_CERTIFICATES_RESPONSE_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "ListCertificatesResponse"));

static LIST_CERTIFICATES_RESPONSE_FIELDS: &[SdkField<ListCertificatesResponse>] = &[
    SdkField::<ListCertificatesResponse>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesResponse", "NextToken"),
        MarshallingType::String,
        |input| input.next_token.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_next_token(Some(value.expect_string()?))),
    ),
    SdkField::<ListCertificatesResponse>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesResponse", "CertificateSummaryList"),
        MarshallingType::List,
        |input| {
            input
                .certificate_summary_list
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_certificate_summary_list(Some(value.expect_list_of(crate::types::CertificateSummary::from_input)?)))
        },
    )
    .with_element(&crate::types::_certificate_summary::CERTIFICATE_SUMMARY_SCHEMA),
];

impl SdkPojo for ListCertificatesResponse {
    type Builder = crate::operation::list_certificates::builders::ListCertificatesResponseBuilder;

    fn schema() -> &'static StructureSchema {
        &LIST_CERTIFICATES_RESPONSE_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        LIST_CERTIFICATES_RESPONSE_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use crate::operation::list_certificates::ListCertificatesResponse;
    use crate::response::AcmResponseBuilder;
    use aws_types::{RequestId, ResponseMetadata};

    #[test]
    fn request_id_comes_from_metadata() {
        let response = ListCertificatesResponse::builder()
            .response_metadata(ResponseMetadata::builder().request_id("req-1").build())
            .next_token("abc")
            .build();
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.next_token(), Some("abc"));
        assert!(!response.has_certificate_summary_list());
        assert_eq!(ListCertificatesResponse::builder().build().request_id(), None);
    }
}
