/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use crate::request::{AcmRequest, AcmRequestBuilder};

/// <p>Retrieves a list of certificate ARNs and domain names. You can request that only certificates that match a specific status be listed.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListCertificatesRequest {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) certificate_statuses: ::smithy_types::TrackedList<crate::types::CertificateStatus>,
    pub(crate) includes: ::std::option::Option<crate::types::Filters>,
    pub(crate) next_token: ::std::option::Option<String>,
    pub(crate) max_items: ::std::option::Option<i32>,
    pub(crate) sort_by: ::std::option::Option<crate::types::SortBy>,
    pub(crate) sort_order: ::std::option::Option<crate::types::SortOrder>,
}
impl ListCertificatesRequest {
    /// <p>Filter the certificate list by status value.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_certificate_statuses()`](Self::has_certificate_statuses) to tell an absent list from an empty one.
    pub fn certificate_statuses(&self) -> &[crate::types::CertificateStatus] {
        self.certificate_statuses.as_slice()
    }
    /// Returns true if `CertificateStatuses` was set, even to an empty list.
    pub fn has_certificate_statuses(&self) -> bool {
        self.certificate_statuses.is_set()
    }

    /// <p>Filter the certificate list. For more information, see the <code>Filters</code> structure.</p>
    pub fn includes(&self) -> ::std::option::Option<&crate::types::Filters> {
        self.includes.as_ref()
    }

    /// <p>Use this parameter only when paginating results and only in a subsequent request after you receive a response with truncated results. Set it to the value of <code>NextToken</code> from the response you just received.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>Use this parameter when paginating results to specify the maximum number of items to return in the response. If additional items exist beyond the number you specify, the <code>NextToken</code> element is sent in the response. Use this <code>NextToken</code> value in a subsequent request to retrieve additional items.</p>
    pub fn max_items(&self) -> ::std::option::Option<i32> {
        self.max_items
    }

    /// <p>Specifies the field to sort results by. If you specify <code>SortBy</code>, you must also specify <code>SortOrder</code>.</p>
    pub fn sort_by(&self) -> ::std::option::Option<&crate::types::SortBy> {
        self.sort_by.as_ref()
    }

    /// <p>Specifies the order of sorted results. If you specify <code>SortOrder</code>, you must also specify <code>SortBy</code>.</p>
    pub fn sort_order(&self) -> ::std::option::Option<&crate::types::SortOrder> {
        self.sort_order.as_ref()
    }
}
impl ListCertificatesRequest {
    /// Creates a new builder-style object to manufacture [`ListCertificatesRequest`].
    pub fn builder() -> crate::operation::list_certificates::builders::ListCertificatesRequestBuilder {
        crate::operation::list_certificates::builders::ListCertificatesRequestBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::operation::list_certificates::builders::ListCertificatesRequestBuilder {
        crate::operation::list_certificates::builders::ListCertificatesRequestBuilder {
            override_configuration: self.override_configuration.clone(),
            certificate_statuses: self.certificate_statuses.clone().into_option(),
            includes: self.includes.clone(),
            next_token: self.next_token.clone(),
            max_items: self.max_items.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// A builder for [`ListCertificatesRequest`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ListCertificatesRequestBuilder {
    pub(crate) override_configuration: ::std::option::Option<::aws_types::RequestOverrideConfiguration>,
    pub(crate) certificate_statuses: ::std::option::Option<::std::vec::Vec<crate::types::CertificateStatus>>,
    pub(crate) includes: ::std::option::Option<crate::types::Filters>,
    pub(crate) next_token: ::std::option::Option<String>,
    pub(crate) max_items: ::std::option::Option<i32>,
    pub(crate) sort_by: ::std::option::Option<crate::types::SortBy>,
    pub(crate) sort_order: ::std::option::Option<crate::types::SortOrder>,
}
impl ListCertificatesRequestBuilder {
    /// Appends an item to `certificate_statuses`.
    ///
    /// To override the contents of this collection use [`set_certificate_statuses`](Self::set_certificate_statuses).
    ///
    /// <p>Filter the certificate list by status value.</p>
    pub fn certificate_statuses(mut self, input: crate::types::CertificateStatus) -> Self {
        let mut v = self.certificate_statuses.unwrap_or_default();
        v.push(input);
        self.certificate_statuses = ::std::option::Option::Some(v);
        self
    }
    /// <p>Filter the certificate list by status value.</p>
    pub fn set_certificate_statuses(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::CertificateStatus>>) -> Self {
        self.certificate_statuses = input;
        self
    }
    /// <p>Filter the certificate list by status value.</p>
    pub fn get_certificate_statuses(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::CertificateStatus>> {
        &self.certificate_statuses
    }
    /// <p>Filter the certificate list. For more information, see the <code>Filters</code> structure.</p>
    pub fn includes(mut self, input: crate::types::Filters) -> Self {
        self.includes = ::std::option::Option::Some(input);
        self
    }
    /// Sets `includes` to a value produced by configuring a fresh [`FiltersBuilder`](crate::types::builders::FiltersBuilder).
    pub fn includes_with(
        self,
        f: impl ::std::ops::FnOnce(crate::types::builders::FiltersBuilder) -> crate::types::builders::FiltersBuilder,
    ) -> Self {
        let value = f(crate::types::Filters::builder()).build();
        self.includes(value)
    }
    /// <p>Filter the certificate list. For more information, see the <code>Filters</code> structure.</p>
    pub fn set_includes(mut self, input: ::std::option::Option<crate::types::Filters>) -> Self {
        self.includes = input;
        self
    }
    /// <p>Filter the certificate list. For more information, see the <code>Filters</code> structure.</p>
    pub fn get_includes(&self) -> &::std::option::Option<crate::types::Filters> {
        &self.includes
    }
    /// <p>Use this parameter only when paginating results and only in a subsequent request after you receive a response with truncated results. Set it to the value of <code>NextToken</code> from the response you just received.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Use this parameter only when paginating results and only in a subsequent request after you receive a response with truncated results. Set it to the value of <code>NextToken</code> from the response you just received.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>Use this parameter only when paginating results and only in a subsequent request after you receive a response with truncated results. Set it to the value of <code>NextToken</code> from the response you just received.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<String> {
        &self.next_token
    }
    /// <p>Use this parameter when paginating results to specify the maximum number of items to return in the response. If additional items exist beyond the number you specify, the <code>NextToken</code> element is sent in the response. Use this <code>NextToken</code> value in a subsequent request to retrieve additional items.</p>
    pub fn max_items(mut self, input: i32) -> Self {
        self.max_items = ::std::option::Option::Some(input);
        self
    }
    /// <p>Use this parameter when paginating results to specify the maximum number of items to return in the response. If additional items exist beyond the number you specify, the <code>NextToken</code> element is sent in the response. Use this <code>NextToken</code> value in a subsequent request to retrieve additional items.</p>
    pub fn set_max_items(mut self, input: ::std::option::Option<i32>) -> Self {
        self.max_items = input;
        self
    }
    /// <p>Use this parameter when paginating results to specify the maximum number of items to return in the response. If additional items exist beyond the number you specify, the <code>NextToken</code> element is sent in the response. Use this <code>NextToken</code> value in a subsequent request to retrieve additional items.</p>
    pub fn get_max_items(&self) -> &::std::option::Option<i32> {
        &self.max_items
    }
    /// <p>Specifies the field to sort results by. If you specify <code>SortBy</code>, you must also specify <code>SortOrder</code>.</p>
    pub fn sort_by(mut self, input: crate::types::SortBy) -> Self {
        self.sort_by = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the field to sort results by. If you specify <code>SortBy</code>, you must also specify <code>SortOrder</code>.</p>
    pub fn set_sort_by(mut self, input: ::std::option::Option<crate::types::SortBy>) -> Self {
        self.sort_by = input;
        self
    }
    /// <p>Specifies the field to sort results by. If you specify <code>SortBy</code>, you must also specify <code>SortOrder</code>.</p>
    pub fn get_sort_by(&self) -> &::std::option::Option<crate::types::SortBy> {
        &self.sort_by
    }
    /// <p>Specifies the order of sorted results. If you specify <code>SortOrder</code>, you must also specify <code>SortBy</code>.</p>
    pub fn sort_order(mut self, input: crate::types::SortOrder) -> Self {
        self.sort_order = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the order of sorted results. If you specify <code>SortOrder</code>, you must also specify <code>SortBy</code>.</p>
    pub fn set_sort_order(mut self, input: ::std::option::Option<crate::types::SortOrder>) -> Self {
        self.sort_order = input;
        self
    }
    /// <p>Specifies the order of sorted results. If you specify <code>SortOrder</code>, you must also specify <code>SortBy</code>.</p>
    pub fn get_sort_order(&self) -> &::std::option::Option<crate::types::SortOrder> {
        &self.sort_order
    }
    /// Constructs a [`ListCertificatesRequest`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> ListCertificatesRequest {
        ListCertificatesRequest {
            override_configuration: self.override_configuration.clone(),
            certificate_statuses: self.certificate_statuses.clone().into(),
            includes: self.includes.clone(),
            next_token: self.next_token.clone(),
            max_items: self.max_items.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

impl AcmRequest for ListCertificatesRequest {
    fn override_configuration(&self) -> ::std::option::Option<&::aws_types::RequestOverrideConfiguration> {
        self.override_configuration.as_ref()
    }
}

impl AcmRequestBuilder for ListCertificatesRequestBuilder {
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

pub(crate) static LIST_CERTIFICATES_REQUEST_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "ListCertificatesRequest"));

static LIST_CERTIFICATES_REQUEST_FIELDS: &[SdkField<ListCertificatesRequest>] = &[
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "CertificateStatuses"),
        MarshallingType::List,
        |input| {
            input
                .certificate_statuses
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_certificate_statuses(Some(value.expect_list_of(|item| Ok(crate::types::CertificateStatus::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "Includes"),
        MarshallingType::SdkPojo,
        |input| input.includes.as_ref().map(|v| FieldValue::Structure(v)),
        |builder, value| Ok(builder.set_includes(Some(crate::types::Filters::from_input(value)?))),
    ),
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "NextToken"),
        MarshallingType::String,
        |input| input.next_token.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_next_token(Some(value.expect_string()?))),
    ),
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "MaxItems"),
        MarshallingType::Integer,
        |input| input.max_items.map(FieldValue::Integer),
        |builder, value| Ok(builder.set_max_items(Some(value.expect_integer()?))),
    ),
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "SortBy"),
        MarshallingType::String,
        |input| input.sort_by.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_sort_by(Some(crate::types::SortBy::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<ListCertificatesRequest>::new(
        shape_id!("com.amazonaws.acm", "ListCertificatesRequest", "SortOrder"),
        MarshallingType::String,
        |input| input.sort_order.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_sort_order(Some(crate::types::SortOrder::from(value.expect_string()?.as_str())))),
    ),
];

impl SdkPojo for ListCertificatesRequest {
    type Builder = crate::operation::list_certificates::builders::ListCertificatesRequestBuilder;

    fn schema() -> &'static StructureSchema {
        &LIST_CERTIFICATES_REQUEST_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        LIST_CERTIFICATES_REQUEST_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
