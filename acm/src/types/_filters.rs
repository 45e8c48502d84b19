/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::prelude::STRING_MEMBER;
use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>This structure can be used in the <code>ListCertificates</code> action to filter the output of the certificate list.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Filters {
    pub(crate) extended_key_usage: ::smithy_types::TrackedList<crate::types::ExtendedKeyUsageName>,
    pub(crate) key_usage: ::smithy_types::TrackedList<crate::types::KeyUsageName>,
    pub(crate) key_types: ::smithy_types::TrackedList<crate::types::KeyAlgorithm>,
}
impl Filters {
    /// <p>Specify one or more <code>ExtendedKeyUsage</code> extension values.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_extended_key_usage()`](Self::has_extended_key_usage) to tell an absent list from an empty one.
    pub fn extended_key_usage(&self) -> &[crate::types::ExtendedKeyUsageName] {
        self.extended_key_usage.as_slice()
    }
    /// Returns true if `extendedKeyUsage` was set, even to an empty list.
    pub fn has_extended_key_usage(&self) -> bool {
        self.extended_key_usage.is_set()
    }

    /// <p>Specify one or more <code>KeyUsage</code> extension values.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_key_usage()`](Self::has_key_usage) to tell an absent list from an empty one.
    pub fn key_usage(&self) -> &[crate::types::KeyUsageName] {
        self.key_usage.as_slice()
    }
    /// Returns true if `keyUsage` was set, even to an empty list.
    pub fn has_key_usage(&self) -> bool {
        self.key_usage.is_set()
    }

    /// <p>Specify one or more algorithms that can be used to generate key pairs.</p>
    /// <p>Default filtering returns only <code>RSA_1024</code> and <code>RSA_2048</code> certificates that have at least one domain. To return other certificate types, provide the desired type signatures in a comma-separated list.</p>
    ///
    /// If no value was sent for this field, an empty slice is returned. Use [`has_key_types()`](Self::has_key_types) to tell an absent list from an empty one.
    pub fn key_types(&self) -> &[crate::types::KeyAlgorithm] {
        self.key_types.as_slice()
    }
    /// Returns true if `keyTypes` was set, even to an empty list.
    pub fn has_key_types(&self) -> bool {
        self.key_types.is_set()
    }
}
impl Filters {
    /// Creates a new builder-style object to manufacture [`Filters`].
    pub fn builder() -> crate::types::builders::FiltersBuilder {
        crate::types::builders::FiltersBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::FiltersBuilder {
        crate::types::builders::FiltersBuilder {
            extended_key_usage: self.extended_key_usage.clone().into_option(),
            key_usage: self.key_usage.clone().into_option(),
            key_types: self.key_types.clone().into_option(),
        }
    }
}

/// A builder for [`Filters`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct FiltersBuilder {
    pub(crate) extended_key_usage: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>>,
    pub(crate) key_usage: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>>,
    pub(crate) key_types: ::std::option::Option<::std::vec::Vec<crate::types::KeyAlgorithm>>,
}
impl FiltersBuilder {
    /// Appends an item to `extended_key_usage`.
    ///
    /// To override the contents of this collection use [`set_extended_key_usage`](Self::set_extended_key_usage).
    ///
    /// <p>Specify one or more <code>ExtendedKeyUsage</code> extension values.</p>
    pub fn extended_key_usage(mut self, input: crate::types::ExtendedKeyUsageName) -> Self {
        let mut v = self.extended_key_usage.unwrap_or_default();
        v.push(input);
        self.extended_key_usage = ::std::option::Option::Some(v);
        self
    }
    /// <p>Specify one or more <code>ExtendedKeyUsage</code> extension values.</p>
    pub fn set_extended_key_usage(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>>) -> Self {
        self.extended_key_usage = input;
        self
    }
    /// <p>Specify one or more <code>ExtendedKeyUsage</code> extension values.</p>
    pub fn get_extended_key_usage(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ExtendedKeyUsageName>> {
        &self.extended_key_usage
    }
    /// Appends an item to `key_usage`.
    ///
    /// To override the contents of this collection use [`set_key_usage`](Self::set_key_usage).
    ///
    /// <p>Specify one or more <code>KeyUsage</code> extension values.</p>
    pub fn key_usage(mut self, input: crate::types::KeyUsageName) -> Self {
        let mut v = self.key_usage.unwrap_or_default();
        v.push(input);
        self.key_usage = ::std::option::Option::Some(v);
        self
    }
    /// <p>Specify one or more <code>KeyUsage</code> extension values.</p>
    pub fn set_key_usage(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>>) -> Self {
        self.key_usage = input;
        self
    }
    /// <p>Specify one or more <code>KeyUsage</code> extension values.</p>
    pub fn get_key_usage(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::KeyUsageName>> {
        &self.key_usage
    }
    /// Appends an item to `key_types`.
    ///
    /// To override the contents of this collection use [`set_key_types`](Self::set_key_types).
    ///
    /// <p>Specify one or more algorithms that can be used to generate key pairs.</p>
    /// <p>Default filtering returns only <code>RSA_1024</code> and <code>RSA_2048</code> certificates that have at least one domain. To return other certificate types, provide the desired type signatures in a comma-separated list.</p>
    pub fn key_types(mut self, input: crate::types::KeyAlgorithm) -> Self {
        let mut v = self.key_types.unwrap_or_default();
        v.push(input);
        self.key_types = ::std::option::Option::Some(v);
        self
    }
    /// <p>Specify one or more algorithms that can be used to generate key pairs.</p>
    /// <p>Default filtering returns only <code>RSA_1024</code> and <code>RSA_2048</code> certificates that have at least one domain. To return other certificate types, provide the desired type signatures in a comma-separated list.</p>
    pub fn set_key_types(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::KeyAlgorithm>>) -> Self {
        self.key_types = input;
        self
    }
    /// <p>Specify one or more algorithms that can be used to generate key pairs.</p>
    /// <p>Default filtering returns only <code>RSA_1024</code> and <code>RSA_2048</code> certificates that have at least one domain. To return other certificate types, provide the desired type signatures in a comma-separated list.</p>
    pub fn get_key_types(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::KeyAlgorithm>> {
        &self.key_types
    }
    /// Constructs a [`Filters`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> Filters {
        Filters {
            extended_key_usage: self.extended_key_usage.clone().into(),
            key_usage: self.key_usage.clone().into(),
            key_types: self.key_types.clone().into(),
        }
    }
}

pub(crate) static FILTERS_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "Filters"));

static FILTERS_FIELDS: &[SdkField<Filters>] = &[
    SdkField::<Filters>::new(
        shape_id!("com.amazonaws.acm", "Filters", "extendedKeyUsage"),
        MarshallingType::List,
        |input| {
            input
                .extended_key_usage
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_extended_key_usage(Some(value.expect_list_of(|item| Ok(crate::types::ExtendedKeyUsageName::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<Filters>::new(
        shape_id!("com.amazonaws.acm", "Filters", "keyUsage"),
        MarshallingType::List,
        |input| {
            input
                .key_usage
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_key_usage(Some(value.expect_list_of(|item| Ok(crate::types::KeyUsageName::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<Filters>::new(
        shape_id!("com.amazonaws.acm", "Filters", "keyTypes"),
        MarshallingType::List,
        |input| {
            input
                .key_types
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v.as_str())).collect()))
        },
        |builder, value| {
            Ok(builder.set_key_types(Some(value.expect_list_of(|item| Ok(crate::types::KeyAlgorithm::from(item.expect_string()?.as_str())))?)))
        },
    )
    .with_element(&STRING_MEMBER),
];

impl SdkPojo for Filters {
    type Builder = crate::types::builders::FiltersBuilder;

    fn schema() -> &'static StructureSchema {
        &FILTERS_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        FILTERS_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use crate::types::{Filters, KeyAlgorithm};
    use smithy_schema::{SdkPojo, Schema};

    #[test]
    fn wire_names_are_lower_camel_case() {
        let names: Vec<_> = Filters::sdk_fields().iter().map(|f| f.member_name()).collect();
        assert_eq!(names, vec!["extendedKeyUsage", "keyUsage", "keyTypes"]);
        assert_eq!(
            Filters::sdk_field("keyTypes").and_then(|f| f.location_name().map(str::to_string)),
            Some("keyTypes".to_string())
        );
    }

    #[test]
    fn enum_lists_surface_raw_text() {
        let filters = Filters::builder()
            .key_types(KeyAlgorithm::Rsa2048)
            .key_types(KeyAlgorithm::from("ML_DSA_65"))
            .build();
        assert_eq!(
            filters.get_value_for_field::<Vec<String>>("keyTypes"),
            Ok(Some(vec!["RSA_2048".to_string(), "ML_DSA_65".to_string()]))
        );
        assert!(!filters.has_key_usage());
    }
}
