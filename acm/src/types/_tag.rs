/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>A key-value pair that identifies or specifies metadata about an ACM resource.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Tag {
    pub(crate) key: ::std::option::Option<String>,
    pub(crate) value: ::std::option::Option<String>,
}
impl Tag {
    /// <p>The key of the tag.</p>
    pub fn key(&self) -> ::std::option::Option<&str> {
        self.key.as_deref()
    }

    /// <p>The value of the tag.</p>
    pub fn value(&self) -> ::std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`].
    pub fn builder() -> crate::types::builders::TagBuilder {
        crate::types::builders::TagBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::TagBuilder {
        crate::types::builders::TagBuilder {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// A builder for [`Tag`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TagBuilder {
    pub(crate) key: ::std::option::Option<String>,
    pub(crate) value: ::std::option::Option<String>,
}
impl TagBuilder {
    /// <p>The key of the tag.</p>
    pub fn key(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The key of the tag.</p>
    pub fn set_key(mut self, input: ::std::option::Option<String>) -> Self {
        self.key = input;
        self
    }
    /// <p>The key of the tag.</p>
    pub fn get_key(&self) -> &::std::option::Option<String> {
        &self.key
    }
    /// <p>The value of the tag.</p>
    pub fn value(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.value = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The value of the tag.</p>
    pub fn set_value(mut self, input: ::std::option::Option<String>) -> Self {
        self.value = input;
        self
    }
    /// <p>The value of the tag.</p>
    pub fn get_value(&self) -> &::std::option::Option<String> {
        &self.value
    }
    /// Constructs a [`Tag`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> Tag {
        Tag {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

pub(crate) static TAG_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "Tag"));

static TAG_FIELDS: &[SdkField<Tag>] = &[
    SdkField::<Tag>::new(
        shape_id!("com.amazonaws.acm", "Tag", "Key"),
        MarshallingType::String,
        |input| input.key.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_key(Some(value.expect_string()?))),
    ),
    SdkField::<Tag>::new(
        shape_id!("com.amazonaws.acm", "Tag", "Value"),
        MarshallingType::String,
        |input| input.value.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_value(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for Tag {
    type Builder = crate::types::builders::TagBuilder;

    fn schema() -> &'static StructureSchema {
        &TAG_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        TAG_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use crate::types::Tag;
    use smithy_schema::SdkPojo;

    #[test]
    fn members_are_read_by_wire_name() {
        let tag = Tag::builder().key("team").value("pki").build();
        assert_eq!(tag.get_value_for_field::<&str>("Key"), Ok(Some("team")));
        assert_eq!(tag.get_value_for_field::<&str>("Value"), Ok(Some("pki")));
        assert_eq!(tag.get_value_for_field::<&str>("Owner"), Ok(None));
    }

    #[test]
    fn all_absent_is_legal() {
        let tag = Tag::builder().build();
        assert_eq!(tag.key(), None);
        assert_eq!(tag.value(), None);
        assert_eq!(tag, tag.to_builder().build());
    }
}
