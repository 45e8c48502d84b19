/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Contains a DNS record value that you can use to validate ownership or control of a domain. This is used by the <code>DescribeCertificate</code> action.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ResourceRecord {
    pub(crate) name: ::std::option::Option<String>,
    pub(crate) r#type: ::std::option::Option<crate::types::RecordType>,
    pub(crate) value: ::std::option::Option<String>,
}
impl ResourceRecord {
    /// <p>The name of the DNS record to create in your domain. This is supplied by ACM.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The type of DNS record. Currently this can be <code>CNAME</code>.</p>
    pub fn r#type(&self) -> ::std::option::Option<&crate::types::RecordType> {
        self.r#type.as_ref()
    }

    /// <p>The value of the CNAME record to add to your DNS database. This is supplied by ACM.</p>
    pub fn value(&self) -> ::std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl ResourceRecord {
    /// Creates a new builder-style object to manufacture [`ResourceRecord`].
    pub fn builder() -> crate::types::builders::ResourceRecordBuilder {
        crate::types::builders::ResourceRecordBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::ResourceRecordBuilder {
        crate::types::builders::ResourceRecordBuilder {
            name: self.name.clone(),
            r#type: self.r#type.clone(),
            value: self.value.clone(),
        }
    }
}

/// A builder for [`ResourceRecord`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ResourceRecordBuilder {
    pub(crate) name: ::std::option::Option<String>,
    pub(crate) r#type: ::std::option::Option<crate::types::RecordType>,
    pub(crate) value: ::std::option::Option<String>,
}
impl ResourceRecordBuilder {
    /// <p>The name of the DNS record to create in your domain. This is supplied by ACM.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the DNS record to create in your domain. This is supplied by ACM.</p>
    pub fn set_name(mut self, input: ::std::option::Option<String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the DNS record to create in your domain. This is supplied by ACM.</p>
    pub fn get_name(&self) -> &::std::option::Option<String> {
        &self.name
    }
    /// <p>The type of DNS record. Currently this can be <code>CNAME</code>.</p>
    pub fn r#type(mut self, input: crate::types::RecordType) -> Self {
        self.r#type = ::std::option::Option::Some(input);
        self
    }
    /// <p>The type of DNS record. Currently this can be <code>CNAME</code>.</p>
    pub fn set_type(mut self, input: ::std::option::Option<crate::types::RecordType>) -> Self {
        self.r#type = input;
        self
    }
    /// <p>The type of DNS record. Currently this can be <code>CNAME</code>.</p>
    pub fn get_type(&self) -> &::std::option::Option<crate::types::RecordType> {
        &self.r#type
    }
    /// <p>The value of the CNAME record to add to your DNS database. This is supplied by ACM.</p>
    pub fn value(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.value = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The value of the CNAME record to add to your DNS database. This is supplied by ACM.</p>
    pub fn set_value(mut self, input: ::std::option::Option<String>) -> Self {
        self.value = input;
        self
    }
    /// <p>The value of the CNAME record to add to your DNS database. This is supplied by ACM.</p>
    pub fn get_value(&self) -> &::std::option::Option<String> {
        &self.value
    }
    /// Constructs a [`ResourceRecord`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> ResourceRecord {
        ResourceRecord {
            name: self.name.clone(),
            r#type: self.r#type.clone(),
            value: self.value.clone(),
        }
    }
}

pub(crate) static RESOURCE_RECORD_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "ResourceRecord"));

static RESOURCE_RECORD_FIELDS: &[SdkField<ResourceRecord>] = &[
    SdkField::<ResourceRecord>::new(
        shape_id!("com.amazonaws.acm", "ResourceRecord", "Name"),
        MarshallingType::String,
        |input| input.name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_name(Some(value.expect_string()?))),
    ),
    SdkField::<ResourceRecord>::new(
        shape_id!("com.amazonaws.acm", "ResourceRecord", "Type"),
        MarshallingType::String,
        |input| input.r#type.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_type(Some(crate::types::RecordType::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<ResourceRecord>::new(
        shape_id!("com.amazonaws.acm", "ResourceRecord", "Value"),
        MarshallingType::String,
        |input| input.value.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_value(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for ResourceRecord {
    type Builder = crate::types::builders::ResourceRecordBuilder;

    fn schema() -> &'static StructureSchema {
        &RESOURCE_RECORD_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        RESOURCE_RECORD_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use crate::types::{RecordType, ResourceRecord};

    #[test]
    fn record_type_keeps_unknown_text() {
        let record = ResourceRecord::builder()
            .name("_x1.example.com.")
            .r#type(RecordType::from("TXT"))
            .build();
        assert_eq!(record.r#type().map(|t| t.as_str()), Some("TXT"));
        assert!(matches!(record.r#type(), Some(RecordType::Unknown(_))));
    }
}
