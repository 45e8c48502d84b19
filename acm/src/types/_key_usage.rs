/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>The Key Usage X.509 v3 extension defines the purpose of the public key contained in the certificate.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KeyUsage {
    pub(crate) name: ::std::option::Option<crate::types::KeyUsageName>,
}
impl KeyUsage {
    /// <p>A string value that contains a Key Usage extension name.</p>
    pub fn name(&self) -> ::std::option::Option<&crate::types::KeyUsageName> {
        self.name.as_ref()
    }
}
impl KeyUsage {
    /// Creates a new builder-style object to manufacture [`KeyUsage`].
    pub fn builder() -> crate::types::builders::KeyUsageBuilder {
        crate::types::builders::KeyUsageBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::KeyUsageBuilder {
        crate::types::builders::KeyUsageBuilder {
            name: self.name.clone(),
        }
    }
}

/// A builder for [`KeyUsage`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct KeyUsageBuilder {
    pub(crate) name: ::std::option::Option<crate::types::KeyUsageName>,
}
impl KeyUsageBuilder {
    /// <p>A string value that contains a Key Usage extension name.</p>
    pub fn name(mut self, input: crate::types::KeyUsageName) -> Self {
        self.name = ::std::option::Option::Some(input);
        self
    }
    /// <p>A string value that contains a Key Usage extension name.</p>
    pub fn set_name(mut self, input: ::std::option::Option<crate::types::KeyUsageName>) -> Self {
        self.name = input;
        self
    }
    /// <p>A string value that contains a Key Usage extension name.</p>
    pub fn get_name(&self) -> &::std::option::Option<crate::types::KeyUsageName> {
        &self.name
    }
    /// Constructs a [`KeyUsage`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> KeyUsage {
        KeyUsage {
            name: self.name.clone(),
        }
    }
}

pub(crate) static KEY_USAGE_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "KeyUsage"));

static KEY_USAGE_FIELDS: &[SdkField<KeyUsage>] = &[
    SdkField::<KeyUsage>::new(
        shape_id!("com.amazonaws.acm", "KeyUsage", "Name"),
        MarshallingType::String,
        |input| input.name.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_name(Some(crate::types::KeyUsageName::from(value.expect_string()?.as_str())))),
    ),
];

impl SdkPojo for KeyUsage {
    type Builder = crate::types::builders::KeyUsageBuilder;

    fn schema() -> &'static StructureSchema {
        &KEY_USAGE_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        KEY_USAGE_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
