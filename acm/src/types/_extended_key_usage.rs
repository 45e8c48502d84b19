/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>The Extended Key Usage X.509 v3 extension defines one or more purposes for which the public key can be used. This is in addition to or in place of the basic purposes specified by the Key Usage extension.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ExtendedKeyUsage {
    pub(crate) name: ::std::option::Option<crate::types::ExtendedKeyUsageName>,
    pub(crate) oid: ::std::option::Option<String>,
}
impl ExtendedKeyUsage {
    /// <p>The name of an Extended Key Usage value.</p>
    pub fn name(&self) -> ::std::option::Option<&crate::types::ExtendedKeyUsageName> {
        self.name.as_ref()
    }

    /// <p>An object identifier (OID) for the extension value. OIDs are strings of numbers separated by periods.</p>
    pub fn oid(&self) -> ::std::option::Option<&str> {
        self.oid.as_deref()
    }
}
impl ExtendedKeyUsage {
    /// Creates a new builder-style object to manufacture [`ExtendedKeyUsage`].
    pub fn builder() -> crate::types::builders::ExtendedKeyUsageBuilder {
        crate::types::builders::ExtendedKeyUsageBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::ExtendedKeyUsageBuilder {
        crate::types::builders::ExtendedKeyUsageBuilder {
            name: self.name.clone(),
            oid: self.oid.clone(),
        }
    }
}

/// A builder for [`ExtendedKeyUsage`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ExtendedKeyUsageBuilder {
    pub(crate) name: ::std::option::Option<crate::types::ExtendedKeyUsageName>,
    pub(crate) oid: ::std::option::Option<String>,
}
impl ExtendedKeyUsageBuilder {
    /// <p>The name of an Extended Key Usage value.</p>
    pub fn name(mut self, input: crate::types::ExtendedKeyUsageName) -> Self {
        self.name = ::std::option::Option::Some(input);
        self
    }
    /// <p>The name of an Extended Key Usage value.</p>
    pub fn set_name(mut self, input: ::std::option::Option<crate::types::ExtendedKeyUsageName>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of an Extended Key Usage value.</p>
    pub fn get_name(&self) -> &::std::option::Option<crate::types::ExtendedKeyUsageName> {
        &self.name
    }
    /// <p>An object identifier (OID) for the extension value. OIDs are strings of numbers separated by periods.</p>
    pub fn oid(mut self, input: impl ::std::convert::Into<String>) -> Self {
        self.oid = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An object identifier (OID) for the extension value. OIDs are strings of numbers separated by periods.</p>
    pub fn set_oid(mut self, input: ::std::option::Option<String>) -> Self {
        self.oid = input;
        self
    }
    /// <p>An object identifier (OID) for the extension value. OIDs are strings of numbers separated by periods.</p>
    pub fn get_oid(&self) -> &::std::option::Option<String> {
        &self.oid
    }
    /// Constructs a [`ExtendedKeyUsage`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> ExtendedKeyUsage {
        ExtendedKeyUsage {
            name: self.name.clone(),
            oid: self.oid.clone(),
        }
    }
}

pub(crate) static EXTENDED_KEY_USAGE_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "ExtendedKeyUsage"));

static EXTENDED_KEY_USAGE_FIELDS: &[SdkField<ExtendedKeyUsage>] = &[
    SdkField::<ExtendedKeyUsage>::new(
        shape_id!("com.amazonaws.acm", "ExtendedKeyUsage", "Name"),
        MarshallingType::String,
        |input| input.name.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_name(Some(crate::types::ExtendedKeyUsageName::from(value.expect_string()?.as_str())))),
    ),
    SdkField::<ExtendedKeyUsage>::new(
        shape_id!("com.amazonaws.acm", "ExtendedKeyUsage", "OID"),
        MarshallingType::String,
        |input| input.oid.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.set_oid(Some(value.expect_string()?))),
    ),
];

impl SdkPojo for ExtendedKeyUsage {
    type Builder = crate::types::builders::ExtendedKeyUsageBuilder;

    fn schema() -> &'static StructureSchema {
        &EXTENDED_KEY_USAGE_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        EXTENDED_KEY_USAGE_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
