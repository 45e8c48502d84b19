/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{shape_id, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};

/// <p>Structure that contains options for your certificate. Currently, you can use this only to specify whether to opt in to or out of certificate transparency logging.</p>
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CertificateOptions {
    pub(crate) certificate_transparency_logging_preference: ::std::option::Option<crate::types::CertificateTransparencyLoggingPreference>,
}
impl CertificateOptions {
    /// <p>You can opt out of certificate transparency logging by specifying the <code>DISABLED</code> option. Opt in by specifying <code>ENABLED</code>.</p>
    pub fn certificate_transparency_logging_preference(&self) -> ::std::option::Option<&crate::types::CertificateTransparencyLoggingPreference> {
        self.certificate_transparency_logging_preference.as_ref()
    }
}
impl CertificateOptions {
    /// Creates a new builder-style object to manufacture [`CertificateOptions`].
    pub fn builder() -> crate::types::builders::CertificateOptionsBuilder {
        crate::types::builders::CertificateOptionsBuilder::default()
    }

    /// Creates a builder seeded with every member of this value.
    pub fn to_builder(&self) -> crate::types::builders::CertificateOptionsBuilder {
        crate::types::builders::CertificateOptionsBuilder {
            certificate_transparency_logging_preference: self.certificate_transparency_logging_preference.clone(),
        }
    }
}

/// A builder for [`CertificateOptions`].
#[non_exhaustive]
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CertificateOptionsBuilder {
    pub(crate) certificate_transparency_logging_preference: ::std::option::Option<crate::types::CertificateTransparencyLoggingPreference>,
}
impl CertificateOptionsBuilder {
    /// <p>You can opt out of certificate transparency logging by specifying the <code>DISABLED</code> option. Opt in by specifying <code>ENABLED</code>.</p>
    pub fn certificate_transparency_logging_preference(mut self, input: crate::types::CertificateTransparencyLoggingPreference) -> Self {
        self.certificate_transparency_logging_preference = ::std::option::Option::Some(input);
        self
    }
    /// <p>You can opt out of certificate transparency logging by specifying the <code>DISABLED</code> option. Opt in by specifying <code>ENABLED</code>.</p>
    pub fn set_certificate_transparency_logging_preference(mut self, input: ::std::option::Option<crate::types::CertificateTransparencyLoggingPreference>) -> Self {
        self.certificate_transparency_logging_preference = input;
        self
    }
    /// <p>You can opt out of certificate transparency logging by specifying the <code>DISABLED</code> option. Opt in by specifying <code>ENABLED</code>.</p>
    pub fn get_certificate_transparency_logging_preference(&self) -> &::std::option::Option<crate::types::CertificateTransparencyLoggingPreference> {
        &self.certificate_transparency_logging_preference
    }
    /// Constructs a [`CertificateOptions`] from the current state of the builder.
    ///
    /// The builder is left untouched and can be modified and built again.
    pub fn build(&self) -> CertificateOptions {
        CertificateOptions {
            certificate_transparency_logging_preference: self.certificate_transparency_logging_preference.clone(),
        }
    }
}

pub(crate) static CERTIFICATE_OPTIONS_SCHEMA: StructureSchema =
    StructureSchema::new(shape_id!("com.amazonaws.acm", "CertificateOptions"));

static CERTIFICATE_OPTIONS_FIELDS: &[SdkField<CertificateOptions>] = &[
    SdkField::<CertificateOptions>::new(
        shape_id!("com.amazonaws.acm", "CertificateOptions", "CertificateTransparencyLoggingPreference"),
        MarshallingType::String,
        |input| input.certificate_transparency_logging_preference.as_ref().map(|v| FieldValue::String(v.as_str())),
        |builder, value| Ok(builder.set_certificate_transparency_logging_preference(Some(crate::types::CertificateTransparencyLoggingPreference::from(value.expect_string()?.as_str())))),
    ),
];

impl SdkPojo for CertificateOptions {
    type Builder = crate::types::builders::CertificateOptionsBuilder;

    fn schema() -> &'static StructureSchema {
        &CERTIFICATE_OPTIONS_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        CERTIFICATE_OPTIONS_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
