/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Small hand-written records used by the unit tests of this crate.

use crate::prelude::STRING_MEMBER;
use crate::{shape_id, FieldInput, FieldValue, MarshallingType, SdkField, SdkPojo, StructureSchema};
use smithy_types::{Blob, DateTime, TrackedList};

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Part {
    pub(crate) label: Option<String>,
}

impl Part {
    pub(crate) fn builder() -> PartBuilder {
        PartBuilder::default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct PartBuilder {
    label: Option<String>,
}

impl PartBuilder {
    pub(crate) fn label(mut self, input: impl Into<String>) -> Self {
        self.label = Some(input.into());
        self
    }

    pub(crate) fn build(self) -> Part {
        Part { label: self.label }
    }
}

static PART_SCHEMA: StructureSchema = StructureSchema::new(shape_id!("test", "Part"));

static PART_FIELDS: &[SdkField<Part>] = &[SdkField::<Part>::new(
    shape_id!("test", "Part", "Label"),
    MarshallingType::String,
    |input| input.label.as_deref().map(FieldValue::String),
    |mut builder, value| {
        builder.label = Some(value.expect_string()?);
        Ok(builder)
    },
)];

impl SdkPojo for Part {
    type Builder = PartBuilder;

    fn schema() -> &'static StructureSchema {
        &PART_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        PART_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Widget {
    pub(crate) name: Option<String>,
    pub(crate) size: Option<i32>,
    pub(crate) created_at: Option<DateTime>,
    pub(crate) secret: Option<Blob>,
    pub(crate) tags: TrackedList<String>,
    pub(crate) parts: TrackedList<Part>,
}

impl Widget {
    pub(crate) fn builder() -> WidgetBuilder {
        WidgetBuilder::default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct WidgetBuilder {
    name: Option<String>,
    size: Option<i32>,
    created_at: Option<DateTime>,
    secret: Option<Blob>,
    tags: Option<Vec<String>>,
    parts: Option<Vec<Part>>,
}

impl WidgetBuilder {
    pub(crate) fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    pub(crate) fn size(mut self, input: i32) -> Self {
        self.size = Some(input);
        self
    }

    pub(crate) fn created_at(mut self, input: DateTime) -> Self {
        self.created_at = Some(input);
        self
    }

    pub(crate) fn secret(mut self, input: Blob) -> Self {
        self.secret = Some(input);
        self
    }

    pub(crate) fn tags(mut self, input: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    pub(crate) fn set_tags(mut self, input: Option<Vec<String>>) -> Self {
        self.tags = input;
        self
    }

    pub(crate) fn parts(mut self, input: Part) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(input);
        self
    }

    pub(crate) fn set_parts(mut self, input: Option<Vec<Part>>) -> Self {
        self.parts = input;
        self
    }

    pub(crate) fn build(self) -> Widget {
        Widget {
            name: self.name,
            size: self.size,
            created_at: self.created_at,
            secret: self.secret,
            tags: self.tags.into(),
            parts: self.parts.into(),
        }
    }
}

static WIDGET_SCHEMA: StructureSchema = StructureSchema::new(shape_id!("test", "Widget"));

static WIDGET_FIELDS: &[SdkField<Widget>] = &[
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "Name"),
        MarshallingType::String,
        |input| input.name.as_deref().map(FieldValue::String),
        |builder, value| Ok(builder.name(value.expect_string()?)),
    ),
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "Size"),
        MarshallingType::Integer,
        |input| input.size.map(FieldValue::Integer),
        |builder, value| Ok(builder.size(value.expect_integer()?)),
    ),
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "CreatedAt"),
        MarshallingType::Instant,
        |input| input.created_at.map(FieldValue::Timestamp),
        |builder, value| Ok(builder.created_at(value.expect_timestamp()?)),
    ),
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "Secret"),
        MarshallingType::SdkBytes,
        |input| input.secret.as_ref().map(FieldValue::Blob),
        |builder, value| Ok(builder.secret(value.expect_blob()?)),
    )
    .sensitive(),
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "Tags"),
        MarshallingType::List,
        |input| {
            input
                .tags
                .as_option()
                .map(|items| FieldValue::List(items.iter().map(|v| FieldValue::String(v)).collect()))
        },
        |builder, value| {
            Ok(builder.set_tags(Some(value.expect_list_of(FieldInput::expect_string)?)))
        },
    )
    .with_element(&STRING_MEMBER),
    SdkField::<Widget>::new(
        shape_id!("test", "Widget", "Parts"),
        MarshallingType::List,
        |input| {
            input.parts.as_option().map(|items| {
                FieldValue::List(items.iter().map(|v| FieldValue::Structure(v)).collect())
            })
        },
        |builder, value| Ok(builder.set_parts(Some(value.expect_list_of(Part::from_input)?))),
    )
    .with_element(&PART_SCHEMA),
];

impl SdkPojo for Widget {
    type Builder = WidgetBuilder;

    fn schema() -> &'static StructureSchema {
        &WIDGET_SCHEMA
    }

    fn sdk_fields() -> &'static [SdkField<Self>] {
        WIDGET_FIELDS
    }

    fn from_builder(builder: Self::Builder) -> Self {
        builder.build()
    }
}
