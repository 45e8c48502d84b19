/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{FieldInput, FieldValue, FieldValueError, FromFieldValue, SdkField, Schema, StructureSchema};
use std::any::Any;
use std::fmt;

/// A model record described by a static field descriptor table.
///
/// Implemented by every model structure. The provided methods give generic, name-based access to
/// members; lookups are by wire name.
pub trait SdkPojo: fmt::Debug + Send + Sync + Sized + 'static {
    /// The builder that produces this record.
    type Builder: Default;

    /// Schema of the record.
    fn schema() -> &'static StructureSchema;

    /// Member descriptors in declaration order.
    fn sdk_fields() -> &'static [SdkField<Self>];

    /// Snapshots a builder into a record.
    fn from_builder(builder: Self::Builder) -> Self;

    /// Looks up the descriptor of the member with wire name `name`.
    fn sdk_field(name: &str) -> Option<&'static SdkField<Self>> {
        Self::sdk_fields().iter().find(|field| field.member_name() == name)
    }

    /// Reads the member with wire name `name` as a `T`.
    ///
    /// Returns `Ok(None)` when the name is unknown or the member is absent (lists that were never
    /// set count as absent). Returns [`FieldValueError::TypeMismatch`] when the member is present
    /// but cannot be viewed as `T`.
    fn get_value_for_field<'a, T: FromFieldValue<'a>>(
        &'a self,
        name: &str,
    ) -> Result<Option<T>, FieldValueError> {
        let field = match Self::sdk_field(name) {
            Some(field) => field,
            None => {
                tracing::debug!(
                    shape = %Self::schema().shape_id(),
                    member = name,
                    "lookup of unknown member"
                );
                return Ok(None);
            }
        };
        match field.get(self) {
            None => Ok(None),
            Some(value) => T::from_field_value(value).map(Some).map_err(|err| {
                let err = err.for_member(field.member_name());
                tracing::debug!(shape = %Self::schema().shape_id(), error = %err, "member type mismatch");
                err
            }),
        }
    }

    /// Stores `value` into the member of `builder` with wire name `name`.
    ///
    /// Unknown names leave the builder unchanged so that data from newer service models can be
    /// applied to older records.
    fn set_field(
        builder: Self::Builder,
        name: &str,
        value: FieldInput,
    ) -> Result<Self::Builder, FieldValueError> {
        match Self::sdk_field(name) {
            Some(field) => field.set(builder, value),
            None => {
                tracing::debug!(
                    shape = %Self::schema().shape_id(),
                    member = name,
                    "ignoring unknown member"
                );
                Ok(builder)
            }
        }
    }

    /// Builds a record from `(wire name, value)` pairs.
    fn from_members(members: Vec<(String, FieldInput)>) -> Result<Self, FieldValueError> {
        let mut builder = Self::Builder::default();
        for (name, value) in members {
            builder = Self::set_field(builder, &name, value)?;
        }
        Ok(Self::from_builder(builder))
    }

    /// Builds a record from a [`FieldInput::Structure`].
    fn from_input(input: FieldInput) -> Result<Self, FieldValueError> {
        Self::from_members(input.expect_structure()?)
    }
}

/// Object-safe view of any [`SdkPojo`], used for nested records in [`FieldValue`].
pub trait SdkStruct: Any + fmt::Debug + Send + Sync {
    /// Schema of the record.
    fn struct_schema(&self) -> &'static StructureSchema;

    /// Present members in declaration order, each with its member schema.
    fn members(&self) -> Vec<(&'static dyn Schema, FieldValue<'_>)>;

    /// Reads a member by wire name.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Upcasts for downcasting to the concrete record type.
    fn as_any(&self) -> &dyn Any;
}

impl<T: SdkPojo> SdkStruct for T {
    fn struct_schema(&self) -> &'static StructureSchema {
        T::schema()
    }

    fn members(&self) -> Vec<(&'static dyn Schema, FieldValue<'_>)> {
        T::sdk_fields()
            .iter()
            .filter_map(|field| {
                field
                    .get(self)
                    .map(|value| (field as &'static dyn Schema, value))
            })
            .collect()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        T::sdk_field(name).and_then(|field| field.get(self))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::STRING_MEMBER;
    use crate::test_util::{Part, Widget};
    use crate::{
        FieldInput, FieldValue, FieldValueError, MarshallLocation, MarshallingType, Schema,
        SchemaExt, SdkPojo, SdkStruct,
    };
    use pretty_assertions::assert_eq;
    use smithy_types::date_time::Format;
    use smithy_types::{Blob, DateTime};
    use tracing_test::traced_test;

    fn sample() -> Widget {
        Widget::builder()
            .name("w")
            .size(3)
            .created_at(DateTime::from_secs(1576540098))
            .secret(Blob::new("hunter2"))
            .tags("a")
            .parts(Part::builder().label("p").build())
            .build()
    }

    #[test]
    fn field_table_describes_members() {
        let names: Vec<_> = Widget::sdk_fields().iter().map(|f| f.member_name()).collect();
        assert_eq!(names, vec!["Name", "Size", "CreatedAt", "Secret", "Tags", "Parts"]);

        let secret = Widget::sdk_field("Secret").unwrap();
        assert!(secret.is_sensitive());
        assert!(secret.is_member());
        assert_eq!(secret.marshalling_type(), MarshallingType::SdkBytes);
        assert_eq!(secret.location(), Some(MarshallLocation::Payload));
        assert_eq!(secret.location_name(), Some("Secret"));
        assert_eq!(secret.shape_id().as_str(), "test#Widget$Secret");

        let tags = Widget::sdk_field("Tags").unwrap();
        assert!(!tags.is_sensitive());
        assert_eq!(
            tags.element().map(|e| e.shape_id()),
            Some(STRING_MEMBER.shape_id())
        );
        assert_eq!(
            Widget::sdk_field("Parts").unwrap().member().map(|e| e.shape_id().as_str()),
            Some("test#Part")
        );
        assert_eq!(
            Widget::sdk_field("CreatedAt").unwrap().timestamp_format(),
            Some(Format::EpochSeconds)
        );
        assert!(Widget::sdk_field("Unknown").is_none());
    }

    #[test]
    fn get_value_for_field_reads_typed_values() {
        let widget = sample();
        assert_eq!(widget.get_value_for_field::<&str>("Name"), Ok(Some("w")));
        assert_eq!(widget.get_value_for_field::<i32>("Size"), Ok(Some(3)));
        assert_eq!(widget.get_value_for_field::<i64>("Size"), Ok(Some(3)));
        assert_eq!(
            widget.get_value_for_field::<Vec<String>>("Tags"),
            Ok(Some(vec!["a".to_string()]))
        );
        let parts = widget.get_value_for_field::<Vec<&Part>>("Parts").unwrap().unwrap();
        assert_eq!(parts[0].label.as_deref(), Some("p"));
    }

    #[test]
    fn get_value_for_field_absent_and_unknown() {
        let widget = Widget::builder().build();
        assert_eq!(widget.get_value_for_field::<&str>("Name"), Ok(None));
        assert_eq!(widget.get_value_for_field::<Vec<String>>("Tags"), Ok(None));
        assert_eq!(widget.get_value_for_field::<&str>("NotAMember"), Ok(None));
    }

    #[test]
    #[traced_test]
    fn get_value_for_field_type_mismatch() {
        let widget = sample();
        assert_eq!(
            widget.get_value_for_field::<bool>("Name"),
            Err(FieldValueError::TypeMismatch {
                member: Some("Name"),
                expected: MarshallingType::Boolean,
                found: "string",
            })
        );
        assert!(logs_contain("member type mismatch"));
    }

    #[test]
    #[traced_test]
    fn set_field_ignores_unknown_members() {
        let built = Widget::from_members(vec![
            ("Name".to_string(), FieldInput::from("w")),
            ("AddedLater".to_string(), FieldInput::from(7)),
        ])
        .unwrap();
        assert_eq!(built, Widget::builder().name("w").build());
        assert!(logs_contain("ignoring unknown member"));
        assert!(logs_contain("AddedLater"));
    }

    #[test]
    fn set_field_reports_member_of_bad_input() {
        let err = Widget::set_field(Widget::builder(), "Size", FieldInput::from("big")).unwrap_err();
        assert_eq!(
            err,
            FieldValueError::TypeMismatch {
                member: Some("Size"),
                expected: MarshallingType::Integer,
                found: "string",
            }
        );
    }

    #[test]
    fn members_round_trip_through_inputs() {
        let widget = sample();
        let input = FieldValue::Structure(&widget).to_input();
        assert_eq!(Widget::from_input(input), Ok(widget));
    }

    #[test]
    fn dynamic_view_skips_absent_members() {
        let widget = Widget::builder().name("w").set_tags(Some(vec![])).build();
        let dynamic: &dyn SdkStruct = &widget;
        let present: Vec<_> = dynamic
            .members()
            .into_iter()
            .map(|(schema, value)| (schema.member_name().unwrap().to_string(), value.kind()))
            .collect();
        assert_eq!(
            present,
            vec![
                ("Name".to_string(), "string"),
                ("Tags".to_string(), "list"),
            ]
        );
        assert_eq!(dynamic.struct_schema().shape_id().as_str(), "test#Widget");
        assert!(dynamic.field_value("Size").is_none());
        assert!(dynamic.as_any().downcast_ref::<Widget>().is_some());
    }
}
