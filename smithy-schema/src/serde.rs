/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Serialization interface for schema-described records.
//!
//! A wire marshaller implements [`ShapeSerializer`]; every [`SdkPojo`] can then be written through it
//! with [`SerializableStruct::serialize`], which walks the record's field descriptor table.

use crate::{FieldValue, Schema, SdkPojo, SdkStruct};
use smithy_types::{Blob, DateTime};
use std::error::Error;

/// Serializes Smithy shapes to a target format.
///
/// The serializer accepts a schema along with the value to provide additional
/// information about how to serialize the value (e.g., timestamp format, wire name).
pub trait ShapeSerializer {
    /// The serialization target type (e.g., `Vec<u8>`, `String`).
    type Output;

    /// The error type returned by serialization operations.
    type Error: Error;

    /// Finalizes the serialization and returns the serialized output.
    fn finish(self) -> Result<Self::Output, Self::Error>;

    /// Writes a structure. The callback writes each member.
    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a list. The callback writes each element.
    fn write_list<F>(&mut self, schema: &dyn Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a boolean value.
    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error>;

    /// Writes an integer (i32) value.
    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error>;

    /// Writes a long (i64) value.
    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error>;

    /// Writes a string value.
    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error>;

    /// Writes a blob (byte array) value.
    fn write_blob(&mut self, schema: &dyn Schema, value: &Blob) -> Result<(), Self::Error>;

    /// Writes a timestamp value.
    fn write_timestamp(&mut self, schema: &dyn Schema, value: &DateTime)
        -> Result<(), Self::Error>;
}

/// Trait for structures that can be serialized.
///
/// Implemented for every [`SdkPojo`]. Members are written in declaration order; absent members
/// and lists that were never set are skipped. Sensitive members are written like any other.
pub trait SerializableStruct {
    /// Serializes this structure using the provided serializer.
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error>;
}

impl<T: SdkPojo> SerializableStruct for T {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        write_struct(serializer, T::schema(), self)
    }
}

fn write_struct<S: ShapeSerializer>(
    serializer: &mut S,
    schema: &dyn Schema,
    value: &dyn SdkStruct,
) -> Result<(), S::Error> {
    serializer.write_struct(schema, |ser| {
        for (member, value) in value.members() {
            write_value(ser, member, &value)?;
        }
        Ok(())
    })
}

fn write_value<S: ShapeSerializer>(
    serializer: &mut S,
    schema: &dyn Schema,
    value: &FieldValue<'_>,
) -> Result<(), S::Error> {
    match value {
        FieldValue::String(v) => serializer.write_string(schema, v),
        FieldValue::Integer(v) => serializer.write_integer(schema, *v),
        FieldValue::Long(v) => serializer.write_long(schema, *v),
        FieldValue::Boolean(v) => serializer.write_boolean(schema, *v),
        FieldValue::Timestamp(v) => serializer.write_timestamp(schema, v),
        FieldValue::Blob(v) => serializer.write_blob(schema, v),
        FieldValue::Structure(v) => write_struct(serializer, schema, *v),
        FieldValue::List(items) => {
            let element = schema.member().unwrap_or(schema);
            serializer.write_list(schema, |ser| {
                for item in items {
                    write_value(ser, element, item)?;
                }
                Ok(())
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::{SerializableStruct, ShapeSerializer};
    use crate::test_util::{Part, Widget};
    use crate::Schema;
    use pretty_assertions::assert_eq;
    use smithy_types::{Blob, DateTime};
    use std::fmt;

    #[derive(Debug)]
    struct MockError(String);

    impl fmt::Display for MockError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for MockError {}

    #[derive(Default)]
    struct MockSerializer {
        output: Vec<String>,
    }

    impl MockSerializer {
        fn record(&mut self, schema: &dyn Schema, value: impl fmt::Display) {
            self.output.push(format!(
                "{}={}",
                schema.location_name().unwrap_or("?"),
                value
            ));
        }
    }

    impl ShapeSerializer for MockSerializer {
        type Output = Vec<String>;
        type Error = MockError;

        fn finish(self) -> Result<Self::Output, Self::Error> {
            Ok(self.output)
        }

        fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
        where
            F: FnOnce(&mut Self) -> Result<(), Self::Error>,
        {
            self.output.push(format!("struct({})", schema.shape_id()));
            write_members(self)?;
            self.output.push("end_struct".to_string());
            Ok(())
        }

        fn write_list<F>(&mut self, schema: &dyn Schema, write_elements: F) -> Result<(), Self::Error>
        where
            F: FnOnce(&mut Self) -> Result<(), Self::Error>,
        {
            self.output.push(format!("list({})", schema.shape_id()));
            write_elements(self)?;
            self.output.push("end_list".to_string());
            Ok(())
        }

        fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error> {
            self.record(schema, value);
            Ok(())
        }

        fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
            self.record(schema, value);
            Ok(())
        }

        fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
            self.record(schema, value);
            Ok(())
        }

        fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
            self.record(schema, value);
            Ok(())
        }

        fn write_blob(&mut self, schema: &dyn Schema, value: &Blob) -> Result<(), Self::Error> {
            self.record(schema, format!("{:?}", value.as_ref()));
            Ok(())
        }

        fn write_timestamp(
            &mut self,
            schema: &dyn Schema,
            value: &DateTime,
        ) -> Result<(), Self::Error> {
            self.record(schema, value.secs());
            Ok(())
        }
    }

    fn serialize(widget: &Widget) -> Vec<String> {
        let mut ser = MockSerializer::default();
        widget.serialize(&mut ser).unwrap();
        ser.finish().unwrap()
    }

    #[test]
    fn absent_members_are_skipped() {
        let widget = Widget::builder().name("w").build();
        assert_eq!(
            serialize(&widget),
            vec!["struct(test#Widget)", "Name=w", "end_struct"]
        );
    }

    #[test]
    fn members_are_written_in_declaration_order() {
        let widget = Widget::builder()
            .secret(Blob::new(vec![1, 2]))
            .tags("b")
            .tags("a")
            .size(3)
            .name("w")
            .created_at(DateTime::from_secs(10))
            .parts(Part::builder().label("p1").build())
            .build();
        assert_eq!(
            serialize(&widget),
            vec![
                "struct(test#Widget)",
                "Name=w",
                "Size=3",
                "CreatedAt=10",
                "Secret=[1, 2]",
                "list(test#Widget$Tags)",
                "member=b",
                "member=a",
                "end_list",
                "list(test#Widget$Parts)",
                "struct(test#Part)",
                "Label=p1",
                "end_struct",
                "end_list",
                "end_struct",
            ]
        );
    }

    #[test]
    fn explicitly_empty_lists_are_written() {
        let widget = Widget::builder().set_tags(Some(vec![])).build();
        assert_eq!(
            serialize(&widget),
            vec![
                "struct(test#Widget)",
                "list(test#Widget$Tags)",
                "end_list",
                "end_struct"
            ]
        );
    }
}
