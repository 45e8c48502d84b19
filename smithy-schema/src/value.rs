/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Dynamic member values exchanged through field descriptors.

use crate::{FieldValueError, MarshallingType, SdkPojo, SdkStruct};
use smithy_types::{Blob, DateTime};

/// Borrowed, dynamically typed view of a member value.
///
/// Enum-valued members are viewed as [`FieldValue::String`] holding the raw wire text, which may be
/// a value this version of the model does not know.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum FieldValue<'a> {
    /// A string or a string-backed enum.
    String(&'a str),
    /// A 32-bit integer.
    Integer(i32),
    /// A 64-bit integer.
    Long(i64),
    /// A boolean.
    Boolean(bool),
    /// A timestamp.
    Timestamp(DateTime),
    /// A byte payload.
    Blob(&'a Blob),
    /// A nested record.
    Structure(&'a dyn SdkStruct),
    /// A list that was set, possibly empty.
    List(Vec<FieldValue<'a>>),
}

impl<'a> FieldValue<'a> {
    /// Human-readable name of the value kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Long(_) => "long",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Blob(_) => "blob",
            FieldValue::Structure(_) => "structure",
            FieldValue::List(_) => "list",
        }
    }

    /// The marshalling type matching this value.
    pub fn marshalling_type(&self) -> MarshallingType {
        match self {
            FieldValue::String(_) => MarshallingType::String,
            FieldValue::Integer(_) => MarshallingType::Integer,
            FieldValue::Long(_) => MarshallingType::Long,
            FieldValue::Boolean(_) => MarshallingType::Boolean,
            FieldValue::Timestamp(_) => MarshallingType::Instant,
            FieldValue::Blob(_) => MarshallingType::SdkBytes,
            FieldValue::Structure(_) => MarshallingType::SdkPojo,
            FieldValue::List(_) => MarshallingType::List,
        }
    }

    /// Copies the value into its owned input form.
    ///
    /// Nested records become wire-shaped member lists, so the result can be fed back through a
    /// setter of any compatible record.
    pub fn to_input(&self) -> FieldInput {
        match self {
            FieldValue::String(v) => FieldInput::String((*v).to_string()),
            FieldValue::Integer(v) => FieldInput::Integer(*v),
            FieldValue::Long(v) => FieldInput::Long(*v),
            FieldValue::Boolean(v) => FieldInput::Boolean(*v),
            FieldValue::Timestamp(v) => FieldInput::Timestamp(*v),
            FieldValue::Blob(v) => FieldInput::Blob((*v).clone()),
            FieldValue::Structure(v) => FieldInput::Structure(
                v.members()
                    .into_iter()
                    .map(|(schema, value)| {
                        (
                            schema.member_name().unwrap_or_default().to_string(),
                            value.to_input(),
                        )
                    })
                    .collect(),
            ),
            FieldValue::List(items) => {
                FieldInput::List(items.iter().map(FieldValue::to_input).collect())
            }
        }
    }

    fn mismatch(&self, expected: MarshallingType) -> FieldValueError {
        FieldValueError::type_mismatch(expected, self.kind())
    }
}

/// Typed extraction from a [`FieldValue`].
pub trait FromFieldValue<'a>: Sized {
    /// Views `value` as `Self`, failing with [`FieldValueError::TypeMismatch`] when it cannot.
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError>;
}

impl<'a> FromFieldValue<'a> for FieldValue<'a> {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        Ok(value)
    }
}

impl<'a> FromFieldValue<'a> for &'a str {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::String(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::String)),
        }
    }
}

impl<'a> FromFieldValue<'a> for String {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        <&str>::from_field_value(value).map(str::to_string)
    }
}

impl<'a> FromFieldValue<'a> for i32 {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Integer(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Integer)),
        }
    }
}

impl<'a> FromFieldValue<'a> for i64 {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Long(v) => Ok(v),
            FieldValue::Integer(v) => Ok(v.into()),
            other => Err(other.mismatch(MarshallingType::Long)),
        }
    }
}

impl<'a> FromFieldValue<'a> for bool {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Boolean(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Boolean)),
        }
    }
}

impl<'a> FromFieldValue<'a> for DateTime {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Timestamp(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Instant)),
        }
    }
}

impl<'a> FromFieldValue<'a> for &'a Blob {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Blob(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::SdkBytes)),
        }
    }
}

impl<'a, T: SdkPojo> FromFieldValue<'a> for &'a T {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Structure(v) => v
                .as_any()
                .downcast_ref::<T>()
                .ok_or_else(|| FieldValueError::type_mismatch(MarshallingType::SdkPojo, "structure of another type")),
            other => Err(other.mismatch(MarshallingType::SdkPojo)),
        }
    }
}

impl<'a, T: FromFieldValue<'a>> FromFieldValue<'a> for Vec<T> {
    fn from_field_value(value: FieldValue<'a>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field_value).collect(),
            other => Err(other.mismatch(MarshallingType::List)),
        }
    }
}

/// Owned, dynamically typed member value used to populate builders generically.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FieldInput {
    /// A string or the raw text of an enum.
    String(String),
    /// A 32-bit integer.
    Integer(i32),
    /// A 64-bit integer.
    Long(i64),
    /// A boolean.
    Boolean(bool),
    /// A timestamp.
    Timestamp(DateTime),
    /// A byte payload.
    Blob(Blob),
    /// A nested record as `(wire name, value)` pairs.
    Structure(Vec<(String, FieldInput)>),
    /// A list of elements.
    List(Vec<FieldInput>),
}

impl FieldInput {
    /// Human-readable name of the input kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldInput::String(_) => "string",
            FieldInput::Integer(_) => "integer",
            FieldInput::Long(_) => "long",
            FieldInput::Boolean(_) => "boolean",
            FieldInput::Timestamp(_) => "timestamp",
            FieldInput::Blob(_) => "blob",
            FieldInput::Structure(_) => "structure",
            FieldInput::List(_) => "list",
        }
    }

    fn mismatch(&self, expected: MarshallingType) -> FieldValueError {
        FieldValueError::type_mismatch(expected, self.kind())
    }

    /// Takes the input as a string.
    pub fn expect_string(self) -> Result<String, FieldValueError> {
        match self {
            FieldInput::String(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::String)),
        }
    }

    /// Takes the input as a 32-bit integer.
    pub fn expect_integer(self) -> Result<i32, FieldValueError> {
        match self {
            FieldInput::Integer(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Integer)),
        }
    }

    /// Takes the input as a 64-bit integer. Integers widen.
    pub fn expect_long(self) -> Result<i64, FieldValueError> {
        match self {
            FieldInput::Long(v) => Ok(v),
            FieldInput::Integer(v) => Ok(v.into()),
            other => Err(other.mismatch(MarshallingType::Long)),
        }
    }

    /// Takes the input as a boolean.
    pub fn expect_boolean(self) -> Result<bool, FieldValueError> {
        match self {
            FieldInput::Boolean(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Boolean)),
        }
    }

    /// Takes the input as a timestamp.
    pub fn expect_timestamp(self) -> Result<DateTime, FieldValueError> {
        match self {
            FieldInput::Timestamp(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::Instant)),
        }
    }

    /// Takes the input as a byte payload.
    pub fn expect_blob(self) -> Result<Blob, FieldValueError> {
        match self {
            FieldInput::Blob(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::SdkBytes)),
        }
    }

    /// Takes the input as the members of a nested record.
    pub fn expect_structure(self) -> Result<Vec<(String, FieldInput)>, FieldValueError> {
        match self {
            FieldInput::Structure(v) => Ok(v),
            other => Err(other.mismatch(MarshallingType::SdkPojo)),
        }
    }

    /// Takes the input as a list, converting each element with `convert`.
    pub fn expect_list_of<T>(
        self,
        convert: impl FnMut(FieldInput) -> Result<T, FieldValueError>,
    ) -> Result<Vec<T>, FieldValueError> {
        match self {
            FieldInput::List(items) => items.into_iter().map(convert).collect(),
            other => Err(other.mismatch(MarshallingType::List)),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::String(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::String(value)
    }
}

impl From<i32> for FieldInput {
    fn from(value: i32) -> Self {
        FieldInput::Integer(value)
    }
}

impl From<i64> for FieldInput {
    fn from(value: i64) -> Self {
        FieldInput::Long(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Boolean(value)
    }
}

impl From<DateTime> for FieldInput {
    fn from(value: DateTime) -> Self {
        FieldInput::Timestamp(value)
    }
}

impl From<Blob> for FieldInput {
    fn from(value: Blob) -> Self {
        FieldInput::Blob(value)
    }
}

impl<T: Into<FieldInput>> From<Vec<T>> for FieldInput {
    fn from(value: Vec<T>) -> Self {
        FieldInput::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod test {
    use super::{FieldInput, FieldValue, FromFieldValue};
    use crate::{FieldValueError, MarshallingType};
    use smithy_types::{Blob, DateTime};

    #[test]
    fn scalar_extraction() {
        assert_eq!(<&str>::from_field_value(FieldValue::String("a")), Ok("a"));
        assert_eq!(i64::from_field_value(FieldValue::Integer(5)), Ok(5));
        assert_eq!(bool::from_field_value(FieldValue::Boolean(true)), Ok(true));
        let blob = Blob::new("abc");
        assert_eq!(<&Blob>::from_field_value(FieldValue::Blob(&blob)), Ok(&blob));
        assert_eq!(
            DateTime::from_field_value(FieldValue::Timestamp(DateTime::from_secs(5))),
            Ok(DateTime::from_secs(5))
        );
    }

    #[test]
    fn list_extraction() {
        let value = FieldValue::List(vec![FieldValue::String("a"), FieldValue::String("b")]);
        assert_eq!(
            Vec::<String>::from_field_value(value),
            Ok(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn mismatch_reports_kinds() {
        assert_eq!(
            i32::from_field_value(FieldValue::String("7")),
            Err(FieldValueError::TypeMismatch {
                member: None,
                expected: MarshallingType::Integer,
                found: "string",
            })
        );
        assert_eq!(
            FieldInput::from(true).expect_string(),
            Err(FieldValueError::TypeMismatch {
                member: None,
                expected: MarshallingType::String,
                found: "boolean",
            })
        );
    }

    #[test]
    fn input_conversions() {
        assert_eq!(FieldInput::from(3).expect_long(), Ok(3));
        assert_eq!(
            FieldInput::from(vec!["a", "b"]).expect_list_of(FieldInput::expect_string),
            Ok(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            FieldValue::List(vec![FieldValue::Integer(1)]).to_input(),
            FieldInput::List(vec![FieldInput::Integer(1)])
        );
    }
}
