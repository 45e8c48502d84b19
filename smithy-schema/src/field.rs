/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Field descriptors.

use crate::{FieldInput, FieldValue, FieldValueError, SdkPojo, Schema, ShapeId, ShapeType};
use smithy_types::date_time::Format;
use std::fmt;

/// How a member value is marshalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MarshallingType {
    /// Strings and string-backed enums.
    String,
    /// 32-bit integers.
    Integer,
    /// 64-bit integers.
    Long,
    /// Booleans.
    Boolean,
    /// Timestamps.
    Instant,
    /// Raw byte payloads.
    SdkBytes,
    /// Nested records.
    SdkPojo,
    /// Lists.
    List,
}

impl MarshallingType {
    /// The shape type values of this marshalling type have.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            MarshallingType::String => ShapeType::String,
            MarshallingType::Integer => ShapeType::Integer,
            MarshallingType::Long => ShapeType::Long,
            MarshallingType::Boolean => ShapeType::Boolean,
            MarshallingType::Instant => ShapeType::Timestamp,
            MarshallingType::SdkBytes => ShapeType::Blob,
            MarshallingType::SdkPojo => ShapeType::Structure,
            MarshallingType::List => ShapeType::List,
        }
    }
}

impl fmt::Display for MarshallingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Where on the wire a member is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MarshallLocation {
    /// In the request or response body.
    Payload,
    /// In an HTTP header.
    Header,
    /// In the query string.
    QueryParam,
    /// In the URI path.
    Path,
}

/// Reads a member from a record.
pub type Getter<S> = for<'a> fn(&'a S) -> Option<FieldValue<'a>>;

/// Stores a member into a builder.
pub type Setter<S> =
    fn(<S as SdkPojo>::Builder, FieldInput) -> Result<<S as SdkPojo>::Builder, FieldValueError>;

/// Descriptor of one member of the record type `S`.
///
/// Descriptors are declared in static tables, one per record type, in member declaration order.
/// The getter returns `None` for members that are absent, including lists that were never set.
pub struct SdkField<S: SdkPojo> {
    id: ShapeId,
    marshalling_type: MarshallingType,
    location: MarshallLocation,
    element: Option<&'static dyn Schema>,
    sensitive: bool,
    getter: Getter<S>,
    setter: Setter<S>,
}

impl<S: SdkPojo> SdkField<S> {
    /// Creates a payload member descriptor. `id` must be a member shape id; its member name is
    /// the wire name.
    pub const fn new(
        id: ShapeId,
        marshalling_type: MarshallingType,
        getter: Getter<S>,
        setter: Setter<S>,
    ) -> Self {
        Self {
            id,
            marshalling_type,
            location: MarshallLocation::Payload,
            element: None,
            sensitive: false,
            getter,
            setter,
        }
    }

    /// Sets the schema of list elements.
    pub const fn with_element(self, element: &'static dyn Schema) -> Self {
        Self {
            element: Some(element),
            ..self
        }
    }

    /// Sets the wire location.
    pub const fn with_location(self, location: MarshallLocation) -> Self {
        Self { location, ..self }
    }

    /// Marks the member as sensitive.
    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    /// Wire name of the member.
    pub fn member_name(&self) -> &'static str {
        self.id.member_name().unwrap_or(self.id.shape_name())
    }

    /// How the member is marshalled.
    pub fn marshalling_type(&self) -> MarshallingType {
        self.marshalling_type
    }

    /// Schema of list elements, for list members.
    pub fn element(&self) -> Option<&'static dyn Schema> {
        self.element
    }

    /// Reads the member from `record`.
    pub fn get<'a>(&self, record: &'a S) -> Option<FieldValue<'a>> {
        (self.getter)(record)
    }

    /// Stores `value` into `builder`.
    pub fn set(&self, builder: S::Builder, value: FieldInput) -> Result<S::Builder, FieldValueError> {
        (self.setter)(builder, value).map_err(|err| err.for_member(self.member_name()))
    }
}

impl<S: SdkPojo> Schema for SdkField<S> {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Member
    }

    fn member_name(&self) -> Option<&str> {
        Some(SdkField::member_name(self))
    }

    fn location(&self) -> Option<MarshallLocation> {
        Some(self.location)
    }

    fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    fn member(&self) -> Option<&dyn Schema> {
        self.element
    }

    fn timestamp_format(&self) -> Option<Format> {
        match self.marshalling_type {
            MarshallingType::Instant => Some(Format::EpochSeconds),
            _ => None,
        }
    }
}

impl<S: SdkPojo> fmt::Debug for SdkField<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkField")
            .field("id", &self.id)
            .field("marshalling_type", &self.marshalling_type)
            .field("location", &self.location)
            .field("element", &self.element.map(|e| e.shape_id()))
            .field("sensitive", &self.sensitive)
            .finish()
    }
}
