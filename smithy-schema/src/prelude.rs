/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Prelude schemas for built-in Smithy types.
//!
//! Besides the plain prelude shapes, this module provides [`STRING_MEMBER`], the element schema
//! for lists of strings. Elements of a list are serialized under the implicit member name
//! [`LIST_MEMBER_NAME`].

use crate::{Schema, ShapeId, ShapeType};

/// Member name of list elements.
pub const LIST_MEMBER_NAME: &str = "member";

/// A simple schema implementation for prelude types.
#[derive(Debug)]
pub struct PreludeSchema {
    id: ShapeId,
    shape_type: ShapeType,
    member_name: Option<&'static str>,
}

impl PreludeSchema {
    /// Creates a new prelude schema.
    pub const fn new(id: ShapeId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            member_name: None,
        }
    }

    /// Creates a list element schema targeting a prelude type.
    pub const fn list_member(id: ShapeId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            member_name: Some(LIST_MEMBER_NAME),
        }
    }
}

impl Schema for PreludeSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    fn member_name(&self) -> Option<&str> {
        self.member_name
    }
}

// Static schemas for prelude types to allow static lifetime references

/// Schema for `smithy.api#String`
pub static STRING: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#String", "smithy.api", "String"),
    ShapeType::String,
);

/// Schema for `smithy.api#Boolean`
pub static BOOLEAN: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Boolean", "smithy.api", "Boolean"),
    ShapeType::Boolean,
);

/// Schema for `smithy.api#Integer`
pub static INTEGER: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Integer", "smithy.api", "Integer"),
    ShapeType::Integer,
);

/// Schema for `smithy.api#Long`
pub static LONG: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Long", "smithy.api", "Long"),
    ShapeType::Long,
);

/// Schema for `smithy.api#Blob`
pub static BLOB: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Blob", "smithy.api", "Blob"),
    ShapeType::Blob,
);

/// Schema for `smithy.api#Timestamp`
pub static TIMESTAMP: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Timestamp", "smithy.api", "Timestamp"),
    ShapeType::Timestamp,
);

/// Element schema for lists of strings (and of string-backed enums).
pub static STRING_MEMBER: PreludeSchema = PreludeSchema::list_member(
    ShapeId::from_static("smithy.api#String", "smithy.api", "String"),
    ShapeType::String,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaExt;

    #[test]
    fn test_string_schema() {
        assert_eq!(STRING.shape_id().as_str(), "smithy.api#String");
        assert_eq!(STRING.shape_type(), ShapeType::String);
        assert!(STRING.is_string());
        assert_eq!(STRING.member_name(), None);
    }

    #[test]
    fn test_list_member_schema() {
        assert_eq!(STRING_MEMBER.shape_id(), STRING.shape_id());
        assert_eq!(STRING_MEMBER.member_name(), Some("member"));
        assert_eq!(STRING_MEMBER.location_name(), Some("member"));
    }

    #[test]
    fn test_all_prelude_types() {
        assert_eq!(BOOLEAN.shape_type(), ShapeType::Boolean);
        assert_eq!(INTEGER.shape_type(), ShapeType::Integer);
        assert_eq!(LONG.shape_type(), ShapeType::Long);
        assert_eq!(BLOB.shape_type(), ShapeType::Blob);
        assert!(BLOB.is_blob());
        assert_eq!(TIMESTAMP.shape_type(), ShapeType::Timestamp);
    }
}
