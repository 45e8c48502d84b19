/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::field::MarshallLocation;
use crate::{ShapeId, ShapeType};
use smithy_types::date_time::Format;

/// Core trait representing a Smithy schema at runtime.
///
/// A schema is a lightweight runtime representation of a Smithy shape: its ID, its type,
/// and the wire metadata a marshaller needs to place it.
pub trait Schema: Send + Sync {
    /// Returns the Shape ID of this schema.
    fn shape_id(&self) -> &ShapeId;

    /// Returns the shape type.
    fn shape_type(&self) -> ShapeType;

    /// Returns the member name if this is a member schema.
    fn member_name(&self) -> Option<&str> {
        None
    }

    /// Returns where on the wire a member is placed.
    fn location(&self) -> Option<MarshallLocation> {
        None
    }

    /// Returns the name a member is serialized under.
    fn location_name(&self) -> Option<&str> {
        self.member_name()
    }

    /// Returns true if values of this shape must be redacted from human-readable output.
    fn is_sensitive(&self) -> bool {
        false
    }

    /// Returns the element schema for lists.
    fn member(&self) -> Option<&dyn Schema> {
        None
    }

    /// Returns the wire format of timestamp members.
    fn timestamp_format(&self) -> Option<Format> {
        None
    }
}

/// Helper methods for Schema trait.
pub trait SchemaExt: Schema {
    /// Returns true if this is a member schema.
    fn is_member(&self) -> bool {
        self.shape_type().is_member()
    }

    /// Returns true if this is a structure schema.
    fn is_structure(&self) -> bool {
        self.shape_type() == ShapeType::Structure
    }

    /// Returns true if this is a list schema.
    fn is_list(&self) -> bool {
        self.shape_type() == ShapeType::List
    }

    /// Returns true if this is a blob schema.
    fn is_blob(&self) -> bool {
        self.shape_type() == ShapeType::Blob
    }

    /// Returns true if this is a string schema.
    fn is_string(&self) -> bool {
        self.shape_type() == ShapeType::String
    }
}

impl<T: Schema + ?Sized> SchemaExt for T {}

/// Schema of a model structure.
#[derive(Debug)]
pub struct StructureSchema {
    id: ShapeId,
}

impl StructureSchema {
    /// Creates a new structure schema.
    pub const fn new(id: ShapeId) -> Self {
        Self { id }
    }
}

impl Schema for StructureSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Structure
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape_id;

    static TAG: StructureSchema = StructureSchema::new(shape_id!("com.amazonaws.acm", "Tag"));

    #[test]
    fn structure_schema_defaults() {
        assert_eq!(TAG.shape_id().as_str(), "com.amazonaws.acm#Tag");
        assert!(TAG.is_structure());
        assert!(!TAG.is_member());
        assert_eq!(TAG.member_name(), None);
        assert_eq!(TAG.location_name(), None);
        assert!(!TAG.is_sensitive());
        assert!(TAG.member().is_none());
    }
}
