/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Enumeration of the Smithy shape types model members are built from.
///
/// Enum-valued members are modeled as strings on the wire, so there is no separate enum type here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    // Simple types
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// UTF-8 string
    String,
    /// Binary data
    Blob,
    /// Timestamp
    Timestamp,

    // Aggregate types
    /// List type
    List,
    /// Structure type
    Structure,

    // Member
    /// Member shape
    Member,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Integer
                | Self::Long
                | Self::String
                | Self::Blob
                | Self::Timestamp
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Structure)
    }

    /// Returns true if this is a member type.
    #[inline]
    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member)
    }
}

#[cfg(test)]
mod test {
    use super::ShapeType;

    #[test]
    fn test_shape_type_classes() {
        assert!(ShapeType::String.is_simple());
        assert!(ShapeType::Timestamp.is_simple());
        assert!(!ShapeType::Structure.is_simple());
        assert!(ShapeType::List.is_aggregate());
        assert!(!ShapeType::Blob.is_aggregate());
        assert!(ShapeType::Member.is_member());
        assert!(!ShapeType::Member.is_simple());
    }
}
