/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

/// A Smithy Shape ID.
///
/// Shape IDs uniquely identify shapes in a Smithy model.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId {
    value: &'static str,
    namespace: &'static str,
    shape_name: &'static str,
    member_name: Option<&'static str>,
}

impl ShapeId {
    /// Creates a ShapeId for a top-level shape from pre-split static parts.
    ///
    /// Prefer the [`shape_id!`](crate::shape_id) macro, which keeps the parts consistent.
    pub const fn from_static(
        value: &'static str,
        namespace: &'static str,
        shape_name: &'static str,
    ) -> Self {
        Self {
            value,
            namespace,
            shape_name,
            member_name: None,
        }
    }

    /// Creates a ShapeId for a member shape from pre-split static parts.
    pub const fn from_static_member(
        value: &'static str,
        namespace: &'static str,
        shape_name: &'static str,
        member_name: &'static str,
    ) -> Self {
        Self {
            value,
            namespace,
            shape_name,
            member_name: Some(member_name),
        }
    }

    /// Parses a static shape id string.
    ///
    /// Returns `None` if the value has no namespace separator.
    pub fn parse(value: &'static str) -> Option<Self> {
        let (namespace, rest) = value.split_once('#')?;
        Some(match rest.split_once('$') {
            Some((shape_name, member)) => Self::from_static_member(value, namespace, shape_name, member),
            None => Self::from_static(value, namespace, rest),
        })
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &'static str {
        self.value
    }

    /// Returns the namespace portion of the ShapeId.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&'static str> {
        self.member_name
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let id = ShapeId::parse("smithy.api#String").unwrap();
        assert_eq!(id.namespace(), "smithy.api");
        assert_eq!(id.shape_name(), "String");
        assert_eq!(id.member_name(), None);

        let id = ShapeId::parse("com.amazonaws.acm#Tag$Value").unwrap();
        assert_eq!(id.namespace(), "com.amazonaws.acm");
        assert_eq!(id.shape_name(), "Tag");
        assert_eq!(id.member_name(), Some("Value"));

        assert_eq!(ShapeId::parse("NoNamespace"), None);
    }

    #[test]
    fn test_macro_matches_parse() {
        assert_eq!(
            crate::shape_id!("com.amazonaws.acm", "Tag", "Value"),
            ShapeId::parse("com.amazonaws.acm#Tag$Value").unwrap()
        );
        assert_eq!(
            crate::shape_id!("com.amazonaws.acm", "Tag").to_string(),
            "com.amazonaws.acm#Tag"
        );
    }
}
