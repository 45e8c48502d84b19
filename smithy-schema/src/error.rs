/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::MarshallingType;

/// Failure to read or write a member through its field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldValueError {
    /// The stored or supplied value is not of the kind the caller asked for.
    #[error(
        "member `{}` holds a {found} value, which cannot be viewed as {expected}",
        .member.unwrap_or("<unnamed>")
    )]
    TypeMismatch {
        /// Wire name of the member, when known.
        member: Option<&'static str>,
        /// The kind that was requested.
        expected: MarshallingType,
        /// The kind that was found.
        found: &'static str,
    },
}

impl FieldValueError {
    pub(crate) fn type_mismatch(expected: MarshallingType, found: &'static str) -> Self {
        FieldValueError::TypeMismatch {
            member: None,
            expected,
            found,
        }
    }

    /// Attaches the member name to an error raised below the descriptor level.
    ///
    /// A member name that is already present is kept, so the innermost member is reported.
    pub fn for_member(self, name: &'static str) -> Self {
        match self {
            FieldValueError::TypeMismatch {
                member,
                expected,
                found,
            } => FieldValueError::TypeMismatch {
                member: member.or(Some(name)),
                expected,
                found,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::FieldValueError;
    use crate::MarshallingType;

    #[test]
    fn display_names_the_member() {
        let err = FieldValueError::type_mismatch(MarshallingType::Integer, "string");
        assert_eq!(
            err.to_string(),
            "member `<unnamed>` holds a string value, which cannot be viewed as Integer"
        );
        let err = err.for_member("MaxItems").for_member("Outer");
        assert_eq!(
            err.to_string(),
            "member `MaxItems` holds a string value, which cannot be viewed as Integer"
        );
    }
}
