/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Primitive types used by the ACM model.

pub use smithy_types::{Blob, DateTime, TrackedList};

/// Opaque struct used as inner data for the `Unknown` variant of enums.
///
/// Holds the original text of a value this version of the model does not recognize.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownVariantValue(pub(crate) String);

impl UnknownVariantValue {
    /// Returns the raw text of the unrecognized value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
