/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime schema and field descriptor registry for model types.
//!
//! Every model structure declares a static, ordered table of [`SdkField`] descriptors. The table
//! carries each member's wire name, wire location and marshalling type, together with a getter and a
//! setter. Generic code (marshallers, reflective lookups, tests) walks the table instead of relying
//! on per-type hand-written logic.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod error;
mod field;
mod pojo;
mod schema;
mod shape_id;
mod shape_type;
mod value;

pub mod prelude;
pub mod serde;

pub use error::FieldValueError;
pub use field::{Getter, MarshallLocation, MarshallingType, SdkField, Setter};
pub use pojo::{SdkPojo, SdkStruct};
pub use schema::{Schema, SchemaExt, StructureSchema};
pub use shape_id::ShapeId;
pub use shape_type::ShapeType;
pub use value::{FieldInput, FieldValue, FromFieldValue};

/// Builds a [`ShapeId`] at compile time from its namespace, shape name and optional member name.
///
/// ```
/// use smithy_schema::shape_id;
///
/// let id = shape_id!("com.amazonaws.acm", "Tag", "Key");
/// assert_eq!(id.as_str(), "com.amazonaws.acm#Tag$Key");
/// assert_eq!(id.member_name(), Some("Key"));
/// ```
#[macro_export]
macro_rules! shape_id {
    ($namespace:literal, $shape:literal) => {
        $crate::ShapeId::from_static(concat!($namespace, "#", $shape), $namespace, $shape)
    };
    ($namespace:literal, $shape:literal, $member:literal) => {
        $crate::ShapeId::from_static_member(
            concat!($namespace, "#", $shape, "$", $member),
            $namespace,
            $shape,
            $member,
        )
    };
}

#[cfg(test)]
mod test_util;
