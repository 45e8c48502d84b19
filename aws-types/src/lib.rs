/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Cross-cutting types attached to every AWS request and response model.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod request_config;
pub mod request_id;
pub mod response;

pub use request_config::{ApiName, RequestOverrideConfiguration};
pub use request_id::RequestId;
pub use response::ResponseMetadata;
