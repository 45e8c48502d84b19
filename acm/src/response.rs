/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Behavior shared by every ACM response and its builder.

use aws_types::{RequestId, ResponseMetadata};
use smithy_schema::SdkPojo;

/// A response returned by ACM.
///
/// Metadata about the call that produced the response is carried alongside the modeled
/// members. It takes part in equality and hashing but is never part of the field registry.
pub trait AcmResponse: SdkPojo + RequestId {
    /// Metadata of the call that produced this response, if any was recorded.
    fn response_metadata(&self) -> Option<&ResponseMetadata>;
}

/// A builder of an [`AcmResponse`].
pub trait AcmResponseBuilder: Sized {
    /// Replaces the response metadata.
    fn set_response_metadata(self, input: Option<ResponseMetadata>) -> Self;

    /// The response metadata currently held by this builder.
    fn get_response_metadata(&self) -> &Option<ResponseMetadata>;

    /// Sets the response metadata.
    fn response_metadata(self, input: ResponseMetadata) -> Self {
        self.set_response_metadata(Some(input))
    }
}
