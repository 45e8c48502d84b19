/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request IDs returned by AWS services.

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID, or `None` if the service could not be reached.
    fn request_id(&self) -> Option<&str>;
}

impl<T: RequestId> RequestId for Option<T> {
    fn request_id(&self) -> Option<&str> {
        self.as_ref().and_then(RequestId::request_id)
    }
}

impl<T: RequestId, E> RequestId for Result<T, E> {
    fn request_id(&self) -> Option<&str> {
        self.as_ref().ok().and_then(RequestId::request_id)
    }
}
